//! Polynomials over GF(256).
//!
//! Coefficients are stored highest degree first, this matches the byte
//! order of a codeword: the first byte is the coefficient of the highest
//! power of x. Leading zero coefficients are always stripped, so the zero
//! polynomial is the empty sequence and two polynomials are equal iff their
//! coefficients are.
use alloc::{vec, vec::Vec};
use core::fmt;
use core::ops::{Add, Mul, Sub};

use crate::error::DivisionByZero;
use crate::galois::GF;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Poly {
    coeffs: Vec<GF>,
}

fn strip_leading_zeros(c: &[GF]) -> &[GF] {
    let start = c.iter().take_while(|x| x.is_zero()).count();
    &c[start..]
}

impl Poly {
    pub fn new(mut coeffs: Vec<GF>) -> Self {
        let zeros = coeffs.iter().take_while(|x| x.is_zero()).count();
        coeffs.drain(..zeros);
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![] }
    }

    pub fn one() -> Self {
        Self::monomial(GF(1), 0)
    }

    /// The polynomial c * x^degree.
    pub fn monomial(c: GF, degree: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![GF(0); degree + 1];
        coeffs[0] = c;
        Self { coeffs }
    }

    /// Interpret bytes as coefficients, the first byte is the highest degree.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().map(|b| GF(*b)).collect()
    }

    /// Convert back to bytes, left-padded with zeros to `len` bytes.
    ///
    /// Returns `None` if the polynomial has more than `len` coefficients.
    pub fn to_bytes(&self, len: usize) -> Option<Vec<u8>> {
        let pad = len.checked_sub(self.coeffs.len())?;
        let mut out = Vec::with_capacity(len);
        out.resize(pad, 0);
        out.extend(self.coeffs.iter().map(|c| c.0));
        Some(out)
    }

    pub fn coefficients(&self) -> &[GF] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// The coefficient of x^power.
    pub fn coefficient(&self, power: usize) -> GF {
        match self.coeffs.len().checked_sub(power + 1) {
            Some(i) => self.coeffs[i],
            None => GF(0),
        }
    }

    pub fn scale(&self, c: GF) -> Self {
        Self::new(self.coeffs.iter().map(|a| *a * c).collect())
    }

    /// Multiply by x^n.
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + n);
        coeffs.extend_from_slice(&self.coeffs);
        coeffs.resize(self.coeffs.len() + n, GF(0));
        Self { coeffs }
    }

    /// Keep only the terms of degree < n, i.e. reduce modulo x^n.
    pub fn truncate(&self, n: usize) -> Self {
        let start = self.coeffs.len().saturating_sub(n);
        Self::new(self.coeffs[start..].to_vec())
    }

    /// Evaluate at x with Horner's method.
    pub fn evaluate(&self, x: GF) -> GF {
        self.coeffs.iter().fold(GF(0), |acc, c| acc * x + *c)
    }

    /// The formal derivative.
    ///
    /// The coefficient of x^k is multiplied by k, which in characteristic 2
    /// keeps the odd powers and removes the even ones.
    pub fn derivative(&self) -> Self {
        let n = self.coeffs.len();
        if n <= 1 {
            return Self::zero();
        }
        // notice that c is multiplied with usize, this is NOT multiplication
        // in GF, see Mul<usize> implementation for GF.
        Self::new(
            self.coeffs[..n - 1]
                .iter()
                .enumerate()
                .map(|(i, c)| *c * (n - 1 - i))
                .collect(),
        )
    }

    /// Polynomial long division, returns quotient and remainder.
    ///
    /// The remainder has a smaller degree than the divisor. Fails if the
    /// divisor is the zero polynomial.
    pub fn divmod<D>(&self, divisor: &D) -> Result<(Poly, Poly), DivisionByZero>
    where
        D: AsRef<[GF]> + ?Sized,
    {
        let divisor = strip_leading_zeros(divisor.as_ref());
        let lead_inv = divisor.first().ok_or(DivisionByZero)?.inverse()?;
        if self.coeffs.len() < divisor.len() {
            return Ok((Poly::zero(), self.clone()));
        }

        // Eliminate the leading term of the running remainder step by step.
        // The slot of each eliminated term is reused to store the quotient
        // coefficient, what is left at the end is the remainder.
        let mut work = self.coeffs.clone();
        let quotient_len = work.len() - divisor.len() + 1;
        for i in 0..quotient_len {
            let factor = work[i] * lead_inv;
            work[i] = factor;
            if factor.is_zero() {
                continue;
            }
            for (w, d) in work[i + 1..i + divisor.len()]
                .iter_mut()
                .zip(divisor[1..].iter())
            {
                *w -= factor * *d;
            }
        }
        let remainder = work.split_off(quotient_len);
        Ok((Poly::new(work), Poly::new(remainder)))
    }
}

impl AsRef<[GF]> for Poly {
    fn as_ref(&self) -> &[GF] {
        &self.coeffs
    }
}

impl FromIterator<GF> for Poly {
    fn from_iter<I: IntoIterator<Item = GF>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Poly")?;
        f.debug_list().entries(self.coeffs.iter().map(|c| c.0)).finish()
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (&self.coeffs, &rhs.coeffs)
        } else {
            (&rhs.coeffs, &self.coeffs)
        };
        let mut out = long.clone();
        let offset = long.len() - short.len();
        for (o, s) in out[offset..].iter_mut().zip(short.iter()) {
            *o += *s;
        }
        Poly::new(out)
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut out = vec![GF(0); len];
        for (o, a) in out[len - self.coeffs.len()..]
            .iter_mut()
            .zip(self.coeffs.iter())
        {
            *o = *a;
        }
        for (o, b) in out[len - rhs.coeffs.len()..]
            .iter_mut()
            .zip(rhs.coeffs.iter())
        {
            *o -= *b;
        }
        Poly::new(out)
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut out = vec![GF(0); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (o, b) in out[i..].iter_mut().zip(rhs.coeffs.iter()) {
                *o += *a * *b;
            }
        }
        Poly::new(out)
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn poly(c: &[u8]) -> Poly {
    Poly::from_bytes(c)
}

#[test]
fn test_trim_and_degree() {
    let p = poly(&[0, 0, 5, 0, 1]);
    assert_eq!(p.coefficients(), &[GF(5), GF(0), GF(1)]);
    assert_eq!(p.degree(), Some(2));
    assert_eq!(p.coefficient(2), GF(5));
    assert_eq!(p.coefficient(0), GF(1));
    assert_eq!(p.coefficient(7), GF(0));
    assert_eq!(poly(&[0, 0]), Poly::zero());
    assert_eq!(Poly::zero().degree(), None);
    assert_eq!(Poly::one().degree(), Some(0));
}

#[test]
fn test_to_bytes_pads() {
    let p = poly(&[0, 0, 7, 9]);
    assert_eq!(p.to_bytes(4), Some(vec![0, 0, 7, 9]));
    assert_eq!(p.to_bytes(2), Some(vec![7, 9]));
    assert_eq!(p.to_bytes(1), None);
    assert_eq!(Poly::zero().to_bytes(3), Some(vec![0, 0, 0]));
}

#[test]
fn test_add_sub() {
    let a = poly(&[1, 2, 3]);
    let b = poly(&[7, 3]);
    assert_eq!(&a + &b, poly(&[1, 5, 0]));
    assert_eq!(&a - &b, &a + &b);
    assert_eq!(&a - &a, Poly::zero());
    // cancelling leading terms lowers the degree
    assert_eq!(&a + &poly(&[1, 0, 0]), poly(&[2, 3]));
    assert_eq!(&Poly::zero() + &b, b);
}

#[test]
fn test_mul() {
    // (x + 1)(x + 1) = x^2 + 1
    assert_eq!(&poly(&[1, 1]) * &poly(&[1, 1]), poly(&[1, 0, 1]));
    // (x + 3)(x + 5) = x^2 + 6x + 15
    assert_eq!(&poly(&[1, 3]) * &poly(&[1, 5]), poly(&[1, 6, 15]));
    assert_eq!(&poly(&[4, 1]) * &Poly::zero(), Poly::zero());
    let p = poly(&[9, 200, 1, 77]);
    let q = poly(&[3, 0, 18]);
    assert_eq!((&p * &q).degree(), Some(5));
    assert_eq!(&p * &q, &q * &p);
}

#[test]
fn test_divmod_identity() {
    let dividend = poly(&[12, 200, 3, 0, 91, 14, 77, 1, 250]);
    for divisor in [
        poly(&[1]),
        poly(&[5, 1]),
        poly(&[99, 0, 13]),
        poly(&[1, 2, 3, 4, 5]),
        poly(&[8, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
    ] {
        let (q, r) = dividend.divmod(&divisor).unwrap();
        assert_eq!(&(&divisor * &q) + &r, dividend, "divisor {:?}", divisor);
        assert!(r.degree() < divisor.degree(), "divisor {:?}", divisor);
    }
}

#[test]
fn test_divmod_exact() {
    let a = poly(&[1, 3]);
    let b = poly(&[1, 5, 9]);
    let (q, r) = (&a * &b).divmod(&b).unwrap();
    assert_eq!(q, a);
    assert_eq!(r, Poly::zero());
}

#[test]
fn test_divmod_by_zero() {
    let a = poly(&[1, 3]);
    assert_eq!(a.divmod(&Poly::zero()), Err(DivisionByZero));
    assert_eq!(a.divmod(&[GF(0), GF(0)][..]), Err(DivisionByZero));
    // leading zeros of a raw divisor are ignored
    assert_eq!(a.divmod(&[GF(0), GF(1), GF(3)][..]), Ok((Poly::one(), Poly::zero())));
}

#[test]
fn test_evaluate() {
    let p = poly(&[1, 0, 1]);
    assert_eq!(p.evaluate(GF(0)), GF(1));
    assert_eq!(p.evaluate(GF(1)), GF(0));
    assert_eq!(p.evaluate(GF(3)), GF(5) + GF(1));
    assert_eq!(Poly::zero().evaluate(GF(17)), GF(0));
}

#[test]
fn test_derivative() {
    // d/dx (x^4 + 2x^3 + 3x^2 + 4x + 5) = 2x^2 + 4 in characteristic 2
    let p = poly(&[1, 2, 3, 4, 5]);
    assert_eq!(p.derivative(), poly(&[2, 0, 4]));
    assert_eq!(poly(&[7]).derivative(), Poly::zero());
    assert_eq!(poly(&[6, 7]).derivative(), poly(&[6]));
}

#[test]
fn test_shift_truncate_scale() {
    let p = poly(&[4, 5, 6]);
    assert_eq!(p.shift(2), poly(&[4, 5, 6, 0, 0]));
    assert_eq!(p.shift(2).truncate(2), Poly::zero());
    assert_eq!(p.truncate(2), poly(&[5, 6]));
    assert_eq!(p.truncate(10), p);
    assert_eq!(p.scale(GF(1)), p);
    assert_eq!(p.scale(GF(0)), Poly::zero());
    assert_eq!(Poly::monomial(GF(3), 2), poly(&[3, 0, 0]));
    assert_eq!(&p * &Poly::monomial(GF(1), 3), p.shift(3));
}

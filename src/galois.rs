//! This module contains the implementation of the GF(256) arithmetic used by
//! the Reed-Solomon code.
//!
//! An element of GF(256) is represented by an u8 (8bit integer) value. Its
//! bits correspond to the coefficients of a degree 7 polynomial with the least
//! significand bit being the coefficient for 1. For example:
//!
//! > 83 = 0b01010011 = x^6 + x^4 + x + 1.
//!
//! Addition is done coefficient by coefficient, which for bits is XOR.
//! Every element is its own additive inverse, so subtraction and addition
//! coincide.
//!
//! Multiplication is defined modulo the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). For this polynomial x itself is not
//! a generator of the multiplicative group, but x + 1 (the element 3) is.
//! So the powers 3^0, 3^1, ..., 3^254 run through all non-zero elements and
//! any of them can be identified with its exponent i. Then
//! a * b = 3^i * 3^j = 3^(i + j), and the inverse lookup of 3^(i + j) gives
//! the product. The two lookup tables are called LOG and ANTI_LOG.
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::DivisionByZero;

/// The irreducible polynomial x^8 + x^4 + x^3 + x + 1.
pub const IRREDUCIBLE_POLY: u16 = 0x11B;

/// The primitive element α used for the tables and the generator polynomial.
pub const PRIMITIVE_ELEMENT: u8 = 3;

/// Size of the multiplicative group.
const ORDER: usize = 255;

/// Compute two lookup tables for GF(256).
const fn compute_alog_log() -> ([u8; ORDER], [u8; 256]) {
    let mut alog = [0u8; ORDER];
    let mut log = [0u8; 256];
    let mut p: u16 = 1; // polynomial representation
    let mut i = 0;
    while i < ORDER {
        alog[i] = p as u8;
        log[p as usize] = i as u8;

        // p * 3 = p * x + p, reduce the p * x part if it overflows
        let mut px = p << 1;
        if px >= 256 {
            px ^= IRREDUCIBLE_POLY;
        }
        p = px ^ p;

        i += 1;
    }
    (alog, log)
}

/// Lookup table to convert element from GF(256) represented as power i of
/// the generator 3 to a polynomial of degree 7.
const ANTI_LOG: [u8; ORDER] = compute_alog_log().0;

/// Lookup table to convert an element from GF(256) represented as a degree 7 polynomial
/// to a power i for the generator 3.
const LOG: [u8; 256] = compute_alog_log().1;

/// Field product usable in const context.
pub(crate) const fn product(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let i = (LOG[a as usize] as usize + LOG[b as usize] as usize) % ORDER;
    ANTI_LOG[i]
}

/// An element of GF(256).
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GF(pub u8);

impl GF {
    pub const ZERO: GF = GF(0);
    pub const ONE: GF = GF(1);

    /// Return α^i, the exponent is taken modulo 255.
    pub const fn primitive_power(i: usize) -> Self {
        GF(ANTI_LOG[i % ORDER])
    }

    /// Return α^(-i).
    pub const fn inverse_primitive_power(i: usize) -> Self {
        GF(ANTI_LOG[(ORDER - i % ORDER) % ORDER])
    }

    /// Return the exponent i with α^i = self.
    ///
    /// # Panics
    ///
    /// Panics if self is zero.
    pub fn log(self) -> usize {
        assert!(self != GF(0), "log of 0");
        LOG[self.0 as usize] as usize
    }

    /// Raise to the n-th power, 0^0 is 1.
    pub fn pow(self, n: usize) -> Self {
        if n == 0 {
            return GF(1);
        }
        if self.0 == 0 {
            return GF(0);
        }
        let i = LOG[self.0 as usize] as usize * (n % ORDER);
        GF(ANTI_LOG[i % ORDER])
    }

    /// Multiplicative inverse.
    pub fn inverse(self) -> Result<Self, DivisionByZero> {
        if self.0 == 0 {
            return Err(DivisionByZero);
        }
        let i = LOG[self.0 as usize] as usize;
        Ok(GF(ANTI_LOG[(ORDER - i) % ORDER]))
    }

    /// Division which reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivisionByZero> {
        if rhs.0 == 0 {
            return Err(DivisionByZero);
        }
        Ok(self / rhs)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for GF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!("{}₂₅₆", self.0))
    }
}

impl Add<GF> for GF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        GF(self.0 ^ rhs.0)
    }
}

impl AddAssign<GF> for GF {
    fn add_assign(&mut self, rhs: GF) {
        *self = *self + rhs;
    }
}

impl Sub<GF> for GF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl SubAssign<GF> for GF {
    fn sub_assign(&mut self, rhs: GF) {
        *self = *self - rhs;
    }
}

impl Mul<GF> for GF {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        GF(product(self.0, rhs.0))
    }
}

impl Mul<usize> for GF {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self {
        // Multiplication with usize is interpretated as
        // n-times addition. Because elements are their own additive inverse
        // we only check if the numer of addition is even or odd.
        GF(self.0 * (rhs % 2) as u8)
    }
}

impl MulAssign<GF> for GF {
    fn mul_assign(&mut self, rhs: GF) {
        *self = *self * rhs;
    }
}

impl Div<GF> for GF {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero, use [GF::checked_div] where the divisor
    /// is not known to be non-zero.
    fn div(self, rhs: Self) -> Self {
        assert_ne!(rhs.0, 0, "division by zero");
        if self.0 == 0 {
            return GF(0);
        }
        let ia = LOG[self.0 as usize] as usize;
        let ib = LOG[rhs.0 as usize] as usize;
        GF(ANTI_LOG[(ia + ORDER - ib) % ORDER])
    }
}

impl DivAssign<GF> for GF {
    fn div_assign(&mut self, rhs: GF) {
        *self = *self / rhs;
    }
}

impl Neg for GF {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0)
    }
}

impl From<GF> for u8 {
    fn from(x: GF) -> u8 {
        x.0
    }
}

impl From<u8> for GF {
    fn from(i: u8) -> Self {
        GF(i)
    }
}

impl Sum for GF {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GF(0), |a, b| a + b)
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
use alloc::{collections::BTreeSet, vec::Vec};

#[test]
fn sanity_check_tables() {
    let anti_log: BTreeSet<u8> = ANTI_LOG.iter().cloned().collect();
    assert_eq!(anti_log.len(), ANTI_LOG.len());
    assert!(!anti_log.contains(&0));

    let log: BTreeSet<u8> = LOG[1..].iter().cloned().collect();
    assert_eq!(log.len(), LOG.len() - 1);

    for i in 0..255 {
        assert_eq!(i, LOG[ANTI_LOG[i] as usize] as usize);
        assert_eq!(i + 1, ANTI_LOG[LOG[i + 1] as usize] as usize);
    }
}

#[test]
fn first_powers_of_three() {
    let powers: Vec<u8> = (0..10).map(|i| GF::primitive_power(i).0).collect();
    assert_eq!(powers, [1, 3, 5, 15, 17, 51, 85, 255, 26, 46]);
    assert_eq!(GF::primitive_power(255), GF(1));
    assert_eq!(GF(2).log(), 25);
}

#[test]
fn gf256_mul() {
    assert_eq!(GF(123) * GF(1), GF(123));
    assert_eq!(GF(234) * GF(0), GF(0));
    assert_eq!(GF(0) * GF(23), GF(0));
    assert_eq!(GF(3) * GF(3), GF(5));
    assert_eq!(GF(0x53) * GF(0xCA), GF(1));
    assert_eq!(GF(2) * GF(4) * GF(8) * GF(16) * GF(32), GF(47));
}

#[test]
fn gf256_div_mul() {
    for a in 0..=255 {
        for b in 1..=255 {
            let a_div_b = GF(a) / GF(b);
            assert_eq!(a_div_b * GF(b), GF(a));
            assert_eq!(GF(a).checked_div(GF(b)), Ok(a_div_b));
        }
    }
}

#[test]
fn gf256_inverse() {
    for a in 1..=255 {
        let inv = GF(a).inverse().unwrap();
        assert_eq!(GF(a) * inv, GF(1), "{:?}", GF(a));
    }
    assert_eq!(GF(3).inverse(), Ok(GF(246)));
    assert_eq!(GF(0).inverse(), Err(DivisionByZero));
    assert_eq!(GF(7).checked_div(GF(0)), Err(DivisionByZero));
}

#[test]
fn gf256_add_is_own_inverse() {
    for a in 0..=255 {
        assert_eq!(GF(a) + GF(a), GF(0));
        assert_eq!(GF(a) - GF(a), GF(0));
    }
}

#[test]
fn gf256_distributive() {
    for a in (0..=255).step_by(7) {
        for b in (0..=255).step_by(5) {
            for c in (0..=255).step_by(11) {
                let (a, b, c) = (GF(a), GF(b), GF(c));
                assert_eq!(a * (b + c), a * b + a * c);
                assert_eq!((a * b) * c, a * (b * c));
                assert_eq!(a * b, b * a);
            }
        }
    }
}

#[test]
fn gf256_pow() {
    assert_eq!(GF(0).pow(0), GF(1));
    assert_eq!(GF(0).pow(5), GF(0));
    for a in 1..=255u8 {
        let mut acc = GF(1);
        for n in 0..300 {
            assert_eq!(GF(a).pow(n), acc);
            acc *= GF(a);
        }
    }
}

#[test]
fn test_primitive_power_inverse() {
    for i in 0..600 {
        let p = GF::primitive_power(i);
        assert_eq!(p * GF::inverse_primitive_power(i), GF(1));
        assert_eq!(GF(PRIMITIVE_ELEMENT).pow(i), p);
    }
}

#[test]
fn test_const_product_matches_tables() {
    for a in 0..=255 {
        for b in 0..=255 {
            assert_eq!(product(a, b), product(b, a));
        }
        assert_eq!(product(a, 1), a);
    }
}

#[test]
fn test_neg() {
    for a in 0..=255 {
        let a = GF(a);
        let ma = -a;
        assert_eq!(a + ma, GF(0), "{:?}, {:?}", a, ma);
    }
}

#[test]
fn test_mul_usize() {
    assert_eq!(GF(5) * 1, GF(5));
    assert_eq!(GF(5) * 2, GF(5) + GF(5));
    assert_eq!(GF(5) * 3, GF(5));
}

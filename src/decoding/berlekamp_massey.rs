//! The Berlekamp-Massey (BM) algorithm for finding the error locator.
//!
//! BM finds the shortest linear feedback shift register (LFSR) generating
//! the syndrome sequence. The connection polynomial of that register is the
//! error locator sigma(x) = (1 - X_1 x)...(1 - X_L x), its length L is the
//! number of errors.

use alloc::{vec, vec::Vec};

use super::syndromes::Syndromes;
use super::DecodingError;
use crate::encoding::T;
use crate::galois::GF;
use crate::poly::Poly;

/// Compute the error locator polynomial sigma and the error evaluator
/// polynomial omega from the syndromes.
///
/// omega(x) = S(x) sigma(x) mod x^L where S(x) has S_1 as constant term.
pub(crate) fn locate_errors(syndromes: &Syndromes) -> Result<(Poly, Poly), DecodingError> {
    let syn = syndromes.as_slice();
    let mut len_lfsr = 0; // current length of the LFSR
    let mut cur = vec![GF(1)]; // current connection polynomial, lowest degree first
    let mut prev = vec![GF(1)]; // connection polynomial before last length change
    let mut l = 1; // l is k - m, the amount of shift in update
    let mut discrepancy_m = GF(1); // previous discrepancy
    for k in 0..syn.len() {
        // compute discrepancy
        let discrepancy = syn[k]
            + cur
                .iter()
                .skip(1)
                .take(len_lfsr)
                .zip(syn[..k].iter().rev())
                .map(|(a, b)| *a * *b)
                .sum::<GF>();
        if discrepancy == GF(0) {
            l += 1;
            continue;
        }

        let tmp = discrepancy.checked_div(discrepancy_m)?;
        let length_change = 2 * len_lfsr <= k;
        let cur_before: Option<Vec<GF>> = length_change.then(|| cur.clone());
        if cur.len() < l + prev.len() {
            cur.resize(l + prev.len(), GF(0));
        }
        for (ci, pj) in cur[l..].iter_mut().zip(prev.iter()) {
            *ci -= tmp * *pj;
        }

        if let Some(before) = cur_before {
            len_lfsr = k + 1 - len_lfsr;
            prev = before;
            discrepancy_m = discrepancy;
            l = 1;
        } else {
            l += 1;
        }
    }

    if len_lfsr > T {
        return Err(DecodingError::TooManyErrors { degree: len_lfsr });
    }

    cur.reverse();
    let sigma = Poly::new(cur);
    let degree = sigma.degree().unwrap_or(0);
    if degree != len_lfsr {
        return Err(DecodingError::DegenerateLocator {
            degree,
            length: len_lfsr,
        });
    }

    let omega = (&syndromes.polynomial() * &sigma).truncate(len_lfsr);
    Ok((sigma, omega))
}

#[cfg(test)]
use crate::encoding::PARITY_LEN;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn error_word(errors: &[(usize, u8)]) -> Poly {
    errors.iter().fold(Poly::zero(), |e, (i, y)| {
        &e + &Poly::monomial(GF(*y), *i)
    })
}

#[test]
fn locator_of_single_error() {
    let s = Syndromes::compute(&error_word(&[(9, 77)]));
    let (sigma, omega) = locate_errors(&s).unwrap();
    let x = GF::primitive_power(9);
    assert_eq!(sigma, Poly::new(vec![x, GF(1)]));
    // omega is the constant S_1 = y X
    assert_eq!(omega, Poly::new(vec![GF(77) * x]));
}

#[test]
fn locator_is_product_of_error_factors() {
    let positions = [0, 3, 40, 41, 100, 254];
    let errors: Vec<(usize, u8)> = positions
        .iter()
        .enumerate()
        .map(|(k, i)| (*i, 11 * k as u8 + 1))
        .collect();
    let s = Syndromes::compute(&error_word(&errors));
    let (sigma, omega) = locate_errors(&s).unwrap();

    let expected = positions.iter().fold(Poly::one(), |acc, i| {
        &acc * &Poly::new(vec![GF::primitive_power(*i), GF(1)])
    });
    assert_eq!(sigma, expected);
    assert_eq!(sigma.coefficient(0), GF(1));
    assert!(omega.degree() < sigma.degree());
}

#[test]
fn locator_handles_maximum_errors() {
    let errors: Vec<(usize, u8)> = (0..T).map(|k| (k * 15 + 2, (k * 13 + 5) as u8)).collect();
    let s = Syndromes::compute(&error_word(&errors));
    let (sigma, _) = locate_errors(&s).unwrap();
    assert_eq!(sigma.degree(), Some(T));
}

#[test]
fn locator_too_long() {
    // vanishes at α^1, ..., α^31 but not at α^32, so only S_32 is non-zero
    // and the shortest register has length 32
    let word = (1..PARITY_LEN).fold(Poly::one(), |acc, i| {
        &acc * &Poly::new(vec![GF(1), GF::primitive_power(i)])
    });
    let s = Syndromes::compute(&word);
    assert!(s.as_slice()[..PARITY_LEN - 1].iter().all(|x| x.is_zero()));
    assert_eq!(
        locate_errors(&s),
        Err(DecodingError::TooManyErrors { degree: 32 })
    );
}

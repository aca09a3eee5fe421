//! Chien search for the roots of the error locator.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use super::DecodingError;
use crate::encoding::{N, T};
use crate::galois::GF;
use crate::poly::Poly;

/// A located error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ErrorLocation {
    /// Power of x with the wrong coefficient, i.e. the byte index counted
    /// from the end of the codeword.
    pub position: usize,
    /// X = α^position, sigma vanishes at its inverse.
    pub locator: GF,
}

/// Find the error locations by trying all non-zero field elements as roots
/// of sigma. Exactly deg(sigma) distinct roots must be found.
pub(crate) fn locate_roots(sigma: &Poly) -> Result<ArrayVec<ErrorLocation, T>, DecodingError> {
    let degree = sigma.degree().unwrap_or(0);
    let mut roots = ArrayVec::new();

    // gamma[j] = sigma_j α^(-ij) in step i, so the sum is sigma(α^(-i))
    let mut gamma: Vec<GF> = sigma.coefficients().iter().rev().cloned().collect();
    for i in 0..N {
        let val: GF = gamma.iter().cloned().sum();
        if val == GF(0) {
            roots
                .try_push(ErrorLocation {
                    position: i,
                    locator: GF::primitive_power(i),
                })
                .map_err(|_| DecodingError::TooManyErrors { degree })?;
        }
        for (g, alpha) in gamma
            .iter_mut()
            .zip((0..).map(GF::inverse_primitive_power))
        {
            *g *= alpha;
        }
    }

    if roots.len() != degree {
        return Err(DecodingError::RootCountMismatch {
            expected: degree,
            found: roots.len(),
        });
    }
    Ok(roots)
}

#[cfg(test)]
use alloc::vec;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn locator(positions: &[usize]) -> Poly {
    positions.iter().fold(Poly::one(), |acc, i| {
        &acc * &Poly::new(vec![GF::primitive_power(*i), GF(1)])
    })
}

#[test]
fn finds_all_positions() {
    let positions = [0, 1, 77, 200, 254];
    let roots = locate_roots(&locator(&positions)).unwrap();
    let found: Vec<usize> = roots.iter().map(|r| r.position).collect();
    assert_eq!(found, positions);
    for r in &roots {
        assert_eq!(r.locator, GF::primitive_power(r.position));
    }
}

#[test]
fn agrees_with_direct_evaluation() {
    let sigma = locator(&[5, 6, 130]);
    let roots = locate_roots(&sigma).unwrap();
    let direct: Vec<usize> = (0..N)
        .filter(|i| sigma.evaluate(GF::inverse_primitive_power(*i)).is_zero())
        .collect();
    assert_eq!(roots.iter().map(|r| r.position).collect::<Vec<_>>(), direct);
}

#[test]
fn constant_locator_has_no_roots() {
    assert_eq!(locate_roots(&Poly::one()).unwrap().len(), 0);
}

#[test]
fn repeated_root_is_a_mismatch() {
    // (1 + X x)^2 = 1 + X^2 x^2 has a single distinct root
    let x = GF::primitive_power(42);
    let sigma = Poly::new(vec![x * x, GF(0), GF(1)]);
    assert_eq!(
        locate_roots(&sigma),
        Err(DecodingError::RootCountMismatch {
            expected: 2,
            found: 1
        })
    );
}

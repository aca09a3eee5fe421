use arrayvec::ArrayVec;

use super::chien::ErrorLocation;
use super::DecodingError;
use crate::encoding::T;
use crate::galois::GF;
use crate::poly::Poly;

/// Find the error values using Forney's algorithm.
///
/// For the error locator X_k the error value is
///
/// ```text
/// Y_k = -X_k^(1-b) omega(X_k^-1) / sigma'(X_k^-1)
/// ```
///
/// where α^b is the first root of the generator polynomial. The code uses
/// b = 1, so the power of X_k drops out, and in characteristic 2 so does
/// the sign.
pub(crate) fn magnitudes(
    omega: &Poly,
    sigma: &Poly,
    locations: &[ErrorLocation],
) -> Result<ArrayVec<GF, T>, DecodingError> {
    let sigma_der = sigma.derivative();
    let mut values = ArrayVec::new();
    for loc in locations {
        let x_inv = loc.locator.inverse()?;
        let value = -omega.evaluate(x_inv).checked_div(sigma_der.evaluate(x_inv))?;
        values
            .try_push(value)
            .map_err(|_| DecodingError::TooManyErrors {
                degree: locations.len(),
            })?;
    }
    Ok(values)
}

#[cfg(test)]
use alloc::{vec, vec::Vec};

#[cfg(test)]
use crate::error::DivisionByZero;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
use super::{berlekamp_massey::locate_errors, chien::locate_roots, syndromes::Syndromes};

#[test]
fn recovers_error_values() {
    let errors = [(2, 0x01), (31, 0xff), (32, 0x80), (180, 0x3c)];
    let word = errors.iter().fold(Poly::zero(), |e, (i, y)| {
        &e + &Poly::monomial(GF(*y), *i)
    });
    let (sigma, omega) = locate_errors(&Syndromes::compute(&word)).unwrap();
    let locations = locate_roots(&sigma).unwrap();
    let values = magnitudes(&omega, &sigma, &locations).unwrap();

    let found: Vec<(usize, u8)> = locations
        .iter()
        .zip(values.iter())
        .map(|(loc, y)| (loc.position, y.0))
        .collect();
    assert_eq!(found, errors);
}

#[test]
fn single_error_value() {
    let x = GF::primitive_power(100);
    let y = GF(0x99);
    // sigma = 1 + X x, omega = S_1 = Y X
    let sigma = Poly::new(vec![x, GF(1)]);
    let omega = Poly::new(vec![y * x]);
    let location = ErrorLocation {
        position: 100,
        locator: x,
    };
    let values = magnitudes(&omega, &sigma, &[location]).unwrap();
    assert_eq!(values.as_slice(), &[y]);
}

#[test]
fn vanishing_derivative_is_an_error() {
    // sigma = 1 + X^2 x^2 has derivative zero
    let x = GF::primitive_power(7);
    let sigma = Poly::new(vec![x * x, GF(0), GF(1)]);
    let location = ErrorLocation {
        position: 7,
        locator: x,
    };
    assert_eq!(
        magnitudes(&Poly::one(), &sigma, &[location]),
        Err(DecodingError::DivisionByZero(DivisionByZero))
    );
}

//! Syndrome based error correction.
//!
//! Such a decoder is classically made of four main steps:
//!
//! 1. Compute the syndrome values.
//! 2. Compute the error locator polynomial, here with the Berlekamp-Massey
//!    algorithm, which also gives the error evaluator polynomial.
//! 3. Compute the error locations with a Chien search.
//! 4. Compute the error values with Forney's formula.
//!
//! Any inconsistency found on the way means that there were more errors than
//! the code can correct. The distinct reasons are only logged, callers get
//! [Error::Uncorrectable].
mod berlekamp_massey;
mod chien;
mod forney;
mod syndromes;

use alloc::vec::Vec;

use crate::encoding::{is_codeword, verify, N, PARITY_LEN, T};
use crate::error::{DivisionByZero, Error};
use crate::poly::Poly;
use syndromes::Syndromes;

/// Why a block could not be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DecodingError {
    #[error("error locator of degree {degree}, more than {max} errors", max = T)]
    TooManyErrors { degree: usize },

    /// The locator has a lower degree than the length of the shift register.
    #[error("error locator of degree {degree} for register length {length}")]
    DegenerateLocator { degree: usize, length: usize },

    #[error("found {found} roots of error locator, expected {expected}")]
    RootCountMismatch { expected: usize, found: usize },

    /// Error locations were found outside of a shortened codeword.
    #[error("error located at position {position} of {len} byte codeword")]
    ErrorOutsideCodeword { position: usize, len: usize },

    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),

    #[error("corrected word is not a codeword")]
    CorrectionFailed,
}

/// Decode a received codeword and return the message.
///
/// The codeword consists of the message and 32 parity bytes, as returned
/// by [encode](crate::encode). Up to 16 wrong bytes are corrected. The
/// returned message is 32 bytes shorter than the codeword.
pub fn decode(codeword: &[u8]) -> Result<Vec<u8>, Error> {
    let mut corrected = codeword.to_vec();
    correct(&mut corrected)?;
    corrected.truncate(corrected.len() - PARITY_LEN);
    Ok(corrected)
}

/// Correct errors in a codeword in-place.
///
/// Returns the number of corrected bytes, zero if the codeword was valid.
/// If the codeword can not be corrected it is left unchanged.
pub fn correct(codeword: &mut [u8]) -> Result<usize, Error> {
    let len = codeword.len();
    if !(PARITY_LEN..=N).contains(&len) {
        return Err(Error::InvalidCodewordLength { len });
    }
    if verify(codeword) {
        return Ok(0);
    }
    correct_block(codeword).map_err(|err| {
        log::debug!("uncorrectable {} byte codeword: {}", len, err);
        Error::Uncorrectable
    })
}

fn correct_block(codeword: &mut [u8]) -> Result<usize, DecodingError> {
    let len = codeword.len();
    let received = Poly::from_bytes(codeword);

    // 1. Calculate syndromes
    let syndromes = Syndromes::compute(&received);
    if syndromes.is_zero() {
        return Ok(0);
    }

    // 2. Find error locator and evaluator
    let (sigma, omega) = berlekamp_massey::locate_errors(&syndromes)?;

    // 3. Find error locations
    let locations = chien::locate_roots(&sigma)?;
    if let Some(loc) = locations.iter().find(|loc| loc.position >= len) {
        return Err(DecodingError::ErrorOutsideCodeword {
            position: loc.position,
            len,
        });
    }

    // 4. Find error values
    let values = forney::magnitudes(&omega, &sigma, &locations)?;

    // 5. Correct errors
    let error: Poly = locations
        .iter()
        .zip(values.iter())
        .fold(Poly::zero(), |e, (loc, y)| {
            &e + &Poly::monomial(*y, loc.position)
        });
    let corrected = &received - &error;
    if !is_codeword(&corrected)? {
        return Err(DecodingError::CorrectionFailed);
    }

    let bytes = corrected
        .to_bytes(len)
        .ok_or(DecodingError::CorrectionFailed)?;
    codeword.copy_from_slice(&bytes);

    log::trace!(
        "corrected {} errors at positions {:?}",
        locations.len(),
        locations
            .iter()
            .map(|loc| len - 1 - loc.position)
            .collect::<Vec<_>>()
    );
    Ok(locations.len())
}

#[cfg(test)]
use alloc::vec;

#[cfg(test)]
use crate::galois::GF;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn hello() -> Vec<u8> {
    crate::encode(b"Hello, World!").unwrap()
}

#[test]
fn decode_valid_codeword() {
    assert_eq!(decode(&hello()).unwrap(), b"Hello, World!");
    let mut codeword = hello();
    assert_eq!(correct(&mut codeword), Ok(0));
    assert_eq!(codeword, hello());
}

#[test]
fn decode_one_error() {
    for i in 0..45 {
        let mut received = hello();
        received[i] ^= 0x21;
        assert_eq!(decode(&received).unwrap(), b"Hello, World!", "error at {}", i);
    }
}

#[test]
fn correct_reports_count() {
    let mut received = hello();
    for i in [0, 5, 13, 20, 44] {
        received[i] = !received[i];
    }
    assert_eq!(correct(&mut received), Ok(5));
    assert_eq!(received, hello());
}

#[test]
fn sixteen_errors_in_full_block() {
    let message: Vec<u8> = (0..223).map(|i| (i * 7 + 1) as u8).collect();
    let codeword = crate::encode(&message).unwrap();
    let mut received = codeword.clone();
    for k in 0..T {
        received[k * 16 + 3] ^= (k + 1) as u8;
    }
    assert_eq!(decode(&received).unwrap(), message);
}

#[test]
fn seventeen_errors_are_uncorrectable() {
    let mut received = hello();
    for p in 0..17 {
        received[2 * p] ^= 0x5a;
    }
    let before = received.clone();
    assert_eq!(decode(&received), Err(Error::Uncorrectable));
    assert_eq!(correct(&mut received), Err(Error::Uncorrectable));
    assert_eq!(received, before);
}

#[test]
fn invalid_lengths() {
    assert_eq!(
        decode(&[0; 31]),
        Err(Error::InvalidCodewordLength { len: 31 })
    );
    assert_eq!(
        decode(&vec![0; 256]),
        Err(Error::InvalidCodewordLength { len: 256 })
    );
    assert_eq!(decode(&[0; 32]), Ok(vec![]));
}

#[test]
fn error_outside_shortened_codeword() {
    // y x^200 mod g has the syndromes of a single error at position 200,
    // which lies in the zero prefix of a 45 byte codeword
    let (_, ghost) = Poly::monomial(GF(0x33), 200)
        .divmod(&crate::encoding::GENERATOR)
        .unwrap();
    let received = &Poly::from_bytes(&hello()) + &ghost;
    let mut bytes = received.to_bytes(45).unwrap();
    assert_eq!(
        correct_block(&mut bytes),
        Err(DecodingError::ErrorOutsideCodeword {
            position: 200,
            len: 45
        })
    );
    assert_eq!(decode(&bytes), Err(Error::Uncorrectable));
}

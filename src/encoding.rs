//! Systematic encoding and codeword verification.
//!
//! Let m be the message polynomial and g the generator polynomial of
//! degree 32. Using euclidean polynomial division we find q and b with
//!
//! ```text
//! m(x) * x^32 = q(x) g(x) + b(x).
//! ```
//!
//! The codeword then is m(x) * x^32 - b(x) = q(x) g(x), which is divisible by
//! g. Its first bytes are the message and the last 32 bytes are -b = b, the
//! parity. Since every codeword is a multiple of g, it vanishes at the
//! roots α^1, ..., α^32 of g, which the decoder relies on.
use alloc::vec::Vec;

use crate::error::{DivisionByZero, Error};
use crate::galois::{product, GF};
use crate::poly::Poly;

/// Number of symbols in a codeword.
pub const N: usize = 255;

/// Maximum number of message symbols.
pub const K: usize = 223;

/// Number of parity symbols, also the degree of the generator polynomial.
pub const PARITY_LEN: usize = N - K;

/// Number of symbol errors which can be corrected per block.
pub const T: usize = PARITY_LEN / 2;

/// Compute g(x) = (x - α^1)(x - α^2)...(x - α^32), highest degree first.
const fn generator_coefficients() -> [GF; PARITY_LEN + 1] {
    // Computed lowest degree first, reversed at the end.
    let mut g = [0u8; PARITY_LEN + 1];
    g[0] = 1;
    let mut i = 1;
    while i <= PARITY_LEN {
        let root = GF::primitive_power(i).0;
        // g = g * x + g * root, from the top so g[j - 1] is still unchanged
        let mut j = i;
        while j > 0 {
            g[j] = g[j - 1] ^ product(g[j], root);
            j -= 1;
        }
        g[0] = product(g[0], root);
        i += 1;
    }

    let mut out = [GF(0); PARITY_LEN + 1];
    let mut k = 0;
    while k <= PARITY_LEN {
        out[k] = GF(g[PARITY_LEN - k]);
        k += 1;
    }
    out
}

/// The generator polynomial of the code, highest degree first.
pub(crate) static GENERATOR: [GF; PARITY_LEN + 1] = generator_coefficients();

/// Like [encode], but return the codeword polynomial.
pub fn encode_poly(message: &[u8]) -> Result<Poly, Error> {
    if message.len() > K {
        return Err(Error::MessageTooLong {
            len: message.len(),
            max: K,
        });
    }
    let shifted = Poly::from_bytes(message).shift(PARITY_LEN);
    let (_, parity) = shifted.divmod(&GENERATOR)?;
    Ok(&shifted - &parity)
}

/// Encode a message of at most 223 bytes.
///
/// The result is the message followed by 32 parity bytes. Leading zero
/// bytes of the message are kept, the codeword is always 32 bytes longer
/// than the message.
pub fn encode(message: &[u8]) -> Result<Vec<u8>, Error> {
    let codeword = encode_poly(message)?;
    Ok(codeword
        .to_bytes(message.len() + PARITY_LEN)
        .expect("codeword longer than message and parity, this is a bug"))
}

/// Check if `codeword` is a valid codeword, i.e. divisible by the
/// generator polynomial.
///
/// Codewords shorter than 255 bytes are treated as if prefixed with zeros.
pub fn verify(codeword: &[u8]) -> bool {
    if !(PARITY_LEN..=N).contains(&codeword.len()) {
        return false;
    }
    is_codeword(&Poly::from_bytes(codeword)).unwrap_or(false)
}

/// A polynomial is a codeword iff the generator polynomial divides it.
pub(crate) fn is_codeword(c: &Poly) -> Result<bool, DivisionByZero> {
    let (_, remainder) = c.divmod(&GENERATOR)?;
    Ok(remainder.is_zero())
}

#[cfg(test)]
use alloc::vec;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn generator_known_coefficients() {
    // computed independently with a reference implementation
    let expected = [
        1, 150, 26, 214, 33, 246, 142, 150, 8, 62, 71, 201, 144, 1, 231, 11, 112, 231, 153, 249,
        155, 184, 206, 33, 107, 60, 28, 105, 131, 30, 145, 180, 56,
    ];
    let g: Vec<u8> = GENERATOR.iter().map(|c| c.0).collect();
    assert_eq!(g, expected);
}

#[test]
fn generator_is_product_of_linear_factors() {
    let mut g = Poly::one();
    for i in 1..=PARITY_LEN {
        g = &g * &Poly::new(vec![GF(1), GF::primitive_power(i)]);
    }
    assert_eq!(g.coefficients(), &GENERATOR[..]);
    assert_eq!(g.degree(), Some(PARITY_LEN));
    for i in 1..=PARITY_LEN {
        assert_eq!(g.evaluate(GF::primitive_power(i)), GF(0), "root α^{}", i);
    }
    assert_ne!(g.evaluate(GF::primitive_power(0)), GF(0));
    assert_ne!(g.evaluate(GF::primitive_power(PARITY_LEN + 1)), GF(0));
}

#[test]
fn generator_times_parity_check_polynomial() {
    // h(x) = (x - α^33)...(x - α^255), then g * h = x^255 + 1
    let mut h = Poly::one();
    for i in PARITY_LEN + 1..=N {
        h = &h * &Poly::new(vec![GF(1), GF::primitive_power(i)]);
    }
    let g = Poly::new(GENERATOR.to_vec());
    let expected = &Poly::monomial(GF(1), N) + &Poly::one();
    assert_eq!(&g * &h, expected);
}

#[test]
fn encode_hello_world() {
    let message = b"Hello, World!";
    let codeword = encode(message).unwrap();
    assert_eq!(codeword.len(), 45);
    assert_eq!(&codeword[..13], message);
    assert_eq!(
        codeword[13..],
        [
            75, 137, 183, 174, 77, 7, 191, 21, 33, 78, 189, 19, 129, 88, 25, 159, 75, 87, 18, 212,
            9, 245, 53, 94, 22, 137, 226, 27, 248, 240, 80, 171,
        ]
    );
    assert!(verify(&codeword));
}

#[test]
fn encode_poly_is_multiple_of_generator() {
    let c = encode_poly(b"polynomial form").unwrap();
    let (q, r) = c.divmod(&GENERATOR).unwrap();
    assert_eq!(r, Poly::zero());
    assert_eq!(&q * &Poly::new(GENERATOR.to_vec()), c);
    assert_eq!(c.to_bytes(15 + PARITY_LEN).unwrap(), encode(b"polynomial form").unwrap());
}

#[test]
fn encode_limits() {
    assert_eq!(
        encode(&[0x41; K + 1]),
        Err(Error::MessageTooLong { len: 224, max: 223 })
    );
    let full = encode(&[0x41; K]).unwrap();
    assert_eq!(full.len(), N);
    assert!(verify(&full));
    assert_eq!(encode(&[]).unwrap(), vec![0; PARITY_LEN]);
}

#[test]
fn encode_keeps_leading_zeros() {
    let codeword = encode(&[0, 0, 9, 1]).unwrap();
    assert_eq!(codeword.len(), 4 + PARITY_LEN);
    assert_eq!(codeword[..4], [0, 0, 9, 1]);
    assert!(verify(&codeword));
    // the zeros don't change the parity
    assert_eq!(codeword[4..], encode(&[9, 1]).unwrap()[2..]);
}

#[test]
fn verify_rejects() {
    let mut codeword = encode(b"Hello, World!").unwrap();
    assert!(verify(&codeword));
    assert!(verify(&codeword));
    codeword[3] ^= 1;
    assert!(!verify(&codeword));
    assert!(!verify(&[0; PARITY_LEN - 1]));
    assert!(!verify(&[0; N + 1]));
    assert!(verify(&[0; N]));
}

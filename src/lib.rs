//! Reed-Solomon RS(255,223) error correction over GF(256).
//!
//! A message of at most 223 bytes is extended by 32 parity bytes to a
//! codeword of at most 255 bytes. Up to 16 corrupted bytes per codeword can
//! be corrected, more errors are detected as uncorrectable with very high
//! probability. The field is GF(2^8) defined by x^8 + x^4 + x^3 + x + 1 with
//! primitive element 3, the generator polynomial has the roots α^1, ..., α^32.
//!
//! # Example
//!
//! ```
//! let mut codeword = rs255::encode(b"Hello, World!").unwrap();
//! assert_eq!(codeword.len(), 13 + 32);
//! assert!(rs255::verify(&codeword));
//!
//! codeword[4] ^= 0xff;
//! assert!(!rs255::verify(&codeword));
//! assert_eq!(rs255::decode(&codeword).unwrap(), b"Hello, World!");
//! ```
//!
//! Codewords shorter than 255 bytes are shortened codewords, the missing
//! leading symbols are zero. This way the message length is preserved
//! exactly, including leading zero bytes. Embedding systems which handle
//! several blocks are responsible for framing and interleaving.
#![no_std]

extern crate alloc;

mod decoding;
mod encoding;
mod error;
pub mod galois;
pub mod poly;

pub use decoding::{correct, decode};
pub use encoding::{encode, encode_poly, verify, K, N, PARITY_LEN, T};
pub use error::{DivisionByZero, Error};

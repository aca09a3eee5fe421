/// A zero divisor was hit during field or polynomial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("division by zero in GF(256)")]
pub struct DivisionByZero;

/// Errors returned by [encode](crate::encode), [decode](crate::decode)
/// and [correct](crate::correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The message does not fit into one block.
    #[error("message too long: {len} bytes (max {max})")]
    MessageTooLong { len: usize, max: usize },

    /// A codeword must hold the parity bytes and at most 255 symbols.
    #[error("invalid codeword length: {len} bytes (expected 32..=255)")]
    InvalidCodewordLength { len: usize },

    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),

    /// The block has more errors than can be corrected.
    ///
    /// No data is returned in this case, the received codeword could not
    /// be reconstructed with confidence.
    #[error("codeword is uncorrectable")]
    Uncorrectable,
}

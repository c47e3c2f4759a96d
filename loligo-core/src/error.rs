//! Structured error types for the loligo ecosystem.

use thiserror::Error;

/// Unified error type for all loligo operations.
#[derive(Debug, Error)]
pub enum LoligoError {
    /// I/O error (file not found, short read, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sequence byte outside the active nucleotide alphabet
    #[error("invalid character: {0}")]
    InvalidCharacter(String),

    /// Sequence or bit-stream length that violates a codec's framing
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Recorded padding bits that are not all zero, or do not fit the data
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// Bit stream that cannot be resolved against its code table
    #[error("corrupted data: {0}")]
    CorruptedData(String),

    /// Parity rule identifier with no registered implementation
    #[error("unsupported rule: {0}")]
    UnsupportedRule(String),

    /// Structurally invalid argument (zero block size, bad parity count)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Balanced sequence whose leading signal nucleotide is unrecognized
    #[error("invalid signal: {0}")]
    InvalidSignal(String),

    /// Input too short to split into signal and payload
    #[error("input too short: {0}")]
    TooShort(String),

    /// Errors beyond what a forward-error-correction layer can repair
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// Malformed record or stream markup
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Compression or decompression failure
    #[error("compression error: {0}")]
    Compression(String),
}

/// Convenience alias used throughout the loligo ecosystem.
pub type Result<T> = std::result::Result<T, LoligoError>;

//! Error type for parameter construction, building, and decoding.

use std::fmt;

use spf_wire::{BitWidth, DeserializeError, PeekError, SerializeError};

/// The operation that rejected a bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    Plaintext,
    Encrypt,
    CiphertextArray,
    Output,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallSite::Plaintext => "plaintext",
            CallSite::Encrypt => "encrypt",
            CallSite::CiphertextArray => "ciphertext array",
            CallSite::Output => "output",
        })
    }
}

/// Errors produced by this crate.
///
/// Every failure is all-or-nothing: a builder call that returns an error
/// leaves the builder untouched, and a failed decode returns no partial data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bit width outside {8, 16, 32, 64}.
    #[error("{site}: bit_width must be 8, 16, 32, or 64, got {got}")]
    InvalidBitWidth { site: CallSite, got: u32 },

    /// A negative value declared as unsigned.
    #[error("unsigned value cannot be negative, got {value}")]
    NegativeUnsignedValue { value: i128 },

    /// A value that does not fit its bit width and signedness.
    #[error("value {value} exceeds maximum range [{min}, {max}] for bit_width {bit_width}")]
    ValueOverflow {
        value: i128,
        bit_width: BitWidth,
        min: i128,
        max: i128,
    },

    /// Ciphertext array elements disagree on bit width.
    #[error(
        "ciphertext array elements must have the same bit_width: expected {expected}, element {index} has {got}"
    )]
    MixedBitWidth {
        expected: BitWidth,
        index: usize,
        got: BitWidth,
    },

    /// A ciphertext array with no elements.
    #[error("ciphertext array cannot be empty")]
    EmptyCiphertextArray,

    /// An output declaration of size zero.
    #[error("output size must be at least 1")]
    InvalidOutputSize,

    /// `build` was called with pending encryptions but no public key.
    #[error("public_key is required to resolve {pending} pending encryption(s)")]
    MissingPublicKey { pending: usize },

    /// The envelope header is truncated or has the wrong magic bytes.
    ///
    /// Peeking and full decoding both report header failures here.
    #[error(transparent)]
    Peek(#[from] PeekError),

    /// The header is valid but its version or payload is not.
    #[error(transparent)]
    Deserialize(DeserializeError),

    /// The payload could not be encoded.
    #[error(transparent)]
    Encoding(#[from] SerializeError),

    /// Key or ciphertext bytes could not be decoded.
    #[error("failed to decode bytes: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

impl From<DeserializeError> for Error {
    fn from(err: DeserializeError) -> Self {
        match err {
            DeserializeError::Peek(e) => Error::Peek(e),
            other => Error::Deserialize(other),
        }
    }
}

impl Error {
    /// The header error behind this error, if framing rejected the input.
    pub fn peek_error(&self) -> Option<&PeekError> {
        match self {
            Error::Peek(e) => Some(e),
            _ => None,
        }
    }

    /// The unsupported version found in a header, if that is why decoding failed.
    pub fn unsupported_version(&self) -> Option<u32> {
        match self {
            Error::Deserialize(DeserializeError::UnsupportedVersion { got, .. }) => Some(*got),
            _ => None,
        }
    }
}

//! Wire types and framing for SPF program parameters and outputs.
//!
//! # Wire Format
//!
//! Parameters and outputs use a versioned binary format:
//!
//! ```text
//! [MAGIC: 4 bytes][VERSION: 4 bytes big-endian u32][PAYLOAD: msgpack bytes]
//! ```
//!
//! - **MAGIC**: File type identifier ("SPFP" for parameters, "SPFO" for outputs)
//! - **VERSION**: Protocol version as big-endian u32 (fixed 4 bytes)
//! - **PAYLOAD**: MessagePack-serialized data, exactly one value with nothing after it
//!
//! The header can be inspected on its own with [`peek_parameters_version`] and
//! [`peek_output_version`], which lets a reader tell foreign data
//! ([`PeekError::InvalidMagic`]) and truncated data ([`PeekError::TooShort`])
//! apart from an incompatible release ([`DeserializeError::UnsupportedVersion`])
//! before touching the payload.
//!
//! # Versioning Policy
//!
//! Deserializers only accept data whose version exactly matches the current
//! constant for its kind. Parameters and outputs are versioned independently.
//!
//! When the payload format changes:
//! 1. Increment the version constant
//! 2. Update serialization/deserialization logic
//! 3. Clients must upgrade to match the engine version

mod error;
mod types;
mod wire;

pub use error::{DeserializeError, PeekError, SerializeError};
use parasol_runtime::{DEFAULT_128, Params};
pub use types::{BitWidth, InvalidBitWidth, ParameterType, WireCiphertext};
pub use wire::{
    decode_exact, deserialize_outputs, deserialize_parameters, peek_output_version,
    peek_parameters_version, serialize_outputs, serialize_parameters,
};

/// Current protocol version for parameters.
pub const PARAMETERS_VERSION: u32 = 1;

/// Current protocol version for outputs.
pub const OUTPUT_VERSION: u32 = 1;

/// Magic bytes identifying SPF parameter files: "SPFP" in ASCII.
pub const PARAMETERS_MAGIC: [u8; 4] = *b"SPFP";

/// Magic bytes identifying SPF output files: "SPFO" in ASCII.
pub const OUTPUT_MAGIC: [u8; 4] = *b"SPFO";

/// Header size: 4 bytes magic + 4 bytes version.
pub const HEADER_SIZE: usize = 8;

/// Default FHE parameters (128-bit security).
pub static PARAMS: Params = DEFAULT_128;

//! Serialization and deserialization for parameters and outputs.

use log::trace;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{DeserializeError, PeekError, SerializeError};
use crate::types::{ParameterType, WireCiphertext};
use crate::{HEADER_SIZE, OUTPUT_MAGIC, OUTPUT_VERSION, PARAMETERS_MAGIC, PARAMETERS_VERSION};

/// Peek the version number from parameter bytes without full deserialization.
///
/// This reads only the header (magic bytes + version) to allow fast-fail
/// for unsupported versions without deserializing the entire payload.
pub fn peek_parameters_version(bytes: &[u8]) -> Result<u32, PeekError> {
    peek_version(bytes, &PARAMETERS_MAGIC)
}

/// Peek the version number from output bytes without full deserialization.
pub fn peek_output_version(bytes: &[u8]) -> Result<u32, PeekError> {
    peek_version(bytes, &OUTPUT_MAGIC)
}

fn peek_version(bytes: &[u8], expected_magic: &[u8; 4]) -> Result<u32, PeekError> {
    let Some((magic, rest)) = bytes.split_first_chunk::<4>() else {
        return Err(PeekError::TooShort);
    };
    let Some(version) = rest.first_chunk::<4>() else {
        return Err(PeekError::TooShort);
    };
    if magic != expected_magic {
        return Err(PeekError::InvalidMagic);
    }
    Ok(u32::from_be_bytes(*version))
}

/// Serialize parameters with magic bytes and version header.
pub fn serialize_parameters(params: &[ParameterType]) -> Result<Vec<u8>, SerializeError> {
    serialize_with_header(&PARAMETERS_MAGIC, PARAMETERS_VERSION, params)
}

/// Serialize outputs with magic bytes and version header.
pub fn serialize_outputs(outputs: &[WireCiphertext]) -> Result<Vec<u8>, SerializeError> {
    serialize_with_header(&OUTPUT_MAGIC, OUTPUT_VERSION, outputs)
}

fn serialize_with_header<T: Serialize + ?Sized>(
    magic: &[u8; 4],
    version: u32,
    payload: &T,
) -> Result<Vec<u8>, SerializeError> {
    let payload_bytes = rmp_serde::to_vec(payload)?;
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload_bytes.len());
    buf.extend_from_slice(magic);
    buf.extend_from_slice(&version.to_be_bytes());
    buf.extend_from_slice(&payload_bytes);
    trace!(
        "encoded {} payload: version {version}, {} bytes",
        String::from_utf8_lossy(magic),
        buf.len()
    );
    Ok(buf)
}

/// Deserialize parameters, validating magic bytes and version.
pub fn deserialize_parameters(bytes: &[u8]) -> Result<Vec<ParameterType>, DeserializeError> {
    let version = peek_parameters_version(bytes)?;
    deserialize_payload(bytes, version, PARAMETERS_VERSION)
}

/// Deserialize outputs, validating magic bytes and version.
pub fn deserialize_outputs(bytes: &[u8]) -> Result<Vec<WireCiphertext>, DeserializeError> {
    let version = peek_output_version(bytes)?;
    deserialize_payload(bytes, version, OUTPUT_VERSION)
}

/// Deserialize the payload following an already validated header.
fn deserialize_payload<T: DeserializeOwned>(
    bytes: &[u8],
    version: u32,
    expected: u32,
) -> Result<T, DeserializeError> {
    if version != expected {
        return Err(DeserializeError::UnsupportedVersion {
            got: version,
            expected,
        });
    }
    trace!(
        "decoding version {version} payload of {} bytes",
        bytes.len() - HEADER_SIZE
    );
    decode_exact(&bytes[HEADER_SIZE..]).map_err(DeserializeError::MalformedBody)
}

/// Decode a single MessagePack value that must span all of `bytes`.
///
/// Bytes left over after the value are an error, so a decoded payload always
/// re-encodes to the input it came from.
pub fn decode_exact<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    let mut de = rmp_serde::Deserializer::new(bytes);
    let value = T::deserialize(&mut de)?;
    let trailing = de.get_ref().len();
    if trailing != 0 {
        return Err(rmp_serde::decode::Error::Uncategorized(format!(
            "{trailing} trailing bytes after payload"
        )));
    }
    Ok(value)
}

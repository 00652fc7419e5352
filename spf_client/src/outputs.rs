//! Output deserialization for FHE program results.

use log::debug;
use spf_wire::deserialize_outputs;

use crate::ciphertext::Ciphertext;
use crate::error::Error;

/// Read output ciphertexts from an engine result.
///
/// Ciphertexts come back in the order the output entries were declared; an
/// output of size `n` contributes `n` consecutive ciphertexts.
///
/// # Errors
///
/// Fails if the "SPFO" header is missing or truncated, if the version is not
/// supported, or if the payload is not a list of ciphertexts.
pub fn read_outputs(bytes: &[u8]) -> Result<Vec<Ciphertext>, Error> {
    let outputs: Vec<Ciphertext> = deserialize_outputs(bytes)?
        .into_iter()
        .map(Ciphertext::from)
        .collect();
    debug!("Read {} output ciphertext(s)", outputs.len());
    Ok(outputs)
}

/// Peek the version number from output bytes without full deserialization.
pub fn peek_output_version(bytes: &[u8]) -> Result<u32, Error> {
    Ok(spf_wire::peek_output_version(bytes)?)
}

/// Peek the version number from parameter bytes without full deserialization.
pub fn peek_parameters_version(bytes: &[u8]) -> Result<u32, Error> {
    Ok(spf_wire::peek_parameters_version(bytes)?)
}

//! Client-side parameter building and output decoding for SPF programs.
//!
//! This crate provides key generation, encryption, and decryption on top of
//! `parasol_runtime`, a [`ParameterBuilder`] that turns job inputs into a
//! versioned [`Parameters`] payload for the engine, and [`read_outputs`] to
//! decode the engine's result back into [`Ciphertext`]s.
//!
//! ```no_run
//! use spf_client::{read_outputs, KeySet, ParameterBuilder};
//!
//! # fn run_engine(_: &[u8]) -> Vec<u8> { unimplemented!() }
//! # fn main() -> Result<(), spf_client::Error> {
//! let keys = KeySet::generate();
//! let params = ParameterBuilder::new()
//!     .encrypt(100, 8, false)?
//!     .encrypt(50, 8, false)?
//!     .output(8, 1)?
//!     .build(Some(keys.public_key()))?;
//!
//! let result = run_engine(&params.to_bytes()?);
//! let outputs = read_outputs(&result)?;
//! assert_eq!(keys.decrypt(&outputs[0], false), 150);
//! # Ok(())
//! # }
//! ```

mod builder;
mod ciphertext;
mod entry;
mod error;
mod keys;
mod outputs;
mod parameters;
mod validation;

pub use builder::ParameterBuilder;
pub use ciphertext::Ciphertext;
pub use entry::{
    CiphertextArrayParam, CiphertextParam, OutputParam, ParameterEntry, PlaintextArrayParam,
    PlaintextParam,
};
pub use error::{CallSite, Error};
pub use keys::{ComputeKey, KeySet, PublicKey, SecretKey};
pub use outputs::{peek_output_version, peek_parameters_version, read_outputs};
pub use parameters::Parameters;
pub use spf_wire::{BitWidth, DeserializeError, PeekError, SerializeError};

/// Get the current parameters version.
pub fn parameters_version() -> u32 {
    spf_wire::PARAMETERS_VERSION
}

/// Get the current output version.
pub fn output_version() -> u32 {
    spf_wire::OUTPUT_VERSION
}

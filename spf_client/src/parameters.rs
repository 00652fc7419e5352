//! Frozen job parameters and their wire serialization.

use std::ops::Index;
use std::slice;

use log::debug;
use spf_wire::{deserialize_parameters, serialize_parameters, ParameterType};

use crate::entry::ParameterEntry;
use crate::error::Error;

/// Immutable, ordered job parameters produced by
/// [`ParameterBuilder::build`](crate::ParameterBuilder::build).
///
/// Two `Parameters` are equal when their serialized bytes are identical.
#[derive(Debug, Clone)]
pub struct Parameters {
    entries: Vec<ParameterEntry>,
}

impl Parameters {
    pub(crate) fn new(entries: Vec<ParameterEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParameterEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, ParameterEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ParameterEntry] {
        &self.entries
    }

    /// Serialize with the "SPFP" header for the engine.
    ///
    /// The encoding is deterministic: the same entries always produce the
    /// same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let wire = self
            .entries
            .iter()
            .map(ParameterEntry::to_wire)
            .collect::<Result<Vec<ParameterType>, _>>()?;
        Ok(serialize_parameters(&wire)?)
    }

    /// Deserialize parameters produced by [`to_bytes`](Self::to_bytes).
    ///
    /// Decoded entries go through the same validation as built ones.
    /// Plaintext signedness is not part of the wire format; decoded
    /// plaintexts are reported as unsigned two's complement patterns.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let entries = deserialize_parameters(bytes)?
            .into_iter()
            .map(ParameterEntry::from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Decoded parameters with {} entries", entries.len());
        Ok(Self { entries })
    }
}

impl PartialEq for Parameters {
    /// Compares serialized bytes. Two values that both fail to encode compare
    /// equal, so the relation stays reflexive.
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes().ok() == other.to_bytes().ok()
    }
}

impl Eq for Parameters {}

impl Index<usize> for Parameters {
    type Output = ParameterEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a ParameterEntry;
    type IntoIter = slice::Iter<'a, ParameterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Parameter entries: the typed inputs and output declarations of a job.
//!
//! Every constructor validates its arguments, so an entry that exists is
//! always valid. Entries are immutable once built.

use std::num::NonZeroU32;

use spf_wire::{BitWidth, ParameterType};

use crate::ciphertext::Ciphertext;
use crate::error::{CallSite, Error};
use crate::validation::{check_value, check_values, parse_bit_width, to_wire_value};

/// A single already-encrypted value.
#[derive(Debug, Clone)]
pub struct CiphertextParam {
    ciphertext: Ciphertext,
}

impl CiphertextParam {
    pub fn new(ciphertext: Ciphertext) -> Self {
        Self { ciphertext }
    }

    pub fn bit_width(&self) -> BitWidth {
        self.ciphertext.bit_width()
    }

    pub fn ciphertext(&self) -> &Ciphertext {
        &self.ciphertext
    }
}

/// A non-empty array of ciphertexts sharing one bit width.
///
/// Element order matches the array indices seen by the program.
#[derive(Debug, Clone)]
pub struct CiphertextArrayParam {
    bit_width: BitWidth,
    ciphertexts: Vec<Ciphertext>,
}

impl CiphertextArrayParam {
    /// Build an array whose bit width is taken from its first element.
    pub fn new(ciphertexts: Vec<Ciphertext>) -> Result<Self, Error> {
        let bit_width = ciphertexts
            .first()
            .map(Ciphertext::bit_width)
            .ok_or(Error::EmptyCiphertextArray)?;
        Self::checked(bit_width, ciphertexts)
    }

    /// Build an array with an explicitly declared bit width.
    pub fn with_bit_width(bit_width: u32, ciphertexts: Vec<Ciphertext>) -> Result<Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::CiphertextArray)?;
        Self::checked(bit_width, ciphertexts)
    }

    /// Build from ciphertexts that were all produced at `bit_width`.
    pub(crate) fn from_homogeneous(bit_width: BitWidth, ciphertexts: Vec<Ciphertext>) -> Self {
        debug_assert!(ciphertexts.iter().all(|ct| ct.bit_width() == bit_width));
        Self {
            bit_width,
            ciphertexts,
        }
    }

    fn checked(bit_width: BitWidth, ciphertexts: Vec<Ciphertext>) -> Result<Self, Error> {
        if ciphertexts.is_empty() {
            return Err(Error::EmptyCiphertextArray);
        }
        if let Some((index, ct)) = ciphertexts
            .iter()
            .enumerate()
            .find(|(_, ct)| ct.bit_width() != bit_width)
        {
            return Err(Error::MixedBitWidth {
                expected: bit_width,
                index,
                got: ct.bit_width(),
            });
        }
        Ok(Self {
            bit_width,
            ciphertexts,
        })
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn ciphertexts(&self) -> &[Ciphertext] {
        &self.ciphertexts
    }

    pub fn len(&self) -> usize {
        self.ciphertexts.len()
    }

    /// Always false; arrays are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.ciphertexts.is_empty()
    }
}

/// A scalar sent in the clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextParam {
    bit_width: BitWidth,
    signed: bool,
    value: i128,
}

impl PlaintextParam {
    pub fn new(value: i128, bit_width: u32, signed: bool) -> Result<Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Plaintext)?;
        check_value(value, bit_width, signed)?;
        Ok(Self {
            bit_width,
            signed,
            value,
        })
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn value(&self) -> i128 {
        self.value
    }
}

/// An array of values sent in the clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextArrayParam {
    bit_width: BitWidth,
    signed: bool,
    values: Vec<i128>,
}

impl PlaintextArrayParam {
    pub fn new(values: &[i128], bit_width: u32, signed: bool) -> Result<Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Plaintext)?;
        check_values(values, bit_width, signed)?;
        Ok(Self {
            bit_width,
            signed,
            values: values.to_vec(),
        })
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn values(&self) -> &[i128] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Declares that the program writes `size` results of `bit_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputParam {
    bit_width: BitWidth,
    size: NonZeroU32,
}

impl OutputParam {
    pub fn new(bit_width: u32, size: u32) -> Result<Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Output)?;
        let size = NonZeroU32::new(size).ok_or(Error::InvalidOutputSize)?;
        Ok(Self { bit_width, size })
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn size(&self) -> u32 {
        self.size.get()
    }
}

/// One input or output declaration of a job.
///
/// The engine binds entries to program arguments by position.
#[derive(Debug, Clone)]
pub enum ParameterEntry {
    Ciphertext(CiphertextParam),
    CiphertextArray(CiphertextArrayParam),
    Plaintext(PlaintextParam),
    PlaintextArray(PlaintextArrayParam),
    Output(OutputParam),
}

impl ParameterEntry {
    pub fn bit_width(&self) -> BitWidth {
        match self {
            ParameterEntry::Ciphertext(p) => p.bit_width(),
            ParameterEntry::CiphertextArray(p) => p.bit_width(),
            ParameterEntry::Plaintext(p) => p.bit_width(),
            ParameterEntry::PlaintextArray(p) => p.bit_width(),
            ParameterEntry::Output(p) => p.bit_width(),
        }
    }

    pub fn as_ciphertext(&self) -> Option<&CiphertextParam> {
        match self {
            ParameterEntry::Ciphertext(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_ciphertext_array(&self) -> Option<&CiphertextArrayParam> {
        match self {
            ParameterEntry::CiphertextArray(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_plaintext(&self) -> Option<&PlaintextParam> {
        match self {
            ParameterEntry::Plaintext(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_plaintext_array(&self) -> Option<&PlaintextArrayParam> {
        match self {
            ParameterEntry::PlaintextArray(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Option<&OutputParam> {
        match self {
            ParameterEntry::Output(p) => Some(p),
            _ => None,
        }
    }

    /// Convert to the wire representation.
    pub(crate) fn to_wire(&self) -> Result<ParameterType, Error> {
        Ok(match self {
            ParameterEntry::Ciphertext(p) => ParameterType::Ciphertext {
                content: p.ciphertext.as_wire().clone(),
            },
            ParameterEntry::CiphertextArray(p) => ParameterType::CiphertextArray {
                contents: p
                    .ciphertexts
                    .iter()
                    .map(|ct| ct.as_wire().clone())
                    .collect(),
            },
            ParameterEntry::Plaintext(p) => ParameterType::Plaintext {
                bit_width: p.bit_width,
                value: to_wire_value(p.value, p.bit_width, p.signed)?,
            },
            ParameterEntry::PlaintextArray(p) => ParameterType::PlaintextArray {
                bit_width: p.bit_width,
                values: p
                    .values
                    .iter()
                    .map(|&v| to_wire_value(v, p.bit_width, p.signed))
                    .collect::<Result<_, _>>()?,
            },
            ParameterEntry::Output(p) => ParameterType::OutputCiphertextArray {
                bit_width: p.bit_width,
                size: p.size,
            },
        })
    }

    /// Rebuild a validated entry from its wire representation.
    ///
    /// Plaintext signedness is not carried on the wire, so decoded plaintexts
    /// are unsigned and hold the raw two's complement pattern.
    pub(crate) fn from_wire(param: ParameterType) -> Result<Self, Error> {
        Ok(match param {
            ParameterType::Ciphertext { content } => {
                ParameterEntry::Ciphertext(CiphertextParam::new(content.into()))
            }
            ParameterType::CiphertextArray { contents } => ParameterEntry::CiphertextArray(
                CiphertextArrayParam::new(contents.into_iter().map(Ciphertext::from).collect())?,
            ),
            ParameterType::OutputCiphertextArray { bit_width, size } => {
                ParameterEntry::Output(OutputParam { bit_width, size })
            }
            ParameterType::Plaintext { bit_width, value } => {
                let param = PlaintextParam::new(value.into(), bit_width.into(), false)?;
                ParameterEntry::Plaintext(param)
            }
            ParameterType::PlaintextArray { bit_width, values } => {
                let values: Vec<i128> = values.into_iter().map(i128::from).collect();
                ParameterEntry::PlaintextArray(PlaintextArrayParam::new(
                    &values,
                    bit_width.into(),
                    false,
                )?)
            }
        })
    }
}

impl From<CiphertextParam> for ParameterEntry {
    fn from(p: CiphertextParam) -> Self {
        ParameterEntry::Ciphertext(p)
    }
}

impl From<CiphertextArrayParam> for ParameterEntry {
    fn from(p: CiphertextArrayParam) -> Self {
        ParameterEntry::CiphertextArray(p)
    }
}

impl From<PlaintextParam> for ParameterEntry {
    fn from(p: PlaintextParam) -> Self {
        ParameterEntry::Plaintext(p)
    }
}

impl From<PlaintextArrayParam> for ParameterEntry {
    fn from(p: PlaintextArrayParam) -> Self {
        ParameterEntry::PlaintextArray(p)
    }
}

impl From<OutputParam> for ParameterEntry {
    fn from(p: OutputParam) -> Self {
        ParameterEntry::Output(p)
    }
}

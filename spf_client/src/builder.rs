//! Ordered accumulation of job parameters with deferred encryption.

use log::debug;
use spf_wire::BitWidth;

use crate::ciphertext::Ciphertext;
use crate::entry::{
    CiphertextArrayParam, CiphertextParam, OutputParam, ParameterEntry, PlaintextArrayParam,
    PlaintextParam,
};
use crate::error::{CallSite, Error};
use crate::keys::PublicKey;
use crate::parameters::Parameters;
use crate::validation::{parse_bit_width, to_wire_value};

/// Raw values awaiting encryption.
#[derive(Debug, Clone)]
enum PendingValues {
    Scalar(u64),
    Array(Vec<u64>),
}

/// A request to encrypt at build time.
///
/// Values are range checked and converted to their wire pattern when the
/// request is recorded; only the encryption itself is deferred.
#[derive(Debug, Clone)]
struct PendingEncryption {
    bit_width: BitWidth,
    values: PendingValues,
}

impl PendingEncryption {
    fn resolve(&self, public_key: &PublicKey) -> ParameterEntry {
        let encrypt = |value: u64| {
            Ciphertext::encrypt_with_bit_width(
                value,
                self.bit_width,
                &public_key.encryption,
                public_key,
            )
        };
        match &self.values {
            PendingValues::Scalar(value) => CiphertextParam::new(encrypt(*value)).into(),
            PendingValues::Array(values) => CiphertextArrayParam::from_homogeneous(
                self.bit_width,
                values.iter().copied().map(encrypt).collect(),
            )
            .into(),
        }
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Entry(ParameterEntry),
    Pending(PendingEncryption),
}

/// Builder for job parameters.
///
/// Entries keep the order in which they were added; that order is the
/// argument order of the program. Every method validates its input before
/// touching the builder, so a rejected call leaves it unchanged.
///
/// ```no_run
/// # use spf_client::{KeySet, ParameterBuilder};
/// # fn main() -> Result<(), spf_client::Error> {
/// let keys = KeySet::generate();
/// let params = ParameterBuilder::new()
///     .encrypt(100, 8, false)?
///     .encrypt(50, 8, false)?
///     .output(8, 1)?
///     .build(Some(keys.public_key()))?;
/// assert_eq!(params.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    slots: Vec<Slot>,
}

impl ParameterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries and pending encryptions added so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append an already constructed entry.
    pub fn push(&mut self, entry: impl Into<ParameterEntry>) -> &mut Self {
        self.slots.push(Slot::Entry(entry.into()));
        self
    }

    /// Append a pre-encrypted ciphertext.
    pub fn ciphertext(&mut self, ciphertext: Ciphertext) -> Result<&mut Self, Error> {
        Ok(self.push(CiphertextParam::new(ciphertext)))
    }

    /// Append an array of pre-encrypted ciphertexts sharing one bit width.
    pub fn ciphertext_array(&mut self, ciphertexts: Vec<Ciphertext>) -> Result<&mut Self, Error> {
        let entry = CiphertextArrayParam::new(ciphertexts)?;
        Ok(self.push(entry))
    }

    /// Append a plaintext value.
    pub fn plaintext(
        &mut self,
        value: i128,
        bit_width: u32,
        signed: bool,
    ) -> Result<&mut Self, Error> {
        let entry = PlaintextParam::new(value, bit_width, signed)?;
        Ok(self.push(entry))
    }

    /// Append a plaintext array.
    pub fn plaintext_array(
        &mut self,
        values: &[i128],
        bit_width: u32,
        signed: bool,
    ) -> Result<&mut Self, Error> {
        let entry = PlaintextArrayParam::new(values, bit_width, signed)?;
        Ok(self.push(entry))
    }

    /// Append a value to be encrypted when [`build`](Self::build) is called.
    pub fn encrypt(
        &mut self,
        value: i128,
        bit_width: u32,
        signed: bool,
    ) -> Result<&mut Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Encrypt)?;
        let value = to_wire_value(value, bit_width, signed)?;
        self.slots.push(Slot::Pending(PendingEncryption {
            bit_width,
            values: PendingValues::Scalar(value),
        }));
        Ok(self)
    }

    /// Append an array to be encrypted when [`build`](Self::build) is called.
    pub fn encrypt_array(
        &mut self,
        values: &[i128],
        bit_width: u32,
        signed: bool,
    ) -> Result<&mut Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Encrypt)?;
        if values.is_empty() {
            return Err(Error::EmptyCiphertextArray);
        }
        let values = values
            .iter()
            .map(|&v| to_wire_value(v, bit_width, signed))
            .collect::<Result<_, _>>()?;
        self.slots.push(Slot::Pending(PendingEncryption {
            bit_width,
            values: PendingValues::Array(values),
        }));
        Ok(self)
    }

    /// Declare an output buffer of `size` values of `bit_width`.
    pub fn output(&mut self, bit_width: u32, size: u32) -> Result<&mut Self, Error> {
        let entry = OutputParam::new(bit_width, size)?;
        Ok(self.push(entry))
    }

    fn pending_encryptions(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Pending(_)))
            .count()
    }

    /// Freeze the builder into [`Parameters`].
    ///
    /// Pending encryptions are resolved in place, in the order they were
    /// added, using `public_key`. The builder itself is left untouched and can
    /// be built again.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPublicKey`] if there are pending encryptions and no key
    /// was supplied.
    pub fn build(&self, public_key: Option<&PublicKey>) -> Result<Parameters, Error> {
        let pending = self.pending_encryptions();
        if pending > 0 {
            if public_key.is_none() {
                return Err(Error::MissingPublicKey { pending });
            }
            debug!("Resolving {pending} pending encryption(s)");
        }

        let entries = self
            .slots
            .iter()
            .map(|slot| match (slot, public_key) {
                (Slot::Entry(entry), _) => Ok(entry.clone()),
                (Slot::Pending(request), Some(key)) => Ok(request.resolve(key)),
                (Slot::Pending(_), None) => Err(Error::MissingPublicKey { pending }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Built parameters with {} entries", entries.len());
        Ok(Parameters::new(entries))
    }
}

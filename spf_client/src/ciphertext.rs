//! Ciphertext type and encryption/decryption operations.

use parasol_runtime::fluent::{PackedUInt16, PackedUInt32, PackedUInt64, PackedUInt8};
use parasol_runtime::Encryption;
use spf_wire::{BitWidth, WireCiphertext};

use crate::error::{CallSite, Error};
use crate::keys::{PublicKey, SecretKey};
use crate::validation::{from_msgpack, parse_bit_width, to_msgpack, to_wire_value};

/// An encrypted value (ciphertext) with associated bit width.
///
/// Ciphertexts can be serialized for transmission to the engine
/// and deserialized after computation to decrypt the result.
#[derive(Clone)]
pub struct Ciphertext {
    inner: WireCiphertext,
}

impl std::fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ciphertext")
            .field("bit_width", &self.inner.bit_width)
            .field("ciphertext", &"<L1GlweCiphertext>")
            .finish()
    }
}

impl From<WireCiphertext> for Ciphertext {
    fn from(inner: WireCiphertext) -> Self {
        Self { inner }
    }
}

impl Ciphertext {
    /// Encrypt an integer value with a public key.
    ///
    /// Signed values are encrypted as their two's complement pattern.
    ///
    /// # Errors
    ///
    /// Fails if `bit_width` is not 8, 16, 32, or 64, or if `value` does not
    /// fit the bit width and signedness.
    pub fn encrypt(
        value: i128,
        public_key: &PublicKey,
        bit_width: u32,
        signed: bool,
    ) -> Result<Self, Error> {
        let bit_width = parse_bit_width(bit_width, CallSite::Encrypt)?;
        let value = to_wire_value(value, bit_width, signed)?;
        Ok(Self::encrypt_with_bit_width(
            value,
            bit_width,
            &public_key.encryption,
            public_key,
        ))
    }

    /// Encryption dispatcher based on bit width.
    ///
    /// `value` must already be range checked for `bit_width`.
    pub(crate) fn encrypt_with_bit_width(
        value: u64,
        bit_width: BitWidth,
        encryption: &Encryption,
        public_key: &PublicKey,
    ) -> Self {
        let ciphertext = match bit_width {
            BitWidth::U8 => {
                PackedUInt8::encrypt(value as u128, encryption, &public_key.inner).inner()
            }
            BitWidth::U16 => {
                PackedUInt16::encrypt(value as u128, encryption, &public_key.inner).inner()
            }
            BitWidth::U32 => {
                PackedUInt32::encrypt(value as u128, encryption, &public_key.inner).inner()
            }
            BitWidth::U64 => {
                PackedUInt64::encrypt(value as u128, encryption, &public_key.inner).inner()
            }
        };

        Self {
            inner: WireCiphertext {
                bit_width,
                ciphertext,
            },
        }
    }

    /// Decrypt to the raw unsigned bit pattern.
    fn decrypt_unsigned(&self, secret_key: &SecretKey) -> u64 {
        secret_key
            .encryption
            .decrypt_glwe_l1(&self.inner.ciphertext, &secret_key.inner)
            .coeffs()
            .iter()
            .take(usize::from(self.inner.bit_width))
            .enumerate()
            .map(|(i, &v)| v << i)
            .sum()
    }

    /// Decrypt this ciphertext using a secret key.
    ///
    /// If `signed` is true the result is interpreted as two's complement.
    pub fn decrypt(&self, secret_key: &SecretKey, signed: bool) -> i128 {
        let unsigned = self.decrypt_unsigned(secret_key);
        if signed {
            self.inner.bit_width.unsigned_to_signed(unsigned) as i128
        } else {
            unsigned as i128
        }
    }

    /// Get the bit width of the encrypted value.
    pub fn bit_width(&self) -> BitWidth {
        self.inner.bit_width
    }

    /// Serialize the ciphertext to MessagePack bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        to_msgpack(&self.inner)
    }

    /// Deserialize a ciphertext from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            inner: from_msgpack(bytes)?,
        })
    }

    /// Borrow the wire representation.
    pub fn as_wire(&self) -> &WireCiphertext {
        &self.inner
    }

    /// Convert into the wire representation.
    pub fn into_wire(self) -> WireCiphertext {
        self.inner
    }
}

//! Key generation and management for TFHE operations.

use std::sync::Arc;

use parasol_runtime::{self as runtime, Encryption};
use spf_wire::PARAMS;

use crate::ciphertext::Ciphertext;
use crate::error::Error;
use crate::validation::{from_msgpack, to_msgpack};

/// Implement byte serialization and a redacted `Debug` for an `Arc`-backed key.
macro_rules! impl_key_bytes {
    ($key_type:ident, $inner_type:ty, |$inner:ident| $build:expr) => {
        impl $key_type {
            /// Serialize to MessagePack bytes.
            pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
                to_msgpack(self.inner.as_ref())
            }

            /// Deserialize from MessagePack bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
                let $inner: Arc<$inner_type> = Arc::new(from_msgpack(bytes)?);
                Ok($build)
            }
        }

        impl std::fmt::Debug for $key_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($key_type))
                    .field("inner", &"<redacted>")
                    .finish()
            }
        }
    };
}

/// Secret key for decryption operations.
///
/// The secret key must be kept secure and never shared.
#[derive(Clone)]
pub struct SecretKey {
    pub(crate) inner: Arc<runtime::SecretKey>,
    pub(crate) encryption: Encryption,
}

impl_key_bytes!(SecretKey, runtime::SecretKey, |inner| SecretKey {
    inner,
    encryption: Encryption::new(&PARAMS),
});

impl SecretKey {
    /// Generate a new secret key with 128-bit security.
    pub fn generate() -> Self {
        Self {
            inner: Arc::new(runtime::SecretKey::generate(&PARAMS)),
            encryption: Encryption::new(&PARAMS),
        }
    }

    /// Decrypt a ciphertext.
    ///
    /// If `signed` is true the result is interpreted as two's complement.
    pub fn decrypt(&self, ciphertext: &Ciphertext, signed: bool) -> i128 {
        ciphertext.decrypt(self, signed)
    }
}

/// Public key for encryption operations.
///
/// The public key can be shared freely.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) inner: Arc<runtime::PublicKey>,
    pub(crate) encryption: Encryption,
}

impl_key_bytes!(PublicKey, runtime::PublicKey, |inner| PublicKey {
    inner,
    encryption: Encryption::new(&PARAMS),
});

impl PublicKey {
    /// Derive a public key from a secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        Self {
            inner: Arc::new(runtime::PublicKey::generate(&PARAMS, &secret_key.inner)),
            encryption: Encryption::new(&PARAMS),
        }
    }

    /// Encrypt an integer value.
    ///
    /// # Errors
    ///
    /// Fails if `bit_width` is not 8, 16, 32, or 64, or if `value` does not
    /// fit the bit width and signedness.
    pub fn encrypt(&self, value: i128, bit_width: u32, signed: bool) -> Result<Ciphertext, Error> {
        Ciphertext::encrypt(value, self, bit_width, signed)
    }
}

/// Compute key for engine-side FHE operations.
///
/// The compute key is handed to the engine so it can evaluate programs on
/// encrypted data without learning the plaintext.
#[derive(Clone)]
pub struct ComputeKey {
    pub(crate) inner: Arc<runtime::ComputeKey>,
}

impl_key_bytes!(ComputeKey, runtime::ComputeKey, |inner| ComputeKey { inner });

impl ComputeKey {
    /// Derive a compute key from a secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        Self {
            inner: Arc::new(runtime::ComputeKey::generate(&secret_key.inner, &PARAMS)),
        }
    }
}

/// A complete set of keys for FHE operations.
#[derive(Clone, Debug)]
pub struct KeySet {
    secret_key: SecretKey,
    public_key: PublicKey,
    compute_key: ComputeKey,
}

impl KeySet {
    /// Generate a new complete key set with 128-bit security.
    pub fn generate() -> Self {
        let secret_key = SecretKey::generate();
        let public_key = PublicKey::from_secret_key(&secret_key);
        let compute_key = ComputeKey::from_secret_key(&secret_key);

        Self {
            secret_key,
            public_key,
            compute_key,
        }
    }

    /// Construct a key set from individual keys.
    pub fn new(secret_key: SecretKey, public_key: PublicKey, compute_key: ComputeKey) -> Self {
        Self {
            secret_key,
            public_key,
            compute_key,
        }
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn compute_key(&self) -> &ComputeKey {
        &self.compute_key
    }

    /// Encrypt an integer value with the public key.
    pub fn encrypt(&self, value: i128, bit_width: u32, signed: bool) -> Result<Ciphertext, Error> {
        self.public_key.encrypt(value, bit_width, signed)
    }

    /// Decrypt a ciphertext with the secret key.
    pub fn decrypt(&self, ciphertext: &Ciphertext, signed: bool) -> i128 {
        self.secret_key.decrypt(ciphertext, signed)
    }
}

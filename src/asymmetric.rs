// src/asymmetric.rs
//! RSA PKCS#1 v1.5 adapter over PEM-encoded key pairs
//!
//! The adapter holds the configured PEM bytes as opaque buffers and parses
//! them on every call, so a key can be swapped by calling the setter again.
//! Encryption is limited to a single block: at most `modulus_len - 11` bytes
//! under PKCS#1 v1.5 padding.

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

use crate::error::{CryptoError, Result};

/// PKCS#1 v1.5 reserves 11 bytes of every block for padding
const PKCS1V15_OVERHEAD: usize = 11;

#[derive(Debug, Clone, Default)]
pub struct AsymmetricCipher {
    public_key: Option<Vec<u8>>,
    private_key: Option<Vec<u8>>,
}

impl AsymmetricCipher {
    /// New adapter with no keys configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PEM-encoded public key ("BEGIN PUBLIC KEY")
    pub fn set_public_key(&mut self, pem: impl Into<Vec<u8>>) {
        self.public_key = Some(pem.into());
    }

    /// Set the PEM-encoded private key ("BEGIN RSA PRIVATE KEY" or
    /// "BEGIN PRIVATE KEY")
    pub fn set_private_key(&mut self, pem: impl Into<Vec<u8>>) {
        self.private_key = Some(pem.into());
    }

    /// Encrypt a single block of plaintext under the configured public key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let pem = self
            .public_key
            .as_deref()
            .ok_or(CryptoError::MissingPublicKey)?;
        let pem = std::str::from_utf8(pem).map_err(|_| CryptoError::InvalidPem)?;
        let key = RsaPublicKey::from_public_key_pem(pem).map_err(CryptoError::PublicKey)?;

        let mut rng = rand::thread_rng();
        key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
            .map_err(|e| match e {
                rsa::Error::MessageTooLong => CryptoError::MessageTooLong {
                    len: plaintext.len(),
                    max: key.size() - PKCS1V15_OVERHEAD,
                },
                e => CryptoError::Rsa(e),
            })
    }

    /// Decrypt a single block of ciphertext under the configured private key
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let pem = self
            .private_key
            .as_deref()
            .ok_or(CryptoError::MissingPrivateKey)?;
        let pem = std::str::from_utf8(pem).map_err(|_| CryptoError::InvalidPem)?;
        let key = RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(CryptoError::PrivateKey)?;

        key.decrypt(Pkcs1v15Encrypt, ciphertext)
            .map_err(CryptoError::Rsa)
    }
}

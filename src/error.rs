// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid AES key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    #[error("ciphertext too short: {len} bytes, need at least {min}")]
    CiphertextTooShort { len: usize, min: usize },

    #[error("ciphertext length {0} is not a multiple of the block size")]
    NotBlockAligned(usize),

    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    #[error("PEM data is not valid UTF-8")]
    InvalidPem,

    #[error("public key error: no public key configured")]
    MissingPublicKey,

    #[error("private key error: no private key configured")]
    MissingPrivateKey,

    #[error("public key error: {0}")]
    PublicKey(#[from] rsa::pkcs8::spki::Error),

    #[error("private key error: {0}")]
    PrivateKey(#[from] rsa::pkcs8::Error),

    #[error("plaintext too long for RSA PKCS#1 v1.5: {len} bytes, limit {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),
}

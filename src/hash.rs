// src/hash.rs
//! One-way digests and keyed MACs as lowercase hex strings
//!
//! Pure, stateless, deterministic. MD5 and SHA-1 are provided for
//! compatibility with existing fingerprints, not for new security designs.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;

/// MD5 digest — 32 hex characters
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Md5::digest(data.as_ref()))
}

/// SHA-1 digest — 40 hex characters
pub fn sha1_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha1::digest(data.as_ref()))
}

/// HMAC with MD5 as the inner digest — 32 hex characters
pub fn hmac_md5_hex(key: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> String {
    let mut mac = Hmac::<Md5>::new_from_slice(key.as_ref()).expect("HMAC can take key of any size");
    mac.update(data.as_ref());
    hex::encode(mac.finalize().into_bytes())
}

/// HMAC with SHA-256 as the inner digest — 64 hex characters
pub fn hmac_sha256_hex(key: impl AsRef<[u8]>, data: impl AsRef<[u8]>) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key.as_ref()).expect("HMAC can take key of any size");
    mac.update(data.as_ref());
    hex::encode(mac.finalize().into_bytes())
}

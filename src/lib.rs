// src/lib.rs
//! quickcrypt — uniform encrypt/decrypt wrappers over standard primitives
//!
//! Features:
//! - AES in the five classic modes (ECB, CBC, CTR, CFB, OFB)
//! - MD5 / SHA-1 digests and HMAC-MD5 / HMAC-SHA256, as lowercase hex
//! - RSA PKCS#1 v1.5 over PEM-encoded key pairs
//!
//! Every primitive is delegated to the RustCrypto crates; this crate only
//! provides the uniform call surface and the envelope handling (padding,
//! prepended IVs).

pub mod asymmetric;
pub mod block;
pub mod consts;
pub mod error;
pub mod hash;

// Re-export everything users need at the crate root
pub use asymmetric::AsymmetricCipher;
pub use block::{BlockCipher, Mode};
pub use error::{CryptoError, Result};
pub use hash::{hmac_md5_hex, hmac_sha256_hex, md5_hex, sha1_hex};

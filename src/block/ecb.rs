// src/block/ecb.rs
//! Electronic codebook mode
//!
//! Deterministic: no IV, every block encrypted independently, so repeated
//! plaintext blocks produce repeated ciphertext blocks. Key material of any
//! length is XOR-folded down to 16 bytes — a compatibility shim carried over
//! from the original wrapper, not a key-derivation function.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::Aes128;

use crate::consts::{BLOCK_SIZE, FOLDED_KEY_LEN};
use crate::error::{CryptoError, Result};

/// Fold arbitrary-length key material into a fixed 16-byte AES-128 key:
/// the first 16 bytes verbatim, every byte past that XORed in cyclically.
fn fold_key(key: &[u8]) -> [u8; FOLDED_KEY_LEN] {
    let mut folded = [0u8; FOLDED_KEY_LEN];
    let head = key.len().min(FOLDED_KEY_LEN);
    folded[..head].copy_from_slice(&key[..head]);
    if key.len() > FOLDED_KEY_LEN {
        for (i, &b) in key[FOLDED_KEY_LEN..].iter().enumerate() {
            folded[i % FOLDED_KEY_LEN] ^= b;
        }
    }
    folded
}

pub(crate) fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let folded = fold_key(key);
    let enc = ecb::Encryptor::<Aes128>::new(&folded.into());
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::NotBlockAligned(ciphertext.len()));
    }
    let folded = fold_key(key);
    let dec = ecb::Decryptor::<Aes128>::new(&folded.into());
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::InvalidPadding)
}

// src/block/cbc.rs
//! Cipher block chaining mode
//!
//! PKCS#7 padded. A fresh random IV is generated per message and prepended
//! to the ciphertext; decrypt reads it back from the leading block.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use super::{init_mode, random_iv, split_iv};
use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

fn encrypt_padded<M>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockEncryptMut,
{
    Ok(init_mode::<M>(key, iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_padded<M>(key: &[u8], iv: &[u8], body: &[u8]) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockDecryptMut,
{
    init_mode::<M>(key, iv)?
        .decrypt_padded_vec_mut::<Pkcs7>(body)
        .map_err(|_| CryptoError::InvalidPadding)
}

pub(crate) fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let iv = random_iv();
    let body = match key.len() {
        16 => encrypt_padded::<cbc::Encryptor<Aes128>>(key, &iv, plaintext),
        24 => encrypt_padded::<cbc::Encryptor<Aes192>>(key, &iv, plaintext),
        32 => encrypt_padded::<cbc::Encryptor<Aes256>>(key, &iv, plaintext),
        n => Err(CryptoError::InvalidKeyLength(n)),
    }?;
    let mut out = Vec::with_capacity(BLOCK_SIZE + body.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&body);
    Ok(out)
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = split_iv(ciphertext)?;
    if body.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::NotBlockAligned(body.len()));
    }
    match key.len() {
        16 => decrypt_padded::<cbc::Decryptor<Aes128>>(key, iv, body),
        24 => decrypt_padded::<cbc::Decryptor<Aes192>>(key, iv, body),
        32 => decrypt_padded::<cbc::Decryptor<Aes256>>(key, iv, body),
        n => Err(CryptoError::InvalidKeyLength(n)),
    }
}

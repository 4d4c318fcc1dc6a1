// src/block/cfb.rs
//! Cipher feedback mode
//!
//! Stream mode, no padding, plaintext length preserved. A fresh random IV
//! is generated per message and prepended to the ciphertext.

use aes::cipher::{AsyncStreamCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use super::{init_mode, random_iv, split_iv};
use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

fn encrypt_in_place<M>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()>
where
    M: KeyIvInit + AsyncStreamCipher + BlockEncryptMut,
{
    init_mode::<M>(key, iv)?.encrypt(buf);
    Ok(())
}

fn decrypt_in_place<M>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()>
where
    M: KeyIvInit + AsyncStreamCipher + BlockDecryptMut,
{
    init_mode::<M>(key, iv)?.decrypt(buf);
    Ok(())
}

pub(crate) fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let iv = random_iv();
    let mut out = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    match key.len() {
        16 => encrypt_in_place::<cfb_mode::Encryptor<Aes128>>(key, &iv, &mut out[BLOCK_SIZE..])?,
        24 => encrypt_in_place::<cfb_mode::Encryptor<Aes192>>(key, &iv, &mut out[BLOCK_SIZE..])?,
        32 => encrypt_in_place::<cfb_mode::Encryptor<Aes256>>(key, &iv, &mut out[BLOCK_SIZE..])?,
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(out)
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = split_iv(ciphertext)?;
    let mut out = body.to_vec();
    match key.len() {
        16 => decrypt_in_place::<cfb_mode::Decryptor<Aes128>>(key, iv, &mut out)?,
        24 => decrypt_in_place::<cfb_mode::Decryptor<Aes192>>(key, iv, &mut out)?,
        32 => decrypt_in_place::<cfb_mode::Decryptor<Aes256>>(key, iv, &mut out)?,
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(out)
}

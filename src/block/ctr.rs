// src/block/ctr.rs
//! Counter mode
//!
//! Stream mode, no padding, plaintext length preserved. A fresh random IV
//! is generated per message and prepended to the ciphertext. The keystream
//! is involutory, so decrypt applies the same transform to the body.

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use ctr::Ctr128BE;

use super::{init_mode, random_iv, split_iv};
use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

fn apply_keystream(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
    match key.len() {
        16 => init_mode::<Ctr128BE<Aes128>>(key, iv)?.apply_keystream(buf),
        24 => init_mode::<Ctr128BE<Aes192>>(key, iv)?.apply_keystream(buf),
        32 => init_mode::<Ctr128BE<Aes256>>(key, iv)?.apply_keystream(buf),
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(())
}

pub(crate) fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let iv = random_iv();
    let mut out = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    apply_keystream(key, &iv, &mut out[BLOCK_SIZE..])?;
    Ok(out)
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = split_iv(ciphertext)?;
    let mut out = body.to_vec();
    apply_keystream(key, iv, &mut out)?;
    Ok(out)
}

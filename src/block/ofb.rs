// src/block/ofb.rs
//! Output feedback mode
//!
//! Keystream mode, but unlike CFB the plaintext is PKCS#7 padded before the
//! keystream is applied, so decrypt requires a block-aligned body and strips
//! the padding afterwards. A fresh random IV is generated per message and
//! prepended to the ciphertext.

use aes::cipher::block_padding::{Pkcs7, RawPadding};
use aes::cipher::{KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use ofb::Ofb;

use super::{init_mode, random_iv, split_iv};
use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

fn apply_keystream(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
    match key.len() {
        16 => init_mode::<Ofb<Aes128>>(key, iv)?.apply_keystream(buf),
        24 => init_mode::<Ofb<Aes192>>(key, iv)?.apply_keystream(buf),
        32 => init_mode::<Ofb<Aes256>>(key, iv)?.apply_keystream(buf),
        n => return Err(CryptoError::InvalidKeyLength(n)),
    }
    Ok(())
}

pub(crate) fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let iv = random_iv();
    let padded_len = (plaintext.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;
    let mut out = vec![0u8; BLOCK_SIZE + padded_len];
    out[..BLOCK_SIZE].copy_from_slice(&iv);
    out[BLOCK_SIZE..BLOCK_SIZE + plaintext.len()].copy_from_slice(plaintext);
    Pkcs7::raw_pad(&mut out[BLOCK_SIZE..], plaintext.len());
    apply_keystream(key, &iv, &mut out[BLOCK_SIZE..])?;
    Ok(out)
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let (iv, body) = split_iv(ciphertext)?;
    if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::NotBlockAligned(body.len()));
    }
    let mut out = body.to_vec();
    apply_keystream(key, iv, &mut out)?;
    let unpadded = Pkcs7::raw_unpad(&out).map_err(|_| CryptoError::InvalidPadding)?;
    Ok(unpadded.to_vec())
}

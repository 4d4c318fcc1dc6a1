// src/block/mod.rs
//! AES block-cipher facade over the five classic modes of operation
//!
//! The facade dispatches `encrypt`/`decrypt` to the selected [`Mode`].
//! Modes that carry an IV (CBC, CTR, CFB, OFB) generate a fresh random one
//! per message and prepend it to the ciphertext; decrypt reads it back from
//! the leading block.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;

use aes::cipher::KeyIvInit;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

/// The five supported modes of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    Ecb,
    #[default]
    Cbc,
    Ctr,
    Cfb,
    Ofb,
}

impl Mode {
    /// Map a numeric mode id (1–5). Unrecognized ids fall back to CBC.
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Mode::Ecb,
            2 => Mode::Cbc,
            3 => Mode::Ctr,
            4 => Mode::Cfb,
            5 => Mode::Ofb,
            _ => Mode::Cbc,
        }
    }

    /// The numeric id of this mode
    pub fn id(self) -> u8 {
        match self {
            Mode::Ecb => 1,
            Mode::Cbc => 2,
            Mode::Ctr => 3,
            Mode::Cfb => 4,
            Mode::Ofb => 5,
        }
    }
}

/// AES facade with a uniform `encrypt(data, key)` / `decrypt(data, key)`
/// surface, parameterized by [`Mode`]
///
/// The mode is plain data matched at call time; `set_mode` takes `&mut self`,
/// so a shared instance cannot race mode switches against in-flight calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCipher {
    mode: Mode,
}

impl BlockCipher {
    /// New facade using the default mode (CBC)
    pub fn new() -> Self {
        Self::default()
    }

    /// New facade with an explicit mode
    pub fn with_mode(mode: Mode) -> Self {
        Self { mode }
    }

    /// Replace the active mode wholesale
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The currently active mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Encrypt `plaintext` under `key` with the active mode
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        match self.mode {
            Mode::Ecb => ecb::encrypt(plaintext, key),
            Mode::Cbc => cbc::encrypt(plaintext, key),
            Mode::Ctr => ctr::encrypt(plaintext, key),
            Mode::Cfb => cfb::encrypt(plaintext, key),
            Mode::Ofb => ofb::encrypt(plaintext, key),
        }
    }

    /// Decrypt `ciphertext` under `key` with the active mode
    pub fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        match self.mode {
            Mode::Ecb => ecb::decrypt(ciphertext, key),
            Mode::Cbc => cbc::decrypt(ciphertext, key),
            Mode::Ctr => ctr::decrypt(ciphertext, key),
            Mode::Cfb => cfb::decrypt(ciphertext, key),
            Mode::Ofb => ofb::decrypt(ciphertext, key),
        }
    }
}

/// Fresh random IV from the OS CSPRNG
pub(crate) fn random_iv() -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Split a ciphertext into its leading IV block and the body
pub(crate) fn split_iv(ciphertext: &[u8]) -> Result<(&[u8], &[u8])> {
    if ciphertext.len() < BLOCK_SIZE {
        return Err(CryptoError::CiphertextTooShort {
            len: ciphertext.len(),
            min: BLOCK_SIZE,
        });
    }
    Ok(ciphertext.split_at(BLOCK_SIZE))
}

/// Build a keyed mode instance, surfacing a bad key length as an error
pub(crate) fn init_mode<M: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<M> {
    M::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLength(key.len()))
}

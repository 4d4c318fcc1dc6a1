// src/consts.rs
//! Shared constants — block geometry and key sizes

/// AES block size in bytes; also the length of every prepended IV
pub const BLOCK_SIZE: usize = 16;

/// Length the ECB strategy folds arbitrary key material down to
pub const FOLDED_KEY_LEN: usize = 16;

/// Key lengths accepted by the keyed modes (AES-128/192/256)
pub const AES_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

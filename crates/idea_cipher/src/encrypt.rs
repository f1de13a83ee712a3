use bytes::Bytes;

use crate::{Block, BlockError, KeySchedule, MasterKey, Mode, expand_key, transform};

/// Encrypts a single 64-bit block with a 128-bit key.
///
/// Derives the encryption subkeys and runs the round engine once. When
/// many blocks share a key, build a [`KeySchedule`] instead so the
/// subkeys are derived only once.
pub fn encrypt_block(block: Block, key: &MasterKey) -> Block {
    transform(block, &expand_key(key))
}

/// Encrypts a block-aligned buffer with a 128-bit key.
///
/// Every 8-byte block is encrypted independently. The input is not
/// padded, so its length must already be a multiple of 8 bytes.
///
/// # Parameters
/// - `plaintext`: The data to encrypt.
/// - `key`: The master key.
///
/// # Returns
/// The ciphertext, same length as `plaintext`, wrapped in a [`Bytes`] buffer.
///
/// # Errors
/// - [`BlockError::InvalidBlockSize`]: If the input is not a multiple of 8 bytes.
pub fn encrypt(plaintext: &[u8], key: &MasterKey) -> Result<Bytes, BlockError> {
    KeySchedule::new(key).apply_buffer(plaintext, Mode::Encryption)
}

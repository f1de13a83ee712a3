use bytes::Bytes;

use crate::{Block, BlockError, KeySchedule, MasterKey, Mode, expand_key, invert_key, transform};

/// Decrypts a single 64-bit block with a 128-bit key.
///
/// The decryption subkeys are derived from the encryption subkeys of the
/// same key, then fed to the same round engine used for encryption.
pub fn decrypt_block(block: Block, key: &MasterKey) -> Block {
    transform(block, &invert_key(&expand_key(key)))
}

/// Decrypts a block-aligned buffer produced by [`encrypt`](crate::encrypt).
///
/// # Parameters
/// - `ciphertext`: The encrypted data. Must be a multiple of 8 bytes.
/// - `key`: The master key used for encryption.
///
/// # Returns
/// The plaintext, same length as `ciphertext`, wrapped in a [`Bytes`] buffer.
///
/// # Errors
/// - [`BlockError::InvalidBlockSize`]: If the input is not a multiple of 8 bytes.
pub fn decrypt(ciphertext: &[u8], key: &MasterKey) -> Result<Bytes, BlockError> {
    KeySchedule::new(key).apply_buffer(ciphertext, Mode::Decryption)
}

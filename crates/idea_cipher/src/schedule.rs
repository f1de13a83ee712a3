use bytes::{Bytes, BytesMut};

use crate::{
    Block, BlockError, IDEA_BLOCK_SIZE, MasterKey, Mode, RoundObserver, Subkeys, expand_key,
    invert_key, transform, transform_observed,
};

/// Both subkey sequences of one master key, derived once.
///
/// A `KeySchedule` holds no mutable state, so a single instance can be
/// shared by reference across threads and reused for any number of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    encryption: Subkeys,
    decryption: Subkeys,
}

impl KeySchedule {
    /// Derives the encryption and decryption subkeys of `key`.
    pub fn new(key: &MasterKey) -> Self {
        let encryption = expand_key(key);
        let decryption = invert_key(&encryption);

        Self {
            encryption,
            decryption,
        }
    }

    /// Returns the subkey sequence the round engine needs for `mode`.
    #[inline(always)]
    pub const fn subkeys(&self, mode: Mode) -> &Subkeys {
        match mode {
            Mode::Encryption => &self.encryption,
            Mode::Decryption => &self.decryption,
        }
    }

    /// Encrypts or decrypts a single block.
    #[inline]
    pub fn apply(&self, block: Block, mode: Mode) -> Block {
        transform(block, self.subkeys(mode))
    }

    /// Same as [`apply`](Self::apply), reporting every round to `observer`.
    pub fn apply_observed<O>(&self, block: Block, mode: Mode, observer: &mut O) -> Block
    where
        O: RoundObserver + ?Sized,
    {
        transform_observed(block, self.subkeys(mode), observer)
    }

    /// Encrypts a single block.
    #[inline]
    pub fn encrypt_block(&self, block: Block) -> Block {
        self.apply(block, Mode::Encryption)
    }

    /// Decrypts a single block.
    #[inline]
    pub fn decrypt_block(&self, block: Block) -> Block {
        self.apply(block, Mode::Decryption)
    }

    /// Encrypts or decrypts every 8-byte block of `data` independently.
    ///
    /// No padding is added: `data` must already be block aligned.
    ///
    /// # Errors
    /// - [`BlockError::InvalidBlockSize`]: If `data.len()` is not a multiple of 8.
    pub fn apply_buffer(&self, data: &[u8], mode: Mode) -> Result<Bytes, BlockError> {
        // Ensure the data length is a multiple of the block size
        if data.len() % IDEA_BLOCK_SIZE != 0 {
            return Err(BlockError::InvalidBlockSize { length: data.len() });
        }

        // Select the subkeys once for the whole buffer
        let subkeys = self.subkeys(mode);
        let mut output = BytesMut::with_capacity(data.len());

        // Process each 8-byte block
        for chunk in data.chunks_exact(IDEA_BLOCK_SIZE) {
            // Copy the chunk into a fixed-size array
            let mut block_bytes = [0u8; IDEA_BLOCK_SIZE];
            block_bytes.copy_from_slice(chunk);

            // Run the block through the round engine
            let block = transform(Block::from_bytes(block_bytes), subkeys);

            // Append the big-endian result to the output
            output.extend_from_slice(&block.to_bytes());
        }

        // Freeze the buffer into immutable Bytes
        Ok(output.freeze())
    }
}

impl From<&MasterKey> for KeySchedule {
    fn from(key: &MasterKey) -> Self {
        Self::new(key)
    }
}

use std::fmt;

use thiserror::Error;

use crate::{
    IDEA_BLOCK_BITS, IDEA_BLOCK_SIZE, Word16,
    bits::{BitsError, format_bits, parse_bits},
};

/// Errors that can occur when splitting a byte buffer into IDEA blocks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    /// Occurs when the buffer length is not a multiple of 8 bytes.
    #[error("data length ({length}) must be a multiple of 8 bytes")]
    InvalidBlockSize {
        /// Length of the rejected buffer in bytes.
        length: usize,
    },
}

/// A single 64-bit IDEA block, held as four 16-bit words `X0..X3`.
///
/// The words are taken from the 64 input bits in order, most significant
/// first, so `X0` holds bits 63..48 of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block(pub [Word16; 4]);

impl Block {
    /// Creates a block from its four words.
    #[inline(always)]
    pub const fn new(words: [Word16; 4]) -> Self {
        Self(words)
    }

    /// Returns the four words of the block.
    #[inline(always)]
    pub const fn words(&self) -> [Word16; 4] {
        self.0
    }

    /// Creates a block from 8 big-endian bytes.
    pub const fn from_bytes(bytes: [u8; IDEA_BLOCK_SIZE]) -> Self {
        Self([
            Word16::from_be_bytes([bytes[0], bytes[1]]),
            Word16::from_be_bytes([bytes[2], bytes[3]]),
            Word16::from_be_bytes([bytes[4], bytes[5]]),
            Word16::from_be_bytes([bytes[6], bytes[7]]),
        ])
    }

    /// Returns the block as 8 big-endian bytes.
    pub const fn to_bytes(&self) -> [u8; IDEA_BLOCK_SIZE] {
        let [x0, x1, x2, x3] = self.0;
        let (x0, x1, x2, x3) = (
            x0.to_be_bytes(),
            x1.to_be_bytes(),
            x2.to_be_bytes(),
            x3.to_be_bytes(),
        );

        [x0[0], x0[1], x1[0], x1[1], x2[0], x2[1], x3[0], x3[1]]
    }

    /// Parses a block from a 64-character binary string.
    ///
    /// # Errors
    /// - [`BitsError::LengthMismatch`]: If `bits` is not exactly 64 characters.
    /// - [`BitsError::InvalidDigit`]: If `bits` contains anything but `0`/`1`.
    pub fn from_bits(bits: &str) -> Result<Self, BitsError> {
        let value = parse_bits(bits, IDEA_BLOCK_BITS)?;
        Ok(Self::from(value as u64))
    }

    /// Returns the block as a 64-character binary string.
    pub fn to_bits(&self) -> String {
        format_bits(u64::from(*self) as u128, IDEA_BLOCK_BITS)
    }
}

impl From<u64> for Block {
    fn from(value: u64) -> Self {
        Self::from_bytes(value.to_be_bytes())
    }
}

impl From<Block> for u64 {
    fn from(block: Block) -> Self {
        u64::from_be_bytes(block.to_bytes())
    }
}

impl From<[u8; IDEA_BLOCK_SIZE]> for Block {
    fn from(bytes: [u8; IDEA_BLOCK_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Block> for [u8; IDEA_BLOCK_SIZE] {
    fn from(block: Block) -> Self {
        block.to_bytes()
    }
}

impl fmt::Display for Block {
    /// Formats the block as 16 uppercase hexadecimal digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", u64::from(*self))
    }
}

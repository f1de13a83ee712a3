use thiserror::Error;

use crate::{
    IDEA_KEY_BITS, IDEA_KEY_SIZE, Word16,
    bits::{BitsError, format_bits, parse_bits},
};

/// Errors that can occur when building a [`MasterKey`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Occurs when the supplied key material is not exactly 128 bits.
    #[error("key must be exactly {expected} bits, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bits.
        expected: usize,
        /// Supplied key length in bits.
        actual: usize,
    },

    /// Occurs when a textual key is not a valid bit string.
    #[error(transparent)]
    Bits(#[from] BitsError),
}

/// A 128-bit IDEA master key.
///
/// Immutable once built; every subkey is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MasterKey(u128);

impl MasterKey {
    /// Creates a key from 16 big-endian bytes.
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; IDEA_KEY_SIZE]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Returns the key as 16 big-endian bytes.
    #[inline(always)]
    pub const fn to_bytes(&self) -> [u8; IDEA_KEY_SIZE] {
        self.0.to_be_bytes()
    }

    /// Parses a key from a 128-character binary string.
    ///
    /// # Errors
    /// - [`KeyError::InvalidKeyLength`]: If `bits` is not exactly 128 characters.
    /// - [`KeyError::Bits`]: If `bits` contains anything but `0`/`1`.
    pub fn from_bits(bits: &str) -> Result<Self, KeyError> {
        parse_bits(bits, IDEA_KEY_BITS)
            .map(Self)
            .map_err(|err| match err {
                BitsError::LengthMismatch { expected, actual } => {
                    KeyError::InvalidKeyLength { expected, actual }
                }
                other => KeyError::Bits(other),
            })
    }

    /// Returns the key as a 128-character binary string.
    pub fn to_bits(&self) -> String {
        format_bits(self.0, IDEA_KEY_BITS)
    }

    /// Rotates the whole 128-bit key left, wrapping the leading bits to the tail.
    #[inline(always)]
    pub const fn rotate_left(self, bits: u32) -> Self {
        Self(self.0.rotate_left(bits))
    }

    /// Splits the key into eight consecutive 16-bit segments, most significant first.
    pub const fn words(&self) -> [Word16; 8] {
        let mut words = [0; 8];
        let mut index = 0;

        while index < words.len() {
            let shift = IDEA_KEY_BITS as u32 - 16 * (index as u32 + 1);
            words[index] = (self.0 >> shift) as Word16;
            index += 1;
        }

        words
    }
}

impl From<u128> for MasterKey {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<MasterKey> for u128 {
    fn from(key: MasterKey) -> Self {
        key.0
    }
}

impl From<[u8; IDEA_KEY_SIZE]> for MasterKey {
    fn from(bytes: [u8; IDEA_KEY_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for MasterKey {
    type Error = KeyError;

    /// Accepts exactly 16 bytes of key material.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; IDEA_KEY_SIZE] = bytes.try_into().map_err(|_| KeyError::InvalidKeyLength {
            expected: IDEA_KEY_BITS,
            actual: bytes.len() * 8,
        })?;

        Ok(Self::from_bytes(bytes))
    }
}

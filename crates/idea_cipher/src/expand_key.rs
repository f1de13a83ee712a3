use std::ops::Deref;

use log::debug;
use thiserror::Error;

use crate::{IDEA_KEY_ROTATION, IDEA_NUM_SUBKEYS, MasterKey, Word16};

/// Errors that can occur when building a [`Subkeys`] sequence from loose words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubkeyError {
    /// Occurs when the number of supplied words is not exactly 52.
    #[error("subkey sequence must hold exactly {expected} words, got {actual}")]
    InvalidSubkeyCount {
        /// Required number of subkeys.
        expected: usize,
        /// Number of subkeys actually supplied.
        actual: usize,
    },
}

/// An ordered sequence of exactly 52 16-bit subkeys.
///
/// Six subkeys drive each of the 8 full rounds and the last four drive
/// the output transformation. The same type carries both the encryption
/// and the decryption sequence; only the order and values differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subkeys([Word16; IDEA_NUM_SUBKEYS]);

impl Subkeys {
    /// Wraps an already complete subkey array.
    #[inline(always)]
    pub const fn new(words: [Word16; IDEA_NUM_SUBKEYS]) -> Self {
        Self(words)
    }

    /// The six subkeys used by full round `round` (0-based, below 8).
    #[inline(always)]
    pub const fn round(&self, round: usize) -> [Word16; 6] {
        let k = round * 6;
        [
            self.0[k],
            self.0[k + 1],
            self.0[k + 2],
            self.0[k + 3],
            self.0[k + 4],
            self.0[k + 5],
        ]
    }

    /// The four subkeys of the output transformation.
    #[inline(always)]
    pub const fn output(&self) -> [Word16; 4] {
        let [.., z48, z49, z50, z51] = self.0;
        [z48, z49, z50, z51]
    }
}

impl Deref for Subkeys {
    type Target = [Word16; IDEA_NUM_SUBKEYS];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&[Word16]> for Subkeys {
    type Error = SubkeyError;

    fn try_from(words: &[Word16]) -> Result<Self, Self::Error> {
        words
            .try_into()
            .map(Self)
            .map_err(|_| SubkeyError::InvalidSubkeyCount {
                expected: IDEA_NUM_SUBKEYS,
                actual: words.len(),
            })
    }
}

/// Expands a 128-bit master key into the 52 encryption subkeys.
///
/// The key is cut into eight 16-bit words, which become the next eight
/// subkeys; the key is then rotated left by 25 bits and the process is
/// repeated. Seven passes yield 56 words, of which the first 52 are kept.
///
/// # Arguments
/// * `key` - The master key.
///
/// # Returns
/// The encryption [`Subkeys`], in the order the round engine consumes them.
pub fn expand_key(key: &MasterKey) -> Subkeys {
    let mut expanded = [0; IDEA_NUM_SUBKEYS];

    // The first pass reads the key unrotated
    let mut current = *key;

    // Fill eight words per pass; the seventh pass only needs four.
    for chunk in expanded.chunks_mut(8) {
        // Split the current key into eight big-endian words
        let words = current.words();

        // Take as many words as this chunk still needs
        chunk.copy_from_slice(&words[..chunk.len()]);

        // Rotate for the next pass
        current = current.rotate_left(IDEA_KEY_ROTATION);
    }

    debug!("Expanded master key into {} encryption subkeys", expanded.len());

    Subkeys(expanded)
}

pub mod arithmetic;
pub mod bits;
mod block;
mod decrypt;
mod encrypt;
mod expand_key;
mod invert_key;
mod key;
mod round;
mod schedule;

use serde::{Deserialize, Serialize};

pub use block::{Block, BlockError};
pub use decrypt::{decrypt, decrypt_block};
pub use encrypt::{encrypt, encrypt_block};
pub use expand_key::{SubkeyError, Subkeys, expand_key};
pub use invert_key::invert_key;
pub use key::{KeyError, MasterKey};
pub use round::{LogObserver, RoundObserver, RoundTrace, transform, transform_observed};
pub use schedule::KeySchedule;

/// One 16-bit block segment or subkey.
///
/// All arithmetic is done on the integer form, so results are always
/// exactly 16 bits wide.
pub type Word16 = u16;

/// The fixed size (in bytes) of a single IDEA block.
pub const IDEA_BLOCK_SIZE: usize = 8;

/// The fixed size (in bits) of a single IDEA block.
pub const IDEA_BLOCK_BITS: usize = IDEA_BLOCK_SIZE * 8;

/// The fixed size (in bytes) of an IDEA master key.
pub const IDEA_KEY_SIZE: usize = 16;

/// The fixed size (in bits) of an IDEA master key.
pub const IDEA_KEY_BITS: usize = IDEA_KEY_SIZE * 8;

/// Number of full rounds applied before the output transformation.
pub const IDEA_NUM_ROUNDS: usize = 8;

/// Number of subkeys in a schedule: six per full round plus four for the
/// output transformation.
pub const IDEA_NUM_SUBKEYS: usize = IDEA_NUM_ROUNDS * 6 + 4;

/// Left rotation (in bits) applied to the master key between passes of
/// the key expansion.
pub(crate) const IDEA_KEY_ROTATION: u32 = 25;

/// Direction of a cipher operation.
///
/// Selects which subkey sequence is fed to the round engine; the round
/// engine itself is identical for both.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Use the subkeys produced by [`expand_key`].
    #[default]
    Encryption,

    /// Use the subkeys produced by [`invert_key`].
    Decryption,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encryption => f.write_str("encryption"),
            Mode::Decryption => f.write_str("decryption"),
        }
    }
}

/// Encrypts or decrypts one block, depending on `mode`.
pub fn idea(block: Block, key: &MasterKey, mode: Mode) -> Block {
    match mode {
        Mode::Encryption => encrypt_block(block, key),
        Mode::Decryption => decrypt_block(block, key),
    }
}

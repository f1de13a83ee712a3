//! Shared inputs for the benchmark targets.

use idea_cipher::{Block, MasterKey};

/// Key of the demonstration scenario.
pub const SAMPLE_KEY: MasterKey = MasterKey::from_bytes(*b"CAOHOCHUTECHCNTT");

/// Plaintext block of the demonstration scenario.
pub const SAMPLE_BLOCK: Block = Block::from_bytes(*b"DHHUTECH");

/// A block-aligned buffer of `blocks` blocks filled with a repeating byte pattern.
pub fn sample_buffer(blocks: usize) -> Vec<u8> {
    (0..blocks * 8).map(|i| (i % 251) as u8).collect()
}

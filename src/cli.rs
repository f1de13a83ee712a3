use clap::Parser;
use idea_cipher::Mode;
use std::path::PathBuf;

use crate::settings::Settings;

/// Encrypts or decrypts a single 64-bit block with IDEA.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Encrypt the data.
    #[arg(short = 'e', long, conflicts_with = "decrypt")]
    pub encrypt: bool,

    /// Decrypt the data.
    #[arg(short = 'd', long)]
    pub decrypt: bool,

    /// Text to encrypt (at most 8 bytes), or the ciphertext to decrypt
    /// as 64 binary digits or 16 hex digits.
    pub data: Option<String>,

    /// Key text, packed into 128 bits (at most 16 bytes).
    #[arg(short, long)]
    pub key: Option<String>,

    /// Key as 32 hex digits.
    #[arg(long, conflicts_with = "key")]
    pub key_hex: Option<String>,

    /// Log every round step.
    #[arg(long)]
    pub trace: bool,

    /// Path of the settings file holding the defaults.
    #[arg(long, default_value = Settings::PATH)]
    pub settings: PathBuf,
}

impl Args {
    /// The mode requested on the command line, if any.
    pub(crate) fn mode(&self) -> Option<Mode> {
        match (self.encrypt, self.decrypt) {
            (true, _) => Some(Mode::Encryption),
            (_, true) => Some(Mode::Decryption),
            _ => None,
        }
    }
}

mod cli;
mod settings;
mod text;

use anyhow::{Context, bail};
use clap::Parser;
use idea_cipher::{
    Block, IDEA_BLOCK_BITS, IDEA_BLOCK_SIZE, IDEA_KEY_SIZE, KeySchedule, LogObserver, MasterKey,
    Mode,
};
use log::{debug, info};

use crate::{cli::Args, settings::Settings};

/// Default log filter. The round engine stays at debug so `trace_rounds`
/// in the settings file can show the round dump without `--trace`.
const DEFAULT_FILTER: &str = "info,idea_cipher::round=debug";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.trace { "debug" } else { DEFAULT_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = Settings::load_or_default(&args.settings)?;

    let mode = args.mode().unwrap_or(settings.mode);
    let key = resolve_key(&args, &settings)?;
    let block = resolve_block(&args, &settings, mode)?;

    info!("Running IDEA {mode} on block {block}");

    let schedule = KeySchedule::new(&key);
    debug!("Subkeys: {:04X?}", schedule.subkeys(mode));

    let result = if trace_enabled(&args, &settings) {
        schedule.apply_observed(block, mode, &mut LogObserver)
    } else {
        schedule.apply(block, mode)
    };

    report(mode, &result);

    Ok(())
}

/// Whether the round dump is requested by `--trace` or by the settings file.
fn trace_enabled(args: &Args, settings: &Settings) -> bool {
    args.trace || settings.trace_rounds
}

/// Builds the master key from `--key-hex`, `--key` or the settings file.
fn resolve_key(args: &Args, settings: &Settings) -> anyhow::Result<MasterKey> {
    if let Some(key_hex) = &args.key_hex {
        let bytes = hex::decode(key_hex).context("Key must be hexadecimal")?;
        return MasterKey::try_from(bytes.as_slice()).context("Invalid key length");
    }

    let key_text = args.key.as_deref().unwrap_or(&settings.key);
    let bytes = text::pack_text::<IDEA_KEY_SIZE>(key_text).context("Key text does not fit")?;

    Ok(MasterKey::from_bytes(bytes))
}

/// Builds the input block for `mode`.
///
/// Encryption packs text; decryption reads 64 binary digits or 16 hex digits.
fn resolve_block(args: &Args, settings: &Settings, mode: Mode) -> anyhow::Result<Block> {
    match mode {
        Mode::Encryption => {
            let message = args.data.as_deref().unwrap_or(&settings.message);
            let bytes =
                text::pack_text::<IDEA_BLOCK_SIZE>(message).context("Message does not fit")?;

            Ok(Block::from_bytes(bytes))
        }
        Mode::Decryption => {
            let Some(data) = args.data.as_deref() else {
                bail!("Decryption needs the ciphertext as 64 binary digits or 16 hex digits");
            };

            parse_ciphertext(data)
        }
    }
}

/// Reads a ciphertext block written as bits or as hex.
fn parse_ciphertext(data: &str) -> anyhow::Result<Block> {
    if data.len() == IDEA_BLOCK_BITS {
        return Block::from_bits(data).context("Ciphertext is not a valid bit string");
    }

    let mut bytes = [0u8; IDEA_BLOCK_SIZE];
    hex::decode_to_slice(data, &mut bytes)
        .context("Ciphertext must be 64 binary digits or 16 hex digits")?;

    Ok(Block::from_bytes(bytes))
}

fn report(mode: Mode, result: &Block) {
    match mode {
        Mode::Encryption => println!("**********ENCRYPTION**********"),
        Mode::Decryption => println!("**********DECRYPTION**********"),
    }

    println!("------------------------------------");
    println!("Output:\t{}", result.to_bits());
    println!("Hex:\t{result}");

    if mode == Mode::Decryption {
        println!("Text:\t{}", text::unpack_text(&result.to_bytes()));
    }

    println!("{}", "*".repeat(30));
}

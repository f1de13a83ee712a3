use anyhow::Context;
use idea_cipher::Mode;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Defaults for the command-line demonstration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Operation performed when neither `-e` nor `-d` is given.
    pub mode: Mode,

    /// Text encrypted when no data argument is given (at most 8 bytes).
    pub message: String,

    /// Text key used when no key argument is given (at most 16 bytes).
    pub key: String,

    /// Log every round step at debug level.
    pub trace_rounds: bool,
}

impl Settings {
    /// Default path of the configuration file.
    pub(crate) const PATH: &'static str = "IdeaSettings.toml";

    /// Tries to load the settings, or creates the file with default settings if it doesn't exist.
    pub(crate) fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            info!(
                "Configuration file '{}' found, attempting to load.",
                path.display()
            );

            Self::load(path)
        } else {
            warn!(
                "Configuration file '{}' not found. Creating default configuration.",
                path.display()
            );

            Self::create(path)
        }
    }

    /// Tries to load the settings from the file.
    fn load(path: &Path) -> anyhow::Result<Self> {
        debug!("Attempting to read configuration from '{}'", path.display());

        let config_str =
            fs::read_to_string(path).context("Failed to read the configuration file")?;

        let settings = toml::from_str(&config_str)
            .context("Failed to parse the configuration file as TOML")?;

        trace!("Loaded settings: {:?}", settings);

        Ok(settings)
    }

    /// Writes the default settings to `path`, then loads them back.
    fn create(path: &Path) -> anyhow::Result<Self> {
        let default_config = Self::default();

        let config_str: String = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        let mut file = File::create(path).context("Failed to create the configuration file")?;

        file.write_all(config_str.as_bytes())
            .context("Failed to write the default configuration to the file")?;

        info!(
            "Default configuration written to '{}'. Reloading from file.",
            path.display()
        );

        Self::load(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Encryption,
            message: "DHHUTECH".to_owned(),
            key: "CAOHOCHUTECHCNTT".to_owned(),
            trace_rounds: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("Temporary directory should be created");
        let path = dir.path().join(Settings::PATH);

        let settings = Settings::load_or_default(&path).expect("Defaults should load");

        // The file now exists and holds the defaults
        assert!(path.exists(), "Default configuration file should be written");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().expect("Temporary directory should be created");
        let path = dir.path().join(Settings::PATH);

        fs::write(
            &path,
            r#"
mode = "decryption"
message = "HELLO"
key = "0123456789ABCDEF"
trace_rounds = true
"#,
        )
        .expect("Configuration file should be written");

        let settings = Settings::load_or_default(&path).expect("Settings should load");
        assert_eq!(settings.mode, Mode::Decryption);
        assert_eq!(settings.message, "HELLO");
        assert_eq!(settings.key, "0123456789ABCDEF");
        assert!(settings.trace_rounds);
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let dir = tempfile::tempdir().expect("Temporary directory should be created");
        let path = dir.path().join(Settings::PATH);

        fs::write(&path, "mode = \"sideways\"").expect("Configuration file should be written");

        let err = Settings::load_or_default(&path).expect_err("Unknown mode must fail");
        assert!(
            err.to_string().contains("Failed to parse"),
            "Unexpected error: {err:#}"
        );
    }
}

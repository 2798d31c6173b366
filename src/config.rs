use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The compiled-in codec instance an encoding name resolves to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    Base64,
    Base64url,
    Base64urlUnpadded,
    Base32,
    Base32hex,
    Base32crockford,
    Hex,
    HexUpper,
}

/// Configuration for a single named encoding loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Which codec the name binds to
    pub codec: CodecKind,
    /// Default line width for encoded output (0 = no wrapping)
    #[serde(default)]
    pub wrap: Option<usize>,
    /// One-line description for listings
    #[serde(default)]
    pub description: Option<String>,
}

/// All named encodings, keyed by name.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EncodingsConfig {
    #[serde(default)]
    pub encodings: BTreeMap<String, EncodingConfig>,
}

impl EncodingsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../encodings.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in encodings
    /// 2. Override with ~/.config/base-block/encodings.toml if it exists
    /// 3. Override with ./encodings.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-block").join("encodings.toml");
            config.merge_file_if_present(&user_config_path);
        }

        config.merge_file_if_present(Path::new("encodings.toml"));

        Ok(config)
    }

    /// Merges `path` over this config; a broken override is skipped with a warning.
    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(
                    path = %path.display(),
                    entries = overrides.encodings.len(),
                    "merging encoding overrides"
                );
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load encoding overrides");
            }
        }
    }

    /// Merge another config into this one, overriding existing encodings
    pub fn merge(&mut self, other: EncodingsConfig) {
        self.encodings.extend(other.encodings);
    }

    pub fn get_encoding(&self, name: &str) -> Option<&EncodingConfig> {
        self.encodings.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.encodings.keys().map(String::as_str)
    }
}

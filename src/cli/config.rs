use base_block::{Encoding, EncodingsConfig};
use std::path::Path;

use crate::cli::global::GlobalArgs;

/// Loads the registry: built-ins, user and local overrides, then `--config`.
///
/// Unlike the implicit override files, an explicit `--config` that cannot be
/// read or parsed is an error.
pub fn load_registry(global: &GlobalArgs) -> Result<EncodingsConfig, Box<dyn std::error::Error>> {
    let mut config = EncodingsConfig::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let extra = EncodingsConfig::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        tracing::debug!(path = %expanded, entries = extra.encodings.len(), "merging --config");
        config.merge(extra);
    }

    Ok(config)
}

/// Helper function to resolve an encoding by name
pub fn create_encoding(
    config: &EncodingsConfig,
    name: &str,
) -> Result<Encoding, Box<dyn std::error::Error>> {
    Ok(Encoding::from_config(config, name)?)
}

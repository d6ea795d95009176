//! Decoder configuration, loaded from JSON.
//!
//! ```json
//! {
//!   "units": { "px_to_em": true, "base_font_size_px": 16.0, "insert_default_units": false },
//!   "aliases": "aliases.json",
//!   "parallel": false
//! }
//! ```
//!
//! Every field is optional.

use anyhow::{Context as _, Result};
use css_values_units::UnitPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    pub units: UnitPolicy,
    /// JSON alias table replacing the built-in one.
    pub aliases: Option<PathBuf>,
    /// Decode tokens on the rayon thread pool.
    pub parallel: bool,
}

impl DecoderConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or out-of-range settings.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("invalid decoder configuration")?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file. A relative `aliases` path is resolved
    /// against the directory holding the file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read decoder config {}", path.display()))?;
        let mut config = Self::from_json(&text)
            .with_context(|| format!("failed to parse decoder config {}", path.display()))?;
        if let Some(aliases) = config.aliases.as_mut()
            && aliases.is_relative()
            && let Some(dir) = path.parent()
        {
            *aliases = dir.join(&*aliases);
        }
        Ok(config)
    }

    /// Reject settings the decoder cannot run with.
    ///
    /// # Errors
    /// Returns an error if the unit policy cannot convert lengths.
    pub fn check(&self) -> Result<()> {
        self.units.validate().context("invalid unit policy")?;
        Ok(())
    }
}

//! Configuration loading for the dnblog CLI.

#![forbid(unsafe_code)]

use std::path::Path;

use dnblog_lib::{
    DnblogError, EncodeOptions, RecordOptions, DEFAULT_CHUNK_SIZE, DEFAULT_DOMAIN, DEFAULT_TTL,
};
use securefmt::Debug;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

/// dnblog CLI configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where records are published.
    pub zone: ZoneConfig,
    /// Chunk encoding settings.
    pub encoder: EncoderConfig,
}

/// Zone the post records live under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneConfig {
    /// Domain appended to every record name, e.g. `blog.tazj.in`.
    pub domain: String,
    /// Record TTL in seconds.
    pub ttl: u32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            ttl: DEFAULT_TTL,
        }
    }
}

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    /// Chunk size to start from, in characters.
    pub chunk_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, DnblogError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| DnblogError::Config(format!("failed to read config file: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, DnblogError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| DnblogError::Config(format!("failed to parse config: {e}")))?;

        if config.encoder.chunk_size == 0 {
            return Err(DnblogError::Config("chunkSize must be positive".into()));
        }

        Ok(config)
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::with_chunk_size(self.encoder.chunk_size)
    }

    pub fn record_options(&self) -> RecordOptions {
        RecordOptions {
            domain: self.zone.domain.clone(),
            ttl: self.zone.ttl,
        }
    }
}

//! Keyword configuration for the CLI. A JSON file names where the keyword
//! comes from; the keyword is resolved in-memory and turned into a `Cipher`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::cipher::{Cipher, CipherError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("keyword source unreadable: {0}")]
    KeywordSourceUnreadable(String),
    #[error("no usable keyword source configured")]
    MissingKeySource,
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyConfig {
    /// Keyword stored inline.
    pub keyword: Option<String>,
    /// Environment variable that holds the keyword.
    pub keyword_env: Option<String>,
    /// Path to a file that holds the keyword.
    pub keyword_path: Option<PathBuf>,
}

impl KeyConfig {
    /// Returns the keyword from the first configured source: inline, then
    /// environment variable, then file.
    pub fn resolve_keyword(&self) -> Result<String, ConfigError> {
        if let Some(keyword) = &self.keyword {
            debug!(source = "inline", "resolved keyword source");
            return Ok(keyword.clone());
        }
        if let Some(var) = &self.keyword_env {
            let keyword = std::env::var(var)
                .map_err(|e| ConfigError::KeywordSourceUnreadable(format!("{var}: {e}")))?;
            debug!(source = "env", var = %var, "resolved keyword source");
            return Ok(keyword);
        }
        if let Some(path) = &self.keyword_path {
            let content = fs::read_to_string(path).map_err(|e| {
                ConfigError::KeywordSourceUnreadable(format!("{}: {e}", path.display()))
            })?;
            debug!(source = "file", path = %path.display(), "resolved keyword source");
            return Ok(content.trim().to_string());
        }
        Err(ConfigError::MissingKeySource)
    }

    /// Resolves the keyword and validates it into a cipher.
    pub fn build_cipher(&self) -> Result<Cipher, ConfigError> {
        let keyword = self.resolve_keyword()?;
        let cipher = Cipher::new(&keyword)?;
        info!(
            fingerprint = %cipher.fingerprint(),
            key_len = cipher.key_len(),
            "cipher ready"
        );
        Ok(cipher)
    }
}

/// Reads and parses a JSON keyword configuration file.
pub fn load_key_config(path: impl AsRef<Path>) -> Result<KeyConfig, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    serde_json::from_str(&raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))
}

/// Loads the configuration file and builds the cipher it describes.
pub fn load_cipher(path: impl AsRef<Path>) -> Result<Cipher, ConfigError> {
    load_key_config(path)?.build_cipher()
}

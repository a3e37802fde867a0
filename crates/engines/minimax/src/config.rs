//! Engine settings, read from TOML.
//!
//! ```toml
//! difficulty = "normal"
//! # depth = 3     # overrides difficulty
//! # seed = 1234   # reproducible move choice
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("search depth must be at least 1")]
    InvalidDepth,
}

/// Named strength levels offered to players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    #[default]
    Hard,
    Expert,
}

impl Difficulty {
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Explicit search depth in plies; takes precedence over `difficulty`.
    pub depth: Option<u8>,
    /// Seed for the root shuffle. Unset means seeded from OS entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.depth {
            Some(0) => Err(ConfigError::InvalidDepth),
            _ => Ok(()),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! Engine configuration.
//!
//! `EngineConfig` carries the knobs an embedding application may tune:
//! - deck size per side (the conservation total is twice this)
//! - the attribute recorded when a user turn times out
//! - the turn time limit advertised to callers
//! - an optional point budget for chosen sets
//! - an optional RNG seed
//!
//! It can be built in code or loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Attribute;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Engine-wide configuration.
///
/// ```
/// use trump_duel::core::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("deck_size = 5\npoint_budget = 60").unwrap();
/// assert_eq!(config.deck_size, 5);
/// assert_eq!(config.total_cards(), 10);
/// assert_eq!(config.point_budget, Some(60));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards dealt to each side.
    pub deck_size: usize,

    /// Attribute recorded for a timed-out user turn.
    pub timeout_attribute: Attribute,

    /// Seconds a human gets to pick. The engine never waits on this;
    /// callers read it to drive their timer.
    pub turn_time_limit_secs: u64,

    /// Maximum summed point cost of a chosen set. `None` for unlimited.
    pub point_budget: Option<u32>,

    /// Seed for the default random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deck_size: 10,
            timeout_attribute: Attribute::Size,
            turn_time_limit_secs: 10,
            point_budget: None,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size == 0 {
            return Err(ConfigError::Invalid("deck_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Cards in play across both decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_size * 2
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the timeout attribute.
    #[must_use]
    pub fn with_timeout_attribute(mut self, attribute: Attribute) -> Self {
        self.timeout_attribute = attribute;
        self
    }

    /// Set the point budget for chosen sets.
    #[must_use]
    pub fn with_point_budget(mut self, budget: u32) -> Self {
        self.point_budget = Some(budget);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

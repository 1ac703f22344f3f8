//! Engine configuration.
//!
//! Hosts load a [`GameConfig`] from their settings (bot config file,
//! per-room overrides) and hand it to [`Game::from_config`]. Validation is
//! strict: the chamber count must be a genuine integer — a numeric string
//! in a serialized config is rejected at deserialization time.
//!
//! [`Game::from_config`]: crate::game::Game::from_config

use serde::{Deserialize, Serialize};

use crate::error::{Error, GameResult};
use crate::game::{DEFAULT_CHAMBERS, MIN_CHAMBERS};

/// Configuration for one game instance.
///
/// ```
/// use revolver::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.chambers, 6);
///
/// let config = GameConfig::new(8).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Number of chambers in the cylinder. Must be at least 2.
    #[serde(default = "default_chambers")]
    pub chambers: u32,

    /// Optional RNG seed for reproducible games. `None` seeds from the
    /// operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_chambers() -> u32 {
    DEFAULT_CHAMBERS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            chambers: DEFAULT_CHAMBERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given chamber count.
    #[must_use]
    pub fn new(chambers: u32) -> Self {
        Self {
            chambers,
            seed: None,
        }
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against the engine's invariants.
    pub fn validate(&self) -> GameResult<()> {
        if self.chambers < MIN_CHAMBERS {
            return Err(Error::NotEnoughChambers {
                requested: self.chambers,
            });
        }
        Ok(())
    }
}

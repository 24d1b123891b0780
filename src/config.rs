//! Game configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TWENTY48_SIZE` | 4 | Board side length (2..=16) |
//! | `TWENTY48_SEED` | unset | Seed for a reproducible game |
//! | `TWENTY48_SPAWN` | `random` | `random` or `first` blank-selection policy |
//! | `TWENTY48_PLAIN` | false | `1`/`true` runs the line-based mode |
//! | `TWENTY48_LOG_PATH` | unset | Directory for log files; unset disables logging |
//!
//! Invalid values fall back to the default and are reported in
//! [`GameConfig::warnings`] so they can be logged once logging is up.

use crate::core::{Engine, Grid, GridError, SpawnPolicy};
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed: Option<u64>,
    pub spawn_policy: SpawnPolicy,
    pub plain: bool,
    pub log_path: Option<String>,
    /// Problems found while reading the environment.
    pub warnings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            spawn_policy: SpawnPolicy::Random,
            plain: false,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get("TWENTY48_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) => config.size = size,
                _ => config.warnings.push(format!(
                    "TWENTY48_SIZE={raw} is not in {MIN_GRID_SIZE}..={MAX_GRID_SIZE}, using {DEFAULT_GRID_SIZE}"
                )),
            }
        }

        if let Some(raw) = get("TWENTY48_SEED") {
            match raw.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("TWENTY48_SEED={raw} is not a u64, using a random seed")),
            }
        }

        if let Some(raw) = get("TWENTY48_SPAWN") {
            match SpawnPolicy::from_str(&raw) {
                Some(policy) => config.spawn_policy = policy,
                None => config.warnings.push(format!(
                    "TWENTY48_SPAWN={raw} is not random|first, using random"
                )),
            }
        }

        config.plain = get("TWENTY48_PLAIN")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config.log_path = get("TWENTY48_LOG_PATH");

        config
    }

    /// Build the engine this configuration describes.
    pub fn build_engine(&self) -> Result<Engine, GridError> {
        let engine = match self.seed {
            Some(seed) => Engine::with_seed(Grid::new(self.size)?, seed),
            None => Engine::with_size(self.size)?,
        };
        Ok(engine.with_spawn_policy(self.spawn_policy))
    }
}

// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes the run configuration as JSON.
//
// A RunConfig bundles everything a `train` run needs:
//   - session:       SessionConfig (rectangle, bias, rate, pacing, seed)
//   - training_size: number of generated cases
//   - line:          the straight reference line
//
// Example file:
//   {
//     "session": {
//       "size": { "width": 400, "height": 400 },
//       "bias": 1.0,
//       "learning_rate": 0.01,
//       "pacing_ms": 10,
//       "draw_queue_capacity": 256,
//       "seed": 42
//     },
//     "training_size": 2000,
//     "line": { "slope": 1.0, "intercept": -5.0 }
//   }
//
// Missing fields fall back to their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::application::training_session::SessionConfig;
use crate::domain::geometry::ReferenceLine;

pub const DEFAULT_TRAINING_SIZE: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub session:       SessionConfig,
    pub training_size: usize,
    pub line:          ReferenceLine,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            session:       SessionConfig::default(),
            training_size: DEFAULT_TRAINING_SIZE,
            line:          ReferenceLine::default(),
        }
    }
}

/// Loads and saves a RunConfig at a fixed path.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<RunConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg: RunConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded run config from '{}'", self.path.display());
        Ok(cfg)
    }

    pub fn save(&self, cfg: &RunConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved run config to '{}'", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

//! Engine configuration persistence
//!
//! Stores user preferences in `~/.config/ghostline/config.yaml`

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostlineConfig {
    /// Maximum undo entries retained per line; oldest are evicted first
    #[serde(default = "default_max_history")]
    pub max_history_per_line: usize,

    /// Quiet period after an edit before the line's state is committed,
    /// in milliseconds. Zero or negative disables snapshot capture.
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: i64,

    /// Gate on the undo/redo/history command entry points
    #[serde(default = "default_enable_shortcuts")]
    pub enable_shortcuts: bool,
}

fn default_max_history() -> usize {
    20
}

fn default_idle_delay_ms() -> i64 {
    400
}

fn default_enable_shortcuts() -> bool {
    true
}

impl Default for GhostlineConfig {
    fn default() -> Self {
        Self {
            max_history_per_line: default_max_history(),
            idle_delay_ms: default_idle_delay_ms(),
            enable_shortcuts: default_enable_shortcuts(),
        }
    }
}

impl GhostlineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;
        self.save_to(&path)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// The debounce delay, or `None` when snapshot capture is disabled
    pub fn idle_delay(&self) -> Option<Duration> {
        if self.idle_delay_ms > 0 {
            Some(Duration::from_millis(self.idle_delay_ms as u64))
        } else {
            None
        }
    }

    /// Clamp nonsensical values back to usable ones
    fn normalized(mut self) -> Self {
        if self.max_history_per_line == 0 {
            tracing::warn!("max_history_per_line must be positive, using default");
            self.max_history_per_line = default_max_history();
        }
        self
    }
}

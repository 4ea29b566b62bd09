use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_break_enabled() -> bool {
    true
}

fn default_break_interval() -> u32 {
    30
}

/// Break reminder configuration. Owned by [`Settings`]; the scheduler only
/// reads it on each tick and pushes `last_break_at` updates back through the
/// caller's copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakReminderConfig {
    #[serde(default = "default_break_enabled")]
    pub enabled: bool,
    /// Minutes of continuous monitored activity before a break is suggested.
    #[serde(default = "default_break_interval")]
    pub interval_minutes: u32,
    /// Unix timestamp of the last break. `0` means no break recorded yet;
    /// the session initialises it when monitoring first starts.
    #[serde(default)]
    pub last_break_at: i64,
}

impl Default for BreakReminderConfig {
    fn default() -> Self {
        Self {
            enabled: default_break_enabled(),
            interval_minutes: default_break_interval(),
            last_break_at: 0,
        }
    }
}

impl BreakReminderConfig {
    /// Configured interval in seconds, clamped to at least one minute.
    pub fn interval_seconds(&self) -> i64 {
        i64::from(self.interval_minutes.max(1)) * 60
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default)]
    pub break_reminder: BreakReminderConfig,
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields defaults;
    /// only a present-but-malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

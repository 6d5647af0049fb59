use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};

/// Complete application configuration: form limits, timer delays and UI settings.
///
/// Loaded once at startup and passed by reference into whichever module needs
/// it; nothing reads configuration through a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delay for debounced paths (draft autosave). Real-time validation is
    /// deliberately not debounced.
    #[serde(default = "default_debounce_delay")]
    pub debounce_delay_ms: u64,
    /// How long a notification banner stays up before auto-dismissing
    #[serde(default = "default_auto_close")]
    pub alert_auto_close_ms: u64,
    /// Largest accepted entry amount
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,
    /// Smallest accepted entry amount
    #[serde(default = "default_min_amount")]
    pub min_amount: f64,
    /// Valid amounts above this produce a non-blocking advisory warning
    #[serde(default = "default_high_amount_threshold")]
    pub high_amount_threshold: f64,
    #[serde(default)]
    pub theme_choice: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: default_debounce_delay(),
            alert_auto_close_ms: default_auto_close(),
            max_amount: default_max_amount(),
            min_amount: default_min_amount(),
            high_amount_threshold: default_high_amount_threshold(),
            theme_choice: ThemeChoice::default(),
        }
    }
}

fn default_debounce_delay() -> u64 {
    300
}

fn default_auto_close() -> u64 {
    5000
}

fn default_max_amount() -> f64 {
    999_999.99
}

fn default_min_amount() -> f64 {
    0.01
}

fn default_high_amount_threshold() -> f64 {
    10_000.0
}

/// UI theme selection, persisted with the rest of the config
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            Self::Light => iced::Theme::Light,
            Self::Dark => iced::Theme::Dark,
        }
    }
}

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(mut path) = get_data_dir() {
        let json = serde_json::to_string_pretty(config)?;

        let mut temp_path = path.clone();
        temp_path.push("config.json.tmp");

        path.push("config.json");

        {
            use tokio::io::AsyncWriteExt;

            let mut file = tokio::fs::File::create(&temp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?; // Ensure data is flushed to physical media
        }

        tokio::fs::rename(temp_path, path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::StorageFull {
                std::io::Error::new(
                    std::io::ErrorKind::StorageFull,
                    "Disk full: cannot save configuration. Free up space and try again.",
                )
            } else {
                e
            }
        })?;
    }
    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config() -> AppConfig {
    if let Some(mut path) = get_data_dir() {
        path.push("config.json");
        if let Ok(json) = tokio::fs::read_to_string(&path).await
            && let Ok(config) = serde_json::from_str::<AppConfig>(&json)
        {
            return config;
        }
    }
    AppConfig::default()
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// This blocks the current thread and should only be used in `State::new()` where
/// async initialization isn't possible. Everywhere else should use async `load_config()`.
pub fn load_config_blocking() -> AppConfig {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.block_on(load_config())
    } else {
        tokio::runtime::Runtime::new()
            .expect("Failed to create runtime")
            .block_on(load_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_limits() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_delay_ms, 300);
        assert_eq!(config.alert_auto_close_ms, 5000);
        assert_eq!(config.max_amount, 999_999.99);
        assert_eq!(config.min_amount, 0.01);
        assert_eq!(config.high_amount_threshold, 10_000.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.debounce_delay_ms, 300);
        assert_eq!(config.theme_choice, ThemeChoice::Dark);
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig {
            theme_choice: ThemeChoice::Light,
            alert_auto_close_ms: 2500,
            ..AppConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme_choice, ThemeChoice::Light);
        assert_eq!(back.alert_auto_close_ms, 2500);
    }
}

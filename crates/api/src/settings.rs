//! Simulator settings

use adas::AdasConfig;
use alerting::BeepConfig;
use config::{Config, Environment, File, FileFormat};
use data_validator::InputBounds;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default settings file (extension optional)
pub const DEFAULT_SETTINGS_PATH: &str = "adas-sim";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Listen address
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,

    /// Max tracing level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Lane-change tick period while a request is active (milliseconds)
    pub lane_tick_ms: u64,

    pub adas: AdasConfig,
    pub beep: BeepConfig,
    pub bounds: InputBounds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            log_level: "info".to_string(),
            lane_tick_ms: 200,
            adas: AdasConfig::default(),
            beep: BeepConfig::default(),
            bounds: InputBounds::default(),
        }
    }
}

impl Settings {
    /// Load from `$ADAS_SIM_CONFIG` (or `adas-sim.*`) and `ADAS_SIM__*` env vars
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var("ADAS_SIM_CONFIG").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load_from(&path)
    }

    /// Defaults, then the optional file at `path`, then the environment
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("ADAS_SIM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn lane_tick(&self) -> Duration {
        Duration::from_millis(self.lane_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from("does-not-exist/adas-sim").unwrap();
        assert_eq!(settings.lane_tick_ms, 200);
        assert_eq!(settings.adas, AdasConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            log_level = "debug"
            lane_tick_ms = 100

            [server]
            addr = "127.0.0.1:9000"

            [adas]
            door_block_notice_ms = 3000

            [adas.fcw]
            max_threshold_m = 40

            [beep]
            debounce_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.lane_tick(), Duration::from_millis(100));
        assert_eq!(settings.server.addr, "127.0.0.1:9000");
        assert_eq!(settings.adas.door_block_notice_ms, 3000);
        assert_eq!(settings.adas.fcw.max_threshold_m, 40);
        assert_eq!(settings.adas.fcw.reaction_time_s, 1.8);
        assert_eq!(settings.adas.lane_change_window_ms, 1000);
        assert_eq!(settings.beep.debounce_ms, 500);
        assert_eq!(settings.bounds, InputBounds::default());
    }
}

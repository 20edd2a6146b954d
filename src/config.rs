use log::{info, warn, Level};
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// localStorage key holding an optional JSON timing override, handy for demos.
pub const TIMING_STORAGE_KEY: &str = "demo_timing";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse timing override: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid timing override: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlbumTiming {
    pub open_delay_ms: u32,
    pub period_ms: u32,
    pub closed_ms: u32,
}

impl Default for AlbumTiming {
    fn default() -> Self {
        Self {
            open_delay_ms: 2_000,
            period_ms: 19_000,
            closed_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChanceTiming {
    pub intro_ms: u32,
    pub countdown_from: u8,
    pub countdown_tick_ms: u32,
    pub pre_animation_ms: u32,
    pub animation_ms: u32,
    pub result_ms: u32,
}

impl Default for ChanceTiming {
    fn default() -> Self {
        Self {
            intro_ms: 2_500,
            countdown_from: 3,
            countdown_tick_ms: 1_000,
            pre_animation_ms: 500,
            animation_ms: 2_500,
            result_ms: 2_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub album: AlbumTiming,
    pub chance: ChanceTiming,
    pub typewriter: TypewriterTiming,
    pub toast_ms: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            album: AlbumTiming::default(),
            chance: ChanceTiming::default(),
            typewriter: TypewriterTiming::default(),
            toast_ms: 3_000,
        }
    }
}

impl DemoConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let album = &self.album;
        if album.closed_ms == 0 || album.closed_ms >= album.period_ms {
            return Err(ConfigError::Invalid(format!(
                "album closed phase ({}ms) must be non-zero and shorter than its period ({}ms)",
                album.closed_ms, album.period_ms
            )));
        }
        // Zero-delay loops would spin the event loop.
        if self.typewriter.type_ms == 0 || self.typewriter.delete_ms == 0 {
            return Err(ConfigError::Invalid(
                "typewriter speeds must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Defaults, unless localStorage carries a valid override.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(TIMING_STORAGE_KEY).ok())
            .flatten();

        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                info!("Using timing override from localStorage");
                config
            }
            Err(e) => {
                warn!("Ignoring timing override: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DemoConfig::from_json(r#"{"chance": {"intro_ms": 100}, "toast_ms": 10}"#)
            .expect("valid override");

        assert_eq!(config.chance.intro_ms, 100);
        assert_eq!(config.chance.countdown_from, 3);
        assert_eq!(config.album, AlbumTiming::default());
        assert_eq!(config.toast_ms, 10);
    }

    #[test]
    fn closed_phase_longer_than_period_is_rejected() {
        let err = DemoConfig::from_json(r#"{"album": {"period_ms": 4000, "closed_ms": 5000}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_typing_speed_is_rejected() {
        let err = DemoConfig::from_json(r#"{"typewriter": {"type_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = DemoConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }
}

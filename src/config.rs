//! Menu configuration loaded from TOML
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! [layout]
//! offset = 40.0
//!
//! [animation]
//! duration_ms = 220.0
//! drift = 12.0
//! start_scale = 0.85
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::EntranceAnimation;

/// Errors that can occur when loading or validating a menu configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete configuration for a point menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuConfig {
    pub layout: LayoutConfig,
    pub animation: EntranceAnimation,
}

/// TOML structure for deserializing menu configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    layout: Option<TomlLayout>,
    animation: Option<TomlAnimation>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLayout {
    offset: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlAnimation {
    duration_ms: Option<f64>,
    drift: Option<f64>,
    start_scale: Option<f64>,
}

impl MenuConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(layout) = parsed.layout {
            if let Some(offset) = layout.offset {
                config.layout.offset = offset;
            }
        }

        if let Some(animation) = parsed.animation {
            if let Some(duration_ms) = animation.duration_ms {
                config.animation.duration_ms = duration_ms;
            }
            if let Some(drift) = animation.drift {
                config.animation.drift = drift;
            }
            if let Some(start_scale) = animation.start_scale {
                config.animation.start_scale = start_scale;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the entrance animation
    pub fn with_animation(mut self, animation: EntranceAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("layout.offset", self.layout.offset)?;
        non_negative("animation.duration_ms", self.animation.duration_ms)?;
        non_negative("animation.drift", self.animation.drift)?;

        let scale = self.animation.start_scale;
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(ConfigError::Invalid {
                key: "animation.start_scale",
                reason: format!("{} is outside (0, 1]", scale),
            });
        }
        Ok(())
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            reason: format!("{} must be a finite, non-negative number", value),
        })
    }
}

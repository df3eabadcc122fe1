// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use vista_gesture::ScrollingFlag;
use vista_gesture::wheel::{DEFAULT_LINE_HEIGHT, ZOOM_SPEED};
use vista_persist::{DEFAULT_KEY_PREFIX, DEFAULT_SAVE_DELAY};
use vista_view::ScaleLimits;

/// Invalid viewport configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("failed to parse viewport config")]
    Parse(#[from] serde_json::Error),
    /// The scale limits are not a positive, finite range.
    #[error("scale limits must be positive and finite, got {min}..={max}")]
    ScaleLimits {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A numeric option is not positive and finite.
    #[error("`{name}` must be positive and finite, got {value}")]
    NotPositive {
        /// Option name.
        name: &'static str,
        /// Configured value.
        value: f64,
    },
}

/// Tunables of a viewport.
///
/// Every field has a default, so a host can deserialize a partial document:
///
/// ```rust
/// use vista_viewport::ViewportConfig;
///
/// let config = ViewportConfig::from_json(r#"{ "zoom_speed": 0.02 }"#).unwrap();
/// assert_eq!(config.zoom_speed, 0.02);
/// assert_eq!(config.save_delay_ms, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Allowed zoom range.
    pub scale_limits: ScaleLimits,
    /// Scale change per pixel of ctrl/meta wheel delta.
    pub zoom_speed: f64,
    /// Quiet period before a transform is persisted, in milliseconds.
    pub save_delay_ms: u64,
    /// Quiet period before the scrolling flag drops, in milliseconds.
    pub scrolling_reset_ms: u64,
    /// Storage key prefix; the entity id is appended.
    pub key_prefix: String,
    /// Pixels per line for line-mode wheel deltas.
    pub line_height: f64,
}

impl ViewportConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that limits and speeds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScaleLimits { min, max } = self.scale_limits;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ScaleLimits { min, max });
        }
        for (name, value) in [
            ("zoom_speed", self.zoom_speed),
            ("line_height", self.line_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale_limits: ScaleLimits::default(),
            zoom_speed: ZOOM_SPEED,
            save_delay_ms: DEFAULT_SAVE_DELAY,
            scrolling_reset_ms: ScrollingFlag::DEFAULT_RESET_DELAY,
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

//! Tunables for the onboarding screen.
//!
//! Every field defaults to the shipped behavior, so an empty JSON object
//! (or no file at all) is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Millis;
use crate::pages::PAGES;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Splash timings. The exit starts `enter_ms + hold_ms` after mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
    pub enter_ms: Millis,
    pub hold_ms: Millis,
    pub exit_ms: Millis,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enter_ms: 700,
            hold_ms: 500,
            exit_ms: 400,
        }
    }
}

impl IntroConfig {
    /// Time from mount until the exit animation begins.
    pub fn exit_start_ms(&self) -> Millis {
        self.enter_ms.saturating_add(self.hold_ms)
    }

    /// Time from mount until the intro is done, absent preemption.
    pub fn total_ms(&self) -> Millis {
        self.exit_start_ms().saturating_add(self.exit_ms)
    }
}

/// Arrow control timings and scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrowConfig {
    /// Scale-up on activation.
    pub press_ms: Millis,
    /// Scale-back after the advance delay.
    pub release_ms: Millis,
    /// Delay between activation and the page change.
    pub advance_delay_ms: Millis,
    pub feedback_in_ms: Millis,
    pub feedback_out_ms: Millis,
    pub press_scale: f64,
    pub feedback_scale: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            press_ms: 120,
            release_ms: 120,
            advance_delay_ms: 140,
            feedback_in_ms: 100,
            feedback_out_ms: 120,
            press_scale: 1.15,
            feedback_scale: 1.08,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmbientConfig {
    /// Duration of a single rise (or fall) of the idle float.
    pub leg_ms: Millis,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self { leg_ms: 5_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnboardingConfig {
    pub page_count: usize,
    /// Route the terminal navigation replaces onboarding with.
    pub main_route: String,
    pub intro: IntroConfig,
    pub arrow: ArrowConfig,
    pub ambient: AmbientConfig,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            page_count: 3,
            main_route: "/(tabs)".to_string(),
            intro: IntroConfig::default(),
            arrow: ArrowConfig::default(),
            ambient: AmbientConfig::default(),
        }
    }
}

impl OnboardingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_count == 0 {
            return Err(ConfigError::Invalid {
                field: "page_count",
                reason: "at least one page is required".into(),
            });
        }
        if self.page_count > PAGES.len() {
            return Err(ConfigError::Invalid {
                field: "page_count",
                reason: format!(
                    "only {} pages have content, got {}",
                    PAGES.len(),
                    self.page_count
                ),
            });
        }
        if self.main_route.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "main_route",
                reason: "route must not be empty".into(),
            });
        }
        for (field, scale) in [
            ("arrow.press_scale", self.arrow.press_scale),
            ("arrow.feedback_scale", self.arrow.feedback_scale),
        ] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("scale must be positive and finite, got {scale}"),
                });
            }
        }
        Ok(())
    }
}

//! Feature tuning grouped per behavior. Defaults come from `constants`.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field}: interval must be positive")]
    ZeroInterval { field: &'static str },
    #[error("{field}: {value} is outside [0, 1]")]
    FractionOutOfRange { field: &'static str, value: f64 },
    #[error("{field}: {value} must be positive")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field}: {value} must not be negative")]
    Negative { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub max_offset_px: f64,
    pub scale: f64,
    pub interval_ms: u32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            max_offset_px: PARALLAX_MAX_OFFSET_PX,
            scale: PARALLAX_SCALE,
            interval_ms: PARALLAX_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub scroll_threshold: f64,
    pub interval_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: NAV_SCROLL_THRESHOLD,
            interval_ms: NAV_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_ms: u32,
    /// Viewport-test offset used when no intersection observer is available.
    pub fallback_offset: f64,
    pub fallback_interval_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            stagger_ms: REVEAL_STAGGER_MS,
            fallback_offset: VIEWPORT_DEFAULT_OFFSET,
            fallback_interval_ms: REVEAL_FALLBACK_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TouchConfig {
    pub release_delay_ms: u32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            release_delay_ms: TOUCH_RELEASE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub smooth: String,
    pub slow: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth: TRANSITION_SMOOTH_EASED.to_string(),
            slow: TRANSITION_SLOW_EASED.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub parallax: ParallaxConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub touch: TouchConfig,
    pub motion: MotionConfig,
}

fn check_interval(field: &'static str, ms: u32) -> Result<(), ConfigError> {
    if ms == 0 {
        return Err(ConfigError::ZeroInterval { field });
    }
    Ok(())
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::FractionOutOfRange { field, value });
    }
    Ok(())
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_interval("parallax.interval_ms", self.parallax.interval_ms)?;
        check_interval("nav.interval_ms", self.nav.interval_ms)?;
        check_interval("reveal.fallback_interval_ms", self.reveal.fallback_interval_ms)?;
        check_fraction("reveal.threshold", self.reveal.threshold)?;
        check_fraction("reveal.fallback_offset", self.reveal.fallback_offset)?;
        if !(self.parallax.scale > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "parallax.scale",
                value: self.parallax.scale,
            });
        }
        if !(self.parallax.max_offset_px >= 0.0) {
            return Err(ConfigError::Negative {
                field: "parallax.max_offset_px",
                value: self.parallax.max_offset_px,
            });
        }
        if self.nav.scroll_threshold < 0.0 {
            return Err(ConfigError::Negative {
                field: "nav.scroll_threshold",
                value: self.nav.scroll_threshold,
            });
        }
        Ok(())
    }
}

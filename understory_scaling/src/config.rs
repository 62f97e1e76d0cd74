// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container configuration and its validation.

use alloc::string::String;
use core::fmt;

/// Default design reference width, in pixels.
pub const DEFAULT_MIN_WIDTH: f64 = 768.0;

/// Default quantization granularity for the scale factor.
pub const DEFAULT_SCALE_STEP: f64 = 0.01;

/// Default upper bound for the scale factor when growing is enabled.
pub const DEFAULT_MAX_SCALE: f64 = 1.0;

/// Configuration for a [`crate::ScalingContainer`].
///
/// A configuration is fixed for the lifetime of a mounted container. Build one
/// from [`ScalingConfig::default`] and adjust it with the `with_*` methods:
///
/// ```rust
/// use understory_scaling::ScalingConfig;
///
/// let config = ScalingConfig::default()
///     .with_min_width(1024.0)
///     .with_scale_step(0.05)
///     .with_class_name("app-shell");
///
/// assert_eq!(config.min_width(), 1024.0);
/// assert!(config.disable_scaling_above_min_width());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalingConfig {
    min_width: f64,
    disable_scaling_above_min_width: bool,
    max_scale: f64,
    scale_step: f64,
    class_name: String,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            disable_scaling_above_min_width: true,
            max_scale: DEFAULT_MAX_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
            class_name: String::new(),
        }
    }
}

impl ScalingConfig {
    /// Sets the design reference width in pixels.
    ///
    /// Viewports narrower than this are scaled down so content authored at
    /// this width still fits.
    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Sets whether the scale stays at `1.0` for viewports at least
    /// [`min_width`](Self::min_width) wide.
    ///
    /// When `false`, wider viewports grow the content up to
    /// [`max_scale`](Self::max_scale).
    #[must_use]
    pub fn with_disable_scaling_above_min_width(mut self, disable: bool) -> Self {
        self.disable_scaling_above_min_width = disable;
        self
    }

    /// Sets the upper bound for the scale factor when growing is enabled.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets the quantization granularity of the scale factor.
    #[must_use]
    pub fn with_scale_step(mut self, scale_step: f64) -> Self {
        self.scale_step = scale_step;
        self
    }

    /// Sets the class name forwarded to the wrapper element.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Design reference width in pixels.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Whether scaling is limited to shrinking.
    #[must_use]
    pub fn disable_scaling_above_min_width(&self) -> bool {
        self.disable_scaling_above_min_width
    }

    /// Upper bound for the scale factor when growing is enabled.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Quantization granularity of the scale factor.
    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    /// Class name forwarded to the wrapper element.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Checks that the numeric settings describe a usable configuration.
    ///
    /// `min_width`, `scale_step` and `max_scale` must all be finite and
    /// strictly positive. The first offending field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_finite(self.min_width) {
            return Err(ConfigError::InvalidMinWidth(self.min_width));
        }
        if !is_positive_finite(self.scale_step) {
            return Err(ConfigError::InvalidScaleStep(self.scale_step));
        }
        if !is_positive_finite(self.max_scale) {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }
        Ok(())
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when a [`ScalingConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_width` was zero, negative or not finite.
    InvalidMinWidth(f64),
    /// `scale_step` was zero, negative or not finite.
    InvalidScaleStep(f64),
    /// `max_scale` was zero, negative or not finite.
    InvalidMaxScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinWidth(v) => {
                write!(f, "min_width must be a positive finite number, got {v}")
            }
            Self::InvalidScaleStep(v) => {
                write!(f, "scale_step must be a positive finite number, got {v}")
            }
            Self::InvalidMaxScale(v) => {
                write!(f, "max_scale must be a positive finite number, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport measurements and the scaling snapshot derived from them.

use kurbo::Size;

use crate::config::ScalingConfig;
use crate::scale::{compute_scale, scaled_vh};

/// Measured size of the host viewport, in device-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportDimensions {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
}

impl ViewportDimensions {
    /// Dimensions before anything has been measured.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates dimensions from a width and height in pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the dimensions as a Kurbo size.
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Snapshot of the scaling state published to descendant content.
///
/// A snapshot is derived from [`ViewportDimensions`] and a [`ScalingConfig`]
/// and never changes afterwards; containers publish a fresh one on every
/// resize. Outside of any container, [`ScalingState::NEUTRAL`] applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingState {
    /// Last measured viewport width in pixels.
    pub window_width: u32,
    /// Last measured viewport height in pixels.
    pub window_height: u32,
    /// Uniform scale factor applied to the container's content.
    pub scale: f64,
    detached: bool,
}

impl Default for ScalingState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl ScalingState {
    /// State observed outside of any scaling container.
    ///
    /// The scale is `1.0`, both dimensions are zero and
    /// [`scaled_vh`](Self::scaled_vh) returns its argument unchanged.
    pub const NEUTRAL: Self = Self {
        window_width: 0,
        window_height: 0,
        scale: 1.0,
        detached: true,
    };

    /// Derives the state for the given dimensions and configuration.
    #[must_use]
    pub fn derive(dimensions: ViewportDimensions, config: &ScalingConfig) -> Self {
        Self {
            window_width: dimensions.width,
            window_height: dimensions.height,
            scale: compute_scale(dimensions.width, config),
            detached: false,
        }
    }

    /// Returns `true` if this state did not come from a container.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.detached
    }

    /// Reciprocal of [`scale`](Self::scale).
    #[must_use]
    pub fn inverse_scale(&self) -> f64 {
        1.0 / self.scale
    }

    /// Viewport dimensions this state was derived from.
    #[must_use]
    pub fn dimensions(&self) -> ViewportDimensions {
        ViewportDimensions::new(self.window_width, self.window_height)
    }

    /// Converts `vh` percent of the viewport height into pixels in the scaled
    /// coordinate space.
    ///
    /// The neutral state has no measured height, so there the value is
    /// returned as is.
    #[must_use]
    pub fn scaled_vh(&self, vh: f64) -> f64 {
        if self.is_neutral() {
            return vh;
        }
        scaled_vh(self.window_height, self.scale, vh)
    }
}

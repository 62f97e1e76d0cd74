// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output of a measured container.

use core::fmt;

use kurbo::{Affine, Point, Rect};

/// Name of the style variable carrying the scale factor.
pub const SCALE_VAR: &str = "--scale";

/// Name of the style variable carrying the reciprocal of the scale factor.
pub const INVERSE_SCALE_VAR: &str = "--inverse-scale";

/// Layout and transform declarations for the wrapper element.
///
/// The wrapper is laid out `1 / scale` times as wide as its parent and one
/// full dynamic viewport height tall, then visually scaled by `scale` about
/// its top-left corner. After the transform it spans exactly the parent's
/// width, so children can be authored against the design width.
///
/// Non-DOM hosts use [`transform`](Self::transform) and
/// [`layout_rect`](Self::layout_rect); web hosts can format the style as CSS
/// declarations:
///
/// ```rust
/// use understory_scaling::WrapperStyle;
///
/// let style = WrapperStyle::new(0.5);
/// assert_eq!(
///     style.to_string(),
///     "--scale: 0.5; --inverse-scale: 2; transform-origin: left top; \
///      transform: scale(var(--scale)); width: calc(100% * var(--inverse-scale)); \
///      height: 100dvh; position: relative;"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapperStyle {
    scale: f64,
}

impl WrapperStyle {
    /// Anchor of the scale transform, in the wrapper's local coordinates.
    pub const TRANSFORM_ORIGIN: Point = Point::ZERO;

    /// Wrapper height, in dynamic viewport height units.
    pub const HEIGHT_DVH: f64 = 100.0;

    /// Creates the style for a scale factor.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// The scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Reciprocal of the scale factor.
    #[must_use]
    pub fn inverse_scale(&self) -> f64 {
        1.0 / self.scale
    }

    /// Wrapper width as a percentage of the parent's width.
    #[must_use]
    pub fn width_percent(&self) -> f64 {
        100.0 * self.inverse_scale()
    }

    /// Style variables exposed to descendant styling, as `(name, value)` pairs.
    #[must_use]
    pub fn variables(&self) -> [(&'static str, f64); 2] {
        [
            (SCALE_VAR, self.scale),
            (INVERSE_SCALE_VAR, self.inverse_scale()),
        ]
    }

    /// Transform from the wrapper's local space to its parent's space.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }

    /// Untransformed wrapper box for a parent of `parent_width` pixels inside a
    /// viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn layout_rect(&self, parent_width: f64, viewport_height: f64) -> Rect {
        Rect::from_origin_size(
            Self::TRANSFORM_ORIGIN,
            (parent_width * self.inverse_scale(), viewport_height),
        )
    }

    /// Wrapper box as it appears in the parent after the transform.
    #[must_use]
    pub fn visual_rect(&self, parent_width: f64, viewport_height: f64) -> Rect {
        self.transform()
            .transform_rect_bbox(self.layout_rect(parent_width, viewport_height))
    }
}

impl fmt::Display for WrapperStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.variables() {
            write!(f, "{name}: {value}; ")?;
        }
        write!(
            f,
            "transform-origin: left top; transform: scale(var({SCALE_VAR})); \
             width: calc(100% * var({INVERSE_SCALE_VAR})); height: {}dvh; position: relative;",
            Self::HEIGHT_DVH
        )
    }
}

/// The single wrapper a measured container renders around its children.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledFrame<'a, C> {
    children: C,
    style: WrapperStyle,
    class_name: &'a str,
}

impl<'a, C> ScaledFrame<'a, C> {
    pub(crate) fn new(children: C, style: WrapperStyle, class_name: &'a str) -> Self {
        Self {
            children,
            style,
            class_name,
        }
    }

    /// The wrapped content.
    #[must_use]
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Consumes the frame, returning the wrapped content.
    #[must_use]
    pub fn into_children(self) -> C {
        self.children
    }

    /// Style declarations for the wrapper.
    #[must_use]
    pub fn style(&self) -> WrapperStyle {
        self.style
    }

    /// Caller-supplied class name, forwarded unchanged.
    #[must_use]
    pub fn class_name(&self) -> &'a str {
        self.class_name
    }
}

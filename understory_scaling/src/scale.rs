// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure scale derivation.
//!
//! Everything here is a plain function of viewport dimensions and a
//! [`ScalingConfig`]. None of these helpers validate their inputs; see
//! [`ScalingConfig::validate`] for that.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::config::ScalingConfig;

/// Lower bound applied to the raw scale before quantization when shrinking.
pub const MIN_SCALE: f64 = 0.1;

/// Slack for `MIN_SCALE / step` landing a hair above an integer.
const FLOOR_EPSILON: f64 = 1e-9;

/// Derives the uniform scale factor for a viewport `width` in pixels.
///
/// - A zero width (nothing measured yet) yields `1.0`.
/// - Widths below [`ScalingConfig::min_width`] shrink proportionally, floored
///   at [`MIN_SCALE`].
/// - Wider viewports stay at `1.0` unless growing is enabled, in which case
///   the scale grows proportionally up to [`ScalingConfig::max_scale`].
///
/// The result is then [quantized](quantize) to
/// [`ScalingConfig::scale_step`]. When shrinking, quantization never drops the
/// scale below the smallest multiple of the step that is at least
/// [`MIN_SCALE`], so a coarse step cannot round the scale down to zero.
///
/// ```rust
/// use understory_scaling::{ScalingConfig, compute_scale};
///
/// let config = ScalingConfig::default();
/// assert!((compute_scale(384, &config) - 0.5).abs() < 1e-9);
/// assert_eq!(compute_scale(1200, &config), 1.0);
/// ```
#[must_use]
pub fn compute_scale(width: u32, config: &ScalingConfig) -> f64 {
    if width == 0 {
        return 1.0;
    }
    let ratio = f64::from(width) / config.min_width();
    let step = config.scale_step();
    if f64::from(width) < config.min_width() {
        return quantize(ratio.max(MIN_SCALE), step).max(quantized_floor(step));
    }
    let raw = if config.disable_scaling_above_min_width() {
        1.0
    } else {
        ratio.min(config.max_scale())
    };
    quantize(raw, step)
}

/// Smallest positive multiple of `step` that is not below [`MIN_SCALE`].
fn quantized_floor(step: f64) -> f64 {
    (MIN_SCALE / step - FLOOR_EPSILON).ceil().max(1.0) * step
}

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn quantize(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Converts a percentage of the viewport height into pixels inside a
/// coordinate space scaled by `scale`.
///
/// Content living under the scale transform that sizes itself with this value
/// renders at `vh` percent of the real viewport height.
#[must_use]
pub fn scaled_vh(height: u32, scale: f64, vh: f64) -> f64 {
    let pixels = f64::from(height) * vh / 100.0;
    pixels / scale
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::{MIN_SCALE, compute_scale, quantize, quantized_floor, scaled_vh};
    use crate::config::ScalingConfig;

    const EPS: f64 = 1e-9;

    fn is_multiple_of(value: f64, step: f64) -> bool {
        let n = value / step;
        (n - n.round()).abs() < 1e-6
    }

    #[test]
    fn unmeasured_width_is_neutral() {
        let config = ScalingConfig::default()
            .with_disable_scaling_above_min_width(false)
            .with_max_scale(3.0);
        assert_eq!(compute_scale(0, &config), 1.0);
    }

    #[test]
    fn half_width_scales_to_half() {
        let config = ScalingConfig::default();
        let scale = compute_scale(384, &config);
        assert!((scale - 0.5).abs() < EPS, "got {scale}");
    }

    #[test]
    fn wide_viewport_stays_at_one_when_growing_disabled() {
        let config = ScalingConfig::default().with_max_scale(4.0);
        assert_eq!(compute_scale(1200, &config), 1.0);
        assert_eq!(compute_scale(768, &config), 1.0);
    }

    #[test]
    fn bounded_grow_clamps_to_max_scale() {
        let config = ScalingConfig::default()
            .with_disable_scaling_above_min_width(false)
            .with_max_scale(1.5)
            .with_scale_step(0.1);
        let scale = compute_scale(1200, &config);
        assert!((scale - 1.5).abs() < EPS, "got {scale}");
    }

    #[test]
    fn bounded_grow_below_max_is_proportional() {
        let config = ScalingConfig::default()
            .with_disable_scaling_above_min_width(false)
            .with_max_scale(2.0);
        // 960 / 768 = 1.25
        let scale = compute_scale(960, &config);
        assert!((scale - 1.25).abs() < EPS, "got {scale}");
    }

    #[test]
    fn bounded_grow_is_not_floored() {
        let config = ScalingConfig::default()
            .with_disable_scaling_above_min_width(false)
            .with_max_scale(0.05);
        let scale = compute_scale(1200, &config);
        assert!((scale - 0.05).abs() < EPS, "got {scale}");
    }

    #[test]
    fn tiny_viewport_is_floored() {
        let config = ScalingConfig::default();
        let scale = compute_scale(10, &config);
        assert!((scale - MIN_SCALE).abs() < EPS, "got {scale}");
    }

    #[test]
    fn shrinking_never_goes_below_floor() {
        let config = ScalingConfig::default();
        for width in 1..768 {
            let scale = compute_scale(width, &config);
            assert!(scale >= MIN_SCALE - EPS, "width {width} gave {scale}");
            assert!(scale <= 1.0 + EPS, "width {width} gave {scale}");
        }
    }

    #[test]
    fn shrink_matches_quantized_ratio() {
        let config = ScalingConfig::default();
        for width in [77_u32, 200, 333, 500, 700, 767] {
            let expected = quantize((f64::from(width) / 768.0).max(MIN_SCALE), 0.01);
            assert_eq!(compute_scale(width, &config), expected);
        }
    }

    #[test]
    fn scale_is_always_a_multiple_of_step() {
        for step in [0.01, 0.05, 0.1, 0.25] {
            let config = ScalingConfig::default()
                .with_disable_scaling_above_min_width(false)
                .with_max_scale(2.0)
                .with_scale_step(step);
            for width in (1..2000).step_by(7) {
                let scale = compute_scale(width, &config);
                assert!(
                    is_multiple_of(scale, step),
                    "width {width} step {step} gave {scale}"
                );
            }
        }
    }

    #[test]
    fn coarse_step_keeps_scale_positive() {
        let config = ScalingConfig::default().with_scale_step(0.25);
        let scale = compute_scale(20, &config);
        assert!((scale - 0.25).abs() < EPS, "got {scale}");

        let config = ScalingConfig::default().with_scale_step(0.09);
        let scale = compute_scale(20, &config);
        assert!(scale >= MIN_SCALE, "got {scale}");
        assert!(is_multiple_of(scale, 0.09), "got {scale}");
    }

    #[test]
    fn derivation_is_idempotent() {
        let config = ScalingConfig::default()
            .with_disable_scaling_above_min_width(false)
            .with_max_scale(1.75)
            .with_scale_step(0.05);
        for width in [0_u32, 1, 384, 767, 768, 1000, 5000] {
            let a = compute_scale(width, &config);
            let b = compute_scale(width, &config);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn quantize_rounds_to_nearest() {
        assert!((quantize(0.504, 0.01) - 0.5).abs() < EPS);
        assert!((quantize(0.506, 0.01) - 0.51).abs() < EPS);
        assert!((quantize(1.26, 0.25) - 1.25).abs() < EPS);
    }

    #[test]
    fn floor_is_min_scale_for_fine_steps() {
        assert!((quantized_floor(0.01) - 0.1).abs() < EPS);
        assert!((quantized_floor(0.05) - 0.1).abs() < EPS);
        assert!((quantized_floor(0.1) - 0.1).abs() < EPS);
        assert!((quantized_floor(0.3) - 0.3).abs() < EPS);
    }

    #[test]
    fn floor_tolerates_inexact_step_division() {
        // 0.1 / (0.1 / 3) does not come out as exactly 3.
        for step in [0.1 / 3.0, 0.1 / 7.0, 0.1 / 9.0] {
            let floor = quantized_floor(step);
            assert!((floor - MIN_SCALE).abs() < EPS, "step {step} gave {floor}");
        }
    }

    #[test]
    fn scaled_vh_compensates_for_scale() {
        assert_eq!(scaled_vh(800, 0.5, 50.0), 800.0);
        assert_eq!(scaled_vh(800, 1.0, 50.0), 400.0);
        assert_eq!(scaled_vh(0, 0.5, 50.0), 0.0);
    }

    #[test]
    fn scaled_vh_times_scale_is_true_fraction() {
        for (height, scale) in [(800_u32, 0.5), (1080, 0.37), (640, 1.25)] {
            for vh in [0.0, 10.0, 33.3, 100.0] {
                let px = scaled_vh(height, scale, vh) * scale;
                let expected = f64::from(height) * vh / 100.0;
                assert!((px - expected).abs() < 1e-6);
            }
        }
    }
}

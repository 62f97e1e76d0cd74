// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scaling --heading-base-level=0

//! Understory Scaling: fit fixed-width content into narrow viewports.
//!
//! This crate provides a small, headless [`ScalingContainer`] that lets content
//! be authored against a single design width (for example 768 pixels) and
//! uniformly scales it down when the viewport is narrower. It focuses on:
//! - Deriving a quantized scale factor from the viewport width.
//! - Publishing that factor, plus a viewport-height helper, to descendant
//!   content through an explicitly passed [`ScalingContext`].
//! - Describing the wrapper's transform and size, as a [`kurbo::Affine`] and
//!   rectangles for native hosts or as CSS declarations for web hosts.
//!
//! It does **not** own a window, an event loop or a render tree. Callers are
//! expected to:
//! - Implement [`ViewportHost`] over their platform's window size query and
//!   root size observation.
//! - Forward size change notifications to [`ScalingContainer::handle_resize`].
//! - Pass the [`ScalingContext`] down to content that needs the scale.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_scaling::{
//!     ResizeSubscription, ScalingConfig, ScalingContainer, ViewportDimensions, ViewportHost,
//!     use_scaling,
//! };
//!
//! struct Window {
//!     size: ViewportDimensions,
//! }
//!
//! struct Observer;
//!
//! impl ResizeSubscription for Observer {
//!     fn disconnect(&mut self) {}
//! }
//!
//! impl ViewportHost for Window {
//!     fn measure(&self) -> Option<ViewportDimensions> {
//!         Some(self.size)
//!     }
//!
//!     fn observe_root(&mut self) -> Box<dyn ResizeSubscription> {
//!         Box::new(Observer)
//!     }
//! }
//!
//! let mut window = Window { size: ViewportDimensions::new(384, 800) };
//! let mut container = ScalingContainer::new(ScalingConfig::default()).unwrap();
//!
//! // Nothing renders until the viewport has been measured.
//! assert!(container.render("page").is_none());
//!
//! container.mount(&mut window);
//! let frame = container.render("page").unwrap();
//! assert!((frame.style().scale() - 0.5).abs() < 1e-9);
//!
//! // Content reads the scale through the context handle.
//! let ctx = container.context();
//! let state = use_scaling(Some(&ctx));
//! assert!((state.scaled_vh(50.0) - 800.0).abs() < 1e-9);
//!
//! // The window grows past the design width: back to 1:1.
//! window.size = ViewportDimensions::new(1280, 800);
//! container.handle_resize(&window);
//! assert_eq!(ctx.scale(), 1.0);
//! ```
//!
//! ## Scale derivation
//!
//! - Narrower than [`ScalingConfig::min_width`]: `width / min_width`, floored
//!   at [`MIN_SCALE`].
//! - Otherwise `1.0`, unless growing is enabled with
//!   [`ScalingConfig::with_disable_scaling_above_min_width`], in which case
//!   the ratio grows up to [`ScalingConfig::max_scale`].
//! - The result is rounded to a multiple of [`ScalingConfig::scale_step`] so
//!   that drag-resizing does not cause continuous sub-pixel churn.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod container;
mod context;
mod frame;
mod host;
mod scale;
mod state;

pub use config::{
    ConfigError, DEFAULT_MAX_SCALE, DEFAULT_MIN_WIDTH, DEFAULT_SCALE_STEP, ScalingConfig,
};
pub use container::{MountPhase, ScalingContainer, ScalingDebugInfo};
pub use context::{ScalingContext, use_scaling};
pub use frame::{INVERSE_SCALE_VAR, SCALE_VAR, ScaledFrame, WrapperStyle};
pub use host::{ResizeSubscription, ViewportHost};
pub use scale::{MIN_SCALE, compute_scale, quantize, scaled_vh};
pub use state::{ScalingState, ViewportDimensions};

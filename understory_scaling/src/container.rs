// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scaling container and its mount lifecycle.

use alloc::boxed::Box;
use core::fmt;

use crate::config::{ConfigError, ScalingConfig};
use crate::context::ScalingContext;
use crate::frame::{ScaledFrame, WrapperStyle};
use crate::host::{ResizeSubscription, ViewportHost};
use crate::state::{ScalingState, ViewportDimensions};

/// Whether a container has a viewport measurement to render against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MountPhase {
    /// No measurement yet; the container renders nothing.
    #[default]
    Unmeasured,
    /// At least one measurement arrived since mounting.
    Measured,
}

/// Scales fixed-width content down (or optionally up) to fit the viewport.
///
/// A container goes through a small lifecycle driven by its host:
///
/// 1. [`mount`](Self::mount) measures the viewport once and subscribes to
///    root size changes.
/// 2. [`handle_resize`](Self::handle_resize) re-measures on every size change
///    and republishes the derived [`ScalingState`].
/// 3. [`unmount`](Self::unmount), or dropping the container, disconnects the
///    subscription.
///
/// Until a measurement exists, [`render`](Self::render) produces nothing, so
/// content never shows up at a guessed scale.
pub struct ScalingContainer {
    config: ScalingConfig,
    dimensions: ViewportDimensions,
    phase: MountPhase,
    context: ScalingContext,
    subscription: Option<Box<dyn ResizeSubscription>>,
}

impl ScalingContainer {
    /// Creates an unmounted container.
    ///
    /// Returns an error if `config` fails [`ScalingConfig::validate`].
    pub fn new(config: ScalingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let context = ScalingContext::new(ScalingState::derive(ViewportDimensions::ZERO, &config));
        Ok(Self {
            config,
            dimensions: ViewportDimensions::ZERO,
            phase: MountPhase::Unmeasured,
            context,
            subscription: None,
        })
    }

    /// Activates the container in `host`.
    ///
    /// Takes one synchronous measurement, subscribes to root size changes and,
    /// if the host could report a size, moves to [`MountPhase::Measured`].
    /// Otherwise the container stays unmeasured until the first resize
    /// notification. Mounting an already mounted container does nothing.
    pub fn mount<H: ViewportHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_mounted() {
            return;
        }
        let measured = host.measure();
        self.subscription = Some(host.observe_root());
        match measured {
            Some(dimensions) => {
                self.apply_measurement(dimensions);
                log::debug!(
                    "scaling container mounted at {}x{} with scale {}",
                    dimensions.width,
                    dimensions.height,
                    self.state().scale
                );
            }
            None => log::debug!("scaling container mounted before the viewport could be measured"),
        }
    }

    /// Re-measures the viewport after a root size change.
    ///
    /// Returns `true` if the published state changed. Notifications that
    /// arrive while unmounted, or while the host cannot report a size, are
    /// ignored.
    pub fn handle_resize<H: ViewportHost + ?Sized>(&mut self, host: &H) -> bool {
        match host.measure() {
            Some(dimensions) => self.apply_measurement(dimensions),
            None => false,
        }
    }

    /// Stores a viewport measurement the host already has at hand.
    ///
    /// This is what [`handle_resize`](Self::handle_resize) does after querying
    /// the host; hosts whose resize events carry the new size can call it
    /// directly. Returns `true` if the published state changed.
    pub fn apply_measurement(&mut self, dimensions: ViewportDimensions) -> bool {
        if !self.is_mounted() {
            log::trace!("ignoring viewport measurement for an unmounted scaling container");
            return false;
        }
        log::trace!(
            "viewport measured at {}x{}",
            dimensions.width,
            dimensions.height
        );
        let previous_scale = self.state().scale;
        self.dimensions = dimensions;
        self.phase = MountPhase::Measured;
        let changed = self
            .context
            .publish(ScalingState::derive(dimensions, &self.config));
        let scale = self.state().scale;
        if scale != previous_scale {
            log::debug!("scale changed from {previous_scale} to {scale}");
        }
        changed
    }

    /// Deactivates the container, disconnecting its resize subscription.
    ///
    /// The subscription is released exactly once, whether or not a
    /// measurement ever arrived. Calling this on an unmounted container does
    /// nothing. Dropping a mounted container unmounts it.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.disconnect();
            log::debug!("scaling container unmounted");
        }
        self.phase = MountPhase::Unmeasured;
    }

    /// Wraps `children` in the scaled frame, or returns `None` while
    /// unmeasured.
    #[must_use]
    pub fn render<C>(&self, children: C) -> Option<ScaledFrame<'_, C>> {
        let style = self.style()?;
        Some(ScaledFrame::new(children, style, self.config.class_name()))
    }

    /// Wrapper style for the current scale, or `None` while unmeasured.
    #[must_use]
    pub fn style(&self) -> Option<WrapperStyle> {
        self.is_measured()
            .then(|| WrapperStyle::new(self.state().scale))
    }

    /// Returns `true` between [`mount`](Self::mount) and
    /// [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns `true` once a measurement is available to render against.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.phase == MountPhase::Measured
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    /// Last stored viewport dimensions.
    #[must_use]
    pub fn dimensions(&self) -> ViewportDimensions {
        self.dimensions
    }

    /// The configuration this container was created with.
    #[must_use]
    pub fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Currently published scaling state.
    #[must_use]
    pub fn state(&self) -> ScalingState {
        self.context.read()
    }

    /// Returns a handle for descendant content to read the scaling state.
    #[must_use]
    pub fn context(&self) -> ScalingContext {
        self.context.clone()
    }

    /// Snapshot of the container for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScalingDebugInfo {
        let state = self.state();
        ScalingDebugInfo {
            phase: self.phase,
            mounted: self.is_mounted(),
            dimensions: self.dimensions,
            scale: state.scale,
            inverse_scale: state.inverse_scale(),
            revision: self.context.revision(),
            min_width: self.config.min_width(),
            scale_step: self.config.scale_step(),
        }
    }
}

impl Drop for ScalingContainer {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for ScalingContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalingContainer")
            .field("config", &self.config)
            .field("dimensions", &self.dimensions)
            .field("phase", &self.phase)
            .field("context", &self.context)
            .field("subscription", &self.subscription.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Debug snapshot of a [`ScalingContainer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingDebugInfo {
    /// Lifecycle phase.
    pub phase: MountPhase,
    /// Whether a resize subscription is held.
    pub mounted: bool,
    /// Last stored viewport dimensions.
    pub dimensions: ViewportDimensions,
    /// Published scale factor.
    pub scale: f64,
    /// Reciprocal of the published scale factor.
    pub inverse_scale: f64,
    /// Context publication counter.
    pub revision: u64,
    /// Configured design reference width.
    pub min_width: f64,
    /// Configured quantization granularity.
    pub scale_step: f64,
}

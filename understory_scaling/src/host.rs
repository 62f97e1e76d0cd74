// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform seam: viewport queries and root size observation.

use alloc::boxed::Box;

use crate::state::ViewportDimensions;

/// Access to the host window a container is mounted in.
///
/// Implementations wrap whatever the platform offers, for example
/// `window.innerWidth` / `window.innerHeight` plus a `ResizeObserver` on the
/// document element in a browser, or the surface size and resize events of a
/// native window.
pub trait ViewportHost {
    /// Returns the current viewport size, or `None` if the host cannot report
    /// one yet.
    fn measure(&self) -> Option<ViewportDimensions>;

    /// Starts observing size changes of the host's root element.
    ///
    /// The host is expected to call [`crate::ScalingContainer::handle_resize`]
    /// whenever the root element's box size changes, until the returned
    /// subscription is disconnected.
    fn observe_root(&mut self) -> Box<dyn ResizeSubscription>;
}

/// A live root size observation.
pub trait ResizeSubscription {
    /// Stops delivering size change notifications.
    ///
    /// Containers call this exactly once per subscription.
    fn disconnect(&mut self);
}

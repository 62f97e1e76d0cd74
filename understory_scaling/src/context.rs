// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only scaling context shared with descendant content.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::state::ScalingState;

/// Handle to the scaling state published by one [`crate::ScalingContainer`].
///
/// The container owns the state; it hands out clones of this handle, which
/// descendants keep and pass further down their own tree. Every read observes
/// the state the container published most recently, so a handle never goes
/// stale across resizes.
///
/// Cloning is cheap (a reference count bump). The handle is `!Send` because a
/// container and its content live on the UI thread.
#[derive(Clone)]
pub struct ScalingContext {
    inner: Rc<Published>,
}

#[derive(Debug)]
struct Published {
    state: Cell<ScalingState>,
    revision: Cell<u64>,
}

impl ScalingContext {
    pub(crate) fn new(state: ScalingState) -> Self {
        Self {
            inner: Rc::new(Published {
                state: Cell::new(state),
                revision: Cell::new(0),
            }),
        }
    }

    /// Replaces the published state, bumping the revision if it changed.
    pub(crate) fn publish(&self, state: ScalingState) -> bool {
        if self.inner.state.get() == state {
            return false;
        }
        self.inner.state.set(state);
        self.inner
            .revision
            .set(self.inner.revision.get().wrapping_add(1));
        true
    }

    /// Returns the current scaling snapshot.
    #[must_use]
    pub fn read(&self) -> ScalingState {
        self.inner.state.get()
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.read().scale
    }

    /// Converts `vh` percent of the current viewport height into pixels in
    /// the scaled coordinate space, using the current scale.
    #[must_use]
    pub fn scaled_vh(&self, vh: f64) -> f64 {
        self.read().scaled_vh(vh)
    }

    /// Returns the publication counter.
    ///
    /// The revision starts at zero and increases each time the container
    /// publishes a state that differs from the previous one. Content can cache
    /// derived values keyed by it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Returns `true` if both handles refer to the same container's state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScalingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalingContext")
            .field("state", &self.read())
            .field("revision", &self.revision())
            .finish()
    }
}

/// Reads the scaling state visible to a piece of content.
///
/// Content inside a container passes the handle it was given; content outside
/// any container passes `None` and receives [`ScalingState::NEUTRAL`].
///
/// ```rust
/// use understory_scaling::{ScalingState, use_scaling};
///
/// let state = use_scaling(None);
/// assert_eq!(state, ScalingState::NEUTRAL);
/// assert_eq!(state.scaled_vh(25.0), 25.0);
/// ```
#[must_use]
pub fn use_scaling(context: Option<&ScalingContext>) -> ScalingState {
    context.map_or(ScalingState::NEUTRAL, ScalingContext::read)
}

// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the controller and the environment that renders it.

use kurbo::{Point, Size};
use touchball_geometry::{Bounds, ViewportMetrics, viewport_size};

use crate::listeners::Listeners;

/// Environment hosting a [`Controller`](crate::Controller).
///
/// Measurements are queried on every event and never cached by the
/// controller, so a host may answer from whatever its layout currently says.
pub trait Host: ViewportMetrics {
    /// Current rendered size of the control.
    fn control_size(&self) -> Size;

    /// Install the given global listeners.
    fn attach_listeners(&mut self, listeners: Listeners);

    /// Remove the given global listeners.
    ///
    /// The controller only asks to remove listeners it attached, but hosts
    /// should also tolerate removing absent listeners.
    fn detach_listeners(&mut self, listeners: Listeners);
}

/// Live placement bounds for the control inside the host's viewport.
pub(crate) fn bounds_of<H: Host + ?Sized>(host: &H) -> Bounds {
    Bounds::new(viewport_size(host), host.control_size())
}

/// Input device a pointer event came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse events.
    Mouse,
    /// Touch events; only the first changed touch is used.
    Touch,
}

/// A pointer event reduced to the shape the controller consumes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Device that produced the event.
    pub source: PointerSource,
    /// Client-space pointer position (`clientX`, `clientY`).
    pub point: Point,
}

impl PointerInput {
    /// A mouse event at `(x, y)`.
    #[must_use]
    pub const fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            point: Point::new(x, y),
        }
    }

    /// A touch event at `(x, y)`.
    #[must_use]
    pub const fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            point: Point::new(x, y),
        }
    }
}

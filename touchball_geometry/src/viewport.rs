// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live viewport measurement.

use kurbo::Size;

/// Host-provided measurements of the area the control lives in.
///
/// Hosts report two independent measurements because either one can be stale
/// or zero while the surrounding layout is in flux (for example inside an
/// embedded frame, or while a window is being restored). [`viewport_size`]
/// combines them.
pub trait ViewportMetrics {
    /// Client size of the root document element.
    fn document_client_size(&self) -> Size;

    /// Inner size of the hosting window, if the host has one.
    fn window_inner_size(&self) -> Option<Size>;
}

/// A viewport whose size is known up front.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedViewport {
    /// Size reported as the document client size.
    pub size: Size,
}

impl FixedViewport {
    /// Creates a viewport of `width` by `height` pixels.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl ViewportMetrics for FixedViewport {
    fn document_client_size(&self) -> Size {
        self.size
    }

    fn window_inner_size(&self) -> Option<Size> {
        None
    }
}

/// Returns the current viewport size.
///
/// Per axis this is the larger of the document client size and the window
/// inner size. Missing, negative, or non-finite measurements count as `0.0`,
/// so the result is always finite and non-negative. Never cache the result
/// across events; query it again each time.
#[must_use]
pub fn viewport_size<M: ViewportMetrics + ?Sized>(metrics: &M) -> Size {
    let document = metrics.document_client_size();
    let window = metrics.window_inner_size().unwrap_or(Size::ZERO);
    Size::new(
        measured(document.width).max(measured(window.width)),
        measured(document.height).max(measured(window.height)),
    )
}

fn measured(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

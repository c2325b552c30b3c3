// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::Position;

/// Valid placement range for a control of a given size inside a viewport.
///
/// A [`Position`] is in bounds when `0 <= left <= viewport.width - control.width`
/// and `0 <= top <= viewport.height - control.height`. When the control is
/// larger than the viewport on an axis, the only valid offset on that axis
/// is `0.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Current viewport size, as returned by [`viewport_size`](crate::viewport_size).
    pub viewport: Size,
    /// Rendered size of the control.
    pub control: Size,
}

impl Bounds {
    /// Creates bounds for a `control` placed inside `viewport`.
    #[must_use]
    pub const fn new(viewport: Size, control: Size) -> Self {
        Self { viewport, control }
    }

    /// Largest valid `left` offset.
    #[must_use]
    pub fn max_left(&self) -> f64 {
        (self.viewport.width - self.control.width).max(0.0)
    }

    /// Largest valid `top` offset.
    #[must_use]
    pub fn max_top(&self) -> f64 {
        (self.viewport.height - self.control.height).max(0.0)
    }

    /// Saturates `pos` into the valid placement range.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        Position {
            top: clamp_axis(pos.top, self.max_top()),
            left: clamp_axis(pos.left, self.max_left()),
        }
    }

    /// Returns `true` if `pos` is already within the valid placement range.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (0.0..=self.max_left()).contains(&pos.left) && (0.0..=self.max_top()).contains(&pos.top)
    }

    /// Returns `true` if a pointer `x` coordinate lies within `[0, viewport.width]`.
    #[must_use]
    pub fn contains_pointer_x(&self, x: f64) -> bool {
        (0.0..=self.viewport.width).contains(&x)
    }

    /// Returns `true` if a pointer `y` coordinate lies within `[0, viewport.height]`.
    #[must_use]
    pub fn contains_pointer_y(&self, y: f64) -> bool {
        (0.0..=self.viewport.height).contains(&y)
    }
}

// Upper bound first, then the origin, so an oversized control ends up at 0.
// `f64::clamp` is avoided because it propagates NaN.
fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max).max(0.0)
}

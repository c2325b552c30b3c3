// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pixel offset of the control's top-left corner from the viewport origin.
///
/// Field order follows the CSS `top`/`left` pair the control is styled with.
/// Conversions to and from [`kurbo::Point`] map `left` to `x` and `top` to `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Distance from the top edge of the viewport.
    pub top: f64,
    /// Distance from the left edge of the viewport.
    pub left: f64,
}

impl Position {
    /// The viewport origin.
    pub const ORIGIN: Self = Self {
        top: 0.0,
        left: 0.0,
    };

    /// Creates a position from its `top` and `left` offsets.
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Returns the position as a point (`x = left`, `y = top`).
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns this position moved by `delta`.
    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self {
            top: self.top + delta.y,
            left: self.left + delta.x,
        }
    }

    /// Returns `true` if both offsets are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.top.is_finite() && self.left.is_finite()
    }
}

impl From<Point> for Position {
    fn from(pt: Point) -> Self {
        Self {
            top: pt.y,
            left: pt.x,
        }
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        pos.to_point()
    }
}

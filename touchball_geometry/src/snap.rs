// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge snapping for a released control.
//!
//! The decision is a quadrant-based decision tree, not a Euclidean distance
//! search. The viewport is split into four quadrants around its center; inside
//! a quadrant the two adjacent edges are compared using raw coordinate
//! differences:
//!
//! | Quadrant     | Snaps to the horizontal edge when | otherwise |
//! |--------------|-----------------------------------|-----------|
//! | top-left     | `y <= x`                          | left      |
//! | top-right    | `y <= width - x`                  | right     |
//! | bottom-left  | `height - y <= x`                 | left      |
//! | bottom-right | `height - y <= width - x`         | right     |
//!
//! Ties go to the horizontal (top/bottom) edge. Points on the center lines
//! belong to the top and left halves, so a release exactly at the center
//! snaps to the top.

use kurbo::{Point, Size};

use crate::{Bounds, Position};

/// One of the four viewport quadrants around its center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `y <= height / 2` and `x <= width / 2`.
    TopLeft,
    /// `y <= height / 2` and `x > width / 2`.
    TopRight,
    /// `y > height / 2` and `x <= width / 2`.
    BottomLeft,
    /// `y > height / 2` and `x > width / 2`.
    BottomRight,
}

impl Quadrant {
    /// Classifies `pt` relative to the center of `viewport`.
    #[must_use]
    pub fn of(pt: Point, viewport: Size) -> Self {
        let top = pt.y <= viewport.height / 2.0;
        let left = pt.x <= viewport.width / 2.0;
        match (top, left) {
            (true, true) => Self::TopLeft,
            (true, false) => Self::TopRight,
            (false, true) => Self::BottomLeft,
            (false, false) => Self::BottomRight,
        }
    }
}

/// A viewport edge the control can rest against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `top = 0`.
    Top,
    /// `top = viewport.height - control.height`.
    Bottom,
    /// `left = 0`.
    Left,
    /// `left = viewport.width - control.width`.
    Right,
}

impl Edge {
    /// Moves `pos` flush against this edge, leaving the other axis untouched.
    #[must_use]
    pub fn apply(self, pos: Position, bounds: &Bounds) -> Position {
        match self {
            Self::Top => Position { top: 0.0, ..pos },
            Self::Bottom => Position {
                top: bounds.max_top(),
                ..pos
            },
            Self::Left => Position { left: 0.0, ..pos },
            Self::Right => Position {
                left: bounds.max_left(),
                ..pos
            },
        }
    }
}

/// Result of [`snap_to_side`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    /// Position after snapping.
    pub position: Position,
    /// Edge that won.
    pub edge: Edge,
}

/// Chooses the edge a control released at `release` should rest against.
#[must_use]
pub fn nearest_edge(release: Point, viewport: Size) -> Edge {
    let Point { x, y } = release;
    match Quadrant::of(release, viewport) {
        Quadrant::TopLeft => {
            if y <= x {
                Edge::Top
            } else {
                Edge::Left
            }
        }
        Quadrant::TopRight => {
            if y <= viewport.width - x {
                Edge::Top
            } else {
                Edge::Right
            }
        }
        Quadrant::BottomLeft => {
            if viewport.height - y <= x {
                Edge::Bottom
            } else {
                Edge::Left
            }
        }
        Quadrant::BottomRight => {
            if viewport.height - y <= viewport.width - x {
                Edge::Bottom
            } else {
                Edge::Right
            }
        }
    }
}

/// Snaps a control at `pos`, released with the pointer at `release`, to one edge.
///
/// Exactly one axis is forced to an edge value; the other keeps its value
/// from `pos`.
#[must_use]
pub fn snap_to_side(release: Point, pos: Position, bounds: &Bounds) -> Snap {
    let edge = nearest_edge(release, bounds.viewport);
    Snap {
        position: edge.apply(pos, bounds),
        edge,
    }
}

// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: turn raw pointer coordinates into clamped control positions.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragTracker::begin`] at the pointer-down point.
//! 2) On each move, call [`DragTracker::track`] with the current control
//!    position and [`Bounds`]; it returns the next, clamped position.
//! 3) End the session with [`DragTracker::finish`] to learn whether the
//!    gesture was a drag or a tap.
//!
//! ## Out-of-viewport moves
//!
//! A pointer coordinate outside `[0, viewport]` on an axis contributes no
//! movement on that axis, and the previous pointer coordinate for that axis
//! is left at its last in-bounds value. A pointer that leaves the viewport
//! and comes back therefore resumes from where it left instead of jumping.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use touchball_geometry::{Bounds, Position};
//! use touchball_interaction::drag::DragTracker;
//!
//! let bounds = Bounds::new(Size::new(1000.0, 800.0), Size::new(50.0, 50.0));
//! let mut drag = DragTracker::default();
//!
//! drag.begin(Point::new(150.0, 150.0));
//! let pos = drag
//!     .track(Point::new(900.0, 120.0), Position::new(100.0, 100.0), &bounds)
//!     .unwrap();
//! assert_eq!(pos, Position::new(70.0, 850.0));
//!
//! let release = drag.finish(Point::new(900.0, 120.0)).unwrap();
//! assert!(release.moved);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};
use touchball_geometry::{Bounds, Position};

/// State of one pointer-down → pointer-up interaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Last in-bounds pointer coordinate on each axis.
    pub previous_pointer: Point,
    /// Whether any move with an in-bounds coordinate was seen.
    pub moved: bool,
}

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Pointer position at release.
    pub point: Point,
    /// `false` for a tap, `true` for a drag.
    pub moved: bool,
}

/// Owns at most one [`DragSession`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Start a new session at `pt`, replacing any session in progress.
    pub fn begin(&mut self, pt: Point) {
        self.session = Some(DragSession {
            previous_pointer: pt,
            moved: false,
        });
    }

    /// Apply a pointer move to `pos`, returning the clamped result.
    ///
    /// Returns `None` when no session is active.
    pub fn track(&mut self, pt: Point, pos: Position, bounds: &Bounds) -> Option<Position> {
        let session = self.session.as_mut()?;
        let mut delta = Vec2::ZERO;

        let in_x = bounds.contains_pointer_x(pt.x);
        if in_x {
            delta.x = pt.x - session.previous_pointer.x;
            session.previous_pointer.x = pt.x;
        }
        let in_y = bounds.contains_pointer_y(pt.y);
        if in_y {
            delta.y = pt.y - session.previous_pointer.y;
            session.previous_pointer.y = pt.y;
        }
        if in_x || in_y {
            session.moved = true;
        }

        Some(bounds.clamp(pos.offset(delta)))
    }

    /// End the session, reporting whether it moved.
    ///
    /// Returns `None` when no session is active.
    pub fn finish(&mut self, pt: Point) -> Option<Release> {
        self.session.take().map(|session| Release {
            point: pt,
            moved: session.moved,
        })
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` while an active session has moved.
    pub fn has_moved(&self) -> bool {
        self.session.is_some_and(|s| s.moved)
    }
}

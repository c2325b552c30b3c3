// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the presentation layer draws for a given controller state.

use alloc::format;
use alloc::string::String;

use touchball_geometry::Position;

/// Style of the draggable control itself.
///
/// The control stays mounted while the menu is open; it is hidden by scaling
/// it to zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BallStyle {
    /// Absolute `top` offset in pixels.
    pub top: f64,
    /// Absolute `left` offset in pixels.
    pub left: f64,
    /// `1.0` while the menu is closed, `0.0` while it is open.
    pub scale: f64,
}

impl BallStyle {
    pub(crate) fn new(position: Position, is_open: bool) -> Self {
        Self {
            top: position.top,
            left: position.left,
            scale: if is_open { 0.0 } else { 1.0 },
        }
    }

    /// Renders the style as inline CSS declarations.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "top: {}px; left: {}px; transform: scale({})",
            self.top, self.left, self.scale
        )
    }
}

/// Inputs for the menu overlay collaborator.
///
/// Overlay background clicks go back to
/// [`Controller::overlay_clicked`](crate::Controller::overlay_clicked).
#[derive(Debug)]
pub struct MenuProps<'a, T> {
    /// Configured menu items, untouched.
    pub items: &'a [T],
    /// Whether the overlay is open.
    pub open: bool,
    /// Control position the menu is anchored to.
    pub position: Position,
}

impl<T> Clone for MenuProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MenuProps<'_, T> {}

/// Everything needed to draw one frame.
#[derive(Debug)]
pub struct Frame<'a, T> {
    /// Style of the draggable control.
    pub ball: BallStyle,
    /// Menu overlay, or `None` while a drag is moving the control.
    pub menu: Option<MenuProps<'a, T>>,
}

// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global listener bookkeeping and event dispositions.

bitflags::bitflags! {
    /// Global (window-level) listeners the controller asks its host to install.
    ///
    /// Mouse and touch variants are attached together on pointer-down so the
    /// rest of a gesture is seen even after the pointer leaves the control.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// `mousemove` on the window.
        const MOUSE_MOVE   = 0b0000_0001;
        /// `mouseup` on the window.
        const MOUSE_UP     = 0b0000_0010;
        /// `touchmove` on the window.
        const TOUCH_MOVE   = 0b0000_0100;
        /// `touchend` on the window.
        const TOUCH_END    = 0b0000_1000;
        /// `touchcancel` on the window.
        const TOUCH_CANCEL = 0b0001_0000;
        /// Window `resize`, installed for the controller's whole mounted lifetime.
        const RESIZE       = 0b0010_0000;

        /// Every listener that belongs to a drag session.
        const DRAG = Self::MOUSE_MOVE.bits()
            | Self::MOUSE_UP.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits()
            | Self::TOUCH_CANCEL.bits();
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags::bitflags! {
    /// What the host should do with the native event after the controller saw it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Disposition: u8 {
        /// Suppress the platform default action (for touch, page scrolling).
        const PREVENT_DEFAULT  = 0b01;
        /// Do not deliver the event to any further handler.
        const STOP_PROPAGATION = 0b10;

        /// The event was fully consumed.
        const CONSUMED = Self::PREVENT_DEFAULT.bits() | Self::STOP_PROPAGATION.bits();
    }
}

impl Default for Disposition {
    fn default() -> Self {
        Self::empty()
    }
}

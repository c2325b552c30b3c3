// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchball Geometry: placement math for a floating, draggable control.
//!
//! This crate holds the pure geometry behind an "assistive touch" ball:
//! - Measuring the live viewport from host-provided metrics ([`viewport_size`]).
//! - Keeping the control fully on screen ([`Bounds::clamp`]).
//! - Choosing the edge a released control rests against ([`snap_to_side`]).
//!
//! It does **not** track pointer sessions or menu state. That lives in
//! `touchball_interaction`, which calls into this crate on every event.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use touchball_geometry::{Bounds, Edge, Position, snap_to_side};
//!
//! let bounds = Bounds::new(Size::new(1000.0, 800.0), Size::new(50.0, 50.0));
//!
//! // Positions are saturated so the control never leaves the viewport.
//! let clamped = bounds.clamp(Position { top: -20.0, left: 990.0 });
//! assert_eq!(clamped, Position { top: 0.0, left: 950.0 });
//!
//! // A release near the top-right corner, closer (by the proxy metric) to
//! // the right edge than to the top edge, snaps right.
//! let snap = snap_to_side(Point::new(900.0, 120.0), Position { top: 70.0, left: 850.0 }, &bounds);
//! assert_eq!(snap.edge, Edge::Right);
//! assert_eq!(snap.position, Position { top: 70.0, left: 950.0 });
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`Position`].
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod snap;
mod types;
mod viewport;

pub use bounds::Bounds;
pub use snap::{Edge, Quadrant, Snap, nearest_edge, snap_to_side};
pub use types::Position;
pub use viewport::{FixedViewport, ViewportMetrics, viewport_size};

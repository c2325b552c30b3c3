// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchball Interaction: a headless state machine for an "assistive touch" ball.
//!
//! ## Overview
//!
//! An assistive touch ball is a small floating control the user can drag
//! anywhere on screen. Releasing it after a drag leaves it where it was
//! dropped, or snaps it against the nearest edge. Tapping it opens an
//! attached menu overlay; clicking the overlay background closes the menu
//! again.
//!
//! This crate owns only the interaction logic. The host:
//! - reports viewport and control measurements and installs or removes global
//!   listeners on request ([`Host`]);
//! - feeds pointer, resize, and overlay events to a [`Controller`];
//! - redraws from [`Controller::frame`] whenever a handler publishes a
//!   snapshot ([`Handled::snapshot`]).
//!
//! Geometry (clamping, snapping) comes from [`touchball_geometry`].
//!
//! ## Lifecycle
//!
//! 1) [`Controller::new`] with a [`Config`], then [`Controller::mount`], which
//!    installs the resize listener.
//! 2) [`Controller::pointer_down`] starts a drag session and installs the
//!    [`Listeners::DRAG`] set.
//! 3) [`Controller::pointer_move`] moves the control, clamped to the viewport.
//! 4) [`Controller::pointer_up`] (or [`Controller::pointer_cancel`]) ends the
//!    session: a tap toggles the menu, a drag may snap, and the drag listeners
//!    are removed.
//! 5) [`Controller::unmount`] removes everything that is left.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use touchball_geometry::{Position, ViewportMetrics};
//! use touchball_interaction::{
//!     Behaviour, Config, Controller, Host, Listeners, PointerInput,
//! };
//!
//! struct Window {
//!     size: Size,
//!     listeners: Listeners,
//! }
//!
//! impl ViewportMetrics for Window {
//!     fn document_client_size(&self) -> Size {
//!         self.size
//!     }
//!     fn window_inner_size(&self) -> Option<Size> {
//!         Some(self.size)
//!     }
//! }
//!
//! impl Host for Window {
//!     fn control_size(&self) -> Size {
//!         Size::new(50.0, 50.0)
//!     }
//!     fn attach_listeners(&mut self, listeners: Listeners) {
//!         self.listeners.insert(listeners);
//!     }
//!     fn detach_listeners(&mut self, listeners: Listeners) {
//!         self.listeners.remove(listeners);
//!     }
//! }
//!
//! let mut window = Window { size: Size::new(1000.0, 800.0), listeners: Listeners::empty() };
//! let config = Config::new(Position::new(100.0, 100.0), vec!["home", "settings"])
//!     .with_behaviour(Behaviour::SnapToSides);
//! let mut ball = Controller::new(config);
//! ball.mount(&mut window);
//!
//! // Drag towards the top-right corner and let go.
//! ball.pointer_down(&mut window, PointerInput::mouse(150.0, 150.0));
//! ball.pointer_move(&mut window, PointerInput::mouse(900.0, 120.0));
//! let handled = ball.pointer_up(&mut window, PointerInput::mouse(900.0, 120.0));
//!
//! // Snapped to the right edge; the menu stays closed.
//! let state = handled.snapshot.unwrap();
//! assert_eq!(state.position, Position::new(70.0, 950.0));
//! assert!(!state.is_open);
//! assert_eq!(window.listeners, Listeners::RESIZE);
//!
//! // A tap opens the menu and hides the ball.
//! ball.pointer_down(&mut window, PointerInput::mouse(960.0, 80.0));
//! ball.pointer_up(&mut window, PointerInput::mouse(960.0, 80.0));
//! let frame = ball.frame();
//! assert!(frame.menu.unwrap().open);
//! assert_eq!(frame.ball.scale, 0.0);
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`] at `debug` level, and
//! every tracked move at `trace` level. No subscriber is installed here.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`, `tracing`, and `thiserror`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`Config`] and [`Behaviour`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod drag;
mod frame;
mod host;
mod listeners;

pub use config::{Behaviour, Config, ConfigError};
pub use controller::{Controller, Handled, InteractionState, Phase};
pub use frame::{BallStyle, Frame, MenuProps};
pub use host::{Host, PointerInput, PointerSource};
pub use listeners::{Disposition, Listeners};

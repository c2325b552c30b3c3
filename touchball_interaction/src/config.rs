// Copyright 2025 the Touchball Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.
//!
//! With the `serde` feature, [`Config`] deserializes from the same shape the
//! control is usually configured with in a web page:
//!
//! ```json
//! {
//!   "initialPosition": { "top": 100, "left": 100 },
//!   "menuItems": ["home", "settings"],
//!   "behaviour": "snapToSides"
//! }
//! ```
//!
//! `behaviour` may be omitted, in which case no snapping happens.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use touchball_geometry::Position;

/// What happens to the control when a drag is released.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Behaviour {
    /// Leave the control where it was dropped.
    #[default]
    Default,
    /// Move the control flush against the nearest viewport edge.
    SnapToSides,
}

impl Behaviour {
    /// Name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::SnapToSides => "snapToSides",
        }
    }
}

impl fmt::Display for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Behaviour {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "snapToSides" => Ok(Self::SnapToSides),
            other => Err(ConfigError::UnknownBehaviour(other.to_string())),
        }
    }
}

/// Errors raised while building a [`Config`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The behaviour name is not `default` or `snapToSides`.
    #[error("unknown behaviour `{0}`, expected `default` or `snapToSides`")]
    UnknownBehaviour(String),
    /// The initial position has a NaN or infinite coordinate.
    #[error("initial position must have finite coordinates")]
    NonFinitePosition,
}

/// Read-only configuration for a [`Controller`](crate::Controller).
///
/// `T` is the menu item type. The controller hands items to the menu
/// presentation untouched and never inspects them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Config<T> {
    /// Where the control starts when mounted.
    pub initial_position: Position,
    /// Items shown in the menu, in order.
    pub menu_items: Vec<T>,
    /// Release behaviour after a drag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub behaviour: Behaviour,
}

impl<T> Config<T> {
    /// Creates a configuration with [`Behaviour::Default`].
    #[must_use]
    pub fn new(initial_position: Position, menu_items: Vec<T>) -> Self {
        Self {
            initial_position,
            menu_items,
            behaviour: Behaviour::Default,
        }
    }

    /// Sets the release behaviour.
    #[must_use]
    pub fn with_behaviour(mut self, behaviour: Behaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    /// Checks values that cannot be fixed up by clamping.
    ///
    /// Out-of-viewport initial positions are accepted; they are clamped when
    /// the controller is mounted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_position.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonFinitePosition)
        }
    }
}

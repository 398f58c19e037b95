// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity estimation and per-frame decay.
//!
//! ## Model
//!
//! While dragging, the host samples the pointer position once per frame and
//! [`VelocityState::track`] derives velocity as the difference between the two
//! most recent samples. There is no smoothing: the estimate is exactly the last
//! frame-to-frame movement.
//!
//! After release, [`VelocityState::coast`] returns the current velocity as the
//! step for this frame and multiplies it by the [`Friction`] coefficient.
//!
//! Decay is per frame, not per unit of time. Coast distance and duration
//! therefore depend on the host's frame rate.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_inertia::velocity::{Friction, VelocityState};
//!
//! let mut v = VelocityState::default();
//! v.seed(Point::ZERO);
//! assert_eq!(v.track(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
//! assert_eq!(v.track(Point::new(12.0, 3.0)), Vec2::new(7.0, 0.0));
//!
//! let friction = Friction::new(0.5).unwrap();
//! assert_eq!(v.coast(friction), Vec2::new(7.0, 0.0));
//! assert_eq!(v.velocity(), Vec2::new(3.5, 0.0));
//! ```

use kurbo::{Point, Vec2};

use crate::error::ConfigError;

/// Velocity components below this magnitude count as zero.
///
/// Same units as position deltas, per frame.
pub const REST_EPSILON: f64 = 0.001;

/// True if `value` is within [`REST_EPSILON`] of zero.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value > -REST_EPSILON && value < REST_EPSILON
}

/// Per-frame velocity multiplier in the open interval (0, 1).
///
/// Smaller values stop coasting sooner.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Friction(f64);

impl Friction {
    /// Default coefficient.
    pub const DEFAULT: Self = Self(0.85);

    /// Validate a coefficient.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::FrictionOutOfRange(value))
        }
    }

    /// The raw coefficient.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Friction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Friction {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Friction> for f64 {
    fn from(f: Friction) -> Self {
        f.0
    }
}

/// Two-sample velocity estimate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VelocityState {
    velocity: Vec2,
    sample: Point,
    prev_sample: Point,
}

impl VelocityState {
    /// Current velocity, per frame.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// The two most recent position samples, oldest first.
    pub fn samples(&self) -> (Point, Point) {
        (self.prev_sample, self.sample)
    }

    /// True if both components are within [`REST_EPSILON`] of zero.
    pub fn is_at_rest(&self) -> bool {
        approx_zero(self.velocity.x) && approx_zero(self.velocity.y)
    }

    /// Zero the velocity. Samples are kept.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Zero the velocity and make `position` both samples, so the next
    /// [`track`](Self::track) measures movement from `position`.
    pub fn seed(&mut self, position: Point) {
        self.velocity = Vec2::ZERO;
        self.sample = position;
        self.prev_sample = position;
    }

    /// Shift in a new sample and return the frame-to-frame difference, which
    /// becomes the velocity.
    pub fn track(&mut self, position: Point) -> Vec2 {
        self.prev_sample = self.sample;
        self.sample = position;
        self.velocity = self.sample - self.prev_sample;
        self.velocity
    }

    /// Return the velocity as this frame's step, then decay it by `friction`.
    pub fn coast(&mut self, friction: Friction) -> Vec2 {
        let step = self.velocity;
        self.velocity *= friction.get();
        step
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

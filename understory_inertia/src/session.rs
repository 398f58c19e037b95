// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: compute movement deltas and the accumulated offset.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::begin`] at the press position.
//! 2) On each move, call [`DragSession::move_to`] to get the delta since the last position.
//! 3) End with [`DragSession::end`]. Start, last position, and accumulated offset stay
//!    readable so that release and coasting can keep reporting them.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_inertia::session::DragSession;
//!
//! let mut s = DragSession::default();
//! s.begin(Point::new(10.0, 20.0));
//! assert_eq!(s.move_to(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(s.move_to(Point::new(12.0, 30.0)), Some(Vec2::new(-3.0, 5.0)));
//! assert_eq!(s.accumulated(), Vec2::new(2.0, 10.0));
//! assert!(s.end());
//! assert!(!s.is_active());
//! ```

use kurbo::{Point, Vec2};

use crate::types::{Cancel, Motion};

/// Position bookkeeping for one drag session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    start: Point,
    last: Point,
    accumulated: Vec2,
    active: bool,
}

impl DragSession {
    /// Start a session at `position`, discarding any previous one.
    pub fn begin(&mut self, position: Point) {
        self.start = position;
        self.last = position;
        self.accumulated = Vec2::ZERO;
        self.active = true;
    }

    /// Record a new pointer position and return the delta from the last one.
    ///
    /// Returns `None` when no session is active.
    pub fn move_to(&mut self, position: Point) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let delta = position - self.last;
        self.accumulated += delta;
        self.last = position;
        Some(delta)
    }

    /// Advance the last position by `step` without input, as coasting does.
    pub fn advance(&mut self, step: Vec2) {
        self.last += step;
        self.accumulated += step;
    }

    /// Deactivate the session. Returns `false` if it was not active.
    pub fn end(&mut self) -> bool {
        core::mem::replace(&mut self.active, false)
    }

    /// Returns `true` while a drag session is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position where the session started.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last known position, including coasting steps.
    pub fn last(&self) -> Point {
        self.last
    }

    /// Sum of all deltas since [`begin`](Self::begin).
    pub fn accumulated(&self) -> Vec2 {
        self.accumulated
    }

    /// Event payload carrying `delta` and the current accumulated offset.
    pub fn motion(&self, delta: Vec2) -> Motion {
        Motion {
            drag_start: self.start,
            delta,
            accumulated: self.accumulated,
        }
    }

    /// Event payload for a cancelation.
    pub fn cancel(&self) -> Cancel {
        Cancel {
            drag_start: self.start,
            accumulated: self.accumulated,
        }
    }
}

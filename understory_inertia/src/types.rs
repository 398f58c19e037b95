// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: event kinds and payloads, press input, target flags, and phases.
//!
//! ## Overview
//!
//! These types describe what goes into an [`InertiaDrag`](crate::drag::InertiaDrag)
//! (a [`PressInput`] per host input event) and what comes out of it (a
//! [`DragEvent`] per published notification).

use kurbo::{Point, Vec2};

/// The closed set of notifications published by the tracker.
///
/// Used as the registry key of the [`Notifier`](crate::notifier::Notifier).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A drag session began.
    DragStart,
    /// The pointer moved during a drag session.
    DragMove,
    /// The user released the pointer.
    DragEnd,
    /// The drag session was interrupted programmatically.
    DragCancel,
    /// One frame of post-release coasting.
    InertiaMove,
}

impl EventKind {
    /// Number of distinct kinds.
    pub const COUNT: usize = 5;

    /// All kinds in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::DragStart,
        Self::DragMove,
        Self::DragEnd,
        Self::DragCancel,
        Self::InertiaMove,
    ];

    /// Conventional lowercase event name (`"dragstart"`, `"inertiamove"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::DragMove => "dragmove",
            Self::DragEnd => "dragend",
            Self::DragCancel => "dragcancel",
            Self::InertiaMove => "inertiamove",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload shared by every event kind except [`EventKind::DragCancel`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    /// Position where the current drag session started.
    pub drag_start: Point,
    /// Movement carried by this event; zero for start and end.
    pub delta: Vec2,
    /// Sum of all deltas since the drag session started, including this one.
    pub accumulated: Vec2,
}

/// Payload of [`EventKind::DragCancel`]. Carries no delta.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cancel {
    /// Position where the canceled drag session started.
    pub drag_start: Point,
    /// Sum of all deltas up to the cancelation.
    pub accumulated: Vec2,
}

/// A published notification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent {
    /// See [`EventKind::DragStart`].
    DragStart(Motion),
    /// See [`EventKind::DragMove`].
    DragMove(Motion),
    /// See [`EventKind::DragEnd`].
    DragEnd(Motion),
    /// See [`EventKind::DragCancel`].
    DragCancel(Cancel),
    /// See [`EventKind::InertiaMove`].
    InertiaMove(Motion),
}

impl DragEvent {
    /// The kind used to look up listeners for this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::DragStart(_) => EventKind::DragStart,
            Self::DragMove(_) => EventKind::DragMove,
            Self::DragEnd(_) => EventKind::DragEnd,
            Self::DragCancel(_) => EventKind::DragCancel,
            Self::InertiaMove(_) => EventKind::InertiaMove,
        }
    }

    /// The motion payload, or `None` for a cancelation.
    pub const fn motion(&self) -> Option<&Motion> {
        match self {
            Self::DragStart(m) | Self::DragMove(m) | Self::DragEnd(m) | Self::InertiaMove(m) => {
                Some(m)
            }
            Self::DragCancel(_) => None,
        }
    }

    /// Start position of the session this event belongs to.
    pub const fn drag_start(&self) -> Point {
        match self {
            Self::DragStart(m) | Self::DragMove(m) | Self::DragEnd(m) | Self::InertiaMove(m) => {
                m.drag_start
            }
            Self::DragCancel(c) => c.drag_start,
        }
    }

    /// Accumulated offset reported by this event.
    pub const fn accumulated(&self) -> Vec2 {
        match self {
            Self::DragStart(m) | Self::DragMove(m) | Self::DragEnd(m) | Self::InertiaMove(m) => {
                m.accumulated
            }
            Self::DragCancel(c) => c.accumulated,
        }
    }

    /// Delta carried by this event; zero for a cancelation.
    pub fn delta(&self) -> Vec2 {
        self.motion().map_or(Vec2::ZERO, |m| m.delta)
    }
}

bitflags::bitflags! {
    /// Properties of the element an input event was delivered to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TargetFlags: u8 {
        /// The target opted out of drag handling; press-start on it is ignored.
        const DRAG_EXEMPT = 0b0000_0001;
    }
}

/// Where the coordinates of a press input come from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputSource<'a> {
    /// Single-point input such as a mouse.
    Pointer(Point),
    /// Multi-point input; only the first active touch drives the drag.
    Touch(&'a [Point]),
}

impl InputSource<'_> {
    /// Normalize to a single point. Returns `None` for an empty touch list.
    pub fn point(&self) -> Option<Point> {
        match *self {
            Self::Pointer(p) => Some(p),
            Self::Touch(touches) => touches.first().copied(),
        }
    }
}

/// A host press-start or press-move input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressInput<'a> {
    /// Input coordinates.
    pub source: InputSource<'a>,
    /// Flags of the element the input was delivered to.
    pub target: TargetFlags,
}

impl<'a> PressInput<'a> {
    /// A pointer input on an ordinary target.
    pub const fn pointer(position: Point) -> Self {
        Self {
            source: InputSource::Pointer(position),
            target: TargetFlags::empty(),
        }
    }

    /// A touch input on an ordinary target.
    pub const fn touch(touches: &'a [Point]) -> Self {
        Self {
            source: InputSource::Touch(touches),
            target: TargetFlags::empty(),
        }
    }

    /// Replace the target flags.
    #[must_use]
    pub const fn with_target(mut self, target: TargetFlags) -> Self {
        self.target = target;
        self
    }

    /// True if the target opted out of drag handling.
    pub const fn is_drag_exempt(&self) -> bool {
        self.target.contains(TargetFlags::DRAG_EXEMPT)
    }
}

/// What the host should do with the platform event after a press handler ran.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PressResponse {
    /// The tracker used the input; suppress default scrolling and selection.
    Consumed,
    /// The tracker ignored the input; let the platform handle it.
    Ignored,
}

impl PressResponse {
    /// True for [`PressResponse::Consumed`].
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// States of the frame-driven inertia machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InertiaPhase {
    /// At rest; no frames are requested.
    Idle,
    /// Dragging; each frame samples the pointer position into a velocity.
    Tracking,
    /// Released; each frame decays the velocity and emits an inertia move.
    Coasting,
}

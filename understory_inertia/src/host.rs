// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: frame timing and input observer wiring.
//!
//! ## Overview
//!
//! [`InertiaDrag`](crate::drag::InertiaDrag) never talks to a windowing system
//! directly. It asks the host for animation frames through [`FrameScheduler`]
//! and tells the host which input listeners to wire through [`InputObservers`].
//!
//! - Press observers deliver press-start on the dragged element. They are
//!   attached when the tracker is created and detached by
//!   [`destroy`](crate::drag::InertiaDrag::destroy).
//! - Tracking observers deliver press-move and press-end, usually at document or
//!   window level so that the drag continues outside the element. They are
//!   attached on drag start and detached on drag end or cancel, and detached
//!   again unconditionally at the start of every drag.
//!
//! Hosts that poll instead of registering callbacks can use [`ObserverState`]
//! and forward move/end input only while [`ObserverState::is_tracking`] is set.

/// Frame-timing primitive, the equivalent of `requestAnimationFrame`.
///
/// When a requested frame fires, the host calls
/// [`InertiaDrag::on_frame`](crate::drag::InertiaDrag::on_frame).
pub trait FrameScheduler {
    /// Handle of a pending frame request.
    type FrameId: Copy + core::fmt::Debug + Eq;
    /// Request one callback on the next frame.
    fn request_frame(&mut self) -> Self::FrameId;
    /// Cancel a request made by [`request_frame`](Self::request_frame) that has not fired yet.
    fn cancel_frame(&mut self, id: Self::FrameId);
}

/// Attach/detach input listeners at drag state transitions.
pub trait InputObservers {
    /// Start delivering press-start on the element.
    fn attach_press(&mut self);
    /// Stop delivering press-start on the element.
    fn detach_press(&mut self);
    /// Start delivering press-move and press-end.
    fn attach_tracking(&mut self);
    /// Stop delivering press-move and press-end.
    fn detach_tracking(&mut self);
}

/// A no-op observer set for hosts that route every input unconditionally.
///
/// Used by [`InertiaDrag::new`](crate::drag::InertiaDrag::new) callers that do
/// not need the attach/detach notifications.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObservers;

impl InputObservers for NoObservers {
    #[inline]
    fn attach_press(&mut self) {}
    #[inline]
    fn detach_press(&mut self) {}
    #[inline]
    fn attach_tracking(&mut self) {}
    #[inline]
    fn detach_tracking(&mut self) {}
}

bitflags::bitflags! {
    /// Which observer groups are currently attached.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ObserverFlags: u8 {
        /// Press-start observers on the element.
        const PRESS    = 0b0000_0001;
        /// Move/end observers for the active drag.
        const TRACKING = 0b0000_0010;
    }
}

/// Observer set that records what is attached, for polling hosts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObserverState {
    flags: ObserverFlags,
    tracking_attaches: u32,
    tracking_detaches: u32,
}

impl ObserverState {
    /// Currently attached groups.
    pub fn flags(&self) -> ObserverFlags {
        self.flags
    }

    /// True while press-start should be forwarded.
    pub fn is_pressable(&self) -> bool {
        self.flags.contains(ObserverFlags::PRESS)
    }

    /// True while press-move and press-end should be forwarded.
    pub fn is_tracking(&self) -> bool {
        self.flags.contains(ObserverFlags::TRACKING)
    }

    /// Number of times tracking observers were attached.
    pub fn tracking_attaches(&self) -> u32 {
        self.tracking_attaches
    }

    /// Number of times tracking observers were asked to detach.
    pub fn tracking_detaches(&self) -> u32 {
        self.tracking_detaches
    }
}

impl InputObservers for ObserverState {
    fn attach_press(&mut self) {
        self.flags.insert(ObserverFlags::PRESS);
    }

    fn detach_press(&mut self) {
        self.flags.remove(ObserverFlags::PRESS);
    }

    fn attach_tracking(&mut self) {
        self.tracking_attaches += 1;
        self.flags.insert(ObserverFlags::TRACKING);
    }

    fn detach_tracking(&mut self) {
        self.tracking_detaches += 1;
        self.flags.remove(ObserverFlags::TRACKING);
    }
}

/// Identifier handed out by [`ManualFrames`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ManualFrameId(pub u64);

/// Host-pumped frame scheduler.
///
/// Useful for tests, headless hosts, and game loops that already tick once per
/// frame: call [`InertiaDrag::on_frame`](crate::drag::InertiaDrag::on_frame)
/// each tick while [`InertiaDrag::frame_pending`](crate::drag::InertiaDrag::frame_pending)
/// is true.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    requests: u64,
    cancellations: u64,
    last_request: Option<ManualFrameId>,
}

impl ManualFrames {
    /// Create a scheduler with no requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frames requested.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Total number of requests canceled.
    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }

    /// Most recent request, if any.
    pub fn last_request(&self) -> Option<ManualFrameId> {
        self.last_request
    }
}

impl FrameScheduler for ManualFrames {
    type FrameId = ManualFrameId;

    fn request_frame(&mut self) -> ManualFrameId {
        self.next += 1;
        self.requests += 1;
        let id = ManualFrameId(self.next);
        self.last_request = Some(id);
        id
    }

    fn cancel_frame(&mut self, _id: ManualFrameId) {
        self.cancellations += 1;
    }
}

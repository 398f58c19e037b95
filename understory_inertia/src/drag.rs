// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker with frame-driven inertia.
//!
//! ## Overview
//!
//! [`InertiaDrag`] combines a [`DragSession`] (press input → deltas and accumulated
//! offset), a [`VelocityState`] (per-frame sampling and decay), and a [`Notifier`]
//! (listeners per [`EventKind`]).
//!
//! ## Frame loop
//!
//! The host calls [`InertiaDrag::on_frame`] each time a frame requested through
//! its [`FrameScheduler`] fires. The step first checks whether the machine is at
//! rest; if so it stops requesting frames. Otherwise it acts according to
//! [`InertiaPhase`] and requests the next frame:
//!
//! - [`Tracking`](InertiaPhase::Tracking): velocity becomes the pointer movement since the previous frame.
//! - [`Coasting`](InertiaPhase::Coasting): the velocity is applied as a step, decayed by the
//!   friction, and published as [`EventKind::InertiaMove`].
//! - [`Idle`](InertiaPhase::Idle): no frames until the next press-start.
//!
//! Decay is applied once per frame and is not corrected for elapsed time, so
//! the coast distance depends on the host frame rate.
//!
//! ## Ordering
//!
//! State is mutated before each publish, so listeners (which receive the tracker
//! as the emitter) observe post-mutation state.

use kurbo::{Point, Vec2};

use crate::host::{FrameScheduler, InputObservers, NoObservers};
use crate::notifier::{Listener, Notifier};
use crate::session::DragSession;
use crate::types::{DragEvent, EventKind, InertiaPhase, PressInput, PressResponse};
use crate::velocity::{Friction, VelocityState};

/// Drag tracker with inertial coasting after release.
///
/// ## Usage
///
/// - Construct with [`InertiaDrag::new`] (default friction) or [`InertiaDrag::with_friction`].
/// - Forward press input to [`on_press_start`](Self::on_press_start),
///   [`on_press_move`](Self::on_press_move) and [`on_press_end`](Self::on_press_end).
///   Suppress the platform default when they return [`PressResponse::Consumed`].
/// - Call [`on_frame`](Self::on_frame) when a requested frame fires.
/// - Listen with [`subscribe`](Self::subscribe).
pub struct InertiaDrag<S: FrameScheduler, O: InputObservers = NoObservers> {
    session: DragSession,
    velocity: VelocityState,
    friction: Friction,
    scheduler: S,
    observers: O,
    pending: Option<S::FrameId>,
    notifier: Notifier<Self>,
}

impl<S: FrameScheduler, O: InputObservers> core::fmt::Debug for InertiaDrag<S, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InertiaDrag")
            .field("session", &self.session)
            .field("velocity", &self.velocity)
            .field("friction", &self.friction)
            .field("pending", &self.pending)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl<S: FrameScheduler, O: InputObservers> InertiaDrag<S, O> {
    /// Create a tracker with [`Friction::DEFAULT`] and attach press observers.
    pub fn new(scheduler: S, observers: O) -> Self {
        Self::with_friction(scheduler, observers, Friction::default())
    }

    /// Create a tracker with an explicit friction and attach press observers.
    pub fn with_friction(scheduler: S, mut observers: O, friction: Friction) -> Self {
        observers.attach_press();
        Self {
            session: DragSession::default(),
            velocity: VelocityState::default(),
            friction,
            scheduler,
            observers,
            pending: None,
            notifier: Notifier::new(),
        }
    }

    /// Handle press-start.
    ///
    /// Ignored for drag-exempt targets and empty touch lists. Otherwise starts a
    /// new session, cuts any coasting short, publishes [`EventKind::DragStart`],
    /// attaches tracking observers and requests a frame.
    pub fn on_press_start(&mut self, input: PressInput<'_>) -> PressResponse {
        if input.is_drag_exempt() {
            log::trace!("press-start on drag-exempt target ignored");
            return PressResponse::Ignored;
        }
        let Some(point) = input.source.point() else {
            log::trace!("press-start without a touch point ignored");
            return PressResponse::Ignored;
        };

        // A previous session may not have been torn down.
        self.observers.detach_tracking();

        self.session.begin(point);
        self.stop();
        self.velocity.seed(point);
        log::debug!("drag start at {point:?}");

        self.publish(DragEvent::DragStart(self.session.motion(Vec2::ZERO)));

        self.observers.attach_tracking();
        self.request_frame();
        PressResponse::Consumed
    }

    /// Handle press-move: publish [`EventKind::DragMove`] with the delta from the last position.
    pub fn on_press_move(&mut self, input: PressInput<'_>) -> PressResponse {
        let Some(point) = input.source.point() else {
            return PressResponse::Ignored;
        };
        let Some(delta) = self.session.move_to(point) else {
            log::trace!("press-move outside a drag ignored");
            return PressResponse::Ignored;
        };
        self.publish(DragEvent::DragMove(self.session.motion(delta)));
        PressResponse::Consumed
    }

    /// Handle press-end: end the session and publish [`EventKind::DragEnd`] with zero delta.
    ///
    /// Coasting continues on subsequent frames. A no-op when not dragging.
    pub fn on_press_end(&mut self) -> PressResponse {
        if !self.deactivate() {
            return PressResponse::Ignored;
        }
        log::debug!(
            "drag end, accumulated {:?}, velocity {:?}",
            self.session.accumulated(),
            self.velocity.velocity()
        );
        self.publish(DragEvent::DragEnd(self.session.motion(Vec2::ZERO)));
        PressResponse::Consumed
    }

    /// End the session programmatically and publish [`EventKind::DragCancel`].
    ///
    /// Returns `false` (and publishes nothing) when not dragging. Coasting is not
    /// affected; call [`stop`](Self::stop) as well to halt motion.
    pub fn force_drag_end(&mut self) -> bool {
        if !self.deactivate() {
            return false;
        }
        log::debug!("drag canceled, accumulated {:?}", self.session.accumulated());
        self.publish(DragEvent::DragCancel(self.session.cancel()));
        true
    }

    /// Zero the velocity and cancel the pending frame request, if any.
    pub fn stop(&mut self) {
        self.velocity.reset();
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    /// Tear down: stop, cancel any drag, detach press observers and drop all
    /// listeners. Returns the host parts.
    pub fn destroy(mut self) -> (S, O) {
        self.stop();
        self.force_drag_end();
        self.observers.detach_press();
        self.notifier.clear();
        log::debug!("inertia drag destroyed");
        (self.scheduler, self.observers)
    }

    /// Advance the machine by one frame. Call when a requested frame fires.
    ///
    /// Returns the phase that acted. [`InertiaPhase::Idle`] means no further
    /// frame was requested; this is also returned, without any effect, when no
    /// request was pending (a stale callback).
    pub fn on_frame(&mut self) -> InertiaPhase {
        if self.pending.take().is_none() {
            log::trace!("frame fired without a pending request");
            return InertiaPhase::Idle;
        }

        if !self.session.is_active() && self.velocity.is_at_rest() {
            // Settle sub-threshold residue so rest is exactly zero.
            self.velocity.reset();
            log::debug!("inertia settled at {:?}", self.session.last());
            return InertiaPhase::Idle;
        }

        let phase = if self.session.is_active() {
            let velocity = self.velocity.track(self.session.last());
            log::trace!("tracking velocity {velocity:?}");
            InertiaPhase::Tracking
        } else {
            let step = self.velocity.coast(self.friction);
            self.session.advance(step);
            log::trace!("coasting step {step:?}");
            self.publish(DragEvent::InertiaMove(self.session.motion(step)));
            InertiaPhase::Coasting
        };

        self.request_frame();
        phase
    }

    /// Current state of the machine.
    pub fn phase(&self) -> InertiaPhase {
        if self.session.is_active() {
            InertiaPhase::Tracking
        } else if self.velocity.is_at_rest() {
            InertiaPhase::Idle
        } else {
            InertiaPhase::Coasting
        }
    }

    /// True during a drag session.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// True while coasting after release with non-negligible velocity.
    pub fn is_inertia_moving(&self) -> bool {
        !self.session.is_active() && !self.velocity.is_at_rest()
    }

    /// Current velocity estimate, per frame.
    pub fn velocity(&self) -> Vec2 {
        self.velocity.velocity()
    }

    /// Sum of all deltas since the last drag start, including coasting.
    pub fn accumulated(&self) -> Vec2 {
        self.session.accumulated()
    }

    /// Start position of the current or most recent drag.
    pub fn drag_start(&self) -> Point {
        self.session.start()
    }

    /// Last known position, advanced by coasting steps after release.
    pub fn position(&self) -> Point {
        self.session.last()
    }

    /// True while a frame request is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current friction.
    pub fn friction(&self) -> Friction {
        self.friction
    }

    /// Change the friction; used from the next frame on.
    pub fn set_friction(&mut self, friction: Friction) {
        self.friction = friction;
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The input observers.
    pub fn observers(&self) -> &O {
        &self.observers
    }

    /// The listener registry.
    pub fn notifier(&self) -> &Notifier<Self> {
        &self.notifier
    }

    /// Register `listener` for `kind`. See [`Notifier::subscribe`].
    pub fn subscribe(&self, kind: EventKind, listener: Listener<Self>) -> bool {
        self.notifier.subscribe(kind, listener)
    }

    /// Remove `listener` from `kind`. See [`Notifier::unsubscribe`].
    pub fn unsubscribe(&self, kind: EventKind, listener: &Listener<Self>) -> bool {
        self.notifier.unsubscribe(kind, listener)
    }

    fn deactivate(&mut self) -> bool {
        if !self.session.end() {
            return false;
        }
        self.observers.detach_tracking();
        true
    }

    fn request_frame(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    fn publish(&self, event: DragEvent) {
        self.notifier.publish(&event, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ManualFrames, ObserverState};
    use crate::types::TargetFlags;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    type Drag = InertiaDrag<ManualFrames, ObserverState>;

    fn drag() -> Drag {
        InertiaDrag::new(ManualFrames::new(), ObserverState::default())
    }

    fn pointer(x: f64, y: f64) -> PressInput<'static> {
        PressInput::pointer(Point::new(x, y))
    }

    /// Subscribe a recorder to every kind.
    fn record(d: &Drag) -> Rc<RefCell<Vec<DragEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let listener: Listener<Drag> =
            Rc::new(move |ev: &DragEvent, _: &Drag| sink.borrow_mut().push(*ev));
        for kind in EventKind::ALL {
            d.subscribe(kind, listener.clone());
        }
        events
    }

    fn kinds(events: &RefCell<Vec<DragEvent>>) -> Vec<EventKind> {
        events.borrow().iter().map(DragEvent::kind).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d > -1e-9 && d < 1e-9
    }

    /// Run frames until idle; returns the number of frames that acted.
    fn run_until_idle(d: &mut Drag) -> usize {
        let mut n = 0;
        while d.frame_pending() {
            if d.on_frame() == InertiaPhase::Idle {
                break;
            }
            n += 1;
            assert!(n < 10_000, "inertia did not settle");
        }
        n
    }

    /// Drag from the origin to `(vx, vy)` within one frame, then release.
    fn fling(d: &mut Drag, vx: f64, vy: f64) {
        d.on_press_start(pointer(0.0, 0.0));
        assert_eq!(d.on_frame(), InertiaPhase::Tracking);
        d.on_press_move(pointer(vx, vy));
        assert_eq!(d.on_frame(), InertiaPhase::Tracking);
        d.on_press_end();
    }

    #[test]
    fn press_start_publishes_and_arms() {
        let mut d = drag();
        assert!(d.observers().is_pressable());
        let events = record(&d);
        assert_eq!(d.on_press_start(pointer(10.0, 20.0)), PressResponse::Consumed);
        assert!(d.is_dragging());
        assert!(d.frame_pending());
        assert!(d.observers().is_tracking());
        assert_eq!(d.phase(), InertiaPhase::Tracking);
        assert_eq!(
            *events.borrow(),
            vec![DragEvent::DragStart(crate::types::Motion {
                drag_start: Point::new(10.0, 20.0),
                delta: Vec2::ZERO,
                accumulated: Vec2::ZERO,
            })]
        );
    }

    #[test]
    fn exempt_target_and_empty_touch_are_ignored() {
        let mut d = drag();
        let events = record(&d);
        let exempt = pointer(1.0, 1.0).with_target(TargetFlags::DRAG_EXEMPT);
        assert_eq!(d.on_press_start(exempt), PressResponse::Ignored);
        assert_eq!(d.on_press_start(PressInput::touch(&[])), PressResponse::Ignored);
        assert!(!d.is_dragging());
        assert!(!d.frame_pending());
        assert!(events.borrow().is_empty());
        assert_eq!(d.observers().tracking_detaches(), 0);
    }

    #[test]
    fn touch_input_uses_first_touch() {
        let mut d = drag();
        let start = [Point::new(5.0, 5.0), Point::new(50.0, 50.0)];
        d.on_press_start(PressInput::touch(&start));
        let moved = [Point::new(8.0, 1.0)];
        assert_eq!(d.on_press_move(PressInput::touch(&moved)), PressResponse::Consumed);
        assert_eq!(d.drag_start(), Point::new(5.0, 5.0));
        assert_eq!(d.accumulated(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn accumulated_equals_sum_of_emitted_deltas() {
        let mut d = drag();
        let events = record(&d);
        d.on_press_start(pointer(2.0, 2.0));
        for (x, y) in [(3.0, 2.0), (7.5, -1.0), (7.5, -1.0), (-4.0, 9.25), (0.0, 0.0)] {
            d.on_press_move(pointer(x, y));
            d.on_frame();
        }
        let sum = events
            .borrow()
            .iter()
            .fold(Vec2::ZERO, |acc, ev| acc + ev.delta());
        assert_eq!(sum, d.accumulated());
        assert_eq!(events.borrow().last().unwrap().accumulated(), sum);
        assert_eq!(sum, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn tracking_velocity_is_frame_to_frame_delta() {
        let mut d = drag();
        d.on_press_start(pointer(0.0, 0.0));
        assert_eq!(d.on_frame(), InertiaPhase::Tracking);
        assert_eq!(d.velocity(), Vec2::ZERO);

        d.on_press_move(pointer(5.0, 3.0));
        d.on_frame();
        assert_eq!(d.velocity(), Vec2::new(5.0, 3.0));

        d.on_press_move(pointer(12.0, 3.0));
        d.on_frame();
        assert_eq!(d.velocity(), Vec2::new(7.0, 0.0));

        // Several moves within one frame count as one sample.
        d.on_press_move(pointer(13.0, 3.0));
        d.on_press_move(pointer(20.0, 1.0));
        d.on_frame();
        assert_eq!(d.velocity(), Vec2::new(8.0, -2.0));

        // Holding still drops velocity to zero immediately.
        d.on_frame();
        assert_eq!(d.velocity(), Vec2::ZERO);
        assert!(!d.is_inertia_moving());
    }

    #[test]
    fn coasting_decays_and_settles() {
        let mut d = drag();
        fling(&mut d, 10.0, 0.0);
        let events = record(&d);
        assert!(d.is_inertia_moving());
        assert_eq!(d.phase(), InertiaPhase::Coasting);

        let mut expected = 10.0;
        let mut frames = 0;
        while d.frame_pending() {
            match d.on_frame() {
                InertiaPhase::Coasting => {
                    frames += 1;
                    let step = events.borrow().last().unwrap().delta();
                    assert!(close(step.x, expected), "step at frame {frames}");
                    expected *= 0.85;
                    assert!(close(d.velocity().x, expected), "velocity at frame {frames}");
                    assert_eq!(d.velocity().y, 0.0);
                }
                InertiaPhase::Idle => break,
                InertiaPhase::Tracking => panic!("tracking after release"),
            }
        }

        // 10 * 0.85^57 is the first value below 0.001.
        assert_eq!(frames, 57);
        assert_eq!(events.borrow().len(), 57);
        assert!(kinds(&events).iter().all(|k| *k == EventKind::InertiaMove));
        assert!(!d.frame_pending());
        assert_eq!(d.velocity(), Vec2::ZERO);
        assert!(!d.is_inertia_moving());
        assert_eq!(d.phase(), InertiaPhase::Idle);

        let coasted: f64 = events.borrow().iter().map(|e| e.delta().x).sum();
        assert!(close(d.accumulated().x, 10.0 + coasted));
        assert!(close(d.position().x, 10.0 + coasted));
    }

    #[test]
    fn coasting_publishes_post_mutation_state() {
        let mut d = drag();
        fling(&mut d, 4.0, -6.0);
        let mismatches = Rc::new(Cell::new(0_u32));
        let count = mismatches.clone();
        d.subscribe(
            EventKind::InertiaMove,
            Rc::new(move |ev: &DragEvent, emitter: &Drag| {
                if emitter.accumulated() != ev.accumulated() {
                    count.set(count.get() + 1);
                }
            }),
        );
        assert!(run_until_idle(&mut d) > 0);
        assert_eq!(mismatches.get(), 0);
    }

    #[test]
    fn stop_halts_coasting() {
        let mut d = drag();
        fling(&mut d, 10.0, 5.0);
        d.on_frame();
        assert!(d.is_inertia_moving());
        let cancels = d.scheduler().cancellations();

        d.stop();
        assert!(!d.is_inertia_moving());
        assert_eq!(d.velocity(), Vec2::ZERO);
        assert!(!d.frame_pending());
        assert_eq!(d.scheduler().cancellations(), cancels + 1);
        assert_eq!(d.on_frame(), InertiaPhase::Idle);

        // Stopping at rest cancels nothing.
        d.stop();
        assert_eq!(d.scheduler().cancellations(), cancels + 1);
    }

    #[test]
    fn end_without_move_emits_single_zero_dragend() {
        let mut d = drag();
        let events = record(&d);
        d.on_press_start(pointer(3.0, 4.0));
        assert_eq!(d.on_press_end(), PressResponse::Consumed);
        assert_eq!(kinds(&events), vec![EventKind::DragStart, EventKind::DragEnd]);
        let end = events.borrow()[1];
        assert_eq!(end.delta(), Vec2::ZERO);
        assert_eq!(end.accumulated(), Vec2::ZERO);
        assert!(!d.observers().is_tracking());
        // Nothing to coast: the pending frame settles immediately.
        assert_eq!(run_until_idle(&mut d), 0);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn end_and_cancel_outside_drag_are_silent() {
        let mut d = drag();
        let events = record(&d);
        assert_eq!(d.on_press_end(), PressResponse::Ignored);
        assert!(!d.force_drag_end());
        assert_eq!(d.on_press_move(pointer(1.0, 1.0)), PressResponse::Ignored);

        d.on_press_start(pointer(0.0, 0.0));
        d.on_press_end();
        assert_eq!(d.on_press_end(), PressResponse::Ignored);
        assert!(!d.force_drag_end());
        assert_eq!(kinds(&events), vec![EventKind::DragStart, EventKind::DragEnd]);
    }

    #[test]
    fn force_drag_end_publishes_one_cancel() {
        let mut d = drag();
        let events = record(&d);
        d.on_press_start(pointer(1.0, 1.0));
        d.on_press_move(pointer(6.0, 1.0));
        assert!(d.force_drag_end());
        assert!(!d.is_dragging());
        assert!(!d.observers().is_tracking());
        assert_eq!(
            kinds(&events),
            vec![EventKind::DragStart, EventKind::DragMove, EventKind::DragCancel]
        );
        let cancel = events.borrow()[2];
        assert_eq!(cancel.accumulated(), Vec2::new(5.0, 0.0));
        assert_eq!(cancel.drag_start(), Point::new(1.0, 1.0));
    }

    #[test]
    fn new_drag_cuts_coasting_before_dragstart() {
        let mut d = drag();
        fling(&mut d, 20.0, 0.0);
        d.on_frame();
        d.on_frame();
        assert!(d.is_inertia_moving());

        let seen = Rc::new(Cell::new(None));
        let slot = seen.clone();
        d.subscribe(
            EventKind::DragStart,
            Rc::new(move |_: &DragEvent, emitter: &Drag| {
                slot.set(Some((emitter.is_inertia_moving(), emitter.velocity())));
            }),
        );
        d.on_press_start(pointer(100.0, 100.0));
        assert_eq!(seen.get(), Some((false, Vec2::ZERO)));
        assert_eq!(d.accumulated(), Vec2::ZERO);

        // The first tracking frame measures from the new start, not the old session.
        assert_eq!(d.on_frame(), InertiaPhase::Tracking);
        assert_eq!(d.velocity(), Vec2::ZERO);
    }

    #[test]
    fn restart_without_end_detaches_stale_observers() {
        let mut d = drag();
        d.on_press_start(pointer(0.0, 0.0));
        d.on_press_start(pointer(5.0, 5.0));
        assert_eq!(d.observers().tracking_detaches(), 2);
        assert_eq!(d.observers().tracking_attaches(), 2);
        assert!(d.observers().is_tracking());
        // The first request was canceled before the second was issued.
        assert_eq!(d.scheduler().requests(), 2);
        assert_eq!(d.scheduler().cancellations(), 1);
        assert!(d.frame_pending());
    }

    #[test]
    fn one_frame_request_in_flight() {
        let mut d = drag();
        d.on_press_start(pointer(0.0, 0.0));
        for i in 1..=5 {
            d.on_press_move(pointer(f64::from(i), 0.0));
            d.on_frame();
            assert_eq!(d.scheduler().requests(), 1 + i as u64);
        }
        assert!(d.frame_pending());
    }

    #[test]
    fn stale_frame_is_ignored() {
        let mut d = drag();
        let events = record(&d);
        assert_eq!(d.on_frame(), InertiaPhase::Idle);
        assert_eq!(d.scheduler().requests(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn friction_change_applies_next_frame() {
        let mut d = drag();
        fling(&mut d, 10.0, 0.0);
        d.on_frame();
        assert!(close(d.velocity().x, 8.5));
        d.set_friction(Friction::new(0.5).unwrap());
        assert_eq!(d.friction().get(), 0.5);
        d.on_frame();
        assert!(close(d.velocity().x, 4.25));
    }

    #[test]
    fn lower_friction_settles_sooner() {
        let mut slow = drag();
        let mut fast = InertiaDrag::with_friction(
            ManualFrames::new(),
            ObserverState::default(),
            Friction::new(0.5).unwrap(),
        );
        fling(&mut slow, 10.0, 10.0);
        fling(&mut fast, 10.0, 10.0);
        assert!(run_until_idle(&mut fast) < run_until_idle(&mut slow));
    }

    #[test]
    fn cancel_keeps_coasting_until_stopped() {
        let mut d = drag();
        d.on_press_start(pointer(0.0, 0.0));
        d.on_frame();
        d.on_press_move(pointer(3.0, 0.0));
        d.on_frame();
        assert!(d.force_drag_end());
        assert!(d.is_inertia_moving());
        assert_eq!(d.on_frame(), InertiaPhase::Coasting);
    }

    #[test]
    fn destroy_tears_down() {
        let mut d = drag();
        let events = record(&d);
        d.on_press_start(pointer(0.0, 0.0));
        let (frames, observers) = d.destroy();
        assert_eq!(observers.flags(), crate::host::ObserverFlags::empty());
        assert_eq!(frames.cancellations(), 1);
        assert_eq!(kinds(&events), vec![EventKind::DragStart, EventKind::DragCancel]);
    }

    #[test]
    fn destroy_at_rest_publishes_nothing() {
        let d = drag();
        let events = record(&d);
        let (_, observers) = d.destroy();
        assert!(!observers.is_pressable());
        assert!(events.borrow().is_empty());
    }
}

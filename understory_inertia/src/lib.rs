// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_inertia --heading-base-level=0

//! Understory Inertia: drag tracking with frame-driven inertial coasting.
//!
//! ## Overview
//!
//! This crate turns press-start/move/end input into drag deltas and, after
//! release, keeps emitting decaying "coasting" steps until the motion settles.
//! It does not touch a windowing system and does not render anything: hosts
//! forward input, pump animation frames, and decide what to do with the
//! published offsets (scroll, translate, rotate a camera, ...).
//!
//! ## Pieces
//!
//! - [`DragSession`]: start, last position, and accumulated offset of one drag.
//! - [`VelocityState`]: two-sample velocity while dragging, geometric decay by
//!   [`Friction`] while coasting.
//! - [`Notifier`]: listeners per [`EventKind`], called synchronously in registration order.
//! - [`InertiaDrag`]: the tracker tying them together, driven by
//!   [`FrameScheduler`] and reporting listener wiring through [`InputObservers`].
//!
//! ## Events
//!
//! | Kind           | Payload            | When                                       |
//! |----------------|--------------------|--------------------------------------------|
//! | `dragstart`    | [`Motion`], zero delta | press-start on a non-exempt target     |
//! | `dragmove`     | [`Motion`]         | each press-move during a drag              |
//! | `dragend`      | [`Motion`], zero delta | press-end during a drag                |
//! | `dragcancel`   | [`Cancel`]         | [`InertiaDrag::force_drag_end`] during a drag |
//! | `inertiamove`  | [`Motion`]         | each coasting frame after release          |
//!
//! The accumulated offset of every event equals the sum of all deltas published
//! since the last `dragstart`.
//!
//! ## Frame rate
//!
//! Velocity is measured per frame and decays per frame. Coasting therefore
//! covers less distance, and ends sooner in wall-clock time, at higher frame rates.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_inertia::{
//!     DragEvent, EventKind, InertiaDrag, InertiaPhase, ManualFrames, NoObservers, PressInput,
//! };
//!
//! let mut drag = InertiaDrag::new(ManualFrames::new(), NoObservers);
//! let coasted = Rc::new(Cell::new(0));
//! let count = coasted.clone();
//! drag.subscribe(
//!     EventKind::InertiaMove,
//!     Rc::new(move |_: &DragEvent, _: &InertiaDrag<ManualFrames>| count.set(count.get() + 1)),
//! );
//!
//! drag.on_press_start(PressInput::pointer(Point::new(0.0, 0.0)));
//! drag.on_frame();
//! drag.on_press_move(PressInput::pointer(Point::new(12.0, 0.0)));
//! drag.on_frame();
//! drag.on_press_end();
//! assert!(drag.is_inertia_moving());
//!
//! while drag.frame_pending() {
//!     if drag.on_frame() == InertiaPhase::Idle {
//!         break;
//!     }
//! }
//! assert!(coasted.get() > 0);
//! assert!(!drag.is_inertia_moving());
//! assert!(drag.accumulated().x > 12.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod error;
pub mod host;
pub mod notifier;
pub mod session;
pub mod types;
pub mod velocity;

pub use drag::InertiaDrag;
pub use error::ConfigError;
pub use host::{
    FrameScheduler, InputObservers, ManualFrameId, ManualFrames, NoObservers, ObserverFlags,
    ObserverState,
};
pub use notifier::{Listener, Notifier};
pub use session::DragSession;
pub use types::{
    Cancel, DragEvent, EventKind, InertiaPhase, InputSource, Motion, PressInput, PressResponse,
    TargetFlags,
};
pub use velocity::{Friction, REST_EPSILON, VelocityState};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal publish/subscribe over the closed set of [`EventKind`]s.
//!
//! ## Semantics
//!
//! - Listeners are keyed by [`EventKind`]; each kind has its own ordered list.
//! - [`Notifier::subscribe`] is idempotent per kind: a listener is identified by its
//!   `Rc` allocation, so subscribing the same `Rc` twice keeps one entry.
//! - [`Notifier::publish`] calls listeners in registration order with the event and
//!   a reference to the emitter.
//! - Dispatch iterates a snapshot taken when `publish` starts. A listener may
//!   subscribe or unsubscribe others (through `&self`); the change applies to the next publish.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Point, Vec2};
//! use understory_inertia::notifier::{Listener, Notifier};
//! use understory_inertia::types::{DragEvent, EventKind, Motion};
//!
//! let notifier: Notifier<()> = Notifier::new();
//! let seen = Rc::new(Cell::new(0));
//! let counter = seen.clone();
//! let listener: Listener<()> = Rc::new(move |_: &DragEvent, _: &()| counter.set(counter.get() + 1));
//! notifier.subscribe(EventKind::DragMove, listener.clone());
//! notifier.subscribe(EventKind::DragMove, listener.clone());
//!
//! let motion = Motion { drag_start: Point::ZERO, delta: Vec2::new(1.0, 0.0), accumulated: Vec2::new(1.0, 0.0) };
//! notifier.publish(&DragEvent::DragMove(motion), &());
//! notifier.publish(&DragEvent::DragEnd(motion), &());
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::types::{DragEvent, EventKind};

/// A subscribed callback. Receives the event and the emitter.
pub type Listener<C> = Rc<dyn Fn(&DragEvent, &C)>;

/// Per-kind listener registry.
pub struct Notifier<C: ?Sized> {
    registry: RefCell<[Vec<Listener<C>>; EventKind::COUNT]>,
}

impl<C: ?Sized> core::fmt::Debug for Notifier<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let registry = self.registry.borrow();
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            map.entry(&kind, &registry[kind.index()].len());
        }
        map.finish()
    }
}

impl<C: ?Sized> Default for Notifier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Notifier<C> {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(core::array::from_fn(|_| Vec::new())),
        }
    }

    /// Register `listener` for `kind`. Returns `false` if it was already registered.
    pub fn subscribe(&self, kind: EventKind, listener: Listener<C>) -> bool {
        let mut registry = self.registry.borrow_mut();
        let list = &mut registry[kind.index()];
        if list.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        list.push(listener);
        true
    }

    /// Remove `listener` from `kind`. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, kind: EventKind, listener: &Listener<C>) -> bool {
        let mut registry = self.registry.borrow_mut();
        let list = &mut registry[kind.index()];
        match list.iter().position(|l| same_listener(l, listener)) {
            Some(i) => {
                list.remove(i);
                true
            }
            None => false,
        }
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.registry.borrow()[kind.index()].len()
    }

    /// Remove every listener of every kind.
    pub fn clear(&self) {
        for list in self.registry.borrow_mut().iter_mut() {
            list.clear();
        }
    }

    /// Synchronously deliver `event` to the listeners registered for its kind.
    pub fn publish(&self, event: &DragEvent, emitter: &C) {
        // Release the borrow before calling out so listeners can re-subscribe.
        let snapshot = self.registry.borrow()[event.kind().index()].clone();
        for listener in &snapshot {
            listener(event, emitter);
        }
    }
}

fn same_listener<C: ?Sized>(a: &Listener<C>, b: &Listener<C>) -> bool {
    core::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

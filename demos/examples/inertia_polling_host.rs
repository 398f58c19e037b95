// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A polling host.
//!
//! Game loops and immediate-mode toolkits usually poll input once per tick
//! instead of registering callbacks. This example replays a scripted input
//! stream through such a loop:
//!
//! - press-start is forwarded only while press observers are attached,
//! - move/end are forwarded only while tracking observers are attached,
//! - the tracker is stepped whenever it has a frame pending.
//!
//! The script includes a press on a drag-exempt target, a second drag that
//! interrupts coasting, and a programmatic cancel.
//!
//! Run:
//! - `cargo run -p understory_demos --example inertia_polling_host`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_inertia::{
    DragEvent, EventKind, Friction, InertiaDrag, ManualFrames, ObserverState, PressInput,
    TargetFlags,
};

type Drag = InertiaDrag<ManualFrames, ObserverState>;

#[derive(Copy, Clone, Debug)]
enum Input {
    Down(Point, TargetFlags),
    Move(Point),
    Up,
    Cancel,
}

fn script() -> Vec<(u32, Input)> {
    let p = Point::new;
    vec![
        (1, Input::Down(p(10.0, 10.0), TargetFlags::DRAG_EXEMPT)),
        (2, Input::Down(p(0.0, 0.0), TargetFlags::empty())),
        (3, Input::Move(p(6.0, 2.0))),
        (4, Input::Move(p(14.0, 4.0))),
        (5, Input::Move(p(24.0, 6.0))),
        (6, Input::Up),
        // Grab again while coasting.
        (12, Input::Down(p(200.0, 50.0), TargetFlags::empty())),
        (13, Input::Move(p(190.0, 50.0))),
        (14, Input::Cancel),
    ]
}

fn main() {
    let friction = Friction::new(0.8).expect("valid friction");
    let mut drag: Drag =
        InertiaDrag::with_friction(ManualFrames::new(), ObserverState::default(), friction);

    let log: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = log.clone();
    let listener = Rc::new(move |ev: &DragEvent, d: &Drag| {
        sink.borrow_mut().push(format!(
            "{} accumulated={:?} dragging={} coasting={}",
            ev.kind(),
            ev.accumulated(),
            d.is_dragging(),
            d.is_inertia_moving()
        ));
    });
    for kind in EventKind::ALL {
        drag.subscribe(kind, listener.clone());
    }

    let script = script();
    for tick in 0..40 {
        for (_, input) in script.iter().filter(|(t, _)| *t == tick) {
            let observers = *drag.observers();
            let response = match *input {
                Input::Down(point, target) if observers.is_pressable() => Some(
                    drag.on_press_start(PressInput::pointer(point).with_target(target)),
                ),
                Input::Move(point) if observers.is_tracking() => {
                    Some(drag.on_press_move(PressInput::pointer(point)))
                }
                Input::Up if observers.is_tracking() => Some(drag.on_press_end()),
                Input::Cancel => {
                    drag.force_drag_end();
                    drag.stop();
                    None
                }
                _ => None,
            };
            if let Some(response) = response {
                println!(
                    "tick {tick:>2}: {input:?} -> {response:?} (prevent default: {})",
                    response.is_consumed()
                );
            }
        }

        if drag.frame_pending() {
            let phase = drag.on_frame();
            println!("tick {tick:>2}: frame {phase:?} velocity={:?}", drag.velocity());
        }

        for line in log.borrow_mut().drain(..) {
            println!("         {line}");
        }
    }

    let (frames, observers) = drag.destroy();
    println!(
        "destroyed after {} frame requests ({} canceled); observers now {:?}",
        frames.requests(),
        frames.cancellations(),
        observers.flags()
    );
}

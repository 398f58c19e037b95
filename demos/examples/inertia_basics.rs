// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertia basics.
//!
//! This minimal example drags a point across a few frames, releases it, and
//! prints the coasting steps until the motion settles.
//!
//! Run:
//! - `cargo run -p understory_demos --example inertia_basics`

use std::rc::Rc;

use kurbo::Point;
use understory_inertia::{
    DragEvent, EventKind, InertiaDrag, InertiaPhase, ManualFrames, NoObservers, PressInput,
};

type Drag = InertiaDrag<ManualFrames>;

fn main() {
    let mut drag: Drag = InertiaDrag::new(ManualFrames::new(), NoObservers);

    let print = Rc::new(|ev: &DragEvent, d: &Drag| {
        println!(
            "  {:<12} delta=({:>7.3}, {:>7.3})  accumulated=({:>8.3}, {:>8.3})  phase={:?}",
            ev.kind().as_str(),
            ev.delta().x,
            ev.delta().y,
            ev.accumulated().x,
            ev.accumulated().y,
            d.phase(),
        );
    });
    for kind in EventKind::ALL {
        drag.subscribe(kind, print.clone());
    }

    println!("== Drag ==");
    drag.on_press_start(PressInput::pointer(Point::new(100.0, 100.0)));
    for p in [(104.0, 101.0), (112.0, 103.0), (124.0, 106.0)] {
        drag.on_frame();
        drag.on_press_move(PressInput::pointer(Point::new(p.0, p.1)));
    }
    drag.on_frame();
    println!("  velocity at release: {:?}", drag.velocity());
    drag.on_press_end();

    println!("== Coast ==");
    let mut frames = 0;
    while drag.frame_pending() && drag.on_frame() != InertiaPhase::Idle {
        frames += 1;
    }
    println!(
        "  settled after {frames} frames at {:?} (moving: {})",
        drag.position(),
        drag.is_inertia_moving()
    );
}

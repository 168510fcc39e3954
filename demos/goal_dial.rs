//! Goal Dial
//!
//! This example simulates dragging the minutes-per-day goal dial and
//! shows how raw pointer positions become quantized values.
//!
//! Key concepts:
//! - Pointer angle with 0 degrees at the dial's visual top
//! - Quantization onto the 5-minute step grid with saturating clamps
//! - Needle snapping: the displayed angle always matches the value
//! - Deferred drag enable after a screen transition
//!
//! Run with: cargo run --example goal_dial

use chrono::{Duration, Utc};
use intake::selector::{DialSelector, DragGate, Point};

fn main() {
    println!("=== Goal Dial ===\n");

    let mut dial = DialSelector::new(60, 5).unwrap();
    let center = Point::new(100.0, 100.0);

    // The dial ignores drags for 300ms after the screen transition.
    let shown_at = Utc::now();
    let gate = DragGate::arm(shown_at, Duration::milliseconds(300));
    println!(
        "gate open immediately after transition: {}",
        gate.is_open(shown_at)
    );

    let ready = shown_at + Duration::milliseconds(300);
    println!("gate open 300ms later: {}\n", gate.is_open(ready));

    // Sweep the pointer around the dial face.
    let drags = [
        ("12 o'clock", Point::new(100.0, 40.0)),
        ("1 o'clock (raw 28 deg)", Point::new(128.0, 47.0)),
        ("3 o'clock", Point::new(160.0, 100.0)),
        ("6 o'clock", Point::new(100.0, 160.0)),
        ("9 o'clock", Point::new(40.0, 100.0)),
        ("just left of 12", Point::new(97.0, 40.0)),
    ];

    for (label, pointer) in drags {
        let value = dial.drag_to(pointer, center);
        println!(
            "{label:<24} -> {value:>2} min (needle at {:>5.1} deg)",
            dial.angle()
        );
    }

    // Re-seeding from a persisted answer: needle matches immediately.
    let restored = DialSelector::with_value(60, 5, 45).unwrap();
    println!(
        "\nrestored 45 min goal renders at {:.1} deg",
        restored.angle()
    );

    println!("\n=== Example Complete ===");
}

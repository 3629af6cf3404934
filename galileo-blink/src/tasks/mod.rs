// Task-Modul
//
// Ein einziger, synchroner Task: der Blink-Sketch.

pub mod blink;

pub use blink::{BlinkError, blink_logic, blink_task};

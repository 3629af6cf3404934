//! Galileo Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Board-Beschreibung, Traits und Pure Functions.

#![no_std]

pub mod arduino;
pub mod board;
pub mod logic;
pub mod pins;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests_support;

// Re-exports für einfachen Zugriff
pub use arduino::Arduino;
pub use board::{BoardError, GalileoBoard};
pub use logic::{Blink, Sketch, run};
pub use traits::{ArduinoError, PinDriver};
pub use types::{Level, ParseError, PinMode};

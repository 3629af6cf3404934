//! Sketch-Logik
//!
//! `setup` / `loop` Lebenszyklus und der Blink-Sketch.
//! Funktionen ohne Hardware-Dependencies (testbar!)

use embedded_hal::delay::DelayNs;

use crate::arduino::Arduino;
use crate::traits::{ArduinoError, PinDriver};
use crate::types::{Level, PinMode};

/// Arduino-Sketch: `setup` einmal, danach `run_loop` wiederholt
pub trait Sketch<P: PinDriver, D: DelayNs> {
    fn setup(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>>;

    /// Eine Iteration der Arduino `loop()`-Funktion
    fn run_loop(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>>;
}

/// LED an für `interval_ms`, dann aus für `interval_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    pub pin: u8,
    pub interval_ms: u32,
}

impl Blink {
    pub fn new(pin: u8, interval_ms: u32) -> Self {
        Self { pin, interval_ms }
    }
}

impl<P: PinDriver, D: DelayNs> Sketch<P, D> for Blink {
    fn setup(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>> {
        arduino.pin_mode(self.pin, PinMode::Output)
    }

    fn run_loop(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>> {
        arduino.digital_write(self.pin, Level::High)?;
        arduino.delay(self.interval_ms);
        arduino.digital_write(self.pin, Level::Low)?;
        arduino.delay(self.interval_ms);
        Ok(())
    }
}

/// Führt einen Sketch aus
///
/// `setup` läuft einmal, danach `run_loop` genau `cycles` mal oder endlos
/// bei `None`. Der erste Fehler bricht ab.
pub fn run<S, P, D>(
    sketch: &mut S,
    arduino: &mut Arduino<P, D>,
    cycles: Option<u64>,
) -> Result<(), ArduinoError<P::Error>>
where
    S: Sketch<P, D>,
    P: PinDriver,
    D: DelayNs,
{
    sketch.setup(arduino)?;

    match cycles {
        Some(n) => {
            for _ in 0..n {
                sketch.run_loop(arduino)?;
            }
            Ok(())
        }
        None => loop {
            sketch.run_loop(arduino)?;
        },
    }
}

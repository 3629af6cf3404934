//! Arduino-Fassade
//!
//! `pin_mode`, `digital_write`, `digital_read` und `delay` im Arduino-Stil.
//! Jeder Aufruf wird direkt an den Treiber durchgereicht, es gibt keinen
//! zwischengespeicherten Pin-Zustand.

use embedded_hal::delay::DelayNs;

use crate::board::GalileoBoard;
use crate::traits::{ArduinoError, PinDriver};
use crate::types::{Level, PinMode};

pub struct Arduino<P, D> {
    board: GalileoBoard,
    driver: P,
    delay: D,
}

impl<P: PinDriver, D: DelayNs> Arduino<P, D> {
    pub fn new(board: GalileoBoard, driver: P, delay: D) -> Self {
        Self {
            board,
            driver,
            delay,
        }
    }

    pub fn board(&self) -> &GalileoBoard {
        &self.board
    }

    /// Setzt die Richtung eines Pins
    pub fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), ArduinoError<P::Error>> {
        self.check_pin(pin)?;
        self.driver.set_mode(pin, mode).map_err(ArduinoError::Driver)
    }

    /// Schreibt einen Pegel
    ///
    /// `pin_mode(pin, PinMode::Output)` sollte vorher aufgerufen worden sein,
    /// wird aber nicht erzwungen.
    pub fn digital_write(&mut self, pin: u8, level: Level) -> Result<(), ArduinoError<P::Error>> {
        self.check_pin(pin)?;
        self.driver.write(pin, level).map_err(ArduinoError::Driver)
    }

    pub fn digital_read(&mut self, pin: u8) -> Result<Level, ArduinoError<P::Error>> {
        self.check_pin(pin)?;
        self.driver.read(pin).map_err(ArduinoError::Driver)
    }

    /// Blockiert den aufrufenden Thread für `ms` Millisekunden
    pub fn delay(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Gibt Treiber und Delay wieder frei
    pub fn release(self) -> (P, D) {
        (self.driver, self.delay)
    }

    fn check_pin(&self, pin: u8) -> Result<(), ArduinoError<P::Error>> {
        if self.board.contains(pin) {
            Ok(())
        } else {
            Err(ArduinoError::InvalidPin(pin))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::{NoDelay, RecordingDriver};

    fn arduino() -> Arduino<RecordingDriver, NoDelay> {
        let board = GalileoBoard::new(0, &[13]).unwrap();
        Arduino::new(board, RecordingDriver::default(), NoDelay::default())
    }

    #[test]
    fn test_pin_mode_passes_through() {
        let mut arduino = arduino();
        arduino.pin_mode(13, PinMode::Output).unwrap();
        let (driver, _) = arduino.release();
        assert_eq!(driver.modes, [(13, PinMode::Output)]);
    }

    #[test]
    fn test_write_then_read_reports_level() {
        let mut arduino = arduino();
        arduino.digital_write(13, Level::High).unwrap();
        assert_eq!(arduino.digital_read(13), Ok(Level::High));
        arduino.digital_write(13, Level::Low).unwrap();
        assert_eq!(arduino.digital_read(13), Ok(Level::Low));
    }

    #[test]
    fn test_unknown_pin_rejected_without_driver_call() {
        let mut arduino = arduino();
        assert_eq!(
            arduino.digital_write(12, Level::High),
            Err(ArduinoError::InvalidPin(12))
        );
        let (driver, _) = arduino.release();
        assert!(driver.writes.is_empty());
    }

    #[test]
    fn test_delay_forwards_milliseconds() {
        let mut arduino = arduino();
        arduino.delay(1000);
        arduino.delay(5);
        let (_, delay) = arduino.release();
        assert_eq!(delay.total_ns, 1_005_000_000);
    }
}

//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Pin-Zugriff
//! ohne konkrete Implementierung. Verzögerungen laufen über
//! `embedded_hal::delay::DelayNs`.

use core::fmt;

use crate::types::{Level, PinMode};

/// Trait für GPIO Hardware-Zugriff
///
/// Jede Methode entspricht genau einem Hardware-Zugriff.
///
/// # Implementierungen
/// - **Production:** `SysfsGpio` (Linux `/sys/class/gpio`)
/// - **Testing:** `MockPinDriver` (in-memory Mock)
pub trait PinDriver: Send {
    /// Fehler-Typ der darunterliegenden I/O-Schicht
    type Error: fmt::Debug;

    /// Setzt die Richtung eines Pins
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error>;

    /// Schreibt einen Pegel auf einen Pin
    fn write(&mut self, pin: u8, level: Level) -> Result<(), Self::Error>;

    /// Liest den aktuellen Pegel eines Pins
    fn read(&mut self, pin: u8) -> Result<Level, Self::Error>;
}

/// Fehler-Typ für Arduino-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArduinoError<E> {
    /// Pin gehört nicht zum Board
    InvalidPin(u8),
    /// Fehler des Pin-Treibers, unverändert durchgereicht
    Driver(E),
}

// Der Treiberfehler steht nur in source(), nicht im Text
impl<E> fmt::Display for ArduinoError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArduinoError::InvalidPin(pin) => write!(f, "pin {} is not available on this board", pin),
            ArduinoError::Driver(_) => f.write_str("pin driver failed"),
        }
    }
}

impl<E> core::error::Error for ArduinoError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ArduinoError::InvalidPin(_) => None,
            ArduinoError::Driver(e) => Some(e),
        }
    }
}

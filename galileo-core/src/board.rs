//! Board-Beschreibung
//!
//! Board-Index plus feste Liste nutzbarer Pins. Nach dem Erzeugen unveränderlich.

use core::fmt;

use heapless::Vec;

use crate::pins::MAX_PIN_NUMBER;

/// Anzahl adressierbarer Boards
pub const BOARD_COUNT: u8 = 1;

/// Maximale Anzahl Pins pro Board (kompletter Arduino-Header)
pub const MAX_PINS: usize = MAX_PIN_NUMBER as usize + 1;

/// Fehler beim Erzeugen eines Boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    IndexOutOfRange(u8),
    PinOutOfRange(u8),
    TooManyPins,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange(index) => {
                write!(f, "board index {} out of range (boards: {})", index, BOARD_COUNT)
            }
            BoardError::PinOutOfRange(pin) => {
                write!(f, "pin {} is not on the header (max {})", pin, MAX_PIN_NUMBER)
            }
            BoardError::TooManyPins => write!(f, "more than {} pins given", MAX_PINS),
        }
    }
}

impl core::error::Error for BoardError {}

/// Intel Galileo Board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalileoBoard {
    index: u8,
    pins: Vec<u8, MAX_PINS>,
}

impl GalileoBoard {
    /// Erstellt ein Board mit Index und nutzbaren Pins
    ///
    /// Doppelte Pins werden nur einmal übernommen.
    ///
    /// ```
    /// # use galileo_core::GalileoBoard;
    /// let board = GalileoBoard::new(0, &[13]).unwrap();
    /// assert!(board.contains(13));
    /// assert!(!board.contains(12));
    /// ```
    pub fn new(index: u8, pins: &[u8]) -> Result<Self, BoardError> {
        if index >= BOARD_COUNT {
            return Err(BoardError::IndexOutOfRange(index));
        }

        let mut usable = Vec::new();
        for &pin in pins {
            if pin > MAX_PIN_NUMBER {
                return Err(BoardError::PinOutOfRange(pin));
            }
            if usable.contains(&pin) {
                continue;
            }
            usable.push(pin).map_err(|_| BoardError::TooManyPins)?;
        }

        Ok(Self { index, pins: usable })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn pins(&self) -> &[u8] {
        &self.pins
    }

    pub fn contains(&self, pin: u8) -> bool {
        self.pins.contains(&pin)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GalileoBoard {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "GalileoBoard {{ index: {}, pins: {} }}",
            self.index,
            self.pins.as_slice()
        )
    }
}

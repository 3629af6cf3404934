//! Core Types für Pin-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Richtung eines Pins (Arduino `INPUT` / `OUTPUT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinMode {
    Input,
    Output,
}

impl PinMode {
    /// Wert für `/sys/class/gpio/gpioN/direction`
    pub fn as_sysfs(self) -> &'static str {
        match self {
            PinMode::Input => "in",
            PinMode::Output => "out",
        }
    }
}

/// Spannungspegel eines Pins (Arduino `HIGH` / `LOW`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Gibt den entgegengesetzten Pegel zurück
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use galileo_core::Level;
    /// assert_eq!(Level::High.toggled(), Level::Low);
    /// assert_eq!(Level::Low.toggled(), Level::High);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }

    /// Wert für `/sys/class/gpio/gpioN/value`
    pub fn as_sysfs(self) -> &'static str {
        match self {
            Level::High => "1",
            Level::Low => "0",
        }
    }

    /// Parst den Inhalt einer sysfs `value`-Datei (Newline am Ende erlaubt)
    pub fn from_sysfs(raw: &str) -> Result<Self, ParseError> {
        match raw.trim_end() {
            "1" => Ok(Level::High),
            "0" => Ok(Level::Low),
            _ => Err(ParseError::UnknownLevel),
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Fehler beim Parsen der Arduino-Konstanten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    UnknownMode,
    UnknownLevel,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownMode => f.write_str("unknown pin mode, expected INPUT or OUTPUT"),
            ParseError::UnknownLevel => f.write_str("unknown level, expected HIGH or LOW"),
        }
    }
}

impl core::error::Error for ParseError {}

impl TryFrom<&str> for PinMode {
    type Error = ParseError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "INPUT" => Ok(Self::Input),
            "OUTPUT" => Ok(Self::Output),
            _ => Err(ParseError::UnknownMode),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "HIGH" => Ok(Self::High),
            "LOW" => Ok(Self::Low),
            _ => Err(ParseError::UnknownLevel),
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PinMode::Input => "INPUT",
            PinMode::Output => "OUTPUT",
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::High => "HIGH",
            Level::Low => "LOW",
        })
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinMode::Input => defmt::write!(fmt, "INPUT"),
            PinMode::Output => defmt::write!(fmt, "OUTPUT"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::High => defmt::write!(fmt, "HIGH"),
            Level::Low => defmt::write!(fmt, "LOW"),
        }
    }
}

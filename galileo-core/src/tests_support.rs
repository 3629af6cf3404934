// In-Memory Treiber für die Unit Tests dieser Crate

extern crate std;

use core::convert::Infallible;
use std::collections::BTreeMap;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::traits::PinDriver;
use crate::types::{Level, PinMode};

#[derive(Default)]
pub struct RecordingDriver {
    pub modes: Vec<(u8, PinMode)>,
    pub writes: Vec<(u8, Level)>,
    levels: BTreeMap<u8, Level>,
}

impl PinDriver for RecordingDriver {
    type Error = Infallible;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        self.modes.push((pin, mode));
        Ok(())
    }

    fn write(&mut self, pin: u8, level: Level) -> Result<(), Self::Error> {
        self.writes.push((pin, level));
        self.levels.insert(pin, level);
        Ok(())
    }

    fn read(&mut self, pin: u8) -> Result<Level, Self::Error> {
        Ok(self.levels.get(&pin).copied().unwrap_or(Level::Low))
    }
}

#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

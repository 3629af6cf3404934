// Library-Root: Wiederverwendbare Logik und Module
// Linux (std) Plattform für den Intel Galileo

// Module
pub mod config;
pub mod hal;
pub mod logger;
pub mod tasks;

// Re-exports von galileo-core
pub use galileo_core::{
    Arduino, ArduinoError, Blink, GalileoBoard, Level, PinDriver, PinMode, Sketch,
};

use thiserror::Error;

use crate::config::ConfigError;
use crate::tasks::BlinkError;

/// Fehler-Typ des Binaries
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
    #[error("blink task failed")]
    Blink(#[from] BlinkError),
}

/// Fehlerkette "a: b: c" für die Log-Ausgabe
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

// Galileo Blink - LED 1 Sekunde an, 1 Sekunde aus, endlos

use std::process::ExitCode;

use galileo_blink::config::Config;
use galileo_blink::tasks::blink_task;
use galileo_blink::{AppError, error_chain, logger};
use log::{error, info};

/// Main Entry Point
///
/// Kehrt nur bei einem Fehler zurück. Der Fehler wird genau einmal
/// ausgegeben, danach endet der Prozess mit Exit-Code 1.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ AppError::Blink(_)) => {
            error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
        // Logger ist (noch) nicht installiert
        Err(e) => {
            eprintln!("galileo-blink: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// Lädt die Build-Zeit Konfiguration, installiert den Logger und
/// startet den Blink-Task
fn run() -> Result<(), AppError> {
    let config = Config::from_build_env()?;
    logger::init(config.debug)?;

    info!(
        "galileo-blink {} (Pin {}, {} ms)",
        env!("CARGO_PKG_VERSION"),
        config.led_pin,
        config.blink_interval_ms
    );

    blink_task(&config, None)?;
    Ok(())
}

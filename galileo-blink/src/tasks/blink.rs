// Blink Task - LED an, warten, LED aus, warten, endlos
use embedded_hal::delay::DelayNs;
use galileo_core::{
    Arduino, ArduinoError, Blink, BoardError, GalileoBoard, PinDriver, Sketch, run,
};
use log::{debug, info};
use thiserror::Error;

use crate::config::{BOARD_INDEX, Config};
use crate::hal::{StdDelay, SysfsError, SysfsGpio};

#[derive(Debug, Error)]
pub enum BlinkError {
    #[error("invalid board setup")]
    Board(#[from] BoardError),
    #[error("GPIO access failed")]
    Pin(#[from] ArduinoError<SysfsError>),
}

/// Sketch-Wrapper mit Debug-Logging pro Schritt
struct Traced<S> {
    sketch: S,
    cycle: u64,
}

impl<S, P, D> Sketch<P, D> for Traced<S>
where
    S: Sketch<P, D>,
    P: PinDriver,
    D: DelayNs,
{
    fn setup(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>> {
        debug!("setup()");
        self.sketch.setup(arduino)
    }

    fn run_loop(&mut self, arduino: &mut Arduino<P, D>) -> Result<(), ArduinoError<P::Error>> {
        self.cycle += 1;
        debug!("loop() #{}", self.cycle);
        self.sketch.run_loop(arduino)
    }
}

/// Blink Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Der generische Parameter `P: PinDriver` ermöglicht:
/// - Real Hardware (SysfsGpio) im Production-Code
/// - Mock Implementation (MockPinDriver) in Tests
///
/// `cycles = None` blinkt endlos. Der erste Fehler des Treibers beendet
/// die Schleife und wird zurückgegeben.
pub fn blink_logic<P: PinDriver, D: DelayNs>(
    arduino: &mut Arduino<P, D>,
    blink: Blink,
    cycles: Option<u64>,
) -> Result<(), ArduinoError<P::Error>> {
    info!(
        "Blink auf Pin {} ({} ms an / {} ms aus)",
        blink.pin, blink.interval_ms, blink.interval_ms
    );

    let mut sketch = Traced {
        sketch: blink,
        cycle: 0,
    };
    run(&mut sketch, arduino, cycles)?;

    info!("Blink beendet nach {} Zyklen", sketch.cycle);
    Ok(())
}

/// Blink Task - initialisiert Board und sysfs-Treiber, ruft dann
/// die testbare `blink_logic()` Funktion auf.
pub fn blink_task(config: &Config, cycles: Option<u64>) -> Result<(), BlinkError> {
    let board = GalileoBoard::new(BOARD_INDEX, &[config.led_pin])?;
    info!("Board {} mit Pins {:?}", board.index(), board.pins());

    let gpio = SysfsGpio::new(&config.gpio_root);
    info!("sysfs GPIO unter {}", gpio.root().display());

    let mut arduino = Arduino::new(board, gpio, StdDelay);
    let blink = Blink::new(config.led_pin, config.blink_interval_ms);

    blink_logic(&mut arduino, blink, cycles)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

// sysfs GPIO Treiber
//
// Steuert Pins über /sys/class/gpio. Jede Operation ist genau ein
// Datei-Zugriff, Fehler werden unverändert an den Aufrufer gegeben.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use galileo_core::pins::linux_gpio;
use galileo_core::{Level, ParseError, PinDriver, PinMode};
use log::{debug, warn};
use thiserror::Error;

/// Fehler-Typ für sysfs-Zugriffe
#[derive(Debug, Error)]
pub enum SysfsError {
    #[error("pin {0} has no Linux GPIO mapping")]
    UnmappedPin(u8),
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected content in {}", path.display())]
    BadValue {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Real Hardware Pin Driver
///
/// Exportiert GPIOs bei der ersten Benutzung und gibt beim Drop
/// die selbst exportierten wieder frei.
pub struct SysfsGpio {
    root: PathBuf,
    exported: Vec<u16>,
}

impl SysfsGpio {
    /// Erstellt einen Treiber für das sysfs-Verzeichnis `root`
    /// (normalerweise `/sys/class/gpio`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exported: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Löst einen Arduino-Pin auf und exportiert ihn falls nötig
    fn gpio_dir(&mut self, pin: u8) -> Result<PathBuf, SysfsError> {
        let gpio = linux_gpio(pin).ok_or(SysfsError::UnmappedPin(pin))?;
        let dir = self.root.join(format!("gpio{}", gpio));

        if !dir.exists() {
            debug!("Export gpio{} (pin {})", gpio, pin);
            write_file(&self.root.join("export"), &gpio.to_string())?;
            if !self.exported.contains(&gpio) {
                self.exported.push(gpio);
            }
        }

        Ok(dir)
    }
}

impl PinDriver for SysfsGpio {
    type Error = SysfsError;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        let dir = self.gpio_dir(pin)?;
        write_file(&dir.join("direction"), mode.as_sysfs())
    }

    fn write(&mut self, pin: u8, level: Level) -> Result<(), Self::Error> {
        let dir = self.gpio_dir(pin)?;
        write_file(&dir.join("value"), level.as_sysfs())
    }

    fn read(&mut self, pin: u8) -> Result<Level, Self::Error> {
        let path = self.gpio_dir(pin)?.join("value");
        let raw = fs::read_to_string(&path).map_err(|source| SysfsError::Io {
            path: path.clone(),
            source,
        })?;
        Level::from_sysfs(&raw).map_err(|source| SysfsError::BadValue { path, source })
    }
}

impl Drop for SysfsGpio {
    fn drop(&mut self) {
        let unexport = self.root.join("unexport");
        for gpio in self.exported.drain(..) {
            if let Err(e) = write_file(&unexport, &gpio.to_string()) {
                warn!("Unexport gpio{} fehlgeschlagen: {}", gpio, e);
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SysfsError> {
    fs::write(path, content).map_err(|source| SysfsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    /// Leeres sysfs-Imitat, wird beim Drop gelöscht
    fn fake_root() -> TempDir {
        tempdir().unwrap()
    }

    /// Legt gpioN so an, als hätte der Kernel es schon exportiert
    fn with_gpio(root: &Path, gpio: u16) -> PathBuf {
        let dir = root.join(format!("gpio{}", gpio));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("direction"), "in").unwrap();
        fs::write(dir.join("value"), "0\n").unwrap();
        dir
    }

    #[test]
    fn test_set_mode_writes_direction() {
        let tmp = fake_root();
        let root = tmp.path();
        let dir = with_gpio(root, 39);
        let mut gpio = SysfsGpio::new(root);

        gpio.set_mode(13, PinMode::Output).unwrap();

        assert_eq!(fs::read_to_string(dir.join("direction")).unwrap(), "out");
        assert!(!root.join("export").exists());
    }

    #[test]
    fn test_set_mode_input_writes_in() {
        let tmp = fake_root();
        let root = tmp.path();
        let dir = with_gpio(root, 50);
        fs::write(dir.join("direction"), "out").unwrap();
        let mut gpio = SysfsGpio::new(root);

        gpio.set_mode(0, PinMode::Input).unwrap();

        assert_eq!(fs::read_to_string(dir.join("direction")).unwrap(), "in");
    }

    #[test]
    fn test_write_then_read_value() {
        let tmp = fake_root();
        let root = tmp.path();
        let dir = with_gpio(root, 39);
        let mut gpio = SysfsGpio::new(root);

        gpio.write(13, Level::High).unwrap();
        assert_eq!(fs::read_to_string(dir.join("value")).unwrap(), "1");
        assert_eq!(gpio.read(13).unwrap(), Level::High);

        gpio.write(13, Level::Low).unwrap();
        assert_eq!(gpio.read(13).unwrap(), Level::Low);
    }

    #[test]
    fn test_missing_gpio_is_exported() {
        let tmp = fake_root();
        let root = tmp.path();
        let mut gpio = SysfsGpio::new(root);

        // Ohne Kernel erscheint gpio39 nicht, der direction-Zugriff schlägt fehl
        let err = gpio.set_mode(13, PinMode::Output).unwrap_err();
        assert!(matches!(err, SysfsError::Io { .. }));
        assert_eq!(fs::read_to_string(root.join("export")).unwrap(), "39");

        drop(gpio);
        assert_eq!(fs::read_to_string(root.join("unexport")).unwrap(), "39");
    }

    #[test]
    fn test_unmapped_pin() {
        let tmp = fake_root();
        let root = tmp.path();
        let mut gpio = SysfsGpio::new(root);
        assert!(matches!(
            gpio.write(42, Level::High),
            Err(SysfsError::UnmappedPin(42))
        ));
    }

    #[test]
    fn test_garbage_value_reported() {
        let tmp = fake_root();
        let root = tmp.path();
        let dir = with_gpio(root, 39);
        fs::write(dir.join("value"), "x").unwrap();
        let mut gpio = SysfsGpio::new(root);
        assert!(matches!(gpio.read(13), Err(SysfsError::BadValue { .. })));
    }
}

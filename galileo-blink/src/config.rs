// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Board Konfiguration
// ============================================================================

/// Board-Index des Galileo
pub const BOARD_INDEX: u8 = 0;

/// Arduino-Pin der On-Board LED
pub const LED_PIN: u8 = 13;

/// Blink-Intervall in Millisekunden (LED an, danach genauso lange aus)
pub const BLINK_INTERVAL_MS: u32 = 1000;

// ============================================================================
// Linux Konfiguration
// ============================================================================

/// sysfs GPIO Verzeichnis
pub const GPIO_ROOT: &str = "/sys/class/gpio";

/// Debug-Logging standardmäßig aus
pub const DEBUG: bool = false;

// ============================================================================
// Build-Zeit Overrides
// ============================================================================
//
// build.rs leitet die Variablen aus .env per cargo:rustc-env weiter.

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub led_pin: u8,
    pub blink_interval_ms: u32,
    pub gpio_root: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            led_pin: LED_PIN,
            blink_interval_ms: BLINK_INTERVAL_MS,
            gpio_root: PathBuf::from(GPIO_ROOT),
            debug: DEBUG,
        }
    }
}

impl Config {
    /// Defaults plus die zur Compile-Zeit eingebackenen Overrides
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_overrides(
            option_env!("GALILEO_LED_PIN"),
            option_env!("GALILEO_BLINK_INTERVAL_MS"),
            option_env!("GALILEO_GPIO_ROOT"),
            option_env!("GALILEO_DEBUG"),
        )
    }

    fn from_overrides(
        led_pin: Option<&str>,
        blink_interval_ms: Option<&str>,
        gpio_root: Option<&str>,
        debug: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = led_pin {
            config.led_pin = parse("GALILEO_LED_PIN", raw)?;
        }
        if let Some(raw) = blink_interval_ms {
            config.blink_interval_ms = parse("GALILEO_BLINK_INTERVAL_MS", raw)?;
        }
        if let Some(raw) = gpio_root.filter(|r| !r.is_empty()) {
            config.gpio_root = PathBuf::from(raw);
        }
        if let Some(raw) = debug {
            config.debug = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "" | "0" | "false" | "no" | "off" => false,
                _ => return Err(invalid("GALILEO_DEBUG", raw)),
            };
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(var, raw))
}

fn invalid(var: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_overrides(None, None, None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.led_pin, 13);
        assert_eq!(config.blink_interval_ms, 1000);
    }

    #[test]
    fn test_overrides_applied() {
        let config =
            Config::from_overrides(Some("7"), Some(" 250 "), Some("/tmp/gpio"), Some("true"))
                .unwrap();
        assert_eq!(config.led_pin, 7);
        assert_eq!(config.blink_interval_ms, 250);
        assert_eq!(config.gpio_root, PathBuf::from("/tmp/gpio"));
        assert!(config.debug);
    }

    #[test]
    fn test_invalid_pin_rejected() {
        let err = Config::from_overrides(Some("dreizehn"), None, None, None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "GALILEO_LED_PIN",
                value: "dreizehn".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_debug_flag_rejected() {
        assert!(Config::from_overrides(None, None, None, Some("vielleicht")).is_err());
    }
}

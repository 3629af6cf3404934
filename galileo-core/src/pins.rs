//! Pin-Zuordnung Galileo Gen 1
//!
//! Arduino-Header-Pin → Linux sysfs GPIO Nummer.
//! IO0-IO13 sind die digitalen Pins, A0-A5 liegen auf 14-19.

/// Höchste Pin-Nummer am Arduino-Header (A5)
pub const MAX_PIN_NUMBER: u8 = 19;

const GEN1_GPIO: [u16; MAX_PIN_NUMBER as usize + 1] = [
    50, 51, 32, 18, 28, 17, 24, 27, 26, 19, // IO0 - IO9
    16, 25, 38, 39, // IO10 - IO13
    44, 45, 46, 47, 48, 49, // A0 - A5
];

/// Linux GPIO Nummer für einen Arduino-Pin, `None` außerhalb des Headers
///
/// ```
/// # use galileo_core::pins::linux_gpio;
/// assert_eq!(linux_gpio(13), Some(39)); // On-Board LED
/// assert_eq!(linux_gpio(20), None);
/// ```
pub fn linux_gpio(pin: u8) -> Option<u16> {
    GEN1_GPIO.get(pin as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_pins_are_mapped() {
        for pin in 0..=MAX_PIN_NUMBER {
            assert!(linux_gpio(pin).is_some(), "pin {} unmapped", pin);
        }
    }

    #[test]
    fn test_gpio_numbers_unique() {
        for (i, a) in GEN1_GPIO.iter().enumerate() {
            assert!(!GEN1_GPIO[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_analog_pins() {
        assert_eq!(linux_gpio(14), Some(44));
        assert_eq!(linux_gpio(MAX_PIN_NUMBER), Some(49));
    }
}

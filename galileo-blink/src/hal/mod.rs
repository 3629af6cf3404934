// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus galileo-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod delay;
pub mod sysfs;

pub use delay::StdDelay;
pub use sysfs::{SysfsError, SysfsGpio};

// Logger-Setup über env_logger
//
// Basis-Level ist Info, mit GALILEO_DEBUG Debug. RUST_LOG überschreibt beides.

use log::{LevelFilter, SetLoggerError};

/// Installiert den globalen Logger, schlägt fehl wenn schon einer aktiv ist
pub fn init(debug: bool) -> Result<(), SetLoggerError> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
}

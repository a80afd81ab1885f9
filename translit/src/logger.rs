// translit/src/logger.rs
//! Logger initialization for the translit binary.
//!
//! License: MIT OR Apache-2.0

use env_logger::Builder;
use log::LevelFilter;

/// Initializes `env_logger` for the process. An explicit level overrides
/// `RUST_LOG`; passing `None` leaves the environment in charge. Calling
/// this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

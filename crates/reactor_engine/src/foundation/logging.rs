//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    init_with_level("info");
}

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still overrides per-module filters. An unknown level name falls back
/// to `info`. Calling this more than once is harmless; later calls are ignored.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    let result = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();

    match result {
        Ok(()) => log::debug!("Logging initialized at {}", filter),
        Err(_) => log::debug!("Logger already initialized, keeping existing configuration"),
    }
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', using info");
        LevelFilter::Info
    })
}

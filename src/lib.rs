// check_graphite library - public API

// Re-export error types
pub mod error;
pub use error::{ProbeError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use self::core::config::CheckConfig;

// Initialize logging on stderr, stdout carries the plugin output
pub fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

//! Logging configuration module
//!
//! Provides configurable JSON/Pretty logging output
//!
//! # Environment Variables
//! - `LOG_FORMAT`: Output format - `json` (default) or `pretty`
//! - `RUST_LOG`: Log level filter (default: `info`)

use tracing_subscriber::EnvFilter;

/// Resolve the output format from `LOG_FORMAT` (defaults to `json`)
fn resolve_format() -> String {
    std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string())
}

/// Initialize logging with configurable format
///
/// Reads `LOG_FORMAT` from environment:
/// - `json` (default): Machine-parseable JSON output for production
/// - `pretty`: Human-readable output for development
///
/// Also respects `RUST_LOG` for log level filtering (default: `info`)
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match resolve_format().as_str() {
        "pretty" => {
            // Human-readable for development
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .pretty()
                .init();
        }
        _ => {
            // JSON for production (default)
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .json()
                .init();
        }
    }
}

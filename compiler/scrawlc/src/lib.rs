//! The `scrawl` protocol validator.
//!
//! Reads a protocol file, parses it, and optionally prints a summary, dumps
//! the definition tree as JSON, or rewrites the file in canonical form.

pub mod config;
pub mod report;
pub mod verify;

pub use config::{parse_args, ArgsError, Invocation, VerifyConfig, USAGE};
pub use report::{ColorMode, Palette};
pub use verify::{beautify, verify, CliError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=scrawl_parse=debug`
/// or `RUST_LOG=trace` for every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

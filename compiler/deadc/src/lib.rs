//! DeadBasic command line.
//!
//! The `deadbasic` binary runs a `.ba` file or, with no arguments, an
//! interactive console. The engine lives in `dead_eval`; this crate only
//! handles process arguments, the terminal, and logging setup.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Only installs a subscriber when `RUST_LOG` is set, so normal runs pay
/// nothing. Logs go to stderr to keep program output clean.
///
/// ```bash
/// RUST_LOG=dead_eval=debug deadbasic program.ba
/// RUST_LOG=dead_eval=trace deadbasic loops.ba
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

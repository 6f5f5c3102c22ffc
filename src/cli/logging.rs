// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging/tracing setup shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging to stderr.
///
/// `RUST_LOG` is honoured unless `debug` is set, which forces debug output
/// for this crate.
pub fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_linter=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}

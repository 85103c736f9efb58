// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the application.
//!
//! Installs a global `tracing` subscriber writing to stderr. The filter is
//! read from `RUST_LOG` and falls back to [`DEFAULT_FILTER`] when the variable
//! is unset or invalid.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "iced_reveal=info";

static INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Initializes the global subscriber.
///
/// Subsequent calls are no-ops. Returns `false` if another subscriber was
/// already installed by someone else, in which case our events go there.
pub fn init() -> bool {
    *INITIALIZED.get_or_init(|| {
        let installed = fmt()
            .with_env_filter(build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!("logging initialized");
        }
        installed
    })
}

/// Builds the filter from a raw directive string, falling back to the default.
fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

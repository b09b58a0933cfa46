//! Stderr diagnostics for the address book.
//!
//! The menu and its prompts own stdout; store events and swallowed read
//! errors are reported here instead.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Must be called once, before the menu starts.
///
/// The filter comes from `RUST_LOG` (a `.env` entry works too). Without it
/// only warnings are shown, e.g. an address book that cannot be read.
/// `RUST_LOG=address_book=debug` also traces every save, update and delete.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact().with_target(false))
        .init();
}

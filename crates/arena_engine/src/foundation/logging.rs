//! Logging setup
//!
//! The core logs through the `log` facade; the host application picks the
//! backend. This helper wires up `env_logger` for binaries that don't need
//! anything fancier.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

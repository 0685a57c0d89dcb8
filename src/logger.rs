//! Logging setup shared by the demo binaries.

use env_logger::{Builder, Env};

use crate::error::Result;

/// Initializes `env_logger` at `info` unless `RUST_LOG` says otherwise.
pub fn init() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

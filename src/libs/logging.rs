//! Structured logging bootstrap.
//!
//! The subscriber is only installed in debug mode (`TIMETRAK_DEBUG` or
//! `RUST_LOG`); otherwise the message macros print plain text and nothing
//! consumes `tracing` events.

use super::messages::macros::is_debug_mode;
use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_tracing() -> Result<()> {
    if !is_debug_mode() || tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("timetrak=debug,info"))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    tracing::debug!("tracing initialised");
    Ok(())
}

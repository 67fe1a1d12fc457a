//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables. Logs always go to stderr so
//! they never mix with selected output on stdout.

use anyhow::Result;
use colored::control as color_control;
use is_terminal::IsTerminal;
use tracing_subscriber::FmtSubscriber;

use crate::args::Verbosity;

/// Initialize the logging subsystem.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(verbosity: Verbosity, no_color: bool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(verbosity.as_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(use_color(no_color))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, or stderr is redirected
    if !use_color(no_color) {
        color_control::set_override(false);
    }
    Ok(())
}

fn use_color(no_color: bool) -> bool {
    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    !(no_color || env_no_color) && std::io::stderr().is_terminal()
}

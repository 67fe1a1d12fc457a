//! Utility modules for the CLI.

pub mod logging;

pub use logging::initialize_logging;

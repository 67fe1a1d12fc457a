//! Shared argument types for the `cutr` command line.

mod verbosity;

pub use verbosity::Verbosity;

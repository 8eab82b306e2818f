//! Library components of the `ark` command-line host.

pub mod config;
pub mod logging;
pub mod outline;
pub mod replay;

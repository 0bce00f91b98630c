//! Shared pieces of the campus CLI.

pub mod logging;

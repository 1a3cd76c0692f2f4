//! Infrastructure layer module
//!
//! Configuration loading and logging setup shared by the binary and tests.

pub mod config;
pub mod logging;

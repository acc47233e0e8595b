//! Logging utilities.
//!
//! Builders report capacity aborts, ladder exhaustion and configuration
//! conflicts through the `log` facade. This module only wires up the
//! `env_logger` backend for binaries and tests that want to see them.

mod init;

pub use init::{init_logging, LoggingConfig};

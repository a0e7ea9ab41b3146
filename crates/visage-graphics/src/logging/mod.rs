//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; `env_logger` is installed by hosts that call [`init_logging`].

mod init;

pub use init::{LoggingConfig, init_logging};

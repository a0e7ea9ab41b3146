use visage_graphics::logging::{LoggingConfig, init_logging};

/// Installs the `env_logger` backend (filter from `RUST_LOG`, default `info`).
/// Safe to call more than once.
#[unsafe(no_mangle)]
pub extern "C" fn VisageLogging_init() {
    init_logging(LoggingConfig::default());
}

// src/logging.rs

use crate::config::Config;
use crate::errors::{ChatError, ChatResult};
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};
use log::info;

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    std::fs::create_dir_all(&config.log_dir)?;

    Logger::try_with_env_or_str(&config.log_level)
        .map_err(|e| ChatError::Logging(e.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename("chatpane"),
        )
        .append()
        .format(detailed_format)
        .start()
        .map_err(|e| ChatError::Logging(e.to_string()))
}

/// Logs one API call.
pub fn log_api_call(endpoint: &str, request_summary: &str, status: Option<u16>, elapsed_ms: u128) {
    let status = status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    info!(
        "{} - {} - Status: {} - Time: {}ms",
        endpoint, request_summary, status, elapsed_ms
    );
}

use std::io::Write;

use crate::cli::args::{get_log_level_from_verbose, LogFormat};

/// Builds the process logger for the given verbosity and line format.
pub fn build_logger(verbose: u8, format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(get_log_level_from_verbose(verbose));
    if format == LogFormat::Json {
        builder.format(|buf, record| {
            let line = serde_json::json!({
                "timestamp": buf.timestamp().to_string(),
                "level": record.level().to_string(),
                "target": record.target(),
                "message": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        });
    }
    builder
}

/// Installs the process logger. Call once, before any work starts.
pub fn init_logger(verbose: u8, format: LogFormat) {
    build_logger(verbose, format).init();
}

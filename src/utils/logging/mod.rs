//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"
//!
//! The evaluator itself only emits `tracing` events. Installing a subscriber is left to the
//! host; [`setup_logging`] is a ready-made one for hosts that do not bring their own.

pub mod error;

use std::{env, fs::create_dir_all, path::Path};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Name of the log file written in file mode.
const LOG_FILE_NAME: &str = "conditions.log";

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO.
pub fn parse_log_level(level: &str) -> tracing::Level {
	match level.trim().to_lowercase().as_str() {
		"trace" => tracing::Level::TRACE,
		"debug" => tracing::Level::DEBUG,
		"info" => tracing::Level::INFO,
		"warn" => tracing::Level::WARN,
		"error" => tracing::Level::ERROR,
		_ => tracing::Level::INFO,
	}
}

/// Resolves the directory log files are written to, always with a trailing slash.
pub fn resolve_log_dir(configured: Option<&str>) -> String {
	let log_dir = configured.unwrap_or("logs/");
	format!("{}/", log_dir.trim_end_matches('/'))
}

/// Creates a log format with configurable ANSI support
fn create_log_format(with_ansi: bool) -> fmt::format::Format<fmt::format::Compact> {
	fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_ansi(with_ansi)
		.compact()
}

/// Sets up logging by reading configuration from environment variables.
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
	let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
	let level_filter = parse_log_level(&log_level);

	let to_file = log_mode.to_lowercase() == "file";
	let format = create_log_format(!to_file);

	let subscriber = tracing_subscriber::registry().with(EnvFilter::new(level_filter.to_string()));

	if to_file {
		let log_dir = resolve_log_dir(env::var("LOG_DATA_DIR").ok().as_deref());
		create_dir_all(Path::new(&log_dir))?;

		let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);

		subscriber
			.with(
				fmt::layer()
					.event_format(format)
					.with_writer(file_appender)
					.fmt_fields(fmt::format::PrettyFields::new()),
			)
			.try_init()?;
	} else {
		subscriber
			.with(
				fmt::layer()
					.event_format(format)
					.fmt_fields(fmt::format::PrettyFields::new()),
			)
			.try_init()?;
	}

	info!("Logging is successfully configured (mode: {})", log_mode);
	Ok(())
}

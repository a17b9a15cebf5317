use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use crate::paths;

const LOG_FILE_NAME: &str = "tabpad.log";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory failed: {path}")]
	CreateLogDir {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Routes `tracing` output to `tabpad.log` in the user log directory.
///
/// `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) -> Result<PathBuf, LoggingError> {
	let log_dir = paths::log_dir();
	std::fs::create_dir_all(&log_dir)
		.map_err(|source| LoggingError::CreateLogDir { path: log_dir.clone(), source })?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
		.with_writer(file_appender)
		.with_ansi(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	Ok(log_dir.join(LOG_FILE_NAME))
}

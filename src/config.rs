use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::paths;
use crate::state::{AccessHistory, TabManager};

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config file failed: {path}")]
	Read {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parse config file failed: {path}")]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Open tab ceiling, `0` disables it.
	pub max_tabs:      usize,
	pub history_limit: usize,
	pub window_width:  f32,
	pub window_height: f32,
	pub title:         String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_tabs:      TabManager::DEFAULT_MAX_TABS,
			history_limit: AccessHistory::DEFAULT_LIMIT,
			window_width:  800.0,
			window_height: 600.0,
			title:         "Tabpad".to_string(),
		}
	}
}

impl Config {
	/// Loads `explicit` when given, otherwise the per-user config file if
	/// present. Only an explicitly requested file has to exist.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		match explicit {
			Some(path) => Self::from_file(path),
			None => {
				let path = paths::config_file();
				if path.is_file() {
					Self::from_file(&path)
				} else {
					debug!("no config file at {}, using defaults", path.display());
					Ok(Self::default())
				}
			}
		}
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		Self::parse(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
	}

	pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
		let mut config: Self = toml::from_str(text)?;
		config.history_limit = config.history_limit.max(1);
		Ok(config)
	}

	pub fn tab_manager(&self) -> TabManager {
		TabManager::with_limits(self.max_tabs, self.history_limit)
	}
}

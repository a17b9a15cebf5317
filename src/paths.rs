use std::path::PathBuf;

const APP_DIR: &str = "tabpad";

/// `tabpad/config.toml` under the platform config dir.
pub(crate) fn config_file() -> PathBuf {
	or_temp(dirs::config_dir()).join(APP_DIR).join("config.toml")
}

/// XDG state dir on Linux, the local data dir elsewhere.
pub(crate) fn log_dir() -> PathBuf {
	or_temp(dirs::state_dir().or_else(dirs::data_local_dir)).join(APP_DIR).join("logs")
}

fn or_temp(dir: Option<PathBuf>) -> PathBuf {
	dir.unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::{config_file, log_dir};

	#[test]
	fn paths_should_live_under_app_dir() {
		assert!(config_file().ends_with(Path::new("tabpad").join("config.toml")));
		assert!(log_dir().ends_with(Path::new("tabpad").join("logs")));
	}
}

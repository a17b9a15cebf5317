use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tabpad::{app::App, config::Config, logging};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "tabpad", version, about = "A tabbed desktop text editor")]
struct Cli {
	/// Files to open in tabs at startup.
	files:     Vec<PathBuf>,
	/// Config file to use instead of the per-user one.
	#[arg(long)]
	config:    Option<PathBuf>,
	/// Maximum open tabs, 0 for unlimited. Overrides the config file.
	#[arg(long)]
	max_tabs:  Option<usize>,
	#[arg(long, default_value = "info")]
	log_level: String,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	let log_file = logging::init_logging(&cli.log_level).context("initialize logging failed")?;
	info!("logging to {}", log_file.display());

	let mut config = Config::load(cli.config.as_deref()).context("load config failed")?;
	if let Some(max_tabs) = cli.max_tabs {
		config.max_tabs = max_tabs;
	}

	let app = App::new(&config);
	app.run(cli.files).context("run app failed")
}

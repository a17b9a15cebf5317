use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context as _, anyhow};
use eframe::egui::{self, ViewportBuilder, ViewportCommand};
use tracing::{error, info, trace, warn};

use crate::action::{AppAction, FileAction};
use crate::action_handler::ActionHandler;
use crate::config::Config;
use crate::dialog::{DialogProvider, NativeDialogs};
use crate::file_access::{FileAccess, OsFileAccess};
use crate::file_ops::FileOperations;
use crate::input::InputHandler;
use crate::state::AppState;
use crate::ui::{self, Renderer};


/// Desktop host. Every frame it turns key presses and widget interaction into
/// actions, then drains the queue and applies the batch in order.
pub struct App<F = OsFileAccess, D = NativeDialogs> {
	state:          AppState,
	renderer:       Renderer,
	input_handler:  InputHandler,
	action_handler: ActionHandler,
	file_ops:       FileOperations<F, D>,
	event_tx:       flume::Sender<AppAction>,
	event_rx:       flume::Receiver<AppAction>,
	window_size:    [f32; 2],
	shown_title:    String,
	close_warned:   bool,
}

impl App {
	pub fn new(config: &Config) -> Self {
		Self::with_file_ops(config, FileOperations::new(OsFileAccess, NativeDialogs))
	}

	pub fn run(self, file_paths: Vec<PathBuf>) -> anyhow::Result<()> {
		for path in file_paths {
			self.open_file(path)?;
		}

		let app_name = self.state.title.clone();
		let options = eframe::NativeOptions {
			viewport: ViewportBuilder::default().with_title(self.state.window_title()).with_inner_size(self.window_size),
			..Default::default()
		};
		info!("starting window: {}", app_name);
		eframe::run_native(&app_name, options, Box::new(move |_cc| Ok(Box::new(self))))
			.map_err(|err| anyhow!("{}", err))
			.context("event loop failed")
	}
}

impl<F, D> App<F, D>
where
	F: FileAccess,
	D: DialogProvider,
{
	pub fn with_file_ops(config: &Config, file_ops: FileOperations<F, D>) -> Self {
		let mut state = AppState::with_tabs(config.tab_manager());
		state.title = config.title.clone();
		let (event_tx, event_rx) = flume::unbounded();

		Self {
			state,
			renderer: Renderer::new(),
			input_handler: InputHandler::new(),
			action_handler: ActionHandler::new(),
			file_ops,
			event_tx,
			event_rx,
			window_size: [config.window_width, config.window_height],
			shown_title: String::new(),
			close_warned: false,
		}
	}

	pub fn state(&self) -> &AppState {
		&self.state
	}

	pub fn open_file(&self, path: PathBuf) -> anyhow::Result<()> {
		self
			.event_tx
			.send(AppAction::File(FileAction::OpenPath(path)))
			.map_err(|err| anyhow!("event bus disconnected: {}", err))
			.context("enqueue OpenPath action failed")
	}

	/// One frame: shortcuts, then widgets, then the queued batch. `Break`
	/// means a quit was applied.
	pub fn tick(&mut self, ctx: &egui::Context) -> ControlFlow<()> {
		for action in self.input_handler.take_actions(ctx) {
			if let Err(err) = self.event_tx.send(action) {
				error!("failed to send key action to event bus: {}", err);
			}
		}

		self.renderer.render(ctx, &self.state, &self.event_tx);
		let flow = self.apply_pending(ctx);
		self.sync_window_title(ctx);
		self.warn_on_unsaved_close(ctx);
		flow
	}

	fn apply_pending(&mut self, ctx: &egui::Context) -> ControlFlow<()> {
		let batch = self.event_rx.try_iter().collect::<Vec<_>>();
		if batch.is_empty() {
			return ControlFlow::Continue(());
		}
		trace!("applying {} actions", batch.len());

		let focused_before = self.state.tabs.active().map(|doc| doc.id());
		let flow = self.action_handler.apply_all(&mut self.state, &mut self.file_ops, batch);
		if let Some(active) = self.state.tabs.active().map(|doc| doc.id()) {
			if Some(active) != focused_before {
				ctx.memory_mut(|memory| memory.request_focus(ui::editor_id(active)));
			}
		}
		ctx.request_repaint();
		flow
	}

	fn sync_window_title(&mut self, ctx: &egui::Context) {
		let title = self.state.window_title();
		if title != self.shown_title {
			ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
			self.shown_title = title;
		}
	}

	fn warn_on_unsaved_close(&mut self, ctx: &egui::Context) {
		let close_requested = ctx.input(|input| input.viewport().close_requested());
		if close_requested && !self.close_warned && self.state.tabs.has_unsaved_changes() {
			warn!("window closed with unsaved changes");
			self.close_warned = true;
		}
	}
}

impl<F, D> eframe::App for App<F, D>
where
	F: FileAccess,
	D: DialogProvider,
{
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		if self.tick(ctx).is_break() {
			ctx.send_viewport_cmd(ViewportCommand::Close);
		}
	}
}

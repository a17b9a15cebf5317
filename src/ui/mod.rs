mod editor_surface;
mod header;
mod status_bar;
mod tab_bar;

use eframe::egui::{CentralPanel, Context, TopBottomPanel};
use tracing::error;

use crate::action::AppAction;
use crate::state::AppState;
pub(crate) use editor_surface::editor_id;
use status_bar::StatusBarWidget;
use tab_bar::TabBar;

/// Draws one frame from `state`. User input on widgets is reported through
/// `actions`; nothing here mutates the state.
pub struct Renderer {
	tab_bar: TabBar,
}

impl Renderer {
	pub fn new() -> Self {
		Self { tab_bar: TabBar::default() }
	}

	pub fn render(&mut self, ctx: &Context, state: &AppState, actions: &flume::Sender<AppAction>) {
		TopBottomPanel::top("header").show(ctx, |ui| header::show(ui, actions));
		TopBottomPanel::top("tab_bar").show(ctx, |ui| self.tab_bar.show(ui, &state.tabs, actions));
		TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
			ui.add(StatusBarWidget::from_state(state));
		});
		CentralPanel::default().show(ctx, |ui| {
			if let Some(doc) = state.tabs.active() {
				editor_surface::show(ui, doc, actions);
			}
		});
	}
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

fn emit(actions: &flume::Sender<AppAction>, action: AppAction) {
	if let Err(err) = actions.send(action) {
		error!("failed to send ui action to event bus: {}", err);
	}
}

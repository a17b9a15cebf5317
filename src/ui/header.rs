use eframe::egui::Ui;

use super::emit;
use crate::action::{AppAction, FileAction};

/// File buttons above the tab strip.
pub(super) fn show(ui: &mut Ui, actions: &flume::Sender<AppAction>) {
	ui.horizontal(|ui| {
		let buttons = [
			("New", FileAction::New),
			("Open", FileAction::Open),
			("Save", FileAction::Save),
			("Save As", FileAction::SaveAs),
		];
		for (label, action) in buttons {
			if ui.button(label).clicked() {
				emit(actions, AppAction::File(action));
			}
		}
	});
}

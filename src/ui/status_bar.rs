use eframe::egui::{Label, Response, RichText, Ui, Widget};

use crate::state::AppState;

pub(super) struct StatusBarWidget {
	status_line: String,
	unsaved:     bool,
}

impl StatusBarWidget {
	pub(super) fn from_state(state: &AppState) -> Self {
		Self { status_line: state.status_line(), unsaved: state.tabs.has_unsaved_changes() }
	}
}

impl Widget for StatusBarWidget {
	fn ui(self, ui: &mut Ui) -> Response {
		ui.horizontal(|ui| {
			ui.add(Label::new(RichText::new(self.status_line).small()));
			if self.unsaved {
				ui.add(Label::new(RichText::new("unsaved changes").small().italics()));
			}
		})
		.response
	}
}

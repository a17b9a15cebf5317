use std::collections::HashMap;

use eframe::egui::{Pos2, Rect, Sense, Ui};

use super::emit;
use crate::action::{AppAction, TabAction};
use crate::state::{DocumentId, TabManager};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy)]
struct TabHandle {
	rect: Rect,
}

/// Tab strip widget state. Handles are keyed by document id and pruned once
/// their document is gone.
#[derive(Debug, Default)]
pub(super) struct TabBar {
	handles:  HashMap<DocumentId, TabHandle>,
	dragging: Option<DocumentId>,
}

impl TabBar {
	pub(super) fn show(&mut self, ui: &mut Ui, tabs: &TabManager, actions: &flume::Sender<AppAction>) {
		self.handles.retain(|id, _| tabs.get(*id).is_some());
		if self.dragging.is_some_and(|id| tabs.get(id).is_none()) {
			self.dragging = None;
		}

		ui.horizontal(|ui| {
			for (index, doc) in tabs.tabs().iter().enumerate() {
				let id = doc.id();
				let is_active = tabs.active_index() == Some(index);

				let response = ui.selectable_label(is_active, doc.tab_title()).interact(Sense::drag());
				if response.clicked() {
					emit(actions, AppAction::Tab(TabAction::Select(id)));
				}
				if response.drag_started() {
					self.dragging = Some(id);
				}
				self.handles.insert(id, TabHandle { rect: response.rect });

				if ui.small_button("×").on_hover_text("Close tab").clicked() {
					emit(actions, AppAction::Tab(TabAction::Close(id)));
				}
				ui.separator();
			}

			if ui.button("+").on_hover_text("New tab").clicked() {
				emit(actions, AppAction::Tab(TabAction::New));
			}
		});

		let Some(dragged) = self.dragging else {
			return;
		};
		let (released, pointer) = ui.input(|input| (input.pointer.any_released(), input.pointer.interact_pos()));
		if !released {
			return;
		}
		self.dragging = None;

		let Some(pointer) = pointer else {
			return;
		};
		if let Some(action) = self.drop_action(tabs, dragged, pointer) {
			emit(actions, action);
		}
	}

	fn drop_action(&self, tabs: &TabManager, dragged: DocumentId, pointer: Pos2) -> Option<AppAction> {
		let target = self.handles.iter().find(|(_, handle)| handle.rect.contains(pointer)).map(|(id, _)| *id)?;
		let from = tabs.position_of(dragged)?;
		let to = tabs.position_of(target)?;
		(from != to).then_some(AppAction::Tab(TabAction::Move { from, to }))
	}
}

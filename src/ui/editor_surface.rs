use eframe::egui::{Id, ScrollArea, TextEdit, Ui};

use super::emit;
use crate::action::{AppAction, EditorAction};
use crate::state::{Document, DocumentId};

/// Text area for the active document. Edits come back as actions, the
/// document itself is never touched here.
pub(super) fn show(ui: &mut Ui, doc: &Document, actions: &flume::Sender<AppAction>) {
	let mut text = doc.content().to_string();
	let changed = ScrollArea::vertical()
		.id_salt(("editor-scroll", doc.id().0))
		.show(ui, |ui| {
			ui.add_sized(
				ui.available_size(),
				TextEdit::multiline(&mut text)
					.id(editor_id(doc.id()))
					.hint_text("Type here...")
					.code_editor(),
			)
			.changed()
		})
		.inner;

	if changed {
		emit(actions, AppAction::Editor(EditorAction::ContentChanged { id: doc.id(), text }));
	}
}

pub(crate) fn editor_id(id: DocumentId) -> Id {
	Id::new(("editor", id.0))
}

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use super::ActionHandler;
use crate::action::{AppAction, EditorAction, FileAction, SystemAction, TabAction};
use crate::dialog::DialogProvider;
use crate::file_access::MemoryFileAccess;
use crate::file_ops::FileOperations;
use crate::state::{AppState, DocumentId};

struct FixedDialogs {
	open: Option<PathBuf>,
	save: Option<PathBuf>,
}

impl DialogProvider for FixedDialogs {
	fn choose_open_path(&mut self) -> Option<PathBuf> {
		self.open.clone()
	}

	fn choose_save_path(&mut self, _suggested: Option<&Path>) -> Option<PathBuf> {
		self.save.clone()
	}
}

fn file_ops(files: MemoryFileAccess) -> FileOperations<MemoryFileAccess, FixedDialogs> {
	FileOperations::new(files, FixedDialogs { open: Some(PathBuf::from("a.txt")), save: None })
}

fn tab(action: TabAction) -> AppAction {
	AppAction::Tab(action)
}

#[test]
fn close_current_should_noop_with_single_tab() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let flow = handler.apply(&mut state, &mut ops, tab(TabAction::CloseCurrent));
	assert_eq!(flow, ControlFlow::Continue(()));
	assert_eq!(state.tabs.len(), 1);
	assert_eq!(state.tabs.active().map(|doc| doc.id()), Some(DocumentId(1)));
}

#[test]
fn close_button_on_single_tab_should_replace_it() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let _ = handler.apply(&mut state, &mut ops, tab(TabAction::Close(DocumentId(1))));
	assert_eq!(state.tabs.len(), 1);
	assert_eq!(state.tabs.active().map(|doc| doc.id()), Some(DocumentId(2)));
}

#[test]
fn batch_should_apply_in_delivery_order() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let flow = handler.apply_all(
		&mut state,
		&mut ops,
		[
			tab(TabAction::New),
			tab(TabAction::New),
			tab(TabAction::SelectIndex(0)),
			tab(TabAction::CloseCurrent),
			tab(TabAction::SelectIndex(8)),
		],
	);

	assert_eq!(flow, ControlFlow::Continue(()));
	let ids = state.tabs.tabs().iter().map(|doc| doc.id()).collect::<Vec<_>>();
	assert_eq!(ids, vec![DocumentId(2), DocumentId(3)]);
	assert_eq!(state.tabs.active().map(|doc| doc.id()), Some(DocumentId(3)));
}

#[test]
fn quit_should_stop_the_batch() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let flow = handler.apply_all(
		&mut state,
		&mut ops,
		[AppAction::System(SystemAction::Quit), tab(TabAction::New)],
	);
	assert_eq!(flow, ControlFlow::Break(()));
	assert_eq!(state.tabs.len(), 1);
}

#[test]
fn content_change_should_mark_document_modified() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let _ = handler.apply(
		&mut state,
		&mut ops,
		AppAction::Editor(EditorAction::ContentChanged { id: DocumentId(1), text: "hi".to_string() }),
	);
	assert!(state.tabs.has_unsaved_changes());
	assert_eq!(state.window_title(), "Untitled* - Tabpad");

	let _ = handler.apply(
		&mut state,
		&mut ops,
		AppAction::Editor(EditorAction::ContentChanged { id: DocumentId(9), text: "lost".to_string() }),
	);
	assert_eq!(state.tabs.len(), 1);
}

#[test]
fn open_then_save_should_update_status_and_storage() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new().with_file("a.txt", "alpha"));
	let mut handler = ActionHandler::new();

	let _ = handler.apply(&mut state, &mut ops, AppAction::File(FileAction::Open));
	assert_eq!(state.status_bar.message, "opened a.txt");

	let id = state.tabs.active().map(|doc| doc.id()).expect("opened tab is active");
	let _ = handler.apply_all(
		&mut state,
		&mut ops,
		[
			AppAction::Editor(EditorAction::ContentChanged { id, text: "beta".to_string() }),
			AppAction::File(FileAction::Save),
		],
	);
	assert_eq!(state.status_bar.message, "saved a.txt");
	assert_eq!(ops.files().contents(Path::new("a.txt")), Some(b"beta".to_vec()));
	assert!(!state.tabs.has_unsaved_changes());
}

#[test]
fn failed_open_should_leave_state_and_status_unchanged() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let flow = handler.apply(&mut state, &mut ops, AppAction::File(FileAction::OpenPath(PathBuf::from("missing.txt"))));
	assert_eq!(flow, ControlFlow::Continue(()));
	assert_eq!(state.tabs.len(), 1);
	assert_eq!(state.status_bar.message, "ready");
}

#[test]
fn cancelled_save_as_should_not_touch_status() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let _ = handler.apply(&mut state, &mut ops, AppAction::File(FileAction::SaveAs));
	assert_eq!(state.status_bar.message, "ready");
	assert!(state.tabs.active().expect("active tab").is_untitled());
}

#[test]
fn move_action_should_reorder_tabs() {
	let mut state = AppState::new();
	let mut ops = file_ops(MemoryFileAccess::new());
	let mut handler = ActionHandler::new();

	let _ = handler.apply_all(&mut state, &mut ops, [tab(TabAction::New), tab(TabAction::Move { from: 1, to: 0 })]);
	let ids = state.tabs.tabs().iter().map(|doc| doc.id()).collect::<Vec<_>>();
	assert_eq!(ids, vec![DocumentId(2), DocumentId(1)]);
	assert_eq!(state.tabs.active_index(), Some(0));
	assert_eq!(state.status_line(), "new tab | tab 1/2");
}

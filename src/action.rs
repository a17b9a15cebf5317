use std::path::PathBuf;

use crate::state::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
	Tab(TabAction),
	File(FileAction),
	Editor(EditorAction),
	System(SystemAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
	New,
	/// Keyboard close: ignored while only one tab is open.
	CloseCurrent,
	Close(DocumentId),
	Select(DocumentId),
	/// 0-based position in the tab bar.
	SelectIndex(usize),
	SwitchPrev,
	SwitchNext,
	Move { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
	New,
	Open,
	OpenPath(PathBuf),
	Save,
	SaveAs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
	ContentChanged { id: DocumentId, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
	Quit,
}

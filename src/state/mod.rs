use std::path::{Path, PathBuf};

mod document;
mod history;
mod tab;

#[cfg(test)]
mod tests;

pub use history::AccessHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// One open file: identity, location and in-memory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	id:           DocumentId,
	display_name: String,
	path:         PathBuf,
	content:      String,
	modified:     bool,
}

/// Ordered tab collection with an active index and a bounded MRU history.
///
/// Order is tab-bar order, not creation order. After construction the
/// collection is never empty and the active index always points at a tab.
#[derive(Debug)]
pub struct TabManager {
	tabs:     Vec<Document>,
	active:   Option<usize>,
	history:  AccessHistory,
	max_tabs: usize,
	next_id:  u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarState {
	pub message: String,
}

impl Default for StatusBarState {
	fn default() -> Self {
		Self { message: "ready".to_string() }
	}
}

#[derive(Debug)]
pub struct AppState {
	pub title:      String,
	pub tabs:       TabManager,
	pub status_bar: StatusBarState,
}

impl AppState {
	pub fn new() -> Self {
		Self::with_tabs(TabManager::new())
	}

	pub fn with_tabs(tabs: TabManager) -> Self {
		Self { title: "Tabpad".to_string(), tabs, status_bar: StatusBarState::default() }
	}

	pub fn window_title(&self) -> String {
		match self.tabs.active() {
			Some(doc) => format!("{} - {}", doc.tab_title(), self.title),
			None => self.title.clone(),
		}
	}

	pub fn status_line(&self) -> String {
		let position = self.tabs.active_index().map(|idx| idx + 1).unwrap_or(0);
		format!("{} | tab {}/{}", self.status_bar.message, position, self.tabs.len())
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new()
	}
}

fn display_name_from_path(path: &Path) -> Option<String> {
	path.file_name().map(|name| name.to_string_lossy().into_owned())
}

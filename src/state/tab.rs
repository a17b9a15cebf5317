use std::path::{Path, PathBuf};

use tracing::debug;

use super::{AccessHistory, Document, DocumentId, TabManager};

impl TabManager {
	pub const DEFAULT_MAX_TABS: usize = 20;

	pub fn new() -> Self {
		Self::with_limits(Self::DEFAULT_MAX_TABS, AccessHistory::DEFAULT_LIMIT)
	}

	/// `max_tabs == 0` disables the ceiling.
	pub fn with_limits(max_tabs: usize, history_limit: usize) -> Self {
		let mut manager = Self {
			tabs: Vec::new(),
			active: None,
			history: AccessHistory::new(history_limit),
			max_tabs,
			next_id: 1,
		};
		manager.create_tab("");
		manager
	}

	/// Opens a document next to the active tab and makes it active.
	///
	/// When the ceiling is reached the least recently used tab is evicted
	/// first.
	pub fn create_tab(&mut self, path: impl Into<PathBuf>) -> &mut Document {
		if self.max_tabs > 0 && self.tabs.len() >= self.max_tabs {
			self.evict_oldest();
		}

		let id = DocumentId(self.next_id);
		self.next_id += 1;

		let insert_at = self.active.map(|active| (active + 1).min(self.tabs.len())).unwrap_or(0);
		self.tabs.insert(insert_at, Document::new(id, path));
		self.active = Some(insert_at);
		self.history.touch(id);
		debug!("tab created: id={:?} index={} count={}", id, insert_at, self.tabs.len());

		&mut self.tabs[insert_at]
	}

	pub fn active(&self) -> Option<&Document> {
		self.active.and_then(|idx| self.tabs.get(idx))
	}

	pub fn active_mut(&mut self) -> Option<&mut Document> {
		self.active.and_then(|idx| self.tabs.get_mut(idx))
	}

	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	pub fn set_active(&mut self, index: usize) {
		let Some(doc) = self.tabs.get(index) else {
			return;
		};
		let id = doc.id();
		self.active = Some(index);
		self.history.touch(id);
	}

	pub fn set_active_by_id(&mut self, id: DocumentId) {
		if let Some(index) = self.position_of(id) {
			self.set_active(index);
		}
	}

	/// Cycles to the tab right of the active one, wrapping at the end.
	pub fn next_tab(&mut self) {
		let (Some(active), len) = (self.active, self.tabs.len()) else {
			return;
		};
		if len > 1 {
			self.set_active((active + 1) % len);
		}
	}

	pub fn prev_tab(&mut self) {
		let (Some(active), len) = (self.active, self.tabs.len()) else {
			return;
		};
		if len > 1 {
			self.set_active((active + len - 1) % len);
		}
	}

	/// Closes the tab at `index`. Closing the last tab leaves a fresh
	/// untitled document in its place.
	pub fn close_tab(&mut self, index: usize) {
		if self.remove_tab(index).is_some() && self.tabs.is_empty() {
			self.create_tab("");
		}
	}

	pub fn close_tab_by_id(&mut self, id: DocumentId) {
		if let Some(index) = self.position_of(id) {
			self.close_tab(index);
		}
	}

	pub fn close_active(&mut self) {
		if let Some(active) = self.active {
			self.close_tab(active);
		}
	}

	/// Moves the tab at `from` so that it lands exactly at `to`; no shift is
	/// applied when moving right, so `move_tab(a, b)` is undone by
	/// `move_tab(b, a)`. The active index keeps following the same document.
	pub fn move_tab(&mut self, from: usize, to: usize) {
		let len = self.tabs.len();
		if from >= len || to >= len || from == to {
			return;
		}

		let doc = self.tabs.remove(from);
		self.tabs.insert(to, doc);

		if let Some(active) = self.active {
			self.active = Some(if active == from {
				to
			} else if from < active && active <= to {
				active - 1
			} else if to <= active && active < from {
				active + 1
			} else {
				active
			});
		}
		debug!("tab moved: from={} to={}", from, to);
	}

	pub fn has_unsaved_changes(&self) -> bool {
		self.tabs.iter().any(Document::is_modified)
	}

	pub fn tabs(&self) -> &[Document] {
		&self.tabs
	}

	pub fn len(&self) -> usize {
		self.tabs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tabs.is_empty()
	}

	pub fn get(&self, id: DocumentId) -> Option<&Document> {
		self.tabs.iter().find(|doc| doc.id() == id)
	}

	pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
		self.tabs.iter_mut().find(|doc| doc.id() == id)
	}

	pub fn position_of(&self, id: DocumentId) -> Option<usize> {
		self.tabs.iter().position(|doc| doc.id() == id)
	}

	pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
		if path.as_os_str().is_empty() {
			return None;
		}
		self.tabs.iter().find(|doc| doc.path() == path).map(Document::id)
	}

	pub fn history(&self) -> &AccessHistory {
		&self.history
	}

	pub fn max_tabs(&self) -> usize {
		self.max_tabs
	}

	pub fn set_max_tabs(&mut self, max_tabs: usize) {
		self.max_tabs = max_tabs;
	}

	/// Removes a tab without refilling an emptied collection. Returns the
	/// removed document.
	fn remove_tab(&mut self, index: usize) -> Option<Document> {
		if index >= self.tabs.len() {
			return None;
		}

		let closing_active = self.active == Some(index);
		let removed = self.tabs.remove(index);
		self.history.remove(removed.id());
		debug!("tab closed: id={:?} index={} remaining={}", removed.id(), index, self.tabs.len());

		if self.tabs.is_empty() {
			self.active = None;
			return Some(removed);
		}

		match self.active {
			Some(_) if closing_active => self.activate_most_recent(index),
			Some(active) if active > index => self.active = Some(active - 1),
			_ => {}
		}

		Some(removed)
	}

	fn activate_most_recent(&mut self, closed_index: usize) {
		let recent = self.history.iter().find_map(|id| self.position_of(id));
		self.active = Some(recent.unwrap_or_else(|| closed_index.min(self.tabs.len() - 1)));
	}

	fn evict_oldest(&mut self) {
		let oldest = self.history.iter().rev().find_map(|id| self.position_of(id)).unwrap_or(0);
		if let Some(evicted) = self.remove_tab(oldest) {
			debug!("tab evicted: id={:?} path={}", evicted.id(), evicted.path().display());
		}
	}
}

impl Default for TabManager {
	fn default() -> Self {
		Self::new()
	}
}

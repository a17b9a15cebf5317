use std::path::{Path, PathBuf};

use super::{Document, DocumentId};

impl Document {
	pub const UNTITLED: &'static str = "Untitled";

	pub fn new(id: DocumentId, path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let display_name = Self::derive_display_name(&path);
		Self { id, display_name, path, content: String::new(), modified: false }
	}

	pub fn id(&self) -> DocumentId {
		self.id
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// Display name with a trailing `*` while there are unsaved changes.
	pub fn tab_title(&self) -> String {
		if self.modified { format!("{}*", self.display_name) } else { self.display_name.clone() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn is_untitled(&self) -> bool {
		self.path.as_os_str().is_empty()
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn is_modified(&self) -> bool {
		self.modified
	}

	/// Stores new editor text. Only a change of the stored value marks the
	/// document as modified.
	pub fn update_content(&mut self, content: impl Into<String>) {
		let content = content.into();
		if self.content != content {
			self.content = content;
			self.modified = true;
		}
	}

	/// Replaces the text with what was just read from disk.
	pub fn load_content(&mut self, content: String) {
		self.content = content;
		self.modified = false;
	}

	pub fn mark_saved(&mut self) {
		self.modified = false;
	}

	pub fn set_path(&mut self, path: impl Into<PathBuf>) {
		self.path = path.into();
		self.display_name = Self::derive_display_name(&self.path);
	}

	fn derive_display_name(path: &Path) -> String {
		if path.as_os_str().is_empty() {
			return Self::UNTITLED.to_string();
		}
		super::display_name_from_path(path).unwrap_or_else(|| Self::UNTITLED.to_string())
	}
}

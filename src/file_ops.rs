use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::{debug, info};

use crate::dialog::DialogProvider;
use crate::file_access::{FileAccess, FileAccessError};
use crate::state::{DocumentId, TabManager};


#[derive(Debug, Error)]
pub enum FileOpError {
	#[error(transparent)]
	Access(#[from] FileAccessError),
	#[error("decode utf-8 failed: {path}")]
	Decode {
		path:   PathBuf,
		#[source]
		source: FromUtf8Error,
	},
	#[error("no active document")]
	NoActiveDocument,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
	Created(DocumentId),
	Opened(DocumentId),
	/// The path was already open; its tab was activated instead.
	Focused(DocumentId),
	Saved(PathBuf),
	Cancelled,
}

/// New/open/save glue between the tab manager, storage and dialogs.
///
/// A failed read or write leaves every document untouched.
pub struct FileOperations<F, D> {
	files:   F,
	dialogs: D,
}

impl<F, D> FileOperations<F, D>
where
	F: FileAccess,
	D: DialogProvider,
{
	pub fn new(files: F, dialogs: D) -> Self {
		Self { files, dialogs }
	}

	pub fn files(&self) -> &F {
		&self.files
	}

	pub fn new_file(&self, tabs: &mut TabManager) -> FileOutcome {
		let id = tabs.create_tab("").id();
		debug!("new file: id={:?}", id);
		FileOutcome::Created(id)
	}

	pub fn open_file(&mut self, tabs: &mut TabManager) -> Result<FileOutcome, FileOpError> {
		let Some(path) = self.dialogs.choose_open_path() else {
			debug!("open file cancelled");
			return Ok(FileOutcome::Cancelled);
		};
		self.open_path(tabs, path)
	}

	/// Focuses the tab already showing `path`, otherwise reads it into a new
	/// tab. Content must be valid UTF-8: anything else fails with
	/// [`FileOpError::Decode`] and no tab is created.
	pub fn open_path(&self, tabs: &mut TabManager, path: PathBuf) -> Result<FileOutcome, FileOpError> {
		if let Some(id) = tabs.find_by_path(&path) {
			tabs.set_active_by_id(id);
			debug!("open_path: already open, focusing id={:?}", id);
			return Ok(FileOutcome::Focused(id));
		}

		let text = self.read_text(&path)?;
		info!("file opened: {}", path.display());
		let doc = tabs.create_tab(path);
		doc.load_content(text);
		Ok(FileOutcome::Opened(doc.id()))
	}

	pub fn save_active(&mut self, tabs: &mut TabManager) -> Result<FileOutcome, FileOpError> {
		let doc = tabs.active().ok_or(FileOpError::NoActiveDocument)?;
		if doc.is_untitled() {
			return self.save_active_as(tabs);
		}

		self.files.write(doc.path(), doc.content().as_bytes())?;
		let path = doc.path().to_path_buf();
		if let Some(doc) = tabs.active_mut() {
			doc.mark_saved();
		}
		info!("file saved: {}", path.display());
		Ok(FileOutcome::Saved(path))
	}

	pub fn save_active_as(&mut self, tabs: &mut TabManager) -> Result<FileOutcome, FileOpError> {
		let doc = tabs.active().ok_or(FileOpError::NoActiveDocument)?;
		let suggested = (!doc.is_untitled()).then(|| doc.path().to_path_buf());
		let Some(path) = self.dialogs.choose_save_path(suggested.as_deref()) else {
			debug!("save file cancelled");
			return Ok(FileOutcome::Cancelled);
		};

		self.files.write(&path, doc.content().as_bytes())?;
		if let Some(doc) = tabs.active_mut() {
			doc.set_path(path.clone());
			doc.mark_saved();
		}
		info!("file saved as: {}", path.display());
		Ok(FileOutcome::Saved(path))
	}

	fn read_text(&self, path: &Path) -> Result<String, FileOpError> {
		let bytes = self.files.read(path)?;
		String::from_utf8(bytes).map_err(|source| FileOpError::Decode { path: path.to_path_buf(), source })
	}
}

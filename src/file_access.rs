use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileAccessError {
	#[error("read file failed: {path}")]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("write file failed: {path}")]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Byte-level storage the file operations read from and write to.
pub trait FileAccess {
	fn read(&self, path: &Path) -> Result<Vec<u8>, FileAccessError>;
	fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileAccessError>;
}

/// Blocking access to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileAccess;

impl FileAccess for OsFileAccess {
	fn read(&self, path: &Path) -> Result<Vec<u8>, FileAccessError> {
		std::fs::read(path).map_err(|source| FileAccessError::Read { path: path.to_path_buf(), source })
	}

	fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileAccessError> {
		std::fs::write(path, bytes).map_err(|source| FileAccessError::Write { path: path.to_path_buf(), source })
	}
}

/// In-memory files keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFileAccess {
	files:           RefCell<HashMap<PathBuf, Vec<u8>>>,
	read_only_paths: RefCell<Vec<PathBuf>>,
}

impl MemoryFileAccess {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
		self.files.borrow_mut().insert(path.into(), contents.into());
		self
	}

	/// Makes every write to `path` fail with `PermissionDenied`.
	pub fn deny_writes(self, path: impl Into<PathBuf>) -> Self {
		self.read_only_paths.borrow_mut().push(path.into());
		self
	}

	pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
		self.files.borrow().get(path).cloned()
	}
}

impl FileAccess for MemoryFileAccess {
	fn read(&self, path: &Path) -> Result<Vec<u8>, FileAccessError> {
		self.files.borrow().get(path).cloned().ok_or_else(|| FileAccessError::Read {
			path:   path.to_path_buf(),
			source: io::Error::from(io::ErrorKind::NotFound),
		})
	}

	fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileAccessError> {
		if self.read_only_paths.borrow().iter().any(|denied| denied == path) {
			return Err(FileAccessError::Write {
				path:   path.to_path_buf(),
				source: io::Error::from(io::ErrorKind::PermissionDenied),
			});
		}
		self.files.borrow_mut().insert(path.to_path_buf(), bytes.to_vec());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::{FileAccess, FileAccessError, MemoryFileAccess, OsFileAccess};

	#[test]
	fn os_file_access_should_write_then_read_back() {
		let dir = tempfile::tempdir().expect("tempdir should be created");
		let path = dir.path().join("notes.txt");

		OsFileAccess.write(&path, b"hello").expect("write should succeed");
		assert_eq!(OsFileAccess.read(&path).expect("read should succeed"), b"hello");
	}

	#[test]
	fn os_file_access_should_report_missing_file() {
		let dir = tempfile::tempdir().expect("tempdir should be created");
		let path = dir.path().join("missing.txt");

		let err = OsFileAccess.read(&path).expect_err("missing file should fail");
		assert!(matches!(err, FileAccessError::Read { .. }));
	}

	#[test]
	fn memory_file_access_should_honor_denied_writes() {
		let files = MemoryFileAccess::new().with_file("a.txt", "seed").deny_writes("locked.txt");

		assert_eq!(files.read(Path::new("a.txt")).expect("seeded file exists"), b"seed");
		assert!(matches!(
			files.write(Path::new("locked.txt"), b"x"),
			Err(FileAccessError::Write { .. })
		));
		assert!(files.contents(Path::new("locked.txt")).is_none());
	}
}

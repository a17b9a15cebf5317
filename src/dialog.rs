use std::path::{Path, PathBuf};

/// Source of user-chosen paths. `None` means the user dismissed the dialog.
pub trait DialogProvider {
	fn choose_open_path(&mut self) -> Option<PathBuf>;
	fn choose_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;
}

/// Native file dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
	fn file_dialog() -> rfd::FileDialog {
		rfd::FileDialog::new().add_filter("Text files", &["txt"]).add_filter("All files", &["*"])
	}
}

impl DialogProvider for NativeDialogs {
	fn choose_open_path(&mut self) -> Option<PathBuf> {
		Self::file_dialog().pick_file()
	}

	fn choose_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
		let mut dialog = Self::file_dialog().set_title("Save File");
		if let Some(suggested) = suggested {
			if let Some(dir) = suggested.parent().filter(|dir| !dir.as_os_str().is_empty()) {
				dialog = dialog.set_directory(dir);
			}
			if let Some(name) = suggested.file_name() {
				dialog = dialog.set_file_name(name.to_string_lossy());
			}
		}
		dialog.save_file()
	}
}

use std::ops::ControlFlow;

use tracing::{debug, error, warn};

use crate::action::{AppAction, EditorAction, FileAction, SystemAction, TabAction};
use crate::dialog::DialogProvider;
use crate::file_access::FileAccess;
use crate::file_ops::{FileOpError, FileOperations, FileOutcome};
use crate::state::AppState;

#[cfg(test)]
mod tests;

pub struct ActionHandler;

impl ActionHandler {
	pub fn new() -> Self {
		Self
	}

	/// Applies one action synchronously. `Break` asks the host to quit.
	pub fn apply<F, D>(
		&mut self,
		state: &mut AppState,
		file_ops: &mut FileOperations<F, D>,
		action: AppAction,
	) -> ControlFlow<()>
	where
		F: FileAccess,
		D: DialogProvider,
	{
		match action {
			AppAction::Tab(tab_action) => self.apply_tab_action(state, tab_action),
			AppAction::File(file_action) => self.apply_file_action(state, file_ops, file_action),
			AppAction::Editor(EditorAction::ContentChanged { id, text }) => match state.tabs.get_mut(id) {
				Some(doc) => doc.update_content(text),
				None => warn!("content change for closed document: id={:?}", id),
			},
			AppAction::System(SystemAction::Quit) => {
				if state.tabs.has_unsaved_changes() {
					warn!("quitting with unsaved changes");
				}
				return ControlFlow::Break(());
			}
		}
		ControlFlow::Continue(())
	}

	/// Applies a frame's batch in delivery order, stopping at the first quit.
	pub fn apply_all<F, D>(
		&mut self,
		state: &mut AppState,
		file_ops: &mut FileOperations<F, D>,
		actions: impl IntoIterator<Item = AppAction>,
	) -> ControlFlow<()>
	where
		F: FileAccess,
		D: DialogProvider,
	{
		for action in actions {
			self.apply(state, file_ops, action)?;
		}
		ControlFlow::Continue(())
	}

	fn apply_tab_action(&mut self, state: &mut AppState, action: TabAction) {
		let tabs = &mut state.tabs;
		match action {
			TabAction::New => {
				tabs.create_tab("");
				state.status_bar.message = "new tab".to_string();
			}
			TabAction::CloseCurrent => {
				if tabs.len() <= 1 {
					return;
				}
				tabs.close_active();
				state.status_bar.message = "tab closed".to_string();
			}
			TabAction::Close(id) => {
				if tabs.position_of(id).is_some() {
					tabs.close_tab_by_id(id);
					state.status_bar.message = "tab closed".to_string();
				}
			}
			TabAction::Select(id) => tabs.set_active_by_id(id),
			TabAction::SelectIndex(index) => tabs.set_active(index),
			TabAction::SwitchPrev => tabs.prev_tab(),
			TabAction::SwitchNext => tabs.next_tab(),
			TabAction::Move { from, to } => tabs.move_tab(from, to),
		}
	}

	fn apply_file_action<F, D>(&mut self, state: &mut AppState, file_ops: &mut FileOperations<F, D>, action: FileAction)
	where
		F: FileAccess,
		D: DialogProvider,
	{
		let result = match action {
			FileAction::New => Ok(file_ops.new_file(&mut state.tabs)),
			FileAction::Open => file_ops.open_file(&mut state.tabs),
			FileAction::OpenPath(path) => file_ops.open_path(&mut state.tabs, path),
			FileAction::Save => file_ops.save_active(&mut state.tabs),
			FileAction::SaveAs => file_ops.save_active_as(&mut state.tabs),
		};

		match result {
			Ok(outcome) => Self::report_outcome(state, outcome),
			Err(err) => Self::report_failure(err),
		}
	}

	fn report_outcome(state: &mut AppState, outcome: FileOutcome) {
		let message = match outcome {
			FileOutcome::Created(_) => "new file".to_string(),
			FileOutcome::Opened(id) | FileOutcome::Focused(id) => match state.tabs.get(id) {
				Some(doc) => format!("opened {}", doc.display_name()),
				None => return,
			},
			FileOutcome::Saved(path) => format!("saved {}", path.display()),
			FileOutcome::Cancelled => return,
		};
		state.status_bar.message = message;
	}

	fn report_failure(err: FileOpError) {
		match err {
			FileOpError::NoActiveDocument => debug!("file operation skipped: {}", err),
			err => error!("file operation failed: {:#}", anyhow::Error::from(err)),
		}
	}
}

impl Default for ActionHandler {
	fn default() -> Self {
		Self::new()
	}
}

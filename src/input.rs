use eframe::egui::{Context, Event, Key, Modifiers};

use crate::action::{AppAction, FileAction, SystemAction, TabAction};


/// Keyboard shortcut table. Everything goes through Ctrl (Cmd on macOS).
pub struct InputHandler;

impl InputHandler {
	pub fn new() -> Self {
		Self
	}

	/// Removes this frame's shortcut events from `ctx` and returns their
	/// actions in delivery order. Must run before any widget reads input, or
	/// a focused text editor would see Ctrl+Tab as a tab insertion.
	pub fn take_actions(&self, ctx: &Context) -> Vec<AppAction> {
		ctx.input_mut(|input| {
			let mut actions = Vec::new();
			input.events.retain(|event| match self.action(event) {
				Some(action) => {
					actions.push(action);
					false
				}
				None => true,
			});
			actions
		})
	}

	pub fn action(&self, event: &Event) -> Option<AppAction> {
		let Event::Key { key, pressed: true, repeat: false, modifiers, .. } = event else {
			return None;
		};
		if !(modifiers.ctrl || modifiers.command) {
			return None;
		}
		Self::shortcut(*key, *modifiers)
	}

	fn shortcut(key: Key, modifiers: Modifiers) -> Option<AppAction> {
		let action = match (key, modifiers.shift) {
			(Key::N, false) => AppAction::File(FileAction::New),
			(Key::T, false) => AppAction::Tab(TabAction::New),
			(Key::O, false) => AppAction::File(FileAction::Open),
			(Key::S, false) => AppAction::File(FileAction::Save),
			(Key::S, true) => AppAction::File(FileAction::SaveAs),
			(Key::W, false) => AppAction::Tab(TabAction::CloseCurrent),
			(Key::Q, false) => AppAction::System(SystemAction::Quit),
			(Key::Tab, false) | (Key::PageDown, _) => AppAction::Tab(TabAction::SwitchNext),
			(Key::Tab, true) | (Key::PageUp, _) => AppAction::Tab(TabAction::SwitchPrev),
			(key, false) => AppAction::Tab(TabAction::SelectIndex(Self::digit(key)?.checked_sub(1)?)),
			_ => return None,
		};
		Some(action)
	}

	fn digit(key: Key) -> Option<usize> {
		let digit = match key {
			Key::Num1 => 1,
			Key::Num2 => 2,
			Key::Num3 => 3,
			Key::Num4 => 4,
			Key::Num5 => 5,
			Key::Num6 => 6,
			Key::Num7 => 7,
			Key::Num8 => 8,
			Key::Num9 => 9,
			_ => return None,
		};
		Some(digit)
	}
}

impl Default for InputHandler {
	fn default() -> Self {
		Self::new()
	}
}

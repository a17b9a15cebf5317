use eframe::egui::{Rect, pos2, vec2};

use super::{TabBar, TabHandle};
use crate::action::{AppAction, TabAction};
use crate::state::{DocumentId, TabManager};

fn bar_for(tabs: &TabManager) -> TabBar {
	let mut bar = TabBar::default();
	for (index, doc) in tabs.tabs().iter().enumerate() {
		let left = index as f32 * 100.0;
		bar.handles.insert(doc.id(), TabHandle { rect: Rect::from_min_size(pos2(left, 0.0), vec2(90.0, 20.0)) });
	}
	bar
}

fn three_tabs() -> TabManager {
	let mut tabs = TabManager::new();
	tabs.create_tab("a.txt");
	tabs.create_tab("b.txt");
	tabs
}

#[test]
fn drop_on_other_tab_should_move_to_its_position() {
	let tabs = three_tabs();
	let bar = bar_for(&tabs);

	let action = bar.drop_action(&tabs, DocumentId(1), pos2(250.0, 10.0));
	assert_eq!(action, Some(AppAction::Tab(TabAction::Move { from: 0, to: 2 })));
}

#[test]
fn drop_on_itself_or_gap_should_do_nothing() {
	let tabs = three_tabs();
	let bar = bar_for(&tabs);

	assert_eq!(bar.drop_action(&tabs, DocumentId(2), pos2(150.0, 10.0)), None);
	assert_eq!(bar.drop_action(&tabs, DocumentId(2), pos2(95.0, 10.0)), None);
	assert_eq!(bar.drop_action(&tabs, DocumentId(2), pos2(150.0, 40.0)), None);
}

#[test]
fn drop_of_closed_tab_should_do_nothing() {
	let tabs = three_tabs();
	let bar = bar_for(&tabs);

	assert_eq!(bar.drop_action(&tabs, DocumentId(42), pos2(10.0, 10.0)), None);
}

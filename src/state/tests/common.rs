use crate::state::{DocumentId, TabManager};

/// Manager with the initial blank tab plus one tab per path, in order.
pub(super) fn manager_with(paths: &[&str]) -> TabManager {
	let mut manager = TabManager::new();
	for path in paths {
		manager.create_tab(*path);
	}
	manager
}

pub(super) fn ids(manager: &TabManager) -> Vec<DocumentId> {
	manager.tabs().iter().map(|doc| doc.id()).collect()
}

pub(super) fn active_id(manager: &TabManager) -> DocumentId {
	manager.active().expect("active document should exist").id()
}

use std::collections::VecDeque;

use super::DocumentId;

/// Most-recently-used document ids, most recent at the front.
///
/// An id appears at most once. Once the limit is exceeded the least recent
/// entries fall off the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessHistory {
	entries: VecDeque<DocumentId>,
	limit:   usize,
}

impl AccessHistory {
	pub const DEFAULT_LIMIT: usize = 10;

	pub fn new(limit: usize) -> Self {
		let limit = limit.max(1);
		Self { entries: VecDeque::with_capacity(limit + 1), limit }
	}

	pub fn touch(&mut self, id: DocumentId) {
		self.remove(id);
		self.entries.push_front(id);
		self.entries.truncate(self.limit);
	}

	pub fn remove(&mut self, id: DocumentId) {
		self.entries.retain(|entry| *entry != id);
	}

	/// Front-to-back: most recent first.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = DocumentId> + '_ {
		self.entries.iter().copied()
	}

	pub fn most_recent(&self) -> Option<DocumentId> {
		self.entries.front().copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn limit(&self) -> usize {
		self.limit
	}
}

impl Default for AccessHistory {
	fn default() -> Self {
		Self::new(Self::DEFAULT_LIMIT)
	}
}

//! Ordered status bar entry registry.
//!
//! One shared collection per side, sorted by priority (higher first)
//! with insertion order breaking ties. Producers only ever mutate the
//! collection through [`StatusbarRegistry::add_entry`] and the returned
//! [`EntryHandle`]; frontends subscribe to the change feed and re-read
//! the ordered sequence for the side that changed.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::entry::{Alignment, DEFAULT_PRIORITY, StatusbarEntry};

/// Capacity of the change feed. A lagged subscriber misses intermediate
/// notifications, not entries; it re-reads the full sequence on the next
/// receive.
const CHANGE_FEED_CAPACITY: usize = 64;

/// Notification that one side's ordered sequence changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusbarChange {
	/// Side whose sequence must be re-read.
	pub alignment: Alignment,
}

/// Idempotent release of a previously acquired resource.
///
/// Calling [`dispose`](Dispose::dispose) more than once, or after the
/// resource was already released by other means, is a silent no-op.
pub trait Dispose {
	/// Releases the resource.
	fn dispose(&mut self);
}

pub(crate) type EntryId = u64;

/// Stored slot for one contribution. The id is allocated monotonically
/// and doubles as the insertion sequence number that breaks priority
/// ties.
#[derive(Debug)]
struct RegisteredEntry {
	id: EntryId,
	priority: i32,
	entry: StatusbarEntry,
}

#[derive(Debug, Default)]
struct BarState {
	left: Vec<RegisteredEntry>,
	right: Vec<RegisteredEntry>,
	next_id: EntryId,
}

impl BarState {
	fn side(&self, alignment: Alignment) -> &[RegisteredEntry] {
		match alignment {
			Alignment::Left => &self.left,
			Alignment::Right => &self.right,
		}
	}

	fn side_mut(&mut self, alignment: Alignment) -> &mut Vec<RegisteredEntry> {
		match alignment {
			Alignment::Left => &mut self.left,
			Alignment::Right => &mut self.right,
		}
	}
}

#[derive(Debug)]
struct RegistryInner {
	state: Mutex<BarState>,
	changes: broadcast::Sender<StatusbarChange>,
}

/// Shared, ordered status bar entry collection.
///
/// Cheap to clone; all clones observe the same state. Created once by
/// the host at startup and injected into producers. Nothing here fails:
/// every input is accepted and normalized, a misbehaving contributor
/// must never be able to take the shared bar down.
#[derive(Debug, Clone)]
pub struct StatusbarRegistry {
	inner: Arc<RegistryInner>,
}

impl Default for StatusbarRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl StatusbarRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
		Self {
			inner: Arc::new(RegistryInner {
				state: Mutex::new(BarState::default()),
				changes,
			}),
		}
	}

	/// Adds one entry to the given side.
	///
	/// Omitted `priority` falls back to [`DEFAULT_PRIORITY`]. The entry
	/// stays until the returned handle is disposed; dropping the handle
	/// without disposing leaves the entry in place.
	pub fn add_entry(
		&self,
		entry: impl Into<StatusbarEntry>,
		alignment: Alignment,
		priority: Option<i32>,
	) -> EntryHandle {
		let entry = entry.into();
		let priority = priority.unwrap_or(DEFAULT_PRIORITY);

		let id = {
			let mut state = self.inner.state.lock();
			let id = state.next_id;
			state.next_id += 1;
			let side = state.side_mut(alignment);
			// First position whose slot sorts after the new one. Equal
			// priorities keep insertion order because the fresh id is the
			// largest allocated so far.
			let at = side.partition_point(|slot| slot.priority >= priority);
			side.insert(at, RegisteredEntry { id, priority, entry });
			id
		};

		tracing::debug!(id, %alignment, priority, "added statusbar entry");
		self.notify(alignment);

		EntryHandle {
			registry: self.clone(),
			alignment,
			id,
			disposed: false,
		}
	}

	/// Ordered snapshot of one side, outermost entry first.
	pub fn entries(&self, alignment: Alignment) -> Vec<StatusbarEntry> {
		let state = self.inner.state.lock();
		state
			.side(alignment)
			.iter()
			.map(|slot| slot.entry.clone())
			.collect()
	}

	/// Number of entries on one side.
	pub fn len(&self, alignment: Alignment) -> usize {
		self.inner.state.lock().side(alignment).len()
	}

	/// Whether one side has no entries.
	pub fn is_empty(&self, alignment: Alignment) -> bool {
		self.inner.state.lock().side(alignment).is_empty()
	}

	/// Subscribes to the change feed.
	///
	/// One [`StatusbarChange`] is emitted per mutation, in mutation
	/// order. Subscribers that fall behind by more than the feed
	/// capacity observe a lag error and should re-read both sides.
	pub fn subscribe(&self) -> broadcast::Receiver<StatusbarChange> {
		self.inner.changes.subscribe()
	}

	fn notify(&self, alignment: Alignment) {
		// Send only errs when nobody subscribes, which is fine.
		let _ = self.inner.changes.send(StatusbarChange { alignment });
	}

	/// Removes the slot with `id`, if still present.
	pub(crate) fn remove(&self, alignment: Alignment, id: EntryId) -> bool {
		let removed = {
			let mut state = self.inner.state.lock();
			let side = state.side_mut(alignment);
			match side.iter().position(|slot| slot.id == id) {
				Some(at) => {
					side.remove(at);
					true
				}
				None => false,
			}
		};

		if removed {
			tracing::debug!(id, %alignment, "removed statusbar entry");
			self.notify(alignment);
		}
		removed
	}

	/// Replaces the payload of the slot with `id` in place, if still
	/// present. Priority and ordering position are untouched.
	pub(crate) fn replace(&self, alignment: Alignment, id: EntryId, entry: StatusbarEntry) -> bool {
		let replaced = {
			let mut state = self.inner.state.lock();
			let side = state.side_mut(alignment);
			match side.iter_mut().find(|slot| slot.id == id) {
				Some(slot) => {
					slot.entry = entry;
					true
				}
				None => false,
			}
		};

		if replaced {
			tracing::debug!(id, %alignment, "replaced statusbar entry");
			self.notify(alignment);
		}
		replaced
	}
}

/// Capability to update or remove one contributed entry.
///
/// Exactly one handle exists per live entry. Disposal is idempotent and
/// stays a no-op after the entry was removed by other means. Dropping
/// the handle does not remove the entry.
#[derive(Debug)]
pub struct EntryHandle {
	registry: StatusbarRegistry,
	alignment: Alignment,
	id: EntryId,
	disposed: bool,
}

impl EntryHandle {
	/// Replaces the entry payload, keeping its side, priority, and
	/// ordering position. No-op once the entry is gone.
	pub fn update(&self, entry: impl Into<StatusbarEntry>) {
		if self.disposed {
			return;
		}
		self.registry.replace(self.alignment, self.id, entry.into());
	}
}

impl Dispose for EntryHandle {
	fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		self.registry.remove(self.alignment, self.id);
	}
}

//! Waiting room for dialogs that do not currently hold the slot.
//!
//! Dialogs are bucketed by kind, then priority. Each bucket is FIFO except
//! for [`Placement::Next`] insertions, which jump to the head. Lookup of the
//! next candidate is a fixed scan: priority from highest to lowest, then kind
//! from highest ordinal to lowest, taking the head of the first non-empty
//! bucket whose kind is not suspended.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashMap;

use crate::dialog::{DialogEntry, DialogMeta};
use crate::types::{DialogId, DialogKind, Placement, Priority};

type Bucket<T> = VecDeque<DialogEntry<T>>;

/// Pending dialogs keyed by kind, then priority.
pub struct PendingStore<T> {
	buckets: BTreeMap<DialogKind, BTreeMap<Priority, Bucket<T>>>,
	/// Bucket location of every stored dialog.
	index: FxHashMap<DialogId, DialogMeta>,
}

impl<T> Default for PendingStore<T> {
	fn default() -> Self {
		Self {
			buckets: BTreeMap::new(),
			index: FxHashMap::default(),
		}
	}
}

impl<T> PendingStore<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `entry` in its `(kind, priority)` bucket.
	///
	/// An id already present is left where it is; each dialog lives in at
	/// most one bucket.
	pub fn put(&mut self, entry: DialogEntry<T>, placement: Placement) {
		let meta = entry.meta();
		debug_assert!(!self.index.contains_key(&meta.id), "{} is already pending", meta.id);
		if self.index.contains_key(&meta.id) {
			tracing::error!(id = %meta.id, "pending.put: duplicate id ignored");
			return;
		}
		let bucket = self.buckets.entry(meta.kind).or_default().entry(meta.priority).or_default();
		match placement {
			Placement::Back => bucket.push_back(entry),
			Placement::Next => bucket.push_front(entry),
		}
		self.index.insert(meta.id, meta);
	}

	/// Removes one dialog by identity. Unknown ids return `None`.
	pub fn remove(&mut self, id: DialogId) -> Option<DialogEntry<T>> {
		let meta = self.index.remove(&id)?;
		let bucket = self.buckets.get_mut(&meta.kind)?.get_mut(&meta.priority)?;
		let pos = bucket.iter().position(|e| e.id() == id)?;
		bucket.remove(pos)
	}

	/// Drains every dialog of `kind`, highest priority first and FIFO within
	/// a bucket, handing each to `on_each`.
	///
	/// Returns true when at least one dialog was removed.
	pub fn remove_all_of_kind(&mut self, kind: DialogKind, mut on_each: impl FnMut(DialogEntry<T>)) -> bool {
		let Some(by_priority) = self.buckets.remove(&kind) else {
			return false;
		};
		let mut removed = false;
		for (_, bucket) in by_priority.into_iter().rev() {
			for entry in bucket {
				self.index.remove(&entry.id());
				removed = true;
				on_each(entry);
			}
		}
		removed
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn contains(&self, id: DialogId) -> bool {
		self.index.contains_key(&id)
	}

	/// Metadata of the dialog [`Self::next_eligible`] would return.
	pub fn peek_eligible(&self, suspended: &[DialogKind]) -> Option<DialogMeta> {
		let (kind, priority) = self.eligible_bucket(suspended)?;
		self.buckets.get(&kind)?.get(&priority)?.front().map(DialogEntry::meta)
	}

	/// Removes and returns the best candidate among kinds not in `suspended`.
	pub fn next_eligible(&mut self, suspended: &[DialogKind]) -> Option<DialogEntry<T>> {
		let (kind, priority) = self.eligible_bucket(suspended)?;
		let entry = self.buckets.get_mut(&kind)?.get_mut(&priority)?.pop_front()?;
		self.index.remove(&entry.id());
		Some(entry)
	}

	/// Dialogs waiting in one bucket, head first.
	pub fn bucket(&self, kind: DialogKind, priority: Priority) -> impl Iterator<Item = &DialogEntry<T>> + '_ {
		self.buckets.get(&kind).and_then(|by_priority| by_priority.get(&priority)).into_iter().flatten()
	}

	/// Metadata of every dialog of `kind`, highest priority first.
	pub fn metas_of_kind(&self, kind: DialogKind) -> Vec<DialogMeta> {
		Priority::ALL.iter().rev().flat_map(|&p| self.bucket(kind, p).map(DialogEntry::meta)).collect()
	}

	fn eligible_bucket(&self, suspended: &[DialogKind]) -> Option<(DialogKind, Priority)> {
		for &priority in Priority::ALL.iter().rev() {
			for &kind in DialogKind::ALL.iter().rev() {
				if suspended.contains(&kind) {
					continue;
				}
				let occupied = self
					.buckets
					.get(&kind)
					.and_then(|by_priority| by_priority.get(&priority))
					.is_some_and(|bucket| !bucket.is_empty());
				if occupied {
					return Some((kind, priority));
				}
			}
		}
		None
	}
}

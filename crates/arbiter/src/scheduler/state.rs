use std::collections::BTreeMap;

use crate::config::SchedulerConfig;
use crate::dialog::{DialogEntry, DialogMeta};
use crate::observer::{ObserverId, ObserverSet, SchedulerObserver};
use crate::pending::PendingStore;
use crate::presenter::Presenter;
use crate::suspension::SuspensionTracker;
use crate::types::{DialogId, DialogKind, Priority};

/// Scheduler for one exclusive dialog slot.
///
/// Pass one instance by reference to every subsystem that shows dialogs;
/// there is no global instance.
pub struct ModalScheduler<T> {
	pub(super) config: SchedulerConfig,
	/// The dialog holding the slot.
	pub(super) active: Option<DialogEntry<T>>,
	pub(super) pending: PendingStore<T>,
	pub(super) suspension: SuspensionTracker,
	pub(super) presenters: BTreeMap<DialogKind, Box<dyn Presenter<T>>>,
	pub(super) observers: ObserverSet,
	/// Dialog whose handler is running after it left the slot.
	pub(super) dismissing: Option<DialogId>,
	/// Depth of bulk dismissals; refills wait until it returns to zero.
	pub(super) bulk_depth: u32,
	/// Set by `destroy`; later dialogs are dismissed on arrival.
	pub(super) closed: bool,
	pub(super) next_id: u64,
}

impl<T> Default for ModalScheduler<T> {
	fn default() -> Self {
		Self::with_config(SchedulerConfig::default())
	}
}

impl<T> ModalScheduler<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: SchedulerConfig) -> Self {
		Self {
			config,
			active: None,
			pending: PendingStore::new(),
			suspension: SuspensionTracker::new(),
			presenters: BTreeMap::new(),
			observers: ObserverSet::default(),
			dismissing: None,
			bulk_depth: 0,
			closed: false,
			next_id: 0,
		}
	}

	pub fn config(&self) -> &SchedulerConfig {
		&self.config
	}

	/// Registers the presenter that renders dialogs of `kind`.
	///
	/// # Panics
	///
	/// Panics if `kind` already has a presenter.
	pub fn register_presenter(&mut self, kind: DialogKind, presenter: impl Presenter<T> + 'static) {
		assert!(!self.presenters.contains_key(&kind), "a presenter for {kind} dialogs is already registered");
		tracing::debug!(kind = kind.as_str(), "modal.register_presenter");
		self.presenters.insert(kind, Box::new(presenter));
	}

	pub fn has_presenter(&self, kind: DialogKind) -> bool {
		self.presenters.contains_key(&kind)
	}

	pub fn add_observer(&mut self, observer: impl SchedulerObserver + 'static) -> ObserverId {
		self.observers.add(Box::new(observer))
	}

	/// Returns false if `id` was not registered.
	pub fn remove_observer(&mut self, id: ObserverId) -> bool {
		self.observers.remove(id)
	}

	pub fn observer_count(&self) -> usize {
		self.observers.len()
	}

	/// Returns true when a dialog holds the slot.
	pub fn is_active(&self) -> bool {
		self.active.is_some()
	}

	pub fn active(&self) -> Option<DialogMeta> {
		self.active.as_ref().map(DialogEntry::meta)
	}

	pub fn active_kind(&self) -> Option<DialogKind> {
		self.active.as_ref().map(DialogEntry::kind)
	}

	pub fn active_payload(&self) -> Option<&T> {
		self.active.as_ref().map(DialogEntry::payload)
	}

	pub fn is_suspended(&self, kind: DialogKind) -> bool {
		self.suspension.is_suspended(kind)
	}

	/// Number of outstanding suspension tokens for `kind`.
	pub fn suspension_count(&self, kind: DialogKind) -> usize {
		self.suspension.count(kind)
	}

	pub fn pending_len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_pending(&self, id: DialogId) -> bool {
		self.pending.contains(id)
	}

	/// Dialogs waiting in one bucket, head first.
	pub fn pending_in(&self, kind: DialogKind, priority: Priority) -> Vec<DialogMeta> {
		self.pending.bucket(kind, priority).map(DialogEntry::meta).collect()
	}

	/// Dialogs of `kind` waiting across all buckets, highest priority first.
	pub fn pending_of_kind(&self, kind: DialogKind) -> Vec<DialogMeta> {
		self.pending.metas_of_kind(kind)
	}

	/// Returns true when no dialog is active or pending.
	pub fn is_empty(&self) -> bool {
		self.active.is_none() && self.pending.is_empty()
	}

	/// Returns true once [`Self::destroy`] has run.
	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub(super) fn mint_id(&mut self) -> DialogId {
		self.next_id += 1;
		DialogId(self.next_id)
	}
}

impl<T> Drop for ModalScheduler<T> {
	fn drop(&mut self) {
		if !self.closed && !std::thread::panicking() {
			self.destroy();
		}
	}
}

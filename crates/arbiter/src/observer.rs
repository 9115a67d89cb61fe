//! Lifecycle notifications for interested subsystems.

use crate::dialog::DialogMeta;
use crate::types::DismissalCause;

/// Listener for scheduler lifecycle events. Every method defaults to a no-op.
pub trait SchedulerObserver {
	/// A dialog entered the scheduler through `show`.
	fn on_dialog_added(&mut self, _dialog: &DialogMeta) {}
	/// A presenter was handed the dialog.
	fn on_dialog_created(&mut self, _dialog: &DialogMeta) {}
	/// The dialog was queued instead of shown, or evicted back to the queue.
	fn on_dialog_suppressed(&mut self, _dialog: &DialogMeta) {}
	/// The dialog left the scheduler.
	fn on_dialog_dismissed(&mut self, _dialog: &DialogMeta, _cause: DismissalCause) {}
	/// A dismissal left no dialog active or pending.
	fn on_last_dialog_dismissed(&mut self) {}
}

/// Handle returned by [`crate::ModalScheduler::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered set of observers; notification follows registration order.
#[derive(Default)]
pub(crate) struct ObserverSet {
	observers: Vec<(ObserverId, Box<dyn SchedulerObserver>)>,
	next_id: u64,
}

impl ObserverSet {
	pub fn add(&mut self, observer: Box<dyn SchedulerObserver>) -> ObserverId {
		self.next_id += 1;
		let id = ObserverId(self.next_id);
		self.observers.push((id, observer));
		id
	}

	pub fn remove(&mut self, id: ObserverId) -> bool {
		let before = self.observers.len();
		self.observers.retain(|(oid, _)| *oid != id);
		self.observers.len() != before
	}

	pub fn clear(&mut self) {
		self.observers.clear();
	}

	pub fn len(&self) -> usize {
		self.observers.len()
	}

	pub fn each(&mut self, mut f: impl FnMut(&mut dyn SchedulerObserver)) {
		for (_, observer) in &mut self.observers {
			f(observer.as_mut());
		}
	}
}

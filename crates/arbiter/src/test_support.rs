//! Recording presenters and observers for unit tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Dialog, DialogId, DialogKind, DialogMeta, DismissalCause, ModalScheduler, Placement, PresentedDialog, Priority, SchedulerConfig, SchedulerObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
	Presented(DialogKind, Option<u64>),
	Added(u64),
	Created(u64),
	Suppressed(u64),
	Dismissed(u64, DismissalCause),
	Drained,
	Handled(u64, DismissalCause),
}

pub(crate) type Log = Arc<Mutex<Vec<Event>>>;

struct Recorder(Log);

impl SchedulerObserver for Recorder {
	fn on_dialog_added(&mut self, dialog: &DialogMeta) {
		self.0.lock().push(Event::Added(dialog.id.get()));
	}

	fn on_dialog_created(&mut self, dialog: &DialogMeta) {
		self.0.lock().push(Event::Created(dialog.id.get()));
	}

	fn on_dialog_suppressed(&mut self, dialog: &DialogMeta) {
		self.0.lock().push(Event::Suppressed(dialog.id.get()));
	}

	fn on_dialog_dismissed(&mut self, dialog: &DialogMeta, cause: DismissalCause) {
		self.0.lock().push(Event::Dismissed(dialog.id.get(), cause));
	}

	fn on_last_dialog_dismissed(&mut self) {
		self.0.lock().push(Event::Drained);
	}
}

/// Scheduler wired to presenters and an observer that all write to one log.
pub(crate) struct Harness {
	pub sched: ModalScheduler<&'static str>,
	pub log: Log,
}

impl Harness {
	pub fn new() -> Self {
		Self::with_config(SchedulerConfig::default())
	}

	pub fn with_config(config: SchedulerConfig) -> Self {
		let log = Log::default();
		let mut sched = ModalScheduler::with_config(config);
		for kind in DialogKind::ALL {
			let log = Arc::clone(&log);
			sched.register_presenter(kind, move |dialog: Option<PresentedDialog<'_, &'static str>>| {
				log.lock().push(Event::Presented(kind, dialog.map(|d| d.meta.id.get())));
			});
		}
		sched.add_observer(Recorder(Arc::clone(&log)));
		Self { sched, log }
	}

	/// Shows a dialog whose handler records `Handled`.
	pub fn show(&mut self, label: &'static str, kind: DialogKind, priority: Priority) -> DialogId {
		self.show_at(label, kind, priority, Placement::Back)
	}

	pub fn show_at(&mut self, label: &'static str, kind: DialogKind, priority: Priority, placement: Placement) -> DialogId {
		let dialog = self.recorded(label);
		self.sched.show_with(dialog, kind, priority, placement)
	}

	pub fn recorded(&self, label: &'static str) -> Dialog<&'static str> {
		let log = Arc::clone(&self.log);
		Dialog::new(label).on_dismiss(move |_, dismissed| {
			log.lock().push(Event::Handled(dismissed.meta.id.get(), dismissed.cause));
		})
	}

	pub fn active_id(&self) -> Option<DialogId> {
		self.sched.active().map(|m| m.id)
	}

	/// Drains and returns the log.
	pub fn take_events(&self) -> Vec<Event> {
		std::mem::take(&mut *self.log.lock())
	}

	/// Every `Handled` event recorded so far, leaving the log intact.
	pub fn handled(&self) -> Vec<(u64, DismissalCause)> {
		self.log
			.lock()
			.iter()
			.filter_map(|e| match e {
				Event::Handled(id, cause) => Some((*id, *cause)),
				_ => None,
			})
			.collect()
	}
}

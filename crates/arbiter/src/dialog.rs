//! Dialog requests and the records that travel with them through the scheduler.

use std::fmt;

use crate::scheduler::ModalScheduler;
use crate::types::{DialogId, DialogKind, DismissalCause, Priority};

/// One-shot callback run when a dialog leaves the scheduler.
///
/// The handler gets the scheduler back so it can show, dismiss, suspend or
/// resume from inside the dismissal.
pub type DismissHandler<T> = Box<dyn FnOnce(&mut ModalScheduler<T>, Dismissed<T>)>;

/// A request for the exclusive slot, owned by the scheduler from `show`
/// until dismissal.
pub struct Dialog<T> {
	payload: T,
	on_dismiss: Option<DismissHandler<T>>,
}

impl<T> Dialog<T> {
	/// Creates a dialog carrying `payload` and no dismiss handler.
	pub fn new(payload: T) -> Self {
		Self { payload, on_dismiss: None }
	}

	/// Sets the handler invoked exactly once when the dialog leaves the scheduler.
	pub fn on_dismiss(mut self, handler: impl FnOnce(&mut ModalScheduler<T>, Dismissed<T>) + 'static) -> Self {
		self.on_dismiss = Some(Box::new(handler));
		self
	}

	pub fn payload(&self) -> &T {
		&self.payload
	}

	pub(crate) fn into_parts(self) -> (T, Option<DismissHandler<T>>) {
		(self.payload, self.on_dismiss)
	}
}

impl<T: fmt::Debug> fmt::Debug for Dialog<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dialog")
			.field("payload", &self.payload)
			.field("has_handler", &self.on_dismiss.is_some())
			.finish()
	}
}

/// Scheduling metadata fixed at `show` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogMeta {
	pub id: DialogId,
	pub kind: DialogKind,
	pub priority: Priority,
}

/// Everything a dismiss handler gets back.
#[derive(Debug)]
pub struct Dismissed<T> {
	pub meta: DialogMeta,
	pub cause: DismissalCause,
	pub payload: T,
}

/// A dialog together with its scheduling metadata, as held in the active
/// slot or a pending bucket.
pub struct DialogEntry<T> {
	meta: DialogMeta,
	dialog: Dialog<T>,
}

impl<T> DialogEntry<T> {
	pub fn new(meta: DialogMeta, dialog: Dialog<T>) -> Self {
		Self { meta, dialog }
	}

	pub fn meta(&self) -> DialogMeta {
		self.meta
	}

	pub fn id(&self) -> DialogId {
		self.meta.id
	}

	pub fn kind(&self) -> DialogKind {
		self.meta.kind
	}

	pub fn priority(&self) -> Priority {
		self.meta.priority
	}

	pub fn payload(&self) -> &T {
		self.dialog.payload()
	}

	pub fn into_dialog(self) -> Dialog<T> {
		self.dialog
	}
}

impl<T: fmt::Debug> fmt::Debug for DialogEntry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DialogEntry").field("meta", &self.meta).field("dialog", &self.dialog).finish()
	}
}

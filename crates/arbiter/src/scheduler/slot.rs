//! Slot transitions shared by the public operations.

use super::ModalScheduler;
use crate::dialog::{DialogEntry, Dismissed};
use crate::presenter::PresentedDialog;
use crate::types::{DialogKind, DismissalCause, Placement, Priority};

impl<T> ModalScheduler<T> {
	/// Returns true when a dialog of `priority` may take the slot right now.
	pub(super) fn outranks_active(&self, priority: Priority) -> bool {
		self.active.as_ref().is_none_or(|active| active.priority() < priority)
	}

	/// Returns true when suspending `kind` must pull the active dialog off screen.
	pub(super) fn active_yields_to_suspension(&self, kind: DialogKind) -> bool {
		self.active.as_ref().is_some_and(|active| {
			active.kind() == kind && !(active.priority() == Priority::VeryHigh && self.config.very_high_survives_suspend)
		})
	}

	/// Returns true while refills must wait for an enclosing dismissal.
	pub(super) fn admission_deferred(&self) -> bool {
		self.dismissing.is_some() || self.bulk_depth > 0
	}

	/// Puts `entry` in the slot, evicting the current occupant to the head
	/// of its bucket.
	pub(super) fn admit(&mut self, entry: DialogEntry<T>) {
		self.evict();
		let meta = entry.meta();
		tracing::debug!(id = %meta.id, kind = meta.kind.as_str(), priority = meta.priority.as_str(), "modal.admit");
		self.active = Some(entry);
		if let Some(active) = &self.active
			&& let Some(presenter) = self.presenters.get_mut(&meta.kind)
		{
			presenter.set_active(Some(PresentedDialog {
				meta,
				payload: active.payload(),
			}));
		}
		self.observers.each(|o| o.on_dialog_created(&meta));
	}

	/// Moves the active dialog back to the head of its bucket without
	/// dismissing it.
	pub(super) fn evict(&mut self) {
		let Some(entry) = self.active.take() else {
			return;
		};
		let meta = entry.meta();
		tracing::debug!(id = %meta.id, kind = meta.kind.as_str(), priority = meta.priority.as_str(), "modal.evict");
		self.clear_presenter(meta.kind);
		self.pending.put(entry, Placement::Next);
		self.observers.each(|o| o.on_dialog_suppressed(&meta));
	}

	/// Queues `entry` instead of showing it.
	pub(super) fn suppress(&mut self, entry: DialogEntry<T>, placement: Placement) {
		let meta = entry.meta();
		tracing::trace!(
			id = %meta.id,
			kind = meta.kind.as_str(),
			priority = meta.priority.as_str(),
			suspended = self.suspension.is_suspended(meta.kind),
			"modal.suppress"
		);
		self.pending.put(entry, placement);
		self.observers.each(|o| o.on_dialog_suppressed(&meta));
	}

	/// Admits the best eligible pending dialog if the slot is free or the
	/// candidate outranks the occupant.
	pub(super) fn refill(&mut self) {
		if self.admission_deferred() || self.closed {
			return;
		}
		let suspended = self.suspension.suspended_kinds();
		let Some(candidate) = self.pending.peek_eligible(&suspended) else {
			return;
		};
		if !self.outranks_active(candidate.priority) {
			return;
		}
		let Some(entry) = self.pending.next_eligible(&suspended) else {
			return;
		};
		tracing::trace!(id = %candidate.id, pending = self.pending.len(), "modal.refill");
		self.admit(entry);
	}

	/// Takes the active dialog out of the slot and runs its dismissal.
	pub(super) fn dismiss_active(&mut self, entry: DialogEntry<T>, cause: DismissalCause) {
		self.clear_presenter(entry.kind());
		let previous = self.dismissing.replace(entry.id());
		self.finish(entry, cause);
		self.dismissing = previous;
	}

	/// Removes every dialog of `kind`: pending ones first, then the active one.
	///
	/// Returns true when at least one dialog was removed.
	pub(super) fn dismiss_kind(&mut self, kind: DialogKind, cause: DismissalCause) -> bool {
		let mut drained = Vec::new();
		let mut removed = self.pending.remove_all_of_kind(kind, |entry| drained.push(entry));
		for entry in drained {
			self.finish(entry, cause);
		}
		if self.active.as_ref().is_some_and(|active| active.kind() == kind)
			&& let Some(entry) = self.active.take()
		{
			self.dismiss_active(entry, cause);
			removed = true;
		}
		removed
	}

	/// Reports a dialog's departure and hands its payload to its handler.
	pub(super) fn finish(&mut self, entry: DialogEntry<T>, cause: DismissalCause) {
		let meta = entry.meta();
		tracing::debug!(id = %meta.id, kind = meta.kind.as_str(), cause = cause.as_str(), "modal.dismiss");
		self.observers.each(|o| o.on_dialog_dismissed(&meta, cause));
		let (payload, handler) = entry.into_dialog().into_parts();
		if let Some(handler) = handler {
			handler(self, Dismissed { meta, cause, payload });
		}
	}

	/// Fires `on_last_dialog_dismissed` once the outermost dismissal leaves
	/// nothing behind. Callers only invoke it after removing a dialog.
	pub(super) fn notify_if_drained(&mut self) {
		if !self.admission_deferred() && self.is_empty() {
			tracing::trace!("modal.drained");
			self.observers.each(|o| o.on_last_dialog_dismissed());
		}
	}

	fn clear_presenter(&mut self, kind: DialogKind) {
		if let Some(presenter) = self.presenters.get_mut(&kind) {
			presenter.set_active(None);
		}
	}
}

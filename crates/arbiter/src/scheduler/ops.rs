use super::ModalScheduler;
use crate::dialog::{Dialog, DialogEntry, DialogMeta};
use crate::error::ForeignToken;
use crate::suspension::{Release, SuspensionToken};
use crate::types::{DialogId, DialogKind, DismissalCause, Placement, Priority};

impl<T> ModalScheduler<T> {
	/// Shows `dialog` now or queues it at the back of its bucket.
	pub fn show(&mut self, dialog: Dialog<T>, kind: DialogKind, priority: Priority) -> DialogId {
		self.show_with(dialog, kind, priority, Placement::Back)
	}

	/// Shows `dialog` now, or queues it at `placement` within its bucket.
	///
	/// The dialog takes the slot when its kind is not suspended and the slot
	/// is free or held by a strictly lower priority. The previous occupant
	/// goes back to the head of its own bucket. After [`Self::destroy`] the
	/// dialog is dismissed on arrival with [`DismissalCause::HostDestroyed`].
	///
	/// # Panics
	///
	/// In debug builds, or with `strict_contracts`, if no presenter is
	/// registered for `kind`.
	pub fn show_with(&mut self, dialog: Dialog<T>, kind: DialogKind, priority: Priority, placement: Placement) -> DialogId {
		self.reconcile_lapsed_tokens();
		let meta = DialogMeta {
			id: self.mint_id(),
			kind,
			priority,
		};
		let entry = DialogEntry::new(meta, dialog);

		if self.closed {
			tracing::debug!(id = %meta.id, "modal.show: scheduler closed");
			self.finish(entry, DismissalCause::HostDestroyed);
			return meta.id;
		}
		contract!(self, self.presenters.contains_key(&kind), "no presenter registered for {kind} dialogs");

		tracing::trace!(id = %meta.id, kind = kind.as_str(), priority = priority.as_str(), ?placement, "modal.show");
		self.observers.each(|o| o.on_dialog_added(&meta));

		// While deferred, the enclosing dismissal refills once its handlers return.
		if self.admission_deferred() || self.suspension.is_suspended(kind) || !self.outranks_active(priority) {
			self.suppress(entry, placement);
		} else {
			self.admit(entry);
		}
		meta.id
	}

	/// Removes dialog `id`, invoking its handler with `cause`.
	///
	/// Dismissing the active dialog refills the slot. Unknown or already
	/// dismissed ids are ignored.
	///
	/// # Panics
	///
	/// In debug builds, or with `strict_contracts`, if `cause` is restricted
	/// to a kind other than the active dialog's.
	pub fn dismiss(&mut self, id: DialogId, cause: DismissalCause) {
		self.reconcile_lapsed_tokens();
		if self.dismissing == Some(id) {
			tracing::trace!(%id, "modal.dismiss: already dismissing");
			return;
		}
		match self.active.take() {
			Some(entry) if entry.id() == id => {
				contract!(self, cause.applies_to(entry.kind()), "{cause} cannot dismiss a {} dialog", entry.kind());
				self.dismiss_active(entry, cause);
				self.refill();
				self.notify_if_drained();
			}
			occupant => {
				self.active = occupant;
				match self.pending.remove(id) {
					Some(entry) => {
						self.finish(entry, cause);
						self.notify_if_drained();
					}
					None => tracing::trace!(%id, "modal.dismiss: unknown id"),
				}
			}
		}
	}

	/// Dismisses every pending dialog of `kind`, then the active one if it
	/// is of `kind`.
	///
	/// # Panics
	///
	/// In debug builds, or with `strict_contracts`, if `cause` is restricted
	/// to another kind.
	pub fn dismiss_all_of_kind(&mut self, kind: DialogKind, cause: DismissalCause) {
		self.reconcile_lapsed_tokens();
		contract!(self, cause.applies_to(kind), "{cause} cannot dismiss {kind} dialogs");
		self.bulk_depth += 1;
		let removed = self.dismiss_kind(kind, cause);
		self.bulk_depth -= 1;
		self.refill();
		if removed {
			self.notify_if_drained();
		}
	}

	/// Dismisses every dialog of every kind, in kind order.
	///
	/// A dialog shown by a handler during the sweep is dismissed too when its
	/// kind has not been swept yet. Otherwise it stays queued for the refill
	/// that follows the sweep.
	pub fn dismiss_all(&mut self, cause: DismissalCause) {
		self.reconcile_lapsed_tokens();
		tracing::debug!(cause = cause.as_str(), pending = self.pending.len(), active = self.is_active(), "modal.dismiss_all");
		self.bulk_depth += 1;
		let mut removed = false;
		for kind in DialogKind::ALL {
			removed |= self.dismiss_kind(kind, cause);
		}
		self.bulk_depth -= 1;
		self.refill();
		if removed {
			self.notify_if_drained();
		}
	}

	/// Suspends `kind` until the returned token is resumed or dropped.
	///
	/// An active dialog of `kind` is evicted to the head of its bucket unless
	/// it is `VeryHigh` and `very_high_survives_suspend` is set.
	pub fn suspend(&mut self, kind: DialogKind) -> SuspensionToken {
		self.reconcile_lapsed_tokens();
		let token = self.suspension.acquire(kind);
		tracing::debug!(kind = kind.as_str(), token = token.id(), holds = self.suspension.count(kind), "modal.suspend");
		if self.active_yields_to_suspension(kind) {
			self.evict();
			self.refill();
		}
		token
	}

	/// Releases `token`. Once `kind` has no holds left the slot is refilled.
	///
	/// A token minted for another kind or scheduler changes nothing and is
	/// returned in the error.
	pub fn resume(&mut self, kind: DialogKind, token: SuspensionToken) -> Result<(), ForeignToken> {
		self.reconcile_lapsed_tokens();
		let id = token.id();
		match self.suspension.release(kind, token) {
			Ok(Release::Resumable) => {
				tracing::debug!(kind = kind.as_str(), token = id, "modal.resume");
				self.refill();
				Ok(())
			}
			Ok(Release::Held { remaining }) => {
				tracing::trace!(kind = kind.as_str(), token = id, remaining, "modal.resume: still suspended");
				Ok(())
			}
			Err(foreign) => {
				tracing::debug!(kind = kind.as_str(), token = id, owner = foreign.token.kind().as_str(), "modal.resume: foreign token");
				Err(foreign)
			}
		}
	}

	/// Refills the slot if a suspension token was dropped without `resume`.
	///
	/// Every mutating operation calls this first; hosts that drop tokens
	/// between operations can call it directly.
	pub fn reconcile_lapsed_tokens(&mut self) {
		let lapsed = self.suspension.take_lapsed();
		if !lapsed.is_empty() {
			tracing::debug!(?lapsed, "modal.resume: token dropped");
			self.refill();
		}
	}

	/// Dismisses everything with [`DismissalCause::HostDestroyed`] and closes
	/// the scheduler. Presenters and observers are released.
	pub fn destroy(&mut self) {
		if self.closed {
			return;
		}
		tracing::debug!(pending = self.pending.len(), active = self.is_active(), "modal.destroy");
		self.closed = true;
		self.bulk_depth += 1;
		let mut removed = false;
		for kind in DialogKind::ALL {
			removed |= self.dismiss_kind(kind, DismissalCause::HostDestroyed);
		}
		self.bulk_depth -= 1;
		if removed {
			self.notify_if_drained();
		}
		self.presenters.clear();
		self.observers.clear();
	}
}

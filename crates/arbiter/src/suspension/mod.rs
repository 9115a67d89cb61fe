//! Reference-counted suspension of dialog kinds.
//!
//! Each kind owns one hold set. Every [`SuspensionToken`] is one hold; a kind
//! is suspended while its set is non-empty. Tokens are RAII guards: releasing
//! through [`SuspensionTracker::release`] reports the transition to zero
//! directly, while a dropped token marks its kind as lapsed so the scheduler
//! can pick the transition up later via [`SuspensionTracker::take_lapsed`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::ForeignToken;
use crate::types::DialogKind;

/// Kinds listed without allocation; there are only a handful.
pub type KindSet = SmallVec<[DialogKind; 2]>;

#[derive(Debug, Default)]
struct HoldSet {
	outstanding: FxHashSet<u64>,
	/// Set when a dropped token emptied the set.
	lapsed: bool,
}

/// Outcome of releasing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
	/// Other holds remain on the kind.
	Held { remaining: usize },
	/// This release emptied the hold set; the kind may show dialogs again.
	Resumable,
}

/// One outstanding suspension of a dialog kind.
///
/// Dropping the token lifts its hold.
#[must_use = "dropping a suspension token lifts the suspension immediately"]
pub struct SuspensionToken {
	kind: DialogKind,
	id: u64,
	holds: Arc<Mutex<HoldSet>>,
	armed: bool,
}

impl SuspensionToken {
	pub fn kind(&self) -> DialogKind {
		self.kind
	}

	pub fn id(&self) -> u64 {
		self.id
	}

	/// Removes this hold, returning how many remain, or `None` when the id was
	/// not outstanding.
	fn disarm(&mut self) -> Option<usize> {
		self.armed = false;
		let mut holds = self.holds.lock();
		holds.outstanding.remove(&self.id).then(|| holds.outstanding.len())
	}
}

impl Drop for SuspensionToken {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		self.armed = false;
		let mut holds = self.holds.lock();
		if holds.outstanding.remove(&self.id) && holds.outstanding.is_empty() {
			holds.lapsed = true;
		}
	}
}

impl fmt::Debug for SuspensionToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SuspensionToken")
			.field("kind", &self.kind)
			.field("id", &self.id)
			.field("armed", &self.armed)
			.finish()
	}
}

/// Per-kind hold sets for one scheduler.
#[derive(Debug)]
pub struct SuspensionTracker {
	kinds: BTreeMap<DialogKind, Arc<Mutex<HoldSet>>>,
	next_token: u64,
}

impl Default for SuspensionTracker {
	fn default() -> Self {
		Self {
			kinds: DialogKind::ALL.iter().map(|&kind| (kind, Arc::default())).collect(),
			next_token: 0,
		}
	}
}

impl SuspensionTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one hold on `kind`. Always succeeds.
	pub fn acquire(&mut self, kind: DialogKind) -> SuspensionToken {
		self.next_token = self.next_token.wrapping_add(1);
		let id = self.next_token;
		let holds = Arc::clone(self.holds(kind));
		holds.lock().outstanding.insert(id);
		SuspensionToken {
			kind,
			id,
			holds,
			armed: true,
		}
	}

	/// Releases `token`'s hold on `kind`.
	///
	/// A token minted for another kind or by another tracker is handed back
	/// untouched inside the error. An id that is no longer outstanding
	/// releases nothing.
	pub fn release(&mut self, kind: DialogKind, mut token: SuspensionToken) -> Result<Release, ForeignToken> {
		if token.kind != kind || !Arc::ptr_eq(&token.holds, self.holds(kind)) {
			return Err(ForeignToken { expected: kind, token });
		}
		match token.disarm() {
			Some(0) => {
				token.holds.lock().lapsed = false;
				Ok(Release::Resumable)
			}
			Some(remaining) => Ok(Release::Held { remaining }),
			None => Ok(Release::Held { remaining: self.count(kind) }),
		}
	}

	/// Number of outstanding holds on `kind`.
	pub fn count(&self, kind: DialogKind) -> usize {
		self.holds(kind).lock().outstanding.len()
	}

	pub fn is_suspended(&self, kind: DialogKind) -> bool {
		self.count(kind) > 0
	}

	/// Every kind with at least one outstanding hold, in ordinal order.
	pub fn suspended_kinds(&self) -> KindSet {
		DialogKind::ALL.iter().copied().filter(|&kind| self.is_suspended(kind)).collect()
	}

	/// Kinds whose last hold was dropped rather than released, clearing the mark.
	///
	/// A kind that was suspended again since the drop is not reported.
	pub fn take_lapsed(&mut self) -> KindSet {
		let mut lapsed = KindSet::new();
		for (&kind, holds) in &self.kinds {
			let mut holds = holds.lock();
			if std::mem::take(&mut holds.lapsed) && holds.outstanding.is_empty() {
				lapsed.push(kind);
			}
		}
		lapsed
	}

	fn holds(&self, kind: DialogKind) -> &Arc<Mutex<HoldSet>> {
		&self.kinds[&kind]
	}
}

use proptest::prelude::*;

use crate::suspension::SuspensionToken;
use crate::test_support::Harness;
use crate::types::DialogKind::{Global, Scoped};
use crate::types::Priority::{High, Low, VeryHigh};
use crate::{DialogId, DialogKind, DialogMeta, DismissalCause, Placement, Priority};

/// Must keep at most one dialog in the slot, and never the same dialog in the
/// slot and a bucket.
///
/// - Enforced in: `ModalScheduler::admit`
/// - Failure symptom: Two presenters render at once.
#[cfg_attr(test, test)]
pub(crate) fn test_at_most_one_active() {
	let mut h = Harness::new();
	let ids = [h.show("a", Scoped, Low), h.show("b", Global, High), h.show("c", Scoped, VeryHigh)];

	assert_eq!(h.active_id(), Some(ids[2]));
	let pending: Vec<DialogId> = ids.iter().copied().filter(|&id| h.sched.is_pending(id)).collect();
	assert_eq!(pending, vec![ids[0], ids[1]]);
}

/// Must admit strictly higher priority immediately and put the occupant back
/// at the head of its bucket.
///
/// - Enforced in: `ModalScheduler::outranks_active`, `ModalScheduler::evict`
/// - Failure symptom: Urgent dialogs wait, or evicted dialogs vanish.
#[cfg_attr(test, test)]
pub(crate) fn test_priority_admission() {
	let mut h = Harness::new();
	let a = h.show("a", Scoped, Low);
	let b = h.show("b", Global, High);
	assert_eq!(h.active_id(), Some(b));
	assert_eq!(h.sched.pending_in(Scoped, Low).first().map(|m| m.id), Some(a));

	h.sched.dismiss(b, DismissalCause::PositiveButton);
	assert_eq!(h.handled(), vec![(b.get(), DismissalCause::PositiveButton)]);
	assert_eq!(h.active_id(), Some(a));

	let token = h.sched.suspend(Scoped);
	assert!(!h.sched.is_active());
	assert!(h.sched.is_pending(a));

	h.sched.resume(Scoped, token).unwrap();
	assert_eq!(h.active_id(), Some(a));
}

/// Must invoke every handler exactly once, whichever path removes the dialog.
///
/// - Enforced in: `ModalScheduler::finish`
/// - Failure symptom: Callers never hear back, or hear back twice.
#[cfg_attr(test, test)]
pub(crate) fn test_no_dialog_lost() {
	let mut h = Harness::new();
	let _hold = h.sched.suspend(Global);
	let mut shown = Vec::new();
	for (kind, priority) in [(Scoped, Low), (Global, VeryHigh), (Scoped, High), (Global, Low), (Scoped, Low)] {
		shown.push(h.show("d", kind, priority));
	}
	h.sched.dismiss(shown[2], DismissalCause::NegativeButton);
	h.sched.dismiss_all_of_kind(Scoped, DismissalCause::ScopeSwitched);
	h.sched.destroy();

	let mut handled: Vec<u64> = h.handled().into_iter().map(|(id, _)| id).collect();
	handled.sort_unstable();
	let mut expected: Vec<u64> = shown.iter().map(|id| id.get()).collect();
	expected.sort_unstable();
	assert_eq!(handled, expected);
}

/// Must keep a suspended kind out of the slot until every token is released.
///
/// - Enforced in: `ModalScheduler::suspend`, `ModalScheduler::refill`
/// - Failure symptom: Dialogs appear over a feature that asked for quiet.
#[cfg_attr(test, test)]
pub(crate) fn test_suspension_blocks_admission() {
	let mut h = Harness::new();
	let first = h.sched.suspend(Scoped);
	let second = h.sched.suspend(Scoped);
	let a = h.show("a", Scoped, Low);
	h.show("b", Scoped, VeryHigh);
	assert!(!h.sched.is_active());

	h.sched.resume(Scoped, first).unwrap();
	assert!(!h.sched.is_active());

	h.sched.resume(Scoped, second).unwrap();
	assert_eq!(h.sched.active().map(|m| m.priority), Some(VeryHigh));
	assert!(h.sched.is_pending(a));
}

/// Must break equal-priority ties toward the higher kind ordinal.
///
/// - Enforced in: `PendingStore::next_eligible`
/// - Failure symptom: Refill order depends on which kind queued first.
#[cfg_attr(test, test)]
pub(crate) fn test_tie_break_prefers_higher_kind() {
	for _ in 0..3 {
		let mut h = Harness::new();
		let blocker = h.show("blocker", Scoped, VeryHigh);
		let scoped = h.show("scoped", Scoped, High);
		let global = h.show("global", Global, High);

		h.sched.dismiss(blocker, DismissalCause::Unknown);
		assert_eq!(h.active_id(), Some(global));
		h.sched.dismiss(global, DismissalCause::Unknown);
		assert_eq!(h.active_id(), Some(scoped));
	}
}

#[derive(Debug, Clone)]
enum Op {
	Show { kind: usize, priority: usize, next: bool },
	DismissActive,
	DismissPending(usize),
	DismissKind(usize),
	Suspend(usize),
	Resume(usize),
	DropToken(usize),
	DismissAll,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		5 => (0..2usize, 0..3usize, any::<bool>()).prop_map(|(kind, priority, next)| Op::Show { kind, priority, next }),
		2 => Just(Op::DismissActive),
		2 => any::<usize>().prop_map(Op::DismissPending),
		1 => (0..2usize).prop_map(Op::DismissKind),
		2 => (0..2usize).prop_map(Op::Suspend),
		2 => (0..2usize).prop_map(Op::Resume),
		1 => (0..2usize).prop_map(Op::DropToken),
		1 => Just(Op::DismissAll),
	]
}

fn all_pending(h: &Harness) -> Vec<DialogMeta> {
	DialogKind::ALL.iter().flat_map(|&kind| h.sched.pending_of_kind(kind)).collect()
}

fn check_slot(h: &Harness, shown: &[DialogId]) -> Result<(), TestCaseError> {
	let active = h.sched.active();
	if let Some(active) = active {
		prop_assert!(!h.sched.is_pending(active.id), "{} is both active and pending", active.id);
		if h.sched.is_suspended(active.kind) {
			prop_assert_eq!(active.priority, Priority::VeryHigh, "suspended kind holds the slot");
		}
	}

	for meta in all_pending(h) {
		if h.sched.is_suspended(meta.kind) {
			continue;
		}
		match active {
			Some(active) => {
				prop_assert!(meta.priority <= active.priority, "{} outranks the occupant", meta.id);
			}
			None => {
				prop_assert!(false, "slot idle while {} is eligible", meta.id);
			}
		}
	}

	let handled = h.handled();
	for &id in shown {
		let times = handled.iter().filter(|(seen, _)| *seen == id.get()).count();
		let live = usize::from(active.is_some_and(|m| m.id == id)) + usize::from(h.sched.is_pending(id));
		prop_assert!(times <= 1, "{} handled {} times", id, times);
		prop_assert_eq!(times + live, 1, "{} is in {} places", id, times + live);
	}
	Ok(())
}

proptest! {
	#[test]
	fn arbitrary_sequences_preserve_slot_invariants(ops in prop::collection::vec(op(), 1..60)) {
		let mut h = Harness::new();
		let mut shown = Vec::new();
		let mut tokens: [Vec<SuspensionToken>; 2] = [Vec::new(), Vec::new()];

		for op in ops {
			match op {
				Op::Show { kind, priority, next } => {
					let placement = if next { Placement::Next } else { Placement::Back };
					shown.push(h.show_at("d", DialogKind::ALL[kind], Priority::ALL[priority], placement));
				}
				Op::DismissActive => {
					if let Some(active) = h.sched.active() {
						h.sched.dismiss(active.id, DismissalCause::PositiveButton);
					}
				}
				Op::DismissPending(n) => {
					let pending = all_pending(&h);
					if !pending.is_empty() {
						h.sched.dismiss(pending[n % pending.len()].id, DismissalCause::NegativeButton);
					}
				}
				Op::DismissKind(kind) => h.sched.dismiss_all_of_kind(DialogKind::ALL[kind], DismissalCause::Unknown),
				Op::Suspend(kind) => tokens[kind].push(h.sched.suspend(DialogKind::ALL[kind])),
				Op::Resume(kind) => {
					if let Some(token) = tokens[kind].pop() {
						prop_assert!(h.sched.resume(DialogKind::ALL[kind], token).is_ok());
					}
				}
				Op::DropToken(kind) => {
					drop(tokens[kind].pop());
					h.sched.reconcile_lapsed_tokens();
				}
				Op::DismissAll => h.sched.dismiss_all(DismissalCause::Unknown),
			}
			check_slot(&h, &shown)?;
		}

		h.sched.dismiss_all(DismissalCause::HostDestroyed);
		prop_assert!(h.sched.is_empty());
		let handled = h.handled();
		prop_assert_eq!(handled.len(), shown.len());
		for id in &shown {
			prop_assert_eq!(handled.iter().filter(|(seen, _)| *seen == id.get()).count(), 1);
		}
	}
}

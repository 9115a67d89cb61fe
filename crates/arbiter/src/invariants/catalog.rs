//! Catalog of invariants for the exclusive dialog slot.

#![allow(dead_code)]

/// - At Most One Active: the slot holds zero or one dialog, and that dialog is
///   never also waiting in a pending bucket.
///   - Enforced in: [`crate::ModalScheduler::show_with`], `ModalScheduler::admit`
///   - Tested by: [`crate::invariants::test_at_most_one_active`]
///   - Failure symptom: Two presenters render at once, or a dialog reappears after eviction.
pub(crate) const AT_MOST_ONE_ACTIVE: () = ();

/// - Higher Priority Admits And Evicts: a dialog whose priority is strictly
///   higher than the occupant's takes the slot, and the occupant returns to
///   the head of its own bucket without being dismissed.
///   - Enforced in: `ModalScheduler::outranks_active`, `ModalScheduler::evict`
///   - Tested by: [`crate::invariants::test_priority_admission`]
///   - Failure symptom: Urgent dialogs wait behind routine ones, or evicted dialogs are lost.
pub(crate) const HIGHER_PRIORITY_ADMITS_AND_EVICTS: () = ();

/// - Every Dialog Dismissed Exactly Once: each dialog passed to `show` ends up
///   with its handler invoked exactly once, including through bulk dismissal
///   and teardown.
///   - Enforced in: `ModalScheduler::finish`, [`crate::ModalScheduler::destroy`]
///   - Tested by: [`crate::invariants::test_no_dialog_lost`]
///   - Failure symptom: Callers wait forever on a result, or act on it twice.
pub(crate) const EVERY_DIALOG_DISMISSED_EXACTLY_ONCE: () = ();

/// - Suspended Kind Never Admitted: while a kind has outstanding tokens none of
///   its dialogs enters the slot; only a `VeryHigh` dialog already on screen
///   may stay.
///   - Enforced in: [`crate::ModalScheduler::suspend`], `ModalScheduler::refill`
///   - Tested by: [`crate::invariants::test_suspension_blocks_admission`]
///   - Failure symptom: Dialogs pop up over a feature that asked for quiet.
pub(crate) const SUSPENDED_KIND_NEVER_ADMITTED: () = ();

/// - Deterministic Tie Break: among equal-priority pending dialogs the one of
///   the higher kind ordinal is chosen first, every time.
///   - Enforced in: [`crate::PendingStore::next_eligible`]
///   - Tested by: [`crate::invariants::test_tie_break_prefers_higher_kind`]
///   - Failure symptom: Refill order depends on insertion history across kinds.
pub(crate) const DETERMINISTIC_TIE_BREAK: () = ();

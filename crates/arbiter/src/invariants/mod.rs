//! Machine-checkable invariant catalog and proof entrypoints for slot arbitration.
#![allow(dead_code)]

pub(crate) mod catalog;

#[allow(unused_imports)]
pub(crate) use catalog::{
	AT_MOST_ONE_ACTIVE, DETERMINISTIC_TIE_BREAK, EVERY_DIALOG_DISMISSED_EXACTLY_ONCE, HIGHER_PRIORITY_ADMITS_AND_EVICTS,
	SUSPENDED_KIND_NEVER_ADMITTED,
};

#[cfg(doc)]
pub(crate) fn test_at_most_one_active() {}

#[cfg(doc)]
pub(crate) fn test_priority_admission() {}

#[cfg(doc)]
pub(crate) fn test_no_dialog_lost() {}

#[cfg(doc)]
pub(crate) fn test_suspension_blocks_admission() {}

#[cfg(doc)]
pub(crate) fn test_tie_break_prefers_higher_kind() {}

#[cfg(test)]
mod proofs;

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use proofs::{
	test_at_most_one_active, test_no_dialog_lost, test_priority_admission, test_suspension_blocks_admission,
	test_tie_break_prefers_higher_kind,
};

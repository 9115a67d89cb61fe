//! Arbitration of the single exclusive dialog slot.
//!
//! [`ModalScheduler`] owns the active slot, the pending buckets and the
//! per-kind suspension holds. Callers hand dialogs in with `show` and take
//! them out with `dismiss`; everything else (eviction, refill, presenter
//! updates, observer events) happens inside those calls.
//!
//! # Execution model
//!
//! All operations run synchronously on one control thread. Dismiss handlers
//! receive `&mut ModalScheduler` and may re-enter any operation. While the
//! active dialog's handler runs the slot is empty and admission is deferred:
//! nested `show` calls only queue, and the dismissal that started the handler
//! refills the slot once the handler returns.

/// Fatal in debug builds or under `strict_contracts`; logged otherwise.
macro_rules! contract {
	($sched:expr, $cond:expr, $($arg:tt)+) => {
		if !$cond {
			if cfg!(debug_assertions) || $sched.config.strict_contracts {
				panic!($($arg)+);
			}
			tracing::error!(target: "warden_arbiter::contract", "{}", format_args!($($arg)+));
		}
	};
}

mod ops;
mod slot;
mod state;

pub use state::ModalScheduler;

#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Exclusive modal slot arbitration.
//!
//! Many independent subsystems may ask to present a modal dialog at the same
//! time, but only one can be on screen. [`ModalScheduler`] decides which
//! dialog holds the slot, keeps the rest waiting in priority and kind
//! buckets, and lets whole kinds be suspended with reference-counted
//! [`SuspensionToken`]s without losing queued work.
//!
//! Rendering stays outside the crate: one [`Presenter`] per [`DialogKind`]
//! mirrors whatever the scheduler makes active, and [`SchedulerObserver`]s
//! receive lifecycle events.
//!
//! ```
//! use warden_arbiter::{Dialog, DialogKind, DismissalCause, ModalScheduler, PresentedDialog, Priority};
//!
//! let mut scheduler = ModalScheduler::<String>::new();
//! for kind in DialogKind::ALL {
//! 	scheduler.register_presenter(kind, |_: Option<PresentedDialog<'_, String>>| {});
//! }
//!
//! let low = scheduler.show(Dialog::new("save changes?".to_string()), DialogKind::Scoped, Priority::Low);
//! let high = scheduler.show(Dialog::new("update ready".to_string()), DialogKind::Global, Priority::High);
//! assert_eq!(scheduler.active().map(|m| m.id), Some(high));
//!
//! scheduler.dismiss(high, DismissalCause::PositiveButton);
//! assert_eq!(scheduler.active().map(|m| m.id), Some(low));
//! ```

pub mod config;
pub mod dialog;
pub mod error;
mod invariants;
pub mod observer;
pub mod pending;
pub mod presenter;
pub mod scheduler;
pub mod suspension;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::SchedulerConfig;
pub use dialog::{Dialog, DialogEntry, DialogMeta, DismissHandler, Dismissed};
pub use error::{ConfigError, ForeignToken};
pub use observer::{ObserverId, SchedulerObserver};
pub use pending::PendingStore;
pub use presenter::{PresentedDialog, Presenter};
pub use scheduler::ModalScheduler;
pub use suspension::{Release, SuspensionToken, SuspensionTracker};
pub use types::{DialogId, DialogKind, DismissalCause, Placement, Priority};

//! Closed vocabularies shared by every scheduler component.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scope a dialog is tied to.
///
/// Declaration order is the kind ordinal. When two pending dialogs share a
/// priority, the one with the higher ordinal is admitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
	/// Tied to a sub-context of the host, such as a single tab.
	Scoped,
	/// Tied to the whole application.
	Global,
}

impl DialogKind {
	/// Every kind in ascending ordinal order.
	pub const ALL: [Self; 2] = [Self::Scoped, Self::Global];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Scoped => "scoped",
			Self::Global => "global",
		}
	}
}

impl fmt::Display for DialogKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Admission tier. A dialog preempts the active one only when its tier is
/// strictly higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
	Low,
	High,
	/// Never evicted by suspension of its kind once on screen.
	VeryHigh,
}

impl Priority {
	/// Every tier in ascending order.
	pub const ALL: [Self; 3] = [Self::Low, Self::High, Self::VeryHigh];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::High => "high",
			Self::VeryHigh => "very_high",
		}
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Where a queued dialog lands inside its pending bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
	/// Behind every dialog already waiting in the bucket.
	#[default]
	Back,
	/// Ahead of every dialog already waiting in the bucket.
	Next,
}

/// Why a dialog left the scheduler.
///
/// Consumed by callers for telemetry and follow-up logic; never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalCause {
	Unknown,
	PositiveButton,
	NegativeButton,
	/// The user interacted with the dialog content itself.
	ActionOnContent,
	/// The host layer asked for dismissal across the embedding boundary.
	DismissedByHost,
	NavigateBackOrTouchOutside,
	/// The owning sub-context lost focus to another one.
	ScopeSwitched,
	/// The owning sub-context was closed.
	ScopeDestroyed,
	/// The host application is tearing down.
	HostDestroyed,
	/// The presenter had no surface to attach to.
	NotAttached,
	/// The owning sub-context navigated away.
	Navigated,
	/// The content backing the owning sub-context went away.
	ContentDestroyed,
	ClientTimeout,
	ActionCompleted,
	ActionNotPossible,
	InteractionDeferred,
}

impl DismissalCause {
	/// Kind a cause is restricted to, if any.
	///
	/// Causes that describe a sub-context event only make sense for
	/// [`DialogKind::Scoped`] dialogs.
	pub const fn required_kind(self) -> Option<DialogKind> {
		match self {
			Self::ScopeSwitched | Self::ScopeDestroyed | Self::Navigated | Self::ContentDestroyed => Some(DialogKind::Scoped),
			_ => None,
		}
	}

	/// Returns true when this cause may dismiss a dialog of `kind`.
	pub const fn applies_to(self, kind: DialogKind) -> bool {
		match self.required_kind() {
			Some(required) => required as u8 == kind as u8,
			None => true,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Unknown => "unknown",
			Self::PositiveButton => "positive_button",
			Self::NegativeButton => "negative_button",
			Self::ActionOnContent => "action_on_content",
			Self::DismissedByHost => "dismissed_by_host",
			Self::NavigateBackOrTouchOutside => "navigate_back_or_touch_outside",
			Self::ScopeSwitched => "scope_switched",
			Self::ScopeDestroyed => "scope_destroyed",
			Self::HostDestroyed => "host_destroyed",
			Self::NotAttached => "not_attached",
			Self::Navigated => "navigated",
			Self::ContentDestroyed => "content_destroyed",
			Self::ClientTimeout => "client_timeout",
			Self::ActionCompleted => "action_completed",
			Self::ActionNotPossible => "action_not_possible",
			Self::InteractionDeferred => "interaction_deferred",
		}
	}
}

impl fmt::Display for DismissalCause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Identity of one dialog for its whole stay in the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialogId(pub(crate) u64);

impl DialogId {
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for DialogId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "dialog#{}", self.0)
	}
}

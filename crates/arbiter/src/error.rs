//! Error types for the arbiter.
//!
//! Scheduling itself never fails: contract violations are assertions and
//! stale operations are no-ops. The errors here cover configuration and
//! handing a foreign suspension token back to its owner.

use thiserror::Error;

use crate::suspension::SuspensionToken;
use crate::types::DialogKind;

/// Errors that can occur when loading scheduler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the schema.
	#[error("invalid scheduler config: {0}")]
	Toml(#[from] toml::de::Error),
}

/// A suspension token presented for a kind or scheduler it does not belong to.
///
/// The resume was a no-op; the caller keeps the token and its hold.
#[derive(Debug, Error)]
#[error("suspension token #{} ({}) is foreign to the {expected} hold set", .token.id(), .token.kind())]
pub struct ForeignToken {
	/// Kind the release was attempted against.
	pub expected: DialogKind,
	/// The untouched token.
	pub token: SuspensionToken,
}

impl ForeignToken {
	pub fn into_token(self) -> SuspensionToken {
		self.token
	}
}

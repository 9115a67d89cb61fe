//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a [`crate::ModalScheduler`].
///
/// ```toml
/// strict_contracts = true
/// very_high_survives_suspend = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
	/// Panic on contract violations in release builds too. Debug builds
	/// always panic.
	pub strict_contracts: bool,
	/// Leave an on-screen `VeryHigh` dialog in place when its kind is suspended.
	pub very_high_survives_suspend: bool,
}

impl Default for SchedulerConfig {
	fn default() -> Self {
		Self {
			strict_contracts: false,
			very_high_survives_suspend: true,
		}
	}
}

impl SchedulerConfig {
	/// Parses a TOML document; missing keys take their defaults.
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}
}

//! Settings error types.

use serde_json::Value;
use thiserror::Error;

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while reading or updating settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The setting name is not one the engine knows about.
	#[error("invalid setting: {0}")]
	UnknownSetting(String),

	/// The value does not have the shape the setting requires.
	#[error("invalid value for setting '{name}': expected {expected}, got {value}")]
	InvalidValue {
		/// Setting name.
		name: String,
		/// Human readable description of the accepted shape.
		expected: &'static str,
		/// Rejected value.
		value: Value,
	},
}

impl ConfigError {
	pub(crate) fn invalid(name: &str, expected: &'static str, value: Value) -> Self {
		Self::InvalidValue {
			name: name.to_string(),
			expected,
			value,
		}
	}
}

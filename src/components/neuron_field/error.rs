//! Failure modes when starting a particle field.

use std::fmt;

/// Why a particle field could not be started or configured.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
	/// No drawing target: the canvas is missing or has no 2D context.
	InvalidSurface,
	/// The configuration cannot drive a simulation.
	InvalidConfig(String),
	/// Configuration JSON could not be parsed.
	Config(String),
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldError::InvalidSurface => write!(f, "drawing surface is unavailable"),
			FieldError::InvalidConfig(reason) => write!(f, "invalid field config: {reason}"),
			FieldError::Config(reason) => write!(f, "failed to parse field config: {reason}"),
		}
	}
}

impl std::error::Error for FieldError {}

impl From<serde_json::Error> for FieldError {
	fn from(e: serde_json::Error) -> Self {
		FieldError::Config(e.to_string())
	}
}

//! Field configuration: mode, particle budget, motion constants, and style.
//!
//! Configs deserialize from camelCase JSON with every field optional, so a
//! page can override just the parts it cares about:
//!
//! ```json
//! { "particleCount": 120, "connectDistance": 80, "style": { "color": "#00ffcc" } }
//! ```

use serde::Deserialize;

use super::error::FieldError;
use super::theme::{Color, FieldStyle};

/// How particles move each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldMode {
	/// Constant velocity, reflecting off the surface bounds.
	#[default]
	Ambient,
	/// Stationary until the pointer comes within `pointer_radius`.
	PointerReactive,
}

/// Everything needed to spawn and animate one field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
	pub particle_count: usize,
	pub mode: FieldMode,
	/// Maximum distance for connective lines; 0 disables them. Ambient only.
	pub connect_distance: f64,
	/// Upper bound for each velocity component, in pixels per tick.
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Pointer influence radius in pixels.
	pub pointer_radius: f64,
	/// Fraction of the pointer displacement applied per tick.
	pub pointer_strength: f64,
	pub style: FieldStyle,
}

impl FieldConfig {
	/// Background field used by the standalone neuron background.
	pub fn ambient() -> Self {
		Self {
			particle_count: 80,
			mode: FieldMode::Ambient,
			connect_distance: 100.0,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_max: 3.0,
			pointer_radius: 100.0,
			pointer_strength: 0.02,
			style: FieldStyle::neon(Color::CYAN),
		}
	}

	/// Denser background used behind the home and about pages.
	pub fn dense_ambient() -> Self {
		Self {
			particle_count: 100,
			..Self::ambient()
		}
	}

	/// Magenta overlay that shies away from the pointer.
	pub fn pointer_reactive() -> Self {
		Self {
			particle_count: 50,
			mode: FieldMode::PointerReactive,
			connect_distance: 0.0,
			style: FieldStyle::neon(Color::MAGENTA),
			..Self::ambient()
		}
	}

	/// Checks that the config can drive a simulation.
	pub fn validate(&self) -> Result<(), FieldError> {
		let invalid = |reason: &str| -> Result<(), FieldError> {
			Err(FieldError::InvalidConfig(reason.to_string()))
		};

		if self.particle_count == 0 {
			return invalid("particleCount must be greater than zero");
		}
		if !self.connect_distance.is_finite() || self.connect_distance < 0.0 {
			return invalid("connectDistance must be a finite value >= 0");
		}
		if !self.max_speed.is_finite() || self.max_speed < 0.0 {
			return invalid("maxSpeed must be a finite value >= 0");
		}
		if !(self.radius_min.is_finite() && self.radius_max.is_finite())
			|| self.radius_min <= 0.0
			|| self.radius_max < self.radius_min
		{
			return invalid("radius range must satisfy 0 < radiusMin <= radiusMax");
		}
		if !self.pointer_radius.is_finite() || self.pointer_radius < 0.0 {
			return invalid("pointerRadius must be a finite value >= 0");
		}
		if !self.pointer_strength.is_finite() || self.pointer_strength < 0.0 {
			return invalid("pointerStrength must be a finite value >= 0");
		}
		Ok(())
	}

	/// Whether the connective pass runs for this config.
	pub fn draws_connections(&self) -> bool {
		self.mode == FieldMode::Ambient && self.connect_distance > 0.0
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::ambient()
	}
}

/// Per-page field overrides, embedded as JSON in the host document.
///
/// A missing entry keeps its preset. A present entry is filled in from
/// [`FieldConfig::default`], so pointer overrides must state their `mode`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageFields {
	/// Heading shown over the fields and used as the document title.
	pub title: String,
	pub ambient: FieldConfig,
	pub pointer: FieldConfig,
}

impl Default for PageFields {
	fn default() -> Self {
		Self {
			title: "Portfolio".to_string(),
			ambient: FieldConfig::dense_ambient(),
			pointer: FieldConfig::pointer_reactive(),
		}
	}
}

impl PageFields {
	/// Parses and validates both configs.
	pub fn from_json(json: &str) -> Result<Self, FieldError> {
		let fields: PageFields = serde_json::from_str(json)?;
		fields.ambient.validate()?;
		fields.pointer.validate()?;
		Ok(fields)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn presets_are_valid() {
		for config in [
			FieldConfig::ambient(),
			FieldConfig::dense_ambient(),
			FieldConfig::pointer_reactive(),
		] {
			assert_eq!(config.validate(), Ok(()));
		}
	}

	#[test]
	fn pointer_preset_skips_connections() {
		assert!(!FieldConfig::pointer_reactive().draws_connections());
		assert!(FieldConfig::ambient().draws_connections());
	}

	#[test]
	fn zero_particles_rejected() {
		let config = FieldConfig {
			particle_count: 0,
			..FieldConfig::ambient()
		};
		assert!(matches!(
			config.validate(),
			Err(FieldError::InvalidConfig(_))
		));
	}

	#[test]
	fn negative_connect_distance_rejected() {
		let config = FieldConfig {
			connect_distance: -1.0,
			..FieldConfig::ambient()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn inverted_radius_range_rejected() {
		let config = FieldConfig {
			radius_min: 3.0,
			radius_max: 1.0,
			..FieldConfig::ambient()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let config: FieldConfig =
			serde_json::from_str(r#"{ "particleCount": 12, "mode": "pointerReactive" }"#).unwrap();
		assert_eq!(config.particle_count, 12);
		assert_eq!(config.mode, FieldMode::PointerReactive);
		assert_eq!(config.connect_distance, 100.0);
	}

	#[test]
	fn page_title_overrides() {
		let fields = PageFields::from_json(r#"{ "title": "Gitansh Vats" }"#).unwrap();
		assert_eq!(fields.title, "Gitansh Vats");
		assert_eq!(fields.ambient, FieldConfig::dense_ambient());
	}

	#[test]
	fn page_fields_parse_and_validate() {
		let fields = PageFields::from_json(r#"{ "ambient": { "particleCount": 30 } }"#).unwrap();
		assert_eq!(fields.ambient.particle_count, 30);
		assert_eq!(fields.pointer, FieldConfig::pointer_reactive());
		assert_eq!(fields.title, "Portfolio");

		assert!(matches!(
			PageFields::from_json(r#"{ "pointer": { "particleCount": 0 } }"#),
			Err(FieldError::InvalidConfig(_))
		));
		assert!(matches!(
			PageFields::from_json("{ not json"),
			Err(FieldError::Config(_))
		));
	}
}

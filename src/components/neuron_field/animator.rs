//! Lifecycle of one running particle field.
//!
//! A [`ParticleField`] owns the simulation state and its drawing surface.
//! The host calls [`ParticleField::frame`] once per animation tick and keeps
//! scheduling ticks only while it returns `true`. After [`ParticleField::stop`]
//! a frame draws nothing.

use log::{debug, info};
use rand::Rng;

use super::config::{FieldConfig, FieldMode};
use super::error::FieldError;
use super::render;
use super::simulation::FieldState;
use super::surface::DrawSurface;
use super::types::{Point, SurfaceSize};

pub struct ParticleField<S: DrawSurface> {
	state: FieldState,
	config: FieldConfig,
	surface: S,
	running: bool,
	frames: u64,
}

impl<S: DrawSurface> ParticleField<S> {
	/// Spawns `config.particle_count` particles across the surface's current size.
	///
	/// Fails with [`FieldError::InvalidSurface`] when there is no surface and
	/// [`FieldError::InvalidConfig`] when the config cannot be simulated.
	pub fn start(
		surface: Option<S>,
		config: FieldConfig,
		rng: &mut impl Rng,
	) -> Result<Self, FieldError> {
		let surface = surface.ok_or(FieldError::InvalidSurface)?;
		config.validate()?;

		let size = surface.size();
		let state = FieldState::new(&config, size, rng);
		info!(
			"neuron-field: started {:?} field with {} particles on {}x{}",
			config.mode,
			state.particles.len(),
			size.width,
			size.height
		);

		Ok(Self {
			state,
			config,
			surface,
			running: true,
			frames: 0,
		})
	}

	/// Runs one tick: clear, step, draw. Returns whether the field is still running.
	pub fn frame(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.state.tick(&self.config);
		render::render(&self.state, &self.config, &mut self.surface);
		self.frames += 1;
		true
	}

	/// Resizes the backing surface to CSS dimensions times the pixel ratio.
	pub fn resize(&mut self, css_width: f64, css_height: f64, pixel_ratio: f64) {
		let size = SurfaceSize::scaled(css_width, css_height, pixel_ratio);
		self.surface.set_size(size);
		self.state.resize(size);
		debug!("neuron-field: resized to {}x{}", size.width, size.height);
	}

	/// Records the pointer in surface pixels. Ignored by ambient fields.
	pub fn set_pointer(&mut self, pointer: Option<Point>) {
		if self.config.mode == FieldMode::PointerReactive {
			self.state.pointer = pointer.filter(|p| p.is_finite());
		}
	}

	/// Stops the field. Further frames draw nothing. Safe to call repeatedly.
	pub fn stop(&mut self) {
		if self.running {
			self.running = false;
			info!("neuron-field: stopped after {} frames", self.frames);
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn state(&self) -> &FieldState {
		&self.state
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}

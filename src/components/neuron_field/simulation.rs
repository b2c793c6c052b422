//! Particle field simulation.
//!
//! The state is a fixed vector of [`Particle`] records. Each tick maps that
//! vector through pure step functions into a new one, so the stepping rules
//! can be tested without a surface or a browser.

use rand::Rng;

use super::config::{FieldConfig, FieldMode};
use super::grid::SpatialGrid;
use super::types::{Connection, Particle, Point, SurfaceSize};

/// Above this many particles the connective pass buckets into a grid
/// instead of checking every pair.
pub const GRID_THRESHOLD: usize = 256;

/// Spawns one particle uniformly within `surface`.
pub fn spawn(config: &FieldConfig, surface: SurfaceSize, rng: &mut impl Rng) -> Particle {
	let position = Point::new(
		rng.r#gen::<f64>() * surface.width,
		rng.r#gen::<f64>() * surface.height,
	);
	let radius = config.radius_min + rng.r#gen::<f64>() * (config.radius_max - config.radius_min);
	let velocity = match config.mode {
		FieldMode::Ambient => {
			let speed = config.max_speed;
			Some(Point::new(
				rng.r#gen::<f64>() * 2.0 * speed - speed,
				rng.r#gen::<f64>() * 2.0 * speed - speed,
			))
		}
		FieldMode::PointerReactive => None,
	};
	Particle {
		position,
		velocity,
		radius,
	}
}

/// Moves an ambient particle one tick and reflects each axis that left the box.
///
/// Reflection flips velocity only; the particle may overshoot by one step.
pub fn step_ambient(particle: &Particle, surface: SurfaceSize) -> Particle {
	let Some(velocity) = particle.velocity else {
		return *particle;
	};
	let position = particle.position + velocity;
	let reflect = |pos: f64, v: f64, max: f64| if pos < 0.0 || pos > max { -v } else { v };

	Particle {
		position,
		velocity: Some(Point::new(
			reflect(position.x, velocity.x, surface.width),
			reflect(position.y, velocity.y, surface.height),
		)),
		radius: particle.radius,
	}
}

/// Pushes a particle away from the pointer when it is within `radius`.
///
/// `strength` is the fraction of the particle-to-pointer displacement applied
/// this tick. A particle sitting on the pointer has zero displacement and stays put.
pub fn step_pointer(particle: &Particle, pointer: Option<Point>, radius: f64, strength: f64) -> Particle {
	let Some(pointer) = pointer else {
		return *particle;
	};
	let displacement = pointer - particle.position;
	if displacement.length() < radius {
		particle.with_position(particle.position - displacement * strength)
	} else {
		*particle
	}
}

/// Opacity of a connective line: 1 at distance 0, falling linearly to 0 at `max`.
pub fn connection_opacity(distance: f64, max: f64) -> f64 {
	if max <= 0.0 {
		return 0.0;
	}
	(1.0 - distance / max).clamp(0.0, 1.0)
}

/// Mutable simulation record owned by one running field.
#[derive(Clone, Debug)]
pub struct FieldState {
	pub particles: Vec<Particle>,
	pub surface: SurfaceSize,
	pub pointer: Option<Point>,
}

impl FieldState {
	pub fn new(config: &FieldConfig, surface: SurfaceSize, rng: &mut impl Rng) -> Self {
		let particles = (0..config.particle_count)
			.map(|_| spawn(config, surface, rng))
			.collect();
		Self {
			particles,
			surface,
			pointer: None,
		}
	}

	/// Builds a state from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, surface: SurfaceSize) -> Self {
		Self {
			particles,
			surface,
			pointer: None,
		}
	}

	/// Advances every particle one tick according to `config.mode`.
	pub fn tick(&mut self, config: &FieldConfig) {
		let surface = self.surface;
		let pointer = self.pointer;
		self.particles = match config.mode {
			FieldMode::Ambient => self
				.particles
				.iter()
				.map(|p| step_ambient(p, surface))
				.collect(),
			FieldMode::PointerReactive => self
				.particles
				.iter()
				.map(|p| step_pointer(p, pointer, config.pointer_radius, config.pointer_strength))
				.collect(),
		};
	}

	/// Updates the surface size. Particle positions are not clamped.
	pub fn resize(&mut self, surface: SurfaceSize) {
		self.surface = surface;
	}

	/// All distinct particle pairs closer than `max`, ordered by `(a, b)`.
	pub fn connections(&self, max: f64) -> Vec<Connection> {
		let mut out = Vec::new();
		if max <= 0.0 {
			return out;
		}
		let mut push = |a: usize, b: usize, distance: f64| {
			out.push(Connection {
				a,
				b,
				opacity: connection_opacity(distance, max),
			});
		};

		if self.particles.len() > GRID_THRESHOLD {
			let positions: Vec<Point> = self.particles.iter().map(|p| p.position).collect();
			SpatialGrid::new(&positions, max).for_each_pair(&positions, &mut push);
			out.sort_unstable_by_key(|c| (c.a, c.b));
		} else {
			for (i, p) in self.particles.iter().enumerate() {
				for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
					let distance = p.position.distance(q.position);
					if distance < max {
						push(i, j, distance);
					}
				}
			}
		}
		out
	}
}

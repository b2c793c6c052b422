//! Drives `ParticleField` through a recording surface.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use neuron_field::{
	Color, DrawSurface, FieldConfig, FieldError, FieldMode, FieldState, Particle, ParticleField,
	Point, SurfaceSize, render,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug, PartialEq)]
enum Op {
	Clear,
	Circle { center: Point, radius: f64 },
	Line { from: Point, to: Point, alpha: f64 },
}

struct RecordingSurface {
	size: SurfaceSize,
	ops: Vec<Op>,
}

impl RecordingSurface {
	fn new(width: f64, height: f64) -> Self {
		Self {
			size: SurfaceSize::new(width, height),
			ops: Vec::new(),
		}
	}

	fn lines(&self) -> Vec<&Op> {
		self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
	}

	fn circles(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count()
	}
}

impl DrawSurface for RecordingSurface {
	fn size(&self) -> SurfaceSize {
		self.size
	}

	fn set_size(&mut self, size: SurfaceSize) {
		self.size = size;
	}

	fn clear(&mut self) {
		self.ops.push(Op::Clear);
	}

	fn fill_glow_circle(&mut self, center: Point, radius: f64, _: Color, _: Color, _: f64) {
		self.ops.push(Op::Circle { center, radius });
	}

	fn stroke_line(&mut self, from: Point, to: Point, color: Color, _: f64) {
		self.ops.push(Op::Line {
			from,
			to,
			alpha: color.a,
		});
	}
}

fn rng() -> ChaCha8Rng {
	ChaCha8Rng::seed_from_u64(2024)
}

fn start(config: FieldConfig) -> ParticleField<RecordingSurface> {
	ParticleField::start(Some(RecordingSurface::new(800.0, 600.0)), config, &mut rng()).unwrap()
}

#[test]
fn start_without_surface_fails() {
	let result = ParticleField::<RecordingSurface>::start(None, FieldConfig::ambient(), &mut rng());
	assert!(matches!(result, Err(FieldError::InvalidSurface)));
}

#[test]
fn start_with_zero_particles_fails() {
	let config = FieldConfig {
		particle_count: 0,
		..FieldConfig::ambient()
	};
	let result = ParticleField::start(Some(RecordingSurface::new(10.0, 10.0)), config, &mut rng());
	assert!(matches!(result, Err(FieldError::InvalidConfig(_))));
}

#[test]
fn start_spawns_within_surface() {
	let field = start(FieldConfig::dense_ambient());
	assert_eq!(field.state().particles.len(), 100);
	assert_eq!(field.state().surface, SurfaceSize::new(800.0, 600.0));
	for p in &field.state().particles {
		assert!((0.0..800.0).contains(&p.position.x));
		assert!((0.0..600.0).contains(&p.position.y));
	}
	assert!(field.surface().ops.is_empty(), "nothing drawn before the first frame");
}

#[test]
fn frame_clears_then_draws_every_particle() {
	let mut field = start(FieldConfig::ambient());
	assert!(field.frame());
	let ops = &field.surface().ops;
	assert_eq!(ops[0], Op::Clear);
	assert_eq!(field.surface().circles(), 80);
	for op in ops {
		if let Op::Circle { center, radius } = op {
			assert!(center.is_finite());
			assert!((1.0..3.0).contains(radius));
		}
	}
	// Lines come after every disc.
	let first_line = ops.iter().position(|op| matches!(op, Op::Line { .. }));
	let last_circle = ops.iter().rposition(|op| matches!(op, Op::Circle { .. }));
	if let (Some(line), Some(circle)) = (first_line, last_circle) {
		assert!(line > circle);
	}
}

#[test]
fn stopped_field_draws_nothing() {
	let mut field = start(FieldConfig::ambient());
	field.frame();
	let drawn = field.surface().ops.len();

	field.stop();
	field.stop();
	assert!(!field.is_running());
	for _ in 0..120 {
		assert!(!field.frame());
	}
	assert_eq!(field.surface().ops.len(), drawn);
	assert_eq!(field.frames(), 1);
}

#[test]
fn particle_count_is_constant_across_frames() {
	let mut field = start(FieldConfig::ambient());
	for _ in 0..300 {
		field.frame();
	}
	assert_eq!(field.state().particles.len(), 80);
}

#[test]
fn two_particles_at_fifty_draw_one_half_opacity_line() {
	let config = FieldConfig {
		particle_count: 2,
		connect_distance: 100.0,
		..FieldConfig::ambient()
	};
	let still = |x: f64, y: f64| Particle {
		position: Point::new(x, y),
		velocity: Some(Point::ZERO),
		radius: 2.0,
	};
	let state = FieldState::from_particles(
		vec![still(200.0, 200.0), still(250.0, 200.0)],
		SurfaceSize::new(800.0, 600.0),
	);
	let mut surface = RecordingSurface::new(800.0, 600.0);
	render(&state, &config, &mut surface);

	assert_eq!(surface.circles(), 2);
	let lines = surface.lines();
	assert_eq!(lines.len(), 1);
	match lines[0] {
		Op::Line { from, to, alpha } => {
			assert_eq!(*from, Point::new(200.0, 200.0));
			assert_eq!(*to, Point::new(250.0, 200.0));
			assert!((alpha - 0.5).abs() < 1e-12);
		}
		_ => unreachable!(),
	}
}

#[test]
fn pointer_fields_draw_no_lines() {
	let mut field = start(FieldConfig {
		connect_distance: 100.0,
		..FieldConfig::pointer_reactive()
	});
	field.frame();
	assert!(field.surface().lines().is_empty());
	assert_eq!(field.surface().circles(), 50);
}

#[test]
fn resize_updates_surface_without_clamping() {
	let mut field = start(FieldConfig::ambient());
	let before: Vec<Point> = field.state().particles.iter().map(|p| p.position).collect();

	field.resize(400.0, 300.0, 1.0);
	assert_eq!(field.state().surface, SurfaceSize::new(400.0, 300.0));
	assert_eq!(field.surface().size(), SurfaceSize::new(400.0, 300.0));
	let after: Vec<Point> = field.state().particles.iter().map(|p| p.position).collect();
	assert_eq!(before, after);

	field.frame();
	assert_eq!(field.state().surface, SurfaceSize::new(400.0, 300.0));
	assert!(field.state().particles.iter().any(|p| p.position.x > 400.0 || p.position.y > 300.0));
}

#[test]
fn resize_scales_by_pixel_ratio() {
	let mut field = start(FieldConfig::ambient());
	field.resize(400.0, 300.0, 2.0);
	assert_eq!(field.state().surface, SurfaceSize::new(800.0, 600.0));
}

#[test]
fn pointer_only_moves_nearby_particles() {
	let mut field = start(FieldConfig::pointer_reactive());
	let pointer = Point::new(400.0, 300.0);
	field.set_pointer(Some(pointer));
	let before = field.state().particles.clone();
	field.frame();
	for (b, a) in before.iter().zip(&field.state().particles) {
		let d = b.position.distance(pointer);
		if d >= 100.0 || d == 0.0 {
			assert_eq!(a.position, b.position);
		} else {
			assert!(a.position.distance(pointer) > d, "pushed away from the pointer");
		}
	}
}

#[test]
fn pointer_ignored_by_ambient_fields() {
	let mut field = start(FieldConfig::ambient());
	field.set_pointer(Some(Point::new(1.0, 1.0)));
	assert_eq!(field.state().pointer, None);
	assert_eq!(field.config().mode, FieldMode::Ambient);
}

#[test]
fn non_finite_pointer_is_dropped() {
	let mut field = start(FieldConfig::pointer_reactive());
	field.set_pointer(Some(Point::new(f64::NAN, 0.0)));
	assert_eq!(field.state().pointer, None);
}

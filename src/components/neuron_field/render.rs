//! Per-frame drawing of a particle field.
//!
//! Draw order:
//! 1. Clear
//! 2. Particle discs with glow
//! 3. Connective lines (ambient fields only)

use super::config::FieldConfig;
use super::simulation::FieldState;
use super::surface::DrawSurface;

/// Draws the whole field onto `surface`.
pub fn render(state: &FieldState, config: &FieldConfig, surface: &mut impl DrawSurface) {
	surface.clear();
	draw_particles(state, config, surface);
	if config.draws_connections() {
		draw_connections(state, config, surface);
	}
}

fn draw_particles(state: &FieldState, config: &FieldConfig, surface: &mut impl DrawSurface) {
	let style = &config.style;
	for p in &state.particles {
		surface.fill_glow_circle(
			p.position,
			p.radius,
			style.color,
			style.glow_color,
			style.glow_blur,
		);
	}
}

fn draw_connections(state: &FieldState, config: &FieldConfig, surface: &mut impl DrawSurface) {
	let style = &config.style;
	for line in state.connections(config.connect_distance) {
		let (from, to) = (
			state.particles[line.a].position,
			state.particles[line.b].position,
		);
		surface.stroke_line(
			from,
			to,
			style.color.with_alpha(style.color.a * line.opacity),
			style.line_width,
		);
	}
}

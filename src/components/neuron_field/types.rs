//! Plain value types shared by the simulation, renderer, and component.

use std::ops::{Add, Mul, Sub};

/// A 2D coordinate or displacement in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	pub fn distance(self, other: Point) -> f64 {
		(self - other).length()
	}

	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

/// A single particle. Ambient particles carry a velocity; pointer-reactive
/// particles have none and only move when displaced by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub position: Point,
	pub velocity: Option<Point>,
	/// Disc radius, fixed at spawn time.
	pub radius: f64,
}

impl Particle {
	pub fn with_position(self, position: Point) -> Self {
		Self { position, ..self }
	}
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

impl SurfaceSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Scales CSS pixel dimensions by the device pixel ratio, truncated to the
	/// whole pixels a canvas backing store can hold.
	pub fn scaled(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
		let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		let whole = |v: f64| if v.is_finite() { (v * ratio).floor().max(0.0) } else { 0.0 };
		Self::new(whole(css_width), whole(css_height))
	}
}

/// A connective line between two particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	/// Line opacity in [0, 1], fading out with distance.
	pub opacity: f64,
}

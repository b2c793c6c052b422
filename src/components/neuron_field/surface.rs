//! Drawing surface abstraction and its HTML canvas implementation.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::FieldError;
use super::theme::Color;
use super::types::{Point, SurfaceSize};

/// The immediate-mode primitives a particle field draws with.
pub trait DrawSurface {
	/// Current pixel dimensions.
	fn size(&self) -> SurfaceSize;
	/// Resets the backing store to `size` pixels.
	fn set_size(&mut self, size: SurfaceSize);
	/// Clears the whole surface.
	fn clear(&mut self);
	/// Fills a disc with a blurred shadow around it.
	fn fill_glow_circle(&mut self, center: Point, radius: f64, color: Color, glow: Color, blur: f64);
	/// Strokes a straight line; `color.a` carries the line opacity.
	fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);
}

/// A `<canvas>` element with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2D context of `canvas`.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(FieldError::InvalidSurface)?;
		Ok(Self { canvas, ctx })
	}
}

impl DrawSurface for CanvasSurface {
	fn size(&self) -> SurfaceSize {
		SurfaceSize::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_size(&mut self, size: SurfaceSize) {
		// Assigning width/height also resets the context transform and styles.
		self.canvas.set_width(size.width.max(0.0) as u32);
		self.canvas.set_height(size.height.max(0.0) as u32);
	}

	fn clear(&mut self) {
		let size = self.size();
		self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_glow_circle(&mut self, center: Point, radius: f64, color: Color, glow: Color, blur: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_shadow_color(&glow.to_css());
		self.ctx.set_shadow_blur(blur);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}
}

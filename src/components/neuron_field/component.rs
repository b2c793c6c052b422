//! Leptos component hosting one particle field on a canvas.
//!
//! On mount the component sizes the canvas to the viewport (scaled by the
//! device pixel ratio), starts a [`ParticleField`], and drives it from a
//! `requestAnimationFrame` loop. Window `resize` (and `mousemove` for
//! pointer-reactive fields) are wired through [`WindowListener`] guards.
//! Unmounting stops the field, cancels the pending frame, and drops the
//! listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::animator::ParticleField;
use super::config::{FieldConfig, FieldMode};
use super::error::FieldError;
use super::listener::WindowListener;
use super::surface::{CanvasSurface, DrawSurface};
use super::types::{Point, SurfaceSize};

type SharedField = Rc<RefCell<Option<ParticleField<CanvasSurface>>>>;

/// Everything a mounted field holds on to, shared between the frame loop,
/// the event callbacks, and cleanup.
#[derive(Clone, Default)]
struct FieldRuntime {
	field: SharedField,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame_id: Rc<Cell<Option<i32>>>,
	listeners: Rc<RefCell<Vec<WindowListener>>>,
}

impl FieldRuntime {
	fn is_mounted(&self) -> bool {
		self.field.borrow().is_some()
	}

	fn mount(&self, canvas: HtmlCanvasElement, config: FieldConfig) -> Result<(), FieldError> {
		let window = web_sys::window().ok_or(FieldError::InvalidSurface)?;
		let mut surface = CanvasSurface::new(canvas.clone())?;
		let (w, h) = viewport_size(&window);
		surface.set_size(SurfaceSize::scaled(w, h, window.device_pixel_ratio()));

		let mode = config.mode;
		let mut rng = ChaCha8Rng::from_entropy();
		let field = ParticleField::start(Some(surface), config, &mut rng)?;
		*self.field.borrow_mut() = Some(field);

		let field_resize = self.field.clone();
		let listener = WindowListener::new(&window, "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (w, h) = viewport_size(&win);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(w, h, win.device_pixel_ratio());
			}
		});
		self.listen(listener, "resize");

		if mode == FieldMode::PointerReactive {
			let field_pointer = self.field.clone();
			let listener = WindowListener::new(&window, "mousemove", move |ev| {
				let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
					return;
				};
				let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
				let rect = canvas.get_bounding_client_rect();
				let pointer = Point::new(
					(ev.client_x() as f64 - rect.left()) * ratio,
					(ev.client_y() as f64 - rect.top()) * ratio,
				);
				if let Some(ref mut f) = *field_pointer.borrow_mut() {
					f.set_pointer(Some(pointer));
				}
			});
			self.listen(listener, "mousemove");
		}

		let (field_anim, animate_inner, frame_anim) =
			(self.field.clone(), self.animate.clone(), self.frame_id.clone());
		*self.animate.borrow_mut() = Some(Closure::new(move || {
			let running = field_anim
				.borrow_mut()
				.as_mut()
				.is_some_and(|f| f.frame());
			if !running {
				frame_anim.set(None);
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				frame_anim.set(
					web_sys::window()
						.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()),
				);
			}
		}));
		if let Some(ref cb) = *self.animate.borrow() {
			self.frame_id
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
		Ok(())
	}

	fn listen(&self, listener: Option<WindowListener>, event: &str) {
		match listener {
			Some(l) => self.listeners.borrow_mut().push(l),
			None => warn!("neuron-field: could not listen for {} events", event),
		}
	}

	fn teardown(&self) {
		if let Some(ref mut f) = *self.field.borrow_mut() {
			f.stop();
		}
		if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.listeners.borrow_mut().clear();
		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Renders an animated particle field on a viewport-filling canvas.
///
/// The canvas is fixed behind page content and ignores pointer input itself;
/// pointer-reactive fields listen on the window instead. Stack several
/// fields with `z_index`.
#[component]
pub fn NeuronField(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = 0)] z_index: i32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime = FieldRuntime::default();
	let runtime_init = runtime.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime_init.is_mounted() {
			return;
		}
		if let Err(e) = runtime_init.mount(canvas.into(), config.clone()) {
			error!("neuron-field: failed to start: {}", e);
		}
	});

	let runtime_cleanup = SendWrapper::new(runtime);
	on_cleanup(move || runtime_cleanup.teardown());

	let style = format!(
		"position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: {z_index};"
	);

	view! {
		<canvas node_ref=canvas_ref class="neuron-field-canvas" style=style />
	}
}

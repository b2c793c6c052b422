//! neuron-field: animated particle-network backgrounds for a portfolio site.
//!
//! This crate provides a WASM canvas component that draws drifting,
//! interconnected particles behind page content, plus a pointer-reactive
//! overlay that scatters away from the mouse.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to turn on its `js` backend for wasm32.
use getrandom as _;

pub mod components;

pub use components::neuron_field::{
	Color, DrawSurface, FieldConfig, FieldError, FieldMode, FieldState, FieldStyle, NeuronField,
	PageFields, Particle, ParticleField, Point, SurfaceSize, render,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neuron-field: logging initialized");
}

/// Load field overrides from a script element with id="field-config".
/// Expected format: JSON with optional `title`, `ambient` and `pointer` entries.
fn load_page_fields() -> Option<PageFields> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageFields::from_json(&json_text) {
		Ok(fields) => {
			info!(
				"neuron-field: loaded config ({} ambient, {} pointer particles)",
				fields.ambient.particle_count, fields.pointer.particle_count
			);
			Some(fields)
		}
		Err(e) => {
			warn!("neuron-field: ignoring field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Layers a pointer-reactive field over an ambient network background,
/// with a title overlay on top.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PageFields {
		title,
		ambient,
		pointer,
	} = load_page_fields().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="neuron-page">
			<NeuronField config=ambient z_index=0 />
			<NeuronField config=pointer z_index=1 />
			<div class="neuron-overlay" style="position: relative; z-index: 2;">
				<h1>{title}</h1>
			</div>
		</main>
	}
}

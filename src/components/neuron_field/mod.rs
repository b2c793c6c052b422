//! Animated particle-network backgrounds.
//!
//! Renders a field of glowing particles on an HTML canvas in one of two modes:
//! - **Ambient**: particles drift at constant velocity, bounce off the canvas
//!   edges, and are joined by lines that fade with distance
//! - **Pointer-reactive**: particles sit still until the pointer comes close,
//!   then get pushed away from it
//!
//! The simulation itself ([`FieldState`], [`ParticleField`]) only talks to a
//! [`DrawSurface`], so it runs and is tested without a browser.
//!
//! # Example
//!
//! ```ignore
//! use neuron_field::{FieldConfig, NeuronField};
//!
//! view! {
//!     <NeuronField config=FieldConfig::dense_ambient() />
//!     <NeuronField config=FieldConfig::pointer_reactive() z_index=1 />
//! }
//! ```

mod animator;
mod component;
mod config;
mod error;
mod grid;
mod listener;
mod render;
pub mod simulation;
mod surface;
pub mod theme;
mod types;

pub use animator::ParticleField;
pub use component::NeuronField;
pub use config::{FieldConfig, FieldMode, PageFields};
pub use error::FieldError;
pub use render::render;
pub use simulation::{FieldState, GRID_THRESHOLD};
pub use surface::{CanvasSurface, DrawSurface};
pub use theme::{Color, FieldStyle};
pub use types::{Connection, Particle, Point, SurfaceSize};

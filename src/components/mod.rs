//! UI components.

pub mod neuron_field;

//! UI component descriptors shared by the predictive engine and the renderer.
pub mod types;

pub use types::*;

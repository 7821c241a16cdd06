//! Question formset WASM API
//!
//! - `helpers`: serialization across the JS boundary
//! - `formset`: wiring entry points and the active controller

pub mod helpers;
pub mod formset;

pub use formset::{bootstrap, formset_snapshot, init_formset};

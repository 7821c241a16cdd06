//! Models module for the question formset
//!
//! Configuration, management-form values and the formset state. Nothing
//! here touches the DOM.

pub mod config;
pub mod formset;
pub mod management;

// Re-export commonly used types
pub use config::FormsetConfig;
pub use formset::{BlockId, FormsetState, Removal, SubForm};
pub use management::{format_counter, parse_counter, FormLimits};

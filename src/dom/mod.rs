//! DOM adapter for the formset
//!
//! Thin layer between the page and the pure state in `models::formset`.

pub mod controller;
pub mod elements;

pub use controller::FormsetController;
pub use elements::RequiredElements;

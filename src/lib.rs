//! Question Formset WASM Module
//!
//! Adds and removes question sub-forms on a server-rendered formset page,
//! keeping the management form's TOTAL_FORMS counter in step.

pub mod api;
pub mod dom;
pub mod errors;
pub mod models;
pub mod template;

// Re-export commonly used types
pub use dom::FormsetController;
pub use errors::FormsetError;
pub use models::*;
pub use template::FormTemplate;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
    }

    log::info!("Question formset WASM module initialized");
    api::bootstrap();
}

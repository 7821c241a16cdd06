//! Error types for formset management
//!
//! Every failure is recoverable: handlers log the error and leave the page
//! untouched rather than throwing into JavaScript.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::formset::BlockId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormsetError {
    /// A required top-level element is not on the page
    #[error("Required element not found in the DOM: {0}")]
    MissingElement(String),

    /// The TOTAL_FORMS counter does not hold a base-10 integer
    #[error("Counter value is not a valid integer: {0:?}")]
    InvalidCounter(String),

    /// Adding would exceed MAX_NUM_FORMS
    #[error("Cannot add form: maximum of {max} forms reached")]
    LimitReached { max: u32 },

    /// Deleting would drop below MIN_NUM_FORMS
    #[error("Cannot delete form: minimum of {min} forms required")]
    MinimumReached { min: u32 },

    /// The block is not tracked by this formset
    #[error("Unknown form block: {0}")]
    UnknownBlock(BlockId),

    /// A browser API call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for FormsetError {
    fn from(value: JsValue) -> Self {
        FormsetError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FormsetError> for JsValue {
    fn from(err: FormsetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

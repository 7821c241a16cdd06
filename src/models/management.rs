//! Management-form values
//!
//! The server reads `<prefix>-TOTAL_FORMS` on submission to know how many
//! sub-forms to process. Values travel as text in hidden inputs.

use serde::{Deserialize, Serialize};

use crate::errors::FormsetError;

/// Parse counter text as a base-10 unsigned integer
pub fn parse_counter(text: &str) -> Result<u32, FormsetError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| FormsetError::InvalidCounter(text.to_string()))
}

pub fn format_counter(value: u32) -> String {
    value.to_string()
}

/// Bounds from MIN_NUM_FORMS / MAX_NUM_FORMS
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormLimits {
    pub min: u32,
    pub max: Option<u32>,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl FormLimits {
    pub fn unbounded() -> Self {
        Self { min: 0, max: None }
    }

    /// Build limits from the raw field text, ignoring fields that are absent
    /// or unparseable
    pub fn from_fields(min: Option<&str>, max: Option<&str>) -> Self {
        let parse = |field: &str, text: Option<&str>| {
            text.and_then(|t| match parse_counter(t) {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", field, e);
                    None
                }
            })
        };

        Self {
            min: parse("MIN_NUM_FORMS", min).unwrap_or(0),
            max: parse("MAX_NUM_FORMS", max),
        }
    }

    pub fn check_add(&self, total: u32) -> Result<(), FormsetError> {
        match self.max {
            Some(max) if total >= max => Err(FormsetError::LimitReached { max }),
            _ => Ok(()),
        }
    }

    pub fn check_delete(&self, total: u32) -> Result<(), FormsetError> {
        if self.min > 0 && total <= self.min {
            return Err(FormsetError::MinimumReached { min: self.min });
        }
        Ok(())
    }
}

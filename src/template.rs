//! Empty-form template
//!
//! The server renders one empty sub-form with a placeholder token wherever
//! the form index belongs, e.g. `name="questions-__prefix__-text"`.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<prefix>-<index>-<field>` as rendered by formset field names
static FIELD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<prefix>.+)-(?P<index>\d+)-(?P<field>[^-]+)$").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormTemplate {
    markup: String,
    placeholder: String,
}

impl FormTemplate {
    pub fn new(markup: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Markup for the form at `index`, every placeholder substituted
    pub fn render(&self, index: u32) -> String {
        if self.placeholder.is_empty() {
            return self.markup.clone();
        }
        self.markup.replace(&self.placeholder, &index.to_string())
    }
}

/// Extract the form index from a field name belonging to `prefix`
pub fn field_index(name: &str, prefix: &str) -> Option<u32> {
    let caps = FIELD_NAME.captures(name)?;
    if &caps["prefix"] != prefix {
        return None;
    }
    caps["index"].parse().ok()
}

//! Formset configuration
//!
//! Names the DOM contract shared with the server-rendered page. The
//! defaults match the quiz question formset markup.

use serde::{Deserialize, Serialize};

/// Identifiers and class markers the controller looks up on the page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormsetConfig {
    /// Formset prefix used in management-form field names
    pub prefix: String,

    /// Id of the element holding the sub-form blocks
    pub container_id: String,

    /// Id of the add control
    pub add_button_id: String,

    /// Id of the element whose inner markup is the empty-form template
    pub template_id: String,

    /// Class marking each sub-form block
    pub form_class: String,

    /// Class marking the delete control inside a block
    pub delete_class: String,

    /// Token replaced by the form index in the template
    pub placeholder: String,

    /// Honor MIN_NUM_FORMS / MAX_NUM_FORMS when the page renders them; off
    /// by default so adds and deletes always go through
    pub enforce_limits: bool,
}

impl Default for FormsetConfig {
    fn default() -> Self {
        Self {
            prefix: "questions".to_string(),
            container_id: "questions".to_string(),
            add_button_id: "add-question-btn".to_string(),
            template_id: "empty-form-template".to_string(),
            form_class: "question-form".to_string(),
            delete_class: "delete-question-btn".to_string(),
            placeholder: "__prefix__".to_string(),
            enforce_limits: false,
        }
    }
}

impl FormsetConfig {
    /// Parse a config from JSON text; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Name attribute of a management-form field, e.g. `questions-TOTAL_FORMS`
    pub fn management_field_name(&self, field: &str) -> String {
        format!("{}-{}", self.prefix, field)
    }

    fn input_selector(&self, field: &str) -> String {
        format!("input[name=\"{}\"]", self.management_field_name(field))
    }

    pub fn total_forms_selector(&self) -> String {
        self.input_selector("TOTAL_FORMS")
    }

    pub fn min_forms_selector(&self) -> String {
        self.input_selector("MIN_NUM_FORMS")
    }

    pub fn max_forms_selector(&self) -> String {
        self.input_selector("MAX_NUM_FORMS")
    }

    pub fn form_selector(&self) -> String {
        format!(".{}", self.form_class)
    }

    pub fn delete_selector(&self) -> String {
        format!(".{}", self.delete_class)
    }
}

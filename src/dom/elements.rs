//! Page element lookup
//!
//! Finds the four elements the formset cannot work without and the
//! optional management-form limit fields.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::errors::FormsetError;
use crate::models::config::FormsetConfig;
use crate::models::management::FormLimits;

/// Elements every formset page must render
pub struct RequiredElements {
    pub container: Element,
    pub add_button: Element,
    pub counter: HtmlInputElement,
    pub template_markup: String,
}

impl RequiredElements {
    /// Look up all required elements, naming every one that is missing
    pub fn locate(document: &Document, config: &FormsetConfig) -> Result<Self, FormsetError> {
        let container = document.get_element_by_id(&config.container_id);
        let add_button = document.get_element_by_id(&config.add_button_id);
        let template = document.get_element_by_id(&config.template_id);
        let counter = find_input(document, &config.total_forms_selector())?;

        match (container, add_button, counter, template) {
            (Some(container), Some(add_button), Some(counter), Some(template)) => Ok(Self {
                container,
                add_button,
                counter,
                template_markup: template.inner_html(),
            }),
            (container, add_button, counter, template) => {
                let mut missing = Vec::new();
                if container.is_none() {
                    missing.push(format!("container #{}", config.container_id));
                }
                if add_button.is_none() {
                    missing.push(format!("add control #{}", config.add_button_id));
                }
                if counter.is_none() {
                    missing.push(format!("counter {}", config.total_forms_selector()));
                }
                if template.is_none() {
                    missing.push(format!("template #{}", config.template_id));
                }
                Err(FormsetError::MissingElement(missing.join(", ")))
            }
        }
    }
}

fn find_input(document: &Document, selector: &str) -> Result<Option<HtmlInputElement>, FormsetError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()))
}

/// Read MIN_NUM_FORMS / MAX_NUM_FORMS if the page renders them
pub fn read_limits(document: &Document, config: &FormsetConfig) -> Result<FormLimits, FormsetError> {
    if !config.enforce_limits {
        return Ok(FormLimits::unbounded());
    }
    let min = find_input(document, &config.min_forms_selector())?.map(|i| i.value());
    let max = find_input(document, &config.max_forms_selector())?.map(|i| i.value());
    Ok(FormLimits::from_fields(min.as_deref(), max.as_deref()))
}

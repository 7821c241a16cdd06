//! Formset entry points
//!
//! Wires the page once its DOM is parsed and keeps the active controller
//! alive for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::api::helpers::{deserialize, serialize};
use crate::dom::FormsetController;
use crate::errors::FormsetError;
use crate::models::config::FormsetConfig;

thread_local! {
    static ACTIVE: RefCell<Option<Rc<FormsetController>>> = const { RefCell::new(None) };
}

fn document() -> Result<Document, FormsetError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FormsetError::Dom("no document available".to_string()))
}

/// Wire the formset on the current page and make it the active controller
///
/// A previously active controller is dropped, which disables its handlers.
pub fn attach(config: FormsetConfig) -> Result<Rc<FormsetController>, FormsetError> {
    let controller = FormsetController::attach(&document()?, config)?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(Rc::clone(&controller)));
    Ok(controller)
}

fn attach_default() {
    if let Err(e) = attach(FormsetConfig::default()) {
        log::error!("{}", e);
    }
}

/// Wire with the default config as soon as the DOM is parsed
pub fn bootstrap() {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    if document.ready_state() != "loading" {
        attach_default();
        return;
    }

    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_: Event| attach_default());
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("{}", FormsetError::from(e));
        return;
    }
    on_ready.forget();
}

/// Wire the formset explicitly; `config` may be omitted for the defaults
#[wasm_bindgen(js_name = initFormset)]
pub fn init_formset(config: JsValue) -> Result<(), JsValue> {
    let config: FormsetConfig = if config.is_undefined() || config.is_null() {
        FormsetConfig::default()
    } else {
        deserialize(config, "Invalid formset config")?
    };

    attach(config).map(|_| ()).map_err(|e| {
        log::error!("{}", e);
        JsValue::from(e)
    })
}

/// State of the active formset: prefix, counter, blocks and limits
#[wasm_bindgen(js_name = formsetSnapshot)]
pub fn formset_snapshot() -> Result<JsValue, JsValue> {
    let state = ACTIVE
        .with(|active| active.borrow().as_ref().map(|c| c.state()))
        .ok_or_else(|| JsValue::from_str("No formset is active"))?;
    serialize(&state, "Failed to serialize formset state")
}

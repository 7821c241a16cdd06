//! Formset controller
//!
//! Owns the formset state and the TOTAL_FORMS input. Add and delete both
//! go through the same counter accessor, apply a pure transition from
//! `models::formset`, then reconcile the page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::dom::elements::{read_limits, RequiredElements};
use crate::errors::FormsetError;
use crate::models::config::FormsetConfig;
use crate::models::formset::{BlockId, FormsetState, Removal, SubForm};
use crate::models::management::{format_counter, parse_counter};
use crate::template::{field_index, FormTemplate};

pub struct FormsetController {
    config: FormsetConfig,
    document: Document,
    container: Element,
    counter: HtmlInputElement,
    template: FormTemplate,
    state: RefCell<FormsetState>,
}

impl FormsetController {
    /// Wire the add control and the delete control of every rendered block
    ///
    /// Nothing is wired when a required element is missing.
    pub fn attach(document: &Document, config: FormsetConfig) -> Result<Rc<Self>, FormsetError> {
        let elements = RequiredElements::locate(document, &config)?;
        let limits = read_limits(document, &config)?;
        let total_forms = parse_counter(&elements.counter.value())?;

        let controller = Rc::new(Self {
            state: RefCell::new(FormsetState::new(config.prefix.clone(), total_forms, limits)),
            template: FormTemplate::new(elements.template_markup, config.placeholder.clone()),
            document: document.clone(),
            container: elements.container,
            counter: elements.counter,
            config,
        });

        let existing = controller.container.query_selector_all(&controller.config.form_selector())?;
        for position in 0..existing.length() {
            let Some(block) = existing.get(position).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let block = controller.container_child(block);
            let index = controller.block_index(&block).unwrap_or(position);
            let id = controller.state.borrow_mut().track_existing(index);
            controller.attach_delete(&block, id)?;
        }

        controller.wire_add(&elements.add_button)?;

        log::info!(
            "Formset '{}' ready: {} forms, {} blocks",
            controller.config.prefix,
            total_forms,
            existing.length()
        );
        Ok(controller)
    }

    pub fn config(&self) -> &FormsetConfig {
        &self.config
    }

    pub fn state(&self) -> FormsetState {
        self.state.borrow().clone()
    }

    /// Current counter value, read from the page
    pub fn total_forms(&self) -> Result<u32, FormsetError> {
        parse_counter(&self.counter.value())
    }

    fn set_total_forms(&self, value: u32) {
        self.counter.set_value(&format_counter(value));
    }

    /// The container's direct child holding `element`
    ///
    /// Blocks added on the page sit inside a wrapper `div`; removing the
    /// wrapper keeps the container free of empty leftovers.
    fn container_child(&self, element: Element) -> Element {
        let mut current = element;
        while let Some(parent) = current.parent_element() {
            if self.container.is_same_node(Some(&parent)) {
                break;
            }
            current = parent;
        }
        current
    }

    /// Index embedded in the first prefixed field name inside the block
    fn block_index(&self, block: &Element) -> Option<u32> {
        let selector = format!("[name^=\"{}-\"]", self.config.prefix);
        let fields = block.query_selector_all(&selector).ok()?;
        (0..fields.length())
            .filter_map(|i| fields.get(i)?.dyn_into::<Element>().ok())
            .filter_map(|field| field.get_attribute("name"))
            .find_map(|name| field_index(&name, &self.config.prefix))
    }

    /// Render the template at the next index and append it to the container
    pub fn add_form(self: &Rc<Self>) -> Result<SubForm, FormsetError> {
        let total_forms = self.total_forms()?;
        let (next, block) = self.state.borrow().with_total_forms(total_forms).on_add()?;

        let markup = self.template.render(block.index);
        let wrapper = self.document.create_element("div")?;
        wrapper.set_inner_html(&markup);
        self.container.append_child(&wrapper)?;

        self.set_total_forms(next.total_forms());
        *self.state.borrow_mut() = next;

        self.attach_delete(&wrapper, block.id)?;
        log::debug!("Added form {} at index {}", block.id, block.index);
        Ok(block)
    }

    /// Take `element` off the page and decrement the counter
    pub fn remove_form(&self, element: &Element, id: BlockId) -> Result<Removal, FormsetError> {
        let total_forms = self.total_forms()?;
        let (next, removal) = self.state.borrow().with_total_forms(total_forms).on_delete(id)?;

        element.remove();
        self.set_total_forms(next.total_forms());
        *self.state.borrow_mut() = next;

        if removal.clamped {
            log::warn!("Counter already at 0 when removing form {}", id);
        }
        log::debug!("Removed form {} (index {})", id, removal.block.index);
        Ok(removal)
    }

    fn wire_add(self: &Rc<Self>, button: &Element) -> Result<(), FormsetError> {
        let controller = Rc::downgrade(self);
        on_click(button, move |_| {
            if let Some(controller) = controller.upgrade() {
                if let Err(e) = controller.add_form() {
                    report(&e);
                }
            }
        })
    }

    /// Wire the block's delete control; returns false when it has none
    pub fn attach_delete(self: &Rc<Self>, block: &Element, id: BlockId) -> Result<bool, FormsetError> {
        let Some(button) = block.query_selector(&self.config.delete_selector())? else {
            log::debug!("Form {} has no delete control", id);
            return Ok(false);
        };

        let controller: Weak<Self> = Rc::downgrade(self);
        let block = block.clone();
        on_click(&button, move |_| {
            if let Some(controller) = controller.upgrade() {
                if let Err(e) = controller.remove_form(&block, id) {
                    report(&e);
                }
            }
        })?;
        Ok(true)
    }
}

/// Register a click handler that suppresses the default action
///
/// Handlers live as long as the page; a dropped controller turns them into
/// no-ops through the weak reference they hold.
fn on_click(target: &Element, mut handler: impl FnMut(&Event) + 'static) -> Result<(), FormsetError> {
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handler(&event);
    });
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn report(err: &FormsetError) {
    match err {
        FormsetError::LimitReached { .. } | FormsetError::MinimumReached { .. } => log::warn!("{}", err),
        _ => log::error!("{}", err),
    }
}

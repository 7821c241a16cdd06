//! Browser tests for the formset controller
//!
//! Each test renders its own formset markup under a unique prefix, wires it,
//! and clicks the controls.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use question_formset::models::FormsetConfig;
use question_formset::{FormsetController, FormsetError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixture {
    root: Element,
    config: FormsetConfig,
}

impl Fixture {
    /// Render a formset with `count` server-side blocks and wrap it in a root element
    fn render(prefix: &str, count: u32, extra: &str, with_template: bool) -> Self {
        let config = FormsetConfig {
            prefix: prefix.to_string(),
            container_id: prefix.to_string(),
            add_button_id: format!("add-{}", prefix),
            template_id: format!("template-{}", prefix),
            ..FormsetConfig::default()
        };

        let blocks: String = (0..count).map(|i| block_markup(prefix, &i.to_string())).collect();
        let template = if with_template {
            format!(r#"<div id="{}" hidden>{}</div>"#, config.template_id, block_markup(prefix, "__prefix__"))
        } else {
            String::new()
        };

        let root = document().create_element("div").unwrap();
        root.set_inner_html(&format!(
            r#"<input type="hidden" name="{p}-TOTAL_FORMS" value="{count}">
               <input type="hidden" name="{p}-INITIAL_FORMS" value="0">
               {extra}
               <div id="{p}">{blocks}</div>
               <button id="add-{p}">Add question</button>
               {template}"#,
            p = prefix,
        ));
        document().body().unwrap().append_child(&root).unwrap();

        Self { root, config }
    }

    fn attach(&self) -> Result<Rc<FormsetController>, FormsetError> {
        FormsetController::attach(&document(), self.config.clone())
    }

    fn counter(&self) -> String {
        self.root
            .query_selector(&self.config.total_forms_selector())
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .value()
    }

    fn set_counter(&self, value: &str) {
        self.root
            .query_selector(&self.config.total_forms_selector())
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(value);
    }

    fn block_count(&self) -> u32 {
        self.container().query_selector_all(".question-form").unwrap().length()
    }

    fn container(&self) -> Element {
        document().get_element_by_id(&self.config.container_id).unwrap()
    }

    fn text_field_names(&self) -> Vec<String> {
        let fields = self.container().query_selector_all("textarea").unwrap();
        (0..fields.length())
            .map(|i| fields.get(i).unwrap().dyn_into::<Element>().unwrap().get_attribute("name").unwrap())
            .collect()
    }

    fn click_add(&self) {
        click(&document().get_element_by_id(&self.config.add_button_id).unwrap());
    }

    fn click_delete(&self, index: u32) {
        let selector = format!("textarea[name=\"{}-{}-text\"]", self.config.prefix, index);
        let field = self.container().query_selector(&selector).unwrap().unwrap();
        let block = field.closest(".question-form").unwrap().unwrap();
        click(&block.query_selector(".delete-question-btn").unwrap().unwrap());
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn block_markup(prefix: &str, index: &str) -> String {
    format!(
        r#"<div class="question-form">
             <textarea name="{p}-{i}-text"></textarea>
             <input name="{p}-{i}-option1">
             <button class="delete-question-btn">Delete</button>
           </div>"#,
        p = prefix,
        i = index,
    )
}

#[wasm_bindgen_test]
fn test_add_appends_block_with_next_index() {
    let fixture = Fixture::render("add-one", 1, "", true);
    let _controller = fixture.attach().unwrap();

    fixture.click_add();

    assert_eq!(fixture.counter(), "2");
    assert_eq!(fixture.block_count(), 2);
    assert_eq!(fixture.text_field_names(), vec!["add-one-0-text", "add-one-1-text"]);
}

#[wasm_bindgen_test]
fn test_repeated_adds() {
    let fixture = Fixture::render("add-many", 2, "", true);
    let controller = fixture.attach().unwrap();

    for _ in 0..4 {
        fixture.click_add();
    }

    assert_eq!(fixture.counter(), "6");
    assert_eq!(fixture.block_count(), 6);
    assert_eq!(controller.state().indices(), vec![0, 1, 2, 3, 4, 5]);
}

#[wasm_bindgen_test]
fn test_delete_removes_only_that_block() {
    let fixture = Fixture::render("delete-mid", 3, "", true);
    let controller = fixture.attach().unwrap();

    fixture.click_delete(1);

    assert_eq!(fixture.counter(), "2");
    assert_eq!(fixture.block_count(), 2);
    assert_eq!(fixture.text_field_names(), vec!["delete-mid-0-text", "delete-mid-2-text"]);
    assert_eq!(controller.state().indices(), vec![0, 2]);
}

#[wasm_bindgen_test]
fn test_added_block_is_removable() {
    let fixture = Fixture::render("add-then-delete", 1, "", true);
    let _controller = fixture.attach().unwrap();

    fixture.click_add();
    fixture.click_delete(1);

    assert_eq!(fixture.counter(), "1");
    assert_eq!(fixture.text_field_names(), vec!["add-then-delete-0-text"]);
}

#[wasm_bindgen_test]
fn test_missing_template_wires_nothing() {
    let fixture = Fixture::render("no-template", 1, "", false);

    match fixture.attach() {
        Err(FormsetError::MissingElement(what)) => assert!(what.contains("template-no-template")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("attach should fail without a template"),
    }

    fixture.click_add();
    fixture.click_delete(0);

    assert_eq!(fixture.counter(), "1");
    assert_eq!(fixture.block_count(), 1);
}

#[wasm_bindgen_test]
fn test_invalid_counter_leaves_page_untouched() {
    let fixture = Fixture::render("bad-counter", 1, "", true);
    let _controller = fixture.attach().unwrap();

    fixture.set_counter("many");
    fixture.click_add();

    assert_eq!(fixture.counter(), "many");
    assert_eq!(fixture.block_count(), 1);
}

#[wasm_bindgen_test]
fn test_max_num_forms_stops_adds() {
    let limits = r#"<input type="hidden" name="capped-MIN_NUM_FORMS" value="0">
                    <input type="hidden" name="capped-MAX_NUM_FORMS" value="2">"#;
    let mut fixture = Fixture::render("capped", 1, limits, true);
    fixture.config.enforce_limits = true;
    let _controller = fixture.attach().unwrap();

    fixture.click_add();
    fixture.click_add();

    assert_eq!(fixture.counter(), "2");
    assert_eq!(fixture.block_count(), 2);
}

#[wasm_bindgen_test]
fn test_block_without_delete_control_stays() {
    let fixture = Fixture::render("permanent", 0, "", true);
    fixture
        .container()
        .set_inner_html(r#"<div class="question-form"><textarea name="permanent-0-text"></textarea></div>"#);
    fixture.set_counter("1");
    let controller = fixture.attach().unwrap();

    assert_eq!(controller.state().blocks().len(), 1);
    assert_eq!(fixture.block_count(), 1);
    assert_eq!(fixture.counter(), "1");
}

#[wasm_bindgen_test]
fn test_dropped_controller_disables_handlers() {
    let fixture = Fixture::render("dropped", 1, "", true);
    let controller = fixture.attach().unwrap();
    drop(controller);

    fixture.click_add();

    assert_eq!(fixture.counter(), "1");
    assert_eq!(fixture.block_count(), 1);
}

#[wasm_bindgen_test]
fn test_rendered_min_num_forms_ignored_by_default() {
    let limits = r#"<input type="hidden" name="min-off-MIN_NUM_FORMS" value="1">
                    <input type="hidden" name="min-off-MAX_NUM_FORMS" value="1">"#;
    let fixture = Fixture::render("min-off", 1, limits, true);
    let _controller = fixture.attach().unwrap();

    fixture.click_delete(0);
    assert_eq!(fixture.counter(), "0");
    assert_eq!(fixture.block_count(), 0);

    fixture.click_add();
    fixture.click_add();
    assert_eq!(fixture.counter(), "2");
    assert_eq!(fixture.block_count(), 2);
}

#[wasm_bindgen_test]
fn test_delete_at_zero_counter_removes_block() {
    let fixture = Fixture::render("zero-counter", 1, "", true);
    let _controller = fixture.attach().unwrap();

    fixture.set_counter("0");
    fixture.click_delete(0);

    assert_eq!(fixture.counter(), "0");
    assert_eq!(fixture.block_count(), 0);
}

#[wasm_bindgen_test]
fn test_delete_with_invalid_counter_keeps_block() {
    let fixture = Fixture::render("bad-counter-delete", 2, "", true);
    let controller = fixture.attach().unwrap();

    fixture.set_counter("two");
    fixture.click_delete(1);

    assert_eq!(fixture.counter(), "two");
    assert_eq!(fixture.block_count(), 2);
    assert_eq!(controller.state().indices(), vec![0, 1]);
}

#[wasm_bindgen_test]
fn test_reattach_removes_added_wrapper() {
    let fixture = Fixture::render("reattach", 1, "", true);
    let first = fixture.attach().unwrap();
    fixture.click_add();
    drop(first);

    let second = fixture.attach().unwrap();
    assert_eq!(second.state().indices(), vec![0, 1]);

    fixture.click_delete(1);

    assert_eq!(fixture.counter(), "1");
    assert_eq!(fixture.container().child_element_count(), 1);
    assert_eq!(fixture.text_field_names(), vec!["reattach-0-text"]);
}

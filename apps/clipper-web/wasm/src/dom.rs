//! DOM-backed view
//!
//! Elements are looked up by id on every access, so the page may re-render
//! parts of itself without invalidating the view. A missing element is logged
//! to the console and otherwise ignored.

use crate::describe_js_error;
use clipper_core::{ClipperError, ElementIds, FileOption, Result, View};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

const LOADING_TEXT: &str = "Loading PDF...";

/// Look up an element by id and cast it to the expected type
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClipperError::Dom(format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| ClipperError::Dom(format!("Element #{} has an unexpected type", id)))
}

pub struct DomView {
    window: Window,
    document: Document,
    ids: ElementIds,
    loader: RefCell<Option<Element>>,
}

impl DomView {
    pub fn new(window: Window, document: Document, ids: ElementIds) -> Self {
        Self {
            window,
            document,
            ids,
            loader: RefCell::new(None),
        }
    }

    fn find(&self, id: &str) -> Option<Element> {
        let found = self.document.get_element_by_id(id);
        if found.is_none() {
            web_sys::console::warn_1(&format!("Element #{} not found", id).into());
        }
        found
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.find(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Value of an input, textarea or select
    fn form_value(&self, id: &str) -> String {
        let Some(el) = self.find(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_form_value(&self, id: &str, value: &str) {
        let Some(el) = self.find(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn fill_select(&self, options: &[FileOption]) -> std::result::Result<(), JsValue> {
        let select: HtmlSelectElement = element(&self.document, &self.ids.file_select)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        select.set_inner_html("");
        for option in options {
            let node = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)?;
            select.append_child(&node)?;
        }
        Ok(())
    }

    fn write_error(&self, error: &ClipperError) -> std::result::Result<(), JsValue> {
        let Some(status) = self.find(&self.ids.status) else {
            return Ok(());
        };
        status.set_inner_html("");

        let label = self.document.create_element("span")?;
        label.set_text_content(Some("Error:"));
        if let Some(label) = label.dyn_ref::<HtmlElement>() {
            label.style().set_property("color", "red")?;
        }
        status.append_child(&label)?;
        status.append_with_str_1(&format!(" {}", error))?;
        Ok(())
    }
}

impl View for DomView {
    fn show_loading(&self) {
        let Some(container) = self.find(&self.ids.pdf_container) else {
            return;
        };
        let created = self.document.create_element("div").and_then(|loader| {
            loader.set_class_name("pdf-loader");
            loader.set_text_content(Some(LOADING_TEXT));
            container.prepend_with_node_1(&loader)?;
            Ok(loader)
        });
        match created {
            Ok(loader) => {
                if let Some(stale) = self.loader.borrow_mut().replace(loader) {
                    stale.remove();
                }
            }
            Err(e) => web_sys::console::warn_1(&e),
        }
    }

    fn hide_loading(&self) {
        if let Some(loader) = self.loader.borrow_mut().take() {
            loader.remove();
        }
    }

    fn set_page_count(&self, page_count: u32) {
        self.set_text(&self.ids.page_count, &page_count.to_string());
    }

    fn set_page_number(&self, page: u32) {
        self.set_text(&self.ids.page_num, &page.to_string());
    }

    fn set_file_options(&self, options: &[FileOption]) {
        if let Err(e) = self.fill_select(options) {
            web_sys::console::error_2(&"Failed to fill file list:".into(), &e);
        }
    }

    fn selected_file(&self) -> String {
        self.form_value(&self.ids.file_select)
    }

    fn text_input(&self) -> String {
        self.form_value(&self.ids.text_input)
    }

    fn set_text_input(&self, text: &str) {
        self.set_form_value(&self.ids.text_input, text);
    }

    fn new_file_name(&self) -> String {
        self.form_value(&self.ids.new_file_name)
    }

    fn clear_new_file_name(&self) {
        self.set_form_value(&self.ids.new_file_name, "");
    }

    fn save_location(&self) -> String {
        self.form_value(&self.ids.save_location)
    }

    fn set_file_content(&self, content: &str) {
        let Some(el) = self.find(&self.ids.view_content) else {
            return;
        };
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.style().set_property("white-space", "pre-wrap") {
                web_sys::console::warn_2(&"Failed to style file content:".into(), &e);
            }
        }
        el.set_text_content(Some(content));
    }

    fn set_status(&self, message: &str) {
        self.set_text(&self.ids.status, message);
    }

    fn show_error(&self, context: &str, error: &ClipperError) {
        web_sys::console::error_2(&context.into(), &error.to_string().into());
        if let Err(e) = self.write_error(error) {
            web_sys::console::error_1(&describe_js_error(&e).into());
        }
    }

    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            web_sys::console::warn_1(&message.into());
        }
    }
}

// WASM-specific tests that run in a browser environment
#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(tag: &str, id: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(existing) = document.get_element_by_id(id) {
            existing.remove();
        }
        let el = document.create_element(tag).unwrap();
        el.set_id(id);
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn view() -> DomView {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        DomView::new(window, document, ElementIds::default())
    }

    #[wasm_bindgen_test]
    fn test_file_options_replace_select_contents() {
        mount("select", "file-select");
        let view = view();

        view.set_file_options(&clipper_core::file_options(["a.docx"]));
        view.set_file_options(&clipper_core::file_options(["b.docx", "c.docx"]));

        let select: HtmlSelectElement = element(&view.document, "file-select").unwrap();
        assert_eq!(select.length(), 3);
        assert_eq!(view.selected_file(), "");

        select.set_value("c.docx");
        assert_eq!(view.selected_file(), "c.docx");
    }

    #[wasm_bindgen_test]
    fn test_text_input_round_trip() {
        mount("textarea", "text-input");
        let view = view();
        view.set_text_input("quoted passage");
        assert_eq!(view.text_input(), "quoted passage");
    }

    #[wasm_bindgen_test]
    fn test_loader_is_removed() {
        let container = mount("div", "pdf-container");
        let view = view();

        view.show_loading();
        assert_eq!(container.child_element_count(), 1);
        assert_eq!(container.text_content().as_deref(), Some(LOADING_TEXT));

        view.hide_loading();
        assert_eq!(container.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn test_file_content_keeps_line_breaks() {
        let content = mount("div", "view-content");
        let view = view();

        view.set_file_content("line one\n\n<i>line three</i>");

        assert_eq!(
            content.text_content().as_deref(),
            Some("line one\n\n<i>line three</i>")
        );
        assert_eq!(content.child_element_count(), 0);
        let style = content.dyn_ref::<HtmlElement>().unwrap().style();
        assert_eq!(style.get_property_value("white-space").unwrap(), "pre-wrap");
    }

    #[wasm_bindgen_test]
    fn test_error_is_rendered_as_text() {
        let status = mount("div", "response-message");
        let view = view();

        view.show_error(
            "Error viewing file:",
            &ClipperError::Network("<b>offline</b>".to_string()),
        );

        assert_eq!(
            status.text_content().as_deref(),
            Some("Error: Request failed: <b>offline</b>")
        );
        assert_eq!(status.child_element_count(), 1);
    }
}

//! DOM event wiring
//!
//! Each handler spawns the matching controller action on the local executor.
//! Listeners detach themselves when dropped, so the `ClipperApp` holding them
//! decides how long the page stays bound.

use crate::{describe_js_error, read_file, WebController};
use clipper_core::ElementIds;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, HtmlInputElement, KeyboardEvent, Window};

/// An attached event listener, removed again on drop
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Bind keyboard, selection, file-input and button events.
/// Buttons and the file input are optional; pages may call the exported
/// methods from inline handlers instead.
pub fn bind(
    controller: &Rc<WebController>,
    window: &Window,
    document: &Document,
    ids: &ElementIds,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    let on_key = controller.clone();
    listeners.push(Listener::attach(document, "keydown", move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            let key = event.key();
            let controller = on_key.clone();
            spawn_local(async move { controller.handle_key(&key).await });
        }
    })?);

    let text_layer = crate::dom::element::<EventTarget>(document, &ids.text_layer)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let on_select = controller.clone();
    let selection_window = window.clone();
    listeners.push(Listener::attach(&text_layer, "mouseup", move |_: Event| {
        if let Some(text) = current_selection(&selection_window) {
            on_select.capture_selection(&text);
        }
    })?);

    if let Some(input) = document.get_element_by_id(&ids.pdf_file) {
        let on_file = controller.clone();
        listeners.push(Listener::attach(&input, "change", move |event: Event| {
            let file = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                let controller = on_file.clone();
                spawn_local(async move { controller.load_document(read_file(file)).await });
            }
        })?);
    }

    let buttons = [
        (&ids.prev_button, ButtonAction::PrevPage),
        (&ids.next_button, ButtonAction::NextPage),
        (&ids.create_button, ButtonAction::CreateFile),
        (&ids.view_button, ButtonAction::ViewFile),
        (&ids.save_button, ButtonAction::SaveText),
        (&ids.undo_button, ButtonAction::UndoText),
    ];
    for (id, action) in buttons {
        if let Some(button) = document.get_element_by_id(id) {
            let on_click = controller.clone();
            listeners.push(Listener::attach(&button, "click", move |event: Event| {
                event.prevent_default();
                let controller = on_click.clone();
                spawn_local(async move { action.run(&controller).await });
            })?);
        }
    }

    Ok(listeners)
}

#[derive(Debug, Clone, Copy)]
enum ButtonAction {
    PrevPage,
    NextPage,
    CreateFile,
    ViewFile,
    SaveText,
    UndoText,
}

impl ButtonAction {
    async fn run(self, controller: &WebController) {
        match self {
            Self::PrevPage => controller.prev_page().await,
            Self::NextPage => controller.next_page().await,
            Self::CreateFile => controller.create_file().await,
            Self::ViewFile => controller.view_file().await,
            Self::SaveText => controller.save_text().await,
            Self::UndoText => controller.undo_last_text().await,
        }
    }
}

/// Text of the window selection, if it has any range
fn current_selection(window: &Window) -> Option<String> {
    match window.get_selection() {
        Ok(Some(selection)) if selection.range_count() > 0 => {
            Some(String::from(selection.to_string()))
        }
        Ok(_) => None,
        Err(e) => {
            web_sys::console::warn_1(&describe_js_error(&e).into());
            None
        }
    }
}

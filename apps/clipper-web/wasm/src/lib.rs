//! WASM bindings for the PDF clipper page
//!
//! Renders PDF pages with a selectable text layer and saves selected text into
//! server-managed files. All state lives in a Rust `Controller`; JavaScript
//! only mounts the app and, optionally, calls its actions from inline handlers.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ClipperApp } from './pkg/clipper_wasm.js';
//!
//! await init();
//! const app = await ClipperApp.mount({ render_scale: 1.5 });
//!
//! // optional: drive actions directly
//! document.getElementById('pdf-file').onchange = (e) => app.loadPdf(e.target.files[0]);
//! await app.saveText();
//!
//! // on page teardown
//! app.unmount();
//! ```

pub mod dom;
pub mod events;
pub mod fetch;
pub mod pdf_bridge;

use clipper_core::{ClipperConfig, ClipperError, Controller};
use events::Listener;
use js_sys::{Promise, Uint8Array};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::File;

// Re-export main types for JavaScript
pub use dom::DomView;
pub use fetch::FetchTransport;
pub use pdf_bridge::PdfJsBackend;

/// Controller wired to pdf.js, `fetch` and the DOM
pub type WebController = Controller<PdfJsBackend, FetchTransport, DomView>;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// One page session: the controller plus the listeners bound for it.
/// Dropping it (or calling `unmount`) detaches every listener.
#[wasm_bindgen]
pub struct ClipperApp {
    controller: Rc<WebController>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ClipperApp {
    /// Bind to the current page and request the file list.
    /// `config` is an optional object overriding `ClipperConfig` fields.
    pub async fn mount(config: JsValue) -> Result<ClipperApp, JsValue> {
        let config = parse_config(config)?;
        pdf_bridge::init_pdf_js(&config.worker_src)
            .await
            .map_err(to_js)?;

        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let backend = PdfJsBackend::new(&document, &config.elements).map_err(to_js)?;
        let view = DomView::new(window.clone(), document.clone(), config.elements.clone());
        let transport = FetchTransport::new(window.clone(), config.clone());
        let controller = Rc::new(Controller::new(
            backend,
            transport,
            view,
            config.render_scale,
        ));

        let listeners = events::bind(&controller, &window, &document, &config.elements)?;

        let initial = controller.clone();
        spawn_local(async move { initial.refresh_files().await });

        Ok(ClipperApp {
            controller,
            _listeners: listeners,
        })
    }

    /// Detach all listeners; the app cannot be used afterwards
    pub fn unmount(self) {}

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.controller.current_page()
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> u32 {
        self.controller.page_count()
    }

    #[wasm_bindgen(js_name = loadPdf)]
    pub fn load_pdf(&self, file: File) -> Promise {
        self.run(move |c| async move { c.load_document(read_file(file)).await })
    }

    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self, page: u32) -> Promise {
        self.run(move |c| async move { c.render_page(page).await })
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&self) -> Promise {
        self.run(|c| async move { c.prev_page().await })
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&self) -> Promise {
        self.run(|c| async move { c.next_page().await })
    }

    #[wasm_bindgen(js_name = refreshFiles)]
    pub fn refresh_files(&self) -> Promise {
        self.run(|c| async move { c.refresh_files().await })
    }

    #[wasm_bindgen(js_name = viewFile)]
    pub fn view_file(&self) -> Promise {
        self.run(|c| async move { c.view_file().await })
    }

    #[wasm_bindgen(js_name = createFile)]
    pub fn create_file(&self) -> Promise {
        self.run(|c| async move { c.create_file().await })
    }

    #[wasm_bindgen(js_name = saveText)]
    pub fn save_text(&self) -> Promise {
        self.run(|c| async move { c.save_text().await })
    }

    #[wasm_bindgen(js_name = undoText)]
    pub fn undo_text(&self) -> Promise {
        self.run(|c| async move { c.undo_last_text().await })
    }
}

impl ClipperApp {
    /// Run an action to completion; failures are already reported through the view
    fn run<F, Fut>(&self, action: F) -> Promise
    where
        F: FnOnce(Rc<WebController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let pending = action(self.controller.clone());
        future_to_promise(async move {
            pending.await;
            Ok(JsValue::UNDEFINED)
        })
    }
}

fn parse_config(value: JsValue) -> Result<ClipperConfig, JsValue> {
    let config = if value.is_undefined() || value.is_null() {
        ClipperConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
    };
    config.validate().map_err(to_js)?;
    Ok(config)
}

/// Read a user-selected file into memory
pub async fn read_file(file: File) -> Result<Vec<u8>, ClipperError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ClipperError::Load(describe_js_error(&e)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Best-effort message from a thrown JS value
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn to_js(err: ClipperError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

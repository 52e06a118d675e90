//! PDF.js integration for rendering pages in the browser via WASM
//!
//! The JS bridge keeps the loaded document; this side owns the canvas and
//! text-layer elements and sizes them before each draw.

use crate::describe_js_error;
use clipper_core::{ClipperError, ElementIds, PdfBackend, Result, Viewport};
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

// External JavaScript functions from pdf-bridge.js
#[wasm_bindgen(module = "/www/js/pdf-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPdfJs, catch)]
    async fn init_pdf_js_internal(worker_src: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = loadDocument, catch)]
    async fn load_document_internal(data: Uint8Array) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = getViewport, catch)]
    async fn get_viewport_internal(
        page_num: u32,
        scale: f64,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderCanvas, catch)]
    async fn render_canvas_internal(
        page_num: u32,
        canvas: &HtmlCanvasElement,
        scale: f64,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderTextLayer, catch)]
    async fn render_text_layer_internal(
        page_num: u32,
        container: &HtmlElement,
        scale: f64,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// Point pdf.js at its worker script; must run before the first load
pub async fn init_pdf_js(worker_src: &str) -> Result<()> {
    init_pdf_js_internal(worker_src)
        .await
        .map_err(|e| ClipperError::Load(describe_js_error(&e)))?;
    Ok(())
}

/// Renders into the page's canvas and text-layer elements through pdf.js
pub struct PdfJsBackend {
    canvas: HtmlCanvasElement,
    text_layer: HtmlElement,
}

impl PdfJsBackend {
    pub fn new(document: &Document, ids: &ElementIds) -> Result<Self> {
        Ok(Self {
            canvas: crate::dom::element(document, &ids.canvas)?,
            text_layer: crate::dom::element(document, &ids.text_layer)?,
        })
    }
}

impl PdfBackend for PdfJsBackend {
    async fn open(&self, bytes: Vec<u8>) -> Result<u32> {
        let data = Uint8Array::from(bytes.as_slice());
        let num_pages = load_document_internal(data)
            .await
            .map_err(|e| ClipperError::Load(describe_js_error(&e)))?;

        num_pages
            .as_f64()
            .map(|count| count as u32)
            .ok_or_else(|| ClipperError::Load("pdf.js did not report a page count".to_string()))
    }

    async fn viewport(&self, page: u32, scale: f64) -> Result<Viewport> {
        let value = get_viewport_internal(page, scale)
            .await
            .map_err(|e| ClipperError::Render(describe_js_error(&e)))?;

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ClipperError::Decode(format!("Invalid viewport: {}", e)))
    }

    async fn render_canvas(&self, page: u32, viewport: &Viewport) -> Result<()> {
        self.canvas.set_width(viewport.canvas_width());
        self.canvas.set_height(viewport.canvas_height());

        render_canvas_internal(page, &self.canvas, viewport.scale)
            .await
            .map_err(|e| ClipperError::Render(describe_js_error(&e)))?;
        Ok(())
    }

    async fn render_text_layer(&self, page: u32, viewport: &Viewport) -> Result<()> {
        self.text_layer.set_inner_html("");
        let style = self.text_layer.style();
        style
            .set_property("width", &viewport.css_width())
            .and_then(|_| style.set_property("height", &viewport.css_height()))
            .map_err(|e| ClipperError::Dom(describe_js_error(&e)))?;

        render_text_layer_internal(page, &self.text_layer, viewport.scale)
            .await
            .map_err(|e| ClipperError::Render(describe_js_error(&e)))?;
        Ok(())
    }
}

//! Controller configuration
//!
//! Every field has a default matching the stock page, so JavaScript only has to
//! pass the values it wants to change.

use crate::error::{ClipperError, Result};
use serde::{Deserialize, Serialize};

/// Zoom factor pages are rendered at
pub const DEFAULT_RENDER_SCALE: f64 = 1.5;

/// pdf.js worker matching the bridge's pinned library version
pub const DEFAULT_WORKER_SRC: &str =
    "https://cdn.jsdelivr.net/npm/pdfjs-dist@3.11.174/build/pdf.worker.min.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipperConfig {
    /// Fixed zoom applied to every rendered page
    pub render_scale: f64,
    /// Prefix for the file API endpoints; empty means same origin
    pub api_base: String,
    /// URL of the pdf.js worker script
    pub worker_src: String,
    /// DOM element ids the controller binds to
    pub elements: ElementIds,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            render_scale: DEFAULT_RENDER_SCALE,
            api_base: String::new(),
            worker_src: DEFAULT_WORKER_SRC.to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl ClipperConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.render_scale.is_finite() || self.render_scale <= 0.0 {
            return Err(ClipperError::invalid(format!(
                "Render scale must be a positive number, got {}",
                self.render_scale
            )));
        }

        if let Some(field) = self.elements.first_empty() {
            return Err(ClipperError::invalid(format!(
                "Element id for '{}' must not be empty",
                field
            )));
        }

        Ok(())
    }

    /// Join an endpoint path onto the configured base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

/// Ids of the page elements the controller reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub pdf_container: String,
    pub pdf_file: String,
    pub canvas: String,
    pub text_layer: String,
    pub page_num: String,
    pub page_count: String,
    pub prev_button: String,
    pub next_button: String,
    pub text_input: String,
    pub file_select: String,
    pub save_location: String,
    pub new_file_name: String,
    pub view_content: String,
    pub status: String,
    pub create_button: String,
    pub view_button: String,
    pub save_button: String,
    pub undo_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            pdf_container: "pdf-container".to_string(),
            pdf_file: "pdf-file".to_string(),
            canvas: "pdf-canvas".to_string(),
            text_layer: "text-layer".to_string(),
            page_num: "page-num".to_string(),
            page_count: "page-count".to_string(),
            prev_button: "prev-page".to_string(),
            next_button: "next-page".to_string(),
            text_input: "text-input".to_string(),
            file_select: "file-select".to_string(),
            save_location: "save-location".to_string(),
            new_file_name: "new-file-name".to_string(),
            view_content: "view-content".to_string(),
            status: "response-message".to_string(),
            create_button: "create-file-btn".to_string(),
            view_button: "view-file-btn".to_string(),
            save_button: "save-text-btn".to_string(),
            undo_button: "undo-text-btn".to_string(),
        }
    }
}

impl ElementIds {
    fn first_empty(&self) -> Option<&'static str> {
        [
            ("pdf_container", &self.pdf_container),
            ("pdf_file", &self.pdf_file),
            ("canvas", &self.canvas),
            ("text_layer", &self.text_layer),
            ("page_num", &self.page_num),
            ("page_count", &self.page_count),
            ("prev_button", &self.prev_button),
            ("next_button", &self.next_button),
            ("text_input", &self.text_input),
            ("file_select", &self.file_select),
            ("save_location", &self.save_location),
            ("new_file_name", &self.new_file_name),
            ("view_content", &self.view_content),
            ("status", &self.status),
            ("create_button", &self.create_button),
            ("view_button", &self.view_button),
            ("save_button", &self.save_button),
            ("undo_button", &self.undo_button),
        ]
        .into_iter()
        .find(|(_, id)| id.trim().is_empty())
        .map(|(name, _)| name)
    }
}

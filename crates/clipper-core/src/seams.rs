//! Boundaries between the controller and the page
//!
//! `PdfBackend` wraps the PDF rendering library and `View` wraps the DOM.
//! Both are single-threaded; nothing here needs to be `Send`.

use crate::error::{ClipperError, Result};
use crate::file_list::FileOption;
use crate::viewport::Viewport;

#[allow(async_fn_in_trait)]
pub trait PdfBackend {
    /// Load a document from its bytes, replacing any previous one; returns the page count
    async fn open(&self, bytes: Vec<u8>) -> Result<u32>;

    async fn viewport(&self, page: u32, scale: f64) -> Result<Viewport>;

    /// Size the canvas to the viewport and draw the page into it
    async fn render_canvas(&self, page: u32, viewport: &Viewport) -> Result<()>;

    /// Clear the overlay, size it to the viewport and lay out the page's text
    async fn render_text_layer(&self, page: u32, viewport: &Viewport) -> Result<()>;
}

pub trait View {
    fn show_loading(&self);
    fn hide_loading(&self);

    fn set_page_count(&self, page_count: u32);
    fn set_page_number(&self, page: u32);

    fn set_file_options(&self, options: &[FileOption]);
    /// Value of the file select; empty when the placeholder is chosen
    fn selected_file(&self) -> String;

    fn text_input(&self) -> String;
    fn set_text_input(&self, text: &str);

    fn new_file_name(&self) -> String;
    fn clear_new_file_name(&self);

    fn save_location(&self) -> String;

    /// Show file content with whitespace preserved
    fn set_file_content(&self, content: &str);

    fn set_status(&self, message: &str);
    /// Report a failure in the status element and the console
    fn show_error(&self, context: &str, error: &ClipperError);
    fn alert(&self, message: &str);
}

//! Page-session controller
//!
//! Owns the page cursor and render gate for one page session and turns user
//! actions into backend renders, API calls and view updates. Every action
//! catches its own failures and reports them through the view.
//!
//! Methods take `&self` so an `Rc<Controller>` can be shared by event
//! handlers; the interior `RefCell`s are never borrowed across an `.await`.

use crate::client::{FileClient, Transport};
use crate::error::{ClipperError, Result};
use crate::file_list::file_options;
use crate::navigation::{NavKey, PageCursor};
use crate::render_gate::{RenderGate, RenderTicket};
use crate::seams::{PdfBackend, View};
use crate::{selection, validation};
use std::cell::RefCell;
use std::future::Future;

pub struct Controller<B, T, V> {
    backend: B,
    files: FileClient<T>,
    view: V,
    render_scale: f64,
    cursor: RefCell<PageCursor>,
    gate: RefCell<RenderGate>,
}

impl<B, T, V> Controller<B, T, V>
where
    B: PdfBackend,
    T: Transport,
    V: View,
{
    pub fn new(backend: B, transport: T, view: V, render_scale: f64) -> Self {
        Self {
            backend,
            files: FileClient::new(transport),
            view,
            render_scale,
            cursor: RefCell::new(PageCursor::default()),
            gate: RefCell::new(RenderGate::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn transport(&self) -> &T {
        self.files.transport()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_page(&self) -> u32 {
        self.cursor.borrow().current()
    }

    pub fn page_count(&self) -> u32 {
        self.cursor.borrow().page_count()
    }

    pub fn is_rendering(&self) -> bool {
        self.gate.borrow().is_busy()
    }

    // ------------------------------------------------------------------
    // Document and pages
    // ------------------------------------------------------------------

    /// Load a document whose bytes are still being read, with the loading
    /// indicator up until the read and parse finish
    pub async fn load_document<F>(&self, bytes: F)
    where
        F: Future<Output = Result<Vec<u8>>>,
    {
        self.view.show_loading();
        let opened = self.open_document(bytes).await;
        self.view.hide_loading();

        match opened {
            Ok(page_count) => {
                tracing::info!(page_count, "document loaded");
                self.cursor.borrow_mut().reset(page_count);
                self.view.set_page_count(page_count);
                self.render_page(1).await;
            }
            Err(err) => self.report("Error loading PDF:", &err),
        }
    }

    async fn open_document<F>(&self, bytes: F) -> Result<u32>
    where
        F: Future<Output = Result<Vec<u8>>>,
    {
        let bytes = bytes.await?;
        let page_count = self.backend.open(bytes).await?;
        if page_count == 0 {
            return Err(ClipperError::Load("document has no pages".to_string()));
        }
        Ok(page_count)
    }

    /// Render a page, or park it if another render is in flight.
    /// A failed render is reported and the pending page, if any, still runs.
    pub async fn render_page(&self, page: u32) {
        let ticket = self.gate.borrow_mut().request(page);
        let mut next = match ticket {
            RenderTicket::Start(page) => Some(page),
            RenderTicket::Deferred => {
                tracing::debug!(page, "render deferred");
                return;
            }
        };

        while let Some(page) = next {
            if let Err(err) = self.draw_page(page).await {
                self.report("Error rendering page:", &err);
            }
            next = self.gate.borrow_mut().complete();
        }
    }

    async fn draw_page(&self, page: u32) -> Result<()> {
        let cursor = *self.cursor.borrow();
        if !cursor.is_loaded() {
            return Err(ClipperError::NoDocument);
        }
        if !cursor.contains(page) {
            return Err(ClipperError::PageOutOfRange {
                page,
                page_count: cursor.page_count(),
            });
        }

        tracing::debug!(page, scale = self.render_scale, "rendering page");
        let viewport = self.backend.viewport(page, self.render_scale).await?;
        self.backend.render_canvas(page, &viewport).await?;
        self.backend.render_text_layer(page, &viewport).await?;
        self.view.set_page_number(page);
        Ok(())
    }

    pub async fn prev_page(&self) {
        self.navigate(NavKey::Previous).await;
    }

    pub async fn next_page(&self) {
        self.navigate(NavKey::Next).await;
    }

    /// React to a `keydown` key; anything but the arrow keys is ignored
    pub async fn handle_key(&self, key: &str) {
        if let Some(direction) = NavKey::from_key(key) {
            self.navigate(direction).await;
        }
    }

    async fn navigate(&self, direction: NavKey) {
        let target = self.cursor.borrow_mut().step(direction);
        if let Some(page) = target {
            self.render_page(page).await;
        }
    }

    /// Copy a text-layer selection into the text input
    pub fn capture_selection(&self, raw: &str) {
        if let Some(text) = selection::selected_text(raw) {
            self.view.set_text_input(&text);
        }
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    pub async fn refresh_files(&self) {
        match self.files.list_files().await {
            Ok(names) => self.view.set_file_options(&file_options(names)),
            Err(err) => self.report("Error fetching files:", &err),
        }
    }

    pub async fn view_file(&self) {
        let selected = self.view.selected_file();
        let name = match validation::file_to_view(&selected) {
            Ok(name) => name,
            Err(err) => return self.report("Error viewing file:", &err),
        };

        match self.files.view_file(name).await {
            Ok(content) => self.view.set_file_content(&content),
            Err(err) => self.report("Error viewing file:", &err),
        }
    }

    pub async fn create_file(&self) {
        let request = match validation::create_file_request(&self.view.new_file_name()) {
            Ok(request) => request,
            Err(err) => return self.report("Error creating file:", &err),
        };

        match self.files.create_file(&request).await {
            Ok(response) => {
                self.view.set_status(&response.message);
                if response.success {
                    self.refresh_files().await;
                    self.view.clear_new_file_name();
                }
            }
            Err(err) => self.report("Error creating file:", &err),
        }
    }

    pub async fn save_text(&self) {
        let selected = self.view.selected_file();
        let request = match validation::save_text_request(
            &self.view.text_input(),
            &selected,
            &self.view.save_location(),
        ) {
            Ok(request) => request,
            Err(err) => return self.report("Error saving text:", &err),
        };

        match self.files.save_text(&request).await {
            Ok(response) => {
                self.view.set_status(&response.status_text());
                // the user may have switched files while the save was in flight
                if self.view.selected_file() == selected {
                    self.view_file().await;
                }
            }
            Err(err) => self.report("Error saving text:", &err),
        }
    }

    pub async fn undo_last_text(&self) {
        let request = match validation::undo_request(&self.view.selected_file()) {
            Ok(request) => request,
            Err(err) => return self.report("Error undoing text:", &err),
        };

        match self.files.undo_last_text(&request).await {
            Ok(response) => {
                self.view.set_status(&response.status_text());
                self.view_file().await;
            }
            Err(err) => self.report("Error undoing text:", &err),
        }
    }

    /// Validation failures become alerts; everything else goes to the status line
    pub fn report(&self, context: &str, err: &ClipperError) {
        if let ClipperError::Invalid(message) = err {
            self.view.alert(message);
            return;
        }
        tracing::warn!(error = %err, "{}", context);
        self.view.show_error(context, err);
    }
}

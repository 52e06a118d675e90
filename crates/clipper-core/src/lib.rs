//! Controller logic for the PDF clipper page
//!
//! Renders PDF pages through an abstract [`PdfBackend`], captures text
//! selections, and saves them into server-managed files through the file API.
//! Nothing in this crate touches the browser; the wasm app supplies the
//! backend, transport and view.
//!
//! ## Structure
//!
//! - [`navigation`] and [`render_gate`] hold the only real state: the current
//!   page and the one-render-in-flight gate
//! - [`validation`], [`api`] and [`client`] turn form values into HTTP calls
//! - [`controller`] ties them together behind the [`seams`] traits

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod file_list;
pub mod navigation;
pub mod render_gate;
pub mod seams;
pub mod selection;
pub mod validation;
pub mod viewport;

pub use api::{
    CreateFileRequest, CreateFileResponse, MessageResponse, SaveLocation, SaveTextRequest,
    UndoRequest,
};
pub use client::{FileClient, HttpReply, Transport};
pub use config::{ClipperConfig, ElementIds};
pub use controller::Controller;
pub use error::{ClipperError, Result};
pub use file_list::{file_options, FileOption};
pub use navigation::{NavKey, PageCursor};
pub use render_gate::{RenderGate, RenderTicket};
pub use seams::{PdfBackend, View};
pub use viewport::Viewport;

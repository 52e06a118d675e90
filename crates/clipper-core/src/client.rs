//! HTTP client for the file API
//!
//! The transport is abstract so the browser can plug in `fetch` while tests
//! plug in a recorder. All encoding, decoding and status handling happens here.

use crate::api::{
    self, CreateFileRequest, CreateFileResponse, MessageResponse, SaveTextRequest, UndoRequest,
};
use crate::error::{ClipperError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn into_server_error(self) -> ClipperError {
        ClipperError::Server {
            status: self.status,
            message: api::error_message(&self.body),
        }
    }
}

/// Moves bytes to and from the server. Failing to get any reply is a
/// `Network` error; any status code counts as a reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<HttpReply>;

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply>;
}

pub struct FileClient<T> {
    transport: T,
}

impl<T: Transport> FileClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_files(&self) -> Result<Vec<String>> {
        tracing::debug!("listing files");
        let reply = self.transport.get(api::LIST_FILES_PATH).await?;
        if !reply.is_success() {
            return Err(reply.into_server_error());
        }
        Ok(serde_json::from_str(&reply.body)?)
    }

    /// Raw file content with line breaks intact
    pub async fn view_file(&self, name: &str) -> Result<String> {
        tracing::debug!(name, "viewing file");
        let reply = self.transport.get(&api::view_file_path(name)).await?;
        if !reply.is_success() {
            return Err(reply.into_server_error());
        }
        Ok(reply.body)
    }

    pub async fn create_file(&self, request: &CreateFileRequest) -> Result<CreateFileResponse> {
        tracing::debug!(name = %request.file_name, "creating file");
        self.post(api::CREATE_FILE_PATH, request).await
    }

    pub async fn save_text(&self, request: &SaveTextRequest) -> Result<MessageResponse> {
        tracing::debug!(
            name = %request.file_name,
            location = request.save_location.as_str(),
            chars = request.text.chars().count(),
            "saving text"
        );
        self.post(api::SAVE_TEXT_PATH, request).await
    }

    pub async fn undo_last_text(&self, request: &UndoRequest) -> Result<MessageResponse> {
        tracing::debug!(name = %request.file_name, "undoing last text");
        self.post(api::UNDO_LAST_TEXT_PATH, request).await
    }

    /// POST a JSON body. Error statuses still carry a JSON reply the user should
    /// see, so the body is decoded first and the status only matters when that fails.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_string(body)?;
        let reply = self.transport.post_json(path, payload).await?;

        match serde_json::from_str(&reply.body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !reply.is_success() => Err(reply.into_server_error()),
            Err(err) => Err(err.into()),
        }
    }
}

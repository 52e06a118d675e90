use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipperError {
    /// Rejected before any network call; shown to the user as an alert
    #[error("{0}")]
    Invalid(String),

    #[error("No PDF document loaded")]
    NoDocument,

    #[error("Page {page} is out of range (1-{page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Failed to render page: {0}")]
    Render(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ClipperError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl From<serde_json::Error> for ClipperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClipperError>;

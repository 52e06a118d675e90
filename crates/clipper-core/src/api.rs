//! Wire types for the file API
//!
//! Request bodies match the server's field names exactly (`fileName` is the
//! one camel-cased key). Replies are decoded leniently: the server answers
//! failures with `{"error": ...}` instead of `{"message": ...}`.

use serde::{Deserialize, Serialize};

pub const LIST_FILES_PATH: &str = "/list-files";
pub const VIEW_FILE_PATH: &str = "/view-file";
pub const CREATE_FILE_PATH: &str = "/create-file";
pub const SAVE_TEXT_PATH: &str = "/save-text";
pub const UNDO_LAST_TEXT_PATH: &str = "/undo-last-text";

/// Path and query for viewing one file
pub fn view_file_path(name: &str) -> String {
    format!("{}?name={}", VIEW_FILE_PATH, urlencoding::encode(name))
}

/// Where the server should put saved text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaveLocation {
    #[default]
    Local,
    Google,
    /// Anything else is passed through untouched
    Other(String),
}

impl SaveLocation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for SaveLocation {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            Self::Local
        } else if trimmed.eq_ignore_ascii_case("google") {
            Self::Google
        } else {
            Self::Other(value.to_string())
        }
    }
}

impl From<String> for SaveLocation {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SaveLocation> for String {
    fn from(location: SaveLocation) -> Self {
        location.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFileRequest {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveTextRequest {
    pub text: String,
    pub file_name: String,
    pub save_location: SaveLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoRequest {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreateFileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Reply to save and undo calls
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub remaining_undos: Option<u32>,
}

impl MessageResponse {
    /// Text for the status element
    pub fn status_text(&self) -> String {
        match (&self.message, &self.error) {
            (Some(message), _) => match self.remaining_undos {
                Some(1) => format!("{} (1 undo left)", message),
                Some(n) => format!("{} ({} undos left)", message, n),
                None => message.clone(),
            },
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => String::new(),
        }
    }
}

/// Pull a human-readable message out of an error body
pub fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(error), ..
        }) => error,
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_field_names() {
        let create = serde_json::to_value(CreateFileRequest {
            file_name: "notes".to_string(),
        })
        .unwrap();
        assert_eq!(create, serde_json::json!({"fileName": "notes"}));

        let save = serde_json::to_value(SaveTextRequest {
            text: "quote".to_string(),
            file_name: "notes.docx".to_string(),
            save_location: SaveLocation::Google,
        })
        .unwrap();
        assert_eq!(
            save,
            serde_json::json!({
                "text": "quote",
                "file_name": "notes.docx",
                "save_location": "google"
            })
        );

        let undo = serde_json::to_value(UndoRequest {
            file_name: "notes.docx".to_string(),
        })
        .unwrap();
        assert_eq!(undo, serde_json::json!({"file_name": "notes.docx"}));
    }

    #[test]
    fn test_save_location_parsing() {
        assert_eq!(SaveLocation::from(""), SaveLocation::Local);
        assert_eq!(SaveLocation::from("LOCAL"), SaveLocation::Local);
        assert_eq!(SaveLocation::from("google"), SaveLocation::Google);
        assert_eq!(
            SaveLocation::from("append"),
            SaveLocation::Other("append".to_string())
        );
        assert_eq!(SaveLocation::from("append").as_str(), "append");
    }

    #[test]
    fn test_view_path_encodes_name() {
        assert_eq!(view_file_path("notes.docx"), "/view-file?name=notes.docx");
        assert_eq!(
            view_file_path("my notes&more.docx"),
            "/view-file?name=my%20notes%26more.docx"
        );
    }

    #[test]
    fn test_message_status_text() {
        let saved: MessageResponse =
            serde_json::from_str(r#"{"message": "Text saved locally as a .docx file", "file_path": {}}"#)
                .unwrap();
        assert_eq!(saved.status_text(), "Text saved locally as a .docx file");

        let undone: MessageResponse = serde_json::from_str(
            r#"{"message": "Last added text removed successfully", "remaining_undos": 2}"#,
        )
        .unwrap();
        assert_eq!(
            undone.status_text(),
            "Last added text removed successfully (2 undos left)"
        );

        let failed: MessageResponse =
            serde_json::from_str(r#"{"error": "No text to undo"}"#).unwrap();
        assert_eq!(failed.status_text(), "Error: No text to undo");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error": "File not found"}"#), "File not found");
        assert_eq!(
            error_message(r#"{"success": false, "message": "File already exists"}"#),
            "File already exists"
        );
        assert_eq!(error_message("Internal Server Error\n"), "Internal Server Error");
    }
}

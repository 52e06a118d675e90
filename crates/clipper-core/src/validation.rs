//! Client-side checks run before any request is sent
//!
//! Each check turns raw form values into a request body, or fails with the
//! message the user sees in an alert.

use crate::api::{CreateFileRequest, SaveLocation, SaveTextRequest, UndoRequest};
use crate::error::{ClipperError, Result};

pub const MSG_ENTER_FILE_NAME: &str = "Please enter a file name";
pub const MSG_SELECT_FILE_TO_VIEW: &str = "Please select a file to view";
pub const MSG_ENTER_TEXT: &str = "Please select or enter text to save";
pub const MSG_SELECT_FILE_TO_SAVE: &str = "Please select or create a file first";
pub const MSG_SELECT_FILE: &str = "Please select a file first";

pub fn create_file_request(raw_name: &str) -> Result<CreateFileRequest> {
    let file_name = raw_name.trim();
    if file_name.is_empty() {
        return Err(ClipperError::invalid(MSG_ENTER_FILE_NAME));
    }

    Ok(CreateFileRequest {
        file_name: file_name.to_string(),
    })
}

pub fn file_to_view(selected: &str) -> Result<&str> {
    require_file(selected, MSG_SELECT_FILE_TO_VIEW)
}

/// Text is checked before the file, so an empty form reports the missing text
pub fn save_text_request(text: &str, selected: &str, location: &str) -> Result<SaveTextRequest> {
    if text.is_empty() {
        return Err(ClipperError::invalid(MSG_ENTER_TEXT));
    }
    let file_name = require_file(selected, MSG_SELECT_FILE_TO_SAVE)?;

    Ok(SaveTextRequest {
        text: text.to_string(),
        file_name: file_name.to_string(),
        save_location: SaveLocation::from(location),
    })
}

pub fn undo_request(selected: &str) -> Result<UndoRequest> {
    let file_name = require_file(selected, MSG_SELECT_FILE)?;
    Ok(UndoRequest {
        file_name: file_name.to_string(),
    })
}

fn require_file<'a>(selected: &'a str, message: &str) -> Result<&'a str> {
    if selected.is_empty() {
        Err(ClipperError::invalid(message))
    } else {
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_trims_name() {
        let request = create_file_request("  chapter-1  ").unwrap();
        assert_eq!(request.file_name, "chapter-1");
    }

    #[test]
    fn test_create_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let err = create_file_request(name).unwrap_err();
            assert_eq!(err, ClipperError::Invalid(MSG_ENTER_FILE_NAME.to_string()));
        }
    }

    #[test]
    fn test_save_requires_text_first() {
        let err = save_text_request("", "", "local").unwrap_err();
        assert_eq!(err.to_string(), MSG_ENTER_TEXT);

        let err = save_text_request("quote", "", "local").unwrap_err();
        assert_eq!(err.to_string(), MSG_SELECT_FILE_TO_SAVE);
    }

    #[test]
    fn test_save_keeps_text_verbatim() {
        let request = save_text_request("  spaced quote ", "notes.docx", "google").unwrap();
        assert_eq!(request.text, "  spaced quote ");
        assert_eq!(request.file_name, "notes.docx");
        assert_eq!(request.save_location, SaveLocation::Google);
    }

    #[test]
    fn test_view_and_undo_need_selection() {
        assert_eq!(
            file_to_view("").unwrap_err().to_string(),
            MSG_SELECT_FILE_TO_VIEW
        );
        assert_eq!(file_to_view("a.docx").unwrap(), "a.docx");

        assert_eq!(undo_request("").unwrap_err().to_string(), MSG_SELECT_FILE);
        assert_eq!(undo_request("a.docx").unwrap().file_name, "a.docx");
    }
}

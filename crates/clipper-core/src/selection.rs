/// Normalize a text-layer selection; `None` when nothing usable was selected
pub fn selected_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_selection() {
        assert_eq!(
            selected_text("  Lorem ipsum\n"),
            Some("Lorem ipsum".to_string())
        );
    }

    #[test]
    fn test_blank_selection_is_ignored() {
        assert_eq!(selected_text(""), None);
        assert_eq!(selected_text(" \n\t "), None);
    }

    #[test]
    fn test_keeps_inner_line_breaks() {
        assert_eq!(
            selected_text("first line\nsecond line"),
            Some("first line\nsecond line".to_string())
        );
    }
}

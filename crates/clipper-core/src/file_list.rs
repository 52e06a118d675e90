//! Options for the target-file select

/// Label of the leading empty-valued option
pub const NEW_FILE_LABEL: &str = "Create New File";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOption {
    pub value: String,
    pub label: String,
}

impl FileOption {
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: name,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: NEW_FILE_LABEL.to_string(),
        }
    }
}

/// Placeholder first, then the server's files in the order they were listed
pub fn file_options<I, S>(names: I) -> Vec<FileOption>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(FileOption::placeholder())
        .chain(names.into_iter().map(FileOption::file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_leads() {
        let options = file_options(["notes.docx", "a.docx"]);
        assert_eq!(
            options,
            vec![
                FileOption {
                    value: String::new(),
                    label: "Create New File".to_string()
                },
                FileOption::file("notes.docx"),
                FileOption::file("a.docx"),
            ]
        );
    }

    #[test]
    fn test_empty_listing() {
        let options = file_options(Vec::<String>::new());
        assert_eq!(options, vec![FileOption::placeholder()]);
    }
}

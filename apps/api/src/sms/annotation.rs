use serde::{Deserialize, Serialize};

/// The user's note split into who the transaction was for and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub subject: Option<String>,
    pub note: Option<String>,
}

/// Splits `"mom, apples"` into subject `mom` and note `apples`.
///
/// Blank input yields neither field. Otherwise the first comma-separated segment is
/// always the subject, even if it trims to `""`. Segments past the second are dropped.
pub fn split_annotation(text: &str) -> Annotation {
    if text.trim().is_empty() {
        return Annotation::default();
    }

    let mut segments = text.split(',').map(|s| s.trim().to_string());
    Annotation {
        subject: segments.next(),
        note: segments.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_and_note() {
        let a = split_annotation("mom, apples");
        assert_eq!(a.subject.as_deref(), Some("mom"));
        assert_eq!(a.note.as_deref(), Some("apples"));
    }

    #[test]
    fn test_subject_only() {
        let a = split_annotation("dad");
        assert_eq!(a.subject.as_deref(), Some("dad"));
        assert!(a.note.is_none());
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(split_annotation(""), Annotation::default());
        assert_eq!(split_annotation(" \t\n "), Annotation::default());
    }

    #[test]
    fn test_whitespace_segments_are_empty_strings() {
        let a = split_annotation("  ,  ");
        assert_eq!(a.subject.as_deref(), Some(""));
        assert_eq!(a.note.as_deref(), Some(""));
    }

    #[test]
    fn test_extra_segments_discarded() {
        let a = split_annotation("dad,groceries, weekly ,extra");
        assert_eq!(a.subject.as_deref(), Some("dad"));
        assert_eq!(a.note.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_split_is_deterministic() {
        assert_eq!(split_annotation("sis, books"), split_annotation("sis, books"));
    }
}

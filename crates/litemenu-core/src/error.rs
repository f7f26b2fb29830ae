//! The error type shared by tree construction, mutation and navigation.

use std::fmt;

/// Errors reported by [`MenuTree`](crate::MenuTree),
/// [`Navigator`](crate::Navigator) and [`Menu`](crate::Menu).
///
/// Every variant is recoverable: the operation that produced it performed
/// no mutation, and the tree stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A level heading (or parent heading) did not resolve to a level.
    NotFound(String),
    /// A level with this heading already exists.
    DuplicateHeading(String),
    /// Level headings must be non-empty.
    EmptyHeading,
    /// An entry index was past the end of its level.
    IndexOutOfRange {
        heading: String,
        index: usize,
        len: usize,
    },
    /// An activation was issued against a level with no entries.
    EmptyLevel(String),
    /// The navigator has no active level; the session is over.
    Ended,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(heading) => write!(f, "menu level {heading:?} not found"),
            Self::DuplicateHeading(heading) => {
                write!(f, "menu level {heading:?} already exists")
            }
            Self::EmptyHeading => f.write_str("menu level heading must not be empty"),
            Self::IndexOutOfRange {
                heading,
                index,
                len,
            } => write!(
                f,
                "entry index {index} out of range for {heading:?} ({len} entries)"
            ),
            Self::EmptyLevel(heading) => {
                write!(f, "menu level {heading:?} has no entries")
            }
            Self::Ended => f.write_str("menu session has ended"),
        }
    }
}

impl std::error::Error for MenuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_heading() {
        let e = MenuError::NotFound("Settings".into());
        assert_eq!(e.to_string(), r#"menu level "Settings" not found"#);
    }

    #[test]
    fn display_index_out_of_range() {
        let e = MenuError::IndexOutOfRange {
            heading: "Main".into(),
            index: 7,
            len: 3,
        };
        assert!(e.to_string().contains("index 7"));
        assert!(e.to_string().contains("3 entries"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(MenuError::Ended);
        assert_eq!(boxed.to_string(), "menu session has ended");
    }
}

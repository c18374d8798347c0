//! Error types for iconlabel.

use std::path::PathBuf;

/// Errors that can occur while building or mutating a styled document.
///
/// Every fallible operation validates its input before touching any state,
/// so a returned error means nothing was changed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A character position lies outside the document.
    #[error("position {position} out of range for document of length {len}")]
    OutOfRange {
        /// The requested character index.
        position: usize,
        /// The document length in characters.
        len: usize,
    },

    /// A character range is reversed or extends past the end of the document.
    #[error("invalid range {start}..{end} for document of length {len}")]
    InvalidRange {
        /// Range start (inclusive).
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// The document length in characters.
        len: usize,
    },

    /// A value handed to a text setter was not text.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the setter accepts.
        expected: &'static str,
        /// What it was given.
        found: String,
    },

    /// A classifier returned a flag count that does not match the input.
    #[error("classifier returned {actual} flags for {expected} characters")]
    ClassifierContractViolation {
        /// Number of characters in the input.
        expected: usize,
        /// Number of flags the classifier produced.
        actual: usize,
    },

    /// A font file could not be read.
    #[error("failed to load font {}: {source}", path.display())]
    FontLoad {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for iconlabel operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::OutOfRange { position: 3, len: 3 };
        assert_eq!(
            err.to_string(),
            "position 3 out of range for document of length 3"
        );

        let err = Error::ClassifierContractViolation {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "classifier returned 2 flags for 4 characters");
    }

    #[test]
    fn test_font_load_keeps_source() {
        use std::error::Error as _;

        let err = Error::FontLoad {
            path: PathBuf::from("fonts/missing.ttf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("fonts/missing.ttf"));
        assert!(err.source().is_some());
    }
}

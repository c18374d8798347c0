//! Building a styled document from plain text.
//!
//! ## The Algorithm
//!
//! ```text
//! text:        "A\u{E700}B"
//! classify:    [false, true, false]
//!
//! 1. icon font over everything     Icons Icons Icons
//! 2. text font where flag = false  Arial Icons Arial
//! 3. base style over everything    (size, color, ... ; font untouched)
//! ```
//!
//! One whole-range call plus one single-character call per text character.
//! Contiguous characters are never pre-merged into runs; last-write-wins per
//! attribute gives the same result, and [`StyledDocument::runs`] recovers the
//! runs on demand.

use std::sync::Arc;

use crate::classifier::{classify_checked, PrivateUseClassifier};
use crate::document::StyledDocument;
use crate::error::Result;
use crate::style::StylePatch;
use crate::GlyphClassifier;

/// Default font for text characters.
pub const DEFAULT_TEXT_FONT: &str = "Arial";

/// Default font for icon characters.
pub const DEFAULT_ICON_FONT: &str = "Segoe Fluent Icons";

/// Turns strings into documents with per-character font assignment.
///
/// ## Example
///
/// ```rust
/// use iconlabel::{DocumentBuilder, StylePatch};
///
/// let builder = DocumentBuilder::new("Arial", "Icons")
///     .with_base_style(StylePatch::new().font_size(24.0));
/// let doc = builder.build("A\u{E700}B").unwrap();
///
/// assert_eq!(doc.font_at(0), Some("Arial"));
/// assert_eq!(doc.font_at(1), Some("Icons"));
/// assert_eq!(doc.style_at(2).unwrap().font_size, 24.0);
/// ```
#[derive(Clone)]
pub struct DocumentBuilder {
    text_font: Arc<str>,
    icon_font: Arc<str>,
    base_style: StylePatch,
    classifier: Arc<dyn GlyphClassifier>,
}

impl DocumentBuilder {
    /// Create a builder with the default classifier and an empty base style.
    #[must_use]
    pub fn new(text_font: impl Into<Arc<str>>, icon_font: impl Into<Arc<str>>) -> Self {
        Self {
            text_font: text_font.into(),
            icon_font: icon_font.into(),
            base_style: StylePatch::new(),
            classifier: Arc::new(PrivateUseClassifier::new()),
        }
    }

    /// Replace the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn GlyphClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the style applied over the whole string.
    ///
    /// Its font name, if any, is ignored: fonts come from the classifier.
    #[must_use]
    pub fn with_base_style(mut self, base_style: StylePatch) -> Self {
        self.base_style = base_style.without_font();
        self
    }

    /// Font used for text characters.
    #[must_use]
    pub fn text_font(&self) -> &str {
        &self.text_font
    }

    /// Font used for icon characters.
    #[must_use]
    pub fn icon_font(&self) -> &str {
        &self.icon_font
    }

    /// The base style (never carries a font name).
    #[must_use]
    pub fn base_style(&self) -> &StylePatch {
        &self.base_style
    }

    /// The active classifier.
    #[must_use]
    pub fn classifier(&self) -> &dyn GlyphClassifier {
        self.classifier.as_ref()
    }

    /// Build a document for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ClassifierContractViolation`] if the classifier
    /// does not return one flag per character. No document is produced.
    pub fn build(&self, text: &str) -> Result<StyledDocument> {
        let flags = classify_checked(self.classifier.as_ref(), text)?;

        let mut doc = StyledDocument::new(text);
        let len = doc.len();
        doc.set_style(0..len, StylePatch::font(Arc::clone(&self.icon_font)))?;

        let mut text_chars = 0;
        for (index, _) in flags.iter().enumerate().filter(|(_, is_icon)| !**is_icon) {
            doc.set_style(index..index + 1, StylePatch::font(Arc::clone(&self.text_font)))?;
            text_chars += 1;
        }

        doc.set_style(0..len, self.base_style.clone())?;

        log::debug!(
            "built document: {len} chars, {} icons, {text_chars} text",
            len - text_chars
        );
        Ok(doc)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_FONT, DEFAULT_ICON_FONT)
    }
}

impl std::fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("text_font", &self.text_font)
            .field("icon_font", &self.icon_font)
            .field("base_style", &self.base_style)
            .finish_non_exhaustive()
    }
}

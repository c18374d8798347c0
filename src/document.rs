//! The styled document: layered style patches over an immutable text.
//!
//! ## Layering
//!
//! A document never splits ranges or merges neighbouring ones. Every
//! `set_style` call appends one entry to an arena (or folds into the newest
//! entry when the range is identical), and a character's style is found by
//! replaying the entries that cover it, oldest first:
//!
//! ```text
//! text:      A   \u{E700}  B
//! entry 0:  [font=Icons.............]   0..3
//! entry 1:  [font=Arial]                0..1
//! entry 2:                [font=Arial]  2..3
//! entry 3:  [size=24, color=white...]   0..3
//! entry 4:  [color=red]                 0..1
//!
//! resolved:  Arial/red  Icons/white  Arial/white
//! ```
//!
//! Appending keeps a point override O(1). Resolution is lazy: the cost is paid
//! when a renderer asks for [`StyledDocument::runs`].
//!
//! Positions are character (Unicode scalar) indices, not byte offsets.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::style::{ResolvedStyle, StylePatch};

/// One layer of a styled document: a patch over a half-open char range.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpan {
    /// First character covered.
    pub start: usize,
    /// One past the last character covered.
    pub end: usize,
    /// Attributes set over the range.
    pub patch: StylePatch,
}

impl StyleSpan {
    /// Whether `index` falls inside this span.
    #[must_use]
    pub fn covers(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// The character range of this span.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A maximal run of characters sharing one resolved style.
///
/// This is the unit a renderer draws: one font, one color, one slice of text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun<'a> {
    /// The run's text.
    pub text: &'a str,
    /// Character range in the document.
    pub chars: Range<usize>,
    /// Byte range in the document text.
    pub bytes: Range<usize>,
    /// The style shared by every character of the run.
    pub style: ResolvedStyle,
}

/// Text plus an ordered list of style layers.
///
/// ## Example
///
/// ```rust
/// use iconlabel::{Color, StyledDocument, StylePatch};
///
/// let mut doc = StyledDocument::new("abc");
/// doc.set_style(0..3, StylePatch::font("Arial")).unwrap();
/// doc.set_style_at(1, StylePatch::new().color(Color::rgb(255, 0, 0))).unwrap();
///
/// assert_eq!(doc.font_at(1), Some("Arial"));
/// assert_eq!(doc.runs().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledDocument {
    text: String,
    len: usize,
    spans: Vec<StyleSpan>,
}

impl StyledDocument {
    /// Create an unstyled document over `text`. The text is kept verbatim.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            spans: Vec::new(),
        }
    }

    /// The backing text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the document has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The style layers, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Layer `patch` over the character range `range`.
    ///
    /// An empty range is accepted and changes nothing. A patch over the same
    /// range as the newest layer is merged into it, so recoloring one
    /// character repeatedly does not grow the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `range.start > range.end` or
    /// `range.end > self.len()`. The document is left untouched.
    pub fn set_style(&mut self, range: Range<usize>, patch: StylePatch) -> Result<()> {
        if range.start > range.end || range.end > self.len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        if range.is_empty() || patch.is_empty() {
            return Ok(());
        }
        // Repeated patches over the same range fold into one layer.
        if let Some(last) = self.spans.last_mut() {
            if last.range() == range {
                last.patch.merge(&patch);
                return Ok(());
            }
        }
        self.spans.push(StyleSpan {
            start: range.start,
            end: range.end,
            patch,
        });
        Ok(())
    }

    /// Layer `patch` over the single character at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position >= self.len()`.
    pub fn set_style_at(&mut self, position: usize, patch: StylePatch) -> Result<()> {
        if position >= self.len {
            return Err(Error::OutOfRange {
                position,
                len: self.len,
            });
        }
        log::trace!("style override at {position}: {patch:?}");
        self.set_style(position..position + 1, patch)
    }

    /// The resolved style of the character at `index`.
    #[must_use]
    pub fn style_at(&self, index: usize) -> Option<ResolvedStyle> {
        if index >= self.len {
            return None;
        }
        let mut style = ResolvedStyle::default();
        for span in self.spans.iter().filter(|s| s.covers(index)) {
            style.apply(&span.patch);
        }
        Some(style)
    }

    /// The resolved font family at `index`.
    #[must_use]
    pub fn font_at(&self, index: usize) -> Option<&str> {
        self.spans
            .iter()
            .rev()
            .filter(|s| s.covers(index))
            .find_map(|s| s.patch.font_name.as_deref())
    }

    /// The resolved style of every character, in order.
    #[must_use]
    pub fn resolved_styles(&self) -> Vec<ResolvedStyle> {
        let mut styles = vec![ResolvedStyle::default(); self.len];
        for span in &self.spans {
            for style in &mut styles[span.range()] {
                style.apply(&span.patch);
            }
        }
        styles
    }

    /// Split the document into maximal runs of identical style.
    #[must_use]
    pub fn runs(&self) -> Vec<StyledRun<'_>> {
        let styles = self.resolved_styles();
        let mut byte_offsets: Vec<usize> = self.text.char_indices().map(|(i, _)| i).collect();
        byte_offsets.push(self.text.len());

        let mut runs = Vec::new();
        let mut start = 0;
        for end in 1..=styles.len() {
            if end == styles.len() || styles[end] != styles[start] {
                let bytes = byte_offsets[start]..byte_offsets[end];
                runs.push(StyledRun {
                    text: &self.text[bytes.clone()],
                    chars: start..end,
                    bytes,
                    style: styles[start].clone(),
                });
                start = end;
            }
        }
        runs
    }

    /// Every distinct font family referenced by the layers, in first-use order.
    #[must_use]
    pub fn font_families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for name in self.spans.iter().filter_map(|s| s.patch.font_name.as_deref()) {
            if !families.contains(&name) {
                families.push(name);
            }
        }
        families
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    const RED: Color = Color::rgba(255, 0, 0, 255);

    #[test]
    fn test_text_kept_verbatim() {
        let text = "e\u{301} \u{E700}\r\n";
        let doc = StyledDocument::new(text);
        assert_eq!(doc.text(), text);
        assert_eq!(doc.len(), 6);
    }

    #[test]
    fn test_unstyled_has_no_font() {
        let doc = StyledDocument::new("ab");
        assert_eq!(doc.font_at(0), None);
        assert_eq!(doc.style_at(0), Some(ResolvedStyle::default()));
        assert_eq!(doc.style_at(2), None);
    }

    #[test]
    fn test_attributes_are_independent() {
        let mut doc = StyledDocument::new("abc");
        doc.set_style(0..3, StylePatch::font("Arial")).unwrap();
        doc.set_style(0..3, StylePatch::new().font_size(30.0)).unwrap();

        let style = doc.style_at(1).unwrap();
        assert_eq!(style.font(), Some("Arial"));
        assert_eq!(style.font_size, 30.0);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut doc = StyledDocument::new("abc");
        assert!(matches!(
            doc.set_style(2..4, StylePatch::font("Arial")),
            Err(Error::InvalidRange { start: 2, end: 4, len: 3 })
        ));
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(doc.set_style(reversed, StylePatch::font("Arial")).is_err());
        assert!(doc.entries().is_empty());
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut doc = StyledDocument::new("abc");
        doc.set_style(1..1, StylePatch::font("Arial")).unwrap();
        assert!(doc.entries().is_empty());
    }

    #[test]
    fn test_point_override_out_of_range() {
        let mut doc = StyledDocument::new("abc");
        let err = doc
            .set_style_at(3, StylePatch::new().color(RED))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 3, len: 3 }));
        assert!(doc.entries().is_empty());
    }

    #[test]
    fn test_point_override_only_touches_one_char() {
        let mut doc = StyledDocument::new("abc");
        doc.set_style(0..3, StylePatch::new().color(Color::WHITE)).unwrap();
        doc.set_style_at(0, StylePatch::new().color(RED)).unwrap();

        let styles = doc.resolved_styles();
        assert_eq!(styles[0].color, RED);
        assert_eq!(styles[1].color, Color::WHITE);
        assert_eq!(styles[2].color, Color::WHITE);
    }

    #[test]
    fn test_repeated_override_folds_into_one_layer() {
        let mut doc = StyledDocument::new("abc");
        doc.set_style(0..3, StylePatch::font("Arial")).unwrap();
        for i in 0..1000u32 {
            let shade = (i % 256) as u8;
            doc.set_style_at(0, StylePatch::new().color(Color::rgb(shade, 0, 0))).unwrap();
        }
        doc.set_style_at(0, StylePatch::new().bold(true)).unwrap();

        assert_eq!(doc.entries().len(), 2);
        let style = doc.style_at(0).unwrap();
        assert_eq!(style.color, Color::rgb((999 % 256) as u8, 0, 0));
        assert!(style.bold);
        assert_eq!(style.font(), Some("Arial"));
        assert_eq!(doc.style_at(1).unwrap().color, Color::WHITE);
    }

    #[test]
    fn test_runs_merge_equal_neighbours() {
        let mut doc = StyledDocument::new("ab\u{E700}\u{E701}c");
        doc.set_style(0..5, StylePatch::font("Icons")).unwrap();
        for i in [0, 1, 4] {
            doc.set_style(i..i + 1, StylePatch::font("Arial")).unwrap();
        }

        let runs = doc.runs();
        let texts: Vec<_> = runs.iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["ab", "\u{E700}\u{E701}", "c"]);
        assert_eq!(runs[1].chars, 2..4);
        assert_eq!(runs[1].bytes, 2..8);
        assert_eq!(runs[1].style.font(), Some("Icons"));
    }

    #[test]
    fn test_runs_of_empty_document() {
        assert!(StyledDocument::new("").runs().is_empty());
    }

    #[test]
    fn test_font_families() {
        let mut doc = StyledDocument::new("ab");
        doc.set_style(0..2, StylePatch::font("Icons")).unwrap();
        doc.set_style(0..1, StylePatch::font("Arial")).unwrap();
        doc.set_style(1..2, StylePatch::font("Arial")).unwrap();
        assert_eq!(doc.font_families(), vec!["Icons", "Arial"]);
    }
}

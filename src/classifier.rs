//! Run classification strategies.
//!
//! A classifier turns a string into one flag per character: `true` means the
//! character is drawn from the icon font, `false` from the text font.
//!
//! ```text
//! text:   "A  \u{E700}  B"
//! flags:  [false, true, false]
//! fonts:  [text,  icon, text ]
//! ```
//!
//! The default [`PrivateUseClassifier`] covers icon fonts that live in the
//! Private Use Area. Anything else (a font with icons scattered over other
//! blocks, a lookup table, a cmap query) plugs in through [`GlyphClassifier`].

use crate::error::{Error, Result};
use crate::glyph::{is_icon_in, ICON_RANGE_END, ICON_RANGE_START};
use crate::GlyphClassifier;

/// The default classifier: Private Use Area code points are icons.
///
/// ## Example
///
/// ```rust
/// use iconlabel::{GlyphClassifier, PrivateUseClassifier};
///
/// let classifier = PrivateUseClassifier::new();
/// assert_eq!(classifier.classify("\u{E88B} \u{E88C}"), vec![true, false, true]);
///
/// // Only a narrower block counts as icons
/// let narrow = PrivateUseClassifier::with_range(0xE700, 0xE7FF);
/// assert_eq!(narrow.classify("\u{E700}\u{E88B}"), vec![true, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateUseClassifier {
    start: u32,
    end: u32,
}

impl PrivateUseClassifier {
    /// Classifier over the default range `U+E000..=U+F800`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: ICON_RANGE_START,
            end: ICON_RANGE_END,
        }
    }

    /// Classifier over a custom inclusive code point range.
    ///
    /// A reversed range classifies every character as text.
    #[must_use]
    pub const fn with_range(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The inclusive code point range treated as icons.
    #[must_use]
    pub const fn range(&self) -> (u32, u32) {
        (self.start, self.end)
    }
}

impl Default for PrivateUseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphClassifier for PrivateUseClassifier {
    fn classify(&self, text: &str) -> Vec<bool> {
        text.chars()
            .map(|c| is_icon_in(c, self.start, self.end))
            .collect()
    }
}

/// Adapts a per-character predicate into a classifier.
///
/// ```rust
/// use iconlabel::{FnClassifier, GlyphClassifier};
///
/// let digits_as_icons = FnClassifier::new(|c: char| c.is_ascii_digit());
/// assert_eq!(digits_as_icons.classify("a1"), vec![false, true]);
/// ```
#[derive(Clone)]
pub struct FnClassifier<F> {
    predicate: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    /// Wrap `predicate`, which returns `true` for icon characters.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> std::fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnClassifier").finish_non_exhaustive()
    }
}

impl<F> GlyphClassifier for FnClassifier<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn classify(&self, text: &str) -> Vec<bool> {
        text.chars().map(&self.predicate).collect()
    }
}

/// Classify `text` with the default [`PrivateUseClassifier`].
#[must_use]
pub fn classify(text: &str) -> Vec<bool> {
    PrivateUseClassifier::new().classify(text)
}

/// Run `classifier` and check that it returned one flag per character.
///
/// # Errors
///
/// Returns [`Error::ClassifierContractViolation`] when the flag count differs
/// from the character count.
pub fn classify_checked(classifier: &dyn GlyphClassifier, text: &str) -> Result<Vec<bool>> {
    let flags = classifier.classify(text);
    let expected = text.chars().count();
    if flags.len() != expected {
        return Err(Error::ClassifierContractViolation {
            expected,
            actual: flags.len(),
        });
    }
    Ok(flags)
}

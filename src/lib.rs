//! # iconlabel
//!
//! Labels that mix ordinary text with icon-font glyphs.
//!
//! ## The Problem
//!
//! Icon fonts put their pictograms in the Unicode Private Use Area. A string
//! like `"Wi-Fi \u{E701}"` needs two fonts: the text font for `Wi-Fi ` and the
//! icon font for `\u{E701}`. Neither font can draw the other's characters, and
//! most toolkits draw one label in one font.
//!
//! Splitting strings into runs by hand at every call site is tedious and
//! error-prone, especially once the text changes at runtime.
//!
//! ## How It Works
//!
//! ```text
//! text:      "Hi \u{E700}"
//!
//! 1. classify   H     i     ␠     \u{E700}
//!               text  text  text  icon
//!
//! 2. build      [icon font ..................]   whole string
//!               [Arial][Arial][Arial]            text characters
//!               [size 24, white .............]   base style
//!
//! 3. runs       "Hi " Arial/24/white | "\u{E700}" Icons/24/white
//! ```
//!
//! - **Classification** ([`GlyphClassifier`]) decides, per Unicode scalar
//!   value, whether a character is an icon. The default
//!   [`PrivateUseClassifier`] treats `U+E000..=U+F800` (except space) as
//!   icons. Flags are `true` for icons.
//! - **Building** ([`DocumentBuilder`]) layers the icon font over the whole
//!   string, the text font over each text character, then the base style.
//! - **The document** ([`StyledDocument`]) keeps those layers and resolves
//!   them lazily; later layers win attribute by attribute.
//! - **The label** ([`Label`]) owns the text and the document, rebuilds on
//!   [`Label::set_text`], and accepts per-character overrides.
//!
//! ## Quick Start
//!
//! ```rust
//! use iconlabel::{Color, Label};
//!
//! let mut label = Label::builder("\u{E88B} \u{E88C}")
//!     .text_font("Arial")
//!     .icon_font("Segoe Fluent Icons")
//!     .font_size(24.0)
//!     .position(20.0, 200.0, 0.0)
//!     .build()
//!     .unwrap();
//!
//! // Highlight the first icon
//! label.set_color_at(0, Color::rgba(255, 255, 205, 255)).unwrap();
//!
//! for run in label.runs() {
//!     println!("{:?} in {:?}", run.text, run.style.font());
//! }
//! ```
//!
//! ## Custom Classifiers
//!
//! Any `Fn(&str) -> Vec<bool>` is a classifier, as is any type implementing
//! [`GlyphClassifier`]. Per-character predicates go through [`FnClassifier`].
//! A classifier that returns the wrong number of flags is rejected with
//! [`Error::ClassifierContractViolation`] instead of misaligning styles.

mod builder;
mod classifier;
mod document;
mod error;
mod font;
mod glyph;
mod label;
mod style;

pub use builder::{DocumentBuilder, DEFAULT_ICON_FONT, DEFAULT_TEXT_FONT};
pub use classifier::{classify, classify_checked, FnClassifier, PrivateUseClassifier};
pub use document::{StyleSpan, StyledDocument, StyledRun};
pub use error::{Error, Result};
pub use font::FontRegistry;
pub use glyph::{glyph_classes, is_icon_char, GlyphClass, ICON_RANGE_END, ICON_RANGE_START};
pub use label::{
    AnchorX, AnchorY, BatchHandle, GroupHandle, Label, LabelBuilder, Placement, ProgramHandle,
    RenderTarget,
};
pub use style::{Align, Color, ResolvedStyle, StylePatch};

/// A strategy for splitting characters between the icon and text fonts.
///
/// Implementations return one flag per `char` of the input: `true` if the
/// character is drawn from the icon font, `false` for the text font.
///
/// ```rust
/// use iconlabel::{GlyphClassifier, PrivateUseClassifier};
///
/// fn icon_count(classifier: &dyn GlyphClassifier, text: &str) -> usize {
///     classifier.classify(text).into_iter().filter(|&icon| icon).count()
/// }
///
/// assert_eq!(icon_count(&PrivateUseClassifier::new(), "a\u{E700}\u{E701}"), 2);
/// ```
pub trait GlyphClassifier: Send + Sync {
    /// Classify every character of `text`.
    ///
    /// Must return exactly `text.chars().count()` flags.
    fn classify(&self, text: &str) -> Vec<bool>;
}

impl<F> GlyphClassifier for F
where
    F: Fn(&str) -> Vec<bool> + Send + Sync,
{
    fn classify(&self, text: &str) -> Vec<bool> {
        self(text)
    }
}

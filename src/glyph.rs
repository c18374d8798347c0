//! Glyph classes: is a character drawn from the icon font or the text font?
//!
//! ## The Private Use Area
//!
//! Icon fonts (Segoe Fluent Icons, Material Symbols, Font Awesome, ...) map
//! their pictograms onto Unicode's Private Use Area, a block of code points
//! the standard leaves unassigned:
//!
//! ```text
//! U+E000 ............................ U+F8FF
//! |<-------- Basic Multilingual Plane PUA -------->|
//! |<-- icons (default range: E000..=F800) -->|
//! ```
//!
//! A regular text font has no glyph at these positions, and an icon font has
//! no useful glyph for "A". So each character goes to exactly one of the two.
//!
//! Classification works on Unicode scalar values (`char`), never on bytes or
//! UTF-16 units, so a multi-unit character is never split across two styles.

/// First code point treated as an icon by default.
pub const ICON_RANGE_START: u32 = 0xE000;

/// Last code point (inclusive) treated as an icon by default.
pub const ICON_RANGE_END: u32 = 0xF800;

/// Which font a character is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Drawn from the icon font.
    Icon,
    /// Drawn from the text font.
    Text,
}

impl GlyphClass {
    /// Classify a single character with the default private-use rule.
    ///
    /// ```rust
    /// use iconlabel::GlyphClass;
    ///
    /// assert_eq!(GlyphClass::of('\u{E700}'), GlyphClass::Icon);
    /// assert_eq!(GlyphClass::of('A'), GlyphClass::Text);
    /// assert_eq!(GlyphClass::of(' '), GlyphClass::Text);
    /// ```
    #[must_use]
    pub fn of(c: char) -> Self {
        Self::from_flag(is_icon_char(c))
    }

    /// Convert a classifier flag (`true` = icon) to a class.
    #[must_use]
    pub const fn from_flag(is_icon: bool) -> Self {
        if is_icon {
            Self::Icon
        } else {
            Self::Text
        }
    }

    /// Whether this is the icon class.
    #[must_use]
    pub const fn is_icon(self) -> bool {
        matches!(self, Self::Icon)
    }
}

/// The default icon predicate.
///
/// A character is an icon iff its scalar value lies in
/// [`ICON_RANGE_START`]`..=`[`ICON_RANGE_END`] and it is not a space.
#[must_use]
pub fn is_icon_char(c: char) -> bool {
    is_icon_in(c, ICON_RANGE_START, ICON_RANGE_END)
}

pub(crate) fn is_icon_in(c: char, start: u32, end: u32) -> bool {
    c != ' ' && (start..=end).contains(&u32::from(c))
}

/// The class of every character in `text`, in order.
pub fn glyph_classes(text: &str) -> impl Iterator<Item = GlyphClass> + '_ {
    text.chars().map(GlyphClass::of)
}

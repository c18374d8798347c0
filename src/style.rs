//! Style attributes and partial style patches.
//!
//! A [`StylePatch`] sets some attributes and leaves the rest alone. Patches
//! are layered: applying `{color: red}` over `{font: "Arial", size: 12}`
//! yields `{font: "Arial", size: 12, color: red}`. No attribute ever erases
//! another.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGBA color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white, the default label color.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Create a color from four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// The channels as an array, in RGBA order.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Horizontal alignment of lines within the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// A partial set of style attributes.
///
/// `None` means "leave as is". Built with chained setters:
///
/// ```rust
/// use iconlabel::{Color, StylePatch};
///
/// let patch = StylePatch::new().font_size(24.0).bold(true).color(Color::rgb(255, 0, 0));
/// assert_eq!(patch.font_size, Some(24.0));
/// assert_eq!(patch.font_name, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StylePatch {
    /// Font family name.
    pub font_name: Option<Arc<str>>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Bold weight.
    pub bold: Option<bool>,
    /// Italic slant.
    pub italic: Option<bool>,
    /// Stretched width.
    pub stretch: Option<bool>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Horizontal alignment.
    pub align: Option<Align>,
}

impl StylePatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that only sets the font family.
    #[must_use]
    pub fn font(name: impl Into<Arc<str>>) -> Self {
        Self::new().font_name(name)
    }

    /// Set the font family.
    #[must_use]
    pub fn font_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set the font size in points.
    ///
    /// NaN and infinite sizes are ignored and leave the patch unchanged.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        if size.is_finite() {
            self.font_size = Some(size);
        } else {
            log::warn!("ignoring non-finite font size {size}");
        }
        self
    }

    /// Set bold.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic.
    #[must_use]
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set stretch.
    #[must_use]
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Whether the patch sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold `other` into this patch; attributes `other` sets win.
    pub fn merge(&mut self, other: &StylePatch) {
        if let Some(name) = &other.font_name {
            self.font_name = Some(Arc::clone(name));
        }
        self.font_size = other.font_size.or(self.font_size);
        self.bold = other.bold.or(self.bold);
        self.italic = other.italic.or(self.italic);
        self.stretch = other.stretch.or(self.stretch);
        self.color = other.color.or(self.color);
        self.align = other.align.or(self.align);
    }

    /// This patch without its font family.
    ///
    /// Used for the base style so it cannot overwrite per-character fonts.
    #[must_use]
    pub fn without_font(&self) -> Self {
        Self {
            font_name: None,
            ..self.clone()
        }
    }
}

/// The fully resolved style of one character.
///
/// Attributes never touched by a patch keep their defaults: no font, 12pt,
/// regular weight, upright, unstretched, white, left-aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedStyle {
    /// Font family name, if any patch set one.
    pub font_name: Option<Arc<str>>,
    /// Font size in points.
    pub font_size: f32,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Stretched width.
    pub stretch: bool,
    /// Foreground color.
    pub color: Color,
    /// Horizontal alignment.
    pub align: Align,
}

impl ResolvedStyle {
    /// Layer `patch` on top of this style.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(name) = &patch.font_name {
            self.font_name = Some(Arc::clone(name));
        }
        // Sizes set through the public field bypass the setter's check.
        if let Some(size) = patch.font_size.filter(|size| size.is_finite()) {
            self.font_size = size;
        }
        if let Some(bold) = patch.bold {
            self.bold = bold;
        }
        if let Some(italic) = patch.italic {
            self.italic = italic;
        }
        if let Some(stretch) = patch.stretch {
            self.stretch = stretch;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(align) = patch.align {
            self.align = align;
        }
    }

    /// The font family as a string slice.
    #[must_use]
    pub fn font(&self) -> Option<&str> {
        self.font_name.as_deref()
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font_name: None,
            font_size: 12.0,
            bold: false,
            italic: false,
            stretch: false,
            color: Color::WHITE,
            align: Align::Left,
        }
    }
}

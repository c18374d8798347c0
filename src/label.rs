//! A label that owns its text and styled document.
//!
//! The label is what an application holds on to. It remembers how its
//! document was built (fonts, base style, classifier) so it can rebuild it
//! whenever the text changes, and it carries the placement and render
//! handles the drawing toolkit needs.
//!
//! ```text
//! LabelBuilder ──build()──▶ Label
//!                            ├── text
//!                            ├── DocumentBuilder (fonts, base style, classifier)
//!                            ├── StyledDocument  ◀── rebuilt on set_text
//!                            ├── Placement       (x, y, z, anchors, ...)
//!                            └── RenderTarget    (batch, group, program)
//! ```
//!
//! The document is always produced by [`DocumentBuilder`] before the label
//! exists; a label never creates a default single-style document of its own.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::{DocumentBuilder, DEFAULT_ICON_FONT, DEFAULT_TEXT_FONT};
use crate::document::{StyledDocument, StyledRun};
use crate::error::{Error, Result};
use crate::font::FontRegistry;
use crate::style::{Align, Color, StylePatch};
use crate::GlyphClassifier;

/// Horizontal anchor of the label's layout box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnchorX {
    /// Anchor at the left edge.
    #[default]
    Left,
    /// Anchor at the center.
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Vertical anchor of the label's layout box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnchorY {
    /// Anchor at the top edge.
    Top,
    /// Anchor at the vertical center.
    Center,
    /// Anchor at the first line's baseline.
    #[default]
    Baseline,
    /// Anchor at the bottom edge.
    Bottom,
}

/// Where and how a label is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Placement {
    /// X coordinate of the anchor point.
    pub x: f32,
    /// Y coordinate of the anchor point.
    pub y: f32,
    /// Z coordinate (depth).
    pub z: f32,
    /// Layout width; `None` sizes to content.
    pub width: Option<f32>,
    /// Layout height; `None` sizes to content.
    pub height: Option<f32>,
    /// Horizontal anchor.
    pub anchor_x: AnchorX,
    /// Vertical anchor.
    pub anchor_y: AnchorY,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Wrap lines at `width`.
    pub multiline: bool,
    /// Resolution used to convert points to pixels.
    pub dpi: u32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            width: None,
            height: None,
            anchor_x: AnchorX::Left,
            anchor_y: AnchorY::Baseline,
            rotation: 0.0,
            multiline: false,
            dpi: 96,
        }
    }
}

/// Opaque reference to a render batch owned by the drawing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchHandle(pub u64);

/// Opaque reference to a render group (draw ordering/state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(pub u64);

/// Opaque reference to a shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u64);

/// The draw-call grouping a label is rendered into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderTarget {
    /// Batch the label's glyphs are added to.
    pub batch: Option<BatchHandle>,
    /// Group within the batch.
    pub group: Option<GroupHandle>,
    /// Shader program; `None` uses the toolkit default.
    pub program: Option<ProgramHandle>,
}

/// Configures and builds a [`Label`].
///
/// Defaults: text font "Arial", icon font "Segoe Fluent Icons", 12pt,
/// regular, white, left-aligned, anchored left/baseline at the origin.
///
/// ## Example
///
/// ```rust
/// use iconlabel::{Color, Label};
///
/// let label = Label::builder("Hello \u{E700}")
///     .text_font("HarmonyOS Sans SC")
///     .font_size(20.0)
///     .color(Color::WHITE)
///     .position(20.0, 100.0, 0.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(label.document().font_at(0), Some("HarmonyOS Sans SC"));
/// assert_eq!(label.document().font_at(6), Some("Segoe Fluent Icons"));
/// ```
#[derive(Clone)]
#[must_use]
pub struct LabelBuilder {
    text: String,
    text_font: Arc<str>,
    icon_font: Arc<str>,
    classifier: Option<Arc<dyn GlyphClassifier>>,
    font_size: f32,
    bold: bool,
    italic: bool,
    stretch: bool,
    color: Color,
    align: Align,
    placement: Placement,
    target: RenderTarget,
}

impl std::fmt::Debug for LabelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelBuilder")
            .field("text", &self.text)
            .field("text_font", &self.text_font)
            .field("icon_font", &self.icon_font)
            .field("custom_classifier", &self.classifier.is_some())
            .field("font_size", &self.font_size)
            .field("color", &self.color)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

impl LabelBuilder {
    /// Start configuring a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_font: DEFAULT_TEXT_FONT.into(),
            icon_font: DEFAULT_ICON_FONT.into(),
            classifier: None,
            font_size: 12.0,
            bold: false,
            italic: false,
            stretch: false,
            color: Color::WHITE,
            align: Align::Left,
            placement: Placement::default(),
            target: RenderTarget::default(),
        }
    }

    /// Font for text characters.
    pub fn text_font(mut self, name: impl Into<Arc<str>>) -> Self {
        self.text_font = name.into();
        self
    }

    /// Font for icon characters.
    pub fn icon_font(mut self, name: impl Into<Arc<str>>) -> Self {
        self.icon_font = name.into();
        self
    }

    /// Classifier deciding which characters are icons.
    pub fn classifier(mut self, classifier: Arc<dyn GlyphClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Font size in points. NaN and infinite sizes are ignored.
    pub fn font_size(mut self, size: f32) -> Self {
        if size.is_finite() {
            self.font_size = size;
        } else {
            log::warn!("ignoring non-finite font size {size}");
        }
        self
    }

    /// Bold weight.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Italic slant.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Stretched width.
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Text color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Anchor point coordinates.
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.placement.x = x;
        self.placement.y = y;
        self.placement.z = z;
        self
    }

    /// Layout box size.
    pub fn size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.placement.width = width;
        self.placement.height = height;
        self
    }

    /// Anchor of the layout box.
    pub fn anchor(mut self, anchor_x: AnchorX, anchor_y: AnchorY) -> Self {
        self.placement.anchor_x = anchor_x;
        self.placement.anchor_y = anchor_y;
        self
    }

    /// Rotation in degrees.
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.placement.rotation = degrees;
        self
    }

    /// Wrap lines at the layout width.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.placement.multiline = multiline;
        self
    }

    /// Resolution for point-to-pixel conversion.
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.placement.dpi = dpi;
        self
    }

    /// Replace the whole placement at once.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Batch, group and program to render into.
    pub fn render_target(mut self, target: RenderTarget) -> Self {
        self.target = target;
        self
    }

    /// Build the document and the label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassifierContractViolation`] if the classifier does
    /// not return one flag per character.
    pub fn build(self) -> Result<Label> {
        let base_style = StylePatch::new()
            .font_size(self.font_size)
            .bold(self.bold)
            .italic(self.italic)
            .stretch(self.stretch)
            .color(self.color)
            .align(self.align);

        let mut builder =
            DocumentBuilder::new(self.text_font, self.icon_font).with_base_style(base_style);
        if let Some(classifier) = self.classifier {
            builder = builder.with_classifier(classifier);
        }

        let document = builder.build(&self.text)?;
        Ok(Label {
            text: self.text,
            builder,
            built_layers: document.entries().len(),
            document,
            placement: self.placement,
            target: self.target,
            revision: 0,
        })
    }
}

/// A text label whose characters are split between a text and an icon font.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    builder: DocumentBuilder,
    document: StyledDocument,
    // Layers produced by the builder; anything past this is a point override.
    // On a one-char label overrides fold into the last built layer instead.
    built_layers: usize,
    placement: Placement,
    target: RenderTarget,
    revision: u64,
}

impl Label {
    /// Start configuring a label.
    pub fn builder(text: impl Into<String>) -> LabelBuilder {
        LabelBuilder::new(text)
    }

    /// Build a label with default fonts and style.
    ///
    /// # Errors
    ///
    /// See [`LabelBuilder::build`].
    pub fn new(text: impl Into<String>) -> Result<Self> {
        LabelBuilder::new(text).build()
    }

    /// The current text, exactly as it was set.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and rebuild the document.
    ///
    /// Earlier point overrides are discarded; reapply them if needed. On
    /// error the label keeps its previous text and document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassifierContractViolation`] if the classifier
    /// misbehaves on the new text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let document = self.builder.build(&text)?;
        log::debug!(
            "label text replaced ({} -> {} chars, {} overrides dropped)",
            self.document.len(),
            document.len(),
            self.override_count()
        );
        self.text = text;
        self.built_layers = document.entries().len();
        self.document = document;
        self.bump();
        Ok(())
    }

    /// Replace the text from raw bytes, which must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `bytes` is not valid UTF-8; the
    /// label is left untouched. Otherwise as [`Label::set_text`].
    pub fn set_text_utf8(&mut self, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes).map_err(|e| Error::TypeMismatch {
            expected: "UTF-8 text",
            found: format!("{} bytes ({e})", bytes.len()),
        })?;
        self.set_text(text)
    }

    /// Patch the style of the character at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position` is not a character index
    /// of the current text.
    pub fn set_style_at(&mut self, position: usize, patch: StylePatch) -> Result<()> {
        let changes_style = !patch.is_empty();
        self.document.set_style_at(position, patch)?;
        if changes_style {
            self.bump();
        }
        Ok(())
    }

    /// Recolor the character at `position`.
    ///
    /// # Errors
    ///
    /// As [`Label::set_style_at`].
    pub fn set_color_at(&mut self, position: usize, color: impl Into<Color>) -> Result<()> {
        self.set_style_at(position, StylePatch::new().color(color))
    }

    /// The styled document.
    #[must_use]
    pub fn document(&self) -> &StyledDocument {
        &self.document
    }

    /// Runs of identical style, ready for drawing.
    #[must_use]
    pub fn runs(&self) -> Vec<StyledRun<'_>> {
        self.document.runs()
    }

    /// Font used for text characters.
    #[must_use]
    pub fn text_font(&self) -> &str {
        self.builder.text_font()
    }

    /// Font used for icon characters.
    #[must_use]
    pub fn icon_font(&self) -> &str {
        self.builder.icon_font()
    }

    /// Style applied over the whole text on every rebuild.
    #[must_use]
    pub fn base_style(&self) -> &StylePatch {
        self.builder.base_style()
    }

    /// Layout placement.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Move the anchor point.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.placement.x = x;
        self.placement.y = y;
        self.placement.z = z;
        self.bump();
    }

    /// Render handles.
    #[must_use]
    pub fn render_target(&self) -> &RenderTarget {
        &self.target
    }

    /// Counter bumped on every visible change; redraw when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fonts the document uses that `registry` cannot resolve.
    #[must_use]
    pub fn missing_fonts(&self, registry: &FontRegistry) -> Vec<String> {
        self.document
            .font_families()
            .into_iter()
            .filter(|family| !registry.contains_family(family))
            .map(str::to_owned)
            .collect()
    }

    fn override_count(&self) -> usize {
        self.document.entries().len() - self.built_layers
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

//! End-to-end scenarios for labels mixing text and icons.
//!
//! These mirror how an application uses the crate: build a few labels,
//! highlight a glyph, swap the text, hand the runs to a renderer.

use std::sync::Arc;

use iconlabel::{
    Color, DocumentBuilder, Error, FnClassifier, FontRegistry, GlyphClassifier, Label,
    PrivateUseClassifier, StylePatch, StyledDocument,
};

// =============================================================================
// Helpers
// =============================================================================

/// The resolved font at every index.
fn fonts(doc: &StyledDocument) -> Vec<&str> {
    (0..doc.len())
        .map(|i| doc.font_at(i).expect("every index has a font"))
        .collect()
}

fn label(text: &str) -> Label {
    Label::builder(text)
        .text_font("Arial")
        .icon_font("Icons")
        .build()
        .unwrap()
}

// =============================================================================
// Font Assignment
// =============================================================================

#[test]
fn icon_between_letters() {
    let label = label("A\u{E700}B");
    assert_eq!(fonts(label.document()), vec!["Arial", "Icons", "Arial"]);
}

#[test]
fn space_between_icons_uses_text_font() {
    let label = label("\u{e88b} \u{e88c}");
    assert_eq!(fonts(label.document()), vec!["Icons", "Arial", "Icons"]);
}

#[test]
fn greeting_with_icon_row() {
    let text = "Hello, World! \u{e700} \u{e701} \u{e702}";
    let label = label(text);

    let runs = label.runs();
    let summary: Vec<(&str, Option<&str>)> =
        runs.iter().map(|r| (r.text, r.style.font())).collect();
    assert_eq!(
        summary,
        vec![
            ("Hello, World! ", Some("Arial")),
            ("\u{e700}", Some("Icons")),
            (" ", Some("Arial")),
            ("\u{e701}", Some("Icons")),
            (" ", Some("Arial")),
            ("\u{e702}", Some("Icons")),
        ]
    );
}

#[test]
fn upper_end_of_icon_range() {
    let label = label("\u{f7b5}\u{f800}\u{f801}");
    assert_eq!(fonts(label.document()), vec!["Icons", "Icons", "Arial"]);
}

#[test]
fn multibyte_text_is_not_split() {
    let label = label("日本\u{E700}😀");
    let runs = label.runs();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].text, "日本");
    assert_eq!(runs[2].text, "😀");
    assert_eq!(runs[2].chars, 3..4);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn highlight_first_char_only() {
    let mut label = label("abc");
    label.set_color_at(0, Color::rgba(255, 0, 0, 255)).unwrap();

    let styles = label.document().resolved_styles();
    assert_eq!(styles[0].color, Color::rgb(255, 0, 0));
    assert_eq!(styles[1].color, Color::WHITE);
    assert_eq!(styles[2].color, Color::WHITE);
}

#[test]
fn generic_patch_at_position() {
    let mut label = label("a\u{E700}");
    label
        .set_style_at(1, StylePatch::new().bold(true).font_size(30.0))
        .unwrap();

    let style = label.document().style_at(1).unwrap();
    assert!(style.bold);
    assert_eq!(style.font_size, 30.0);
    assert_eq!(style.font(), Some("Icons"));
    assert!(!label.document().style_at(0).unwrap().bold);
}

#[test]
fn override_past_end_is_rejected() {
    let mut label = label("abc");
    assert!(matches!(
        label.set_color_at(3, Color::BLACK),
        Err(Error::OutOfRange { position: 3, len: 3 })
    ));
}

#[test]
fn overrides_do_not_survive_text_change() {
    let mut label = label("abc");
    label.set_color_at(1, Color::BLACK).unwrap();
    label.set_text("xyz").unwrap();

    assert!(label
        .document()
        .resolved_styles()
        .iter()
        .all(|s| s.color == Color::WHITE));
}

// =============================================================================
// Classifiers
// =============================================================================

#[test]
fn injected_predicate() {
    let label = Label::builder("a#b")
        .text_font("Arial")
        .icon_font("Icons")
        .classifier(Arc::new(FnClassifier::new(|c: char| c == '#')))
        .build()
        .unwrap();
    assert_eq!(fonts(label.document()), vec!["Arial", "Icons", "Arial"]);
}

#[test]
fn shared_classifier_across_labels() {
    let classifier: Arc<dyn GlyphClassifier> =
        Arc::new(PrivateUseClassifier::with_range(0xE700, 0xE7FF));
    let builder = DocumentBuilder::new("Arial", "Icons").with_classifier(classifier);

    let first = builder.build("\u{E700}").unwrap();
    let second = builder.build("\u{E88B}").unwrap();
    assert_eq!(fonts(&first), vec!["Icons"]);
    assert_eq!(fonts(&second), vec!["Arial"]);
}

#[test]
fn misbehaving_classifier_is_rejected() {
    let result = Label::builder("abc")
        .classifier(Arc::new(|_: &str| vec![false; 5]))
        .build();
    assert!(matches!(
        result,
        Err(Error::ClassifierContractViolation {
            expected: 3,
            actual: 5
        })
    ));
}

// =============================================================================
// Fonts
// =============================================================================

#[test]
fn unregistered_fonts_are_reported() {
    let label = label("a\u{E700}");
    let registry = FontRegistry::new();
    assert_eq!(label.missing_fonts(&registry), vec!["Icons", "Arial"]);
}

#[test]
fn registered_fonts_are_not_reported() {
    let registry = FontRegistry::with_system_fonts();
    let Some(family) = registry.families().into_iter().next() else {
        return;
    };
    assert!(registry.contains_family(&family));

    let label = Label::builder("a\u{E700}")
        .text_font(family.as_str())
        .icon_font("Icons")
        .build()
        .unwrap();
    assert_eq!(label.missing_fonts(&registry), vec!["Icons"]);
}

#[test]
fn empty_label_needs_no_fonts() {
    let label = label("");
    assert!(label.missing_fonts(&FontRegistry::new()).is_empty());
    assert!(label.runs().is_empty());
}

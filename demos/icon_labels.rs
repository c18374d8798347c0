//! Icon Labels
//!
//! A login-window mockup: three labels mixing text and icon glyphs, printed
//! as the runs a renderer would draw.
//!
//! ```bash
//! cargo run --example icon_labels            # fonts from ./fonts, if present
//! cargo run --example icon_labels -- assets  # fonts from another directory
//! ```

use iconlabel::{BatchHandle, Color, FontRegistry, GroupHandle, Label, RenderTarget};

fn main() -> iconlabel::Result<()> {
    let font_dir = std::env::args().nth(1).unwrap_or_else(|| "fonts".to_string());

    let mut registry = FontRegistry::new();
    match registry.register_dir(&font_dir) {
        Ok(faces) => println!("Registered {faces} font face(s) from {font_dir}"),
        Err(e) => println!("No fonts registered: {e}"),
    }

    let target = RenderTarget {
        batch: Some(BatchHandle(1)),
        group: Some(GroupHandle(1)),
        program: None,
    };

    let mut lang_label = Label::builder("\u{e88b} \u{e88c} \u{e88d} \u{e985} \u{e97e}")
        .font_size(24.0)
        .position(20.0, 200.0, 0.0)
        .render_target(target)
        .build()?;
    lang_label.set_color_at(0, Color::rgba(255, 255, 205, 255))?;

    let test_label = Label::builder(
        "\u{e003} \u{e005} \u{e0a2} \u{f7b5} \u{e971} \u{e972} \u{e973} \u{e974}",
    )
    .font_size(20.0)
    .position(20.0, 20.0, 0.0)
    .render_target(target)
    .build()?;

    let mut icon_label =
        Label::builder("Hello, World! \u{e700} \u{e701} \u{e702} \u{e703} \u{e704}")
            .text_font("HarmonyOS Sans SC")
            .color(Color::WHITE)
            .position(20.0, 100.0, 0.0)
            .render_target(target)
            .build()?;

    for (name, label) in [
        ("lang", &lang_label),
        ("test", &test_label),
        ("icon", &icon_label),
    ] {
        print_label(name, label, &registry);
    }

    // Replacing the text rebuilds the document from scratch
    icon_label.set_text("Goodbye \u{e711}")?;
    print_label("icon (updated)", &icon_label, &registry);

    Ok(())
}

fn print_label(name: &str, label: &Label, registry: &FontRegistry) {
    let placement = label.placement();
    println!(
        "\n[{name}] at ({}, {}) rev {}: {:?}",
        placement.x,
        placement.y,
        label.revision(),
        label.text()
    );
    for run in label.runs() {
        let [r, g, b, a] = run.style.color.to_array();
        println!(
            "  {:>2}..{:<2} {:<20} {:>4}pt rgba({r},{g},{b},{a})  {:?}",
            run.chars.start,
            run.chars.end,
            run.style.font().unwrap_or("-"),
            run.style.font_size,
            run.text.escape_unicode().to_string()
        );
    }

    let missing = label.missing_fonts(registry);
    if !missing.is_empty() {
        println!("  missing fonts: {}", missing.join(", "));
    }
}

//! Font registration and family lookup.
//!
//! Labels only name their fonts. Before drawing, the application registers
//! the font files it ships (typically a `fonts/` directory holding the icon
//! font) and can then check that every family a label uses resolves.

use std::path::Path;

use fontdb::{Database, Family, Query, Stretch, Style, Weight};

use crate::error::{Error, Result};

/// File extensions picked up by [`FontRegistry::register_dir`].
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// A process-wide set of registered fonts, queried by family name.
///
/// ```rust
/// use iconlabel::FontRegistry;
///
/// let registry = FontRegistry::new();
/// assert!(!registry.contains_family("Segoe Fluent Icons"));
/// assert_eq!(registry.face_count(), 0);
/// ```
pub struct FontRegistry {
    db: Database,
}

impl FontRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { db: Database::new() }
    }

    /// A registry seeded with the fonts installed on the system.
    #[must_use]
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system fonts", db.len());
        Self { db }
    }

    /// Register a single font file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontLoad`] if the file cannot be read.
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let before = self.db.len();
        self.db.load_font_file(path).map_err(|source| Error::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.db.len() - before;
        if added == 0 {
            log::warn!("Font file {} contained no usable faces", path.display());
        } else {
            log::debug!("Registered {added} face(s) from {}", path.display());
        }
        Ok(())
    }

    /// Register every `.ttf`/`.otf` file directly inside `dir`.
    ///
    /// Returns the number of faces added. Files that fail to load are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontLoad`] if the directory itself cannot be read.
    pub fn register_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| Error::FontLoad {
            path: dir.to_path_buf(),
            source,
        })?;

        let before = self.db.len();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_font = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    FONT_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                });
            if !is_font || !path.is_file() {
                continue;
            }
            if let Err(e) = self.register_file(&path) {
                log::warn!("Skipping font: {e}");
            }
        }

        let added = self.db.len() - before;
        log::info!("Registered {added} face(s) from {}", dir.display());
        Ok(added)
    }

    /// Whether a face with this family name is registered.
    #[must_use]
    pub fn contains_family(&self, name: &str) -> bool {
        let query = Query {
            families: &[Family::Name(name)],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        // Closest match wins, so a bold-only family still resolves.
        self.db.query(&query).is_some()
    }

    /// All registered family names, sorted and deduplicated.
    #[must_use]
    pub fn families(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Number of registered faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("faces", &self.db.len())
            .finish()
    }
}

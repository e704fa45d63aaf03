//! Font database configuration and family fallback.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Backend-agnostic font configuration for a [`CardSurface`](crate::surface::CardSurface).
///
/// Describes the desired font setup using only standard library types; the
/// surface converts it into a concrete database via [`font_config_to_db`].
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Custom font data to register (raw TTF/OTF file bytes). Arc-wrapped for
    /// cheap cloning.
    pub custom_fonts: Vec<Arc<Vec<u8>>>,
    /// Mappings from generic CSS family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Mappings from generic CSS family names to concrete font family names, in
/// priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    /// Concrete fonts for CSS "sans-serif" (priority order).
    pub sans_serif: Vec<String>,
    /// Concrete fonts for CSS "serif" (priority order).
    pub serif: Vec<String>,
    /// Concrete fonts for CSS "monospace" (priority order).
    pub monospace: Vec<String>,
}

impl GenericFamilyMap {
    /// Returns the default generic family mappings matching browser behavior.
    pub fn defaults() -> Self {
        Self {
            sans_serif: vec!["Arial".into(), "Helvetica".into(), "Liberation Sans".into()],
            serif: vec![
                "Times New Roman".into(),
                "Times".into(),
                "Liberation Serif".into(),
                "DejaVu Serif".into(),
            ],
            monospace: vec![
                "Courier New".into(),
                "Courier".into(),
                "Liberation Mono".into(),
                "DejaVu Sans Mono".into(),
            ],
        }
    }
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
///
/// This is the single point where font configuration is translated into the
/// fontdb backend.
pub fn font_config_to_db(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        db.load_font_data(Vec::from(font.as_slice()));
    }

    apply_generic_families(&mut db, &config.generic_families);

    db
}

/// Apply generic family mappings to a fontdb database, choosing the first
/// available family from each priority list.
fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| {
            face.families
                .iter()
                .map(|(fam, _lang)| fam.clone())
                .collect::<Vec<_>>()
        })
        .collect();

    for family in &families.sans_serif {
        if available.contains(family) {
            db.set_sans_serif_family(family);
            break;
        }
    }

    for family in &families.serif {
        if available.contains(family) {
            db.set_serif_family(family);
            break;
        }
    }

    for family in &families.monospace {
        if available.contains(family) {
            db.set_monospace_family(family);
            break;
        }
    }
}

/// Whether a concrete family name is present in the database.
pub(crate) fn family_available(db: &fontdb::Database, family: &str) -> bool {
    db.faces().any(|face| {
        face.families
            .iter()
            .any(|(name, _lang)| name.eq_ignore_ascii_case(family))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_config() {
        let config = FontConfig::default();
        assert!(config.custom_fonts.is_empty());
        assert!(config.load_system_fonts);
        assert!(config.font_dirs.is_empty());
        assert_eq!(config.generic_families.sans_serif[0], "Arial");
    }

    #[test]
    fn test_generic_family_defaults() {
        let defaults = GenericFamilyMap::defaults();
        assert_eq!(
            defaults.sans_serif,
            vec!["Arial", "Helvetica", "Liberation Sans"]
        );
        assert_eq!(
            defaults.serif,
            vec![
                "Times New Roman",
                "Times",
                "Liberation Serif",
                "DejaVu Serif"
            ]
        );
    }

    #[test]
    fn test_font_config_to_db_no_system_fonts() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        let db = font_config_to_db(&config);
        // With no system fonts and no custom fonts, database should have no faces
        assert_eq!(db.faces().count(), 0);
    }

    #[test]
    fn test_family_available_empty_db() {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        let db = font_config_to_db(&config);
        assert!(!family_available(&db, "Arial"));
    }

    #[test]
    fn test_font_config_clone_is_cheap() {
        let data = Arc::new(vec![0u8; 1000]);
        let config = FontConfig {
            custom_fonts: vec![data.clone()],
            ..FontConfig::default()
        };
        let cloned = config.clone();
        // Arc should share the same allocation
        assert!(Arc::ptr_eq(&config.custom_fonts[0], &cloned.custom_fonts[0]));
    }
}

//! URL slugs for category archive paths.

/// Slugify a category title for `/blog/category/<slug>`.
///
/// Non-ASCII letters are transliterated, everything is lowercased and every
/// run of whitespace collapses to a single `-`.
///
/// - `"Heart Health"` -> `"heart-health"`
/// - `"Mental  Well Being"` -> `"mental-well-being"`
/// - `"Ernährung"` -> `"ernahrung"`
pub fn slugify(title: &str) -> String {
    deunicode::deunicode(title)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

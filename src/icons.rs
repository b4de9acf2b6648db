//! Icon Resolver
//!
//! Maps a course/product type tag to its display glyph via a fixed table.
//! Pure lookups over embedded data; unknown tags fall back to the `default`
//! entry.

/// Tag -> glyph table. The `default` entry is the configured fallback for
/// unknown tags.
static ICONS: &[(&str, &str)] = &[
    ("ciberseguridad", "🔒"),
    ("telegram", "📱"),
    ("tienda-netflix", "📺"),
    ("tienda-hbo-max", "🎬"),
    ("tienda-auricular-bluetooth", "🎧"),
    ("default", "📦"),
];

/// Raw table lookup. `None` on a miss.
pub fn lookup_icon(tag: &str) -> Option<&'static str> {
    ICONS.iter().find(|(key, _)| *key == tag).map(|(_, glyph)| *glyph)
}

/// Resolve a type tag to a glyph.
///
/// Unknown tags resolve to the `default` table entry; the empty string is
/// returned only if the table were ever to lose that entry.
pub fn resolve_icon(tag: &str) -> &'static str {
    lookup_icon(tag).or_else(|| lookup_icon("default")).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_resolve_to_mapped_glyphs() {
        assert_eq!(resolve_icon("ciberseguridad"), "🔒");
        assert_eq!(resolve_icon("telegram"), "📱");
        assert_eq!(resolve_icon("tienda-netflix"), "📺");
        assert_eq!(resolve_icon("tienda-hbo-max"), "🎬");
        assert_eq!(resolve_icon("tienda-auricular-bluetooth"), "🎧");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default_glyph() {
        assert_eq!(resolve_icon("tienda-disney-plus"), "📦");
        assert_eq!(resolve_icon(""), "📦");
    }

    #[test]
    fn test_table_carries_a_default_entry() {
        // resolve_icon's empty-string branch is unreachable while this holds
        assert!(lookup_icon("default").is_some());
    }

    #[test]
    fn test_lookup_distinguishes_a_miss() {
        assert!(lookup_icon("tienda-disney-plus").is_none());
        assert_eq!(lookup_icon("telegram"), Some("📱"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        // Tags come from the data file verbatim; no normalization
        assert!(lookup_icon("Telegram").is_none());
    }
}

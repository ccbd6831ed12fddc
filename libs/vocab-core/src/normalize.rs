//! Answer normalization for locale-insensitive comparison.
//!
//! Accented and unaccented spellings compare equal: input is trimmed,
//! lowercased, NFD-decomposed, and stripped of combining marks.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for comparison. Total and idempotent.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Whether two answers are equal after normalization.
pub fn is_exact_match(candidate: &str, reference: &str) -> bool {
    normalize(candidate) == normalize(reference)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Perro  "), "perro");
        assert_eq!(normalize("GATO"), "gato");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("canción"), "cancion");
        assert_eq!(normalize("Über"), "uber");
        assert_eq!(normalize("café"), "cafe");
    }

    #[test]
    fn test_idempotent() {
        for s in ["  Canción  ", "perro", "ÄÖÜ", "", "niño pequeño"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_match_ignores_case_and_accents() {
        assert!(is_exact_match("Cancion", "canción"));
        assert!(is_exact_match("PERRO", "perro"));
        assert!(is_exact_match(" perro ", "perro"));
    }

    #[test]
    fn test_different_words_do_not_match() {
        assert!(!is_exact_match("gatto", "gato"));
        assert!(!is_exact_match("", "gato"));
    }
}

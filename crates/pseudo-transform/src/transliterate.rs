//! Code-point substitution transforms.
//!
//! These run on literal spans only, so placeholder names are never rewritten.

use crate::tables::{CIRCLED, DIACRITIC, FULLWIDTH, substitute};

fn transliterate(text: &str, table: &[(char, char)]) -> String {
    text.chars().map(|ch| substitute(table, ch)).collect()
}

/// Replace each Latin letter with the same letter carrying a diacritic.
///
/// ```
/// use pseudo_transform::transliterate_diacritic;
///
/// assert_eq!(transliterate_diacritic("Hello"), "Ȟêĺĺø");
/// ```
pub fn transliterate_diacritic(text: &str) -> String {
    transliterate(text, &DIACRITIC)
}

/// Replace each Latin letter or digit with its circled form.
pub fn transliterate_circled(text: &str) -> String {
    transliterate(text, &CIRCLED)
}

/// Replace each Latin letter or digit with its fullwidth form.
pub fn transliterate_fullwidth(text: &str) -> String {
    transliterate(text, &FULLWIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diacritic_leaves_digits_and_punctuation() {
        assert_eq!(transliterate_diacritic("Row 42!"), "Ȓøẁ 42!");
    }

    #[test]
    fn circled_and_fullwidth_cover_digits() {
        assert_eq!(transliterate_circled("a1"), "ⓐ①");
        assert_eq!(transliterate_fullwidth("a1"), "ａ１");
    }

    #[test]
    fn non_latin_text_is_unchanged() {
        let text = "Привет, 世界 ¿?";
        assert_eq!(transliterate_diacritic(text), text);
        assert_eq!(transliterate_circled(text), text);
        assert_eq!(transliterate_fullwidth(text), text);
    }
}

//! Length-expansion transforms.
//!
//! Translated UI text is usually longer than its English source. The target
//! length follows the IBM globalization guideline on UI expansion:
//!
//! | source length | factor |
//! |---------------|--------|
//! | 1-10          | 3.0    |
//! | 11-20         | 2.0    |
//! | 21-30         | 1.8    |
//! | 31-50         | 1.6    |
//! | 51-70         | 1.4    |
//! | over 70       | 1.3    |
//!
//! and the target is `ceil(length * factor)`.

use std::iter::repeat_n;
use std::sync::LazyLock;

use pseudo_model::TransformScope;

use crate::catalog::TransformKind;
use crate::placeholder;
use crate::tables::PADDING_ALPHABET;

const BASE_VOWELS: &str = "aeiouAEIOU";

/// Plain vowels plus every transliterated form of them.
static VOWELS: LazyLock<Vec<char>> = LazyLock::new(|| {
    let mut vowels: Vec<char> = BASE_VOWELS.chars().collect();
    for kind in TransformKind::ALL {
        if kind.scope() == TransformScope::SpanScoped {
            vowels.extend(kind.apply(BASE_VOWELS).chars());
        }
    }
    vowels
});

/// Expansion factor for a string of `len` characters, as `(numerator, denominator)`.
fn expansion_factor(len: usize) -> (usize, usize) {
    match len {
        0..=10 => (3, 1),
        11..=20 => (2, 1),
        21..=30 => (18, 10),
        31..=50 => (16, 10),
        51..=70 => (14, 10),
        _ => (13, 10),
    }
}

/// Target length for a string of `len` characters.
///
/// Computed in integer arithmetic; never smaller than `len`.
///
/// ```
/// use pseudo_transform::target_length;
///
/// assert_eq!(target_length(0), 0);
/// assert_eq!(target_length(5), 15);
/// assert_eq!(target_length(43), 69);
/// ```
pub fn target_length(len: usize) -> usize {
    let (numerator, denominator) = expansion_factor(len);
    len.saturating_mul(numerator).div_ceil(denominator)
}

/// Returns true for a vowel in any of the supported scripts.
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Append filler characters until the string reaches its target length.
///
/// Placeholders count toward the measured length. Filler is taken from
/// [`PADDING_ALPHABET`] in order, wrapping around.
pub fn pad_length(text: &str) -> String {
    let len = text.chars().count();
    let deficit = target_length(len) - len;
    let mut padded = String::with_capacity(text.len() + deficit * 4);
    padded.push_str(text);
    padded.extend(PADDING_ALPHABET.iter().cycle().take(deficit));
    padded
}

/// Repeat vowels until the literal text reaches its target length.
///
/// Only literal spans are measured and modified. The deficit is spread over
/// the vowels left to right: each vowel is emitted
/// `remaining_deficit / remaining_vowels + 1` times, so the last vowel
/// absorbs whatever the integer division left over. Without any vowel the
/// last character of the string is repeated instead.
pub fn expand_vowels(text: &str) -> String {
    let Some(last) = text.chars().last() else {
        return String::new();
    };
    let spans = placeholder::split(text);

    let mut literal_len = 0;
    let mut remaining_vowels = 0;
    for span in spans.iter().filter(|span| span.is_literal()) {
        literal_len += span.char_len();
        remaining_vowels += span.text.chars().filter(|&ch| is_vowel(ch)).count();
    }
    let mut deficit = target_length(literal_len) - literal_len;

    let mut expanded = String::with_capacity(text.len() + deficit * 4);
    if remaining_vowels == 0 {
        expanded.push_str(text);
        expanded.extend(repeat_n(last, deficit));
        return expanded;
    }

    for span in &spans {
        if span.is_placeholder() {
            expanded.push_str(&span.text);
            continue;
        }
        for ch in span.text.chars() {
            if remaining_vowels > 0 && is_vowel(ch) {
                let extra = deficit / remaining_vowels;
                expanded.extend(repeat_n(ch, extra + 1));
                deficit -= extra;
                remaining_vowels -= 1;
            } else {
                expanded.push(ch);
            }
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_length_table_boundaries() {
        assert_eq!(target_length(1), 3);
        assert_eq!(target_length(10), 30);
        assert_eq!(target_length(11), 22);
        assert_eq!(target_length(20), 40);
        assert_eq!(target_length(21), 38);
        assert_eq!(target_length(30), 54);
        assert_eq!(target_length(31), 50);
        assert_eq!(target_length(50), 80);
        assert_eq!(target_length(51), 72);
        assert_eq!(target_length(70), 98);
        assert_eq!(target_length(71), 93);
        assert_eq!(target_length(100), 130);
    }

    #[test]
    fn pad_length_uses_alphabet_in_order() {
        assert_eq!(pad_length("Hello"), "Hello﹎ЍאǆᾏⅧ㈴㋹퓛ﺏ");
        assert_eq!(pad_length(""), "");
    }

    #[test]
    fn pad_length_wraps_alphabet() {
        let padded = pad_length("a very long line of text..");
        // 26 chars -> target 47, deficit 21
        let filler: Vec<char> = padded.chars().skip(26).collect();
        assert_eq!(filler.len(), 21);
        assert_eq!(filler[12], PADDING_ALPHABET[0]);
        assert_eq!(filler[20], PADDING_ALPHABET[8]);
    }

    #[test]
    fn single_vowel_takes_whole_deficit() {
        assert_eq!(expand_vowels("Row"), "Rooooooow");
    }

    #[test]
    fn no_vowels_repeats_last_char() {
        assert_eq!(expand_vowels("jmpng"), "jmpnggggggggggg");
    }

    #[test]
    fn deficit_spreads_left_to_right() {
        assert_eq!(expand_vowels("banana split"), "baaaanaaaanaaaa spliiiit");
    }

    #[test]
    fn placeholders_are_not_measured_or_expanded() {
        assert_eq!(
            expand_vowels("Hello {name}, you have %d new messages"),
            "Heeellooo {name}, yooouuu haaaveee %d neeeew meeeessaaaageeees"
        );
    }

    #[test]
    fn transliterated_vowels_are_recognized() {
        assert!(is_vowel('ø'));
        assert!(is_vowel('ⓐ'));
        assert!(is_vowel('ｅ'));
        assert!(is_vowel('İ'));
        assert!(!is_vowel('y'));
        assert_eq!(expand_vowels("Ťêà"), "Ťêêêêàààà");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(expand_vowels(""), "");
    }

    #[test]
    fn placeholder_only_input_is_unchanged() {
        assert_eq!(expand_vowels("{0}"), "{0}");
    }
}

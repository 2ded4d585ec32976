//! Constant substitution data used by the transforms.
//!
//! Each table is sorted by source character so lookups can binary search.
//! Characters missing from a table pass through unchanged.

/// Look up `ch` in a sorted substitution table.
pub fn substitute(table: &[(char, char)], ch: char) -> char {
    match table.binary_search_by_key(&ch, |&(source, _)| source) {
        Ok(idx) => table[idx].1,
        Err(_) => ch,
    }
}

/// Filler characters appended by length padding, consumed cyclically.
///
/// Mixes scripts, widths and characters outside the Basic Multilingual Plane.
pub static PADDING_ALPHABET: [char; 12] = [
    '\u{fe4e}',  // ﹎ CENTRELINE LOW LINE
    '\u{040d}',  // Ѝ CYRILLIC CAPITAL LETTER I WITH GRAVE
    '\u{05d0}',  // א HEBREW LETTER ALEF
    '\u{01c6}',  // ǆ LATIN SMALL LETTER DZ WITH CARON
    '\u{1f8f}',  // ᾏ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
    '\u{2167}',  // Ⅷ ROMAN NUMERAL EIGHT
    '\u{3234}',  // ㈴ PARENTHESIZED IDEOGRAPH NAME
    '\u{32f9}',  // ㋹ CIRCLED KATAKANA RE
    '\u{d4db}',  // 퓛 HANGUL SYLLABLE PWILH
    '\u{fe8f}',  // ﺏ ARABIC LETTER BEH ISOLATED FORM
    '\u{1d7d8}', // 𝟘 MATHEMATICAL DOUBLE-STRUCK DIGIT ZERO
    '\u{1f6a6}', // 🚦 VERTICAL TRAFFIC LIGHT
];

/// ASCII letters to the same letter carrying a diacritic mark.
#[rustfmt::skip]
pub static DIACRITIC: [(char, char); 52] = [
    ('A', 'Å'), ('B', 'Ɓ'), ('C', 'Ċ'), ('D', 'Đ'),
    ('E', 'Ȅ'), ('F', 'Ḟ'), ('G', 'Ġ'), ('H', 'Ȟ'),
    ('I', 'İ'), ('J', 'Ĵ'), ('K', 'Ǩ'), ('L', 'Ĺ'),
    ('M', 'Ṁ'), ('N', 'Ñ'), ('O', 'Ò'), ('P', 'Ƥ'),
    ('Q', 'Ꝗ'), ('R', 'Ȓ'), ('S', 'Ș'), ('T', 'Ť'),
    ('U', 'Ü'), ('V', 'Ṽ'), ('W', 'Ẃ'), ('X', 'Ẍ'),
    ('Y', 'Ẏ'), ('Z', 'Ž'), ('a', 'à'), ('b', 'ƀ'),
    ('c', 'ċ'), ('d', 'đ'), ('e', 'ê'), ('f', 'ƒ'),
    ('g', 'ğ'), ('h', 'ȟ'), ('i', 'ı'), ('j', 'ǰ'),
    ('k', 'ǩ'), ('l', 'ĺ'), ('m', 'ɱ'), ('n', 'ñ'),
    ('o', 'ø'), ('p', 'ƥ'), ('q', 'ʠ'), ('r', 'ȓ'),
    ('s', 'š'), ('t', 'ť'), ('u', 'ü'), ('v', 'ṽ'),
    ('w', 'ẁ'), ('x', 'ẋ'), ('y', 'ÿ'), ('z', 'ź'),
];

/// ASCII letters and digits to their circled forms.
#[rustfmt::skip]
pub static CIRCLED: [(char, char); 62] = [
    ('0', '⓪'), ('1', '①'), ('2', '②'), ('3', '③'),
    ('4', '④'), ('5', '⑤'), ('6', '⑥'), ('7', '⑦'),
    ('8', '⑧'), ('9', '⑨'), ('A', 'Ⓐ'), ('B', 'Ⓑ'),
    ('C', 'Ⓒ'), ('D', 'Ⓓ'), ('E', 'Ⓔ'), ('F', 'Ⓕ'),
    ('G', 'Ⓖ'), ('H', 'Ⓗ'), ('I', 'Ⓘ'), ('J', 'Ⓙ'),
    ('K', 'Ⓚ'), ('L', 'Ⓛ'), ('M', 'Ⓜ'), ('N', 'Ⓝ'),
    ('O', 'Ⓞ'), ('P', 'Ⓟ'), ('Q', 'Ⓠ'), ('R', 'Ⓡ'),
    ('S', 'Ⓢ'), ('T', 'Ⓣ'), ('U', 'Ⓤ'), ('V', 'Ⓥ'),
    ('W', 'Ⓦ'), ('X', 'Ⓧ'), ('Y', 'Ⓨ'), ('Z', 'Ⓩ'),
    ('a', 'ⓐ'), ('b', 'ⓑ'), ('c', 'ⓒ'), ('d', 'ⓓ'),
    ('e', 'ⓔ'), ('f', 'ⓕ'), ('g', 'ⓖ'), ('h', 'ⓗ'),
    ('i', 'ⓘ'), ('j', 'ⓙ'), ('k', 'ⓚ'), ('l', 'ⓛ'),
    ('m', 'ⓜ'), ('n', 'ⓝ'), ('o', 'ⓞ'), ('p', 'ⓟ'),
    ('q', 'ⓠ'), ('r', 'ⓡ'), ('s', 'ⓢ'), ('t', 'ⓣ'),
    ('u', 'ⓤ'), ('v', 'ⓥ'), ('w', 'ⓦ'), ('x', 'ⓧ'),
    ('y', 'ⓨ'), ('z', 'ⓩ'),
];

/// ASCII letters and digits to their fullwidth forms.
#[rustfmt::skip]
pub static FULLWIDTH: [(char, char); 62] = [
    ('0', '０'), ('1', '１'), ('2', '２'), ('3', '３'),
    ('4', '４'), ('5', '５'), ('6', '６'), ('7', '７'),
    ('8', '８'), ('9', '９'), ('A', 'Ａ'), ('B', 'Ｂ'),
    ('C', 'Ｃ'), ('D', 'Ｄ'), ('E', 'Ｅ'), ('F', 'Ｆ'),
    ('G', 'Ｇ'), ('H', 'Ｈ'), ('I', 'Ｉ'), ('J', 'Ｊ'),
    ('K', 'Ｋ'), ('L', 'Ｌ'), ('M', 'Ｍ'), ('N', 'Ｎ'),
    ('O', 'Ｏ'), ('P', 'Ｐ'), ('Q', 'Ｑ'), ('R', 'Ｒ'),
    ('S', 'Ｓ'), ('T', 'Ｔ'), ('U', 'Ｕ'), ('V', 'Ｖ'),
    ('W', 'Ｗ'), ('X', 'Ｘ'), ('Y', 'Ｙ'), ('Z', 'Ｚ'),
    ('a', 'ａ'), ('b', 'ｂ'), ('c', 'ｃ'), ('d', 'ｄ'),
    ('e', 'ｅ'), ('f', 'ｆ'), ('g', 'ｇ'), ('h', 'ｈ'),
    ('i', 'ｉ'), ('j', 'ｊ'), ('k', 'ｋ'), ('l', 'ｌ'),
    ('m', 'ｍ'), ('n', 'ｎ'), ('o', 'ｏ'), ('p', 'ｐ'),
    ('q', 'ｑ'), ('r', 'ｒ'), ('s', 'ｓ'), ('t', 'ｔ'),
    ('u', 'ｕ'), ('v', 'ｖ'), ('w', 'ｗ'), ('x', 'ｘ'),
    ('y', 'ｙ'), ('z', 'ｚ'),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: &[(char, char)]) {
        assert!(table.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn tables_are_sorted_for_binary_search() {
        assert_sorted(&DIACRITIC);
        assert_sorted(&CIRCLED);
        assert_sorted(&FULLWIDTH);
    }

    #[test]
    fn substitute_passes_unmapped_through() {
        assert_eq!(substitute(&DIACRITIC, 'H'), 'Ȟ');
        assert_eq!(substitute(&DIACRITIC, '7'), '7');
        assert_eq!(substitute(&CIRCLED, '7'), '⑦');
        assert_eq!(substitute(&FULLWIDTH, '!'), '!');
    }
}

//! Bracket transforms.
//!
//! Wrapping the whole string makes truncation visible: if either marker is
//! missing on screen, the UI cut the string short.

fn wrap(text: &str, open: char, close: char) -> String {
    let mut wrapped = String::with_capacity(text.len() + open.len_utf8() + close.len_utf8());
    wrapped.push(open);
    wrapped.push_str(text);
    wrapped.push(close);
    wrapped
}

/// Surround the text with `《` and `》`.
pub fn angle_brackets(text: &str) -> String {
    wrap(text, '《', '》')
}

/// Surround the text with `❴` and `❵`.
pub fn curly_brackets(text: &str) -> String {
    wrap(text, '❴', '❵')
}

/// Surround the text with `⟦` and `⟧`.
pub fn square_brackets(text: &str) -> String {
    wrap(text, '⟦', '⟧')
}

/// Surround the text with plain ASCII `[` and `]`.
pub fn simple_square_brackets(text: &str) -> String {
    wrap(text, '[', ']')
}

//! Pseudo-localization transforms.
//!
//! This crate provides the building blocks of the engine:
//!
//! - **placeholder**: splits text into literal and placeholder spans
//! - **tables**: code-point substitution tables and the padding alphabet
//! - **transliterate**: diacritic, circled and fullwidth substitution
//! - **brackets**: bracket wrapping
//! - **expansion**: UI-expansion target length, padding and vowel expansion
//! - **catalog**: the named [`TransformKind`] set with fixed scopes

pub mod brackets;
pub mod catalog;
pub mod expansion;
pub mod placeholder;
pub mod tables;
pub mod transliterate;

pub use brackets::{angle_brackets, curly_brackets, simple_square_brackets, square_brackets};
pub use catalog::TransformKind;
pub use expansion::{expand_vowels, is_vowel, pad_length, target_length};
pub use placeholder::{contains_placeholder, is_placeholder, split};
pub use transliterate::{transliterate_circled, transliterate_diacritic, transliterate_fullwidth};

//! Gettext catalog support for the pseudo-localization engine.
//!
//! Turns a `.pot` template into a `.po` catalog whose `msgstr` entries are
//! pseudo-localized copies of their `msgid`.

pub mod encoding;
pub mod error;
pub mod po;

pub use encoding::TextEncoding;
pub use error::{CatalogError, Result};
pub use po::{CatalogOptions, CatalogStats, pseudolocalize_file, pseudolocalize_reader};

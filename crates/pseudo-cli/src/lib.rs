//! Library components of the `pseudol10n` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod summary;

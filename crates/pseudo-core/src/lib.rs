//! Pseudo-localization engine.
//!
//! Wraps the transform catalog from `pseudo-transform` in a configurable
//! pipeline. See [`PseudoLocalizer`].

pub mod localizer;

pub use localizer::{DEFAULT_TRANSFORMS, PseudoLocalizer};
pub use pseudo_model::{PseudoError, Result, StringsRequest, StringsResponse};
pub use pseudo_transform::TransformKind;

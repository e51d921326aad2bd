//! Error types for the IoU computation.

use thiserror::Error;

/// Errors surfaced by the top-level entry point.
///
/// The parallel/colinear outcomes of line classification are ordinary
/// branches of the clipping sweep and never reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IouError {
    /// A polygon keeps fewer than 3 distinct vertices after
    /// deduplication and cannot bound an area.
    #[error("polygon has {got} distinct vertices, need at least 3")]
    TooFewVertices { got: usize },

    /// The union of the two areas vanishes under the rounding
    /// tolerance; the ratio is undefined.
    #[error("union of the polygon areas is zero")]
    DegenerateUnion,
}

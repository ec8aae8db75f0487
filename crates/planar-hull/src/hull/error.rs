use super::types::Point;

/// Why a hull could not be built.
///
/// Near-duplicates and near-collinear triples are absorbed by the tolerances in
/// `HullCfg` and never show up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("not enough points to form a hull (got {got}, need at least 3)")]
    InsufficientInput { got: usize },

    /// All points lie on one segment; `start` is the anchor, `end` the farthest point from it.
    #[error("points are collinear from ({}, {}) to ({}, {})", .start.x, .start.y, .end.x, .end.y)]
    DegenerateInput { start: Point, end: Point },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteInput { index: usize },
}

pub type Result<T> = std::result::Result<T, HullError>;

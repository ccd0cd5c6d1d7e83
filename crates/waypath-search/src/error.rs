//! Typed search errors.
//!
//! Invalid input and a genuinely empty search result are distinct kinds:
//! [`SearchError::NoPath`] only ever means the space was exhausted (or a
//! predecessor chain was broken during reconstruction), never that an
//! argument was rejected.

use waypath_core::Point;

/// Failure of a search operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The grid has no cells.
    #[error("grid has no cells")]
    EmptyGrid,
    /// The graph has no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// A start or target point lies outside the grid.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),
    /// A start or target identifier names no vertex in the graph.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(String),
    /// Heuristic-guided search needs coordinates on every vertex.
    #[error("vertex {0:?} has no coordinates")]
    MissingCoordinates(String),
    /// The computed straight-line distance was not a finite number.
    #[error("euclidean distance is not finite")]
    NonFiniteDistance,
    /// The search space was exhausted without reaching the target.
    #[error("no path between start and target")]
    NoPath,
}

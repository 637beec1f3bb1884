use crate::geom::{Edge, Point, Rectangle};

/// Coarse classification of a [`DiagramError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's points or border are unusable.
    Input,
    /// The algorithm reached an inconsistent state (usually a numerical degeneracy).
    InvariantViolation,
}

/// Errors surfaced by [`DelaunayDiagram::split`](super::DelaunayDiagram::split).
///
/// No variant is recoverable inside the engine; every split either returns a
/// complete triangulation or one of these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DiagramError {
    /// An input point is on or outside the border rectangle.
    #[error("point outside border rectangle: {point} not strictly inside {border:?}")]
    OutsideBorder {
        /// The offending point
        point: Point,
        /// The border it was checked against
        border: Rectangle,
    },

    /// The deduplicated input cannot span a single triangle.
    #[error("degenerate input ({distinct} distinct points): {reason}")]
    DegenerateInput {
        /// Number of distinct input points
        distinct: usize,
        /// Why no triangulation exists
        reason: &'static str,
    },

    /// No working triangle contains the point.
    #[error("no triangle contains point {point}")]
    Unlocatable {
        /// The point being inserted
        point: Point,
    },

    /// Harvested boundary edges do not form one closed loop.
    #[error("fail to calc frame: {} boundary edges do not close into one loop", .edges.len())]
    OpenHull {
        /// Boundary edges collected from container-touching triangles
        edges: Vec<Edge>,
    },

    /// Concave hull corners remain that cannot be filled without overlap.
    #[error("hull stays concave at {corner}")]
    NonConvexHull {
        /// The concave hull vertex
        corner: Point,
    },

    /// A surviving edge has no adjacency record.
    #[error("no triangle pair recorded for surviving edge {edge}")]
    MissingAdjacency {
        /// The edge without a record
        edge: Edge,
    },

    /// An adjacency record refers to a triangle that did not survive.
    #[error("triangle pair for edge {edge} references a removed triangle")]
    StaleAdjacency {
        /// The edge whose record is stale
        edge: Edge,
    },

    /// Legalization exceeded its flip budget (cycling on near-cocircular input).
    #[error("legalization did not terminate after {flips} flips (last edge {edge})")]
    NonTerminating {
        /// Flips performed in the failing legalization pass
        flips: usize,
        /// Edge being examined when the budget ran out
        edge: Edge,
    },

    /// Insertion or flipping needed an adjacency record that is missing or malformed.
    #[error("broken topology at edge {edge}: {reason}")]
    BrokenTopology {
        /// Edge being updated
        edge: Edge,
        /// What was wrong with its record
        reason: &'static str,
    },
}

impl DiagramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutsideBorder { .. } | Self::DegenerateInput { .. } | Self::Unlocatable { .. } => {
                ErrorKind::Input
            }
            Self::OpenHull { .. }
            | Self::NonConvexHull { .. }
            | Self::MissingAdjacency { .. }
            | Self::StaleAdjacency { .. }
            | Self::NonTerminating { .. }
            | Self::BrokenTopology { .. } => ErrorKind::InvariantViolation,
        }
    }

    #[inline]
    pub(crate) fn broken(edge: Edge, reason: &'static str) -> Self {
        Self::BrokenTopology { edge, reason }
    }
}

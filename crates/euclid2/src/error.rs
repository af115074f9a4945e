//! Error taxonomy for the kernel's fallible boundary.
//!
//! Validation happens once, at construction of the strengthened types
//! (`NonzeroVec`, `NdSegment`, `NdTriangle`, `ConvexQuad`). Operations on an
//! already-validated value are total and never return these errors.

use thiserror::Error;

/// Caller-facing rejection causes. All are recoverable; none is a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A nondegeneracy precondition failed: zero vector, coincident points,
    /// or a collinear triple.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// A congruence criterion was applied across a reflection. The caller
    /// must relabel one triangle (`NdTriangle::reflect`) before retrying.
    #[error("triangles have opposite orientation; reflect one explicitly first")]
    OrientationMismatch,

    /// A convexity-gated query was invoked on a non-convex (possibly
    /// crossed) quadrilateral.
    #[error("quadrilateral is not convex")]
    NotConvex,
}

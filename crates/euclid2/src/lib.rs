//! Planar Euclidean geometry kernel.
//!
//! An algebra of directions, vectors, rays, and segments, with the
//! incidence, parallelism/perpendicularity, triangle-congruence, and
//! quadrilateral-classification reasoning built on top. Consumed
//! in-process by surrounding polygon/circle modules; there is no wire
//! format, file format, or CLI here.
//!
//! Design
//! - Quotient types (`Dir`, `Proj`, `AngValue`) are normalized wrappers;
//!   equality compares canonical representatives.
//! - Nondegeneracy is validated once, at construction of the strengthened
//!   types; downstream operations are total.
//! - All values are immutable `Copy` data; every operation is pure, so
//!   batch queries parallelize without synchronization.

pub mod algebra;
pub mod congruence;
pub mod error;
pub mod incidence;
pub mod quad;
pub mod relations;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algebra::{AngValue, Dir, DirMatch, GeomCfg, NonzeroVec, Proj};
pub use error::GeomError;
pub use nalgebra::{Point2 as Pt2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{AngValue, Dir, DirMatch, GeomCfg, NonzeroVec, Proj};
    pub use crate::congruence::{
        congruent_sas, congruent_sss, orientation_match, Congruence, CongruenceWitness,
        NdTriangle, Orientation, OrientationMatch, Triangle,
    };
    pub use crate::error::GeomError;
    pub use crate::incidence::{Angle, NdSegment, Ray, Segment};
    pub use crate::quad::{
        is_convex, is_parallelogram, is_parallelogram_eps, is_parallelogram_nd, ConvexQuad,
        Convexity, Pair, ParallelogramCheck, ParallelogramNd, Quadrilateral,
    };
    pub use crate::relations::{
        parallel, parallel_eps, perpendicular, perpendicular_eps, Line, ToProj,
    };
    pub use nalgebra::{Point2 as Pt2, Vector2 as Vec2};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

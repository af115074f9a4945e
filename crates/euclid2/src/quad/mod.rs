//! Quadrilateral and parallelogram classification.
//!
//! Purpose
//! - The convexity case split (`Convexity`), the weak vectorial
//!   parallelogram predicate, the convex/nondegenerate refinement
//!   (`ParallelogramNd`), and the equivalence engine relating the five
//!   parallelogram characterizations through triangle congruence.
//!
//! Code cross-refs: `congruence::{congruent_sss, congruent_sas}`,
//! `relations::parallel_eps`.

mod parallelogram;
pub mod rand;
mod types;

pub use parallelogram::{is_parallelogram_nd, Pair, ParallelogramCheck, ParallelogramNd};
pub use types::{
    is_convex, is_parallelogram, is_parallelogram_eps, ConvexQuad, Convexity, Quadrilateral,
};

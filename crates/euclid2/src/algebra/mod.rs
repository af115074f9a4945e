//! Vector/direction algebra: the substrate for incidence, relations,
//! congruence, and classification.
//!
//! Purpose
//! - Encode the three quotient types (`Dir`, `Proj`, `AngValue`) as
//!   normalized wrappers with exact canonical-representative equality and a
//!   separate tolerant-comparison API.
//!
//! Code cross-refs: `incidence::{Ray, Segment, NdSegment}`,
//! `relations::{parallel_eps, perpendicular_eps}`.

mod types;

pub use types::{AngValue, Dir, DirMatch, GeomCfg, NonzeroVec, Proj};
pub(crate) use types::EPS;

#[cfg(test)]
mod tests;

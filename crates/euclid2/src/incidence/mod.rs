//! Incidence geometry: points, rays, segments, and validated
//! nondegenerate segments.
//!
//! Purpose
//! - Membership (`contains`/`interior`), reversal, extension, length, and
//!   midpoint over the affine plane, with nondegeneracy established once
//!   at construction (`NdSegment`) and preserved by every transformation.
//!
//! Code cross-refs: `algebra::{Dir, NonzeroVec, Proj}`,
//! `relations::{Line, ToProj}`.

mod types;

pub use types::{Angle, NdSegment, Ray, Segment};

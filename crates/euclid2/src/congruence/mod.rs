//! Congruence engine: nondegenerate triangles, orientation tags, and the
//! SSS/SAS criteria with structured witnesses.
//!
//! Purpose
//! - Convert metric/angular hypotheses into full corresponding-part
//!   equalities, refusing mirror-image comparisons unless the caller
//!   reflects explicitly.
//!
//! Code cross-refs: `quad::parallelogram` (the principal consumer).

mod criteria;
mod types;

pub use criteria::{congruent_sas, congruent_sss, orientation_match};
pub use types::{Congruence, CongruenceWitness, NdTriangle, Orientation, OrientationMatch, Triangle};

#[cfg(test)]
mod tests;

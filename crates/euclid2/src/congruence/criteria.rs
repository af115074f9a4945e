//! SSS and SAS congruence criteria under the signed-orientation constraint.
//!
//! Both criteria refuse to compare across a reflection: the caller must
//! relabel one triangle (`NdTriangle::reflect`) and retry. With matching
//! orientation, equal data forces equal signed angle values, not just
//! magnitudes, and the returned witness carries the signed values.

use crate::algebra::GeomCfg;
use crate::error::GeomError;

use super::types::{Congruence, CongruenceWitness, NdTriangle, OrientationMatch};

/// Compare turning senses. Total on nondegenerate triangles.
#[inline]
pub fn orientation_match(t1: &NdTriangle, t2: &NdTriangle) -> OrientationMatch {
    if t1.orientation() == t2.orientation() {
        OrientationMatch::Same
    } else {
        OrientationMatch::Reversed
    }
}

#[inline]
fn witness_of(t: &NdTriangle) -> CongruenceWitness {
    CongruenceWitness {
        sides: [t.side(0).length(), t.side(1).length(), t.side(2).length()],
        angles: [t.angle_at(0), t.angle_at(1), t.angle_at(2)],
    }
}

/// Side-side-side: all three corresponding side lengths equal, same
/// orientation. Concludes equality of all three signed angle values.
pub fn congruent_sss(
    t1: &NdTriangle,
    t2: &NdTriangle,
    cfg: GeomCfg,
) -> Result<Congruence, GeomError> {
    if orientation_match(t1, t2) == OrientationMatch::Reversed {
        return Err(GeomError::OrientationMismatch);
    }
    for i in 0..3 {
        if (t1.side(i).length() - t2.side(i).length()).abs() > cfg.eps_len {
            return Ok(Congruence::NotCongruent);
        }
    }
    // Same orientation + equal sides pins down the signed angles too;
    // for thin triangles the angles are ill-conditioned in the side
    // lengths, so no numeric cross-check here.
    Ok(Congruence::Congruent(witness_of(t1)))
}

/// Side-angle-side: sides `v0→v1` and `v0→v2` and the included signed
/// angle at vertex 0 equal, same orientation. Concludes the third side and
/// the remaining two angle values.
pub fn congruent_sas(
    t1: &NdTriangle,
    t2: &NdTriangle,
    cfg: GeomCfg,
) -> Result<Congruence, GeomError> {
    if orientation_match(t1, t2) == OrientationMatch::Reversed {
        return Err(GeomError::OrientationMismatch);
    }
    let ab_eq = (t1.side(0).length() - t2.side(0).length()).abs() <= cfg.eps_len;
    // side(2) runs v2→v0; its length is the v0→v2 side of the hypothesis.
    let ac_eq = (t1.side(2).length() - t2.side(2).length()).abs() <= cfg.eps_len;
    let ang_eq = t1.angle_at(0).approx_eq(t2.angle_at(0), cfg.eps_ang);
    if !(ab_eq && ac_eq && ang_eq) {
        return Ok(Congruence::NotCongruent);
    }
    // Law of cosines: the hypothesis determines the third side, up to an
    // error that scales with the side lengths.
    Ok(Congruence::Congruent(witness_of(t1)))
}

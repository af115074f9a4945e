//! Triangles, orientation tags, and the congruence witness.
//!
//! Orientation (turning sense) is load-bearing: mirror-image triangles
//! have equal side lengths but negated angle values, so every tag here is
//! an explicit enum, never a boolean.

use nalgebra::Point2;

use crate::algebra::{AngValue, EPS};
use crate::error::GeomError;
use crate::incidence::{Angle, NdSegment, Segment};

/// An ordered triple of points; may be collinear or collapsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v: [Point2<f64>; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Triangle {
        Triangle { v: [a, b, c] }
    }

    /// Half the cross product of two edge vectors; positive for CCW order.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        let u = self.v[1] - self.v[0];
        let w = self.v[2] - self.v[0];
        0.5 * crate::parallelogram_area(u, w)
    }

    /// Edge `i`: from vertex `i` to vertex `i+1` (mod 3).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.v[i % 3], self.v[(i + 1) % 3])
    }
}

/// Turning sense of a nondegenerate triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ccw,
    Cw,
}

/// Whether two triangles agree in turning sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationMatch {
    Same,
    Reversed,
}

/// A triangle with a validated non-collinearity proof.
///
/// Invariants:
/// - `|signed_area| > eps` and all three sides nonzero, established once
///   in `new`; `reflect` permutes vertices and so preserves both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdTriangle {
    tri: Triangle,
}

impl NdTriangle {
    /// Validate and wrap. Rejects collapsed sides and collinear triples.
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Result<NdTriangle, GeomError> {
        Self::from_triangle(Triangle::new(a, b, c))
    }

    pub fn from_triangle(tri: Triangle) -> Result<NdTriangle, GeomError> {
        for i in 0..3 {
            if tri.edge(i).is_degenerate_eps(EPS) {
                return Err(GeomError::DegenerateInput("triangle with coincident vertices"));
            }
        }
        if tri.signed_area().abs() <= EPS {
            return Err(GeomError::DegenerateInput("collinear triangle"));
        }
        Ok(NdTriangle { tri })
    }

    /// Wrap without validating. Callers must guarantee non-collinearity.
    #[inline]
    pub(crate) fn new_unchecked(tri: Triangle) -> NdTriangle {
        debug_assert!(tri.signed_area().abs() > 0.0, "collinear NdTriangle");
        NdTriangle { tri }
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Point2<f64> {
        self.tri.v[i % 3]
    }

    #[inline]
    pub fn triangle(&self) -> Triangle {
        self.tri
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.tri.signed_area()
    }

    /// Side `i` as a nondegenerate segment (validated at construction).
    #[inline]
    pub fn side(&self, i: usize) -> NdSegment {
        NdSegment::new_unchecked(self.tri.v[i % 3], self.tri.v[(i + 1) % 3])
    }

    /// Vertex angle at `i`: from the ray toward vertex `i+1` to the ray
    /// toward vertex `i+2`. Well-defined: both rays are nondegenerate.
    pub fn angle(&self, i: usize) -> Angle {
        Angle::new_unchecked(
            self.side(i).to_ray(),
            self.side((i + 2) % 3).reverse().to_ray(),
        )
    }

    /// Signed value of the vertex angle at `i`.
    #[inline]
    pub fn angle_at(&self, i: usize) -> AngValue {
        self.angle(i).value()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > 0.0 {
            Orientation::Ccw
        } else {
            Orientation::Cw
        }
    }

    /// The explicit reflection step: relabel vertices `(a, b, c) → (a, c, b)`.
    /// Flips orientation and negates every angle value.
    #[inline]
    pub fn reflect(&self) -> NdTriangle {
        NdTriangle {
            tri: Triangle::new(self.tri.v[0], self.tri.v[2], self.tri.v[1]),
        }
    }
}

/// Structured conclusion of a congruence criterion: the three shared side
/// lengths and the three shared signed angle values, indexed like
/// `NdTriangle::side` / `NdTriangle::angle_at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CongruenceWitness {
    pub sides: [f64; 3],
    pub angles: [AngValue; 3],
}

/// Outcome of a criterion whose preconditions held: either a witness or an
/// ordinary (non-error) rejection of the hypothesis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Congruence {
    Congruent(CongruenceWitness),
    NotCongruent,
}

impl Congruence {
    #[inline]
    pub fn is_congruent(&self) -> bool {
        matches!(self, Congruence::Congruent(_))
    }

    #[inline]
    pub fn witness(self) -> Option<CongruenceWitness> {
        match self {
            Congruence::Congruent(w) => Some(w),
            Congruence::NotCongruent => None,
        }
    }
}

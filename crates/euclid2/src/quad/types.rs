//! Quadrilaterals, the convexity case split, and the convex refinement.

use nalgebra::Point2;

use crate::algebra::{AngValue, GeomCfg, EPS};
use crate::congruence::{NdTriangle, Orientation, Triangle};
use crate::error::GeomError;
use crate::incidence::{Angle, NdSegment, Segment};

/// An ordered 4-tuple of points; no invariant (degenerate and crossed
/// configurations are representable).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadrilateral {
    pub p: [Point2<f64>; 4],
}

impl Quadrilateral {
    #[inline]
    pub fn new(
        p0: Point2<f64>,
        p1: Point2<f64>,
        p2: Point2<f64>,
        p3: Point2<f64>,
    ) -> Quadrilateral {
        Quadrilateral {
            p: [p0, p1, p2, p3],
        }
    }

    /// Edge `i`: from vertex `i` to vertex `i+1` (mod 4).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.p[i % 4], self.p[(i + 1) % 4])
    }

    /// Diagonal 0 joins vertices 0–2; diagonal 1 joins vertices 1–3.
    #[inline]
    pub fn diagonal(&self, i: usize) -> Segment {
        Segment::new(self.p[i % 2], self.p[i % 2 + 2])
    }

    /// Cross product of the two edges meeting at vertex `i+1`: the turning
    /// sign there. Uniform sign over all four corners means convex.
    #[inline]
    pub fn turn(&self, i: usize) -> f64 {
        let u = self.p[(i + 1) % 4] - self.p[i % 4];
        let w = self.p[(i + 2) % 4] - self.p[(i + 1) % 4];
        crate::parallelogram_area(u, w)
    }

    /// Shift vertex labels by `k` (same point set, same traversal).
    #[inline]
    pub fn rotated(&self, k: usize) -> Quadrilateral {
        Quadrilateral {
            p: [
                self.p[k % 4],
                self.p[(k + 1) % 4],
                self.p[(k + 2) % 4],
                self.p[(k + 3) % 4],
            ],
        }
    }

    /// Reverse traversal order (keeps vertex 0). Flips orientation.
    #[inline]
    pub fn reversed(&self) -> Quadrilateral {
        Quadrilateral {
            p: [self.p[0], self.p[3], self.p[2], self.p[1]],
        }
    }
}

/// The weak, purely vectorial parallelogram predicate:
/// `p1 − p0 == p2 − p3` (within `eps`). Total on any 4 points, including
/// fully degenerate ones; equivalent to the diagonals sharing a midpoint.
#[inline]
pub fn is_parallelogram_eps(q: &Quadrilateral, eps: f64) -> bool {
    let lhs = q.p[1] - q.p[0];
    let rhs = q.p[2] - q.p[3];
    (lhs - rhs).norm() <= eps
}

#[inline]
pub fn is_parallelogram(q: &Quadrilateral) -> bool {
    is_parallelogram_eps(q, EPS)
}

/// Explicit convexity case split; every consumer handles both branches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Convexity {
    Convex(ConvexQuad),
    NonConvex,
}

impl Convexity {
    /// Classify by turning sign: convex iff all four corner crosses share
    /// one strict sign. Crossed (self-intersecting) quadrilaterals mix
    /// signs and land in `NonConvex`.
    pub fn classify(q: &Quadrilateral, cfg: GeomCfg) -> Convexity {
        let turns = [q.turn(0), q.turn(1), q.turn(2), q.turn(3)];
        if turns.iter().all(|&t| t > cfg.eps_area) {
            Convexity::Convex(ConvexQuad {
                q: *q,
                orient: Orientation::Ccw,
            })
        } else if turns.iter().all(|&t| t < -cfg.eps_area) {
            Convexity::Convex(ConvexQuad {
                q: *q,
                orient: Orientation::Cw,
            })
        } else {
            Convexity::NonConvex
        }
    }

    #[inline]
    pub fn is_convex(&self) -> bool {
        matches!(self, Convexity::Convex(_))
    }

    #[inline]
    pub fn convex(self) -> Option<ConvexQuad> {
        match self {
            Convexity::Convex(cq) => Some(cq),
            Convexity::NonConvex => None,
        }
    }
}

/// Convenience query form of the case split.
#[inline]
pub fn is_convex(q: &Quadrilateral, cfg: GeomCfg) -> bool {
    Convexity::classify(q, cfg).is_convex()
}

/// A quadrilateral with validated strict convexity.
///
/// Invariants:
/// - All four turning crosses share one strict sign (`orient`), so every
///   consecutive triple is non-collinear, all edges and diagonals are
///   nondegenerate, and the diagonals intersect properly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexQuad {
    q: Quadrilateral,
    orient: Orientation,
}

impl ConvexQuad {
    /// Validating constructor form of `Convexity::classify`.
    pub fn new(q: &Quadrilateral, cfg: GeomCfg) -> Result<ConvexQuad, GeomError> {
        match Convexity::classify(q, cfg) {
            Convexity::Convex(cq) => Ok(cq),
            Convexity::NonConvex => Err(GeomError::NotConvex),
        }
    }

    #[inline]
    pub fn quadrilateral(&self) -> Quadrilateral {
        self.q
    }

    #[inline]
    pub fn point(&self, i: usize) -> Point2<f64> {
        self.q.p[i % 4]
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orient
    }

    /// Edges are nondegenerate: each participates in a nonzero cross.
    #[inline]
    pub fn edge(&self, i: usize) -> NdSegment {
        NdSegment::new_unchecked(self.q.p[i % 4], self.q.p[(i + 1) % 4])
    }

    #[inline]
    pub fn diagonal(&self, i: usize) -> NdSegment {
        NdSegment::new_unchecked(self.q.p[i % 2], self.q.p[i % 2 + 2])
    }

    /// Interior angle at vertex `i` as an ordered ray pair: from the ray
    /// toward vertex `i+1` to the ray toward vertex `i-1`.
    pub fn vertex_angle(&self, i: usize) -> Angle {
        Angle::new_unchecked(self.edge(i).to_ray(), self.edge(i + 3).reverse().to_ray())
    }

    /// Signed interior angle value at vertex `i`. Uniform sign for a
    /// convex traversal (positive iff CCW).
    #[inline]
    pub fn interior_angle(&self, i: usize) -> AngValue {
        self.vertex_angle(i).value()
    }

    /// The two triangles cut by diagonal `i` (0: `p0p2`, 1: `p1p3`),
    /// both traversed with the quadrilateral's orientation.
    pub fn diagonal_triangles(&self, i: usize) -> (NdTriangle, NdTriangle) {
        let k = i % 2;
        let a = self.q.p[k];
        let b = self.q.p[k + 1];
        let c = self.q.p[(k + 2) % 4];
        let d = self.q.p[(k + 3) % 4];
        // Non-collinearity of both triples is the corner turning sign.
        (
            NdTriangle::new_unchecked(Triangle::new(a, b, c)),
            NdTriangle::new_unchecked(Triangle::new(c, d, a)),
        )
    }

    /// The proper intersection point of the two diagonals. Total: strict
    /// convexity keeps the diagonals non-parallel.
    pub fn diagonal_intersection(&self) -> Point2<f64> {
        let d1 = self.q.p[2] - self.q.p[0];
        let d2 = self.q.p[3] - self.q.p[1];
        let r = self.q.p[1] - self.q.p[0];
        let t = crate::parallelogram_area(r, d2) / crate::parallelogram_area(d1, d2);
        self.q.p[0] + d1 * t
    }
}

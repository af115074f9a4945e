//! Rays, segments, and the nondegenerate-segment wrapper.
//!
//! Membership predicates solve for the parameter along the carrier and
//! check the off-line distance, both eps-aware. Plain forms use the
//! module-default tolerance; `_eps` forms take an explicit one.

use nalgebra::{Point2, Vector2};

use crate::algebra::{AngValue, Dir, NonzeroVec, Proj, EPS};
use crate::error::GeomError;

/// An infinite one-sided ray: source plus a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub source: Point2<f64>,
    pub dir: Dir,
}

impl Ray {
    /// Ray from `source` through a second point. Rejects coincident points.
    pub fn new(source: Point2<f64>, through: Point2<f64>) -> Result<Ray, GeomError> {
        let v = NonzeroVec::new(through - source)
            .map_err(|_| GeomError::DegenerateInput("ray through its own source"))?;
        Ok(Ray {
            source,
            dir: v.to_dir(),
        })
    }

    #[inline]
    pub fn from_dir(source: Point2<f64>, dir: Dir) -> Ray {
        Ray { source, dir }
    }

    /// Point at parameter `t >= 0` along the ray.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.source + self.dir.unit_vec() * t
    }

    /// Same source, antipodal direction. Involutive.
    #[inline]
    pub fn reverse(&self) -> Ray {
        Ray {
            source: self.source,
            dir: self.dir.neg(),
        }
    }

    /// `∃ t ≥ 0, p − source == t·dir` (within `eps`).
    pub fn contains_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        let v = p - self.source;
        let u = self.dir.unit_vec();
        let t = v.dot(&u);
        let off = (u.x * v.y - u.y * v.x).abs();
        t >= -eps && off <= eps
    }

    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        self.contains_eps(p, EPS)
    }

    /// Membership with `t > 0`: the source itself is excluded.
    pub fn interior_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        self.contains_eps(p, eps) && (p - self.source).norm() > eps
    }

    #[inline]
    pub fn interior(&self, p: Point2<f64>) -> bool {
        self.interior_eps(p, EPS)
    }

    #[inline]
    pub fn to_proj(&self) -> Proj {
        self.dir.to_proj()
    }
}

/// A (possibly degenerate) closed segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub source: Point2<f64>,
    pub target: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(source: Point2<f64>, target: Point2<f64>) -> Segment {
        Segment { source, target }
    }

    /// The free vector `target − source`.
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.target - self.source
    }

    /// `‖target − source‖`; zero iff degenerate.
    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// `source + ½·(target − source)`; interior for any nondegenerate segment.
    #[inline]
    pub fn midpoint(&self) -> Point2<f64> {
        self.source + self.vector() * 0.5
    }

    /// Swap endpoints. Involutive; preserves length and midpoint.
    #[inline]
    pub fn reverse(&self) -> Segment {
        Segment {
            source: self.target,
            target: self.source,
        }
    }

    #[inline]
    pub fn is_degenerate_eps(&self, eps: f64) -> bool {
        self.length() <= eps
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate_eps(EPS)
    }

    /// `∃ t ∈ [0,1], p − source == t·(target − source)` (within `eps`).
    ///
    /// Both tolerances are lengths: `eps` bounds the off-line distance and
    /// the overshoot past either endpoint along the carrier, so the slack
    /// does not grow with the segment.
    ///
    /// A degenerate segment contains exactly its (coincident) endpoints.
    pub fn contains_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        let w = self.vector();
        let len = w.norm();
        let v = p - self.source;
        if len <= eps {
            return v.norm() <= eps;
        }
        let u = w / len;
        let s = v.dot(&u);
        let off = (u.x * v.y - u.y * v.x).abs();
        (-eps..=len + eps).contains(&s) && off <= eps
    }

    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        self.contains_eps(p, EPS)
    }

    /// Membership with `t ∈ (0,1)`: both endpoints excluded.
    pub fn interior_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        self.contains_eps(p, eps)
            && (p - self.source).norm() > eps
            && (p - self.target).norm() > eps
    }

    #[inline]
    pub fn interior(&self, p: Point2<f64>) -> bool {
        self.interior_eps(p, EPS)
    }
}

/// A segment with a validated `target ≠ source`, owning its derived
/// nonzero vector and unit direction.
///
/// Invariants:
/// - `vec == seg.vector()` and is nonzero; `dir == vec.to_dir()`.
/// - Every transformation (`reverse`, `to_ray`, `extension`) preserves
///   nondegeneracy by construction, never by re-validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdSegment {
    seg: Segment,
    vec: NonzeroVec,
    dir: Dir,
}

impl NdSegment {
    /// Validate and wrap. Rejects coincident endpoints.
    pub fn new(source: Point2<f64>, target: Point2<f64>) -> Result<NdSegment, GeomError> {
        Self::from_segment(Segment::new(source, target))
    }

    pub fn from_segment(seg: Segment) -> Result<NdSegment, GeomError> {
        let vec = NonzeroVec::new(seg.vector())
            .map_err(|_| GeomError::DegenerateInput("segment with coincident endpoints"))?;
        let dir = vec.to_dir();
        Ok(NdSegment { seg, vec, dir })
    }

    /// Wrap without validating. Callers must guarantee distinct endpoints.
    #[inline]
    pub(crate) fn new_unchecked(source: Point2<f64>, target: Point2<f64>) -> NdSegment {
        let seg = Segment::new(source, target);
        let vec = NonzeroVec::new_unchecked(seg.vector());
        let dir = vec.to_dir();
        NdSegment { seg, vec, dir }
    }

    #[inline]
    pub fn source(&self) -> Point2<f64> {
        self.seg.source
    }

    #[inline]
    pub fn target(&self) -> Point2<f64> {
        self.seg.target
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.seg
    }

    #[inline]
    pub fn vec(&self) -> NonzeroVec {
        self.vec
    }

    #[inline]
    pub fn dir(&self) -> Dir {
        self.dir
    }

    #[inline]
    pub fn to_proj(&self) -> Proj {
        self.dir.to_proj()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vec.norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<f64> {
        self.seg.midpoint()
    }

    /// Reverse stays nondegenerate: the vector is negated, not re-checked.
    #[inline]
    pub fn reverse(&self) -> NdSegment {
        NdSegment {
            seg: self.seg.reverse(),
            vec: -self.vec,
            dir: self.dir.neg(),
        }
    }

    /// Ray from the source through the target.
    #[inline]
    pub fn to_ray(&self) -> Ray {
        Ray::from_dir(self.seg.source, self.dir)
    }

    /// Ray from the target continuing in the segment's direction.
    /// Identity: `extension(s) == reverse(to_ray(reverse(s)))`.
    #[inline]
    pub fn extension(&self) -> Ray {
        Ray::from_dir(self.seg.target, self.dir)
    }

    /// Witness for the Archimedean property: for `t > 0`, a point strictly
    /// beyond the target on the extension.
    #[inline]
    pub fn extension_point(&self, t: f64) -> Point2<f64> {
        self.extension().point_at(t)
    }

    /// An interior point always exists; the midpoint witnesses it.
    #[inline]
    pub fn interior_point(&self) -> Point2<f64> {
        self.midpoint()
    }

    #[inline]
    pub fn contains_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        self.seg.contains_eps(p, eps)
    }

    #[inline]
    pub fn interior_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        self.seg.interior_eps(p, eps)
    }
}

/// An angle: an ordered pair of nondegenerate rays sharing a vertex.
///
/// Invariants:
/// - `start.source == end.source`, established at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    start: Ray,
    end: Ray,
}

impl Angle {
    /// Pair two rays. Rejects rays with different vertices.
    pub fn new(start: Ray, end: Ray) -> Result<Angle, GeomError> {
        if start.source != end.source {
            return Err(GeomError::DegenerateInput("angle rays with different vertices"));
        }
        Ok(Angle { start, end })
    }

    /// Pair two rays known to share a vertex.
    #[inline]
    pub(crate) fn new_unchecked(start: Ray, end: Ray) -> Angle {
        debug_assert!(start.source == end.source, "angle rays must share a vertex");
        Angle { start, end }
    }

    /// Angle at `vertex` from the ray toward `p_start` to the ray toward
    /// `p_end`. Rejects either point coinciding with the vertex.
    pub fn from_points(
        vertex: Point2<f64>,
        p_start: Point2<f64>,
        p_end: Point2<f64>,
    ) -> Result<Angle, GeomError> {
        Ok(Angle {
            start: Ray::new(vertex, p_start)?,
            end: Ray::new(vertex, p_end)?,
        })
    }

    #[inline]
    pub fn vertex(&self) -> Point2<f64> {
        self.start.source
    }

    #[inline]
    pub fn start(&self) -> Ray {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Ray {
        self.end
    }

    /// Signed measure from the start ray to the end ray, in `(-π, π]`.
    #[inline]
    pub fn value(&self) -> AngValue {
        self.start.dir.angle_to(self.end.dir)
    }

    /// Swap the ray order; negates the value (up to the `π` boundary).
    #[inline]
    pub fn reverse(&self) -> Angle {
        Angle {
            start: self.end,
            end: self.start,
        }
    }
}

//! Parallel/perpendicular relations over anything with a projective
//! direction, plus full lines with foot-of-perpendicular queries.
//!
//! `parallel` is an equivalence relation (`to_proj` equality);
//! `perpendicular` composes with it through the `perp` involution:
//! `a ⟂ b ∧ b ⟂ c ⟹ a ∥ c` and `a ∥ b ∧ b ⟂ c ⟹ a ⟂ c`.

use nalgebra::Point2;

use crate::algebra::{Dir, NonzeroVec, Proj, EPS};
use crate::error::GeomError;
use crate::incidence::{NdSegment, Ray, Segment};

/// The seam every relation is defined over: exposing a projective direction.
pub trait ToProj {
    fn to_proj(&self) -> Proj;
}

impl ToProj for Dir {
    #[inline]
    fn to_proj(&self) -> Proj {
        Proj::from_dir(*self)
    }
}

impl ToProj for NonzeroVec {
    #[inline]
    fn to_proj(&self) -> Proj {
        NonzeroVec::to_proj(self)
    }
}

impl ToProj for Proj {
    #[inline]
    fn to_proj(&self) -> Proj {
        *self
    }
}

impl ToProj for Ray {
    #[inline]
    fn to_proj(&self) -> Proj {
        Ray::to_proj(self)
    }
}

impl ToProj for NdSegment {
    #[inline]
    fn to_proj(&self) -> Proj {
        NdSegment::to_proj(self)
    }
}

/// `to_proj(a) == to_proj(b)` within `eps` of projective distance.
#[inline]
pub fn parallel_eps<A: ToProj + ?Sized, B: ToProj + ?Sized>(a: &A, b: &B, eps: f64) -> bool {
    a.to_proj().approx_eq(b.to_proj(), eps)
}

#[inline]
pub fn parallel<A: ToProj + ?Sized, B: ToProj + ?Sized>(a: &A, b: &B) -> bool {
    parallel_eps(a, b, EPS)
}

/// `to_proj(a) == perp(to_proj(b))` within `eps`. Irreflexive and symmetric.
#[inline]
pub fn perpendicular_eps<A: ToProj + ?Sized, B: ToProj + ?Sized>(a: &A, b: &B, eps: f64) -> bool {
    a.to_proj().approx_eq(b.to_proj().perp(), eps)
}

#[inline]
pub fn perpendicular<A: ToProj + ?Sized, B: ToProj + ?Sized>(a: &A, b: &B) -> bool {
    perpendicular_eps(a, b, EPS)
}

/// An unoriented infinite line: a base point and a projective direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub base: Point2<f64>,
    proj: Proj,
}

impl Line {
    /// Line through two distinct points.
    pub fn through(a: Point2<f64>, b: Point2<f64>) -> Result<Line, GeomError> {
        let v = NonzeroVec::new(b - a)
            .map_err(|_| GeomError::DegenerateInput("line through coincident points"))?;
        Ok(Line {
            base: a,
            proj: v.to_proj(),
        })
    }

    #[inline]
    pub fn from_ray(r: &Ray) -> Line {
        Line {
            base: r.source,
            proj: r.to_proj(),
        }
    }

    #[inline]
    pub fn from_nd_segment(s: &NdSegment) -> Line {
        Line {
            base: s.source(),
            proj: s.to_proj(),
        }
    }

    /// The unique intersection of this line with its perpendicular
    /// through `p`. Total: the two lines are never parallel.
    pub fn perp_foot(&self, p: Point2<f64>) -> Point2<f64> {
        let u = self.proj.rep().unit_vec();
        let v = p - self.base;
        self.base + u * v.dot(&u)
    }

    /// Distance from `p` to the line; zero iff `p` lies on it, and a lower
    /// bound for the distance from `p` to any point of the line.
    #[inline]
    pub fn dist_to(&self, p: Point2<f64>) -> f64 {
        Segment::new(p, self.perp_foot(p)).length()
    }

    #[inline]
    pub fn contains_eps(&self, p: Point2<f64>, eps: f64) -> bool {
        self.dist_to(p) <= eps
    }

    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        self.contains_eps(p, EPS)
    }
}

impl ToProj for Line {
    #[inline]
    fn to_proj(&self) -> Proj {
        self.proj
    }
}

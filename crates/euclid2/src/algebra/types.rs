//! Quotient types of the direction algebra, as normalized numeric wrappers.
//!
//! - `GeomCfg`: centralizes epsilons for length, angle, and area checks.
//! - `NonzeroVec`: a plane vector with a validated nonzero norm.
//! - `Dir`: unit direction, a `(cos, sin)` point on the circle.
//! - `Proj`: direction modulo sign (the direction of a line), with `perp`.
//! - `AngValue`: signed angle, canonical representative in `(-π, π]`.
//!
//! Equality policy
//! - `Dir`/`Proj`/`AngValue` derive `PartialEq` on the canonical
//!   representative; the canonicalization is arranged so the exact laws
//!   (double cover, perp involution) hold bit-for-bit. IEEE negation and
//!   division are exact, so `(-v)/‖v‖` is the exact componentwise negation
//!   of `v/‖v‖`, and sign-folding in `Proj` lands both on one representative.
//! - Tolerant comparison is the separate `dist`/`approx_eq` API; the
//!   relation predicates are built on that, never on `==` of raw floats.

use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::Neg;

use crate::error::GeomError;

/// Numerical tolerance used by the plain (non-`_eps`) predicate forms.
pub(crate) const EPS: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Length comparisons and point coincidence.
    pub eps_len: f64,
    /// Angle comparisons (radians) and projective-direction distance.
    pub eps_ang: f64,
    /// Signed-area threshold for collinearity / turning-sign tests.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-9,
            eps_ang: 1e-9,
            eps_area: 1e-12,
        }
    }
}

/// Normalize an angle to the canonical representative in `(-π, π]`.
#[inline]
pub(crate) fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -PI {
        x += 2.0 * PI;
    }
    while x > PI {
        x -= 2.0 * PI;
    }
    x
}

/// A plane vector validated to be nonzero (and finite).
///
/// Invariants:
/// - `‖v‖ > EPS`, established once in `new`; every derived value
///   (`neg`, `to_dir`) preserves it by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonzeroVec {
    v: Vector2<f64>,
}

impl NonzeroVec {
    /// Validate and wrap. Rejects zero, near-zero, and non-finite input.
    pub fn new(v: Vector2<f64>) -> Result<Self, GeomError> {
        let n = v.norm();
        if !n.is_finite() || n <= EPS {
            return Err(GeomError::DegenerateInput("zero or non-finite vector"));
        }
        Ok(Self { v })
    }

    /// Wrap without validating. Callers must guarantee `‖v‖ > EPS`.
    #[inline]
    pub(crate) fn new_unchecked(v: Vector2<f64>) -> Self {
        debug_assert!(v.norm() > EPS, "NonzeroVec::new_unchecked on ~zero vector");
        Self { v }
    }

    #[inline]
    pub fn get(&self) -> Vector2<f64> {
        self.v
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.v.norm()
    }

    /// Normalize to a unit direction. Total: nonzero is already established.
    #[inline]
    pub fn to_dir(&self) -> Dir {
        let u = self.v / self.v.norm();
        Dir { x: u.x, y: u.y }
    }

    #[inline]
    pub fn to_proj(&self) -> Proj {
        self.to_dir().to_proj()
    }
}

impl Neg for NonzeroVec {
    type Output = NonzeroVec;
    #[inline]
    fn neg(self) -> NonzeroVec {
        // Closed under negation; norm is unchanged.
        NonzeroVec { v: -self.v }
    }
}

/// Unit direction: a point on the unit circle.
///
/// Forms a group under `rotate` (complex multiplication); `neg` is the
/// antipodal map (add π).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dir {
    x: f64,
    y: f64,
}

impl Dir {
    #[inline]
    pub fn from_angle(theta: f64) -> Dir {
        Dir {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    #[inline]
    pub fn from_vec(v: NonzeroVec) -> Dir {
        v.to_dir()
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn unit_vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Canonical angle of this direction, in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> AngValue {
        AngValue::new(self.y.atan2(self.x))
    }

    /// Antipodal direction (rotate by π). Exact: IEEE negation.
    #[inline]
    pub fn neg(&self) -> Dir {
        Dir {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Rotate by a signed angle (group action of the circle on itself).
    #[inline]
    pub fn rotate(&self, by: AngValue) -> Dir {
        let (s, c) = by.radians().sin_cos();
        Dir {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    #[inline]
    pub fn dot(&self, other: Dir) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn cross(&self, other: Dir) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle from `self` to `other`, in `(-π, π]`.
    #[inline]
    pub fn angle_to(&self, other: Dir) -> AngValue {
        AngValue::new(self.cross(other).atan2(self.dot(other)))
    }

    /// Project to the direction-modulo-sign quotient (exactly 2-to-1).
    #[inline]
    pub fn to_proj(self) -> Proj {
        Proj::from_dir(self)
    }

    /// Tolerant equality via the angular distance on the circle.
    #[inline]
    pub fn approx_eq(&self, other: Dir, eps: f64) -> bool {
        self.angle_to(other).abs() <= eps
    }
}

impl Neg for Dir {
    type Output = Dir;
    #[inline]
    fn neg(self) -> Dir {
        Dir::neg(&self)
    }
}

/// Which branch of the projective double cover two directions fall into.
///
/// `d1.to_proj() == d2.to_proj()` iff `d1 == d2` (Same) or `d1 == -d2`
/// (Opposite); downstream parallelism arguments must distinguish the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirMatch {
    Same,
    Opposite,
}

impl DirMatch {
    /// Classify two directions, or `None` when they are not collinear
    /// (within `eps` of angular distance).
    pub fn classify(d1: Dir, d2: Dir, eps: f64) -> Option<DirMatch> {
        let delta = d1.angle_to(d2).abs();
        if delta <= eps {
            Some(DirMatch::Same)
        } else if (PI - delta).abs() <= eps {
            Some(DirMatch::Opposite)
        } else {
            None
        }
    }
}

/// Projective direction: `Dir` modulo `{+1, -1}`; models the direction of a
/// line (a line and its reverse have equal `Proj`).
///
/// Invariants:
/// - Canonical representative has angle in `(-π/2, π/2]`:
///   `x > 0`, or `x == 0 && y > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proj {
    d: Dir,
}

impl Proj {
    /// Reduce a direction to its projective class (fold the antipode).
    #[inline]
    pub fn from_dir(d: Dir) -> Proj {
        if d.x < 0.0 || (d.x == 0.0 && d.y < 0.0) {
            Proj { d: d.neg() }
        } else {
            Proj { d }
        }
    }

    /// The canonical `Dir` representative (angle in `(-π/2, π/2]`).
    #[inline]
    pub fn rep(&self) -> Dir {
        self.d
    }

    /// Canonical angle in `(-π/2, π/2]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.d.y.atan2(self.d.x)
    }

    /// Rotate by π/2 on representatives; well-defined on the quotient and
    /// an exact involution with no fixed point.
    #[inline]
    pub fn perp(&self) -> Proj {
        Proj::from_dir(Dir {
            x: -self.d.y,
            y: self.d.x,
        })
    }

    /// Distance on the projective circle, in `[0, π/2]`.
    #[inline]
    pub fn dist(&self, other: Proj) -> f64 {
        let delta = self.d.angle_to(other.d).abs();
        delta.min(PI - delta)
    }

    #[inline]
    pub fn approx_eq(&self, other: Proj, eps: f64) -> bool {
        self.dist(other) <= eps
    }

    /// True when `other` is within `eps` of the perpendicular class.
    #[inline]
    pub fn approx_perp(&self, other: Proj, eps: f64) -> bool {
        (self.dist(other) - FRAC_PI_2).abs() <= eps
    }
}

/// Signed angle value: a real modulo 2π, canonical in `(-π, π]`.
///
/// All arithmetic renormalizes, so a stored value is always canonical.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct AngValue {
    rad: f64,
}

impl AngValue {
    #[inline]
    pub fn new(raw: f64) -> AngValue {
        AngValue {
            rad: wrap_angle(raw),
        }
    }

    pub const ZERO: AngValue = AngValue { rad: 0.0 };
    pub const PI: AngValue = AngValue { rad: PI };

    /// Canonical representative in `(-π, π]`.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.rad
    }

    /// Magnitude of the canonical representative, in `[0, π]`.
    #[inline]
    pub fn abs(&self) -> f64 {
        self.rad.abs()
    }

    /// Distance on the circle, in `[0, π]`.
    #[inline]
    pub fn dist(&self, other: AngValue) -> f64 {
        wrap_angle(self.rad - other.rad).abs()
    }

    #[inline]
    pub fn approx_eq(&self, other: AngValue, eps: f64) -> bool {
        self.dist(other) <= eps
    }
}

impl std::ops::Add for AngValue {
    type Output = AngValue;
    #[inline]
    fn add(self, rhs: AngValue) -> AngValue {
        AngValue::new(self.rad + rhs.rad)
    }
}

impl std::ops::Sub for AngValue {
    type Output = AngValue;
    #[inline]
    fn sub(self, rhs: AngValue) -> AngValue {
        AngValue::new(self.rad - rhs.rad)
    }
}

impl Neg for AngValue {
    type Output = AngValue;
    #[inline]
    fn neg(self) -> AngValue {
        // wrap keeps -π out of the range: -(π) wraps back to π.
        AngValue::new(-self.rad)
    }
}

//! Deterministic random quadrilaterals (replayable samplers).
//!
//! Model
//! - Parallelograms: a base point plus two spanning vectors, rejection on
//!   near-degenerate spanned area.
//! - Convex quadrilaterals: four sorted angles around a center with
//!   jittered radii, rejection until the turning-sign test passes.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algebra::GeomCfg;

use super::types::{Convexity, Quadrilateral};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a nondegenerate parallelogram `p0, p0+u, p0+u+v, p0+v`.
///
/// The spanned area is kept away from zero, so the result always passes
/// the convexity gate and every parallelogram criterion.
pub fn draw_parallelogram(tok: ReplayToken) -> Quadrilateral {
    let mut rng = tok.to_std_rng();
    loop {
        let p0 = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let u = nalgebra::Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5));
        let v = nalgebra::Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5));
        if crate::parallelogram_area(u, v).abs() < 0.05 {
            continue;
        }
        return Quadrilateral::new(p0, p0 + u, p0 + u + v, p0 + v);
    }
}

/// Draw a strictly convex quadrilateral around the origin, or `None` if
/// the attempt budget runs out (rare; the radial construction is convex
/// for most draws).
pub fn draw_convex_quad(tok: ReplayToken, cfg: GeomCfg) -> Option<Quadrilateral> {
    let mut rng = tok.to_std_rng();
    for _ in 0..64 {
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;
        let mut angles = [0.0f64; 4];
        for (k, a) in angles.iter_mut().enumerate() {
            let base = phase + (k as f64) * std::f64::consts::FRAC_PI_2;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.4;
            *a = base + jitter;
        }
        let mut p = [Point2::origin(); 4];
        for (a, pt) in angles.iter().zip(p.iter_mut()) {
            let r = rng.gen_range(0.5..1.5);
            *pt = Point2::new(a.cos() * r, a.sin() * r);
        }
        let q = Quadrilateral { p };
        if Convexity::classify(&q, cfg).is_convex() {
            return Some(q);
        }
    }
    None
}

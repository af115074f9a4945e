use super::*;
use crate::algebra::GeomCfg;
use crate::error::GeomError;
use nalgebra::{Matrix2, Point2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pt(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

fn cfg() -> GeomCfg {
    GeomCfg::default()
}

/// Apply a rigid motion (rotation by `theta`, then translation).
fn moved(t: &NdTriangle, theta: f64, dx: f64, dy: f64) -> NdTriangle {
    let rot = Matrix2::new(theta.cos(), -theta.sin(), theta.sin(), theta.cos());
    let shift = nalgebra::Vector2::new(dx, dy);
    let map = |p: Point2<f64>| Point2::from(rot * p.coords + shift);
    NdTriangle::new(map(t.vertex(0)), map(t.vertex(1)), map(t.vertex(2))).unwrap()
}

fn scalene() -> NdTriangle {
    NdTriangle::new(pt(0.0, 0.0), pt(3.0, 0.0), pt(1.0, 2.0)).unwrap()
}

#[test]
fn nd_triangle_rejects_degenerate_input() {
    assert!(matches!(
        NdTriangle::new(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)),
        Err(GeomError::DegenerateInput(_))
    ));
    assert!(matches!(
        NdTriangle::new(pt(1.0, 1.0), pt(1.0, 1.0), pt(0.0, 2.0)),
        Err(GeomError::DegenerateInput(_))
    ));
}

#[test]
fn orientation_and_reflection() {
    let t = NdTriangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)).unwrap();
    assert_eq!(t.orientation(), Orientation::Ccw);
    let r = t.reflect();
    assert_eq!(r.orientation(), Orientation::Cw);
    assert_eq!(orientation_match(&t, &r), OrientationMatch::Reversed);
    // relabeling negates the signed angle at the fixed vertex
    assert!(r.angle_at(0).approx_eq(-t.angle_at(0), 1e-12));
    assert_eq!(r.reflect(), t);
}

#[test]
fn sss_concludes_signed_angles_under_rigid_motion() {
    let t1 = scalene();
    let t2 = moved(&t1, 0.7, 5.0, -1.0);
    let w = congruent_sss(&t1, &t2, cfg()).unwrap().witness().unwrap();
    for i in 0..3 {
        assert!((w.sides[i] - t2.side(i).length()).abs() < 1e-9);
        assert!(w.angles[i].approx_eq(t2.angle_at(i), 1e-9));
    }
}

#[test]
fn sss_refuses_mirror_images() {
    let t1 = scalene();
    // reflect across the x-axis: equal side lengths, negated angle values
    let t2 = NdTriangle::new(
        pt(t1.vertex(0).x, -t1.vertex(0).y),
        pt(t1.vertex(1).x, -t1.vertex(1).y),
        pt(t1.vertex(2).x, -t1.vertex(2).y),
    )
    .unwrap();
    for i in 0..3 {
        assert!((t1.side(i).length() - t2.side(i).length()).abs() < 1e-12);
        assert!(t2.angle_at(i).approx_eq(-t1.angle_at(i), 1e-12));
    }
    assert_eq!(
        congruent_sss(&t1, &t2, cfg()),
        Err(GeomError::OrientationMismatch)
    );
    // relabeling restores orientation-compatibility, and for a scalene
    // triangle the identity correspondence then fails on side lengths
    assert_eq!(
        congruent_sss(&t1, &t2.reflect(), cfg()),
        Ok(Congruence::NotCongruent)
    );
}

#[test]
fn sss_rejects_unequal_sides() {
    let t1 = scalene();
    let t2 = NdTriangle::new(pt(0.0, 0.0), pt(3.5, 0.0), pt(1.0, 2.0)).unwrap();
    assert_eq!(congruent_sss(&t1, &t2, cfg()), Ok(Congruence::NotCongruent));
}

#[test]
fn sas_concludes_the_third_side() {
    let t1 = scalene();
    let t2 = moved(&t1, -1.3, 0.5, 2.0);
    let w = congruent_sas(&t1, &t2, cfg()).unwrap().witness().unwrap();
    assert!((w.sides[1] - t2.side(1).length()).abs() < 1e-9);
    assert!(w.angles[1].approx_eq(t2.angle_at(1), 1e-9));
    assert!(w.angles[2].approx_eq(t2.angle_at(2), 1e-9));
}

#[test]
fn sas_is_signed_not_absolute() {
    let t1 = scalene();
    let mirror = NdTriangle::new(pt(0.0, 0.0), pt(3.0, 0.0), pt(1.0, -2.0)).unwrap();
    // |included angle| matches but the sign does not; the orientation gate
    // fires before any magnitude comparison
    assert_eq!(
        congruent_sas(&t1, &mirror, cfg()),
        Err(GeomError::OrientationMismatch)
    );
}

#[test]
fn sas_rejects_different_included_angle() {
    // same two side lengths (2 and 2), different included angle
    let t1 = NdTriangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 2.0)).unwrap();
    let s = 2.0 / 2.0f64.sqrt();
    let t2 = NdTriangle::new(pt(0.0, 0.0), pt(2.0, 0.0), pt(s, s)).unwrap();
    assert!((t1.side(2).length() - t2.side(2).length()).abs() < 1e-12);
    assert_eq!(congruent_sas(&t1, &t2, cfg()), Ok(Congruence::NotCongruent));
}

#[test]
fn thin_triangles_get_a_verdict_not_a_panic() {
    // thin but validly nondegenerate: area 5e-8, well past the gate
    let t1 = NdTriangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.5, 1e-7)).unwrap();
    // swing the apex around the origin: every side length moves by far
    // less than eps_len while the angle at vertex 0 moves by ~2e-5
    let (s, c) = 2e-5_f64.sin_cos();
    let apex = pt(0.5 * c - 1e-7 * s, 0.5 * s + 1e-7 * c);
    let t2 = NdTriangle::new(pt(0.0, 0.0), pt(1.0, 0.0), apex).unwrap();
    for i in 0..3 {
        assert!((t1.side(i).length() - t2.side(i).length()).abs() <= 1e-9);
    }
    assert!(t1.angle_at(0).dist(t2.angle_at(0)) > 1e-6);
    // both criteria return an ordinary verdict on this input
    assert!(congruent_sss(&t1, &t2, cfg()).unwrap().is_congruent());
    assert_eq!(congruent_sas(&t1, &t2, cfg()), Ok(Congruence::NotCongruent));
}

#[test]
fn sss_randomized_rigid_motions() {
    let mut rng = StdRng::seed_from_u64(42);
    let t1 = scalene();
    for _ in 0..32 {
        let t2 = moved(
            &t1,
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        assert!(congruent_sss(&t1, &t2, cfg()).unwrap().is_congruent());
        assert!(congruent_sas(&t1, &t2, cfg()).unwrap().is_congruent());
    }
}

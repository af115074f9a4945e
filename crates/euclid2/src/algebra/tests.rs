use super::types::wrap_angle;
use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn nonzero_vec_validation() {
    assert!(NonzeroVec::new(vector![0.0, 0.0]).is_err());
    assert!(NonzeroVec::new(vector![1e-12, -1e-12]).is_err());
    assert!(NonzeroVec::new(vector![f64::NAN, 1.0]).is_err());
    let v = NonzeroVec::new(vector![3.0, 4.0]).unwrap();
    assert!((v.norm() - 5.0).abs() < 1e-12);
    let d = v.to_dir();
    assert!((d.x() - 0.6).abs() < 1e-12 && (d.y() - 0.8).abs() < 1e-12);
}

#[test]
fn wrap_angle_canonical_range() {
    assert_eq!(wrap_angle(PI), PI);
    assert_eq!(wrap_angle(-PI), PI);
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(-5.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-12);
    assert_eq!(wrap_angle(0.0), 0.0);
}

#[test]
fn projective_double_cover_is_exact() {
    // toProj(v) == toProj(-v), bit-for-bit on the canonical representative.
    let v = vector![1.3, -2.7];
    let nv = NonzeroVec::new(v).unwrap();
    let mv = NonzeroVec::new(-v).unwrap();
    assert_eq!(nv.to_proj(), mv.to_proj());

    let d = Dir::from_angle(0.7);
    assert_eq!(d.to_proj(), d.neg().to_proj());
    assert!(d != d.neg());
}

#[test]
fn equal_proj_means_equal_or_antipodal() {
    let d1 = Dir::from_angle(2.5);
    let d2 = Dir::from_angle(2.5 - PI);
    assert_eq!(d1.to_proj(), d2.to_proj());
    assert_eq!(DirMatch::classify(d1, d2, 1e-9), Some(DirMatch::Opposite));
    assert_eq!(DirMatch::classify(d1, d1, 1e-9), Some(DirMatch::Same));
    assert_eq!(DirMatch::classify(d1, Dir::from_angle(1.0), 1e-9), None);
}

#[test]
fn perp_involution_no_fixed_point() {
    for &theta in &[0.0, 0.3, FRAC_PI_2, 2.0, -1.2, PI] {
        let p = Dir::from_angle(theta).to_proj();
        assert_eq!(p.perp().perp(), p);
        assert!(p.perp() != p);
        assert!((p.dist(p.perp()) - FRAC_PI_2).abs() < 1e-12);
    }
}

#[test]
fn ang_value_normalizes_on_every_op() {
    assert!(AngValue::new(3.0 * PI).approx_eq(AngValue::PI, 1e-12));
    let sum = AngValue::new(PI) + AngValue::new(PI);
    assert!(sum.approx_eq(AngValue::ZERO, 1e-12));
    // -π wraps back to π: the canonical range is half-open.
    assert_eq!((-AngValue::PI).radians(), PI);
    let a = AngValue::new(3.0);
    let b = AngValue::new(-3.0);
    // distance goes the short way around the circle
    assert!((a.dist(b) - (2.0 * PI - 6.0)).abs() < 1e-12);
}

#[test]
fn dir_rotation_is_the_group_action() {
    let d = Dir::from_angle(0.4);
    let r1 = d.rotate(AngValue::new(1.1)).rotate(AngValue::new(-0.3));
    let r2 = d.rotate(AngValue::new(0.8));
    assert!(r1.approx_eq(r2, 1e-12));
    assert!(d.rotate(AngValue::PI).approx_eq(d.neg(), 1e-12));
    assert!(d
        .angle_to(d.rotate(AngValue::new(0.9)))
        .approx_eq(AngValue::new(0.9), 1e-12));
}

proptest! {
    #[test]
    fn prop_wrap_stays_in_range(x in -100.0f64..100.0) {
        let w = wrap_angle(x);
        prop_assert!(w > -PI && w <= PI);
    }

    #[test]
    fn prop_double_cover(theta in -10.0f64..10.0) {
        let d = Dir::from_angle(theta);
        prop_assert_eq!(d.to_proj(), d.neg().to_proj());
    }

    #[test]
    fn prop_perp_involution(theta in -10.0f64..10.0) {
        let p = Dir::from_angle(theta).to_proj();
        prop_assert_eq!(p.perp().perp(), p);
        prop_assert!(p.perp() != p);
    }

    #[test]
    fn prop_nonzero_double_cover(x in -5.0f64..5.0, y in -5.0f64..5.0) {
        prop_assume!(x.hypot(y) > 1e-6);
        let v = NonzeroVec::new(vector![x, y]).unwrap();
        let m = NonzeroVec::new(vector![-x, -y]).unwrap();
        prop_assert_eq!(v.to_proj(), m.to_proj());
    }
}

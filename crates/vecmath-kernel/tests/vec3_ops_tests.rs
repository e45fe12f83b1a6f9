// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use core::f32::consts::{FRAC_PI_2, PI};
use vecmath_kernel::math::{IndexValue, RoundingMode, Tolerance, Vec3d, Vec3f};
use vecmath_kernel::{Handedness, MathConfig, MathError};

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    const ABS_TOL: f32 = 1e-5;
    const REL_TOL: f32 = 1e-5;
    for i in 0..3 {
        let ai = a[i];
        let bi = b[i];
        let diff = (ai - bi).abs();
        let scale = ai.abs().max(bi.abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

#[test]
fn cross_of_basis_vectors_depends_on_handedness() {
    let x = Vec3f::UNIT_X;
    let y = Vec3f::UNIT_Y;
    assert_eq!(x.cross(&y).to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(
        MathConfig::new().cross(&x, &y).to_array(),
        [0.0, 0.0, 1.0]
    );
    let left = MathConfig::new().with_handedness(Handedness::Left);
    assert_eq!(left.cross(&x, &y).to_array(), [0.0, 0.0, -1.0]);
    assert_eq!(
        x.cross_with(&y, Handedness::Left),
        y.cross_with(&x, Handedness::Right)
    );
}

#[test]
fn cross_is_anti_commutative_and_orthogonal() {
    let a = Vec3f::new(1.0, 2.0, 3.0);
    let b = Vec3f::new(-4.0, 0.5, 2.0);
    assert_eq!(a.cross(&b), -b.cross(&a));
    assert_eq!(a.dot(&a.cross(&b)), 0.0);
    assert_eq!(b.dot(&a.cross(&b)), 0.0);
}

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3f::new(1.0, -2.0, 0.5);
    let b = Vec3f::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((a * -2.0).to_array(), [-2.0, 4.0, -1.0]);
    assert_eq!((-2.0 * a).to_array(), [-2.0, 4.0, -1.0]);
    assert_eq!(a.mul_elem(&b).to_array(), [-3.0, -8.0, 0.75]);
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec3f::new(1.0, 2.0, 3.0);
    v += Vec3f::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3f::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    v /= 2.0;
    assert_eq!(v.to_array(), [0.0, 0.5, 0.5]);
}

#[test]
fn normalize_and_lengths() {
    let v = Vec3f::new(1.0, 2.0, 2.0);
    assert_eq!(v.length(), 3.0);
    approx_eq3(
        v.normalize().expect("non-zero").to_array(),
        [1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0],
    );
    assert_eq!(
        Vec3f::ZERO.normalize(),
        Err(MathError::DivisionByZero {
            operation: "normalize"
        })
    );
    let degenerate = Vec3f::new(1e-12, -1e-12, 0.0);
    assert_eq!(
        degenerate.normalize_or_zero(Tolerance::default()).to_array(),
        [0.0, 0.0, 0.0]
    );
    assert_eq!(degenerate.length_within(Tolerance::default()), 0.0);
}

#[test]
fn safe_and_raw_division() {
    let a = Vec3f::new(1.0, 2.0, 3.0);
    let b = Vec3f::new(2.0, 0.0, 4.0);
    assert!(a.checked_div(&b).is_err());
    let raw = a / b;
    assert_eq!(raw.x(), 0.5);
    assert_eq!(raw.y(), f32::INFINITY);
    assert_eq!(raw.z(), 0.75);
    assert!(b.checked_recip().is_err());
    assert_eq!(
        a.checked_div(&Vec3f::splat(2.0)).map(Vec3f::to_array),
        Ok([0.5, 1.0, 1.5])
    );
}

#[test]
fn rotate_axis_angle_basis_cycle() {
    let y = Vec3f::UNIT_X.rotate_axis_angle(&Vec3f::UNIT_Z, FRAC_PI_2);
    approx_eq3(y.to_array(), [0.0, 1.0, 0.0]);
    let z = Vec3f::UNIT_Y.rotate_axis_angle(&Vec3f::UNIT_X, FRAC_PI_2);
    approx_eq3(z.to_array(), [0.0, 0.0, 1.0]);
    let x = Vec3f::UNIT_Z.rotate_axis_angle(&Vec3f::UNIT_Y, FRAC_PI_2);
    approx_eq3(x.to_array(), [1.0, 0.0, 0.0]);
    let back = Vec3f::new(1.0, 2.0, 3.0)
        .rotate_axis_angle(&Vec3f::UNIT_Y, PI)
        .rotate_axis_angle(&Vec3f::UNIT_Y, -PI);
    approx_eq3(back.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn project_and_reflect() {
    let v = Vec3f::new(2.0, -3.0, 4.0);
    assert_eq!(v.project(&Vec3f::UNIT_Z).to_array(), [0.0, 0.0, 4.0]);
    assert_eq!(v.reflect(&Vec3f::UNIT_Y).to_array(), [2.0, 3.0, 4.0]);
    let mut w = v;
    w.reflect_mut(&Vec3f::UNIT_X).reflect_mut(&Vec3f::UNIT_X);
    assert_eq!(w, v);
}

#[test]
fn entries_abs_sign_round() {
    let v = Vec3f::new(3.0, 1.0, 1.0);
    assert_eq!(v.min_entry(), IndexValue::new(1, 1.0));
    assert_eq!(Vec3f::new(5.0, 5.0, 0.0).max_entry(), IndexValue::new(0, 5.0));

    let w = Vec3f::new(-1.5, 0.0, 2.25);
    assert_eq!(w.abs().to_array(), [1.5, 0.0, 2.25]);
    assert_eq!(w.sign().to_array(), [-1.0, 0.0, 1.0]);
    assert_eq!(w.round(RoundingMode::Nearest).to_array(), [-1.0, 0.0, 2.0]);
    assert_eq!(w.round(RoundingMode::Up).to_array(), [-2.0, 0.0, 3.0]);
    assert_eq!(w.round(RoundingMode::Down).to_array(), [-1.0, 0.0, 2.0]);
    assert_eq!(
        MathConfig::new()
            .with_rounding(RoundingMode::Floor)
            .round3(&w)
            .to_array(),
        [-2.0, 0.0, 2.0]
    );
}

#[test]
fn swizzle_permutes_and_rejects_bad_indices() {
    let v = Vec3f::new(1.0, 2.0, 3.0);
    assert_eq!(v.swizzle([2, 1, 0]).map(Vec3f::to_array), Ok([3.0, 2.0, 1.0]));
    assert_eq!(v.swizzle2([2, 0]).map(|w| w.to_array()), Ok([3.0, 1.0]));
    assert_eq!(
        v.swizzle([0, 3, 1]),
        Err(MathError::IndexOutOfRange {
            index: 3,
            dimension: 3
        })
    );
    let mut m = v;
    assert!(m.swizzle_mut([9, 0, 0]).is_err());
    assert_eq!(m, v);
    assert_eq!(v.xy().to_array(), [1.0, 2.0]);
}

#[test]
fn lerp_integrate_distance() {
    let a = Vec3d::new(0.0, 0.0, 0.0);
    let b = Vec3d::new(2.0, 4.0, -6.0);
    assert_eq!(a.lerp(&b, 0.25).to_array(), [0.5, 1.0, -1.5]);
    assert_eq!(a.lerp(&b, -1.0).to_array(), [-2.0, -4.0, 6.0]);
    assert_eq!(a.integrate(&b, 0.5).to_array(), [1.0, 2.0, -3.0]);
    assert_eq!(a.distance_squared(&b), 56.0);
    assert_eq!(Vec3d::new(1.0, 2.0, 2.0).distance(&Vec3d::ZERO), 3.0);
}

#[test]
fn approx_traits_compare_componentwise() {
    let a = Vec3f::new(1.0, 2.0, 3.0);
    let b = Vec3f::new(1.0 + 1e-7, 2.0, 3.0 - 1e-7);
    approx::assert_relative_eq!(a, b, epsilon = 1e-6);
    approx::assert_abs_diff_ne!(a, b * 2.0);
}

#[test]
fn large_and_small_vectors_normalize_instead_of_collapsing() {
    let big = Vec3f::new(1e20, 0.0, 0.0);
    assert_eq!(big.length(), 1e20);
    assert_eq!(big.normalize().map(Vec3f::to_array), Ok([1.0, 0.0, 0.0]));

    let small = Vec3f::new(0.0, -1e-25, 0.0);
    assert_eq!(small.length(), 1e-25);
    assert_eq!(small.normalize().map(Vec3f::to_array), Ok([0.0, -1.0, 0.0]));
    assert_eq!(small.distance(&Vec3f::ZERO), 1e-25);
}

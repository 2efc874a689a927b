//! Pairing tests on the q = 103 curves
//!
//! Expected values were computed by hand-rolled reference arithmetic.

use super::*;
use crate::error::Error;
use crate::field::{Fp, Fp2};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn n(v: u64) -> BigInt {
    BigInt::from_u64(v)
}

fn type_a() -> TypeAPairing {
    TypeAPairing::new(&n(103), &n(13), &n(8)).unwrap()
}

fn type_f() -> TypeFPairing {
    TypeFPairing::new(&n(103), &n(97), &n(5), &BigInt::from_i64(-1), &n(2), &n(1)).unwrap()
}

fn a_point(e: &TypeAPairing, x: u64, y: u64) -> CurvePoint<Fp> {
    let f = e.g1_curve().field();
    CurvePoint::new(e.g1_curve(), Fp::from_u64(f, x), Fp::from_u64(f, y)).unwrap()
}

fn fp2(e: &TypeAPairing, c0: u64, c1: u64) -> Fp2 {
    Fp2::from_bigints(e.target_field(), &n(c0), &n(c1))
}

// ============================================================================
// Type A
// ============================================================================

#[test]
fn test_type_a_known_values() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let q = p.mul_scalar(&n(8));
    assert_eq!(e.pair(&p, &q).unwrap(), fp2(&e, 28, 91));
    assert_eq!(e.pair(&p, &p).unwrap(), fp2(&e, 6, 45));
    assert_eq!(
        e.pair(&p.mul_scalar(&n(2)), &q.mul_scalar(&n(3))).unwrap(),
        fp2(&e, 90, 55)
    );
    assert_eq!(
        e.pair(&p.mul_scalar(&n(3)), &q.mul_scalar(&n(5))).unwrap(),
        fp2(&e, 22, 49)
    );
    assert_eq!(
        e.pair(&p.mul_scalar(&n(5)), &q.mul_scalar(&n(2))).unwrap(),
        fp2(&e, 71, 25)
    );
}

#[test]
fn test_type_a_miller_loop_value() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let q = p.mul_scalar(&n(8));
    let f = e.miller_loop(&p, &q).unwrap();
    assert_eq!(f, fp2(&e, 54, 76));
    assert_eq!(e.final_exponentiation(&f).unwrap(), fp2(&e, 28, 91));
}

#[test]
fn test_type_a_bilinear_and_symmetric() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let q = a_point(&e, 49, 22);
    let base = e.pair(&p, &q).unwrap();
    for (a, b) in [(2u64, 7u64), (4, 9), (12, 12)] {
        let lhs = e.pair(&p.mul_scalar(&n(a)), &q.mul_scalar(&n(b))).unwrap();
        assert_eq!(lhs, base.pow(&n(a * b)));
    }
    assert_eq!(e.pair(&q, &p).unwrap(), base);
    assert!(e.is_symmetric());
    assert_eq!(e.embedding_degree(), 2);
}

#[test]
fn test_type_a_output_has_order_r() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let g = e.pair(&p, &p).unwrap();
    assert!(!g.is_one());
    assert!(g.pow(e.order()).is_one());
}

#[test]
fn test_type_a_identity_inputs() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let o = CurvePoint::identity(e.g1_curve());
    assert!(e.pair(&o, &p).unwrap().is_one());
    assert!(e.pair(&p, &o).unwrap().is_one());
    assert!(e.pair(&p, &p.mul_scalar(&n(13))).unwrap().is_one());
}

#[test]
fn test_type_a_rejects_non_subgroup_points() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    for (x, y) in [(0u64, 0u64), (1, 38), (1, 65)] {
        let bad = a_point(&e, x, y);
        assert!(matches!(e.pair(&bad, &p), Err(Error::InvalidPoint { .. })));
        assert!(matches!(e.pair(&p, &bad), Err(Error::InvalidPoint { .. })));
    }
}

#[test]
fn test_type_a_rejects_foreign_curve() {
    let e = type_a();
    let other = TypeAPairing::new(&n(23), &n(3), &n(8)).unwrap();
    let p = a_point(&e, 18, 44);
    let foreign = CurvePoint::hash_to_curve(other.g1_curve(), b"x").unwrap();
    assert!(matches!(e.pair(&foreign, &p), Err(Error::InvalidPoint { .. })));
}

#[test]
fn test_type_a_constructor_checks() {
    assert!(TypeAPairing::new(&n(101), &n(17), &n(6)).is_err()); // 101 ≡ 1 mod 4
    assert!(TypeAPairing::new(&n(103), &n(13), &n(7)).is_err());
}

// ============================================================================
// Type F
// ============================================================================

#[test]
fn test_type_f_known_value() {
    let e = type_f();
    let fp = e.g1_curve().field();
    let tw = e.g2_curve().field();
    let p = CurvePoint::new(e.g1_curve(), Fp::from_u64(fp, 2), Fp::from_u64(fp, 42)).unwrap();
    let q = CurvePoint::new(
        e.g2_curve(),
        Fp2::from_bigints(tw, &n(4), &n(61)),
        Fp2::from_bigints(tw, &n(18), &n(65)),
    )
    .unwrap();
    let got = e.pair(&p, &q).unwrap().to_w_coefficients();
    let expected = [(35, 20), (46, 84), (61, 13), (70, 34), (36, 94), (37, 44)];
    for (c, (a0, a1)) in got.iter().zip(expected) {
        assert_eq!(c, &Fp2::from_bigints(tw, &n(a0), &n(a1)));
    }
}

#[test]
fn test_type_f_bilinear() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let e = type_f();
    let p = CurvePoint::random(e.g1_curve(), &mut rng);
    let q = CurvePoint::random(e.g2_curve(), &mut rng);
    let base = e.pair(&p, &q).unwrap();
    assert!(!base.is_one());
    assert!(base.pow(e.order()).is_one());
    for (a, b) in [(2u64, 3u64), (5, 11), (96, 1)] {
        let lhs = e.pair(&p.mul_scalar(&n(a)), &q.mul_scalar(&n(b))).unwrap();
        assert_eq!(lhs, base.pow(&n(a * b)));
    }
    let sum = e.pair(&(&p + &p.double()), &q).unwrap();
    assert_eq!(sum, e.pair(&p, &q).unwrap().pow(&n(3)));
    assert!(!e.is_symmetric());
    assert_eq!(e.embedding_degree(), 12);
}

#[test]
fn test_type_f_rejects_twist_points_outside_subgroup() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let e = type_f();
    let p = CurvePoint::random(e.g1_curve(), &mut rng);
    // a raw twist point is almost never in the order-97 subgroup
    let tw = e.g2_curve().field();
    let mut found = false;
    for x in 0..50u64 {
        let x = Fp2::from_bigints(tw, &n(x), &n(1));
        if let Ok(q) = CurvePoint::from_x(e.g2_curve(), x, false) {
            if !q.is_torsion_free() {
                assert!(matches!(e.pair(&p, &q), Err(Error::InvalidPoint { .. })));
                found = true;
                break;
            }
        }
    }
    assert!(found);
}

#[test]
fn test_type_f_constructor_checks() {
    // r must divide q⁴ − q² + 1
    assert!(TypeFPairing::new(&n(103), &n(89), &n(5), &BigInt::from_i64(-1), &n(2), &n(1)).is_err());
    // β = 4 is a square
    assert!(TypeFPairing::new(&n(103), &n(97), &n(5), &n(4), &n(2), &n(1)).is_err());
}

#[test]
fn test_pairings_are_shareable_across_threads() {
    let e = type_a();
    let p = a_point(&e, 18, 44);
    let expected = e.pair(&p, &p).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(e.pair(&p, &p).unwrap(), expected));
        }
    });
}

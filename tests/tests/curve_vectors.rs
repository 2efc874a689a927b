//! Scalar multiplication against the known-answer table

use pbcrypt_algorithms::{BigInt, CurvePoint, PairingEngine};
use pbcrypt_api::GroupKind;
use pbcrypt_group::Element;
use pbcrypt_tests::{coefficients, integers, pairing, point, setup_tracing, vectors};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn multiples_match_table() {
    setup_tracing();
    let file = vectors::load("toy_curves");
    assert!(!file.multiple.is_empty());
    for v in &file.multiple {
        let e = pairing(&v.preset);
        let base = point(&e, v.group(), &v.base);
        let k: BigInt = v.k.parse().unwrap();
        let got = base.pow_int(&k).unwrap();
        if v.expected.is_empty() {
            assert!(got.is0(), "{} {}·base", v.preset, v.k);
        } else {
            let expected = point(&e, v.group(), &v.expected);
            assert_eq!(got, expected, "{} {}·base", v.preset, v.k);
            // repeated addition agrees with the ladder
            let mut acc = Element::zero(&e, v.group());
            for _ in 0..k.to_u64().unwrap() {
                acc = acc.add(&base).unwrap();
            }
            assert_eq!(acc, expected);
        }
    }
}

#[test]
fn coordinates_read_back() {
    let file = vectors::load("toy_curves");
    for v in file.multiple.iter().filter(|v| !v.expected.is_empty()) {
        let e = pairing(&v.preset);
        let p = point(&e, v.group(), &v.expected);
        assert_eq!(coefficients(&p), integers(&v.expected));
    }
}

#[test]
fn bn254_generators_are_members() {
    let file = vectors::load("toy_curves");
    for v in &file.generator {
        let e = pairing(&v.preset);
        let g1 = point(&e, GroupKind::G1, &v.g1);
        let g2 = point(&e, GroupKind::G2, &v.g2);
        assert!(g1.pow_int(e.order()).unwrap().is0());
        assert!(g2.pow_int(e.order()).unwrap().is0());
        assert!(!g1.is0() && !g2.is0());
    }
}

#[test]
fn random_points_are_in_the_subgroup() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let e = pairing("a-512");
    let engine = e.parameters().as_type_a().unwrap().clone();
    let curve = engine.g1_curve();
    for _ in 0..4 {
        let p = CurvePoint::random(curve, &mut rng);
        assert!(p.is_on_curve() && p.is_torsion_free());
        let compressed = p.to_bytes_compressed();
        assert_eq!(CurvePoint::from_bytes_compressed(curve, &compressed).unwrap(), p);
    }
}

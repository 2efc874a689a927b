//! Pairing known answers and bilinearity across the presets

use std::thread;

use pbcrypt_algorithms::BigInt;
use pbcrypt_api::GroupKind;
use pbcrypt_group::{Element, Pairing};
use pbcrypt_tests::{coefficients, integers, pairing, point, setup_tracing, vectors};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn pairings_match_table() {
    setup_tracing();
    let file = vectors::load("toy_curves");
    for v in &file.pairing {
        let e = pairing(&v.preset);
        let p = point(&e, GroupKind::G1, &v.p);
        let q = point(&e, GroupKind::G2, &v.q);
        let gt = e.apply(&p, &q).unwrap();
        assert_eq!(coefficients(&gt), integers(&v.expected), "{}", v.preset);
        if let Some(encoded) = &v.encoded {
            assert_eq!(hex::encode(gt.to_bytes()), *encoded);
        }
    }
}

fn check_bilinear(e: &Pairing, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let p = Element::random(e, GroupKind::G1, &mut rng);
    let q = Element::random(e, GroupKind::G2, &mut rng);
    let a = Element::random(e, GroupKind::Zr, &mut rng);
    let b = Element::random(e, GroupKind::Zr, &mut rng);

    let base = e.apply(&p, &q).unwrap();
    assert!(!base.is1(), "degenerate pairing");
    let lhs = e.apply(&p.pow_zn(&a).unwrap(), &q.pow_zn(&b).unwrap()).unwrap();
    assert_eq!(lhs, base.pow_zn(&a.mul(&b).unwrap()).unwrap());
}

#[test]
fn bilinear_on_toy_presets() {
    for (name, seed) in [("a-toy", 1), ("f-toy", 2)] {
        let e = pairing(name);
        for i in 0..5 {
            check_bilinear(&e, seed * 100 + i);
        }
    }
}

#[test]
fn bilinear_on_type_a_512() {
    check_bilinear(&pairing("a-512"), 7);
}

#[test]
fn bn254_generators() {
    let file = vectors::load("toy_curves");
    let v = file
        .generator
        .iter()
        .find(|v| v.preset == "f-bn254")
        .expect("bn254 generators listed");
    let e = pairing(&v.preset);
    let g1 = point(&e, GroupKind::G1, &v.g1);
    let g2 = point(&e, GroupKind::G2, &v.g2);

    let base = e.apply(&g1, &g2).unwrap();
    assert!(!base.is1());
    assert!(base.pow_int(e.order()).unwrap().is1());

    let (two, three) = (BigInt::from_u64(2), BigInt::from_u64(3));
    let lhs = e
        .apply(&g1.pow_int(&two).unwrap(), &g2.pow_int(&three).unwrap())
        .unwrap();
    assert_eq!(lhs, base.pow_int(&BigInt::from_u64(6)).unwrap());
}

#[test]
fn symmetric_pairing_commutes() {
    let e = pairing("a-toy");
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let p = Element::random(&e, GroupKind::G1, &mut rng);
    let q_bytes = Element::random(&e, GroupKind::G2, &mut rng).to_bytes();
    // G1 and G2 share their points on a symmetric pairing
    let q_as_g1 = Element::from_bytes(&e, GroupKind::G1, &q_bytes).unwrap();
    let p_as_g2 = Element::from_bytes(&e, GroupKind::G2, &p.to_bytes()).unwrap();
    let q = Element::from_bytes(&e, GroupKind::G2, &q_bytes).unwrap();
    assert_eq!(e.apply(&p, &q).unwrap(), e.apply(&q_as_g1, &p_as_g2).unwrap());
}

#[test]
fn pairings_share_parameters_across_threads() {
    let e = pairing("f-toy");
    let mut rng = ChaCha20Rng::seed_from_u64(33);
    let inputs: Vec<_> = (0..4)
        .map(|_| {
            (
                Element::random(&e, GroupKind::G1, &mut rng),
                Element::random(&e, GroupKind::G2, &mut rng),
            )
        })
        .collect();
    let serial: Vec<_> = inputs
        .iter()
        .map(|(p, q)| e.apply(p, q).unwrap())
        .collect();
    let parallel: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(p, q)| {
                let e = &e;
                s.spawn(move || e.apply(p, q).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}

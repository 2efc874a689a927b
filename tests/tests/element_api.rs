//! The element API over the full-size presets

use pbcrypt_api::{Error, GroupKind, Serialize};
use pbcrypt_group::{Element, Pairing};
use pbcrypt_tests::{pairing, setup_tracing};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const GROUPS: [GroupKind; 4] = [GroupKind::G1, GroupKind::G2, GroupKind::GT, GroupKind::Zr];

#[test]
fn encodings_round_trip_on_type_a_512() {
    setup_tracing();
    let e = pairing("a-512");
    let mut rng = ChaCha20Rng::seed_from_u64(40);
    for group in GROUPS {
        let x = Element::random(&e, group, &mut rng);
        let ctx = (e.clone(), group);
        let bytes = <Element as Serialize>::to_bytes(&x);
        assert_eq!(<Element as Serialize>::from_bytes(&ctx, &bytes).unwrap(), x, "{}", group);
    }
    // 160-bit r, 512-bit q
    assert_eq!(Element::zero(&e, GroupKind::Zr).to_bytes().len(), 20);
    assert_eq!(Element::zero(&e, GroupKind::G1).to_bytes().len(), 129);
    assert_eq!(Element::one(&e, GroupKind::GT).to_bytes().len(), 128);
}

#[test]
fn compressed_forms_on_type_a_512() {
    let e = pairing("a-512");
    let p = Element::from_hash(&e, GroupKind::G1, b"compressed").unwrap();
    let c = p.to_bytes_compressed().unwrap();
    assert_eq!(c.len(), 65);
    assert_eq!(Element::from_bytes_compressed(&e, GroupKind::G1, &c).unwrap(), p);
    let x = p.to_bytes_x_only().unwrap();
    let lifted = Element::from_bytes_x_only(&e, GroupKind::G1, &x).unwrap();
    assert!(lifted == p || lifted == p.neg());
}

#[test]
fn hashing_is_deterministic() {
    let e = pairing("a-512");
    for group in GROUPS {
        let a = Element::from_hash(&e, group, b"identity-based").unwrap();
        let b = Element::from_hash(&e, group, b"identity-based").unwrap();
        let c = Element::from_hash(&e, group, b"identity-basee").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c, "{}", group);
    }
}

#[test]
fn bls_style_signature() {
    // sign: σ = H(m)^x; verify: e(σ, g) = e(H(m), g^x)
    let e = pairing("a-512");
    let mut rng = ChaCha20Rng::seed_from_u64(41);
    let g = Element::random(&e, GroupKind::G2, &mut rng);
    let x = Element::random(&e, GroupKind::Zr, &mut rng);
    let public = g.pow_zn(&x).unwrap();
    let h = Element::from_hash(&e, GroupKind::G1, b"hello").unwrap();
    let sigma = h.pow_zn(&x).unwrap();
    assert_eq!(e.apply(&sigma, &g).unwrap(), e.apply(&h, &public).unwrap());

    let forged = Element::from_hash(&e, GroupKind::G1, b"hellp").unwrap();
    assert_ne!(e.apply(&forged, &g).unwrap(), e.apply(&h, &public).unwrap());
}

#[test]
fn pairings_are_distinct_contexts() {
    let a = pairing("a-toy");
    let f = pairing("f-toy");
    let x = Element::one(&a, GroupKind::Zr);
    let y = Element::one(&f, GroupKind::Zr);
    assert!(matches!(x.add(&y), Err(Error::GroupMismatch { .. })));
    // a reloaded pairing is the same context
    let again = Pairing::new(&a.to_string()).unwrap();
    assert!(x.add(&Element::one(&again, GroupKind::Zr)).is_ok());
}

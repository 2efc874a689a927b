//! Algebraic properties of the field tower on the BN254 preset

use std::sync::{Arc, OnceLock};

use pbcrypt_algorithms::{
    load_parameters, FieldElement, Fp, Fp12, Fp12Field, Fp2, PairingEngine, PairingParameters,
    SqrtField, TypeFPairing,
};
use pbcrypt_params::TYPE_F_BN254;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bn254() -> &'static Arc<TypeFPairing> {
    static PARAMS: OnceLock<PairingParameters> = OnceLock::new();
    PARAMS
        .get_or_init(|| load_parameters(TYPE_F_BN254).expect("preset loads"))
        .as_type_f()
        .expect("type f preset")
}

fn fp12_field() -> &'static Arc<Fp12Field> {
    bn254().target_field()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fp_inverse_and_sqrt(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let field = bn254().g1_curve().field();
        let x = Fp::random(field, &mut rng);
        prop_assume!(!x.is_zero());
        prop_assert!((x.clone() * &x.invert().unwrap()).is_one());
        let sq = x.square();
        let root = sq.sqrt().unwrap();
        prop_assert!(root == x || root == -x.clone());
        prop_assert_eq!(x.sign(), !(-x.clone()).sign());
        prop_assert_eq!(x.is_square(), x.is_quadratic_residue());
    }

    #[test]
    fn fp2_field_axioms(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let field = bn254().g2_curve().field();
        let (a, b, c) = (
            Fp2::random(field, &mut rng),
            Fp2::random(field, &mut rng),
            Fp2::random(field, &mut rng),
        );
        prop_assert_eq!(a.clone() * &(b.clone() + &c), a.clone() * &b + a.clone() * &c);
        prop_assert_eq!(a.clone() * &b, b.clone() * &a);
        prop_assert_eq!(a.square(), a.clone() * &a);
        prop_assume!(!a.is_zero());
        prop_assert!((a.clone() * &a.invert().unwrap()).is_one());
        let root = a.square().sqrt().unwrap();
        prop_assert_eq!(root.square(), a.square());
        prop_assert_eq!(a.conjugate() * &a, Fp2::from_base(field, a.norm()));
    }

    #[test]
    fn fp12_inverse_and_conjugate(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let f = Fp12::random(fp12_field(), &mut rng);
        prop_assume!(!f.is_zero());
        prop_assert!((f.clone() * &f.invert().unwrap()).is_one());
        prop_assert_eq!(f.frobenius(6), f.conjugate());
        let w = f.to_w_coefficients();
        prop_assert_eq!(Fp12::from_w_coefficients(fp12_field(), w), f.clone());
    }

    #[test]
    fn encodings_round_trip(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let f = Fp12::random(fp12_field(), &mut rng);
        let bytes = f.to_bytes();
        prop_assert_eq!(bytes.len(), Fp12::encoded_len(fp12_field()));
        prop_assert_eq!(Fp12::from_bytes(fp12_field(), &bytes).unwrap(), f);
    }
}

#[test]
fn frobenius_is_the_q_power() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let q = bn254().g1_curve().field().modulus().clone();
    let f = Fp12::random(fp12_field(), &mut rng);
    assert_eq!(f.frobenius(1), f.pow(&q));
    assert_eq!(f.frobenius(2), f.pow(&q).pow(&q));
}

#[test]
fn non_canonical_encodings_rejected() {
    let field = bn254().g1_curve().field();
    let modulus = field.modulus().to_bytes_be_padded(field.byte_len()).unwrap();
    assert!(Fp::from_bytes(field, &modulus).is_err());
    assert!(Fp::from_bytes(field, &modulus[1..]).is_err());
}

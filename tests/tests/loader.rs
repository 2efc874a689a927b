//! Every preset loads; malformed text is rejected with context

use pbcrypt_algorithms::{load_parameters, Error, PairingParameters};
use pbcrypt_tests::setup_tracing;

#[test]
fn all_presets_load() {
    setup_tracing();
    for (name, text) in pbcrypt_params::ALL {
        let params = load_parameters(text).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(&name[..1], params.kind());
        assert!(params.order().is_probable_prime(20));
        let canonical = params.to_string();
        let again = load_parameters(&canonical).unwrap();
        assert_eq!(again.description(), params.description());
    }
}

#[test]
fn preset_shapes() {
    let a = load_parameters(pbcrypt_params::TYPE_A_512).unwrap();
    assert!(matches!(a, PairingParameters::TypeA { .. }));
    assert_eq!(a.order().bits(), 160);
    assert_eq!(a.g1_curve().field().modulus().bits(), 512);
    assert_eq!(a.embedding_degree(), 2);

    let f = load_parameters(pbcrypt_params::TYPE_F_BN254).unwrap();
    assert!(matches!(f, PairingParameters::TypeF { .. }));
    assert_eq!(f.order().bits(), 254);
    assert_eq!(f.embedding_degree(), 12);
}

#[test]
fn malformed_texts() {
    let cases = [
        "",
        "type a",
        "type z\nq 7\n",
        "type f\nq 103\nr 97\nb 5\nbeta 102\nalpha0 2\n",
        "type a\nq 103\nh 8\nr 13\nexp2 3\nexp1 2\nsign1 1\nsign0 one\n",
        // r off by two
        "type a\nq 103\nh 8\nr 11\nexp2 3\nexp1 2\nsign1 1\nsign0 -1\n",
    ];
    for text in cases {
        match load_parameters(text) {
            Err(Error::MalformedParameter { .. }) => {}
            other => panic!("{:?} gave {:?}", text, other.map(|p| p.kind())),
        }
    }
}

#[test]
fn api_errors_carry_context() {
    let err = pbcrypt_group::Pairing::new("type a\nq 103\n").unwrap_err();
    assert!(matches!(err, pbcrypt_api::Error::MalformedParameter { .. }));
    assert!(err.to_string().contains("Pairing::new"));
}

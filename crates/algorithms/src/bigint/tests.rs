use super::*;
use subtle::ConstantTimeEq;

const BN254_Q: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";
const BN254_R: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

fn int(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_decimal_roundtrip() {
    let q = int(BN254_Q);
    assert_eq!(q.to_string(), BN254_Q);
    assert_eq!(q.bits(), 254);
    assert_eq!(int("-12345678901234567890123").to_string(), "-12345678901234567890123");
    assert_eq!(int("0").to_string(), "0");
    assert_eq!(int("-0"), BigInt::zero());
    assert!(!int("-0").is_negative());
}

#[test]
fn test_hex_parsing_and_formatting() {
    let v = int("0x1_0000_0000_0000_0000".replace('_', "").as_str());
    assert_eq!(v, BigInt::one() << 64);
    assert_eq!(format!("{:x}", v), "10000000000000000");
    assert_eq!(format!("{:#x}", BigInt::from_u64(255)), "0xff");
    assert_eq!(format!("{:x}", BigInt::zero()), "0");
    assert_eq!(BigInt::from_str_radix("-abc", 16).unwrap(), BigInt::from_i64(-0xabc));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("".parse::<BigInt>().is_err());
    assert!("-".parse::<BigInt>().is_err());
    assert!("12a".parse::<BigInt>().is_err());
    assert!("0x".parse::<BigInt>().is_err());
    assert!("0xzz".parse::<BigInt>().is_err());
    assert!(BigInt::from_str_radix("101", 2).is_err());
}

#[test]
fn test_signed_add_sub() {
    let a = BigInt::from_i64(-5);
    let b = BigInt::from_i64(3);
    assert_eq!(&a + &b, BigInt::from_i64(-2));
    assert_eq!(&b - &a, BigInt::from_i64(8));
    assert_eq!(&a - &a, BigInt::zero());
    assert!(!(&a - &a).is_negative());
    assert_eq!(-a.clone(), BigInt::from_i64(5));
    assert_eq!(&a * &b, BigInt::from_i64(-15));
}

#[test]
fn test_truncating_division() {
    let (q, r) = BigInt::from_i64(-7).div_rem(&BigInt::from_i64(2)).unwrap();
    assert_eq!(q, BigInt::from_i64(-3));
    assert_eq!(r, BigInt::from_i64(-1));

    let (q, r) = BigInt::from_i64(7).div_rem(&BigInt::from_i64(-2)).unwrap();
    assert_eq!(q, BigInt::from_i64(-3));
    assert_eq!(r, BigInt::from_i64(1));

    assert!(BigInt::one().div_rem(&BigInt::zero()).is_err());

    let a = int(BN254_Q) * int(BN254_R) + BigInt::from_u64(12345);
    let (q, r) = a.div_rem(&int(BN254_R)).unwrap();
    assert_eq!(q, int(BN254_Q));
    assert_eq!(r, BigInt::from_u64(12345));
}

#[test]
fn test_euclidean_modulo() {
    let m = BigInt::from_u64(3);
    assert_eq!(BigInt::from_i64(-7).modulo(&m).unwrap(), BigInt::from_u64(2));
    assert_eq!(BigInt::from_i64(-6).modulo(&m).unwrap(), BigInt::zero());
    assert_eq!(BigInt::from_i64(7).modulo(&m).unwrap(), BigInt::one());
    assert!(BigInt::one().modulo(&BigInt::zero()).is_err());
    assert!(BigInt::one().modulo(&BigInt::from_i64(-3)).is_err());
}

#[test]
fn test_mod_inverse() {
    let seven = BigInt::from_u64(7);
    assert_eq!(BigInt::from_u64(3).mod_inverse(&seven).unwrap(), BigInt::from_u64(5));
    assert_eq!(BigInt::from_i64(-3).mod_inverse(&seven).unwrap(), BigInt::from_u64(2));
    assert!(matches!(
        BigInt::zero().mod_inverse(&seven),
        Err(Error::NoInverse { .. })
    ));
    assert!(matches!(
        BigInt::from_u64(6).mod_inverse(&BigInt::from_u64(9)),
        Err(Error::NoInverse { .. })
    ));
    assert!(BigInt::from_u64(2).mod_inverse(&BigInt::one()).is_err());

    let q = int(BN254_Q);
    let x = int("123456789012345678901234567890");
    let inv = x.mod_inverse(&q).unwrap();
    assert!((&x * &inv).modulo(&q).unwrap().is_one());
}

#[test]
fn test_mod_pow() {
    let m = BigInt::from_u64(497);
    assert_eq!(
        BigInt::from_u64(4).mod_pow(&BigInt::from_u64(13), &m).unwrap(),
        BigInt::from_u64(445)
    );
    assert_eq!(
        BigInt::from_u64(3).mod_pow(&BigInt::from_i64(-1), &BigInt::from_u64(7)).unwrap(),
        BigInt::from_u64(5)
    );
    assert!(BigInt::from_u64(9)
        .mod_pow(&BigInt::zero(), &m)
        .unwrap()
        .is_one());
    assert!(BigInt::from_u64(9)
        .mod_pow(&BigInt::from_u64(5), &BigInt::one())
        .unwrap()
        .is_zero());

    // Fermat
    let q = int(BN254_Q);
    let e = &q - &BigInt::one();
    assert!(BigInt::from_u64(2).mod_pow(&e, &q).unwrap().is_one());
}

#[test]
fn test_primality() {
    assert!(int(BN254_Q).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(int(BN254_R).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(!(int(BN254_Q) * int(BN254_R)).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(!BigInt::from_u64(561).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(!BigInt::from_u64(1).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(!BigInt::from_i64(-7).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(BigInt::from_u64(2).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(BigInt::from_u64(103).is_probable_prime(MILLER_RABIN_ROUNDS));
    assert!(BigInt::from_u64(65_537).is_probable_prime(MILLER_RABIN_ROUNDS));
    // Strong pseudoprime to bases 2 and 3
    assert!(!BigInt::from_u64(1_373_653).is_probable_prime(MILLER_RABIN_ROUNDS));
}

#[test]
fn test_isqrt_and_gcd() {
    assert_eq!(BigInt::from_u64(99).isqrt().unwrap(), BigInt::from_u64(9));
    assert_eq!(BigInt::from_u64(100).isqrt().unwrap(), BigInt::from_u64(10));
    let big = BigInt::from_u64(10).pow(20);
    assert_eq!(big.isqrt().unwrap(), BigInt::from_u64(10_000_000_000));
    assert!(BigInt::from_i64(-4).isqrt().is_err());

    assert_eq!(
        BigInt::from_u64(48).gcd(&BigInt::from_i64(-18)),
        BigInt::from_u64(6)
    );
    assert_eq!(BigInt::zero().gcd(&BigInt::from_u64(5)), BigInt::from_u64(5));
}

#[test]
fn test_bit_access() {
    let v = BigInt::from_u64(0b1011_0000) << 64;
    assert_eq!(v.bits(), 72);
    assert!(v.bit(68));
    assert!(v.bit(69));
    assert!(!v.bit(70));
    assert!(!v.bit(1000));
    assert_eq!(v.trailing_zeros(), Some(68));
    assert_eq!(BigInt::zero().trailing_zeros(), None);
    assert_eq!((&v >> 68).to_u64(), Some(0b1011));
}

#[test]
fn test_bytes() {
    let v = BigInt::from_u64(0x0102_0304);
    assert_eq!(v.to_bytes_be(), vec![1, 2, 3, 4]);
    assert_eq!(v.to_bytes_be_padded(6).unwrap(), vec![0, 0, 1, 2, 3, 4]);
    assert!(matches!(
        v.to_bytes_be_padded(3),
        Err(Error::Length {
            expected: 3,
            actual: 4,
            ..
        })
    ));
    assert_eq!(BigInt::from_bytes_be(&[0, 0, 1, 2, 3, 4]), v);
    assert!(BigInt::zero().to_bytes_be().is_empty());

    let q = int(BN254_Q);
    assert_eq!(BigInt::from_bytes_be(&q.to_bytes_be_padded(32).unwrap()), q);
}

#[test]
fn test_ordering_and_ct_eq() {
    let mut values = vec![
        BigInt::from_i64(5),
        BigInt::from_i64(-10),
        BigInt::zero(),
        BigInt::one() << 70,
        -(BigInt::one() << 70),
    ];
    values.sort();
    assert_eq!(values[0], -(BigInt::one() << 70));
    assert_eq!(values[1], BigInt::from_i64(-10));
    assert_eq!(values[4], BigInt::one() << 70);

    assert!(bool::from(int(BN254_Q).ct_eq(&int(BN254_Q))));
    assert!(!bool::from(int(BN254_Q).ct_eq(&int(BN254_R))));
    assert!(!bool::from(BigInt::from_i64(3).ct_eq(&BigInt::from_i64(-3))));
}

#[test]
fn test_zeroize_resets_to_zero() {
    use zeroize::Zeroize;
    let mut v = int(BN254_Q);
    v.zeroize();
    assert!(v.is_zero());
    assert_eq!(v, BigInt::zero());
}

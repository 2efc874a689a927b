//! BigInt arithmetic checked against num-bigint

use num_bigint::{BigInt as Oracle, Sign};
use pbcrypt_algorithms::BigInt;
use proptest::prelude::*;

fn ours(negative: bool, bytes: &[u8]) -> BigInt {
    let v = BigInt::from_bytes_be(bytes);
    if negative {
        -v
    } else {
        v
    }
}

fn oracle(negative: bool, bytes: &[u8]) -> Oracle {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Oracle::from_bytes_be(sign, bytes)
}

fn magnitude() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..80)
}

fn nonzero_magnitude() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..48).prop_filter("nonzero", |v| v.iter().any(|&b| b != 0))
}

proptest! {
    #[test]
    fn ring_ops_agree(
        an in any::<bool>(), a in magnitude(),
        bn in any::<bool>(), b in magnitude(),
    ) {
        let (x, y) = (ours(an, &a), ours(bn, &b));
        let (ox, oy) = (oracle(an, &a), oracle(bn, &b));
        prop_assert_eq!((&x + &y).to_string(), (&ox + &oy).to_string());
        prop_assert_eq!((&x - &y).to_string(), (&ox - &oy).to_string());
        prop_assert_eq!((&x * &y).to_string(), (&ox * &oy).to_string());
        prop_assert_eq!(x.cmp(&y), ox.cmp(&oy));
    }

    #[test]
    fn division_truncates(
        an in any::<bool>(), a in magnitude(),
        bn in any::<bool>(), b in nonzero_magnitude(),
    ) {
        let (x, y) = (ours(an, &a), ours(bn, &b));
        let (ox, oy) = (oracle(an, &a), oracle(bn, &b));
        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(q.to_string(), (&ox / &oy).to_string());
        prop_assert_eq!(r.to_string(), (&ox % &oy).to_string());
        prop_assert_eq!(&(&q * &y) + &r, x);
        prop_assert!(r.abs() < y.abs());
    }

    #[test]
    fn modular_ops_agree(
        an in any::<bool>(), a in magnitude(),
        e in magnitude(),
        m in nonzero_magnitude(),
    ) {
        let (x, ox) = (ours(an, &a), oracle(an, &a));
        let (k, ok) = (ours(false, &e), oracle(false, &e));
        let (n, on) = (ours(false, &m), oracle(false, &m));
        let reduced = x.modulo(&n).unwrap();
        let expected = ((&ox % &on) + &on) % &on;
        prop_assert_eq!(reduced.to_string(), expected.to_string());
        prop_assert_eq!(
            x.mod_pow(&k, &n).unwrap().to_string(),
            expected.modpow(&ok, &on).to_string()
        );
    }

    #[test]
    fn inverse_and_gcd(a in nonzero_magnitude(), m in nonzero_magnitude()) {
        let (x, n) = (ours(false, &a), ours(false, &m));
        let g = x.gcd(&n);
        prop_assert_eq!(g.to_string(), num_integer_gcd(&oracle(false, &a), &oracle(false, &m)).to_string());
        match x.mod_inverse(&n) {
            Ok(inv) => {
                prop_assert!(g.is_one());
                prop_assert!((&x * &inv).modulo(&n).unwrap().is_one());
            }
            Err(_) => prop_assert!(!g.is_one() || n.is_one()),
        }
    }

    #[test]
    fn shifts_and_bits(a in magnitude(), s in 0usize..200) {
        let (x, ox) = (ours(false, &a), oracle(false, &a));
        prop_assert_eq!((x.clone() << s).to_string(), (&ox << s).to_string());
        prop_assert_eq!((x.clone() >> s).to_string(), (&ox >> s).to_string());
        prop_assert_eq!(x.bits() as u64, ox.bits());
    }

    #[test]
    fn isqrt_brackets(a in magnitude()) {
        let x = ours(false, &a);
        let s = x.isqrt().unwrap();
        let next = &s + &BigInt::one();
        prop_assert!(&s * &s <= x);
        prop_assert!(&next * &next > x);
    }

    #[test]
    fn text_and_bytes(an in any::<bool>(), a in magnitude()) {
        let x = ours(an, &a);
        let ox = oracle(an, &a);
        prop_assert_eq!(x.to_string(), ox.to_string());
        prop_assert_eq!(x.to_string().parse::<BigInt>().unwrap(), x.clone());
        prop_assert_eq!(format!("0x{:x}", x.abs()).parse::<BigInt>().unwrap(), x.abs());
        prop_assert_eq!(BigInt::from_bytes_be(&x.to_bytes_be()), x.abs());
    }
}

/// num-bigint leaves gcd to num-integer; Euclid on the oracle type is enough
fn num_integer_gcd(a: &Oracle, b: &Oracle) -> Oracle {
    let (mut a, mut b) = (a.clone(), b.clone());
    while b != Oracle::from(0) {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

#[test]
fn known_primes() {
    let p256: BigInt = "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
        .parse()
        .unwrap();
    assert!(p256.is_probable_prime(pbcrypt_algorithms::bigint::MILLER_RABIN_ROUNDS));
    let carmichael = BigInt::from_u64(561);
    assert!(!carmichael.is_probable_prime(pbcrypt_algorithms::bigint::MILLER_RABIN_ROUNDS));
    for p in [2u64, 3, 5, 103, 65537] {
        assert!(BigInt::from_u64(p).is_probable_prime(10), "{}", p);
    }
}

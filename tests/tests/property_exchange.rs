//! Property tests for the key agreement

use dhec_algorithms::{Curve, Point};
use dhec_exchange::{decode_point, encode_point, KeyPair};
use dhec_params::TinyCurve;
use num_bigint::BigUint;
use proptest::prelude::*;

fn tiny_curve() -> Curve {
    let big = BigUint::from;
    Curve::new(
        "tiny",
        big(TinyCurve::A),
        big(TinyCurve::B),
        big(TinyCurve::P),
        big(TinyCurve::N),
        Point::affine(big(TinyCurve::GX), big(TinyCurve::GY)),
    )
    .unwrap()
}

fn scalar() -> impl Strategy<Value = BigUint> {
    let n = Curve::secp256k1().order().clone();
    any::<[u8; 32]>()
        .prop_map(move |bytes| BigUint::from_bytes_be(&bytes) % &n)
        .prop_filter("non-zero scalar", |k| *k != BigUint::from(0u32))
}

#[test]
fn test_tiny_curve_every_pair_agrees() {
    let curve = tiny_curve();
    for a in 1..TinyCurve::N {
        for b in 1..TinyCurve::N {
            let alice = KeyPair::from_scalar(&curve, &BigUint::from(a)).unwrap();
            let bob = KeyPair::from_scalar(&curve, &BigUint::from(b)).unwrap();

            // Public points go through the wire codec like they would over TCP
            let bob_public = decode_point(&encode_point(bob.public()).unwrap()).unwrap();
            let alice_public = decode_point(&encode_point(alice.public()).unwrap()).unwrap();

            let s_alice = alice.derive_secret(&curve, &bob_public).unwrap();
            let s_bob = bob.derive_secret(&curve, &alice_public).unwrap();
            assert_eq!(s_alice, s_bob, "a = {a}, b = {b}");

            let expected = curve.mul_base(&BigUint::from(a * b)).unwrap();
            assert_eq!(Some(&s_alice.to_biguint()), expected.x(), "a = {a}, b = {b}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn secp256k1_parties_agree(a in scalar(), b in scalar()) {
        let curve = Curve::secp256k1();
        let alice = KeyPair::from_scalar(&curve, &a).unwrap();
        let bob = KeyPair::from_scalar(&curve, &b).unwrap();

        prop_assert!(curve.contains(alice.public()));
        prop_assert_eq!(
            alice.derive_secret(&curve, bob.public()).unwrap(),
            bob.derive_secret(&curve, alice.public()).unwrap()
        );
    }
}

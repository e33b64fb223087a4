//! Known-answer tests against the TOML vectors

use dhec_algorithms::{Curve, Point};
use dhec_exchange::KeyPair;
use dhec_tests::vectors::{self, big};

#[test]
fn test_secp256k1_scalar_multiples() {
    let file = vectors::load("secp256k1").unwrap();
    assert_eq!(file.curve, "secp256k1");
    assert!(!file.scalar_mult.is_empty());

    let curve = Curve::secp256k1();
    for v in &file.scalar_mult {
        let k = big("k", &v.k).unwrap();
        let expected = Point::affine(big("x", &v.x).unwrap(), big("y", &v.y).unwrap());

        assert_eq!(curve.mul_base(&k).unwrap(), expected, "k = {}", v.k);
        assert!(curve.contains(&expected), "k = {}", v.k);
    }
}

#[test]
fn test_secp256k1_exchanges() {
    let file = vectors::load("secp256k1").unwrap();
    let curve = Curve::secp256k1();

    for v in &file.exchange {
        let alice = KeyPair::from_scalar(&curve, &big("a", &v.a).unwrap()).unwrap();
        let bob = KeyPair::from_scalar(&curve, &big("b", &v.b).unwrap()).unwrap();

        let s_alice = alice.derive_secret(&curve, bob.public()).unwrap();
        let s_bob = bob.derive_secret(&curve, alice.public()).unwrap();

        assert_eq!(s_alice, s_bob, "a = {}, b = {}", v.a, v.b);
        assert_eq!(s_alice.to_hex(), v.shared_x, "a = {}, b = {}", v.a, v.b);
    }
}

#[test]
fn test_missing_vector_file() {
    assert!(vectors::load("no-such-curve").is_err());
    assert!(big("k", "xyz").is_err());
}

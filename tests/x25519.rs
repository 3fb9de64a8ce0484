//! Tests for converting Ed25519 keys into X25519 (Montgomery form) keys,
//! and for X25519 key agreement.

use curve25519_birational::constants::{
    ED25519_BASEPOINT_COMPRESSED, ED25519_BASEPOINT_POINT, X25519_BASEPOINT,
    X25519_BASEPOINT_COMPRESSED,
};
use curve25519_birational::x25519::{
    x25519, x25519_public_from_ed25519_public, x25519_secret_from_ed25519_seed, Ed25519Keys,
    PublicKey, StaticSecret,
};
use curve25519_birational::{CompressedEdwardsY, CurveError, Scalar};

use hex_literal::hex;

/// The Ed25519 key pair and the X25519 keys derived from it.
#[test]
fn ed25519_to_x25519_key_vector() {
    let seed = hex!("925774cba2b5900e4594d5c7596f45c0ccda2ae126cb3bb0e5a88f9eb07772d1");
    let ed_public = hex!("b0817e76a295e28feb8e4cbbe1f51adcb23fbf9e82b2b4c56f115601b9ee2c11");

    let x_secret = x25519_secret_from_ed25519_seed(&seed);
    let x_public = x25519_public_from_ed25519_public(&CompressedEdwardsY(ed_public)).unwrap();

    assert_eq!(
        x_secret,
        hex!("c0ab9b08992ff21361cd5ad402c813787a136c78a29508e4244948bba1c0664d")
    );
    assert_eq!(
        x_public.to_bytes(),
        hex!("1aadb0b40cfd3388c578108b4bf0c91fa30f35c3eb90d5ec159ad1f217ed5b7e")
    );

    // The mapped public key is the u-coordinate of secret * basepoint.
    let recomputed = X25519_BASEPOINT
        .mul(&Scalar::from_bits(x_secret))
        .unwrap()
        .compress();
    assert_eq!(recomputed.to_bytes(), x_public.to_bytes());
}

/// Tests that X25519 Diffie-Hellman works when using keys converted from Ed25519.
#[test]
fn ed25519_to_x25519_dh() {
    // Keys from RFC8032 test vectors (from section 7.1)
    let ed25519_secret_key_a =
        hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let ed25519_secret_key_b =
        hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");

    let keys_a = Ed25519Keys::from_seed(ed25519_secret_key_a).unwrap();
    let keys_b = Ed25519Keys::from_seed(ed25519_secret_key_b).unwrap();

    assert_eq!(
        keys_a.public.to_bytes(),
        hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
    );
    assert_eq!(
        keys_b.public.to_bytes(),
        hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c")
    );

    let x25519_a = keys_a.to_x25519().unwrap();
    let x25519_b = keys_b.to_x25519().unwrap();

    assert_eq!(
        x25519_a.secret.to_bytes(),
        hex!("307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f")
    );
    assert_eq!(
        x25519_b.secret.to_bytes(),
        hex!("68bd9ed75882d52815a97585caf4790a7f6c6b3b7f821c5e259a24b02e502e51")
    );

    assert_eq!(
        x25519_a.public.to_bytes(),
        hex!("d85e07ec22b0ad881537c2f44d662d1a143cf830c57aca4305d85c7a90f6b62e")
    );
    assert_eq!(
        x25519_b.public.to_bytes(),
        hex!("25c704c594b88afc00a76b69d1ed2b984d7e22550f3ed0802d04fbcd07d38d47")
    );

    let expected_shared_secret =
        hex!("5166f24a6918368e2af831a4affadd97af0ac326bdf143596c045967cc00230e");

    assert_eq!(
        x25519_b
            .secret
            .diffie_hellman(&x25519_a.public)
            .unwrap()
            .to_bytes(),
        expected_shared_secret
    );
    assert_eq!(
        x25519_a
            .secret
            .diffie_hellman(&x25519_b.public)
            .unwrap()
            .to_bytes(),
        expected_shared_secret
    );
}

#[test]
fn rfc7748_ladder_test_vector_1() {
    let scalar = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let input_u = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

    assert_eq!(x25519(scalar, input_u).unwrap(), expected);
}

#[test]
fn rfc7748_ladder_test_vector_2_is_on_the_twist() {
    let scalar = hex!("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let input_u = hex!("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a413");

    assert_eq!(x25519(scalar, input_u), Err(CurveError::InvalidEncoding));
}

#[test]
fn rfc7748_diffie_hellman() {
    let alice_secret = StaticSecret::from(hex!(
        "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a"
    ));
    let bob_secret = StaticSecret::from(hex!(
        "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb"
    ));

    let alice_public = alice_secret.public_key().unwrap();
    let bob_public = bob_secret.public_key().unwrap();

    assert_eq!(
        alice_public.to_bytes(),
        hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
    );
    assert_eq!(
        bob_public,
        PublicKey::from(hex!(
            "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
        ))
    );

    let expected = hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");
    let alice_shared = alice_secret.diffie_hellman(&bob_public).unwrap();
    let bob_shared = bob_secret.diffie_hellman(&alice_public).unwrap();

    assert_eq!(alice_shared.to_bytes(), expected);
    assert_eq!(bob_shared.to_bytes(), expected);
    assert!(alice_shared.was_contributory());
}

#[test]
#[cfg(feature = "rand_core")]
fn random_secrets_agree() {
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let a = StaticSecret::random(&mut rng);
        let b = StaticSecret::random(&mut rng);
        let a_shared = a.diffie_hellman(&b.public_key().unwrap()).unwrap();
        let b_shared = b.diffie_hellman(&a.public_key().unwrap()).unwrap();
        assert_eq!(a_shared.as_bytes(), b_shared.as_bytes());
    }
}

#[test]
fn basepoints_correspond() {
    assert_eq!(ED25519_BASEPOINT_POINT.to_montgomery().unwrap(), X25519_BASEPOINT);
    assert_eq!(
        x25519_public_from_ed25519_public(&ED25519_BASEPOINT_COMPRESSED)
            .unwrap()
            .to_bytes(),
        X25519_BASEPOINT_COMPRESSED.to_bytes()
    );
    assert_eq!(
        hex::encode(X25519_BASEPOINT_COMPRESSED.to_bytes()),
        "0900000000000000000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn malformed_ed25519_public_key_is_rejected() {
    // y = 2 has no x on the curve.
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    assert_eq!(
        x25519_public_from_ed25519_public(&CompressedEdwardsY(bytes)),
        Err(CurveError::InvalidEncoding)
    );
}

#[test]
#[cfg(feature = "rand_core")]
fn public_key_matches_edwards_route() {
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let secret = StaticSecret::random(&mut rng);
        let s = Scalar::from_bits(curve25519_birational::x25519::clamp_integer(
            secret.to_bytes(),
        ));
        let via_montgomery = curve25519_birational::MontgomeryPoint::mul_base(&s).unwrap().compress();
        let via_edwards = ED25519_BASEPOINT_POINT
            .mul(&s)
            .unwrap()
            .to_montgomery()
            .unwrap()
            .compress();
        assert_eq!(via_montgomery, via_edwards);
        assert_eq!(secret.public_key().unwrap().to_bytes(), via_edwards.to_bytes());
    }
}

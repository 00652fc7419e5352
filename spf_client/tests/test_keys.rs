use spf_client::{
    BitWidth, CallSite, Ciphertext, ComputeKey, Error, KeySet, PublicKey, SecretKey,
};


#[test]
fn test_key_bytes_roundtrip() {
    let setup = setup::setup();
    let ct = setup.public_key.encrypt(99, 16, false).unwrap();

    let secret_key = SecretKey::from_bytes(&setup.secret_key.to_bytes().unwrap()).unwrap();
    assert_eq!(secret_key.decrypt(&ct, false), 99);

    let public_key = PublicKey::from_bytes(&setup.public_key.to_bytes().unwrap()).unwrap();
    let ct = public_key.encrypt(123, 8, false).unwrap();
    assert_eq!(setup.secret_key.decrypt(&ct, false), 123);
}

#[test]
fn test_corrupted_key_bytes() {
    let data = b"corrupted data that is not valid msgpack";
    assert!(matches!(SecretKey::from_bytes(data), Err(Error::Decode(_))));
    assert!(matches!(PublicKey::from_bytes(data), Err(Error::Decode(_))));
    assert!(matches!(ComputeKey::from_bytes(data), Err(Error::Decode(_))));
    assert!(matches!(
        Ciphertext::from_bytes(b"not a valid ciphertext"),
        Err(Error::Decode(_))
    ));
}

#[test]
fn test_trailing_bytes_rejected() {
    let setup = setup::setup();

    let mut bytes = setup.public_key.encrypt(5, 8, false).unwrap().to_bytes().unwrap();
    bytes.push(0);
    assert!(matches!(Ciphertext::from_bytes(&bytes), Err(Error::Decode(_))));

    let mut bytes = setup.public_key.to_bytes().unwrap();
    bytes.push(0);
    assert!(matches!(PublicKey::from_bytes(&bytes), Err(Error::Decode(_))));
}

#[test]
fn test_ciphertext_bytes_roundtrip() {
    let setup = setup::setup();
    let ct = Ciphertext::encrypt(-1234, &setup.public_key, 32, true).unwrap();

    let restored = Ciphertext::from_bytes(&ct.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.bit_width(), BitWidth::U32);
    assert_eq!(restored.decrypt(&setup.secret_key, true), -1234);
    assert_eq!(restored.to_bytes().unwrap(), ct.to_bytes().unwrap());
}

#[test]
fn test_boundary_values() {
    let setup = setup::setup();
    for bw in BitWidth::ALL {
        let bits = u32::from(bw);

        let max_unsigned = bw.max_unsigned() as i128;
        let ct = setup.public_key.encrypt(max_unsigned, bits, false).unwrap();
        assert_eq!(setup.secret_key.decrypt(&ct, false), max_unsigned);

        for value in [bw.min_signed() as i128, bw.max_signed() as i128] {
            let ct = setup.public_key.encrypt(value, bits, true).unwrap();
            assert_eq!(setup.secret_key.decrypt(&ct, true), value);
        }
    }
}

#[test]
fn test_encrypt_validation() {
    let setup = setup::setup();
    for bw in [0, 1, 7, 15, 17, 33, 65, 128] {
        assert!(matches!(
            setup.public_key.encrypt(42, bw, false),
            Err(Error::InvalidBitWidth {
                site: CallSite::Encrypt,
                ..
            })
        ));
    }
    assert!(matches!(
        setup.public_key.encrypt(-1, 64, false),
        Err(Error::NegativeUnsignedValue { .. })
    ));
    assert!(matches!(
        setup.public_key.encrypt(256, 8, false),
        Err(Error::ValueOverflow { .. })
    ));
}

#[test]
fn test_keyset() {
    let keys = KeySet::generate();
    let ct = keys.encrypt(77, 8, false).unwrap();
    assert_eq!(keys.decrypt(&ct, false), 77);

    let compute_key = ComputeKey::from_bytes(&keys.compute_key().to_bytes().unwrap()).unwrap();
    let rebuilt = KeySet::new(
        keys.secret_key().clone(),
        keys.public_key().clone(),
        compute_key,
    );
    assert_eq!(rebuilt.decrypt(&ct, false), 77);
    assert!(format!("{rebuilt:?}").contains("<redacted>"));
}

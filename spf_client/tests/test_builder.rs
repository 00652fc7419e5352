use spf_client::{
    BitWidth, CallSite, CiphertextArrayParam, Error, ParameterBuilder, ParameterEntry,
};


#[test]
fn test_add_ciphertext() {
    let setup = setup::setup();
    let ct = setup.public_key.encrypt(42, 8, false).unwrap();

    let mut builder = ParameterBuilder::new();
    builder.ciphertext(ct).unwrap();
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_add_ciphertext_array() {
    let setup = setup::setup();
    let cts = (0..5)
        .map(|i| setup.public_key.encrypt(i, 8, false).unwrap())
        .collect();

    let params = ParameterBuilder::new()
        .ciphertext_array(cts)
        .unwrap()
        .build(None)
        .unwrap();

    let arr = params[0].as_ciphertext_array().unwrap();
    assert_eq!(arr.bit_width(), BitWidth::U8);
    assert_eq!(arr.len(), 5);
    for (i, ct) in arr.ciphertexts().iter().enumerate() {
        assert_eq!(setup.secret_key.decrypt(ct, false), i as i128);
    }
}

#[test]
fn test_ciphertext_array_mixed_bit_width() {
    let setup = setup::setup();
    let ct8 = setup.public_key.encrypt(1, 8, false).unwrap();
    let ct16 = setup.public_key.encrypt(2, 16, false).unwrap();

    let mut builder = ParameterBuilder::new();
    let err = builder.ciphertext_array(vec![ct8.clone(), ct16.clone()]).unwrap_err();
    assert!(matches!(
        err,
        Error::MixedBitWidth {
            expected: BitWidth::U8,
            index: 1,
            got: BitWidth::U16
        }
    ));
    assert!(err.to_string().contains("same bit_width"));
    assert!(builder.is_empty());

    // An explicit declaration must match every element.
    assert!(matches!(
        CiphertextArrayParam::with_bit_width(16, vec![ct16.clone(), ct8]),
        Err(Error::MixedBitWidth { index: 1, .. })
    ));
    assert!(matches!(
        CiphertextArrayParam::with_bit_width(7, vec![ct16.clone()]),
        Err(Error::InvalidBitWidth {
            site: CallSite::CiphertextArray,
            got: 7
        })
    ));
    let arr = CiphertextArrayParam::with_bit_width(16, vec![ct16]).unwrap();
    builder.push(arr);
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_encrypt_single_value() {
    let setup = setup::setup();
    let params = ParameterBuilder::new()
        .encrypt(5, 8, false)
        .unwrap()
        .output(8, 1)
        .unwrap()
        .build(Some(&setup.public_key))
        .unwrap();

    assert_eq!(params.len(), 2);
    let entry = params[0].as_ciphertext().unwrap();
    assert_eq!(entry.bit_width(), BitWidth::U8);
    assert_eq!(setup.secret_key.decrypt(entry.ciphertext(), false), 5);
    assert!(params[1].as_output().is_some());
}

#[test]
fn test_encrypt_requires_public_key() {
    let mut builder = ParameterBuilder::new();
    builder.encrypt(5, 8, false).unwrap().output(8, 1).unwrap();

    assert!(matches!(
        builder.build(None),
        Err(Error::MissingPublicKey { pending: 1 })
    ));

    // The failed build leaves the builder usable.
    let setup = setup::setup();
    assert_eq!(builder.build(Some(&setup.public_key)).unwrap().len(), 2);
}

#[test]
fn test_encrypt_array() {
    let setup = setup::setup();
    let params = ParameterBuilder::new()
        .encrypt_array(&[1, 2, 3, 4], 8, false)
        .unwrap()
        .output(16, 1)
        .unwrap()
        .build(Some(&setup.public_key))
        .unwrap();

    assert_eq!(params.len(), 2);
    let arr = params[0].as_ciphertext_array().unwrap();
    assert_eq!(arr.bit_width(), BitWidth::U8);
    assert_eq!(arr.len(), 4);
    let values: Vec<i128> = arr
        .ciphertexts()
        .iter()
        .map(|ct| setup.secret_key.decrypt(ct, false))
        .collect();
    assert_eq!(values, [1, 2, 3, 4]);
}

#[test]
fn test_encrypt_signed_values() {
    let setup = setup::setup();
    let params = ParameterBuilder::new()
        .encrypt(-5, 16, true)
        .unwrap()
        .encrypt_array(&[-128, 0, 127], 8, true)
        .unwrap()
        .build(Some(&setup.public_key))
        .unwrap();

    let ct = params[0].as_ciphertext().unwrap().ciphertext();
    assert_eq!(setup.secret_key.decrypt(ct, true), -5);
    assert_eq!(setup.secret_key.decrypt(ct, false), 65531);

    let values: Vec<i128> = params[1]
        .as_ciphertext_array()
        .unwrap()
        .ciphertexts()
        .iter()
        .map(|ct| setup.secret_key.decrypt(ct, true))
        .collect();
    assert_eq!(values, [-128, 0, 127]);
}

#[test]
fn test_build_without_encryption_needs_no_key() {
    let setup = setup::setup();
    let ct = setup.public_key.encrypt(42, 8, false).unwrap();

    let params = ParameterBuilder::new()
        .ciphertext(ct)
        .unwrap()
        .output(8, 1)
        .unwrap()
        .build(None)
        .unwrap();
    assert_eq!(params.len(), 2);
}

#[test]
fn test_pending_encryptions_resolve_in_place() {
    let setup = setup::setup();
    let ct = setup.public_key.encrypt(100, 8, false).unwrap();

    let params = ParameterBuilder::new()
        .encrypt(1, 32, false)
        .unwrap()
        .ciphertext(ct)
        .unwrap()
        .plaintext(7, 8, false)
        .unwrap()
        .encrypt(50, 8, false)
        .unwrap()
        .output(8, 1)
        .unwrap()
        .build(Some(&setup.public_key))
        .unwrap();

    assert_eq!(params.len(), 5);
    let decrypted: Vec<Option<i128>> = params
        .iter()
        .map(|entry| {
            entry
                .as_ciphertext()
                .map(|p| setup.secret_key.decrypt(p.ciphertext(), false))
        })
        .collect();
    assert_eq!(decrypted, [Some(1), Some(100), None, Some(50), None]);
    assert_eq!(params[0].bit_width(), BitWidth::U32);
}

#[test]
fn test_complex_parameter_set() {
    let setup = setup::setup();
    let params = ParameterBuilder::new()
        // Pre-encrypted ciphertexts
        .ciphertext(setup.public_key.encrypt(10, 8, false).unwrap())
        .unwrap()
        .ciphertext(setup.public_key.encrypt(20, 8, false).unwrap())
        .unwrap()
        // Encrypted array at build time
        .encrypt_array(&[100, 200, 300], 16, false)
        .unwrap()
        // Plaintext values
        .plaintext(12345, 32, false)
        .unwrap()
        .plaintext_array(&[1, 2, 3, 4], 8, false)
        .unwrap()
        // Outputs
        .output(8, 1)
        .unwrap()
        .output(16, 3)
        .unwrap()
        .build(Some(&setup.public_key))
        .unwrap();

    assert_eq!(params.len(), 7);
    assert!(!params.to_bytes().unwrap().is_empty());

    assert!(matches!(params[0], ParameterEntry::Ciphertext(_)));
    assert!(matches!(params[1], ParameterEntry::Ciphertext(_)));
    assert!(matches!(params[2], ParameterEntry::CiphertextArray(_)));
    assert!(matches!(params[3], ParameterEntry::Plaintext(_)));
    assert!(matches!(params[4], ParameterEntry::PlaintextArray(_)));
    assert!(matches!(params[5], ParameterEntry::Output(_)));
    assert!(matches!(params[6], ParameterEntry::Output(_)));
}

#[test]
fn test_encrypt_rejects_invalid_values_eagerly() {
    let mut builder = ParameterBuilder::new();
    assert!(matches!(
        builder.encrypt(-1, 8, false),
        Err(Error::NegativeUnsignedValue { value: -1 })
    ));
    assert!(matches!(
        builder.encrypt(1 << 32, 32, false),
        Err(Error::ValueOverflow { .. })
    ));
    assert!(matches!(
        builder.encrypt_array(&[0, 1 << 15], 16, true),
        Err(Error::ValueOverflow { .. })
    ));
    assert!(matches!(
        builder.encrypt(1, 128, false),
        Err(Error::InvalidBitWidth {
            site: CallSite::Encrypt,
            got: 128
        })
    ));
    assert!(builder.is_empty());
    // Nothing was recorded, so no key is needed.
    assert!(builder.build(None).unwrap().is_empty());
}

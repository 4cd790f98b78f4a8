use aead_templates::{
    AesCtrHmacAeadKeyFormat, AesEaxKeyFormat, AesGcmKeyFormat, AesGcmSivKeyFormat, HashType,
    KeyTemplate, create_aes_gcm_key_template,
};

use proptest::prelude::*;

// Strategy for generating key sizes in bytes
fn key_sizes() -> impl Strategy<Value = u32> {
    1..512u32
}

// Strategy for generating IV sizes in bytes
fn iv_sizes() -> impl Strategy<Value = u32> {
    1..64u32
}

// Strategy for generating tag sizes in bytes
fn tag_sizes() -> impl Strategy<Value = u32> {
    1..64u32
}

// Strategy for generating supported hash types
fn hash_types() -> impl Strategy<Value = HashType> {
    prop_oneof![
        Just(HashType::Sha1),
        Just(HashType::Sha224),
        Just(HashType::Sha256),
        Just(HashType::Sha384),
        Just(HashType::Sha512),
    ]
}

proptest! {
    #[test]
    fn test_eax_encoding_deterministic(key_size in key_sizes(), iv_size in iv_sizes()) {
        let first = AesEaxKeyFormat::new(key_size, iv_size).to_bytes();
        let second = AesEaxKeyFormat::new(key_size, iv_size).to_bytes();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_eax_encoding_roundtrip(key_size in key_sizes(), iv_size in iv_sizes()) {
        let format = AesEaxKeyFormat::new(key_size, iv_size);
        let bytes = format.to_bytes();
        let parsed = AesEaxKeyFormat::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed, format);
        prop_assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_gcm_encoding_roundtrip(key_size in key_sizes()) {
        let format = AesGcmKeyFormat::new(key_size);
        let bytes = format.to_bytes();
        let parsed = AesGcmKeyFormat::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed, format);
        prop_assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_gcm_siv_encoding_roundtrip(key_size in key_sizes()) {
        let format = AesGcmSivKeyFormat::new(key_size);
        let bytes = format.to_bytes();
        let parsed = AesGcmSivKeyFormat::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed, format);
        prop_assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn test_ctr_hmac_encoding_roundtrip(
        aes_key_size in key_sizes(),
        iv_size in iv_sizes(),
        hmac_key_size in key_sizes(),
        tag_size in tag_sizes(),
        hash in hash_types(),
    ) {
        let format =
            AesCtrHmacAeadKeyFormat::new(aes_key_size, iv_size, hmac_key_size, tag_size, hash);
        let bytes = format.to_bytes().unwrap();
        let parsed = AesCtrHmacAeadKeyFormat::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed, format);
        prop_assert_eq!(parsed.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_distinct_gcm_key_sizes_encode_distinctly(
        first in key_sizes(),
        second in key_sizes(),
    ) {
        prop_assume!(first != second);
        prop_assert_ne!(
            AesGcmKeyFormat::new(first).to_bytes(),
            AesGcmKeyFormat::new(second).to_bytes()
        );
    }

    #[test]
    fn test_template_wire_roundtrip(key_size in key_sizes()) {
        let template = create_aes_gcm_key_template(key_size).unwrap();
        let bytes = template.to_bytes();
        let parsed = KeyTemplate::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&parsed, &template);
        prop_assert_eq!(parsed.to_bytes(), bytes);
    }
}

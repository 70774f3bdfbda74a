use vtv_core::{HashAlgorithm, Hashfunction, VtvError};

#[test]
fn registry_resolves_canonical_and_loose_identifiers() {
    assert_eq!(HashAlgorithm::resolve("SHA-256").unwrap(), HashAlgorithm::Sha256);
    assert_eq!(HashAlgorithm::resolve("sha384").unwrap(), HashAlgorithm::Sha384);
    assert_eq!("Sha-512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
}

#[test]
fn unknown_identifier_is_rejected_immediately() {
    let err = HashAlgorithm::resolve("MD5").unwrap_err();
    assert!(matches!(err, VtvError::UnsupportedHashFunction(_)));
    assert_eq!(err.info().context.get("identifier").map(String::as_str), Some("MD5"));
    assert!(err.info().hint.is_some());
}

#[test]
fn digest_lengths_match_sha2_family() {
    let lengths: Vec<usize> = HashAlgorithm::ALL.iter().map(|h| h.digest_len()).collect();
    assert_eq!(lengths, vec![32, 48, 64]);
    for hash in HashAlgorithm::ALL {
        assert_eq!(hash.digest(b"abc").len(), hash.digest_len());
    }
}

#[test]
fn sha256_known_answer() {
    let digest = HashAlgorithm::Sha256.digest(b"");
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    assert_eq!(
        hex,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn digest_parts_hashes_the_concatenation() {
    let hash = HashAlgorithm::Sha512;
    assert_eq!(hash.digest_parts(&[&b"ab"[..], &b""[..], &b"c"[..]]), hash.digest(b"abc"));
}

#[test]
fn references_forward_the_capability() {
    let hash = HashAlgorithm::Sha384;
    let by_ref = &hash;
    assert_eq!(by_ref.name(), "SHA-384");
    assert_eq!(by_ref.digest(b"x"), hash.digest(b"x"));
}

#[test]
fn identifiers_round_trip_through_serde() {
    let json = serde_json::to_string(&HashAlgorithm::ALL).expect("serialize");
    assert_eq!(json, r#"["SHA-256","SHA-384","SHA-512"]"#);
    let decoded: Vec<HashAlgorithm> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, HashAlgorithm::ALL.to_vec());
    assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA-256");
}

//! Scheme registry lookups.

use std::collections::HashSet;

use encstring_codec::error::ParseErrorKind;
use encstring_codec::types::EncryptionScheme;

#[test]
fn code_and_name_resolve_to_same_scheme() {
    for scheme in EncryptionScheme::ALL {
        assert_eq!(EncryptionScheme::from_code(scheme.code()), Some(scheme));
        assert_eq!(EncryptionScheme::from_name(scheme.name()), Some(scheme));
        assert_eq!(EncryptionScheme::from_token(scheme.name()), Some(scheme));
        assert_eq!(
            EncryptionScheme::from_token(&scheme.code().to_string()),
            Some(scheme)
        );
    }
}

#[test]
fn codes_and_names_are_unique() {
    let codes: HashSet<u8> = EncryptionScheme::ALL.iter().map(|s| s.code()).collect();
    let names: HashSet<&str> = EncryptionScheme::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(codes.len(), EncryptionScheme::ALL.len());
    assert_eq!(names.len(), EncryptionScheme::ALL.len());
}

#[test]
fn all_is_in_code_order() {
    for (i, scheme) in EncryptionScheme::ALL.iter().enumerate() {
        assert_eq!(usize::from(scheme.code()), i);
    }
}

#[test]
fn required_segments_table() {
    let expected = [2, 3, 3, 1, 1, 2, 2];
    for (scheme, n) in EncryptionScheme::ALL.iter().zip(expected) {
        assert_eq!(scheme.required_segments(), n, "{scheme}");
    }
}

#[test]
fn mac_is_the_last_segment_when_present() {
    assert!(!EncryptionScheme::AesCbc256B64.has_mac());
    assert!(EncryptionScheme::AesCbc128HmacSha256B64.has_mac());
    assert!(EncryptionScheme::AesCbc256HmacSha256B64.has_mac());
    assert!(!EncryptionScheme::Rsa2048OaepSha256B64.has_mac());
    assert!(!EncryptionScheme::Rsa2048OaepSha1B64.has_mac());
    assert!(EncryptionScheme::Rsa2048OaepSha256HmacSha256B64.has_mac());
    assert!(EncryptionScheme::Rsa2048OaepSha1HmacSha256B64.has_mac());
}

#[test]
fn unknown_lookups() {
    assert_eq!(EncryptionScheme::from_code(7), None);
    assert_eq!(EncryptionScheme::from_code(254), None);
    assert_eq!(EncryptionScheme::from_name(""), None);
    assert_eq!(EncryptionScheme::from_name("AesCbc256_B64 "), None);
    assert_eq!(EncryptionScheme::from_name("aescbc256_b64"), None);
    assert_eq!(EncryptionScheme::from_token("01"), None);
    assert_eq!(EncryptionScheme::from_token("+1"), None);
    assert_eq!(EncryptionScheme::from_token("1000"), None);
}

#[test]
fn display_and_from_str() {
    let s = EncryptionScheme::Rsa2048OaepSha1HmacSha256B64;
    assert_eq!(s.to_string(), "Rsa2048_OaepSha1_HmacSha256_B64");
    assert_eq!("6".parse::<EncryptionScheme>(), Ok(s));
    assert_eq!("Rsa2048_OaepSha1_HmacSha256_B64".parse::<EncryptionScheme>(), Ok(s));
    assert_eq!(
        "Rsa2048".parse::<EncryptionScheme>().unwrap_err().kind,
        ParseErrorKind::UnknownSchemeToken
    );
}

#[test]
fn try_from_code() {
    assert_eq!(
        EncryptionScheme::try_from(3u8),
        Ok(EncryptionScheme::Rsa2048OaepSha256B64)
    );
    assert!(EncryptionScheme::try_from(9u8).is_err());
}

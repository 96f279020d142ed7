//! Validating values that are not already strings.

use std::borrow::Cow;
use std::fmt;

use encstring_codec::adapter::{Displayed, PayloadText, is_valid_encrypted_payload, validate_value};
use encstring_codec::error::ParseErrorKind;
use encstring_codec::{EncryptedString, EncryptionScheme};

struct FixedText(&'static str);

impl fmt::Display for FixedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A model field that may or may not carry a value.
struct KeyField {
    value: Option<String>,
}

impl PayloadText for KeyField {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        self.value.as_deref().map(Cow::Borrowed)
    }
}

#[test]
fn strings_validate_directly() {
    assert!(is_valid_encrypted_payload("aXY=|Y3Q="));
    assert!(is_valid_encrypted_payload(&String::from("aXY=|Y3Q=")));
    assert!(is_valid_encrypted_payload(&Cow::Borrowed("aXY=|Y3Q=")));
    assert!(!is_valid_encrypted_payload(""));
}

#[test]
fn absent_values_are_valid() {
    assert!(is_valid_encrypted_payload(&None::<String>));
    assert!(is_valid_encrypted_payload(&None::<i32>));
    assert!(is_valid_encrypted_payload(&KeyField { value: None }));
}

#[test]
fn present_option_is_validated() {
    assert!(!is_valid_encrypted_payload(&Some(String::new())));
    assert!(is_valid_encrypted_payload(&Some("aXY=|Y3Q=")));
}

#[test]
fn plain_integer_is_invalid() {
    assert!(!is_valid_encrypted_payload(&5));
    assert!(!is_valid_encrypted_payload(&0_u64));
    assert_eq!(
        validate_value(&5).unwrap_err().kind,
        ParseErrorKind::WrongSegmentCount
    );
}

#[test]
fn other_primitives() {
    assert!(!is_valid_encrypted_payload(&true));
    assert!(!is_valid_encrypted_payload(&'x'));
}

#[test]
fn displayed_objects() {
    assert!(!is_valid_encrypted_payload(&Displayed(FixedText("bad"))));
    assert!(is_valid_encrypted_payload(&Displayed(FixedText(
        "6.QmFzZTY0UGFydA==|QmFzZTY0UGFydA=="
    ))));
    assert!(!is_valid_encrypted_payload(&Displayed(EncryptionScheme::AesCbc256B64)));
}

#[test]
fn custom_field_type() {
    let field = KeyField {
        value: Some("2.aXY=|Y3Q=|cnNhQ3Q=".to_string()),
    };
    assert!(is_valid_encrypted_payload(&field));

    let field = KeyField {
        value: Some("2.aXY=|Y3Q=".to_string()),
    };
    assert!(!is_valid_encrypted_payload(&field));
}

#[test]
fn boxed_and_referenced() {
    let boxed: Box<str> = "aXY=|Y3Q=".into();
    assert!(is_valid_encrypted_payload(&boxed));
    let s = String::from("aXY=|Y3Q=");
    assert!(is_valid_encrypted_payload(&&s));
}

#[test]
fn encrypted_string_is_payload_text() {
    let e = EncryptedString::parse("Rsa2048_OaepSha256_B64.cnNhQ3Q=").unwrap();
    assert!(is_valid_encrypted_payload(&e));
    assert_eq!(e.scheme(), EncryptionScheme::Rsa2048OaepSha256B64);
    assert_eq!(e.as_str(), "Rsa2048_OaepSha256_B64.cnNhQ3Q=");
}

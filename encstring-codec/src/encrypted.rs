use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::adapter::PayloadText;
use crate::error::ParseError;
use crate::parse::parse_payload;
use crate::consts::SCHEME_DELIMITER;
use crate::types::{EncryptionScheme, ParsedPayload, PayloadForm, Segments};

/// An owned encrypted-string payload that is known to be well-formed.
///
/// With the `serde` feature it serializes as a plain string, and
/// deserialization fails for malformed payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EncryptedString {
    raw: String,
    scheme: EncryptionScheme,
    form: PayloadForm,
    /// Byte offset of the first segment within `raw`.
    body_start: usize,
}

impl EncryptedString {
    /// Validate `raw` and take ownership of it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ParseError> {
        let raw = raw.into();
        let parsed = parse_payload(&raw)?;
        let (scheme, form) = (parsed.scheme, parsed.form);
        let body_start = match form {
            PayloadForm::Typed => raw
                .bytes()
                .position(|b| b == SCHEME_DELIMITER)
                .map_or(0, |idx| idx + 1),
            PayloadForm::Legacy => 0,
        };
        Ok(Self {
            raw,
            scheme,
            form,
            body_start,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn scheme(&self) -> EncryptionScheme {
        self.scheme
    }

    #[must_use]
    pub fn form(&self) -> PayloadForm {
        self.form
    }

    /// The base64 segments, in wire order.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::from_validated_body(&self.raw[self.body_start..])
    }

    /// Borrowed view of the payload.
    #[must_use]
    pub fn payload(&self) -> ParsedPayload<'_> {
        ParsedPayload {
            scheme: self.scheme,
            form: self.form,
            segments: self.segments(),
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for EncryptedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for EncryptedString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EncryptedString {
    type Error = ParseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<EncryptedString> for String {
    fn from(value: EncryptedString) -> Self {
        value.raw
    }
}

impl AsRef<str> for EncryptedString {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PayloadText for EncryptedString {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.raw))
    }
}

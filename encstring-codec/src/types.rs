use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use crate::consts::{MAX_SEGMENTS, SCHEME_COUNT};
use crate::error::ParseError;

/// Encryption scheme of a payload. The discriminant is the wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EncryptionScheme {
    /// Code 0: AES-CBC-256, `iv|ct`.
    AesCbc256B64 = 0,
    /// Code 1: AES-CBC-128 with HMAC-SHA256, `iv|ct|mac`.
    AesCbc128HmacSha256B64 = 1,
    /// Code 2: AES-CBC-256 with HMAC-SHA256, `iv|ct|mac`.
    AesCbc256HmacSha256B64 = 2,
    /// Code 3: RSA-2048 OAEP SHA-256, `ct`.
    Rsa2048OaepSha256B64 = 3,
    /// Code 4: RSA-2048 OAEP SHA-1, `ct`.
    Rsa2048OaepSha1B64 = 4,
    /// Code 5: RSA-2048 OAEP SHA-256 with HMAC-SHA256, `ct|mac`.
    Rsa2048OaepSha256HmacSha256B64 = 5,
    /// Code 6: RSA-2048 OAEP SHA-1 with HMAC-SHA256, `ct|mac`.
    Rsa2048OaepSha1HmacSha256B64 = 6,
}

impl EncryptionScheme {
    /// Every registered scheme, in code order.
    pub const ALL: [Self; SCHEME_COUNT] = [
        Self::AesCbc256B64,
        Self::AesCbc128HmacSha256B64,
        Self::AesCbc256HmacSha256B64,
        Self::Rsa2048OaepSha256B64,
        Self::Rsa2048OaepSha1B64,
        Self::Rsa2048OaepSha256HmacSha256B64,
        Self::Rsa2048OaepSha1HmacSha256B64,
    ];

    /// Look up a scheme by its numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::AesCbc256B64),
            1 => Some(Self::AesCbc128HmacSha256B64),
            2 => Some(Self::AesCbc256HmacSha256B64),
            3 => Some(Self::Rsa2048OaepSha256B64),
            4 => Some(Self::Rsa2048OaepSha1B64),
            5 => Some(Self::Rsa2048OaepSha256HmacSha256B64),
            6 => Some(Self::Rsa2048OaepSha1HmacSha256B64),
            _ => None,
        }
    }

    /// Look up a scheme by its canonical name. Case-sensitive, exact match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AesCbc256_B64" => Some(Self::AesCbc256B64),
            "AesCbc128_HmacSha256_B64" => Some(Self::AesCbc128HmacSha256B64),
            "AesCbc256_HmacSha256_B64" => Some(Self::AesCbc256HmacSha256B64),
            "Rsa2048_OaepSha256_B64" => Some(Self::Rsa2048OaepSha256B64),
            "Rsa2048_OaepSha1_B64" => Some(Self::Rsa2048OaepSha1B64),
            "Rsa2048_OaepSha256_HmacSha256_B64" => Some(Self::Rsa2048OaepSha256HmacSha256B64),
            "Rsa2048_OaepSha1_HmacSha256_B64" => Some(Self::Rsa2048OaepSha1HmacSha256B64),
            _ => None,
        }
    }

    /// Resolve a typed-form token: a canonical name, or a decimal code
    /// written without sign, whitespace or leading zeros.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::from_name(token).or_else(|| parse_code(token).and_then(Self::from_code))
    }

    /// Numeric wire code (0-6).
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical name, as written in the typed form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AesCbc256B64 => "AesCbc256_B64",
            Self::AesCbc128HmacSha256B64 => "AesCbc128_HmacSha256_B64",
            Self::AesCbc256HmacSha256B64 => "AesCbc256_HmacSha256_B64",
            Self::Rsa2048OaepSha256B64 => "Rsa2048_OaepSha256_B64",
            Self::Rsa2048OaepSha1B64 => "Rsa2048_OaepSha1_B64",
            Self::Rsa2048OaepSha256HmacSha256B64 => "Rsa2048_OaepSha256_HmacSha256_B64",
            Self::Rsa2048OaepSha1HmacSha256B64 => "Rsa2048_OaepSha1_HmacSha256_B64",
        }
    }

    /// Number of `|`-separated segments a payload of this scheme carries.
    #[must_use]
    pub fn required_segments(self) -> usize {
        match self {
            Self::Rsa2048OaepSha256B64 | Self::Rsa2048OaepSha1B64 => 1,
            Self::AesCbc256B64
            | Self::Rsa2048OaepSha256HmacSha256B64
            | Self::Rsa2048OaepSha1HmacSha256B64 => 2,
            Self::AesCbc128HmacSha256B64 | Self::AesCbc256HmacSha256B64 => 3,
        }
    }

    /// Whether the payload carries a MAC segment.
    #[must_use]
    pub fn has_mac(self) -> bool {
        !matches!(
            self,
            Self::AesCbc256B64 | Self::Rsa2048OaepSha256B64 | Self::Rsa2048OaepSha1B64
        )
    }
}

impl fmt::Display for EncryptionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncryptionScheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseError::unknown_scheme_token(0))
    }
}

impl TryFrom<u8> for EncryptionScheme {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| ParseError::unknown_scheme_token(0))
    }
}

/// How the scheme of a payload was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadForm {
    /// Explicit `<token>.` prefix.
    Typed,
    /// No prefix; scheme implied by the segment count.
    Legacy,
}

/// Payload segments, stored inline. Borrows from the input string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    items: [&'a str; MAX_SEGMENTS],
    len: usize,
}

impl<'a> Segments<'a> {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            items: [""; MAX_SEGMENTS],
            len: 0,
        }
    }

    /// Appends a segment. Returns `Err(segment)` if already full.
    pub(crate) fn push(&mut self, segment: &'a str) -> Result<(), &'a str> {
        if self.len >= MAX_SEGMENTS {
            return Err(segment);
        }
        self.items[self.len] = segment;
        self.len += 1;
        Ok(())
    }

    /// Split a body that has already been validated. Segments past
    /// `MAX_SEGMENTS` are dropped.
    #[cfg(feature = "alloc")]
    pub(crate) fn from_validated_body(body: &'a str) -> Self {
        let mut segments = Self::new();
        for (slot, segment) in segments
            .items
            .iter_mut()
            .zip(body.split(char::from(crate::consts::SEGMENT_SEPARATOR)))
        {
            *slot = segment;
            segments.len += 1;
        }
        segments
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.items[..self.len]
    }
}

impl<'a> Deref for Segments<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &[&'a str] {
        self.as_slice()
    }
}

impl fmt::Debug for Segments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// A well-formed encrypted-string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPayload<'a> {
    pub scheme: EncryptionScheme,
    pub form: PayloadForm,
    /// Exactly `scheme.required_segments()` non-empty base64 segments.
    pub segments: Segments<'a>,
}

impl<'a> ParsedPayload<'a> {
    /// The IV segment, for the AES-CBC schemes.
    #[must_use]
    pub fn iv(&self) -> Option<&'a str> {
        match self.scheme {
            EncryptionScheme::AesCbc256B64
            | EncryptionScheme::AesCbc128HmacSha256B64
            | EncryptionScheme::AesCbc256HmacSha256B64 => self.segments.first().copied(),
            _ => None,
        }
    }

    /// The ciphertext segment.
    #[must_use]
    pub fn ciphertext(&self) -> &'a str {
        match self.scheme {
            EncryptionScheme::AesCbc256B64
            | EncryptionScheme::AesCbc128HmacSha256B64
            | EncryptionScheme::AesCbc256HmacSha256B64 => {
                self.segments.get(1).copied().unwrap_or_default()
            }
            _ => self.segments.first().copied().unwrap_or_default(),
        }
    }

    /// The MAC segment, if the scheme carries one. Always the last segment.
    #[must_use]
    pub fn mac(&self) -> Option<&'a str> {
        if self.scheme.has_mac() {
            self.segments.last().copied()
        } else {
            None
        }
    }
}

/// Parse a decimal scheme code (`no_std`). Rejects signs, leading zeros and
/// values that do not fit a `u8`.
fn parse_code(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    let mut result: u8 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add(b - b'0')?;
    }
    Some(result)
}

pub mod segments;

use crate::consts::{
    LEGACY_SEGMENTS_AES_CBC_128_HMAC, LEGACY_SEGMENTS_AES_CBC_256, SCHEME_DELIMITER,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::types::{EncryptionScheme, ParsedPayload, PayloadForm};

use self::segments::{count_segments, split_segments};

/// Parse an encrypted-string payload in either the typed or the legacy form.
///
/// A `.` only delimits a scheme token when the text before it is a registered
/// scheme name or code; otherwise the whole input is read as the legacy form.
pub fn parse_payload(input: &str) -> Result<ParsedPayload<'_>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::empty_input());
    }

    match split_scheme_token(input) {
        Some((token, body)) => match EncryptionScheme::from_token(token) {
            Some(scheme) => parse_typed(scheme, body, token.len() + 1),
            None => parse_legacy(input).map_err(|e| refine_unknown_token(token, e)),
        },
        None => parse_legacy(input),
    }
}

/// Validate a possibly absent payload. An absent value has nothing to check
/// and is valid; the empty string is a concrete value and is not.
pub fn validate(input: Option<&str>) -> Result<(), ParseError> {
    let Some(input) = input else {
        return Ok(());
    };
    match parse_payload(input) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::trace!(
                kind = e.kind.as_str(),
                position = e.position,
                len = input.len(),
                "rejected encrypted string"
            );
            Err(e)
        }
    }
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_ok()
}

/// Split on the first `.`, if any.
fn split_scheme_token(input: &str) -> Option<(&str, &str)> {
    let idx = input.as_bytes().iter().position(|&b| b == SCHEME_DELIMITER)?;
    Some((&input[..idx], &input[idx + 1..]))
}

fn parse_typed(
    scheme: EncryptionScheme,
    body: &str,
    body_pos: usize,
) -> Result<ParsedPayload<'_>, ParseError> {
    if count_segments(body) != scheme.required_segments() {
        return Err(ParseError::wrong_segment_count(body_pos));
    }
    let segments = split_segments(body, body_pos)?;
    Ok(ParsedPayload {
        scheme,
        form: PayloadForm::Typed,
        segments,
    })
}

fn parse_legacy(input: &str) -> Result<ParsedPayload<'_>, ParseError> {
    let scheme = match count_segments(input) {
        LEGACY_SEGMENTS_AES_CBC_256 => EncryptionScheme::AesCbc256B64,
        LEGACY_SEGMENTS_AES_CBC_128_HMAC => EncryptionScheme::AesCbc128HmacSha256B64,
        _ => return Err(ParseError::wrong_segment_count(0)),
    };
    let segments = split_segments(input, 0)?;
    Ok(ParsedPayload {
        scheme,
        form: PayloadForm::Legacy,
        segments,
    })
}

/// A `.` prefix that looks like a scheme token but is not registered is
/// reported as such instead of as the legacy-form failure it also causes.
fn refine_unknown_token(token: &str, legacy_err: ParseError) -> ParseError {
    if !is_token_shaped(token) {
        return legacy_err;
    }
    tracing::debug!(token, "unregistered encryption scheme token");
    ParseError::unknown_scheme_token(0)
}

fn is_token_shaped(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

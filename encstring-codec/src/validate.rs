use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::consts::{BASE64_CHUNK_DECODED_LEN, BASE64_CHUNK_LEN};
use crate::error::ParseError;

/// Validate a single payload segment: non-empty, padded standard base64.
///
/// Decodes in fixed-size chunks into a stack buffer, so arbitrarily long
/// segments are checked without heap allocation.
pub fn validate_segment(segment: &str, pos: usize) -> Result<(), ParseError> {
    if segment.is_empty() {
        return Err(ParseError::empty_segment(pos));
    }
    if !is_base64(segment) {
        return Err(ParseError::invalid_base64_segment(pos));
    }
    Ok(())
}

/// Returns `true` if `s` decodes in full under the standard alphabet with
/// padding. The empty string is not considered base64 here.
#[must_use]
pub fn is_base64(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() % 4 != 0 {
        return false;
    }

    let mut buf = [0u8; BASE64_CHUNK_DECODED_LEN];
    let mut chunks = bytes.chunks(BASE64_CHUNK_LEN).peekable();
    while let Some(chunk) = chunks.next() {
        // Padding is only legal at the very end of the segment.
        if chunks.peek().is_some() && chunk.last() == Some(&b'=') {
            return false;
        }
        if STANDARD.decode_slice(chunk, &mut buf).is_err() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn accepts_padded_segments() {
        assert!(is_base64("aXY="));
        assert!(is_base64("Y3Q="));
        assert!(is_base64("QmFzZTY0UGFydA=="));
        assert!(is_base64("cnNhQ3Q="));
    }

    #[test]
    fn rejects_unpadded_and_garbled() {
        assert!(!is_base64("aXY"));
        assert!(!is_base64("!!!!"));
        assert!(!is_base64("aX-="));
        assert!(!is_base64("a=Y="));
        assert!(!is_base64("1"));
    }

    #[test]
    fn rejects_padding_at_chunk_boundary() {
        // "QQ==" repeated makes every chunk end in padding.
        let s = "QQ==".repeat(BASE64_CHUNK_LEN / 4 + 1);
        assert!(!is_base64(&s));
    }

    #[test]
    fn accepts_multi_chunk_segment() {
        let s = "QUJD".repeat(BASE64_CHUNK_LEN / 2) + "QQ==";
        assert!(is_base64(&s));
    }

    #[test]
    fn segment_errors_carry_kind() {
        assert_eq!(
            validate_segment("", 7).unwrap_err(),
            ParseError::new(ParseErrorKind::EmptySegment, 7)
        );
        assert_eq!(
            validate_segment("!|!", 3).unwrap_err().kind,
            ParseErrorKind::InvalidBase64Segment
        );
    }
}

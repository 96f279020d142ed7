use crate::consts::SEGMENT_SEPARATOR;
use crate::error::ParseError;
use crate::types::Segments;
use crate::validate;

/// Count the `|`-separated segments in `body`, including empty ones.
#[must_use]
pub fn count_segments(body: &str) -> usize {
    body.bytes().filter(|&b| b == SEGMENT_SEPARATOR).count() + 1
}

/// Split `body` on `|` and validate every segment.
///
/// `base_pos` is the offset of `body` within the original input. The caller
/// must have checked that `body` holds at most `MAX_SEGMENTS` segments.
pub fn split_segments(body: &str, base_pos: usize) -> Result<Segments<'_>, ParseError> {
    let mut segments = Segments::new();
    let mut pos = base_pos;
    for segment in body.split(char::from(SEGMENT_SEPARATOR)) {
        validate::validate_segment(segment, pos)?;
        segments
            .push(segment)
            .map_err(|_| ParseError::wrong_segment_count(pos))?;
        pos += segment.len() + 1;
    }
    Ok(segments)
}

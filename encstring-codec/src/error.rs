use core::fmt;

/// Reason an encrypted-string payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Input is the empty string.
    EmptyInput,
    /// Typed-form prefix names no registered scheme (by name or by code).
    UnknownSchemeToken,
    /// Segment count does not match the resolved or implied scheme.
    WrongSegmentCount,
    /// A segment is zero-length (leading, trailing or doubled `|`).
    EmptySegment,
    /// A segment is not valid padded standard base64.
    InvalidBase64Segment,
}

impl ParseErrorKind {
    /// Stable snake_case identifier, used by the language bindings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnknownSchemeToken => "unknown_scheme_token",
            Self::WrongSegmentCount => "wrong_segment_count",
            Self::EmptySegment => "empty_segment",
            Self::InvalidBase64Segment => "invalid_base64_segment",
        }
    }
}

/// Error returned by parsing and validation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte position in the input where the error was detected (approximate).
    pub position: usize,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ParseErrorKind::EmptyInput, 0)
    }

    #[must_use]
    pub fn unknown_scheme_token(position: usize) -> Self {
        Self::new(ParseErrorKind::UnknownSchemeToken, position)
    }

    #[must_use]
    pub fn wrong_segment_count(position: usize) -> Self {
        Self::new(ParseErrorKind::WrongSegmentCount, position)
    }

    #[must_use]
    pub fn empty_segment(position: usize) -> Self {
        Self::new(ParseErrorKind::EmptySegment, position)
    }

    #[must_use]
    pub fn invalid_base64_segment(position: usize) -> Self {
        Self::new(ParseErrorKind::InvalidBase64Segment, position)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            ParseErrorKind::EmptyInput => "empty encrypted string",
            ParseErrorKind::UnknownSchemeToken => "unknown encryption scheme",
            ParseErrorKind::WrongSegmentCount => "wrong number of segments",
            ParseErrorKind::EmptySegment => "empty segment",
            ParseErrorKind::InvalidBase64Segment => "segment is not valid base64",
        };
        write!(f, "{} at byte {}", desc, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

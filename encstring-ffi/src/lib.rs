//! C ABI bridge for encstring-codec.
//!
//! Exposes the validator and the scheme registry through `extern "C"` so that
//! request-validation layers written in other languages call a single shared
//! implementation.

use std::slice;
use std::str;

use encstring_codec::consts::MAX_SEGMENTS;
use encstring_codec::{EncryptionScheme, ParseError, ParseErrorKind, PayloadForm};

// ---------------------------------------------------------------------------
// Result codes (negative = error, 0 = success)
// ---------------------------------------------------------------------------

pub const ENCSTR_OK: i32 = 0;
pub const ENCSTR_ERR_EMPTY_INPUT: i32 = -1;
pub const ENCSTR_ERR_UNKNOWN_SCHEME: i32 = -2;
pub const ENCSTR_ERR_WRONG_SEGMENT_COUNT: i32 = -3;
pub const ENCSTR_ERR_EMPTY_SEGMENT: i32 = -4;
pub const ENCSTR_ERR_INVALID_BASE64: i32 = -5;
pub const ENCSTR_ERR_INVALID_UTF8: i32 = -6;
pub const ENCSTR_ERR_NULL_POINTER: i32 = -7;

// ---------------------------------------------------------------------------
// C-compatible types
// ---------------------------------------------------------------------------

#[repr(u8)]
pub enum EncstrForm {
    Typed = 0,
    Legacy = 1,
}

/// A borrowed string slice (pointer + length, NOT null-terminated).
#[repr(C)]
pub struct EncstrStr {
    pub ptr: *const u8,
    pub len: usize,
}

impl EncstrStr {
    fn empty() -> Self {
        Self {
            ptr: std::ptr::null(),
            len: 0,
        }
    }

    fn from_str(s: &str) -> Self {
        Self {
            ptr: s.as_ptr(),
            len: s.len(),
        }
    }
}

/// Flat C representation of a parsed payload.
///
/// Segment slices borrow from the input buffer passed to `encstr_parse`.
#[repr(C)]
pub struct EncstrPayload {
    pub scheme: u8,
    pub form: EncstrForm,
    pub segments_len: u8,
    pub segments: [EncstrStr; MAX_SEGMENTS],
    /// Byte offset of the rejection, valid when `encstr_parse` fails.
    pub error_position: usize,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn parse_error_to_code(e: &ParseError) -> i32 {
    match e.kind {
        ParseErrorKind::EmptyInput => ENCSTR_ERR_EMPTY_INPUT,
        ParseErrorKind::UnknownSchemeToken => ENCSTR_ERR_UNKNOWN_SCHEME,
        ParseErrorKind::WrongSegmentCount => ENCSTR_ERR_WRONG_SEGMENT_COUNT,
        ParseErrorKind::EmptySegment => ENCSTR_ERR_EMPTY_SEGMENT,
        ParseErrorKind::InvalidBase64Segment => ENCSTR_ERR_INVALID_BASE64,
    }
}

/// Borrow the input as `&str`. A null pointer is the absent value.
///
/// # Safety
/// - If non-null, `ptr` must point to `len` readable bytes.
unsafe fn input_str<'a>(ptr: *const u8, len: usize) -> Result<Option<&'a str>, i32> {
    if ptr.is_null() {
        return Ok(None);
    }
    let bytes = unsafe { slice::from_raw_parts(ptr, len) };
    str::from_utf8(bytes)
        .map(Some)
        .map_err(|_| ENCSTR_ERR_INVALID_UTF8)
}

// ---------------------------------------------------------------------------
// FFI functions
// ---------------------------------------------------------------------------

/// Returns `true` if the input is absent (`input_ptr` is null) or is a
/// well-formed encrypted string. Invalid UTF-8 is not well-formed.
///
/// # Safety
/// - If non-null, `input_ptr` must point to `input_len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encstr_is_valid(input_ptr: *const u8, input_len: usize) -> bool {
    match unsafe { input_str(input_ptr, input_len) } {
        Ok(input) => encstring_codec::is_valid(input),
        Err(_) => false,
    }
}

/// Validate an encrypted string.
///
/// # Safety
/// - If non-null, `input_ptr` must point to `input_len` readable bytes.
///
/// Returns 0 when valid or absent, negative error code otherwise.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encstr_validate(input_ptr: *const u8, input_len: usize) -> i32 {
    let input = match unsafe { input_str(input_ptr, input_len) } {
        Ok(input) => input,
        Err(code) => return code,
    };
    match encstring_codec::validate(input) {
        Ok(()) => ENCSTR_OK,
        Err(e) => parse_error_to_code(&e),
    }
}

/// Parse an encrypted string into its scheme and segments.
///
/// # Safety
/// - `input_ptr` must point to a valid UTF-8 byte array of `input_len` bytes,
///   which must outlive any use of the segment slices written to `out`.
/// - `out` must point to a valid, writeable `EncstrPayload`.
///
/// Returns 0 on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encstr_parse(
    input_ptr: *const u8,
    input_len: usize,
    out: *mut EncstrPayload,
) -> i32 {
    if out.is_null() {
        return ENCSTR_ERR_NULL_POINTER;
    }
    let input = match unsafe { input_str(input_ptr, input_len) } {
        Ok(Some(input)) => input,
        Ok(None) => return ENCSTR_ERR_NULL_POINTER,
        Err(code) => return code,
    };

    let out = unsafe { &mut *out };
    out.segments = std::array::from_fn(|_| EncstrStr::empty());
    out.segments_len = 0;
    out.error_position = 0;

    let payload = match encstring_codec::parse_payload(input) {
        Ok(p) => p,
        Err(e) => {
            out.error_position = e.position;
            return parse_error_to_code(&e);
        }
    };

    out.scheme = payload.scheme.code();
    out.form = match payload.form {
        PayloadForm::Typed => EncstrForm::Typed,
        PayloadForm::Legacy => EncstrForm::Legacy,
    };
    out.segments_len = payload.segments.len() as u8;
    for (slot, segment) in out.segments.iter_mut().zip(payload.segments.iter()) {
        *slot = EncstrStr::from_str(segment);
    }

    ENCSTR_OK
}

/// Look up a scheme by token (canonical name or decimal code).
///
/// # Safety
/// - `token_ptr` must point to `token_len` readable bytes.
///
/// Returns the scheme code (0-6), or a negative error code.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encstr_scheme_from_token(token_ptr: *const u8, token_len: usize) -> i32 {
    let token = match unsafe { input_str(token_ptr, token_len) } {
        Ok(Some(token)) => token,
        Ok(None) => return ENCSTR_ERR_NULL_POINTER,
        Err(code) => return code,
    };
    match EncryptionScheme::from_token(token) {
        Some(scheme) => i32::from(scheme.code()),
        None => ENCSTR_ERR_UNKNOWN_SCHEME,
    }
}

/// Write the canonical name of scheme `code` into `out`. The name is static.
///
/// # Safety
/// - `out` must point to a valid, writeable `EncstrStr`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encstr_scheme_name(code: u8, out: *mut EncstrStr) -> i32 {
    if out.is_null() {
        return ENCSTR_ERR_NULL_POINTER;
    }
    let Some(scheme) = EncryptionScheme::from_code(code) else {
        return ENCSTR_ERR_UNKNOWN_SCHEME;
    };
    unsafe {
        *out = EncstrStr::from_str(scheme.name());
    }
    ENCSTR_OK
}

/// Number of segments required by scheme `code`, or a negative error code.
#[unsafe(no_mangle)]
pub extern "C" fn encstr_scheme_required_segments(code: u8) -> i32 {
    match EncryptionScheme::from_code(code) {
        Some(scheme) => scheme.required_segments() as i32,
        None => {
            tracing::debug!(code, "required segments requested for unknown scheme");
            ENCSTR_ERR_UNKNOWN_SCHEME
        }
    }
}

/// Separates the scheme token from the payload body in the typed form.
pub const SCHEME_DELIMITER: u8 = b'.';

/// Separates payload segments (IV, ciphertext, MAC, ...).
pub const SEGMENT_SEPARATOR: u8 = b'|';

/// Largest segment count required by any registered scheme.
pub const MAX_SEGMENTS: usize = 3;

/// Number of schemes in the registry.
pub const SCHEME_COUNT: usize = 7;

/// Segment count of the two-part legacy form (implies `AesCbc256_B64`).
pub const LEGACY_SEGMENTS_AES_CBC_256: usize = 2;

/// Segment count of the three-part legacy form (implies `AesCbc128_HmacSha256_B64`).
pub const LEGACY_SEGMENTS_AES_CBC_128_HMAC: usize = 3;

/// Base64 characters decoded per step when validating a segment.
/// Must be a multiple of 4 so every chunk but the last is a whole quantum.
pub const BASE64_CHUNK_LEN: usize = 1024;

/// Decoded size of one full [`BASE64_CHUNK_LEN`] chunk.
pub const BASE64_CHUNK_DECODED_LEN: usize = BASE64_CHUNK_LEN / 4 * 3;

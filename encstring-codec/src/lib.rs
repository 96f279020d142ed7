#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod consts;
pub mod error;
pub mod types;
pub mod validate;

pub mod parse;

#[cfg(feature = "alloc")]
pub mod adapter;
#[cfg(feature = "alloc")]
pub mod encrypted;

pub use error::{ParseError, ParseErrorKind};
pub use types::*;

pub use parse::{is_valid, parse_payload, validate};
pub use validate::{is_base64, validate_segment};

#[cfg(feature = "alloc")]
pub use adapter::{Displayed, PayloadText, is_valid_encrypted_payload, validate_value};
#[cfg(feature = "alloc")]
pub use encrypted::EncryptedString;

//! Stringification adapter.
//!
//! Lets non-string field types reach the validator through their canonical
//! textual form. Nothing here validates; it only produces text or signals
//! that there is no value.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use crate::error::ParseError;
use crate::parse;

/// A value with a canonical textual representation.
pub trait PayloadText {
    /// The text to validate, or `None` when there is no value.
    fn payload_text(&self) -> Option<Cow<'_, str>>;
}

impl PayloadText for str {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl PayloadText for String {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl PayloadText for Cow<'_, str> {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&**self))
    }
}

impl<T: PayloadText + ?Sized> PayloadText for &T {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        (**self).payload_text()
    }
}

impl<T: PayloadText + ?Sized> PayloadText for Box<T> {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        (**self).payload_text()
    }
}

impl<T: PayloadText> PayloadText for Option<T> {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(PayloadText::payload_text)
    }
}

macro_rules! impl_payload_text_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl PayloadText for $t {
                fn payload_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_payload_text_via_display!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);

/// Wraps any [`fmt::Display`] value so its rendered text is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> PayloadText for Displayed<T> {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.0.to_string()))
    }
}

/// Validate any value with a textual form. A value without one is valid.
pub fn validate_value<T: PayloadText + ?Sized>(value: &T) -> Result<(), ParseError> {
    let text = value.payload_text();
    parse::validate(text.as_deref())
}

/// Returns `true` if `value` is absent or renders to a well-formed
/// encrypted-string payload.
#[must_use]
pub fn is_valid_encrypted_payload<T: PayloadText + ?Sized>(value: &T) -> bool {
    validate_value(value).is_ok()
}

//! Turning request payloads into handler inputs

use std::convert::Infallible;
use std::string::FromUtf8Error;

use crate::Data;

/// Errors an [Extract] implementation may fail with.
pub trait ExtractError: std::error::Error + 'static {}

impl ExtractError for Infallible {}

impl ExtractError for FromUtf8Error {}

/// Builds a handler input from the request payload.
pub trait Extract: Sized {
    type Error: ExtractError;
    fn extract(payload: Data) -> Result<Self, Self::Error>;
}

/// The payload itself, for handlers that decode it on their own terms.
impl Extract for Data {
    type Error = Infallible;
    fn extract(payload: Data) -> Result<Self, Self::Error> {
        Ok(payload)
    }
}

/// Text payloads must be valid UTF-8.
impl Extract for String {
    type Error = FromUtf8Error;
    fn extract(payload: Data) -> Result<Self, Self::Error> {
        String::from_utf8(payload.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_is_handed_over_untouched() {
        let data = Data::extract(Data::from(vec![0xffu8, 0x00])).expect("infallible");
        assert_eq!(data.as_slice(), &[0xff, 0x00]);
    }

    #[test]
    fn text_must_be_utf8() {
        assert!(String::extract(Data::from(vec![0xffu8, 0xfe])).is_err());
        assert_eq!(
            String::extract(Data::from("{\"name\":\"Zoë\"}")).expect("utf-8"),
            "{\"name\":\"Zoë\"}"
        );
    }
}

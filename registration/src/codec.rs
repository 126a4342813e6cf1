use base64::engine::general_purpose::{
    GeneralPurpose, STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD,
};
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::RegistrationErrorType;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Base64Variant {
    /// `+` and `/`
    #[serde(rename = "standard")]
    Standard,
    /// `-` and `_`
    #[serde(rename = "url_safe")]
    UrlSafe,
}

/// Converts between base64 text and raw bytes.
///
/// The alphabet and padding are configuration, never guessed from the input:
/// a padded codec only accepts canonically padded text and an unpadded codec
/// rejects any padding, so `decode` is the exact inverse of `encode`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BinaryCodec {
    pub variant: Base64Variant,
    pub padded: bool,
}

impl BinaryCodec {
    pub const fn new(variant: Base64Variant, padded: bool) -> BinaryCodec {
        BinaryCodec { variant, padded }
    }

    pub const fn standard() -> BinaryCodec {
        BinaryCodec::new(Base64Variant::Standard, true)
    }

    pub const fn url_safe_no_pad() -> BinaryCodec {
        BinaryCodec::new(Base64Variant::UrlSafe, false)
    }

    fn engine(&self) -> &'static GeneralPurpose {
        match (self.variant, self.padded) {
            (Base64Variant::Standard, true) => &STANDARD,
            (Base64Variant::Standard, false) => &STANDARD_NO_PAD,
            (Base64Variant::UrlSafe, true) => &URL_SAFE,
            (Base64Variant::UrlSafe, false) => &URL_SAFE_NO_PAD,
        }
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>, RegistrationErrorType> {
        self.engine().decode(text).map_err(|error| {
            tracing::debug!(?error, codec = ?self, "base64 decoding");

            RegistrationErrorType::DecodeError(error.to_string())
        })
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        self.engine().encode(bytes)
    }

    pub fn parse_json_bytes<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
    ) -> Result<T, RegistrationErrorType> {
        let text = std::str::from_utf8(bytes)
            .map_err(|error| RegistrationErrorType::ParseError(error.to_string()))?;

        serde_json::from_str(text)
            .map_err(|error| RegistrationErrorType::ParseError(error.to_string()))
    }
}

//! Client configuration, typically deserialized from the embedding
//! application's own settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::api::supporting_data_structures::ClientDataFormat;
use crate::codec::{Base64Variant, BinaryCodec};
use crate::error::ConfigError;

pub const DEFAULT_CREDENTIALS_URL: &str = "http://localhost:8080/credentials";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Config {
    /// Endpoint serving both the challenge (GET) and the submission (POST).
    pub credentials_url: Url,
    /// Must match the alphabet and padding the relying party encodes with.
    #[serde(default = "default_challenge_codec")]
    pub challenge_codec: BinaryCodec,
    #[serde(default = "default_submission_codec")]
    pub submission_codec: BinaryCodec,
    #[serde(default)]
    pub client_data_format: ClientDataFormat,
    #[serde(default = "default_include_email")]
    pub include_email: bool,
    /// Applies to the relying party requests only, never to the platform prompt.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Config {
    pub fn new(credentials_url: &str) -> Result<Config, ConfigError> {
        let credentials_url = Url::parse(credentials_url)
            .map_err(|error| ConfigError::InvalidUrl(credentials_url.to_string(), error))?;

        let config = Config {
            credentials_url,
            challenge_codec: default_challenge_codec(),
            submission_codec: default_submission_codec(),
            client_data_format: ClientDataFormat::default(),
            include_email: default_include_email(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.credentials_url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn with_challenge_codec(mut self, challenge_codec: BinaryCodec) -> Config {
        self.challenge_codec = challenge_codec;
        self
    }

    pub fn with_submission_codec(mut self, submission_codec: BinaryCodec) -> Config {
        self.submission_codec = submission_codec;
        self
    }

    pub fn with_client_data_format(mut self, client_data_format: ClientDataFormat) -> Config {
        self.client_data_format = client_data_format;
        self
    }

    pub fn with_include_email(mut self, include_email: bool) -> Config {
        self.include_email = include_email;
        self
    }

    pub fn with_request_timeout_ms(mut self, request_timeout_ms: Option<u64>) -> Config {
        self.request_timeout_ms = request_timeout_ms;
        self
    }
}

fn default_challenge_codec() -> BinaryCodec {
    BinaryCodec::new(Base64Variant::Standard, false)
}

fn default_submission_codec() -> BinaryCodec {
    BinaryCodec::standard()
}

fn default_include_email() -> bool {
    true
}

fn default_request_timeout_ms() -> Option<u64> {
    Some(10000)
}

fn default_user_agent() -> String {
    format!("registration/{}", env!("CARGO_PKG_VERSION"))
}

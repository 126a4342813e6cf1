use thiserror::Error;

use crate::ceremony::CeremonyState;

/// A failed ceremony, tagged with the state it was in when the error surfaced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{step} -> {error}")]
pub struct RegistrationError {
    pub step: CeremonyState,
    pub error: RegistrationErrorType,
}

impl RegistrationError {
    pub fn new(step: CeremonyState, error: RegistrationErrorType) -> RegistrationError {
        RegistrationError { step, error }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrationErrorType {
    /// Transport, DNS or connection failure.
    #[error("NetworkError: {0}")]
    NetworkError(String),

    /// The relying party answered with a non-success status.
    #[error("ServerError: {status} {body}")]
    ServerError { status: u16, body: String },

    /// A required field is missing or malformed.
    #[error("SchemaError: {0}")]
    SchemaError(String),

    #[error("DecodeError: {0}")]
    DecodeError(String),

    #[error("ParseError: {0}")]
    ParseError(String),

    /// The user dismissed the platform prompt or the caller aborted it.
    #[error("UserCancelled")]
    UserCancelled,

    #[error("NotAllowedError")]
    NotAllowed,

    #[error("InvalidStateError")]
    InvalidState,

    /// No platform authenticator is reachable.
    #[error("NotSupportedError: {0}")]
    NotSupported(String),

    /// The ceremony already ran to a terminal state.
    #[error("CeremonyFinished")]
    CeremonyFinished,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid credentials url '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("unsupported credentials url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

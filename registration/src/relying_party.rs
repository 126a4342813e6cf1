use async_trait::async_trait;

use crate::api::challenge_response::ChallengeResponse;
use crate::api::submission_payload::SubmissionPayload;
use crate::error::RegistrationErrorType;

mod http;

pub use http::RelyingPartyClient;

/// Opaque acknowledgement of a submitted credential.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerAck {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait ChallengeFetcher: Send + Sync {
    async fn fetch_challenge(
        &self,
        email: &str,
    ) -> Result<ChallengeResponse, RegistrationErrorType>;
}

#[async_trait]
pub trait ResultSubmitter: Send + Sync {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ServerAck, RegistrationErrorType>;
}

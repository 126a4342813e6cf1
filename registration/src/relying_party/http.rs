use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::api::challenge_response::ChallengeResponse;
use crate::api::submission_payload::SubmissionPayload;
use crate::config::Config;
use crate::error::{ConfigError, RegistrationErrorType};
use crate::relying_party::{ChallengeFetcher, ResultSubmitter, ServerAck};

/// Talks to the relying party's credentials endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct RelyingPartyClient {
    http_client: Client,
    credentials_url: Url,
}

impl RelyingPartyClient {
    pub fn new(config: &Config) -> Result<RelyingPartyClient, ConfigError> {
        config.validate()?;

        let mut client_builder = Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.request_timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(RelyingPartyClient::with_http_client(
            client_builder.build()?,
            config.credentials_url.to_owned(),
        ))
    }

    pub fn with_http_client(http_client: Client, credentials_url: Url) -> RelyingPartyClient {
        RelyingPartyClient {
            http_client,
            credentials_url,
        }
    }

    pub fn credentials_url(&self) -> &Url {
        &self.credentials_url
    }
}

#[async_trait]
impl ChallengeFetcher for RelyingPartyClient {
    async fn fetch_challenge(
        &self,
        email: &str,
    ) -> Result<ChallengeResponse, RegistrationErrorType> {
        tracing::debug!(url = %self.credentials_url, "requesting registration challenge");

        let response = self
            .http_client
            .get(self.credentials_url.to_owned())
            .query(&[("email", email)])
            .send()
            .await
            .map_err(network_error)?;

        let response = accepted(response, |status| status == StatusCode::OK).await?;
        let body = response.bytes().await.map_err(network_error)?;

        ChallengeResponse::from_json(&body)
    }
}

#[async_trait]
impl ResultSubmitter for RelyingPartyClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ServerAck, RegistrationErrorType> {
        tracing::debug!(url = %self.credentials_url, id = %payload.id, "submitting credential");

        let response = self
            .http_client
            .post(self.credentials_url.to_owned())
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        let response = accepted(response, |status| status.is_success()).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;

        Ok(ServerAck { status, body })
    }
}

/// Anything `accept` rejects becomes a `ServerError` carrying the body text.
async fn accepted(
    response: Response,
    accept: fn(StatusCode) -> bool,
) -> Result<Response, RegistrationErrorType> {
    let status = response.status();

    tracing::debug!(%status, "relying party responded");

    if accept(status) {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(error) => {
            tracing::debug!(?error, "unreadable error body");

            String::new()
        }
    };

    Err(RegistrationErrorType::ServerError {
        status: status.as_u16(),
        body,
    })
}

fn network_error(error: reqwest::Error) -> RegistrationErrorType {
    tracing::warn!(?error, "relying party request failed");

    RegistrationErrorType::NetworkError(error.to_string())
}

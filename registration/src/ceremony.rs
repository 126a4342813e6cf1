use std::sync::Arc;

use crate::api::credential_creation_options::{
    CredentialCreationOptions, PublicKeyCredentialCreationOptions,
};
use crate::api::submission_payload::SubmissionPayload;
use crate::api::supporting_data_structures::ClientDataFormat;
use crate::codec::BinaryCodec;
use crate::config::Config;
use crate::error::{ConfigError, RegistrationError, RegistrationErrorType};
use crate::form::{FormValues, EMAIL_FIELD};
use crate::platform::{AbortSignal, CredentialInvoker};
use crate::relying_party::{ChallengeFetcher, RelyingPartyClient, ResultSubmitter, ServerAck};

mod state;

pub use state::CeremonyState;

#[derive(Clone, Copy, Debug)]
struct Encoding {
    challenge_codec: BinaryCodec,
    submission_codec: BinaryCodec,
    client_data_format: ClientDataFormat,
    include_email: bool,
}

/// Entry point for passkey registration.
///
/// Every call to [`RegistrationClient::register`] runs its own [`Ceremony`];
/// concurrent registrations share nothing but the collaborators.
#[derive(Clone)]
pub struct RegistrationClient {
    fetcher: Arc<dyn ChallengeFetcher>,
    invoker: Arc<dyn CredentialInvoker>,
    submitter: Arc<dyn ResultSubmitter>,
    encoding: Encoding,
}

impl RegistrationClient {
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn ChallengeFetcher>,
        invoker: Arc<dyn CredentialInvoker>,
        submitter: Arc<dyn ResultSubmitter>,
    ) -> RegistrationClient {
        let encoding = Encoding {
            challenge_codec: config.challenge_codec,
            submission_codec: config.submission_codec,
            client_data_format: config.client_data_format,
            include_email: config.include_email,
        };

        RegistrationClient {
            fetcher,
            invoker,
            submitter,
            encoding,
        }
    }

    /// Uses the HTTP relying party client for both fetching and submitting.
    pub fn from_config(
        config: &Config,
        invoker: Arc<dyn CredentialInvoker>,
    ) -> Result<RegistrationClient, ConfigError> {
        let relying_party = Arc::new(RelyingPartyClient::new(config)?);

        Ok(RegistrationClient::new(
            config,
            relying_party.to_owned(),
            invoker,
            relying_party,
        ))
    }

    pub fn ceremony(&self, email: &str) -> Ceremony {
        Ceremony {
            email: email.to_string(),
            signal: None,
            fetcher: self.fetcher.to_owned(),
            invoker: self.invoker.to_owned(),
            submitter: self.submitter.to_owned(),
            encoding: self.encoding,
            state: CeremonyState::Idle,
            transitions: vec![CeremonyState::Idle],
        }
    }

    pub async fn register(&self, email: &str) -> Result<ServerAck, RegistrationError> {
        self.ceremony(email).run().await
    }

    pub async fn register_with_signal(
        &self,
        email: &str,
        signal: AbortSignal,
    ) -> Result<ServerAck, RegistrationError> {
        self.ceremony(email).with_signal(signal).run().await
    }

    /// Reads the `email` field and registers it.
    pub async fn register_form<F>(&self, form: &F) -> Result<ServerAck, RegistrationError>
    where
        F: FormValues + ?Sized,
    {
        let email = form
            .value(EMAIL_FIELD)
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                RegistrationError::new(
                    CeremonyState::Idle,
                    RegistrationErrorType::SchemaError(format!(
                        "form field '{EMAIL_FIELD}' is empty",
                    )),
                )
            })?;

        self.register(&email).await
    }
}

/// One registration attempt, from challenge fetch to acknowledgement.
pub struct Ceremony {
    email: String,
    signal: Option<AbortSignal>,
    fetcher: Arc<dyn ChallengeFetcher>,
    invoker: Arc<dyn CredentialInvoker>,
    submitter: Arc<dyn ResultSubmitter>,
    encoding: Encoding,
    state: CeremonyState,
    transitions: Vec<CeremonyState>,
}

impl Ceremony {
    pub fn with_signal(mut self, signal: AbortSignal) -> Ceremony {
        self.signal = Some(signal);
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> CeremonyState {
        self.state
    }

    pub fn transitions(&self) -> &[CeremonyState] {
        &self.transitions
    }

    /// Runs the ceremony once. The first error stops it and is returned as is,
    /// tagged with the state it surfaced in.
    pub async fn run(&mut self) -> Result<ServerAck, RegistrationError> {
        if self.state != CeremonyState::Idle {
            return Err(RegistrationError::new(
                self.state,
                RegistrationErrorType::CeremonyFinished,
            ));
        }

        match self.perform().await {
            Ok(server_ack) => {
                self.transition(CeremonyState::Completed);

                tracing::info!(
                    email = %self.email,
                    status = server_ack.status,
                    "registration ceremony completed",
                );

                Ok(server_ack)
            }
            Err(error) => {
                self.transition(CeremonyState::Failed);

                tracing::warn!(
                    email = %self.email,
                    step = %error.step,
                    error = %error.error,
                    "registration ceremony failed",
                );

                Err(error)
            }
        }
    }

    async fn perform(&mut self) -> Result<ServerAck, RegistrationError> {
        self.transition(CeremonyState::ChallengeRequested);

        let challenge_response = self
            .fetcher
            .fetch_challenge(&self.email)
            .await
            .map_err(|error| self.fail(error))?;

        self.transition(CeremonyState::ChallengeReceived);

        let public_key = PublicKeyCredentialCreationOptions::from_challenge_response(
            challenge_response,
            &self.encoding.challenge_codec,
        )
        .map_err(|error| self.fail(error))?;

        self.transition(CeremonyState::CredentialRequested);

        let options = CredentialCreationOptions {
            public_key,
            signal: self.signal.to_owned(),
        };
        let credential = self
            .invoker
            .create_credential(options)
            .await
            .map_err(|error| self.fail(error))?;

        self.transition(CeremonyState::CredentialCreated);

        let email = match self.encoding.include_email {
            true => Some(self.email.as_str()),
            false => None,
        };
        let payload = SubmissionPayload::generate(
            &credential,
            email,
            &self.encoding.submission_codec,
            self.encoding.client_data_format,
        )
        .map_err(|error| self.fail(error))?;

        self.transition(CeremonyState::Submitting);

        self.submitter
            .submit(&payload)
            .await
            .map_err(|error| self.fail(error))
    }

    fn transition(&mut self, state: CeremonyState) {
        tracing::debug!(
            email = %self.email,
            from = %self.state,
            state = %state,
            "registration ceremony transition",
        );

        self.state = state;
        self.transitions.push(state);
    }

    fn fail(&self, error: RegistrationErrorType) -> RegistrationError {
        RegistrationError::new(self.state, error)
    }
}

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::api::credential_creation_options::{
    CredentialCreationOptions, PublicKeyCredentialCreationOptions,
};
use crate::api::public_key_credential::PublicKeyCredential;
use crate::error::RegistrationErrorType;
use crate::platform::{AbortSignal, CredentialInvoker};

/// One pending prompt, handed to whatever drives the real authenticator.
///
/// Dropping it without responding counts as the user dismissing the prompt.
#[derive(Debug)]
pub struct PlatformRequest {
    pub options: PublicKeyCredentialCreationOptions,
    response: oneshot::Sender<Result<PublicKeyCredential, RegistrationErrorType>>,
}

impl PlatformRequest {
    pub fn respond(self, result: Result<PublicKeyCredential, RegistrationErrorType>) {
        if self.response.send(result).is_err() {
            tracing::debug!("platform response dropped, the ceremony is gone");
        }
    }

    /// True once the ceremony stopped waiting, e.g. after an abort.
    pub fn is_cancelled(&self) -> bool {
        self.response.is_closed()
    }
}

#[derive(Clone, Debug)]
pub struct PlatformChannel {
    request: mpsc::Sender<PlatformRequest>,
}

impl PlatformChannel {
    pub fn init() -> (PlatformChannel, mpsc::Receiver<PlatformRequest>) {
        let (request, receiver) = mpsc::channel::<PlatformRequest>(64);

        (PlatformChannel { request }, receiver)
    }
}

#[async_trait]
impl CredentialInvoker for PlatformChannel {
    async fn create_credential(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<PublicKeyCredential, RegistrationErrorType> {
        let CredentialCreationOptions {
            public_key,
            mut signal,
        } = options;

        if signal.as_ref().is_some_and(|signal| signal.is_aborted()) {
            return Err(RegistrationErrorType::UserCancelled);
        }

        let (request, response) = oneshot::channel();
        let platform_request = PlatformRequest {
            options: public_key,
            response: request,
        };

        tokio::select! {
            sent = self.request.send(platform_request) => {
                if let Err(error) = sent {
                    tracing::warn!(?error, "platform authenticator is not connected");

                    return Err(RegistrationErrorType::NotSupported(String::from(
                        "platform authenticator is not connected",
                    )));
                }
            }
            () = aborted(&mut signal) => {
                tracing::debug!("platform prompt aborted while queued");

                return Err(RegistrationErrorType::UserCancelled);
            }
        }

        let received = tokio::select! {
            received = response => received,
            () = aborted(&mut signal) => {
                tracing::debug!("platform prompt aborted by the caller");

                return Err(RegistrationErrorType::UserCancelled);
            }
        };

        match received {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!("platform prompt dismissed");

                Err(RegistrationErrorType::UserCancelled)
            }
        }
    }
}

/// Pends forever without a signal.
async fn aborted(signal: &mut Option<AbortSignal>) {
    match signal {
        Some(signal) => signal.aborted().await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::authenticator_responses::AuthenticatorAttestationResponse;
    use crate::api::challenge_response::PublicKeyCredentialRpEntity;
    use crate::api::credential_creation_options::PublicKeyCredentialUserEntity;
    use crate::platform::AbortController;
    use serde_json::Map;
    use std::time::Duration;
    use tokio::time::timeout;

    fn some_options(signal: Option<AbortSignal>) -> CredentialCreationOptions {
        CredentialCreationOptions {
            public_key: PublicKeyCredentialCreationOptions {
                rp: PublicKeyCredentialRpEntity {
                    id: Some(String::from("localhost")),
                    name: String::from("some_rp_name"),
                },
                user: PublicKeyCredentialUserEntity {
                    id: vec![1, 2, 3],
                    name: String::from("some_user_name"),
                    display_name: String::from("some_display_name"),
                },
                challenge: vec![0, 0, 0],
                pub_key_cred_params: Vec::with_capacity(0),
                timeout: None,
                attestation: None,
                extra: Map::new(),
            },
            signal,
        }
    }

    fn some_credential() -> PublicKeyCredential {
        PublicKeyCredential::generate(
            vec![7, 7, 7],
            AuthenticatorAttestationResponse {
                client_data_json: b"{}".to_vec(),
                attestation_object: vec![10, 20, 30],
            },
        )
    }

    #[tokio::test]
    async fn create_credential() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, mut test_platform) = PlatformChannel::init();

        let test_platform_handle = tokio::spawn(async move {
            if let Some(request) = test_platform.recv().await {
                assert_eq!(request.options.challenge, [0, 0, 0]);
                assert_eq!(request.options.user.id, [1, 2, 3]);
                assert!(!request.is_cancelled());

                request.respond(Ok(some_credential()));
            }
        });

        let test_credential = test_channel.create_credential(some_options(None)).await?;

        assert_eq!(test_credential, some_credential());

        test_platform_handle.await?;

        Ok(())
    }

    #[tokio::test]
    async fn platform_errors_pass_through() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, mut test_platform) = PlatformChannel::init();

        tokio::spawn(async move {
            while let Some(request) = test_platform.recv().await {
                request.respond(Err(RegistrationErrorType::NotAllowed));
            }
        });

        assert_eq!(
            test_channel.create_credential(some_options(None)).await,
            Err(RegistrationErrorType::NotAllowed),
        );

        Ok(())
    }

    #[tokio::test]
    async fn dismissed() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, mut test_platform) = PlatformChannel::init();

        tokio::spawn(async move {
            while let Some(request) = test_platform.recv().await {
                drop(request);
            }
        });

        assert_eq!(
            test_channel.create_credential(some_options(None)).await,
            Err(RegistrationErrorType::UserCancelled),
        );

        Ok(())
    }

    #[tokio::test]
    async fn aborted() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, mut test_platform) = PlatformChannel::init();
        let test_controller = AbortController::init();
        let test_signal = test_controller.signal();

        let test_platform_handle = tokio::spawn(async move {
            let request = test_platform.recv().await;

            test_controller.abort();

            request
        });

        let test_result = timeout(
            Duration::from_secs(5),
            test_channel.create_credential(some_options(Some(test_signal))),
        )
        .await?;

        assert_eq!(test_result, Err(RegistrationErrorType::UserCancelled));

        let test_request = test_platform_handle.await?;

        assert!(test_request.is_some_and(|request| request.is_cancelled()));

        Ok(())
    }

    #[tokio::test]
    async fn aborted_before_call() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, mut test_platform) = PlatformChannel::init();
        let test_controller = AbortController::init();

        test_controller.abort();

        assert_eq!(
            test_channel
                .create_credential(some_options(Some(test_controller.signal())))
                .await,
            Err(RegistrationErrorType::UserCancelled),
        );
        assert!(test_platform.try_recv().is_err());

        Ok(())
    }

    #[tokio::test]
    async fn aborted_while_queued() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, _test_platform) = PlatformChannel::init();

        for _ in 0..64 {
            let test_queued_channel = test_channel.to_owned();

            tokio::spawn(async move {
                let _ = test_queued_channel
                    .create_credential(some_options(None))
                    .await;
            });
        }

        timeout(Duration::from_secs(5), async {
            while test_channel.request.capacity() > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await?;

        let test_controller = AbortController::init();
        let test_abort = test_controller.to_owned();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;

            test_abort.abort();
        });

        let test_result = timeout(
            Duration::from_secs(5),
            test_channel.create_credential(some_options(Some(test_controller.signal()))),
        )
        .await?;

        assert_eq!(test_result, Err(RegistrationErrorType::UserCancelled));
        assert_eq!(test_channel.request.capacity(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn not_connected() -> Result<(), Box<dyn std::error::Error>> {
        let (test_channel, test_platform) = PlatformChannel::init();

        drop(test_platform);

        assert!(matches!(
            test_channel.create_credential(some_options(None)).await,
            Err(RegistrationErrorType::NotSupported(_)),
        ));

        Ok(())
    }
}

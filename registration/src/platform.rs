use async_trait::async_trait;

use crate::api::credential_creation_options::CredentialCreationOptions;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::error::RegistrationErrorType;

mod abort;
mod channel;

pub use abort::{AbortController, AbortSignal};
pub use channel::{PlatformChannel, PlatformRequest};

/// The platform credential-creation capability.
///
/// Implementations may wait on the user for as long as it takes. A caller that
/// needs to give up passes an [`AbortSignal`] in the options.
#[async_trait]
pub trait CredentialInvoker: Send + Sync {
    async fn create_credential(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<PublicKeyCredential, RegistrationErrorType>;
}

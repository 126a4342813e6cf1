use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::challenge_response::{
    AttestationConveyancePreference, ChallengeResponse, PublicKeyCredentialRpEntity,
};
use crate::api::credential_generation_parameters::PublicKeyCredentialParameters;
use crate::codec::BinaryCodec;
use crate::error::RegistrationErrorType;
use crate::platform::AbortSignal;

/// What the platform credential-creation capability receives.
#[derive(Clone, Debug)]
pub struct CredentialCreationOptions {
    pub public_key: PublicKeyCredentialCreationOptions,
    pub signal: Option<AbortSignal>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: Vec<u8>,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationConveyancePreference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PublicKeyCredentialCreationOptions {
    /// Decodes `challenge` and `user.id`; every other member is moved over as is.
    pub fn from_challenge_response(
        challenge_response: ChallengeResponse,
        codec: &BinaryCodec,
    ) -> Result<PublicKeyCredentialCreationOptions, RegistrationErrorType> {
        let challenge = codec.decode(&challenge_response.challenge)?;
        let user_id = codec.decode(&challenge_response.user.id)?;

        let ChallengeResponse {
            user,
            rp,
            pub_key_cred_params,
            timeout,
            attestation,
            extra,
            ..
        } = challenge_response;

        Ok(PublicKeyCredentialCreationOptions {
            rp,
            user: PublicKeyCredentialUserEntity {
                id: user_id,
                name: user.name,
                display_name: user.display_name,
            },
            challenge,
            pub_key_cred_params,
            timeout,
            attestation,
            extra,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

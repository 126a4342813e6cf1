use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::credential_generation_parameters::PublicKeyCredentialParameters;
use crate::error::RegistrationErrorType;

/// Registration challenge as issued by the relying party.
///
/// `challenge` and `user.id` are still base64 text here. Members this type
/// does not model are kept in `extra` so they reach the platform untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    pub challenge: String,
    pub user: EncodedUserEntity,
    pub rp: PublicKeyCredentialRpEntity,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationConveyancePreference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChallengeResponse {
    pub fn from_json(body: &[u8]) -> Result<ChallengeResponse, RegistrationErrorType> {
        let challenge_response: ChallengeResponse = serde_json::from_slice(body)
            .map_err(|error| RegistrationErrorType::SchemaError(error.to_string()))?;

        challenge_response.validate()?;

        Ok(challenge_response)
    }

    pub fn validate(&self) -> Result<(), RegistrationErrorType> {
        if self.challenge.is_empty() {
            return Err(RegistrationErrorType::SchemaError(String::from(
                "challenge is empty",
            )));
        }

        if self.user.id.is_empty() {
            return Err(RegistrationErrorType::SchemaError(String::from(
                "user.id is empty",
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedUserEntity {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialRpEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AttestationConveyancePreference {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "indirect")]
    Indirect,
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "enterprise")]
    Enterprise,
}

use serde::{Deserialize, Serialize};

use crate::api::authenticator_responses::AuthenticatorAttestationResponse;
use crate::api::supporting_data_structures::PublicKeyCredentialType;
use crate::codec::BinaryCodec;

/// The credential returned by the platform after a successful creation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub r#type: PublicKeyCredentialType,
    pub response: AuthenticatorAttestationResponse,
}

impl PublicKeyCredential {
    /// `id` is always the unpadded base64url form of `raw_id`.
    pub fn generate(
        raw_id: Vec<u8>,
        response: AuthenticatorAttestationResponse,
    ) -> PublicKeyCredential {
        let id = BinaryCodec::url_safe_no_pad().encode(&raw_id);

        PublicKeyCredential {
            id,
            raw_id,
            r#type: PublicKeyCredentialType::PublicKey,
            response,
        }
    }
}

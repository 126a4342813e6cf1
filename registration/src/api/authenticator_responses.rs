use serde::{Deserialize, Serialize};

/// Raw buffers produced by the authenticator for a new credential.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthenticatorAttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: Vec<u8>,
    #[serde(rename = "attestationObject")]
    pub attestation_object: Vec<u8>,
}

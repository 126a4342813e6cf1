use serde::Serialize;
use serde_json::Value;

use crate::api::public_key_credential::PublicKeyCredential;
use crate::api::supporting_data_structures::ClientDataFormat;
use crate::codec::BinaryCodec;
use crate::error::RegistrationErrorType;

/// Body of `POST /credentials`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub response: EncodedAttestationResponse,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedAttestationResponse {
    pub attestation_object: String,
    pub client_data: ClientData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClientData {
    Parsed(Value),
    Encoded(String),
}

impl SubmissionPayload {
    /// Encodes each buffer of `credential` exactly once. The client data is
    /// always read from `clientDataJSON`.
    pub fn generate(
        credential: &PublicKeyCredential,
        email: Option<&str>,
        codec: &BinaryCodec,
        client_data_format: ClientDataFormat,
    ) -> Result<SubmissionPayload, RegistrationErrorType> {
        let attestation_object = codec.encode(&credential.response.attestation_object);
        let client_data = match client_data_format {
            ClientDataFormat::Parsed => {
                ClientData::Parsed(codec.parse_json_bytes(&credential.response.client_data_json)?)
            }
            ClientDataFormat::Encoded => {
                ClientData::Encoded(codec.encode(&credential.response.client_data_json))
            }
        };

        Ok(SubmissionPayload {
            id: credential.id.to_owned(),
            email: email.map(str::to_owned),
            response: EncodedAttestationResponse {
                attestation_object,
                client_data,
            },
        })
    }
}

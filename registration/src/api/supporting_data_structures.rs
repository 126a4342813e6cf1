use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PublicKeyCredentialType {
    #[serde(rename = "public-key")]
    PublicKey,
}

/// COSE algorithm number, e.g. -7 for ES256 and -257 for RS256.
pub type COSEAlgorithmIdentifier = i64;

/// How `clientData` is carried in the submission payload.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ClientDataFormat {
    /// The client data JSON parsed into a structured value.
    #[default]
    #[serde(rename = "parsed")]
    Parsed,
    /// The raw client data bytes as base64 text.
    #[serde(rename = "encoded")]
    Encoded,
}

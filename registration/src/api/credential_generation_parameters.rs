use serde::{Deserialize, Serialize};

use crate::api::supporting_data_structures::{COSEAlgorithmIdentifier, PublicKeyCredentialType};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialParameters {
    pub r#type: PublicKeyCredentialType,
    pub alg: COSEAlgorithmIdentifier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn public_key_credential_parameters() -> Result<(), Box<dyn std::error::Error>> {
        let test_rs256: PublicKeyCredentialParameters =
            serde_json::from_value(json!({ "alg": -257, "type": "public-key" }))?;

        assert_eq!(test_rs256.r#type, PublicKeyCredentialType::PublicKey);
        assert_eq!(test_rs256.alg, -257);

        let test_es256 = PublicKeyCredentialParameters {
            r#type: PublicKeyCredentialType::PublicKey,
            alg: -7,
        };

        assert_eq!(
            serde_json::to_string(&test_es256)?,
            r#"{"type":"public-key","alg":-7}"#,
        );
        assert!(
            serde_json::from_value::<PublicKeyCredentialParameters>(json!({ "alg": -7 })).is_err()
        );

        Ok(())
    }
}

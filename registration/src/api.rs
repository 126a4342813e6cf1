pub mod authenticator_responses;
pub mod challenge_response;
pub mod credential_creation_options;
pub mod credential_generation_parameters;
pub mod public_key_credential;
pub mod submission_payload;
pub mod supporting_data_structures;

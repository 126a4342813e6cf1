//! Client side of a passkey (WebAuthn) registration ceremony.
//!
//! A [`RegistrationClient`] fetches a challenge from the relying party, hands
//! the decoded creation options to a platform authenticator through a
//! [`CredentialInvoker`], and posts the encoded credential back.

pub mod api;
pub mod ceremony;
pub mod codec;
pub mod config;
pub mod error;
pub mod form;
pub mod platform;
pub mod relying_party;

pub use ceremony::{Ceremony, CeremonyState, RegistrationClient};
pub use codec::{Base64Variant, BinaryCodec};
pub use config::Config;
pub use error::{ConfigError, RegistrationError, RegistrationErrorType};
pub use platform::{AbortController, AbortSignal, CredentialInvoker, PlatformChannel};
pub use relying_party::{ChallengeFetcher, RelyingPartyClient, ResultSubmitter, ServerAck};

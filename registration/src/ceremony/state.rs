#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CeremonyState {
    Idle,
    ChallengeRequested,
    ChallengeReceived,
    CredentialRequested,
    CredentialCreated,
    Submitting,
    Completed,
    Failed,
}

impl std::fmt::Display for CeremonyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CeremonyState::Idle => write!(f, "Idle"),
            CeremonyState::ChallengeRequested => write!(f, "ChallengeRequested"),
            CeremonyState::ChallengeReceived => write!(f, "ChallengeReceived"),
            CeremonyState::CredentialRequested => write!(f, "CredentialRequested"),
            CeremonyState::CredentialCreated => write!(f, "CredentialCreated"),
            CeremonyState::Submitting => write!(f, "Submitting"),
            CeremonyState::Completed => write!(f, "Completed"),
            CeremonyState::Failed => write!(f, "Failed"),
        }
    }
}

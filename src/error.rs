use reqwest::StatusCode;
use thiserror::Error;

/// Why a profile lookup ended without a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Error fetching profile")]
    FetchError { status: StatusCode },

    /// Transport failure or a body that could not be decoded.
    #[error("Network Error")]
    NetworkError(#[source] reqwest::Error),
}

/// Copyable classification of a [`ProfileError`], suitable for display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    FetchError,
    NetworkError,
}

impl ProfileError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound => FailureKind::NotFound,
            Self::FetchError { .. } => FailureKind::FetchError,
            Self::NetworkError(_) => FailureKind::NetworkError,
        }
    }
}

impl FailureKind {
    /// The message shown to the user for this failure.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "User not found",
            Self::FetchError => "Error fetching profile",
            Self::NetworkError => "Network Error",
        }
    }
}

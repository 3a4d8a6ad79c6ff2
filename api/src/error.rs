use crate::client::ApiError;
use std::fmt;

pub type StatsResult<T> = Result<T, StatsError>;

/// Failures raised by the transformations. The command-line surface flattens
/// all of these into one message, but callers can still match on the kind.
#[derive(Debug)]
pub enum StatsError {
    /// Missing or invalid caller input.
    Usage(String),
    /// A matchup label without exactly one `@`.
    MalformedMatchup { matchup: String },
    PlayerNotFound { player_id: String },
    /// The stats provider failed or returned something unusable.
    Upstream(ApiError),
}

impl StatsError {
    pub fn usage(msg: impl Into<String>) -> Self {
        StatsError::Usage(msg.into())
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Usage(msg) => write!(f, "{msg}"),
            StatsError::MalformedMatchup { matchup } => {
                write!(f, "Malformed matchup {matchup:?}: expected exactly one '@'")
            }
            StatsError::PlayerNotFound { player_id } => write!(f, "Player not found: {player_id}"),
            StatsError::Upstream(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for StatsError {
    fn from(e: ApiError) -> Self {
        StatsError::Upstream(e)
    }
}

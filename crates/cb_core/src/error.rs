use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid over limit: {overs} (must be 1..={max})")]
    InvalidOvers { overs: u32, max: u32 },

    #[error("Invalid outcome table: {0}")]
    InvalidOutcomeTable(String),

    #[error("Invalid tick interval: {ms}ms (must be <= {max}ms)")]
    InvalidTickInterval { ms: u64, max: u64 },

    #[error("Invalid commentary limit: {0} (must be at least 1)")]
    InvalidHistoryLimit(usize),

    #[error("Invalid score: {wickets} wickets (must be <= 10)")]
    InvalidScore { wickets: u8 },

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("A team cannot play itself: {0}")]
    SameTeam(String),

    #[error("Scripted source needs at least one value")]
    EmptyScript,

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// Errors caused by caller-supplied configuration rather than the environment.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidOvers { .. }
                | MatchError::InvalidOutcomeTable(_)
                | MatchError::InvalidTickInterval { .. }
                | MatchError::InvalidHistoryLimit(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

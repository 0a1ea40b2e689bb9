use thiserror::Error;
use toolscout_protocol::ErrorEnvelope;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("empty query")]
    EmptyQuery,

    #[error("limit must be positive (got {0})")]
    InvalidLimit(usize),

    #[error("strategy weights must sum to 1.0 (got {sum:.4})")]
    InvalidWeights { sum: f32 },

    #[error("strategy weight '{0}' is negative")]
    NegativeWeight(&'static str),

    #[error("invalid search config: {0}")]
    Config(#[from] toml::de::Error),
}

impl SearchError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "empty_query",
            SearchError::InvalidLimit(_) => "invalid_limit",
            SearchError::InvalidWeights { .. } | SearchError::NegativeWeight(_) => {
                "invalid_weights"
            }
            SearchError::Config(_) => "invalid_config",
        }
    }

    /// Structured form for the calling agent. A validation failure must stay
    /// distinguishable from a zero-match success.
    #[must_use]
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let hint = match self {
            SearchError::EmptyQuery => {
                Some("Describe the capability you need, e.g. 'log time on a task'.".to_string())
            }
            SearchError::InvalidLimit(_) => Some("Use a limit of 1 or more.".to_string()),
            _ => None,
        };
        ErrorEnvelope {
            code: self.code().to_string(),
            message: self.to_string(),
            hint,
        }
    }
}

/// Engine-level errors
///
/// Soft validation issues (a missing preference field) never surface here:
/// they are absorbed locally with a substituted default. Only structural
/// configuration bugs and upstream data failures are propagated.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// A deployment/configuration bug, not user input: the weight table and
    /// the feature vector disagree, or a scoring constant is degenerate.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An upstream snapshot fetch failed. The request fails whole; the
    /// engine never substitutes an empty or partial recommendation list.
    #[error("Data unavailable during {stage}: {message}")]
    DataUnavailable { stage: String, message: String },
}

impl EngineError {
    /// Provider fetch failure with the failing stage named
    pub fn data_unavailable(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("unknown zoom level tag: {0:?}")]
    UnknownZoomLevel(String),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("layout serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

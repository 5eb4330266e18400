use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid container width: {width}")]
    InvalidContainerWidth { width: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown node id `{id}`")]
    UnknownNode { id: String },

    #[error("node source failed: {0}")]
    Source(String),
}

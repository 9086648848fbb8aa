use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("mood level {0} is outside range [1, 10]")]
    InvalidMoodLevel(i64),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("date arithmetic error: {0}")]
    Date(#[from] jiff::Error),
}

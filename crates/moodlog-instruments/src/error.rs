use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("answer set is incomplete; missing: {}", .missing.join(", "))]
    IncompleteAnswerSet { missing: Vec<String> },

    #[error("answer value {value} is outside range [0, 4]")]
    InvalidAnswerValue { value: i64 },

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("question '{question_id}' has not been answered")]
    Unanswered { question_id: String },

    #[error("check-in is not complete")]
    NotComplete,

    #[error("no current question; the check-in is already past the last item")]
    NoCurrentQuestion,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! moodlog-instruments
//!
//! Check-in questionnaire definitions and the scoring engine. Pure data and
//! arithmetic — no I/O. Defines the fixed question items, the scales they
//! load onto, and the severity bands for each scale.

pub mod bands;
pub mod collector;
pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{AnswerSet, QuestionItem, Scale};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "wellness_checkin").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The fixed, ordered list of items presented to the user.
    fn items(&self) -> &[QuestionItem];

    /// The scales this instrument scores. Scales may share items.
    fn scales(&self) -> &[Scale];

    /// Item ids with no answer in `answers`, in presentation order.
    fn missing_items(&self, answers: &AnswerSet) -> Vec<String> {
        self.items()
            .iter()
            .filter(|item| answers.get(&item.id).is_none())
            .map(|item| item.id.clone())
            .collect()
    }

    /// Answered ids that do not belong to this instrument.
    fn unknown_items(&self, answers: &AnswerSet) -> Vec<String> {
        answers
            .iter()
            .filter(|answer| !self.items().iter().any(|item| item.id == answer.question_id))
            .map(|answer| answer.question_id.clone())
            .collect()
    }

    /// Check that `answers` covers exactly this instrument's items.
    fn validate(&self, answers: &AnswerSet) -> Result<(), InstrumentError> {
        if let Some(unknown) = self.unknown_items(answers).into_iter().next() {
            return Err(InstrumentError::UnknownQuestion(unknown));
        }
        let missing = self.missing_items(answers);
        if !missing.is_empty() {
            return Err(InstrumentError::IncompleteAnswerSet { missing });
        }
        Ok(())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::wellness_checkin::WellnessCheckin)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

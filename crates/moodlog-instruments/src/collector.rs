//! Positional answer collection for one check-in session.

use crate::Instrument;
use crate::bands::{BandedResult, band};
use crate::error::InstrumentError;
use crate::instruments::wellness_checkin::WellnessCheckin;
use crate::scoring::{AnswerSet, AnswerValue, QuestionItem, score_with};

/// Where the collector stands after a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Now showing the item at this index.
    Question(usize),
    /// Every item has been answered and passed.
    Complete,
}

/// Walks the user through an instrument's items, one position at a time.
///
/// Answers survive backward navigation: stepping back and then forward again
/// shows the previously chosen value.
pub struct Collector {
    instrument: Box<dyn Instrument>,
    position: usize,
    answers: AnswerSet,
}

impl Collector {
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        Self {
            instrument,
            position: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn wellness_checkin() -> Self {
        Self::new(Box::new(WellnessCheckin))
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    /// Record or overwrite the answer for `question_id`.
    pub fn submit(&mut self, question_id: &str, value: i64) -> Result<(), InstrumentError> {
        let value = AnswerValue::try_from(value)?;
        if !self.instrument.items().iter().any(|item| item.id == question_id) {
            return Err(InstrumentError::UnknownQuestion(question_id.to_string()));
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Answer the item at the current position.
    pub fn answer_current(&mut self, value: i64) -> Result<(), InstrumentError> {
        let question_id = self
            .current()
            .map(|item| item.id.clone())
            .ok_or(InstrumentError::NoCurrentQuestion)?;
        self.submit(&question_id, value)
    }

    /// Move to the next item. Refused while the current item is unanswered.
    pub fn advance(&mut self) -> Result<Progress, InstrumentError> {
        let total = self.instrument.items().len();
        let Some(item) = self.current() else {
            return Ok(Progress::Complete);
        };
        if self.answers.get(&item.id).is_none() {
            return Err(InstrumentError::Unanswered {
                question_id: item.id.clone(),
            });
        }

        self.position += 1;
        if self.position >= total {
            Ok(Progress::Complete)
        } else {
            Ok(Progress::Question(self.position))
        }
    }

    /// Move to the previous item, keeping its recorded answer. Stays put on
    /// the first item.
    pub fn retreat(&mut self) -> usize {
        self.position = self.position.saturating_sub(1);
        self.position
    }

    pub fn current(&self) -> Option<&QuestionItem> {
        self.instrument.items().get(self.position)
    }

    /// The value previously recorded for the current item, if any.
    pub fn current_answer(&self) -> Option<AnswerValue> {
        self.current().and_then(|item| self.answers.get(&item.id))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.instrument.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrument.items().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.instrument.items().len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Hand the completed answers to the scorer and band the result.
    pub fn finish(self) -> Result<BandedResult, InstrumentError> {
        if !self.is_complete() {
            return Err(InstrumentError::NotComplete);
        }
        let scores = score_with(self.instrument.as_ref(), &self.answers)?;
        Ok(band(&scores))
    }
}

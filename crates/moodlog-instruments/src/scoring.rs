use moodlog_core::models::checkin::CheckinScores;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::error::InstrumentError;
use crate::instruments::wellness_checkin::WellnessCheckin;

/// Labels for the shared 0–4 response scale, indexed by value.
pub const RESPONSE_LABELS: [&str; 5] = ["None", "Rarely", "Sometimes", "Often", "Everyday"];

/// A single response on the 0–4 frequency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        RESPONSE_LABELS[usize::from(self.0)]
    }

    /// Every valid value, lowest first.
    pub fn all() -> impl Iterator<Item = AnswerValue> {
        (Self::MIN..=Self::MAX).map(AnswerValue)
    }
}

impl TryFrom<i64> for AnswerValue {
    type Error = InstrumentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InstrumentError::InvalidAnswerValue { value })
        }
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub label: String,
    pub value: AnswerValue,
}

/// One questionnaire item. Immutable once defined.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionItem {
    pub id: String,
    pub prompt: String,
    pub options: Vec<ResponseOption>,
}

impl QuestionItem {
    /// Build an item offering the standard five frequency responses.
    pub fn frequency(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options: AnswerValue::all()
                .map(|value| ResponseOption {
                    label: value.label().to_string(),
                    value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Answers collected during one check-in, in the order first given.
///
/// Keyed by question id: a later answer for the same id replaces the earlier
/// one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        let question_id = question_id.into();
        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.answers.push(Answer { question_id, value });
                None
            }
        }
    }

    pub fn get(&self, question_id: &str) -> Option<AnswerValue> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    /// Parse a serialized answer list. Out-of-range values fail the parse
    /// instead of being dropped.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.insert(answer.question_id, answer.value);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleId {
    Depression,
    Anxiety,
    Overall,
}

/// A scale: the sum of a fixed subset of item values.
#[derive(Debug, Clone, Serialize)]
pub struct Scale {
    pub id: ScaleId,
    pub items: &'static [&'static str],
}

impl Scale {
    /// Highest possible sum on this scale.
    pub fn max(&self) -> u32 {
        self.items.len() as u32 * u32::from(AnswerValue::MAX)
    }

    /// Sum of the answers to this scale's items. Ids outside the scale never
    /// contribute.
    pub fn sum(&self, answers: &AnswerSet) -> u32 {
        self.items
            .iter()
            .filter_map(|id| answers.get(id))
            .map(|value| u32::from(value.get()))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub depression: u32,
    pub anxiety: u32,
    pub overall: u32,
}

impl From<ScoreResult> for CheckinScores {
    fn from(result: ScoreResult) -> Self {
        CheckinScores {
            depression: result.depression,
            anxiety: result.anxiety,
            overall: result.overall,
        }
    }
}

/// Score a completed answer set against the wellness check-in.
pub fn score(answers: &AnswerSet) -> Result<ScoreResult, InstrumentError> {
    score_with(&WellnessCheckin, answers)
}

/// Score `answers` against `instrument`'s scales.
///
/// Completeness is checked before anything is summed, so a partial set never
/// yields a partial score.
pub fn score_with(instrument: &dyn Instrument, answers: &AnswerSet) -> Result<ScoreResult, InstrumentError> {
    instrument.validate(answers)?;

    let mut result = ScoreResult::default();
    for scale in instrument.scales() {
        let sum = scale.sum(answers);
        match scale.id {
            ScaleId::Depression => result.depression = sum,
            ScaleId::Anxiety => result.anxiety = sum,
            ScaleId::Overall => result.overall = sum,
        }
    }
    Ok(result)
}

//! The per-session answer mapping.

use serde::Serialize;

use super::QuizError;
use super::questions::{Concern, Position, QuestionId, Temperature};

/// One optional slot per question. Starts empty, filled one answer at a
/// time, cleared on reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuizAnswers {
    pub position: Option<Position>,
    pub temperature: Option<Temperature>,
    pub concerns: Option<Concern>,
}

impl QuizAnswers {
    /// Store `value` under `question`, overwriting any earlier answer.
    pub fn set(&mut self, question: QuestionId, value: &str) -> Result<(), QuizError> {
        let invalid = || QuizError::InvalidOption {
            question,
            value: value.to_string(),
        };
        match question {
            QuestionId::Position => self.position = Some(value.parse().map_err(|_| invalid())?),
            QuestionId::Temperature => {
                self.temperature = Some(value.parse().map_err(|_| invalid())?)
            }
            QuestionId::Concerns => self.concerns = Some(value.parse().map_err(|_| invalid())?),
        }
        Ok(())
    }

    /// Wire value stored for `question`, if answered.
    pub fn get(&self, question: QuestionId) -> Option<&'static str> {
        match question {
            QuestionId::Position => self.position.map(Position::as_str),
            QuestionId::Temperature => self.temperature.map(Temperature::as_str),
            QuestionId::Concerns => self.concerns.map(Concern::as_str),
        }
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        usize::from(self.position.is_some())
            + usize::from(self.temperature.is_some())
            + usize::from(self.concerns.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All three answers, once every question has one.
    pub fn complete(&self) -> Option<CompleteAnswers> {
        Some(CompleteAnswers {
            position: self.position?,
            temperature: self.temperature?,
            concerns: self.concerns?,
        })
    }
}

/// A fully answered quiz, the input of the recommendation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CompleteAnswers {
    pub position: Position,
    pub temperature: Temperature,
    pub concerns: Concern,
}

impl CompleteAnswers {
    /// Option values joined in question order, e.g. `side-hot-pain`.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.position.as_str(),
            self.temperature.as_str(),
            self.concerns.as_str()
        )
    }

    /// Every combination over the full option sets, in question order.
    pub fn all() -> impl Iterator<Item = CompleteAnswers> {
        Position::ALL.iter().flat_map(|&position| {
            Temperature::ALL.iter().flat_map(move |&temperature| {
                Concern::ALL.iter().map(move |&concerns| CompleteAnswers {
                    position,
                    temperature,
                    concerns,
                })
            })
        })
    }
}

impl From<CompleteAnswers> for QuizAnswers {
    fn from(answers: CompleteAnswers) -> Self {
        QuizAnswers {
            position: Some(answers.position),
            temperature: Some(answers.temperature),
            concerns: Some(answers.concerns),
        }
    }
}

//! Quiz flow controller.
//!
//! State transitions are a pure function of explicit events. Answering a
//! question records the value and schedules an advance after a short
//! cosmetic delay; the driver (the page script, or [`QuizController::submit`]
//! here) waits out the delay and then dispatches [`QuizEvent::Advance`].

use std::time::Duration;

use tracing::debug;

use super::QuizError;
use super::answers::QuizAnswers;
use super::questions::{QUESTIONS, Question};
use super::rules::{Recommendation, recommend};

/// Delay between answering and showing the next step.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Input to [`QuizController::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    /// An option was chosen for the current question
    Answer(String),
    /// The transition delay elapsed
    Advance,
    /// Start over
    Reset,
}

/// What a dispatched event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Answer stored; dispatch `Advance` after the delay
    Scheduled(Duration),
    /// Answer overwritten while an advance was already pending
    Overwritten,
    /// Moved on to the question at this index
    Advanced(usize),
    /// Last question answered; a recommendation is available
    Completed,
    /// Nothing was pending
    Idle,
    /// Back to the first question with no answers
    Reset,
}

/// Current question index, collected answers and completion flag.
#[derive(Clone, Debug)]
pub struct QuizController {
    index: usize,
    answers: QuizAnswers,
    completed: bool,
    pending: bool,
    delay: Duration,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizController {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_TRANSITION)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            index: 0,
            answers: QuizAnswers::default(),
            completed: false,
            pending: false,
            delay,
        }
    }

    /// 0-based index of the question being shown.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.index]
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True between an answer and its advance.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// "n of N" label for the current step.
    pub fn step_label(&self) -> String {
        format!("{} of {}", self.index + 1, QUESTIONS.len())
    }

    /// Progress bar fill for the current step, 0-100.
    pub fn progress_percent(&self) -> u8 {
        ((self.index + 1) * 100 / QUESTIONS.len()) as u8
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Transition, QuizError> {
        match event {
            QuizEvent::Answer(value) => self.answer(&value),
            QuizEvent::Advance => Ok(self.advance()),
            QuizEvent::Reset => {
                self.reset();
                Ok(Transition::Reset)
            }
        }
    }

    /// Record `value` for the current question.
    pub fn answer(&mut self, value: &str) -> Result<Transition, QuizError> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        let question = self.current_question().id;
        self.answers.set(question, value)?;
        debug!(question = %question, value, "quiz answer recorded");

        if self.pending {
            return Ok(Transition::Overwritten);
        }
        self.pending = true;
        Ok(Transition::Scheduled(self.delay))
    }

    /// Complete a scheduled transition.
    pub fn advance(&mut self) -> Transition {
        if !self.pending {
            return Transition::Idle;
        }
        self.pending = false;
        if self.index + 1 < QUESTIONS.len() {
            self.index += 1;
            Transition::Advanced(self.index)
        } else {
            self.completed = true;
            Transition::Completed
        }
    }

    /// Clear answers, go back to the first question, drop any pending advance.
    pub fn reset(&mut self) {
        self.index = 0;
        self.answers = QuizAnswers::default();
        self.completed = false;
        self.pending = false;
    }

    /// The recommendation, once the quiz is complete.
    pub fn recommendation(&self) -> Option<Recommendation> {
        if !self.completed {
            return None;
        }
        self.answers.complete().map(|answers| recommend(&answers))
    }

    /// Answer and wait out the transition delay.
    pub async fn submit(&mut self, value: &str) -> Result<Transition, QuizError> {
        match self.answer(value)? {
            Transition::Scheduled(delay) => {
                tokio::time::sleep(delay).await;
                Ok(self.advance())
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionId;

    fn answer_and_advance(quiz: &mut QuizController, value: &str) -> Transition {
        assert_eq!(quiz.answer(value).unwrap(), Transition::Scheduled(quiz.delay()));
        quiz.advance()
    }

    #[test]
    fn walks_through_all_questions() {
        let mut quiz = QuizController::new();
        assert_eq!(quiz.step_label(), "1 of 3");
        assert_eq!(quiz.progress_percent(), 33);

        assert_eq!(answer_and_advance(&mut quiz, "side"), Transition::Advanced(1));
        assert_eq!(quiz.current_question().id, QuestionId::Temperature);
        assert_eq!(answer_and_advance(&mut quiz, "hot"), Transition::Advanced(2));
        assert!(quiz.recommendation().is_none());
        assert_eq!(answer_and_advance(&mut quiz, "pain"), Transition::Completed);

        assert!(quiz.is_completed());
        assert_eq!(quiz.index(), 2);
        assert_eq!(quiz.progress_percent(), 100);
        let rec = quiz.recommendation().unwrap();
        assert_eq!(rec.title, "Stay Cool All Night");
    }

    #[test]
    fn index_does_not_move_until_advance() {
        let mut quiz = QuizController::new();
        quiz.answer("back").unwrap();
        assert_eq!(quiz.index(), 0);
        assert!(quiz.is_pending());
        assert_eq!(quiz.advance(), Transition::Advanced(1));
        assert_eq!(quiz.advance(), Transition::Idle);
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn second_answer_while_pending_overwrites_without_double_advance() {
        let mut quiz = QuizController::new();
        quiz.answer("back").unwrap();
        assert_eq!(quiz.answer("stomach").unwrap(), Transition::Overwritten);
        assert_eq!(quiz.advance(), Transition::Advanced(1));
        assert_eq!(quiz.advance(), Transition::Idle);
        assert_eq!(quiz.answers().get(QuestionId::Position), Some("stomach"));
    }

    #[test]
    fn answering_after_completion_is_an_error() {
        let mut quiz = QuizController::new();
        for value in ["back", "cold", "quality"] {
            answer_and_advance(&mut quiz, value);
        }
        assert_eq!(quiz.answer("side"), Err(QuizError::Completed));
    }

    #[test]
    fn invalid_option_leaves_state_untouched() {
        let mut quiz = QuizController::new();
        let err = quiz.answer("hot").unwrap_err();
        assert!(matches!(err, QuizError::InvalidOption { question: QuestionId::Position, .. }));
        assert!(!quiz.is_pending());
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn reset_behaves_like_a_fresh_session() {
        let mut quiz = QuizController::new();
        answer_and_advance(&mut quiz, "side");
        answer_and_advance(&mut quiz, "hot");
        quiz.answer("pain").unwrap();
        assert_eq!(quiz.dispatch(QuizEvent::Reset).unwrap(), Transition::Reset);

        assert_eq!(quiz.index(), 0);
        assert!(quiz.answers().is_empty());
        assert!(!quiz.is_completed());
        assert!(!quiz.is_pending());
        // the pending advance from before the reset is gone
        assert_eq!(quiz.advance(), Transition::Idle);

        let mut fresh = QuizController::new();
        assert_eq!(quiz.answer("back"), fresh.answer("back"));
        assert_eq!(quiz.advance(), fresh.advance());
        assert_eq!(quiz.answers(), fresh.answers());
    }

    #[test]
    fn dispatch_routes_events() {
        let mut quiz = QuizController::with_delay(Duration::from_millis(5));
        assert_eq!(
            quiz.dispatch(QuizEvent::Answer("combo".into())).unwrap(),
            Transition::Scheduled(Duration::from_millis(5))
        );
        assert_eq!(quiz.dispatch(QuizEvent::Advance).unwrap(), Transition::Advanced(1));
    }

    #[tokio::test]
    async fn submit_waits_and_advances() {
        let mut quiz = QuizController::with_delay(Duration::ZERO);
        assert_eq!(quiz.submit("stomach").await.unwrap(), Transition::Advanced(1));
        assert_eq!(quiz.submit("cold").await.unwrap(), Transition::Advanced(2));
        assert_eq!(quiz.submit("insomnia").await.unwrap(), Transition::Completed);
        assert_eq!(
            quiz.recommendation().unwrap().products,
            vec![
                "Cloud Memory Foam Pillow",
                "Weighted Therapy Blanket",
                "Melatonin Sleep Aid"
            ]
        );
    }
}

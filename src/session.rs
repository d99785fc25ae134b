//! The quiz session state machine.
//!
//! A [`QuizSession`] owns all mutable quiz state and is driven entirely by
//! explicit calls: `select_option`, `advance`, `tick`, `finish`, `restart`.
//! It never renders anything and never owns a clock; the caller delivers
//! one `tick()` per elapsed second.

use std::fmt;

use crate::models::{Question, QuestionBank};

/// Seconds allowed per question.
pub const QUESTION_TIME_LIMIT: u32 = 30;

const NUM_OPTIONS: usize = 4;

/// Externally observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A question is on screen with the countdown running.
    AwaitingAnswer,
    /// Terminal: all questions resolved or the quiz was force-submitted.
    Completed,
}

/// Error for a transition attempted with invalid input or in a phase that
/// forbids it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Selection index outside `0..=3`.
    SelectionOutOfRange(usize),
    /// `advance` called with no option selected.
    NothingSelected,
    /// A mutating call other than `restart` on a completed session.
    AlreadyCompleted,
    /// `restart` called before the session completed.
    NotCompleted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::SelectionOutOfRange(index) => {
                write!(f, "option index {} out of range (must be 0..=3)", index)
            }
            SessionError::NothingSelected => {
                write!(f, "cannot advance: no option selected")
            }
            SessionError::AlreadyCompleted => write!(f, "session is already completed"),
            SessionError::NotCompleted => write!(f, "session is not completed yet"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Aggregate report retained once a session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total_questions: usize,
    pub questions_attempted: usize,
}

impl Summary {
    /// Raw correct-count percentage. The bank is non-empty, so the zero
    /// branch only guards against a hand-built summary.
    pub fn percentage(&self) -> f64 {
        if self.total_questions > 0 {
            self.score as f64 / self.total_questions as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// One traversal of a question bank: sequencing, countdown, scoring.
#[derive(Debug)]
pub struct QuizSession {
    bank: QuestionBank,
    phase: SessionPhase,
    current_index: usize,
    score: usize,
    questions_attempted: usize,
    time_left: u32,
    selected_option: Option<usize>,
    summary: Option<Summary>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            phase: SessionPhase::AwaitingAnswer,
            current_index: 0,
            score: 0,
            questions_attempted: 0,
            time_left: QUESTION_TIME_LIMIT,
            selected_option: None,
            summary: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Number of questions fully resolved so far.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn questions_attempted(&self) -> usize {
        self.questions_attempted
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The question currently awaiting an answer, `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::AwaitingAnswer => self.bank.get(self.current_index).ok(),
            SessionPhase::Completed => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.bank.len()
    }

    /// Whether a user-initiated advance is currently permitted. Mirrors the
    /// "Next disabled until an option is chosen" rule.
    pub fn can_advance(&self) -> bool {
        self.phase == SessionPhase::AwaitingAnswer && self.selected_option.is_some()
    }

    /// The summary retained at completion, `None` while in progress.
    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    /// Record the user's current choice. May be called repeatedly while the
    /// question is open; the last selection wins.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_awaiting()?;
        if index >= NUM_OPTIONS {
            return Err(SessionError::SelectionOutOfRange(index));
        }
        self.selected_option = Some(index);
        Ok(())
    }

    /// Deliver one elapsed second. When the countdown hits zero, the same
    /// call resolves the question (unanswered unless a correct selection
    /// was made) and moves on, bypassing the selection guard.
    pub fn tick(&mut self) -> Result<(), SessionError> {
        self.ensure_awaiting()?;
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.resolve_current();
        }
        Ok(())
    }

    /// User-initiated "Next": requires a selection.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.ensure_awaiting()?;
        if self.selected_option.is_none() {
            return Err(SessionError::NothingSelected);
        }
        self.resolve_current();
        Ok(())
    }

    /// Hint for the question currently on screen.
    pub fn hint(&self) -> Result<&str, SessionError> {
        match self.current_question() {
            Some(question) => Ok(&question.hint),
            None => Err(SessionError::AlreadyCompleted),
        }
    }

    /// Explicit "Submit Quiz": resolves the pending question (if any was
    /// not resolved yet), then completes even if questions remain.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        self.ensure_awaiting()?;
        self.resolve_current();
        if self.phase != SessionPhase::Completed {
            self.complete();
        }
        Ok(())
    }

    /// Return a completed session to its initial state.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Completed {
            return Err(SessionError::NotCompleted);
        }
        self.phase = SessionPhase::AwaitingAnswer;
        self.current_index = 0;
        self.score = 0;
        self.questions_attempted = 0;
        self.time_left = QUESTION_TIME_LIMIT;
        self.selected_option = None;
        self.summary = None;
        Ok(())
    }

    fn ensure_awaiting(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::AwaitingAnswer => Ok(()),
            SessionPhase::Completed => Err(SessionError::AlreadyCompleted),
        }
    }

    /// Lock in the current question exactly once, then either enter the
    /// next question or complete. Shared by `advance`, the timeout path of
    /// `tick`, and `finish`.
    fn resolve_current(&mut self) {
        let correct = self
            .bank
            .get(self.current_index)
            .map(|question| question.correct_answer)
            .ok();
        if self.selected_option.is_some() && self.selected_option == correct {
            self.score += 1;
        }

        self.questions_attempted += 1;
        self.current_index += 1;
        self.selected_option = None;
        self.time_left = QUESTION_TIME_LIMIT;

        if self.current_index == self.bank.len() {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.phase = SessionPhase::Completed;
        self.summary = Some(Summary {
            score: self.score,
            total_questions: self.bank.len(),
            questions_attempted: self.questions_attempted,
        });
    }
}

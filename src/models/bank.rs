use std::fmt;

use crate::models::Question;

/// Error constructing or indexing a [`QuestionBank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// The bank was constructed from an empty sequence.
    Empty,
    /// A question's correct-answer index does not point at an option.
    InvalidCorrectAnswer { question: usize, correct_answer: usize },
    /// `get` was called with an index outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Empty => write!(f, "question bank must contain at least one question"),
            BankError::InvalidCorrectAnswer {
                question,
                correct_answer,
            } => write!(
                f,
                "question {} has correct answer index {} (must be 0..=3)",
                question, correct_answer
            ),
            BankError::IndexOutOfRange { index, len } => {
                write!(f, "question index {} out of range (bank has {})", index, len)
            }
        }
    }
}

impl std::error::Error for BankError {}

/// An ordered, immutable sequence of questions.
///
/// Validated once at construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty input and malformed questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if !question.is_valid() {
                return Err(BankError::InvalidCorrectAnswer {
                    question: index,
                    correct_answer: question.correct_answer,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

use serde::Deserialize;

/// A single multiple-choice question.
///
/// The option count is fixed at four by the type; `correct_answer` is an
/// index into `options` and is validated by [`QuestionBank`] on
/// construction and by the JSON loader on deserialization.
///
/// [`QuestionBank`]: crate::QuestionBank
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: usize,
    pub hint: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: [&str; 4],
        correct_answer: usize,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.map(String::from),
            correct_answer,
            hint: hint.into(),
        }
    }

    /// Whether `correct_answer` indexes a valid option.
    pub fn is_valid(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}

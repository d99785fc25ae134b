use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Question;

/// Error loading a question file.
#[derive(Debug)]
pub enum LoadError {
    /// Could not read the file.
    Io(io::Error),
    /// The file is not valid question JSON (including wrong option arity).
    Parse(serde_json::Error),
    /// The file parsed but contains no questions.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question file: {}", e),
            LoadError::Empty => write!(f, "question file contains no questions"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load questions from a JSON array of question objects.
///
/// Bank-level validation (non-empty, correct index in range) happens when
/// the caller constructs a [`QuestionBank`], except the empty case which is
/// reported here with the file context.
///
/// [`QuestionBank`]: crate::QuestionBank
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let content = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&content)?;

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(questions)
}

/// The builtin general-knowledge set used when no question file is given.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            ["London", "Paris", "Berlin", "Madrid"],
            1,
            "It's known as the 'City of Light'",
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
            "It's named after the Roman god of war",
        ),
        Question::new(
            "What is the largest mammal?",
            ["Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
            1,
            "It lives in the ocean",
        ),
        Question::new(
            "In which year did World War II end?",
            ["1943", "1945", "1947", "1950"],
            1,
            "It ended after the atomic bombs were dropped",
        ),
        Question::new(
            "Who painted the Mona Lisa?",
            ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"],
            2,
            "He was an Italian polymath",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionBank;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_temp(
            r#"[{
                "text": "2 + 2?",
                "options": ["3", "4", "5", "6"],
                "correct_answer": 1,
                "hint": "even"
            }]"#,
        );

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[1], "4");
        assert_eq!(questions[0].hint, "even");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_questions_from_json("no_such_file.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_wrong_option_count_is_parse_error() {
        let file = write_temp(
            r#"[{
                "text": "q",
                "options": ["a", "b", "c"],
                "correct_answer": 0,
                "hint": "h"
            }]"#,
        );
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_empty_array_rejected() {
        let file = write_temp("[]");
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_builtin_set_forms_a_valid_bank() {
        let bank = QuestionBank::new(builtin_questions()).unwrap();
        assert_eq!(bank.len(), 5);
    }
}

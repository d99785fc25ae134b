//! # timed-quiz
//!
//! A terminal quiz with a per-question countdown, hints, and a plain-text
//! history log.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Builtin question set, or load your own from JSON
//!     let quiz = Quiz::builtin()?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod history;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use data::{builtin_questions, load_questions_from_json, LoadError};
pub use history::DEFAULT_HISTORY_FILE;
pub use models::{BankError, Question, QuestionBank};
pub use session::{QuizSession, SessionError, SessionPhase, Summary, QUESTION_TIME_LIMIT};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// Malformed question bank.
    Bank(BankError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Bank(e) => write!(f, "Invalid question bank: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Bank(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<BankError> for QuizError {
    fn from(err: BankError) -> Self {
        QuizError::Bank(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
#[derive(Debug)]
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz from an already validated question bank. History is
    /// appended to [`DEFAULT_HISTORY_FILE`] unless overridden.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            app: App::new(bank, PathBuf::from(DEFAULT_HISTORY_FILE)),
        }
    }

    /// Create a quiz from the builtin general-knowledge question set.
    pub fn builtin() -> Result<Self, QuizError> {
        let bank = QuestionBank::new(builtin_questions())?;
        Ok(Self::new(bank))
    }

    /// Load a quiz from a JSON question file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        let bank = QuestionBank::new(questions)?;
        Ok(Self::new(bank))
    }

    /// Change where the completed-session history line is written.
    pub fn with_history_path(mut self, path: PathBuf) -> Self {
        self.app.set_history_path(path);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Drives the app with key events and a once-per-second tick. Input and
/// ticks are serialized on this one loop; no session transition ever runs
/// concurrently with another.
fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(c @ '1'..='4') => {
            app.select_option(c as usize - '1' as usize);
            false
        }
        KeyCode::Enter => {
            // The last question's Enter is "Submit Quiz", not "Next".
            if app.session().is_last_question() {
                app.submit();
            } else {
                app.advance();
            }
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.toggle_hint();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_app(dir: &tempfile::TempDir) -> App {
        let bank = QuestionBank::new(builtin_questions()).unwrap();
        let mut app = App::new(bank, dir.path().join("history.txt"));
        app.start_quiz();
        app
    }

    #[test]
    fn test_s_key_submits_early_on_last_question() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = quiz_app(&dir);
        for _ in 0..4 {
            app.select_option(1);
            app.advance();
        }
        app.select_option(1);

        let should_exit = handle_input(&mut app, KeyCode::Char('s'));

        assert!(!should_exit);
        assert_eq!(app.screen, Screen::Result);
        assert_eq!(app.session().summary().unwrap().questions_attempted, 5);
    }

    #[test]
    fn test_s_key_is_noop_before_last_question() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = quiz_app(&dir);
        app.select_option(1);

        handle_input(&mut app, KeyCode::Char('s'));

        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.session().current_index(), 0);
    }

    #[test]
    fn test_quiz_handle_is_debug_printable() {
        let quiz = Quiz::builtin().unwrap();
        let rendered = format!("{:?}", quiz);
        assert!(rendered.contains("Quiz"));
    }
}

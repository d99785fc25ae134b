use std::path::PathBuf;

use crate::history;
use crate::models::QuestionBank;
use crate::session::QuizSession;

const NUM_OPTIONS: usize = 4;

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Result,
}

/// Presentation-side state: screen switching, the hint popup, and the
/// once-per-completion history side effect. All quiz semantics live in
/// [`QuizSession`]; `App` only feeds it events and reads it back.
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    session: QuizSession,
    hint_visible: bool,
    history_path: PathBuf,
}

impl App {
    pub fn new(bank: QuestionBank, history_path: PathBuf) -> Self {
        Self {
            screen: Screen::Welcome,
            session: QuizSession::new(bank),
            hint_visible: false,
            history_path,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn set_history_path(&mut self, path: PathBuf) {
        self.history_path = path;
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn start_quiz(&mut self) {
        self.screen = Screen::Quiz;
    }

    /// Select the option after the current one, or the first if nothing is
    /// selected yet.
    pub fn select_next_option(&mut self) {
        let next = match self.session.selected_option() {
            Some(index) => (index + 1) % NUM_OPTIONS,
            None => 0,
        };
        self.select_option(next);
    }

    /// Select the option before the current one, or the last if nothing is
    /// selected yet.
    pub fn select_previous_option(&mut self) {
        let previous = match self.session.selected_option() {
            Some(index) => (index + NUM_OPTIONS - 1) % NUM_OPTIONS,
            None => NUM_OPTIONS - 1,
        };
        self.select_option(previous);
    }

    pub fn select_option(&mut self, index: usize) {
        if let Err(err) = self.session.select_option(index) {
            log::debug!("selection ignored: {}", err);
        }
    }

    /// User pressed "Next". No-op until an option is selected, mirroring a
    /// disabled button.
    pub fn advance(&mut self) {
        if !self.session.can_advance() {
            return;
        }
        if let Err(err) = self.session.advance() {
            log::debug!("advance ignored: {}", err);
        }
        self.after_transition();
    }

    /// User pressed "Submit Quiz". Only offered on the last question once
    /// an option is selected.
    pub fn submit(&mut self) {
        if !(self.session.is_last_question() && self.session.can_advance()) {
            return;
        }
        if let Err(err) = self.session.finish() {
            log::debug!("submit ignored: {}", err);
        }
        self.after_transition();
    }

    /// One second elapsed. Only meaningful while the quiz screen is up.
    pub fn tick(&mut self) {
        if self.screen != Screen::Quiz || self.session.is_completed() {
            return;
        }
        if let Err(err) = self.session.tick() {
            log::debug!("tick ignored: {}", err);
        }
        self.after_transition();
    }

    pub fn toggle_hint(&mut self) {
        if self.session.hint().is_ok() {
            self.hint_visible = !self.hint_visible;
        }
    }

    pub fn restart(&mut self) {
        if let Err(err) = self.session.restart() {
            log::debug!("restart ignored: {}", err);
            return;
        }
        self.hint_visible = false;
        self.screen = Screen::Quiz;
    }

    /// Persist the history line and switch screens when the session has
    /// just completed. A write failure is logged and otherwise ignored; it
    /// must never block the result screen or a restart.
    fn after_transition(&mut self) {
        if !self.session.is_completed() || self.screen == Screen::Result {
            return;
        }
        if let Some(summary) = self.session.summary() {
            if let Err(err) = history::append(&self.history_path, &summary) {
                log::error!("failed to save quiz history: {}", err);
            }
        }
        self.hint_visible = false;
        self.screen = Screen::Result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_questions;
    use crate::session::QUESTION_TIME_LIMIT;

    fn app_with_history(dir: &tempfile::TempDir) -> App {
        let bank = QuestionBank::new(builtin_questions()).unwrap();
        App::new(bank, dir.path().join("history.txt"))
    }

    #[test]
    fn test_screen_flow_through_completion() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_history(&dir);
        assert_eq!(app.screen, Screen::Welcome);

        app.start_quiz();
        assert_eq!(app.screen, Screen::Quiz);

        for _ in 0..5 {
            app.select_option(1);
            app.advance();
        }
        assert_eq!(app.screen, Screen::Result);
    }

    #[test]
    fn test_advance_is_noop_without_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_history(&dir);
        app.start_quiz();
        app.advance();
        assert_eq!(app.session().current_index(), 0);
    }

    #[test]
    fn test_completion_writes_one_history_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_history(&dir);
        app.start_quiz();
        for _ in 0..5 {
            app.select_option(1);
            app.advance();
        }
        // Extra ticks after completion must not append more lines.
        app.tick();
        app.tick();

        let content = std::fs::read_to_string(dir.path().join("history.txt")).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("| Score: 4/5 (80.0%) | Attempted: 5/5"));
    }

    #[test]
    fn test_history_failure_does_not_block_restart() {
        let dir = tempfile::tempdir().unwrap();
        let bank = QuestionBank::new(builtin_questions()).unwrap();
        // A directory component that does not exist makes the write fail.
        let mut app = App::new(bank, dir.path().join("missing").join("history.txt"));

        app.start_quiz();
        for _ in 0..5 {
            app.select_option(0);
            app.advance();
        }
        assert_eq!(app.screen, Screen::Result);

        app.restart();
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.session().current_index(), 0);
        assert_eq!(app.session().time_left(), QUESTION_TIME_LIMIT);
    }

    #[test]
    fn test_navigation_commits_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_history(&dir);
        app.start_quiz();

        assert_eq!(app.session().selected_option(), None);
        app.select_next_option();
        assert_eq!(app.session().selected_option(), Some(0));
        app.select_next_option();
        assert_eq!(app.session().selected_option(), Some(1));
        app.select_previous_option();
        assert_eq!(app.session().selected_option(), Some(0));
        app.select_previous_option();
        assert_eq!(app.session().selected_option(), Some(3));
    }

    #[test]
    fn test_timeout_path_completes_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_history(&dir);
        app.start_quiz();

        for _ in 0..5 * QUESTION_TIME_LIMIT {
            app.tick();
        }

        assert_eq!(app.screen, Screen::Result);
        let content = std::fs::read_to_string(dir.path().join("history.txt")).unwrap();
        assert!(content.contains("| Score: 0/5 (0.0%) | Attempted: 5/5"));
    }
}

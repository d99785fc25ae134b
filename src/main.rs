use std::path::PathBuf;

use clap::Parser;
use timed_quiz::{Quiz, QuizError, DEFAULT_HISTORY_FILE};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (builtin set if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// File the session history is appended to
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    history: PathBuf,
}

fn build_quiz(args: &Args) -> Result<Quiz, QuizError> {
    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::builtin()?,
    };
    Ok(quiz.with_history_path(args.history.clone()))
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = match build_quiz(&args) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

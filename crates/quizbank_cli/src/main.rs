//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive `quizbank_core` the way a presentation layer would: validate,
//!   create, re-read derived views on every store notification.
//! - Keep output deterministic apart from generated ids.
//!
//! Usage: `quizbank_cli [candidates.json]`. Without a path a built-in demo
//! set is loaded. `QUIZBANK_LOG_DIR` (absolute) enables file logging at
//! `QUIZBANK_LOG_LEVEL` or the build-mode default.

use log::info;
use quizbank_core::{
    core_version, default_log_level, init_logging, CandidateInput, QuestionStore,
};
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

const DEMO_CANDIDATES_JSON: &str = r#"[
  {"kind": "multiple-choice", "prompt": "2+2?", "options": ["3", "4", "5"],
   "correctAnswer": "4", "difficulty": "easy", "category": "Math"},
  {"kind": "true-false", "prompt": "The Nile flows into the Mediterranean.",
   "correctAnswer": "True", "difficulty": "medium", "category": "Geography"},
  {"kind": "short-answer", "prompt": "Capital of Australia?",
   "correctAnswer": "Canberra", "difficulty": "hard", "category": "Geography"},
  {"kind": "multiple-choice", "prompt": "  ", "options": ["only one"],
   "correctAnswer": "two", "difficulty": "extreme", "category": "Math"}
]"#;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("quizbank: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Ok(log_dir) = std::env::var("QUIZBANK_LOG_DIR") {
        let level = std::env::var("QUIZBANK_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        init_logging(&level, &log_dir).map_err(|err| err.to_string())?;
    }

    println!("quizbank_core version={}", core_version());
    let candidates = load_candidates(std::env::args().nth(1))?;

    let mut store = QuestionStore::in_memory();
    let renders = Rc::new(Cell::new(0_usize));
    let render_count = Rc::clone(&renders);
    let _render = store.subscribe(move |event, questions| {
        render_count.set(render_count.get() + 1);
        println!(
            "render event={:?} id={} total={}",
            event,
            event.question_id(),
            questions.len()
        );
    });

    for (index, candidate) in candidates.iter().enumerate() {
        match store.submit(candidate) {
            Ok(question) => println!(
                "created #{index} id={} kind={} category={}",
                question.id,
                question.kind.name(),
                question.category
            ),
            Err(errors) => {
                for violation in errors.iter() {
                    println!(
                        "rejected #{index} field={} message={}",
                        violation.field, violation.message
                    );
                }
            }
        }
    }

    for category in store.distinct_categories() {
        let questions = store.list_by_category(&category);
        println!("category={category} count={}", questions.len());
        for question in questions {
            println!(
                "  [{}] {} -> {}",
                question.difficulty.as_str(),
                question.prompt,
                question.correct_answer
            );
        }
    }

    info!(
        "event=cli_done module=cli status=ok questions={} renders={}",
        store.len(),
        renders.get()
    );
    println!("total={} renders={}", store.len(), renders.get());
    Ok(())
}

fn load_candidates(path: Option<String>) -> Result<Vec<CandidateInput>, String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read `{path}`: {err}"))?,
        None => DEMO_CANDIDATES_JSON.to_string(),
    };
    serde_json::from_str(&raw).map_err(|err| format!("invalid candidate json: {err}"))
}

#[cfg(test)]
mod tests {
    use super::load_candidates;

    #[test]
    fn demo_candidates_parse() {
        let candidates = load_candidates(None).unwrap();
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].kind.as_deref(), Some("multiple-choice"));
    }
}

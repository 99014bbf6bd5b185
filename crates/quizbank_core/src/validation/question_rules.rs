//! Field rules for question candidates.
//!
//! Normalization policy:
//! - string fields are trimmed before any check;
//! - empty `options` entries are dropped before the minimum-count check;
//! - true/false answers are matched case-insensitively and stored lowercase;
//! - `options` on non multiple-choice candidates are ignored.

use crate::model::candidate::CandidateInput;
use crate::model::question::{
    Difficulty, NewQuestion, QuestionKind, KIND_MULTIPLE_CHOICE, KIND_SHORT_ANSWER,
    KIND_TRUE_FALSE,
};
use crate::validation::violations::{QuestionField, ValidationErrors};
use std::collections::HashSet;

/// Minimum number of non-empty options on a multiple-choice question.
pub const MIN_CHOICE_OPTIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindName {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

/// Validates one candidate and returns its normalized form.
///
/// All violations are accumulated; the result is `Ok` only when none remain.
///
/// # Errors
/// - Returns `ValidationErrors` with one entry per violated rule.
pub fn validate_candidate(candidate: &CandidateInput) -> Result<NewQuestion, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let kind_name = check_kind(candidate.kind.as_deref(), &mut errors);
    let prompt = required_text(candidate.prompt.as_deref(), QuestionField::Prompt, &mut errors);
    let mut correct_answer = required_text(
        candidate.correct_answer.as_deref(),
        QuestionField::CorrectAnswer,
        &mut errors,
    );
    let difficulty = check_difficulty(candidate.difficulty.as_deref(), &mut errors);
    let category = required_text(
        candidate.category.as_deref(),
        QuestionField::Category,
        &mut errors,
    );

    let kind = match kind_name {
        Some(KindName::MultipleChoice) => {
            let options = check_options(candidate.options.as_deref(), &mut errors);
            if let Some(answer) = correct_answer.as_deref() {
                if options.len() >= MIN_CHOICE_OPTIONS && !options.iter().any(|o| o == answer) {
                    errors.push(
                        QuestionField::CorrectAnswer,
                        format!("correct answer `{answer}` must match one of the options"),
                    );
                }
            }
            Some(QuestionKind::MultipleChoice { options })
        }
        Some(KindName::TrueFalse) => {
            if let Some(answer) = correct_answer.as_mut() {
                match answer.to_ascii_lowercase().as_str() {
                    normalized @ ("true" | "false") => *answer = normalized.to_string(),
                    _ => errors.push(
                        QuestionField::CorrectAnswer,
                        format!("correct answer `{answer}` must be `true` or `false`"),
                    ),
                }
            }
            Some(QuestionKind::TrueFalse)
        }
        Some(KindName::ShortAnswer) => Some(QuestionKind::ShortAnswer),
        None => None,
    };

    // Every `None` above pushed a violation, so `Err` is never empty.
    match (kind, prompt, correct_answer, difficulty, category) {
        (Some(kind), Some(prompt), Some(correct_answer), Some(difficulty), Some(category))
            if errors.is_empty() =>
        {
            Ok(NewQuestion {
                kind,
                prompt,
                correct_answer,
                difficulty,
                category,
            })
        }
        _ => Err(errors),
    }
}

fn check_kind(value: Option<&str>, errors: &mut ValidationErrors) -> Option<KindName> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        errors.push(QuestionField::Kind, "kind is required");
        return None;
    };
    match raw {
        KIND_MULTIPLE_CHOICE => Some(KindName::MultipleChoice),
        KIND_TRUE_FALSE => Some(KindName::TrueFalse),
        KIND_SHORT_ANSWER => Some(KindName::ShortAnswer),
        other => {
            errors.push(
                QuestionField::Kind,
                format!(
                    "unsupported kind `{other}`; expected \
                     {KIND_MULTIPLE_CHOICE}|{KIND_TRUE_FALSE}|{KIND_SHORT_ANSWER}"
                ),
            );
            None
        }
    }
}

fn check_difficulty(value: Option<&str>, errors: &mut ValidationErrors) -> Option<Difficulty> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        errors.push(QuestionField::Difficulty, "difficulty is required");
        return None;
    };
    let parsed = Difficulty::parse(raw);
    if parsed.is_none() {
        errors.push(
            QuestionField::Difficulty,
            format!("unsupported difficulty `{raw}`; expected easy|medium|hard"),
        );
    }
    parsed
}

fn required_text(
    value: Option<&str>,
    field: QuestionField,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            errors.push(field, format!("{field} is required"));
            None
        }
    }
}

fn check_options(value: Option<&[String]>, errors: &mut ValidationErrors) -> Vec<String> {
    let options: Vec<String> = value
        .unwrap_or_default()
        .iter()
        .map(|option| option.trim())
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect();

    if options.len() < MIN_CHOICE_OPTIONS {
        errors.push(
            QuestionField::Options,
            format!(
                "multiple-choice needs at least {MIN_CHOICE_OPTIONS} non-empty options, got {}",
                options.len()
            ),
        );
    }

    let mut seen = HashSet::new();
    for option in &options {
        if !seen.insert(option.as_str()) {
            errors.push(
                QuestionField::Options,
                format!("duplicate option `{option}`"),
            );
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::{check_options, required_text, validate_candidate};
    use crate::model::candidate::CandidateInput;
    use crate::validation::violations::{QuestionField, ValidationErrors};

    #[test]
    fn rejected_candidates_always_carry_a_violation() {
        let kinds = [None, Some("essay"), Some("multiple-choice"), Some("true-false")];
        let texts = [None, Some(""), Some("  "), Some("ok")];
        for kind in kinds {
            for text in texts {
                let candidate = CandidateInput {
                    kind: kind.map(str::to_string),
                    prompt: text.map(str::to_string),
                    options: text.map(|value| vec![value.to_string()]),
                    correct_answer: text.map(str::to_string),
                    difficulty: text.map(str::to_string),
                    category: text.map(str::to_string),
                };
                let errors = validate_candidate(&candidate)
                    .expect_err("every combination here breaks at least one rule");
                assert!(!errors.is_empty(), "empty rejection for {candidate:?}");
            }
        }
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        let mut errors = ValidationErrors::default();
        assert_eq!(
            required_text(Some("  Math "), QuestionField::Category, &mut errors).as_deref(),
            Some("Math")
        );
        assert_eq!(
            required_text(Some("   "), QuestionField::Category, &mut errors),
            None
        );
        assert_eq!(errors.messages_for(QuestionField::Category), vec!["category is required"]);
    }

    #[test]
    fn check_options_drops_empty_entries_before_counting() {
        let mut errors = ValidationErrors::default();
        let raw = vec!["  ".to_string(), " a ".to_string(), String::new()];
        let options = check_options(Some(&raw), &mut errors);
        assert_eq!(options, vec!["a".to_string()]);
        assert!(errors.has_field(QuestionField::Options));
    }

    #[test]
    fn check_options_reports_duplicates() {
        let mut errors = ValidationErrors::default();
        let raw = vec!["a".to_string(), "b".to_string(), " a".to_string()];
        check_options(Some(&raw), &mut errors);
        assert_eq!(
            errors.messages_for(QuestionField::Options),
            vec!["duplicate option `a`"]
        );
    }
}

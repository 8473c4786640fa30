//! Ordered question sequences with per-field validation.
//!
//! A question list is a slice of [`Field`] descriptors. [`prompt_sequence`]
//! asks each one in turn, re-asking text fields until their validator
//! accepts the trimmed answer, so callers only ever see valid input.

use indexmap::IndexMap;

use crate::traits::{PromptError, Prompter};

/// Returns `Err(reason)` to make the prompt ask again.
pub type Validator = fn(&str) -> Result<(), &'static str>;

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Free text, trimmed before validation.
    Text { validate: Validator },
    /// Yes/no question; an empty answer takes `default`.
    Confirm { default: bool },
}

/// One question in a sequence.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

/// Answers keyed by field name, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(IndexMap<&'static str, Answer>);

impl Answers {
    pub fn text(&self, name: &str) -> Result<&str, PromptError> {
        match self.0.get(name) {
            Some(Answer::Text(value)) => Ok(value.as_str()),
            _ => Err(PromptError::MissingAnswer(name.to_string())),
        }
    }

    pub fn confirm(&self, name: &str) -> Result<bool, PromptError> {
        match self.0.get(name) {
            Some(Answer::Confirm(value)) => Ok(*value),
            _ => Err(PromptError::MissingAnswer(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ask every field in order and collect the validated answers.
pub fn prompt_sequence<P>(prompter: &mut P, fields: &[Field]) -> Result<Answers, PromptError>
where
    P: Prompter + ?Sized,
{
    let mut answers = Answers::default();

    for field in fields {
        let answer = match field.kind {
            FieldKind::Text { validate } => Answer::Text(ask_text(prompter, field, validate)?),
            FieldKind::Confirm { default } => {
                let hint = if default { "(Y/n)" } else { "(y/N)" };
                let raw = prompter.ask(&format!("{} {}", field.message, hint))?;
                Answer::Confirm(parse_confirm(&raw, default))
            }
        };
        answers.0.insert(field.name, answer);
    }

    Ok(answers)
}

fn ask_text<P>(prompter: &mut P, field: &Field, validate: Validator) -> Result<String, PromptError>
where
    P: Prompter + ?Sized,
{
    loop {
        let raw = prompter.ask(field.message)?;
        let trimmed = raw.trim();
        match validate(trimmed) {
            Ok(()) => return Ok(trimmed.to_string()),
            Err(reason) => {
                tracing::debug!(field = field.name, "Rejected answer {:?}", raw);
                prompter.reject(reason)?;
            }
        }
    }
}

/// `y`/`yes` (any case, any suffix) means yes, empty takes the default,
/// anything else means no.
pub fn parse_confirm(raw: &str, default: bool) -> bool {
    let answer = raw.trim();
    if answer.is_empty() {
        return default;
    }

    let lower = answer.to_ascii_lowercase();
    lower.starts_with('y')
}

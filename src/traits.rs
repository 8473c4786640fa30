//! Abstractions over the program's external collaborators.
//!
//! This module provides traits for:
//! - `Prompter`: Line-oriented interactive input, so the collection loop can
//!   be driven by a script in tests
//! - `ShadeDeriver`: The color math that turns one base color into a scale

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::hex::Rgb;
use crate::shades::ShadeMap;

// ==================== Prompter Trait ====================

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before all questions were answered")]
    InputClosed,
    #[error("no answer recorded for field {0:?}")]
    MissingAnswer(String),
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for abstracting interactive line input.
pub trait Prompter {
    /// Show `message` and return the line the user typed, without the
    /// trailing newline.
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;

    /// Tell the user their last answer was rejected.
    fn reject(&mut self, reason: &str) -> Result<(), PromptError>;
}

/// Prompter reading answers from any buffered reader and echoing
/// questions to any writer.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "? {} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(answer.to_string())
    }

    fn reject(&mut self, reason: &str) -> Result<(), PromptError> {
        writeln!(self.output, ">> {}", reason)?;
        Ok(())
    }
}

/// Mock prompter for testing that replays scripted answers and records
/// every question and rejection.
#[derive(Debug, Clone, Default)]
pub struct MockPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    questions: Arc<Mutex<Vec<String>>>,
    rejections: Arc<Mutex<Vec<String>>>,
}

impl MockPrompter {
    /// Create a mock that answers with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    /// Get all questions that have been asked.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    /// Get all rejection messages that have been shown.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    /// Number of scripted answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Prompter for MockPrompter {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        self.questions.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(PromptError::InputClosed)
    }

    fn reject(&mut self, reason: &str) -> Result<(), PromptError> {
        self.rejections.lock().unwrap().push(reason.to_string());
        Ok(())
    }
}

// ==================== ShadeDeriver Trait ====================

/// Trait for abstracting the color math that derives a shade scale.
///
/// Implementations return labels in the order they should appear in the
/// generated files.
pub trait ShadeDeriver: Send + Sync {
    fn derive(&self, base: Rgb) -> ShadeMap;
}

/// Mock deriver returning the same scale for every color and recording
/// the base colors it was asked about.
#[derive(Debug, Clone, Default)]
pub struct MockShadeDeriver {
    shades: ShadeMap,
    calls: Arc<Mutex<Vec<Rgb>>>,
}

impl MockShadeDeriver {
    /// Create a mock that always returns `shades` (label, hex) in order.
    pub fn new<I, L, H>(shades: I) -> Self
    where
        I: IntoIterator<Item = (L, H)>,
        L: Into<String>,
        H: Into<String>,
    {
        Self {
            shades: shades
                .into_iter()
                .map(|(label, hex)| (label.into(), hex.into()))
                .collect(),
            calls: Arc::default(),
        }
    }

    /// Get every base color passed to `derive`.
    pub fn calls(&self) -> Vec<Rgb> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the count of `derive` calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ShadeDeriver for MockShadeDeriver {
    fn derive(&self, base: Rgb) -> ShadeMap {
        self.calls.lock().unwrap().push(base);
        self.shades.clone()
    }
}

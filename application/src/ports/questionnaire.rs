//! Questionnaire prompt port.
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`QuestionnairePrompt`] - defined here in application layer
//! - **Adapter**: `InteractivePrompt` - implemented in presentation layer
//!
//! Implementations own the yes/no validation loop: `ask_yes_no` must only
//! ever return a validated boolean, re-prompting on malformed input. The
//! retry loop is unbounded by design; the user either supplies a valid
//! answer or interrupts the process.
//!
//! [`ScriptedPrompt`] is a non-interactive implementation that replays a
//! prepared answer sequence, used by use-case tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// Error type for prompt operations.
///
/// These represent failures of the prompting channel itself, not invalid
/// answers; invalid answers are recovered locally by re-prompting.
#[derive(Error, Debug, Clone)]
pub enum PromptError {
    /// Input stream ended (e.g. stdin closed) before a valid answer arrived.
    #[error("Input stream closed")]
    Closed,

    /// Terminal read or write failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for walking the user through the questionnaire.
#[async_trait]
pub trait QuestionnairePrompt: Send + Sync {
    /// Ask a free-text question and return the raw line.
    async fn ask_text(&self, prompt: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question, shown as `[index/total]` within its domain.
    ///
    /// Returns only after a valid answer; malformed input is re-prompted.
    async fn ask_yes_no(&self, question: &str, index: usize, total: usize)
    -> Result<bool, PromptError>;

    /// Announce that a new domain is starting. Display-only; the default
    /// implementation does nothing.
    fn on_domain_start(&self, _domain: &str, _position: usize, _total: usize) {}
}

/// Replays a prepared sequence of answers. For tests and scripted runs.
pub struct ScriptedPrompt {
    text_answers: Mutex<VecDeque<String>>,
    yes_no_answers: Mutex<VecDeque<bool>>,
}

impl ScriptedPrompt {
    pub fn new(
        text_answers: impl IntoIterator<Item = String>,
        yes_no_answers: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            text_answers: Mutex::new(text_answers.into_iter().collect()),
            yes_no_answers: Mutex::new(yes_no_answers.into_iter().collect()),
        }
    }

    /// Script that answers every yes/no question identically.
    pub fn uniform(organisation: &str, answer: bool, count: usize) -> Self {
        Self::new(
            vec![organisation.to_string()],
            std::iter::repeat(answer).take(count).collect::<Vec<_>>(),
        )
    }
}

#[async_trait]
impl QuestionnairePrompt for ScriptedPrompt {
    async fn ask_text(&self, _prompt: &str) -> Result<String, PromptError> {
        self.text_answers
            .lock()
            .expect("prompt script lock")
            .pop_front()
            .ok_or(PromptError::Closed)
    }

    async fn ask_yes_no(
        &self,
        _question: &str,
        _index: usize,
        _total: usize,
    ) -> Result<bool, PromptError> {
        self.yes_no_answers
            .lock()
            .expect("prompt script lock")
            .pop_front()
            .ok_or(PromptError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_prompt_replays_in_order() {
        let prompt = ScriptedPrompt::new(vec!["Acme".to_string()], vec![true, false]);
        assert_eq!(prompt.ask_text("org?").await.unwrap(), "Acme");
        assert!(prompt.ask_yes_no("q1", 1, 2).await.unwrap());
        assert!(!prompt.ask_yes_no("q2", 2, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_scripted_prompt_exhaustion_is_closed() {
        let prompt = ScriptedPrompt::new(vec![], vec![]);
        let err = prompt.ask_yes_no("q", 1, 1).await.unwrap_err();
        assert!(matches!(err, PromptError::Closed));
    }
}

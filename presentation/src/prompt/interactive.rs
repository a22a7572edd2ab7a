//! Interactive stdin prompter.
//!
//! Implements [`QuestionnairePrompt`] over the terminal. Reads happen on a
//! blocking worker via `spawn_blocking` so the entry point's Ctrl-C race
//! can resolve while a prompt is pending.
//!
//! The yes/no loop re-prompts on anything [`parse_yes_no`] rejects, with no
//! attempt limit; the user either answers or interrupts the process.

use async_trait::async_trait;
use colored::Colorize;
use riskscope_application::ports::questionnaire::{PromptError, QuestionnairePrompt};
use riskscope_domain::parse_yes_no;
use std::io::{self, Write};

/// Terminal prompter for the questionnaire.
pub struct InteractivePrompt;

impl InteractivePrompt {
    pub fn new() -> Self {
        Self
    }

    /// Read one trimmed line from stdin on a blocking worker.
    async fn read_line(&self) -> Result<String, PromptError> {
        tokio::task::spawn_blocking(|| {
            let mut input = String::new();
            let bytes = io::stdin()
                .read_line(&mut input)
                .map_err(|e| PromptError::Io(format!("Failed to read input: {}", e)))?;
            if bytes == 0 {
                return Err(PromptError::Closed);
            }
            Ok(input.trim().to_string())
        })
        .await
        .map_err(|e| PromptError::Io(format!("Input task failed: {}", e)))?
    }

    fn flush_prompt(&self) -> Result<(), PromptError> {
        io::stdout()
            .flush()
            .map_err(|e| PromptError::Io(format!("Failed to flush stdout: {}", e)))
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionnairePrompt for InteractivePrompt {
    async fn ask_text(&self, prompt: &str) -> Result<String, PromptError> {
        println!();
        print!("  {} ", prompt.white());
        self.flush_prompt()?;
        self.read_line().await
    }

    async fn ask_yes_no(
        &self,
        question: &str,
        index: usize,
        total: usize,
    ) -> Result<bool, PromptError> {
        loop {
            println!();
            println!(
                "  {} {}",
                format!("[{}/{}]", index, total).cyan(),
                question
            );
            print!("  {} ", "Your answer (y/n):".white());
            self.flush_prompt()?;

            let input = self.read_line().await?;
            match parse_yes_no(&input) {
                Some(answer) => return Ok(answer),
                None => {
                    println!(
                        "  {} Please enter 'y' for Yes or 'n' for No.",
                        "!".yellow().bold()
                    );
                }
            }
        }
    }

    fn on_domain_start(&self, domain: &str, position: usize, total: usize) {
        println!();
        println!("  {}", "═".repeat(60).cyan());
        println!(
            "  {} {}",
            format!("DOMAIN {}/{}:", position, total).bold(),
            domain.white().bold()
        );
        println!("  {}", "─".repeat(60).cyan());
    }
}

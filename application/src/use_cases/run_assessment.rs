//! Run Assessment use case
//!
//! Walks the question catalog in declared order through the prompt port,
//! tallies yes answers per domain, and assembles the final [`Assessment`].

use crate::ports::questionnaire::{PromptError, QuestionnairePrompt};
use riskscope_domain::{
    Assessment, DomainResult, RISK_DOMAINS, domain_score, organisation_or_default,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the questionnaire
#[derive(Error, Debug)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Use case for running one full questionnaire pass.
///
/// Fully sequential: each domain completes before the next begins, and no
/// partial assessment is ever returned.
pub struct RunAssessmentUseCase<P: QuestionnairePrompt + 'static> {
    prompt: Arc<P>,
    organisation: Option<String>,
}

impl<P: QuestionnairePrompt + 'static> RunAssessmentUseCase<P> {
    pub fn new(prompt: Arc<P>) -> Self {
        Self {
            prompt,
            organisation: None,
        }
    }

    /// Pre-set the organisation name, skipping the interactive prompt.
    pub fn with_organisation(mut self, organisation: Option<String>) -> Self {
        self.organisation = organisation;
        self
    }

    /// Execute the questionnaire and return the finished assessment.
    pub async fn execute(&self) -> Result<Assessment, RunAssessmentError> {
        info!("Starting assessment across {} domains", RISK_DOMAINS.len());

        let raw_name = match &self.organisation {
            Some(name) => name.clone(),
            None => {
                self.prompt
                    .ask_text("Enter organisation name (or press Enter to skip):")
                    .await?
            }
        };
        let organisation = organisation_or_default(&raw_name);

        let mut results = Vec::with_capacity(RISK_DOMAINS.len());

        for (position, domain) in RISK_DOMAINS.iter().enumerate() {
            self.prompt
                .on_domain_start(domain.name, position + 1, RISK_DOMAINS.len());

            let total = domain.len();
            let mut answered_yes = 0;

            for (index, question) in domain.questions.iter().enumerate() {
                let answer = self
                    .prompt
                    .ask_yes_no(question.prompt, index + 1, total)
                    .await?;
                if answer {
                    answered_yes += 1;
                }
            }

            let score = domain_score(answered_yes, total);
            debug!(
                domain = domain.name,
                score, answered_yes, total, "Domain tallied"
            );
            results.push(DomainResult::new(domain.name, score, answered_yes, total));
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let assessment = Assessment::new(organisation, timestamp, results);

        info!(
            organisation = %assessment.organisation,
            overall = assessment.overall_score(),
            "Assessment complete"
        );
        Ok(assessment)
    }
}

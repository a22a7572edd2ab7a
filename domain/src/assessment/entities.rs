//! Assessment entities.

use crate::assessment::risk_level::RiskLevel;
use crate::assessment::scoring::overall_score;
use serde::{Deserialize, Serialize};

/// Computed tally for a single domain after all its questions are answered.
///
/// Immutable once constructed; `score` is always
/// `round(100 * answered_yes / total)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResult {
    /// Domain name as it appears in the catalog.
    pub domain: String,
    /// Percentage score in 0..=100.
    pub score: u8,
    /// Count of yes answers.
    pub answered_yes: usize,
    /// Total questions asked.
    pub total: usize,
}

impl DomainResult {
    pub fn new(domain: impl Into<String>, score: u8, answered_yes: usize, total: usize) -> Self {
        Self {
            domain: domain.into(),
            score,
            answered_yes,
            total,
        }
    }

    /// Risk level for this domain's score.
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.score as i32)
    }
}

/// The aggregate of one questionnaire run.
///
/// Results are kept in catalog order; never mutated after the run completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Organisation name, defaulted when the user left it blank.
    pub organisation: String,
    /// Capture time, formatted `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    /// Per-domain results in catalog order.
    pub results: Vec<DomainResult>,
}

/// Remediation threshold: domains scoring strictly below this are weak.
pub const WEAK_THRESHOLD: u8 = 70;

impl Assessment {
    pub fn new(
        organisation: impl Into<String>,
        timestamp: impl Into<String>,
        results: Vec<DomainResult>,
    ) -> Self {
        Self {
            organisation: organisation.into(),
            timestamp: timestamp.into(),
            results,
        }
    }

    /// Overall score: rounded unweighted mean of the domain scores.
    pub fn overall_score(&self) -> u8 {
        let scores: Vec<u8> = self.results.iter().map(|r| r.score).collect();
        overall_score(&scores)
    }

    /// Risk level of the overall score.
    pub fn overall_risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.overall_score() as i32)
    }

    /// Domains scoring below [`WEAK_THRESHOLD`], ascending by score.
    ///
    /// The sort is stable, so ties keep catalog order. Lowest score first
    /// means highest remediation priority first.
    pub fn weak_domains(&self) -> Vec<&DomainResult> {
        let mut weak: Vec<&DomainResult> = self
            .results
            .iter()
            .filter(|r| r.score < WEAK_THRESHOLD)
            .collect();
        weak.sort_by_key(|r| r.score);
        weak
    }
}

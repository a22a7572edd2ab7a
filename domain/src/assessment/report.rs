//! Serialisable export document.
//!
//! The JSON schema is stable for downstream tooling:
//!
//! ```json
//! {
//!   "organisation": "Acme Corp",
//!   "timestamp": "2026-08-30 12:00:00",
//!   "overall_score": 80,
//!   "overall_risk_level": "MEDIUM-LOW",
//!   "domain_results": {
//!     "Data Security & Privacy": { "score": 60, "answered_yes": 3, "total": 5 }
//!   }
//! }
//! ```

use crate::assessment::entities::Assessment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-domain tally as it appears in the export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTally {
    pub score: u8,
    pub answered_yes: usize,
    pub total: usize,
}

/// The persisted report record, built from a finished [`Assessment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub organisation: String,
    pub timestamp: String,
    pub overall_score: u8,
    pub overall_risk_level: String,
    pub domain_results: BTreeMap<String, DomainTally>,
}

impl ReportDocument {
    /// Build the export record from a finished assessment.
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let domain_results = assessment
            .results
            .iter()
            .map(|r| {
                (
                    r.domain.clone(),
                    DomainTally {
                        score: r.score,
                        answered_yes: r.answered_yes,
                        total: r.total,
                    },
                )
            })
            .collect();

        Self {
            organisation: assessment.organisation.clone(),
            timestamp: assessment.timestamp.clone(),
            overall_score: assessment.overall_score(),
            overall_risk_level: assessment.overall_risk_level().label().to_string(),
            domain_results,
        }
    }
}

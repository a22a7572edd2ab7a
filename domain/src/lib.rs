//! Domain layer for riskscope
//!
//! This crate contains the question and recommendation catalogs, scoring
//! arithmetic, risk-level classification, and the assessment entities.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Assessment
//!
//! One run of the questionnaire: every question in every domain is answered
//! yes/no, each domain is scored as the percentage of yes answers, and the
//! overall score is the rounded mean of the domain scores.
//!
//! ## Risk Level
//!
//! A qualitative label (LOW through CRITICAL) derived from a score via five
//! fixed bands that jointly cover 0..=100.

pub mod assessment;
pub mod catalog;
pub mod core;

// Re-export commonly used types
pub use assessment::{
    entities::{Assessment, DomainResult, WEAK_THRESHOLD},
    report::{DomainTally, ReportDocument},
    risk_level::RiskLevel,
    scoring::{domain_score, overall_score},
};
pub use catalog::{
    questions::{DomainSpec, QuestionSpec, RISK_DOMAINS, total_questions},
    recommendations::recommendations_for,
};
pub use core::input::{DEFAULT_ORGANISATION, organisation_or_default, parse_yes_no};

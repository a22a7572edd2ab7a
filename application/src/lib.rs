//! Application layer for riskscope
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; terminals and the filesystem live behind ports.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    questionnaire::{PromptError, QuestionnairePrompt, ScriptedPrompt},
    report_exporter::{ExportError, ReportExporter},
};
pub use use_cases::export_report::ExportReportUseCase;
pub use use_cases::run_assessment::{RunAssessmentError, RunAssessmentUseCase};

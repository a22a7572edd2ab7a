//! Application use cases

pub mod export_report;
pub mod run_assessment;

//! Report exporter port.
//!
//! - **Port**: [`ReportExporter`] - defined here
//! - **Adapter**: `JsonFileExporter` - implemented in infrastructure

use async_trait::async_trait;
use riskscope_domain::ReportDocument;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by export adapters.
///
/// Export failures must reach the user; the on-screen report has already
/// been delivered, so they never abort the process.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Port for persisting a finished report document.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Write the document and return the path it landed at.
    async fn export(&self, document: &ReportDocument) -> Result<PathBuf, ExportError>;
}

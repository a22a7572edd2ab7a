//! Export Report use case
//!
//! Builds the serialisable document from a finished assessment and hands it
//! to the exporter port.

use crate::ports::report_exporter::{ExportError, ReportExporter};
use riskscope_domain::{Assessment, ReportDocument};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Use case for persisting a finished assessment.
pub struct ExportReportUseCase<E: ReportExporter + 'static> {
    exporter: Arc<E>,
}

impl<E: ReportExporter + 'static> ExportReportUseCase<E> {
    pub fn new(exporter: Arc<E>) -> Self {
        Self { exporter }
    }

    /// Serialize the assessment and write it out, returning the file path.
    pub async fn execute(&self, assessment: &Assessment) -> Result<PathBuf, ExportError> {
        let document = ReportDocument::from_assessment(assessment);
        let path = self.exporter.export(&document).await?;
        info!(path = %path.display(), "Report exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use riskscope_domain::DomainResult;
    use std::sync::Mutex;

    struct CapturingExporter {
        captured: Mutex<Option<ReportDocument>>,
        fail: bool,
    }

    #[async_trait]
    impl ReportExporter for CapturingExporter {
        async fn export(&self, document: &ReportDocument) -> Result<PathBuf, ExportError> {
            if self.fail {
                return Err(ExportError::Io(std::io::Error::other("disk full")));
            }
            *self.captured.lock().unwrap() = Some(document.clone());
            Ok(PathBuf::from("risk_report_test.json"))
        }
    }

    fn sample_assessment() -> Assessment {
        Assessment::new(
            "Acme Corp",
            "2026-08-30 12:00:00",
            vec![DomainResult::new("Data Security & Privacy", 60, 3, 5)],
        )
    }

    #[tokio::test]
    async fn test_export_builds_document_from_assessment() {
        let exporter = Arc::new(CapturingExporter {
            captured: Mutex::new(None),
            fail: false,
        });
        let use_case = ExportReportUseCase::new(Arc::clone(&exporter));

        let path = use_case.execute(&sample_assessment()).await.unwrap();
        assert_eq!(path, PathBuf::from("risk_report_test.json"));

        let doc = exporter.captured.lock().unwrap().clone().unwrap();
        assert_eq!(doc.organisation, "Acme Corp");
        assert_eq!(doc.overall_score, 60);
        assert_eq!(doc.domain_results["Data Security & Privacy"].answered_yes, 3);
    }

    #[tokio::test]
    async fn test_export_failure_is_surfaced() {
        let exporter = Arc::new(CapturingExporter {
            captured: Mutex::new(None),
            fail: true,
        });
        let use_case = ExportReportUseCase::new(exporter);

        let err = use_case.execute(&sample_assessment()).await.unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}

//! JSON file writer for finished reports.
//!
//! Writes the [`ReportDocument`] pretty-printed to
//! `risk_report_<YYYYmmdd_HHMMSS>.json` in the configured directory. The
//! second-granularity timestamp keeps run-to-run filenames unique.

use async_trait::async_trait;
use riskscope_application::ports::report_exporter::{ExportError, ReportExporter};
use riskscope_domain::ReportDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

/// Exports reports as pretty-printed JSON files.
///
/// Every write is guarded: create, serialize, and flush failures all
/// surface as [`ExportError`] instead of being dropped.
pub struct JsonFileExporter {
    directory: PathBuf,
}

impl JsonFileExporter {
    /// Exporter writing into the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn next_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        self.directory.join(format!("risk_report_{}.json", stamp))
    }
}

#[async_trait]
impl ReportExporter for JsonFileExporter {
    async fn export(&self, document: &ReportDocument) -> Result<PathBuf, ExportError> {
        let path = self.next_path();
        debug!(path = %path.display(), "Writing report");

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskscope_domain::{Assessment, DomainResult};

    fn sample_document() -> ReportDocument {
        let assessment = Assessment::new(
            "Acme Corp",
            "2026-08-30 12:00:00",
            vec![
                DomainResult::new("Data Security & Privacy", 60, 3, 5),
                DomainResult::new("Compliance & Governance", 100, 5, 5),
            ],
        );
        ReportDocument::from_assessment(&assessment)
    }

    #[tokio::test]
    async fn test_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path());

        let path = exporter.export(&sample_document()).await.unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("risk_report_"));
        assert!(name.ends_with(".json"));

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ReportDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.organisation, "Acme Corp");
        assert_eq!(parsed.overall_score, 80);
        assert_eq!(parsed.overall_risk_level, "MEDIUM-LOW");
        assert_eq!(parsed.domain_results["Data Security & Privacy"].score, 60);
        assert_eq!(parsed.domain_results["Compliance & Governance"].total, 5);
    }

    #[tokio::test]
    async fn test_export_schema_fields() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path());

        let path = exporter.export(&sample_document()).await.unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        for field in [
            "organisation",
            "timestamp",
            "overall_score",
            "overall_risk_level",
            "domain_results",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(
            value["domain_results"]["Data Security & Privacy"]["answered_yes"],
            3
        );
    }

    #[tokio::test]
    async fn test_unwritable_directory_surfaces_error() {
        let exporter = JsonFileExporter::new("/nonexistent/deeply/nested/dir");
        let err = exporter.export(&sample_document()).await.unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}

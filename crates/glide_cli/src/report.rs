//! Report output model for headless scenario runs.

use anyhow::{bail, Result};
use glide_animation::NodeDiagnostics;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    /// Failure code, e.g. `value_mismatch` or `invalid_update`
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Resolved props when the run stopped
    pub props: Option<Value>,
    pub diagnostics: Option<NodeDiagnostics>,
}

impl ScenarioReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            props: None,
            diagnostics: None,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            props: None,
            diagnostics: None,
        }
    }

    /// Attach the final node state
    pub fn with_state(mut self, props: Value, diagnostics: Option<NodeDiagnostics>) -> Self {
        self.props = Some(props);
        self.diagnostics = diagnostics;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_report_paths_are_refused() {
        let report = ScenarioReport::passed(0, 0);
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }

    #[test]
    fn failed_report_serializes_step_and_code() {
        let report = ScenarioReport::failed("value_mismatch", 3, "nope".to_string(), 12, 100);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 3);
        assert_eq!(json["assertion"], "value_mismatch");
        assert_eq!(json["elapsed_frames"], 12);
        assert!(json["diagnostics"].is_null());
    }
}

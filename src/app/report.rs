//! Rendering summaries for the command line

use anyhow::Result;
use serde::Serialize;

use crate::subprocess::{CapturedOutput, ExitStatus};

/// What the CLI prints for one summarized run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub summary: String,
}

impl SummaryReport {
    pub fn from_summary(summary: String) -> Self {
        Self {
            exit_code: None,
            signal: None,
            duration_ms: None,
            summary,
        }
    }

    pub fn from_capture(output: CapturedOutput) -> Self {
        let signal = match output.status {
            ExitStatus::Signal(sig) => Some(sig),
            _ => None,
        };
        Self {
            exit_code: output.status.code(),
            signal,
            duration_ms: Some(u64::try_from(output.duration.as_millis()).unwrap_or(u64::MAX)),
            summary: output.summary,
        }
    }

    /// Exit code the CLI should finish with, mirroring the child.
    pub fn process_exit_code(&self) -> i32 {
        match (self.exit_code, self.signal) {
            (Some(code), _) => code,
            (None, Some(sig)) => 128 + sig,
            (None, None) => 0,
        }
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string(self)?)
        } else {
            Ok(self.summary.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn captured(status: ExitStatus) -> CapturedOutput {
        CapturedOutput {
            status,
            summary: "[stdout]\nok\n\n[stderr]\n".to_string(),
            duration: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_plain_render_is_the_summary() {
        let report = SummaryReport::from_summary("[stdout]\na\n\n[stderr]\nb".to_string());
        assert_eq!(report.render(false).unwrap(), "[stdout]\na\n\n[stderr]\nb");
        assert_eq!(report.process_exit_code(), 0);
    }

    #[test]
    fn test_json_render_skips_missing_fields() {
        let report = SummaryReport::from_summary("s".to_string());
        assert_eq!(report.render(true).unwrap(), r#"{"summary":"s"}"#);
    }

    #[test]
    fn test_capture_report_carries_exit_code() {
        let report = SummaryReport::from_capture(captured(ExitStatus::Error(3)));
        assert_eq!(report.exit_code, Some(3));
        assert_eq!(report.duration_ms, Some(1500));
        assert_eq!(report.process_exit_code(), 3);

        let json: serde_json::Value = serde_json::from_str(&report.render(true).unwrap()).unwrap();
        assert_eq!(json["exit_code"], 3);
        assert_eq!(json["summary"], "[stdout]\nok\n\n[stderr]\n");
    }

    #[test]
    fn test_signal_maps_to_shell_convention() {
        let report = SummaryReport::from_capture(captured(ExitStatus::Signal(9)));
        assert_eq!(report.exit_code, None);
        assert_eq!(report.signal, Some(9));
        assert_eq!(report.process_exit_code(), 137);
    }
}

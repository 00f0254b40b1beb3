//! Report generation for audit results.
//!
//! Supports two output formats:
//! - Text: human-readable findings grouped by accordion state
//! - JSON: structured findings for programmatic consumption

use serde::Serialize;

use crate::audit::StateAudit;
use crate::finding::Severity;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Totals across every audited state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub states: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_audits(audits: &[StateAudit]) -> Self {
        let count = |severity| {
            audits
                .iter()
                .map(|a| a.report.by_severity(severity).len())
                .sum::<usize>()
        };
        Self {
            states: audits.len(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    states: &'a [StateAudit],
}

pub fn generate_report(
    audits: &[StateAudit],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(audits)),
        OutputFormat::Json => generate_json_report(audits),
    }
}

fn generate_text_report(audits: &[StateAudit]) -> String {
    let summary = Summary::from_audits(audits);
    let mut output = String::new();

    output.push_str("=== Accordion Accessibility Audit ===\n\n");

    for audit in audits {
        output.push_str(&format!("State: {}\n", audit.describe_state()));
        if audit.report.is_clean() {
            output.push_str("  No violations.\n");
        }
        for finding in &audit.report.findings {
            output.push_str(&format!("  {}\n", finding));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Audited {} state(s): {} error(s), {} warning(s)\n",
        summary.states, summary.errors, summary.warnings
    ));
    output
}

fn generate_json_report(audits: &[StateAudit]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        summary: Summary::from_audits(audits),
        states: audits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::{AuditReport, Finding};

    fn sample_audits() -> Vec<StateAudit> {
        let mut failing = AuditReport::new();
        failing.add(
            Finding::new("list-label", Severity::Error, "List has no accessible label")
                .with_element("<ul>"),
        );
        failing.add(Finding::new("heading-wraps-control", Severity::Warning, "Not in a heading"));

        vec![
            StateAudit {
                open_index: None,
                report: AuditReport::new(),
            },
            StateAudit {
                open_index: Some(1),
                report: failing,
            },
        ]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse(), Ok(OutputFormat::Json));
        assert!("sarif".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_audits(&sample_audits());
        assert_eq!(summary, Summary { states: 2, errors: 1, warnings: 1 });
    }

    #[test]
    fn test_text_report() {
        let report = generate_report(&sample_audits(), OutputFormat::Text).unwrap();
        assert!(report.contains("State: all sections collapsed\n  No violations."));
        assert!(report.contains("State: section 2 expanded"));
        assert!(report.contains("[ERROR] list-label: List has no accessible label (<ul>)"));
        assert!(report.ends_with("Audited 2 state(s): 1 error(s), 1 warning(s)\n"));
    }

    #[test]
    fn test_json_report() {
        let report = generate_report(&sample_audits(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["states"][1]["open_index"], 1);
        assert_eq!(value["states"][1]["report"]["findings"][0]["severity"], "error");
    }
}

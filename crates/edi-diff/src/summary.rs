// summary.rs — Grouping of externally produced validation issues.
//
// Issues come from a validator outside this crate as JSON. Nothing here
// evaluates rules; issues are only bucketed by severity for display.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// Issue severity, most severe first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Critical => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// "NM1 (line 12)", "line 12", "NM1" or nothing.
    pub fn location(&self) -> Option<String> {
        match (&self.segment_tag, self.line_number) {
            (Some(tag), Some(n)) => Some(format!("{} (line {})", tag, n)),
            (Some(tag), None) => Some(tag.clone()),
            (None, Some(n)) => Some(format!("line {}", n)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn from_json(json: &str) -> Result<Self, DiffError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DiffError> {
        let content = std::fs::read_to_string(path).map_err(|source| DiffError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// Issues of one severity, in report order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryGroup {
    pub severity: Severity,
    pub icon: &'static str,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorSummary {
    /// Non-empty groups only, critical first.
    pub groups: Vec<SummaryGroup>,
}

impl ErrorSummary {
    pub fn from_report(report: &ValidationReport) -> Self {
        let groups = Severity::ALL
            .iter()
            .filter_map(|&severity| {
                let issues: Vec<ValidationIssue> = report
                    .issues
                    .iter()
                    .filter(|issue| issue.severity == severity)
                    .cloned()
                    .collect();
                (!issues.is_empty()).then(|| SummaryGroup {
                    severity,
                    icon: severity.icon(),
                    issues,
                })
            })
            .collect();
        Self { groups }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.groups
            .iter()
            .find(|g| g.severity == severity)
            .map_or(0, |g| g.issues.len())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.issues.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn has_critical(&self) -> bool {
        self.count(Severity::Critical) > 0
    }
}

use serde::{Deserialize, Serialize};

use cantus_core::key::KeySignature;
use cantus_core::types::{RuleId, Severity};

/// One broken rule. `index` is the 0-based note-pair position, absent when the
/// finding concerns a whole line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: RuleId,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index: Option<usize>,
}

impl Finding {
    pub fn at(rule_id: RuleId, severity: Severity, index: usize, message: String) -> Self {
        Self {
            rule_id,
            severity,
            message,
            index: Some(index),
        }
    }

    pub fn whole_line(rule_id: RuleId, severity: Severity, message: String) -> Self {
        Self {
            rule_id,
            severity,
            message,
            index: None,
        }
    }

    /// 1-based measure number for display.
    pub fn measure(&self) -> Option<usize> {
        self.index.map(|i| i + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintStatus {
    Ok,
    Warning,
    Error,
}

impl LintStatus {
    pub fn from_findings(findings: &[Finding]) -> Self {
        if findings.iter().any(|f| f.severity == Severity::Error) {
            LintStatus::Error
        } else if findings.is_empty() {
            LintStatus::Ok
        } else {
            LintStatus::Warning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    pub version: String,
    pub command: String,
    pub status: LintStatus,
    pub key: KeySignature,
    pub cantus_is_upper: bool,
    pub findings: Vec<Finding>,
    pub summary: LintSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintSummary {
    pub errors: u32,
    pub warnings: u32,
    pub rules_run: u32,
}

impl LintSummary {
    pub fn count(findings: &[Finding], rules_run: u32) -> Self {
        let errors = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count() as u32;
        Self {
            errors,
            warnings: findings.len() as u32 - errors,
            rules_run,
        }
    }
}

// --- Explain command types ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResult {
    pub version: String,
    pub command: String,
    pub rule_id: RuleId,
    pub enabled: bool,
    pub severity: Severity,
    pub description: String,
    pub scope: String, // "note" | "line"
    pub details: String,
}

// --- Rules command types ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesResult {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleListing {
    pub id: String,
    pub enabled: bool,
    pub severity: Severity,
    pub description: String,
    pub implemented: bool,
}

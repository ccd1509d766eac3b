use crate::human_helpers::{format_finding_human, plural};
use crate::OutputFormatter;
use cantus_lint::types::{ExplainResult, LintResult, RulesResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        if result.findings.is_empty() {
            return String::new(); // Clean lint = empty stdout
        }

        let mut out = String::new();
        for f in &result.findings {
            out.push_str(&format_finding_human(f));
        }

        out.push_str(&format!(
            "\n{}, {} ({}, {})\n",
            plural(result.summary.errors, "error"),
            plural(result.summary.warnings, "warning"),
            plural(result.summary.rules_run, "rule"),
            result.key,
        ));
        out
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        let state = if result.enabled { "enabled" } else { "disabled" };
        let mut out = format!(
            "{} ({}, {}, reported per {})\n",
            result.rule_id, result.severity, state, result.scope,
        );
        if !result.description.is_empty() {
            out.push_str(&format!("  {}\n", result.description));
        }
        out.push_str(&format!("\n{}\n", result.details));
        out
    }

    fn format_rules(&self, result: &RulesResult) -> String {
        let mut out = String::new();
        for r in &result.rules {
            let state = if r.enabled { "on " } else { "off" };
            let description = if r.implemented {
                r.description.as_str()
            } else {
                "(not implemented)"
            };
            out.push_str(&format!(
                "  {}  {:<7}  {}  {}\n",
                state, r.severity.as_str(), r.id, description,
            ));
        }
        out
    }
}

//! Output formatters for cantus command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Compact per-finding blocks for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use cantus_lint::types::{ExplainResult, LintResult, RulesResult};

pub trait OutputFormatter {
    fn format_lint(&self, result: &LintResult) -> String;
    fn format_explain(&self, result: &ExplainResult) -> String;
    fn format_rules(&self, result: &RulesResult) -> String;
}

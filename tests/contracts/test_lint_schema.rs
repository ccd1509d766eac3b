/// Contract tests for lint output JSON schema compliance.
use std::sync::Arc;

use cantus_core::config::RuleCatalog;
use cantus_core::excerpt::Excerpt;
use cantus_core::key::KeySignature;
use cantus_core::types::{whole_notes, Duration, Note};
use cantus_lint::types::ExplainResult;
use cantus_lint::LintEngine;
use cantus_output::json::JsonFormatter;
use cantus_output::OutputFormatter;

use super::test_schema_helpers::{assert_rejected_by_schema, validate_against_schema};

const LINT_SCHEMA: &str = include_str!("../schemas/lint_output.schema.json");
const EXPLAIN_SCHEMA: &str = include_str!("../schemas/explain_output.schema.json");

fn engine() -> LintEngine {
    LintEngine::new(Arc::new(RuleCatalog::default()))
}

#[test]
fn clean_lint_output_matches_schema() {
    let excerpt = Excerpt::new(
        whole_notes(&[60, 64, 62, 65, 64, 62, 60]),
        whole_notes(&[67, 67, 71, 69, 67, 71, 72]),
        KeySignature::C,
    );
    let result = engine().run(&excerpt);
    assert!(result.findings.is_empty());

    let json_value = serde_json::to_value(&result).unwrap();
    validate_against_schema(&json_value, LINT_SCHEMA);
}

#[test]
fn lint_output_with_every_kind_of_finding_matches_schema() {
    let mut cantus = whole_notes(&[60, 62, 62, 67, 67, 64]);
    cantus[1] = Note::new(62, Duration::Half);
    let excerpt = Excerpt::new(cantus, whole_notes(&[64, 69, 69, 69, 66]), KeySignature::BFlat);
    let result = engine().run(&excerpt);
    assert!(result.findings.iter().any(|f| f.index.is_none()));
    assert!(result.findings.iter().any(|f| f.index.is_some()));

    let json_value = serde_json::to_value(&result).unwrap();
    validate_against_schema(&json_value, LINT_SCHEMA);
}

#[test]
fn formatter_output_parses_and_matches_schema() {
    let excerpt = Excerpt::new(whole_notes(&[60, 62]), whole_notes(&[67, 69]), KeySignature::F);
    let text = JsonFormatter.format_lint(&engine().run(&excerpt));
    let json_value: serde_json::Value = serde_json::from_str(&text).unwrap();
    validate_against_schema(&json_value, LINT_SCHEMA);
}

#[test]
fn lint_schema_rejects_unknown_rule_ids() {
    let json_value = serde_json::json!({
        "version": "0.1.0",
        "command": "lint",
        "status": "error",
        "key": "C",
        "cantus_is_upper": false,
        "findings": [{"rule_id": "noHiddenFifths", "severity": "error", "message": "x", "index": 0}],
        "summary": {"errors": 1, "warnings": 0, "rules_run": 1}
    });
    assert_rejected_by_schema(&json_value, LINT_SCHEMA);
}

#[test]
fn explain_output_matches_schema() {
    let result: ExplainResult = engine().explain(cantus_core::types::RuleId::CadenceCpt);
    let json_value = serde_json::to_value(&result).unwrap();
    validate_against_schema(&json_value, EXPLAIN_SCHEMA);
}

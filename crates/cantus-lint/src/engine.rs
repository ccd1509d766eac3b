use std::sync::Arc;

use tracing::{debug, trace};

use cantus_core::config::{CatalogHandle, RuleCatalog};
use cantus_core::excerpt::Excerpt;
use cantus_core::key::KeySignature;
use cantus_core::types::{Note, RuleId};

use crate::evaluators::{self, LintContext};
use crate::explain;
use crate::types::{
    ExplainResult, Finding, LintResult, LintStatus, LintSummary, RuleListing, RulesResult,
};

/// Run every enabled rule of `catalog` in declaration order and collect the
/// findings. Catalog order is kept between rules and each evaluator's own
/// order within a rule; nothing is deduplicated or re-sorted.
pub fn lint(
    cantus: &[Note],
    counterpoint: &[Note],
    key: KeySignature,
    catalog: &RuleCatalog,
    cantus_is_upper: bool,
) -> Vec<Finding> {
    let ctx = LintContext::new(cantus, counterpoint, key).with_cantus_upper(cantus_is_upper);
    lint_context(&ctx, catalog).0
}

/// Same as [`lint`], also returning how many rules actually ran.
pub fn lint_context(ctx: &LintContext<'_>, catalog: &RuleCatalog) -> (Vec<Finding>, u32) {
    let mut findings = Vec::new();
    let mut rules_run = 0;

    for rule in catalog.rules() {
        if !rule.enabled {
            trace!(rule = %rule.id, "rule disabled, skipping");
            continue;
        }
        let produced = evaluators::evaluate(rule.id, ctx, rule.severity);
        debug!(rule = %rule.id, findings = produced.len(), "evaluated rule");
        findings.extend(produced);
        rules_run += 1;
    }

    (findings, rules_run)
}

/// Lint engine bound to one catalog snapshot.
pub struct LintEngine {
    catalog: Arc<RuleCatalog>,
}

impl LintEngine {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// Take the handle's current snapshot; later reloads don't affect this engine.
    pub fn from_handle(handle: &CatalogHandle) -> Self {
        Self::new(handle.snapshot())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Lint an excerpt.
    pub fn run(&self, excerpt: &Excerpt) -> LintResult {
        let ctx = LintContext::new(&excerpt.cantus, &excerpt.counterpoint, excerpt.key)
            .with_cantus_upper(excerpt.cantus_is_upper);
        let (findings, rules_run) = lint_context(&ctx, &self.catalog);

        LintResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "lint".to_string(),
            status: LintStatus::from_findings(&findings),
            key: excerpt.key,
            cantus_is_upper: excerpt.cantus_is_upper,
            summary: LintSummary::count(&findings, rules_run),
            findings,
        }
    }

    /// Describe one rule as configured in this engine's catalog. Rules absent
    /// from the catalog are reported as disabled with their built-in severity.
    pub fn explain(&self, id: RuleId) -> ExplainResult {
        let configured = self.catalog.get(id).cloned();
        let fallback = RuleCatalog::default().get(id).cloned();
        let descriptor = configured.clone().or(fallback);

        ExplainResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "explain".to_string(),
            rule_id: id,
            enabled: configured.as_ref().is_some_and(|d| d.enabled),
            severity: descriptor.as_ref().map(|d| d.severity).unwrap_or_default(),
            description: descriptor.map(|d| d.description).unwrap_or_default(),
            scope: explain::scope(id).to_string(),
            details: explain::details(id).to_string(),
        }
    }

    /// The catalog in declaration order, unimplemented entries included.
    pub fn rules(&self) -> RulesResult {
        let rules = self
            .catalog
            .to_document()
            .rules
            .into_iter()
            .map(|entry| RuleListing {
                implemented: entry.id.parse::<RuleId>().is_ok(),
                id: entry.id,
                enabled: entry.enabled,
                severity: entry.severity,
                description: entry.description,
            })
            .collect();

        RulesResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "rules".to_string(),
            rules,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

use std::path::Path;
use std::sync::Arc;

use cantus_core::types::RuleId;
use cantus_lint::LintEngine;
use cantus_output::OutputFormatter;

/// Run `cantus explain <ruleId>`.
pub fn run(formatter: &dyn OutputFormatter, catalog_path: &Path, rule: &str) -> i32 {
    let id = match rule.parse::<RuleId>() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("cantus explain: {e}");
            let known: Vec<&str> = RuleId::ALL.iter().map(|r| r.as_str()).collect();
            eprintln!("known rules: {}", known.join(", "));
            return 2;
        }
    };

    let Some(catalog) = super::load_catalog("explain", catalog_path) else {
        return 2;
    };
    let engine = LintEngine::new(Arc::new(catalog));
    super::emit(&formatter.format_explain(&engine.explain(id)));
    0
}

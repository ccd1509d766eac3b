use std::path::Path;
use std::sync::Arc;

use cantus_lint::LintEngine;
use cantus_output::OutputFormatter;

/// Run `cantus rules`: list the catalog in evaluation order.
pub fn run(formatter: &dyn OutputFormatter, catalog_path: &Path) -> i32 {
    let Some(catalog) = super::load_catalog("rules", catalog_path) else {
        return 2;
    };
    let engine = LintEngine::new(Arc::new(catalog));
    super::emit(&formatter.format_rules(&engine.rules()));
    0
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use cantus_core::excerpt::Excerpt;
use cantus_core::key::KeySignature;
use cantus_core::types::RuleId;
use cantus_lint::types::LintResult;
use cantus_lint::LintEngine;
use cantus_output::OutputFormatter;

pub struct LintArgs {
    pub excerpt: PathBuf,
    pub key: Option<String>,
    pub cantus_upper: bool,
    pub strict: bool,
    pub only: Vec<String>,
}

/// Run `cantus lint`. Exit 1 on error findings (or any finding with
/// `--strict`), 2 when the excerpt or catalog can't be used.
pub fn run(formatter: &dyn OutputFormatter, catalog_path: &Path, args: LintArgs) -> i32 {
    let Some(mut catalog) = super::load_catalog("lint", catalog_path) else {
        return 2;
    };

    let mut excerpt = match Excerpt::load(&args.excerpt) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("cantus lint: {e}");
            return 2;
        }
    };

    if let Some(key) = &args.key {
        match key.parse::<KeySignature>() {
            Ok(k) => excerpt.key = k,
            Err(e) => {
                eprintln!("cantus lint: {e}");
                return 2;
            }
        }
    }
    excerpt.cantus_is_upper |= args.cantus_upper;

    if !args.only.is_empty() {
        let ids: Result<Vec<RuleId>, String> = args.only.iter().map(|s| s.parse()).collect();
        match ids {
            Ok(ids) => catalog = catalog.restricted_to(&ids),
            Err(e) => {
                eprintln!("cantus lint: {e}");
                return 2;
            }
        }
    }

    let engine = LintEngine::new(Arc::new(catalog));
    let result = engine.run(&excerpt);

    info!(
        excerpt = %args.excerpt.display(),
        findings = result.findings.len(),
        rules_run = result.summary.rules_run,
        "lint finished"
    );

    super::emit(&formatter.format_lint(&result));
    exit_code(&result, args.strict)
}

fn exit_code(result: &LintResult, strict: bool) -> i32 {
    if result.summary.errors > 0 || (strict && result.summary.warnings > 0) {
        1
    } else {
        0
    }
}

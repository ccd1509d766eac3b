use std::fs;
use std::path::Path;

use tracing::info;

use cantus_core::config::RuleCatalog;

/// Run `cantus init`: write the built-in catalog so it can be edited.
pub fn run(catalog_path: &Path, verbose: bool, force: bool) -> i32 {
    if catalog_path.exists() && !force {
        eprintln!(
            "cantus init: {} already exists (use --force to overwrite)",
            catalog_path.display()
        );
        return 2;
    }

    if let Some(parent) = catalog_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("cantus init: failed to create {}: {}", parent.display(), e);
            return 2;
        }
    }

    let document = RuleCatalog::default().to_document();
    let json = match serde_json::to_string_pretty(&document) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("cantus init: failed to serialize catalog: {}", e);
            return 2;
        }
    };

    if let Err(e) = fs::write(catalog_path, json + "\n") {
        eprintln!("cantus init: failed to write {}: {}", catalog_path.display(), e);
        return 2;
    }

    info!(path = %catalog_path.display(), rules = document.rules.len(), "wrote rule catalog");
    if verbose {
        eprintln!("cantus init: wrote {}", catalog_path.display());
    }
    0
}

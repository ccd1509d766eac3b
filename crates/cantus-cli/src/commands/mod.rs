pub mod completion;
pub mod config;
pub mod explain;
pub mod init;
pub mod lint;
pub mod rules;

use std::path::{Path, PathBuf};

use cantus_core::config::RuleCatalog;

/// `--rules` if given, else `.cantus/rules.json` under the working directory.
pub fn catalog_path(rules: Option<&Path>) -> PathBuf {
    match rules {
        Some(p) => p.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            RuleCatalog::default_path(&cwd)
        }
    }
}

/// Load the catalog for `cmd`, reporting failures on stderr.
pub(crate) fn load_catalog(cmd: &str, path: &Path) -> Option<RuleCatalog> {
    match RuleCatalog::load(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("cantus {cmd}: {}: {e}", path.display());
            None
        }
    }
}

/// Print formatter output; empty output prints nothing at all.
pub(crate) fn emit(output: &str) {
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
}

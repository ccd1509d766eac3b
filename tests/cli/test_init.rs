// Tests for `cantus init`

use std::fs;

use cantus_core::config::RuleCatalog;

use super::common::{create_project, run_cantus};

#[test]
fn test_init_writes_default_catalog() {
    let (_dir, root) = create_project(&[]);
    let out = run_cantus(&root, &["init"]);
    assert_eq!(out.status.code(), Some(0));

    let path = root.join(".cantus/rules.json");
    assert!(path.exists());
    assert_eq!(RuleCatalog::load(&path).unwrap(), RuleCatalog::default());
}

#[test]
fn test_init_twice_needs_force() {
    let (_dir, root) = create_project(&[]);
    assert_eq!(run_cantus(&root, &["init"]).status.code(), Some(0));

    let second = run_cantus(&root, &["init"]);
    assert_eq!(second.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    fs::write(root.join(".cantus/rules.json"), "not json").unwrap();
    assert_eq!(run_cantus(&root, &["init", "--force"]).status.code(), Some(0));
    assert!(RuleCatalog::load(&root.join(".cantus/rules.json")).is_ok());
}

// Tests for `cantus rules`

use super::common::{create_project, run_cantus};

#[test]
fn test_rules_lists_builtin_catalog_in_order() {
    let (_dir, root) = create_project(&[]);
    let out = run_cantus(&root, &["rules", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let ids: Vec<&str> = json["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.first(), Some(&"equalLength"));
    assert_eq!(ids.last(), Some(&"cadenceCPT"));
    assert_eq!(ids.len(), 11);
}

#[test]
fn test_rules_marks_unimplemented_entries() {
    let catalog = r#"{"species":"first","rules":[
        {"id":"noHiddenFifths"},
        {"id":"uniqueClimax","enabled":false}
    ]}"#;
    let (_dir, root) = create_project(&[(".cantus/rules.json", catalog)]);
    let out = run_cantus(&root, &["rules"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout.contains("noHiddenFifths  (not implemented)"), "{stdout}");
    assert!(stdout.contains("off  error    uniqueClimax"), "{stdout}");
}

#[test]
fn test_rules_rejects_other_species() {
    let catalog = r#"{"species":"second","rules":[]}"#;
    let (_dir, root) = create_project(&[(".cantus/rules.json", catalog)]);
    let out = run_cantus(&root, &["rules"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unsupported species"));
}

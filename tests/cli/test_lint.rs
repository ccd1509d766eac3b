// Tests for `cantus lint`

use super::common::{create_project, run_cantus, CLEAN_EXCERPT, PARALLEL_FIFTHS_EXCERPT};

#[test]
fn test_lint_clean_excerpt_prints_nothing() {
    let (_dir, root) = create_project(&[("ex.json", CLEAN_EXCERPT)]);
    let out = run_cantus(&root, &["lint", "ex.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn test_lint_human_output_points_at_measures() {
    let (_dir, root) = create_project(&[("ex.json", PARALLEL_FIFTHS_EXCERPT)]);
    let out = run_cantus(&root, &["lint", "ex.json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("error[noParallelPerfects]:"), "{stdout}");
    assert!(stdout.contains("  --> measure 2"), "{stdout}");
    assert!(stdout.contains("  --> measure 3"), "{stdout}");
    assert!(stdout.contains("(11 rules, C major)"), "{stdout}");
}

#[test]
fn test_lint_json_output() {
    let (_dir, root) = create_project(&[("ex.json", PARALLEL_FIFTHS_EXCERPT)]);
    let out = run_cantus(&root, &["lint", "ex.json", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    assert_eq!(json["command"], "lint");
    assert_eq!(json["status"], "error");
    assert_eq!(json["key"], "C");
    let parallels: Vec<&serde_json::Value> = json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["rule_id"] == "noParallelPerfects")
        .map(|f| &f["index"])
        .collect();
    assert_eq!(parallels, vec![&serde_json::json!(1), &serde_json::json!(2)]);
}

#[test]
fn test_lint_only_restricts_rules() {
    let (_dir, root) = create_project(&[("ex.json", PARALLEL_FIFTHS_EXCERPT)]);
    let out = run_cantus(
        &root,
        &["lint", "ex.json", "--json", "--only", "noParallelPerfects"],
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["summary"]["rules_run"], 1);
    assert!(json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["rule_id"] == "noParallelPerfects"));
}

#[test]
fn test_lint_key_override() {
    // 69-67 is 2-1 in G but not in C
    let excerpt = r#"{"cantus": [{"pitch": "A4"}, {"pitch": "G4"}], "counterpoint": []}"#;
    let (_dir, root) = create_project(&[("ex.json", excerpt)]);

    let in_c = run_cantus(&root, &["lint", "ex.json", "--json", "--only", "cadenceCF"]);
    let in_g = run_cantus(
        &root,
        &["lint", "ex.json", "--json", "--only", "cadenceCF", "--key", "G"],
    );
    let in_c: serde_json::Value = serde_json::from_slice(&in_c.stdout).unwrap();
    let in_g: serde_json::Value = serde_json::from_slice(&in_g.stdout).unwrap();

    assert_eq!(in_c["findings"].as_array().unwrap().len(), 1);
    assert_eq!(in_g["key"], "G");
    assert!(in_g["findings"].as_array().unwrap().is_empty());
}

#[test]
fn test_lint_cantus_upper_flag() {
    let excerpt = r#"{"cantus": [{"pitch": 72}], "counterpoint": [{"pitch": 60}]}"#;
    let (_dir, root) = create_project(&[("ex.json", excerpt)]);
    let out = run_cantus(
        &root,
        &["lint", "ex.json", "--only", "noVoiceCrossing", "--cantus-upper"],
    );
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_lint_uses_project_catalog() {
    let catalog = r#"{"species":"first","rules":[
        {"id":"noParallelPerfects","severity":"warning"}
    ]}"#;
    let (_dir, root) = create_project(&[
        ("ex.json", PARALLEL_FIFTHS_EXCERPT),
        (".cantus/rules.json", catalog),
    ]);
    let out = run_cantus(&root, &["lint", "ex.json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("warning[noParallelPerfects]"), "{stdout}");
}

#[test]
fn test_lint_rules_flag_overrides_project_catalog() {
    let catalog = r#"{"species":"first","rules":[{"id":"equalLength"}]}"#;
    let (_dir, root) = create_project(&[
        ("ex.json", PARALLEL_FIFTHS_EXCERPT),
        ("other/rules.json", catalog),
    ]);
    let out = run_cantus(&root, &["lint", "ex.json", "--rules", "other/rules.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_lint_skips_unimplemented_rules_quietly() {
    let catalog = r#"{"species":"first","rules":[
        {"id":"noHiddenFifths"},
        {"id":"equalLength"}
    ]}"#;
    let (_dir, root) = create_project(&[
        ("ex.json", CLEAN_EXCERPT),
        (".cantus/rules.json", catalog),
    ]);
    let out = run_cantus(&root, &["lint", "ex.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

use cantus_lint::types::Finding;

pub(crate) fn format_finding_human(f: &Finding) -> String {
    let location = match f.measure() {
        Some(m) => format!("measure {m}"),
        None => "whole line".to_string(),
    };
    format!(
        "{}[{}]: {}\n  --> {}\n",
        f.severity, f.rule_id, f.message, location,
    )
}

pub(crate) fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

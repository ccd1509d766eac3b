//! `cantus config` command: get or set rule catalog values.
//!
//! Keys are rule ids, optionally followed by a field:
//!   cantus config                              # dump the catalog as JSON
//!   cantus config uniqueClimax                 # one rule's settings
//!   cantus config uniqueClimax.severity error  # change a severity
//!   cantus config cadenceCF.enabled false      # turn a rule off

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use cantus_core::config::{CatalogDocument, RuleCatalog, RuleEntry};

pub fn run(catalog_path: &Path, key: Option<String>, value: Option<String>) -> i32 {
    match (key, value) {
        (None, None) => dump_config(catalog_path),
        (Some(k), None) => get_config(catalog_path, &k),
        (Some(k), Some(v)) => set_config(catalog_path, &k, &v),
        (None, Some(_)) => {
            eprintln!("cantus config: value provided without key");
            2
        }
    }
}

fn load_document(catalog_path: &Path) -> Option<CatalogDocument> {
    super::load_catalog("config", catalog_path).map(|c| c.to_document())
}

fn dump_config(catalog_path: &Path) -> i32 {
    let Some(document) = load_document(catalog_path) else {
        return 2;
    };
    match serde_json::to_string_pretty(&document) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("cantus config: failed to serialize: {}", e);
            2
        }
    }
}

fn get_config(catalog_path: &Path, key: &str) -> i32 {
    let Some(document) = load_document(catalog_path) else {
        return 2;
    };
    let view = match rules_by_id(&document) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("cantus config: failed to serialize: {}", e);
            return 2;
        }
    };

    match resolve_dot_path(&view, key) {
        Some(v) => {
            let output = match v {
                Value::String(s) => s.to_string(),
                Value::Object(_) => serde_json::to_string_pretty(v).unwrap_or_default(),
                other => other.to_string(),
            };
            println!("{}", output);
            0
        }
        None => {
            eprintln!("cantus config: unknown key '{}'", key);
            1
        }
    }
}

fn set_config(catalog_path: &Path, key: &str, value: &str) -> i32 {
    if !catalog_path.exists() {
        eprintln!(
            "cantus config: {} not found. Run `cantus init` first.",
            catalog_path.display()
        );
        return 2;
    }

    let Some(document) = load_document(catalog_path) else {
        return 2;
    };
    let mut view = match rules_by_id(&document) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("cantus config: failed to serialize: {}", e);
            return 2;
        }
    };

    if !key.contains('.') || !set_dot_path(&mut view, key, parse_value(value)) {
        eprintln!("cantus config: unknown key '{}'", key);
        return 1;
    }

    // Rebuild in the original order and validate the same way `load` does.
    let updated = match rebuild_document(&document, view) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("cantus config: invalid value for '{}': {}", key, e);
            return 1;
        }
    };
    if let Err(e) = RuleCatalog::from_document(updated.clone()) {
        eprintln!("cantus config: invalid value for '{}': {}", key, e);
        return 1;
    }

    let json = match serde_json::to_string_pretty(&updated) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("cantus config: failed to serialize: {}", e);
            return 2;
        }
    };
    match fs::write(catalog_path, json + "\n") {
        Ok(_) => {
            eprintln!("cantus config: {} = {}", key, value);
            0
        }
        Err(e) => {
            eprintln!("cantus config: failed to write config: {}", e);
            2
        }
    }
}

/// `{ "<ruleId>": { "enabled": .., "severity": .., "description": .. }, .. }`
fn rules_by_id(document: &CatalogDocument) -> Result<Value, serde_json::Error> {
    let mut map = Map::new();
    for entry in &document.rules {
        let mut fields = serde_json::to_value(entry)?;
        if let Value::Object(obj) = &mut fields {
            obj.remove("id");
        }
        map.insert(entry.id.clone(), fields);
    }
    Ok(Value::Object(map))
}

fn rebuild_document(
    original: &CatalogDocument,
    mut view: Value,
) -> Result<CatalogDocument, serde_json::Error> {
    let mut rules = Vec::with_capacity(original.rules.len());
    for entry in &original.rules {
        let mut fields = view
            .get_mut(&entry.id)
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(Map::new()));
        if let Value::Object(obj) = &mut fields {
            obj.insert("id".to_string(), Value::String(entry.id.clone()));
        }
        rules.push(serde_json::from_value::<RuleEntry>(fields)?);
    }
    Ok(CatalogDocument {
        species: original.species.clone(),
        rules,
    })
}

fn parse_value(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                Value::Number(n.into())
            } else {
                Value::String(value.to_string())
            }
        }
    }
}

fn resolve_dot_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

fn set_dot_path(value: &mut Value, path: &str, new_value: Value) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = value;
    for segment in parents {
        current = match current.get_mut(*segment) {
            Some(v) => v,
            None => return false,
        };
    }

    match current.get_mut(*last) {
        Some(slot) => {
            *slot = new_value;
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

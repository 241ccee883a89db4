//! # Equipment Catalog Validation
//!
//! Minimal structural check over the equipment specification table. No
//! resolution logic here; the CLI drives this and reports the findings.

use serde_json::Value;

use crate::store::Document;

/// Canonical catalog document name.
pub const CATALOG_DOC: &str = "equipment_specs.yaml";

/// Fields every equipment entry must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["category", "description", "dimensions_mm", "weight_kg"];

/// Check every entry under `equipment` for the required fields. Returns one
/// message per violation; an empty vec means the catalog is structurally
/// sound.
pub fn validate_catalog(catalog: &Document) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(equipment) = catalog.get("equipment").and_then(Value::as_object) else {
        errors.push("catalog is missing the 'equipment' section".to_string());
        return errors;
    };

    for (item_id, entry) in equipment {
        match entry.as_object() {
            Some(entry) => {
                for field in REQUIRED_FIELDS {
                    if !entry.contains_key(field) {
                        errors.push(format!("{item_id}: missing required field '{field}'"));
                    }
                }
            }
            None => errors.push(format!("{item_id}: entry is not a mapping")),
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_complete_catalog_passes() {
        let catalog = doc(json!({
            "equipment": {
                "ahu_small": {
                    "category": "hvac",
                    "description": "compact air handler",
                    "dimensions_mm": [600, 400, 350],
                    "weight_kg": 42.0
                }
            }
        }));
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported_per_entry() {
        let catalog = doc(json!({
            "equipment": {
                "fan_inline": { "category": "hvac" }
            }
        }));
        let errors = validate_catalog(&catalog);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("'description'")));
        assert!(errors.iter().any(|e| e.contains("'dimensions_mm'")));
        assert!(errors.iter().any(|e| e.contains("'weight_kg'")));
    }

    #[test]
    fn test_missing_equipment_section() {
        let errors = validate_catalog(&doc(json!({})));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("equipment"));
    }
}

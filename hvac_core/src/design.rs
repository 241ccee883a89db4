//! # Design Resolver
//!
//! Validates the top-level schema of the HVAC design document and merges
//! default/room/activity override layers into resolved rate tables.
//!
//! The design document has two required sections: `defaults` (global
//! `activity_levels` and `ventilation` rates) and `rooms` (per-room-type
//! overrides). Resolution is a shallow key-by-key merge where room values
//! win; `exhaust` has no global default and is passed through only when a
//! room declares it (exhaust is inherently site-specific: shower counts,
//! fixture counts).
//!
//! Declaration order in the document is significant: when no activity is
//! requested, the first-declared key of the room's `activity_map` (else of
//! the global `activity_levels`) is used.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{HvacError, HvacResult};
use crate::store::{Document, DocumentStore};
use std::sync::Arc;

/// Canonical design document name, resolved through the store's search roots.
pub const DESIGN_DOC: &str = "hvac_design.yaml";

/// Schema keys for an activity-level entry.
pub const ACTIVITY_KEYS: [&str; 2] = [SENSIBLE_W_PER_PERSON, LATENT_W_PER_PERSON];
pub const SENSIBLE_W_PER_PERSON: &str = "sensible_W_per_person";
pub const LATENT_W_PER_PERSON: &str = "latent_W_per_person";

/// Schema keys for a ventilation entry.
pub const VENTILATION_KEYS: [&str; 2] = [RP_LPS_PER_PERSON, RA_LPS_PER_M2];
pub const RP_LPS_PER_PERSON: &str = "Rp_Lps_per_person";
pub const RA_LPS_PER_M2: &str = "Ra_Lps_per_m2";

/// Schema keys allowed in an exhaust block. `Ra_Lps_per_m2` is area-driven;
/// every other key is per-fixture-driven.
pub const EXHAUST_KEYS: [&str; 4] = [
    RA_LPS_PER_M2,
    "per_shower_Lps_continuous",
    "per_shower_Lps_intermittent",
    "per_fixture_Lps",
];

/// Merge result for one (room type, activity) pair, ready for formula
/// consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRates {
    /// Merged activity entry (`sensible_W_per_person`, `latent_W_per_person`)
    pub activity: Map<String, Value>,
    /// Merged ventilation entry (`Rp_Lps_per_person`, `Ra_Lps_per_m2`)
    pub ventilation: Map<String, Value>,
    /// Room-declared exhaust block; absent when the room declares none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhaust: Option<Map<String, Value>>,
}

impl ResolvedRates {
    /// Per-person ventilation rate Rp [L/s per person].
    pub fn rp_lps_per_person(&self) -> HvacResult<f64> {
        number(&self.ventilation, RP_LPS_PER_PERSON, "ventilation")
    }

    /// Per-area ventilation rate Ra [L/s per m2].
    pub fn ra_lps_per_m2(&self) -> HvacResult<f64> {
        number(&self.ventilation, RA_LPS_PER_M2, "ventilation")
    }

    /// Occupant sensible heat release [W per person].
    pub fn sensible_w_per_person(&self) -> HvacResult<f64> {
        number(&self.activity, SENSIBLE_W_PER_PERSON, "activity")
    }

    /// Occupant latent heat release [W per person].
    pub fn latent_w_per_person(&self) -> HvacResult<f64> {
        number(&self.activity, LATENT_W_PER_PERSON, "activity")
    }
}

fn number(section: &Map<String, Value>, key: &str, context: &str) -> HvacResult<f64> {
    section
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| HvacError::schema(context, format!("missing or non-numeric '{key}'")))
}

/// Ensure an exhaust block only uses supported keys.
pub fn validate_exhaust_keys(exhaust: &Map<String, Value>) -> HvacResult<()> {
    for key in exhaust.keys() {
        if !EXHAUST_KEYS.contains(&key.as_str()) {
            return Err(HvacError::schema(
                "exhaust",
                format!("unknown exhaust key '{key}'. Valid keys: {EXHAUST_KEYS:?}"),
            ));
        }
    }
    Ok(())
}

/// Load the canonical design document through the store and validate its
/// top-level schema.
///
/// Fails with `SchemaError` if `rooms` or `defaults` is absent, or if any
/// room's exhaust block carries an unrecognized key.
pub fn load_design(store: &DocumentStore, force_reload: bool) -> HvacResult<Arc<Document>> {
    let cfg = store.get(DESIGN_DOC, force_reload)?;
    if !cfg.contains_key("rooms") {
        return Err(HvacError::schema(DESIGN_DOC, "missing required 'rooms' section"));
    }
    if !cfg.contains_key("defaults") {
        return Err(HvacError::schema(DESIGN_DOC, "missing required 'defaults' section"));
    }
    for (room_id, room_cfg) in section(cfg.as_ref(), "rooms") {
        if let Some(exhaust) = room_cfg.get("exhaust").and_then(Value::as_object) {
            validate_exhaust_keys(exhaust).map_err(|e| match e {
                HvacError::SchemaError { reason, .. } => {
                    HvacError::schema(format!("rooms.{room_id}.exhaust"), reason)
                }
                other => other,
            })?;
        }
    }
    Ok(cfg)
}

/// Merge defaults and room-specific overrides into a unified rate table for
/// one room type and activity.
///
/// When `activity` is `None`, the first-declared key of the room's
/// `activity_map` is preferred, then the first-declared key of the global
/// `activity_levels`; with neither, resolution fails with
/// `NoActivityLevels`. Merges are shallow and key-by-key with room values
/// winning.
pub fn resolve_room_activity(
    cfg: &Document,
    room_type: &str,
    activity: Option<&str>,
) -> HvacResult<ResolvedRates> {
    let rooms = section(cfg, "rooms");
    let room_cfg = match rooms.get(room_type).and_then(Value::as_object) {
        Some(room) => room,
        None => {
            return Err(HvacError::unknown_room_type(room_type, rooms.keys()));
        }
    };

    let defaults = section(cfg, "defaults");
    let activity_levels = section(&defaults, "activity_levels");
    let ventilation_defaults = section(&defaults, "ventilation");
    let room_activity_map = section(room_cfg, "activity_map");

    let activity = match activity {
        Some(name) => name.to_string(),
        None => room_activity_map
            .keys()
            .next()
            .or_else(|| activity_levels.keys().next())
            .cloned()
            .ok_or_else(|| HvacError::no_activity_levels(room_type))?,
    };
    debug!(room_type, activity = %activity, "resolving room rates");

    let activity_defaults = section(&activity_levels, &activity);
    let activity_overrides = section(&room_activity_map, &activity);
    let activity_final = shallow_merge(&activity_defaults, &activity_overrides);

    let ventilation_overrides = section(room_cfg, "ventilation");
    let ventilation_final = shallow_merge(&ventilation_defaults, &ventilation_overrides);

    let exhaust = match room_cfg.get("exhaust").and_then(Value::as_object) {
        Some(map) if !map.is_empty() => {
            validate_exhaust_keys(map)?;
            Some(map.clone())
        }
        _ => None,
    };

    Ok(ResolvedRates {
        activity: activity_final,
        ventilation: ventilation_final,
        exhaust,
    })
}

/// Shallow merge: every key of `overrides` wins over `base`; keys present in
/// only one source keep that source's value.
fn shallow_merge(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Fetch a named sub-mapping, treating anything absent or non-mapping as
/// empty.
fn section(parent: &Map<String, Value>, key: &str) -> Map<String, Value> {
    parent
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn design_fixture() -> Document {
        json!({
            "defaults": {
                "activity_levels": {
                    "rest": { "sensible_W_per_person": 80.0, "latent_W_per_person": 35.0 },
                    "light_work": { "sensible_W_per_person": 110.0, "latent_W_per_person": 60.0 }
                },
                "ventilation": { "Rp_Lps_per_person": 2.5, "Ra_Lps_per_m2": 0.3 }
            },
            "rooms": {
                "dorm": {
                    "activity_map": {
                        "rest": { "latent_W_per_person": 40.0 }
                    }
                },
                "hygiene_block": {
                    "activity_map": {
                        "moderate_work": {
                            "sensible_W_per_person": 150.0,
                            "latent_W_per_person": 130.0
                        }
                    },
                    "ventilation": { "Ra_Lps_per_m2": 0.5 },
                    "exhaust": { "Ra_Lps_per_m2": 0.5, "per_shower_Lps_continuous": 10.0 }
                },
                "bare_room": {}
            }
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_resolved_rates_carry_all_schema_keys() {
        let cfg = design_fixture();
        let rates = resolve_room_activity(&cfg, "dorm", Some("rest")).unwrap();
        for key in ACTIVITY_KEYS {
            assert!(rates.activity.contains_key(key), "missing {key}");
        }
        for key in VENTILATION_KEYS {
            assert!(rates.ventilation.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_merge_precedence_room_wins_key_by_key() {
        let cfg = json!({
            "defaults": {
                "activity_levels": { "rest": { "a": 1, "b": 2 } },
                "ventilation": {}
            },
            "rooms": {
                "dorm": { "activity_map": { "rest": { "b": 3, "c": 4 } } }
            }
        })
        .as_object()
        .unwrap()
        .clone();

        let rates = resolve_room_activity(&cfg, "dorm", Some("rest")).unwrap();
        assert_eq!(rates.activity, json!({ "a": 1, "b": 3, "c": 4 }).as_object().unwrap().clone());
    }

    #[test]
    fn test_ventilation_merges_global_and_room_overrides() {
        let cfg = design_fixture();
        let rates = resolve_room_activity(&cfg, "hygiene_block", Some("moderate_work")).unwrap();
        assert_eq!(rates.rp_lps_per_person().unwrap(), 2.5);
        assert_eq!(rates.ra_lps_per_m2().unwrap(), 0.5);
    }

    #[test]
    fn test_exhaust_absent_when_room_declares_none() {
        let cfg = design_fixture();
        let rates = resolve_room_activity(&cfg, "dorm", Some("rest")).unwrap();
        assert!(rates.exhaust.is_none());
        // and absent from the serialized form too, not an empty mapping
        let json = serde_json::to_value(&rates).unwrap();
        assert!(json.get("exhaust").is_none());
    }

    #[test]
    fn test_exhaust_passes_through_when_declared() {
        let cfg = design_fixture();
        let rates = resolve_room_activity(&cfg, "hygiene_block", None).unwrap();
        let exhaust = rates.exhaust.unwrap();
        assert_eq!(exhaust.get("per_shower_Lps_continuous"), Some(&json!(10.0)));
    }

    #[test]
    fn test_unknown_exhaust_key_is_schema_error() {
        let mut cfg = design_fixture();
        cfg["rooms"]["hygiene_block"]["exhaust"]["bogus_key"] = json!(1.0);
        let err = resolve_room_activity(&cfg, "hygiene_block", None).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_ERROR");
        assert!(err.to_string().contains("bogus_key"));
    }

    #[test]
    fn test_default_activity_prefers_room_declaration_order() {
        let cfg = design_fixture();
        // hygiene_block's own activity_map starts with moderate_work even
        // though the global table starts with rest
        let rates = resolve_room_activity(&cfg, "hygiene_block", None).unwrap();
        assert_eq!(rates.sensible_w_per_person().unwrap(), 150.0);
    }

    #[test]
    fn test_default_activity_falls_back_to_global_first_key() {
        let cfg = design_fixture();
        let rates = resolve_room_activity(&cfg, "bare_room", None).unwrap();
        // global table's first-declared key is rest
        assert_eq!(rates.sensible_w_per_person().unwrap(), 80.0);
    }

    #[test]
    fn test_no_activity_levels_anywhere_fails() {
        let cfg = json!({
            "defaults": { "ventilation": {} },
            "rooms": { "void": {} }
        })
        .as_object()
        .unwrap()
        .clone();
        let err = resolve_room_activity(&cfg, "void", None).unwrap_err();
        assert_eq!(err.error_code(), "NO_ACTIVITY_LEVELS");
    }

    #[test]
    fn test_unknown_room_type_fails() {
        let cfg = design_fixture();
        let err = resolve_room_activity(&cfg, "engine_room", None).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_ROOM_TYPE");
        assert!(err.to_string().contains("dorm"));
    }

    #[test]
    fn test_validate_exhaust_keys_accepts_full_schema_set() {
        let exhaust = json!({
            "Ra_Lps_per_m2": 0.5,
            "per_shower_Lps_continuous": 10.0,
            "per_shower_Lps_intermittent": 25.0,
            "per_fixture_Lps": 6.0
        })
        .as_object()
        .unwrap()
        .clone();
        assert!(validate_exhaust_keys(&exhaust).is_ok());
    }
}

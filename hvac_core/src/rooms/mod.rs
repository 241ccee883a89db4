//! # Room Data Model and Calculator Variants
//!
//! Each room archetype implements [`RoomCalculator`]: a stateless pair of
//! operations `defaults()` and `compute(spec)` producing a uniform
//! [`RoomReport`]. Calculators fetch their rate tables through an injected
//! [`RatesCache`](crate::tables::RatesCache) and do their arithmetic with the
//! [`formulas`](crate::formulas) library.
//!
//! ## Available Variants
//!
//! - [`child_dorm_8`] - communal dormitory for eight children
//! - [`dorm_communal_8`] - adult communal dormitory, eight occupants
//! - [`hygiene_block`] - showers/toilets/lockers; the only exhaust-driven room
//! - [`intimacy_pod`] - private pod, comfort-ventilation only
//! - [`warehouse`] - low-occupancy storage hold

pub mod child_dorm_8;
pub mod dorm_communal_8;
pub mod hygiene_block;
pub mod intimacy_pod;
pub mod report;
pub mod warehouse;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::HvacResult;
use crate::tables::RatesCache;

pub use report::{ReportBuilder, RoomReport, RoundConfig, Section};

/// Standard deck-to-ceiling height [m] when a variant does not override it.
pub const DEFAULT_HEIGHT_M: f64 = 2.6;

/// Input parameters describing a room before calculation.
///
/// A fresh instance is created per compute request by a variant's
/// `defaults()`; the dispatcher applies caller overrides before computation
/// and nothing mutates it afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub occupants: u32,
    /// Life-stage/occupant-category tag (informs comfort-band selection)
    pub phase: String,
    pub floor_area_m2: f64,
    pub height_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Caller overrides for a [`RoomSpec`], applied field-by-field where set.
///
/// This is the explicit, typed replacement for attribute-probing override
/// application: the whitelist is the set of named fields below, and unknown
/// keys in an untyped override value are silently ignored (logged at debug
/// level).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_area_m2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SpecOverrides {
    /// Build overrides from an untyped mapping, ignoring unknown keys.
    pub fn from_value(value: &Value) -> Self {
        let mut overrides = SpecOverrides::default();
        let Some(map) = value.as_object() else {
            return overrides;
        };
        for (key, v) in map {
            match key.as_str() {
                "name" => overrides.name = v.as_str().map(String::from),
                "occupants" => overrides.occupants = v.as_u64().map(|n| n as u32),
                "phase" => overrides.phase = v.as_str().map(String::from),
                "floor_area_m2" => overrides.floor_area_m2 = v.as_f64(),
                "height_m" => overrides.height_m = v.as_f64(),
                "notes" => overrides.notes = v.as_str().map(String::from),
                other => debug!(key = other, "ignoring unknown override key"),
            }
        }
        overrides
    }

    /// Whitelist merge: copy every set field onto the spec.
    pub fn apply_to(&self, spec: &mut RoomSpec) {
        if let Some(name) = &self.name {
            spec.name = name.clone();
        }
        if let Some(occupants) = self.occupants {
            spec.occupants = occupants;
        }
        if let Some(phase) = &self.phase {
            spec.phase = phase.clone();
        }
        if let Some(area) = self.floor_area_m2 {
            spec.floor_area_m2 = area;
        }
        if let Some(height) = self.height_m {
            spec.height_m = height;
        }
        if let Some(notes) = &self.notes {
            spec.notes = Some(notes.clone());
        }
    }
}

/// Capability every room calculator implements. Calculators are stateless;
/// all inputs arrive through the spec and the rates cache.
pub trait RoomCalculator: Send + Sync {
    /// Unique type identifier this calculator registers under.
    fn type_id(&self) -> &'static str;

    /// Archetype baseline spec. Returns a new instance each call; callers
    /// mutate it via overrides.
    fn defaults(&self) -> RoomSpec;

    /// Perform the room's calculations and assemble a report.
    fn compute(&self, spec: &RoomSpec, rates: &RatesCache) -> HvacResult<RoomReport>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::store::DocumentStore;
    use crate::tables::RatesCache;

    const DESIGN: &str = "\
defaults:
  activity_levels:
    rest: { sensible_W_per_person: 80.0, latent_W_per_person: 35.0 }
    light_work: { sensible_W_per_person: 110.0, latent_W_per_person: 60.0 }
    moderate_work: { sensible_W_per_person: 150.0, latent_W_per_person: 130.0 }
  ventilation:
    Rp_Lps_per_person: 2.5
    Ra_Lps_per_m2: 0.3
rooms:
  dorm:
    activity_map:
      rest: {}
  hygiene_block:
    activity_map:
      moderate_work: {}
    ventilation:
      Ra_Lps_per_m2: 0.5
    exhaust:
      Ra_Lps_per_m2: 0.5
      per_shower_Lps_continuous: 10.0
  intimacy_pod:
    activity_map:
      moderate_work: {}
  warehouse:
    activity_map:
      light_work: {}
    ventilation:
      Rp_Lps_per_person: 1.0
      Ra_Lps_per_m2: 0.15
";

    /// A rates cache backed by a complete on-disk design fixture. Keep the
    /// TempDir alive for the duration of the test.
    pub(crate) fn rates_fixture() -> (TempDir, RatesCache) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hvac_design.yaml"), DESIGN).unwrap();
        let store = Arc::new(DocumentStore::with_roots(vec![dir.path().to_path_buf()]));
        (dir, RatesCache::new(store))
    }
}

//! # Room Report and Builder
//!
//! The uniform output shape shared by every room calculator, plus a fluent
//! builder that merges section entries and applies consistent numeric
//! rounding at build time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Named report sections. Used both as builder targets and as keys of a
/// rounding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Geometry,
    MassKg,
    ElectricalKw,
    Hvac,
    WaterLPerDay,
    WasteLPerDay,
    Safety,
    Schematics,
    Metadata,
}

/// Rounding policy: section -> decimal places. An empty map disables
/// rounding entirely.
pub type RoundConfig = BTreeMap<Section, u32>;

/// Default policy: two decimals for every numeric section. Schematics and
/// metadata are descriptive and never rounded.
pub fn default_round_config() -> RoundConfig {
    [
        (Section::Geometry, 2),
        (Section::MassKg, 2),
        (Section::ElectricalKw, 2),
        (Section::Hvac, 2),
        (Section::WaterLPerDay, 2),
        (Section::WasteLPerDay, 2),
        (Section::Safety, 2),
    ]
    .into_iter()
    .collect()
}

/// Output results of a room calculation. All units are SI unless a label
/// states otherwise. Sections default to empty so calculators populate only
/// what applies to their archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    pub type_id: String,
    pub name: String,
    #[serde(default)]
    pub geometry: Map<String, Value>,
    #[serde(default)]
    pub mass_kg: Map<String, Value>,
    #[serde(default, rename = "electrical_kW")]
    pub electrical_kw: Map<String, Value>,
    #[serde(default)]
    pub hvac: Map<String, Value>,
    #[serde(default, rename = "water_L_per_day")]
    pub water_l_per_day: Map<String, Value>,
    #[serde(default, rename = "waste_L_per_day")]
    pub waste_l_per_day: Map<String, Value>,
    #[serde(default)]
    pub safety: Map<String, Value>,
    #[serde(default)]
    pub schematics: Map<String, Value>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RoomReport {
    fn new(type_id: impl Into<String>, name: impl Into<String>) -> Self {
        RoomReport {
            type_id: type_id.into(),
            name: name.into(),
            geometry: Map::new(),
            mass_kg: Map::new(),
            electrical_kw: Map::new(),
            hvac: Map::new(),
            water_l_per_day: Map::new(),
            waste_l_per_day: Map::new(),
            safety: Map::new(),
            schematics: Map::new(),
            metadata: Map::new(),
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Map<String, Value> {
        match section {
            Section::Geometry => &mut self.geometry,
            Section::MassKg => &mut self.mass_kg,
            Section::ElectricalKw => &mut self.electrical_kw,
            Section::Hvac => &mut self.hvac,
            Section::WaterLPerDay => &mut self.water_l_per_day,
            Section::WasteLPerDay => &mut self.waste_l_per_day,
            Section::Safety => &mut self.safety,
            Section::Schematics => &mut self.schematics,
            Section::Metadata => &mut self.metadata,
        }
    }
}

/// Fluent accumulator for [`RoomReport`].
///
/// Repeated sets of the same key overwrite the prior value (last-write-wins,
/// no accumulation).
///
/// ## Example
///
/// ```rust
/// use hvac_core::rooms::report::ReportBuilder;
///
/// let report = ReportBuilder::new("child_dorm_8", "Child Dorm 8")
///     .geom("floor_area_m2", 24.0)
///     .hvac("ventilation_Lps", 27.2345)
///     .meta("phase", "children")
///     .build();
/// assert_eq!(report.hvac["ventilation_Lps"], 27.23);
/// ```
pub struct ReportBuilder {
    report: RoomReport,
}

impl ReportBuilder {
    pub fn new(type_id: impl Into<String>, name: impl Into<String>) -> Self {
        ReportBuilder {
            report: RoomReport::new(type_id, name),
        }
    }

    /// Set one entry in an arbitrary section.
    pub fn set(mut self, section: Section, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.report.section_mut(section).insert(key.into(), value.into());
        self
    }

    /// Add or update a geometry entry.
    pub fn geom(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Geometry, key, value)
    }

    /// Add or update an HVAC entry.
    pub fn hvac(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Hvac, key, value)
    }

    /// Add or update an electrical load entry [kW].
    pub fn elec(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::ElectricalKw, key, value)
    }

    /// Add or update a water consumption entry [L/day].
    pub fn water(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::WaterLPerDay, key, value)
    }

    /// Add or update a waste entry [L/day].
    pub fn waste(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::WasteLPerDay, key, value)
    }

    /// Add or update a mass entry [kg].
    pub fn mass(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::MassKg, key, value)
    }

    /// Add or update a safety field.
    pub fn safety(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Safety, key, value)
    }

    /// Add or update a schematics reference.
    pub fn schem(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Schematics, key, value)
    }

    /// Add or update a metadata field.
    pub fn meta(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Metadata, key, value)
    }

    /// Finish with the default rounding policy (two decimals on every
    /// numeric section).
    pub fn build(self) -> RoomReport {
        self.build_with(&default_round_config())
    }

    /// Finish with an explicit rounding policy. An empty config disables
    /// rounding; non-numeric values always pass through untouched.
    pub fn build_with(mut self, round_config: &RoundConfig) -> RoomReport {
        for (&section, &precision) in round_config {
            let map = self.report.section_mut(section);
            for value in map.values_mut() {
                round_in_place(value, precision);
            }
        }
        self.report
    }
}

/// Round a floating-point leaf to `precision` decimals. Integers, strings,
/// and everything else pass through.
fn round_in_place(value: &mut Value, precision: u32) {
    if let Value::Number(number) = value {
        if number.is_f64() {
            if let Some(f) = number.as_f64() {
                let factor = 10f64.powi(precision as i32);
                let rounded = (f * factor).round() / factor;
                if let Some(n) = Number::from_f64(rounded) {
                    *value = Value::Number(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_rounding_two_decimals() {
        let report = ReportBuilder::new("t", "n").hvac("ventilation_Lps", 27.23456).build();
        assert_eq!(report.hvac["ventilation_Lps"], json!(27.23));
    }

    #[test]
    fn test_empty_round_config_disables_rounding() {
        let report = ReportBuilder::new("t", "n")
            .hvac("ventilation_Lps", 27.23456)
            .build_with(&RoundConfig::new());
        assert_eq!(report.hvac["ventilation_Lps"], json!(27.23456));
    }

    #[test]
    fn test_custom_precision() {
        let config: RoundConfig = [(Section::Hvac, 1)].into_iter().collect();
        let report = ReportBuilder::new("t", "n")
            .hvac("supply_Lps", 18.06)
            .geom("floor_area_m2", 18.123456) // geometry not in config: untouched
            .build_with(&config);
        assert_eq!(report.hvac["supply_Lps"], json!(18.1));
        assert_eq!(report.geometry["floor_area_m2"], json!(18.123456));
    }

    #[test]
    fn test_non_numeric_values_pass_through() {
        let report = ReportBuilder::new("t", "n")
            .safety("note", "keep exhaust fans redundant")
            .safety("margin_Lps", 12.3456)
            .build();
        assert_eq!(report.safety["note"], json!("keep exhaust fans redundant"));
        assert_eq!(report.safety["margin_Lps"], json!(12.35));
    }

    #[test]
    fn test_integers_are_not_rewritten() {
        let report = ReportBuilder::new("t", "n").hvac("fixtures", 3).build();
        assert_eq!(report.hvac["fixtures"], json!(3));
    }

    #[test]
    fn test_last_write_wins() {
        let report = ReportBuilder::new("t", "n")
            .hvac("ventilation_Lps", 10.0)
            .hvac("ventilation_Lps", 20.0)
            .build();
        assert_eq!(report.hvac["ventilation_Lps"], json!(20.0));
    }

    #[test]
    fn test_metadata_never_rounded_by_default() {
        let report = ReportBuilder::new("t", "n").meta("revision", 1.23456).build();
        assert_eq!(report.metadata["revision"], json!(1.23456));
    }

    #[test]
    fn test_sections_default_empty() {
        let report = ReportBuilder::new("t", "n").build();
        assert!(report.geometry.is_empty());
        assert!(report.hvac.is_empty());
        assert!(report.schematics.is_empty());
    }
}

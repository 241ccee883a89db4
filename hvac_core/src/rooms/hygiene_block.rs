//! Communal hygiene module handling showers, toilets, and lockers.
//!
//! The only exhaust-driven archetype: its design-document entry declares an
//! `exhaust` block, and supply is sized to never undershoot exhaust.

use crate::errors::HvacResult;
use crate::formulas;
use crate::rooms::{ReportBuilder, RoomCalculator, RoomReport, RoomSpec, DEFAULT_HEIGHT_M};
use crate::safety::{apply_margin, RiskLevel};
use crate::tables::RatesCache;

/// Fan sizing headroom on top of the computed exhaust requirement.
const EXHAUST_MARGIN_FACTOR: f64 = 1.2;

/// Hygiene block calculator, evaluated at `moderate_work`.
pub struct HygieneBlock;

impl RoomCalculator for HygieneBlock {
    fn type_id(&self) -> &'static str {
        "hygiene_block"
    }

    fn defaults(&self) -> RoomSpec {
        RoomSpec {
            name: "Hygiene Block".to_string(),
            occupants: 12,
            phase: "mixed".to_string(),
            floor_area_m2: 18.0,
            height_m: DEFAULT_HEIGHT_M,
            notes: None,
        }
    }

    fn compute(&self, spec: &RoomSpec, rates: &RatesCache) -> HvacResult<RoomReport> {
        let rates = rates.get_rates("hygiene_block", Some("moderate_work"))?;

        let ventilation_lps = formulas::ventilation_rate(
            spec.occupants,
            rates.rp_lps_per_person()?,
            spec.floor_area_m2,
            rates.ra_lps_per_m2()?,
        );
        let exhaust_lps = formulas::exhaust_rate(spec.floor_area_m2, rates.exhaust.as_ref(), 0);
        let supply_lps = formulas::supply_rate(ventilation_lps, exhaust_lps);
        let fan_sizing_lps = apply_margin(exhaust_lps, EXHAUST_MARGIN_FACTOR, RiskLevel::High);

        let mut builder = ReportBuilder::new(self.type_id(), spec.name.clone())
            .geom("floor_area_m2", spec.floor_area_m2)
            .geom("height_m", spec.height_m)
            .geom("volume_m3", spec.floor_area_m2 * spec.height_m)
            .hvac("ventilation_Lps", ventilation_lps)
            .hvac("exhaust_Lps", exhaust_lps)
            .hvac("supply_Lps", supply_lps)
            .safety("exhaust_fan_sizing_Lps", fan_sizing_lps)
            .meta("phase", spec.phase.clone());
        if let Some(notes) = &spec.notes {
            builder = builder.meta("notes", notes.clone());
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::test_support::rates_fixture;
    use serde_json::json;

    #[test]
    fn test_compute_populates_exhaust_and_supply() {
        let (_dir, cache) = rates_fixture();
        let report = HygieneBlock.compute(&HygieneBlock.defaults(), &cache).unwrap();

        // 12 * 2.5 + 18.0 * 0.5 (room overrides Ra)
        assert_eq!(report.hvac["ventilation_Lps"], json!(39.0));
        // area driver: 0.5 * 18.0 = 9.0 (no fixtures declared on the spec)
        assert_eq!(report.hvac["exhaust_Lps"], json!(9.0));
        // supply holds at ventilation since it already exceeds exhaust
        assert_eq!(report.hvac["supply_Lps"], json!(39.0));
        // 9.0 * 1.2 * 1.5 high-risk sizing margin
        assert_eq!(report.safety["exhaust_fan_sizing_Lps"], json!(16.2));
    }

    #[test]
    fn test_supply_follows_exhaust_when_it_dominates() {
        let (_dir, cache) = rates_fixture();
        let mut spec = HygieneBlock.defaults();
        spec.occupants = 1;
        spec.floor_area_m2 = 100.0;
        let report = HygieneBlock.compute(&spec, &cache).unwrap();

        // ventilation 1 * 2.5 + 100 * 0.5 = 52.5; exhaust 0.5 * 100 = 50.0
        assert_eq!(report.hvac["ventilation_Lps"], json!(52.5));
        assert_eq!(report.hvac["exhaust_Lps"], json!(50.0));
        assert_eq!(report.hvac["supply_Lps"], json!(52.5));
    }
}

//! Communal dormitory for eight children.

use crate::errors::HvacResult;
use crate::formulas;
use crate::rooms::{ReportBuilder, RoomCalculator, RoomReport, RoomSpec, DEFAULT_HEIGHT_M};
use crate::tables::RatesCache;

/// Child dormitory calculator. Shares the `dorm` rate table with the adult
/// dormitory, evaluated at the `rest` activity.
pub struct ChildDorm8;

impl RoomCalculator for ChildDorm8 {
    fn type_id(&self) -> &'static str {
        "child_dorm_8"
    }

    fn defaults(&self) -> RoomSpec {
        RoomSpec {
            name: "Child Dorm 8".to_string(),
            occupants: 8,
            phase: "children".to_string(),
            floor_area_m2: 24.0,
            height_m: DEFAULT_HEIGHT_M,
            notes: None,
        }
    }

    fn compute(&self, spec: &RoomSpec, rates: &RatesCache) -> HvacResult<RoomReport> {
        let rates = rates.get_rates("dorm", Some("rest"))?;

        let ventilation_lps = formulas::ventilation_rate(
            spec.occupants,
            rates.rp_lps_per_person()?,
            spec.floor_area_m2,
            rates.ra_lps_per_m2()?,
        );
        let sensible_kw = formulas::metabolic_heat_kw(spec.occupants, rates.sensible_w_per_person()?);
        let latent_kw = formulas::latent_heat_kw(spec.occupants, rates.latent_w_per_person()?);

        let mut builder = ReportBuilder::new(self.type_id(), spec.name.clone())
            .geom("floor_area_m2", spec.floor_area_m2)
            .geom("height_m", spec.height_m)
            .geom("volume_m3", spec.floor_area_m2 * spec.height_m)
            .hvac("ventilation_Lps", ventilation_lps)
            .hvac("sensible_load_kW", sensible_kw)
            .hvac("latent_load_kW", latent_kw)
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
    fn test_defaults_fresh_instance_each_call() {
        let a = ChildDorm8.defaults();
        let mut b = ChildDorm8.defaults();
        b.occupants = 2;
        assert_eq!(a.occupants, 8);
        assert_eq!(a.phase, "children");
    }

    #[test]
    fn test_compute_dorm_rest_rates() {
        let (_dir, cache) = rates_fixture();
        let report = ChildDorm8.compute(&ChildDorm8.defaults(), &cache).unwrap();

        // 8 * 2.5 + 24.0 * 0.3
        assert_eq!(report.hvac["ventilation_Lps"], json!(27.2));
        assert_eq!(report.hvac["sensible_load_kW"], json!(0.64));
        assert_eq!(report.hvac["latent_load_kW"], json!(0.28));
        assert_eq!(report.geometry["volume_m3"], json!(62.4));
        assert_eq!(report.metadata["phase"], json!("children"));
        assert!(report.hvac.get("exhaust_Lps").is_none());
    }
}

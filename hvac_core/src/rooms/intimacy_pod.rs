//! Private intimacy pod emphasizing environmental comfort.

use crate::errors::HvacResult;
use crate::formulas;
use crate::rooms::{ReportBuilder, RoomCalculator, RoomReport, RoomSpec};
use crate::tables::RatesCache;

/// Intimacy pod calculator: comfort ventilation only, evaluated at
/// `moderate_work`.
pub struct IntimacyPod;

impl RoomCalculator for IntimacyPod {
    fn type_id(&self) -> &'static str {
        "intimacy_pod"
    }

    fn defaults(&self) -> RoomSpec {
        RoomSpec {
            name: "Intimacy Pod".to_string(),
            occupants: 4,
            phase: "adults".to_string(),
            floor_area_m2: 12.0,
            height_m: 2.4,
            notes: None,
        }
    }

    fn compute(&self, spec: &RoomSpec, rates: &RatesCache) -> HvacResult<RoomReport> {
        let rates = rates.get_rates("intimacy_pod", Some("moderate_work"))?;

        let ventilation_lps = formulas::ventilation_rate(
            spec.occupants,
            rates.rp_lps_per_person()?,
            spec.floor_area_m2,
            rates.ra_lps_per_m2()?,
        );

        let mut builder = ReportBuilder::new(self.type_id(), spec.name.clone())
            .geom("floor_area_m2", spec.floor_area_m2)
            .geom("height_m", spec.height_m)
            .geom("volume_m3", spec.floor_area_m2 * spec.height_m)
            .hvac("ventilation_Lps", ventilation_lps)
            .meta("phase", spec.phase.clone());
        if let Some(notes) = &spec.notes {
            builder = builder.meta("notes", notes.clone());
        }
        Ok(builder.build())
    }
}

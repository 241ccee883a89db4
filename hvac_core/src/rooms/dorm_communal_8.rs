//! Adult communal dormitory housing eight occupants.

use crate::errors::HvacResult;
use crate::formulas;
use crate::rooms::{ReportBuilder, RoomCalculator, RoomReport, RoomSpec, DEFAULT_HEIGHT_M};
use crate::tables::RatesCache;

/// Adult dormitory calculator using the shared `dorm` rate table at `rest`.
pub struct DormCommunal8;

impl RoomCalculator for DormCommunal8 {
    fn type_id(&self) -> &'static str {
        "dorm_communal_8"
    }

    fn defaults(&self) -> RoomSpec {
        RoomSpec {
            name: "Communal Dorm 8".to_string(),
            occupants: 8,
            phase: "adults".to_string(),
            floor_area_m2: 28.0,
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

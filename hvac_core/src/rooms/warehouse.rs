//! Low-occupancy storage hold.
//!
//! Ventilation here is area-dominated; the report carries the hourly air
//! change figure alongside L/s since stores crews plan in m3/h.

use crate::errors::HvacResult;
use crate::formulas;
use crate::rooms::{ReportBuilder, RoomCalculator, RoomReport, RoomSpec};
use crate::tables::RatesCache;
use crate::units::{Lps, M3PerHour};

/// Warehouse calculator, evaluated at `light_work`.
pub struct Warehouse;

impl RoomCalculator for Warehouse {
    fn type_id(&self) -> &'static str {
        "warehouse"
    }

    fn defaults(&self) -> RoomSpec {
        RoomSpec {
            name: "Warehouse".to_string(),
            occupants: 2,
            phase: "general".to_string(),
            floor_area_m2: 120.0,
            height_m: 3.2,
            notes: None,
        }
    }

    fn compute(&self, spec: &RoomSpec, rates: &RatesCache) -> HvacResult<RoomReport> {
        let rates = rates.get_rates("warehouse", Some("light_work"))?;

        let ventilation_lps = formulas::ventilation_rate(
            spec.occupants,
            rates.rp_lps_per_person()?,
            spec.floor_area_m2,
            rates.ra_lps_per_m2()?,
        );
        let hourly: M3PerHour = Lps(ventilation_lps).into();
        let sensible_kw = formulas::metabolic_heat_kw(spec.occupants, rates.sensible_w_per_person()?);

        let mut builder = ReportBuilder::new(self.type_id(), spec.name.clone())
            .geom("floor_area_m2", spec.floor_area_m2)
            .geom("height_m", spec.height_m)
            .geom("volume_m3", spec.floor_area_m2 * spec.height_m)
            .hvac("ventilation_Lps", ventilation_lps)
            .hvac("ventilation_m3h", hourly.0)
            .hvac("sensible_load_kW", sensible_kw)
            .meta("phase", spec.phase.clone());
        if let Some(notes) = &spec.notes {
            builder = builder.meta("notes", notes.clone());
        }
        Ok(builder.build())
    }
}

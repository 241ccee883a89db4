//! # Environmental Formula Library
//!
//! Pure airflow and heat-load arithmetic shared by every room calculator.
//! All functions are total over numeric inputs and hold no state; rates come
//! from resolved design tables, never from literals here.
//!
//! Units: airflow in L/s, heat in kW, area in m2.

use serde_json::{Map, Value};

use crate::design::RA_LPS_PER_M2;

/// Required ventilation [L/s]: per-person and per-area drivers summed.
///
/// ```text
/// ventilation = Rp * occupants + Ra * area_m2
/// ```
pub fn ventilation_rate(
    occupants: u32,
    rp_lps_per_person: f64,
    area_m2: f64,
    ra_lps_per_m2: f64,
) -> f64 {
    f64::from(occupants) * rp_lps_per_person + area_m2 * ra_lps_per_m2
}

/// Required exhaust airflow [L/s].
///
/// Worst-case-driver policy: the greater of the area-based driver and each
/// per-fixture driver, not their sum. No exhaust block means no exhaust
/// requirement.
pub fn exhaust_rate(area_m2: f64, exhaust_info: Option<&Map<String, Value>>, fixtures: u32) -> f64 {
    let Some(info) = exhaust_info else {
        return 0.0;
    };

    let mut total: f64 = 0.0;
    for (key, value) in info {
        let Some(rate) = value.as_f64() else { continue };
        let driver = if key == RA_LPS_PER_M2 {
            rate * area_m2
        } else {
            rate * f64::from(fixtures)
        };
        total = total.max(driver);
    }
    total
}

/// Supply airflow [L/s]: never undershoots exhaust, to avoid depressurizing
/// the room.
pub fn supply_rate(total_ventilation: f64, required_exhaust: f64) -> f64 {
    total_ventilation.max(required_exhaust)
}

/// Occupant metabolic sensible load [kW]. `sensible_w_per_person` comes from
/// the resolved activity table.
pub fn metabolic_heat_kw(occupants: u32, sensible_w_per_person: f64) -> f64 {
    f64::from(occupants) * sensible_w_per_person / 1000.0
}

/// Occupant latent load [kW]. `latent_w_per_person` comes from the resolved
/// activity table.
pub fn latent_heat_kw(occupants: u32, latent_w_per_person: f64) -> f64 {
    f64::from(occupants) * latent_w_per_person / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exhaust_map(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_ventilation_rate_sums_drivers() {
        // 8 * 2.5 + 24.0 * 0.3
        assert!((ventilation_rate(8, 2.5, 24.0, 0.3) - 27.2).abs() < 1e-9);
    }

    #[test]
    fn test_ventilation_rate_zero_occupants_is_area_only() {
        assert!((ventilation_rate(0, 2.5, 10.0, 0.3) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_exhaust_rate_takes_worst_case_driver() {
        let info = exhaust_map(json!({ "Ra_Lps_per_m2": 0.5, "per_fixture_Lps": 6.0 }));
        // max(0.5 * 18.0, 6.0 * 3) = max(9.0, 18.0)
        assert_eq!(exhaust_rate(18.0, Some(&info), 3), 18.0);
    }

    #[test]
    fn test_exhaust_rate_area_driver_can_win() {
        let info = exhaust_map(json!({ "Ra_Lps_per_m2": 2.0, "per_fixture_Lps": 6.0 }));
        assert_eq!(exhaust_rate(18.0, Some(&info), 3), 36.0);
    }

    #[test]
    fn test_exhaust_rate_without_info_is_zero() {
        assert_eq!(exhaust_rate(18.0, None, 3), 0.0);
    }

    #[test]
    fn test_exhaust_rate_is_not_additive() {
        let info = exhaust_map(json!({
            "per_shower_Lps_continuous": 10.0,
            "per_fixture_Lps": 6.0
        }));
        // two per-fixture drivers: the larger wins, they do not add
        assert_eq!(exhaust_rate(0.0, Some(&info), 2), 20.0);
    }

    #[test]
    fn test_supply_rate_never_undershoots_exhaust() {
        assert_eq!(supply_rate(27.2, 18.0), 27.2);
        assert_eq!(supply_rate(10.0, 18.0), 18.0);
    }

    #[test]
    fn test_metabolic_heat_kw() {
        assert_eq!(metabolic_heat_kw(8, 100.0), 0.8);
    }

    #[test]
    fn test_latent_heat_kw() {
        assert_eq!(latent_heat_kw(4, 60.0), 0.24);
    }
}

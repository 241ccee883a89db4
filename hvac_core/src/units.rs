//! # Unit Types
//!
//! Type-safe wrappers for the SI units used across the engine. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses a small, consistent set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! - Airflow: litres per second (L/s), cubic metres per hour (m3/h)
//! - Power: watts (W), kilowatts (kW)
//! - Temperature: Celsius (degC), Kelvin (K), Fahrenheit (degF)
//!
//! ## Example
//!
//! ```rust
//! use hvac_core::units::{Lps, M3PerHour};
//!
//! let flow = Lps(10.0);
//! let hourly: M3PerHour = flow.into();
//! assert_eq!(hourly.0, 36.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Airflow Units
// ============================================================================

/// Airflow in litres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lps(pub f64);

/// Airflow in cubic metres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M3PerHour(pub f64);

impl From<Lps> for M3PerHour {
    fn from(lps: Lps) -> Self {
        M3PerHour(lps.0 * 3.6)
    }
}

impl From<M3PerHour> for Lps {
    fn from(m3h: M3PerHour) -> Self {
        Lps(m3h.0 / 3.6)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1000.0)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in Kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + 273.15)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - 273.15)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airflow_round_trip() {
        let flow = Lps(27.2);
        let m3h: M3PerHour = flow.into();
        assert!((m3h.0 - 97.92).abs() < 1e-9);
        let back: Lps = m3h.into();
        assert!((back.0 - 27.2).abs() < 1e-9);
    }

    #[test]
    fn test_power_conversions() {
        let kw: Kilowatts = Watts(800.0).into();
        assert_eq!(kw.0, 0.8);
        let w: Watts = Kilowatts(1.2).into();
        assert_eq!(w.0, 1200.0);
    }

    #[test]
    fn test_temperature_conversions() {
        let k: Kelvin = Celsius(20.0).into();
        assert_eq!(k.0, 293.15);
        let f: Fahrenheit = Celsius(100.0).into();
        assert_eq!(f.0, 212.0);
        let c: Celsius = Fahrenheit(32.0).into();
        assert_eq!(c.0, 0.0);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Lps(27.2)).unwrap();
        assert_eq!(json, "27.2");
    }
}

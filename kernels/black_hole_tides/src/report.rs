// Calculation result bundle and the evaluation entry point

use log::debug;
use serde::Serialize;

use crate::classify::{self, HorizonStatus, TidalSeverity};
use crate::error::Result;
use crate::gravity;
use crate::types::{BlackHoleSpec, ObservationPoint};
use crate::units;

// ============================================================================
// CALCULATION RESULT
// ============================================================================

// One call, one struct with every number and classification the presentation
// layer needs. Built fresh per request and never mutated; serializes straight
// to JSON for the web frontend, which is why it carries redundant display
// views (solar masses, r_s multiples, Earth-gravity multiples) alongside the
// SI values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    // Inputs, echoed back so a serialized result is self-describing
    pub mass_kg: f64,
    pub mass_solar: f64,
    pub distance_m: f64,
    pub height_m: f64,

    // Horizon
    pub schwarzschild_radius_m: f64,
    pub distance_rs_multiples: f64,
    pub horizon_status: HorizonStatus,

    // Local gravity
    pub gravity_ms2: f64,
    pub gravity_earth_multiples: f64,

    // Tidal stretch across height_m
    pub tidal_delta_ms2: f64,
    pub tidal_earth_multiples: f64,
    pub tidal_severity: TidalSeverity,

    // Keplerian circular orbit at distance_m. Always computed; inside the
    // horizon it is a classical extrapolation and the presentation layer
    // is expected to annotate or suppress it.
    pub orbital_period_s: f64,
}

// Evaluate every formula and classification for one observer at one hole.
//
// The inputs were validated at construction, so the only errors that can
// surface here are degenerate derived values (for example a mass so small
// its horizon radius underflows to zero).
pub fn evaluate(spec: &BlackHoleSpec, point: &ObservationPoint) -> Result<CalculationResult> {
    let m = spec.mass_kg();
    let r = point.distance_m();
    let h = point.height_m();

    let rs = gravity::schwarzschild_radius(m)?;
    let gravity_ms2 = gravity::gravitational_acceleration(m, r)?;
    let tidal_delta_ms2 = gravity::tidal_acceleration(m, r, h)?;
    let orbital_period_s = gravity::orbital_period(m, r)?;

    let horizon_status = classify::horizon_status(r, rs)?;
    let tidal_severity = classify::tidal_severity(tidal_delta_ms2)?;

    debug!(
        "evaluate: m = {:.4e} kg, r = {:.4e} m -> r_s = {:.4e} m, g = {:.4e} m/s^2, dg = {:.4e} m/s^2",
        m, r, rs, gravity_ms2, tidal_delta_ms2
    );

    Ok(CalculationResult {
        mass_kg: m,
        mass_solar: spec.mass_solar(),
        distance_m: r,
        height_m: h,
        schwarzschild_radius_m: rs,
        distance_rs_multiples: r / rs,
        horizon_status,
        gravity_ms2,
        gravity_earth_multiples: units::earth_gravity_multiples(gravity_ms2),
        tidal_delta_ms2,
        tidal_earth_multiples: units::earth_gravity_multiples(tidal_delta_ms2),
        tidal_severity,
        orbital_period_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SOLAR_MASS_KG;

    fn solar_at(distance_m: f64) -> CalculationResult {
        let bh = BlackHoleSpec::new(SOLAR_MASS_KG).unwrap();
        let p = ObservationPoint::new(distance_m).unwrap();
        evaluate(&bh, &p).unwrap()
    }

    #[test]
    fn test_evaluate_agrees_with_individual_formulas() {
        let result = solar_at(1.0e4);
        let rs = gravity::schwarzschild_radius(SOLAR_MASS_KG).unwrap();
        let g = gravity::gravitational_acceleration(SOLAR_MASS_KG, 1.0e4).unwrap();
        let dg = gravity::tidal_acceleration(SOLAR_MASS_KG, 1.0e4, 2.0).unwrap();

        assert_eq!(result.schwarzschild_radius_m, rs);
        assert_eq!(result.gravity_ms2, g);
        assert_eq!(result.tidal_delta_ms2, dg);
        assert_eq!(result.orbital_period_s, gravity::orbital_period(SOLAR_MASS_KG, 1.0e4).unwrap());
        assert!((result.distance_rs_multiples - 1.0e4 / rs).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_solar_mass_close_approach() {
        // 10 km from a solar-mass hole: outside the ~2.95 km horizon, but
        // tides are catastrophically Extreme
        let result = solar_at(1.0e4);
        assert_eq!(result.horizon_status, HorizonStatus::Outside);
        assert_eq!(result.tidal_severity, TidalSeverity::Extreme);
        assert!(result.gravity_earth_multiples > 1.0e10);
    }

    #[test]
    fn test_evaluate_supermassive_horizon_is_gentle() {
        // At the horizon of Sagittarius A*, head-to-feet stretch is benign
        let bh = BlackHoleSpec::from_solar_masses(4.3e6).unwrap();
        let rs = gravity::schwarzschild_radius(bh.mass_kg()).unwrap();
        let p = ObservationPoint::new(rs).unwrap();
        let result = evaluate(&bh, &p).unwrap();
        assert_eq!(result.horizon_status, HorizonStatus::AtHorizon);
        assert_eq!(result.tidal_severity, TidalSeverity::Negligible);
    }

    #[test]
    fn test_evaluate_inside_horizon_still_reports_period() {
        // The Keplerian number is still computed inside r_s; flagging it is
        // the presentation layer's job
        let result = solar_at(1.0e3);
        assert_eq!(result.horizon_status, HorizonStatus::Inside);
        assert!(result.orbital_period_s.is_finite());
        assert!(result.orbital_period_s > 0.0);
    }

    #[test]
    fn test_result_serializes_with_classification_names() {
        let result = solar_at(1.0e4);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["horizon_status"], "Outside");
        assert_eq!(json["tidal_severity"], "Extreme");
        assert!(json["schwarzschild_radius_m"].is_number());
    }
}

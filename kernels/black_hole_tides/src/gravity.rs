// Closed-form gravity formulas for a non-rotating black hole

use std::f64::consts::PI;

use crate::constants::{C, G};
use crate::error::{require_positive, Result};

// ============================================================================
// SCHWARZSCHILD RADIUS
// ============================================================================

// Four formulas cover everything the explorer needs. Each one validates its
// inputs and returns a Result; no formula ever runs on a value that could
// divide by zero or poison downstream math with NaN. Deliberately Newtonian
// outside the horizon formula itself: the point is order-of-magnitude
// intuition, not geodesic integration.

// Compute the Schwarzschild radius r_s = 2GM/c^2.
//
// Physics: the radius at which the classical escape velocity reaches the
// speed of light. Inside it, nothing escapes; it is the event horizon of a
// non-rotating black hole. Handy rule of thumb: about 3 km per solar mass.
pub fn schwarzschild_radius(mass_kg: f64) -> Result<f64> {
    let m = require_positive("mass_kg", mass_kg)?;
    Ok(2.0 * G * m / (C * C))
}

// ============================================================================
// GRAVITATIONAL ACCELERATION
// ============================================================================

// Compute the Newtonian gravitational acceleration g = GM/r^2 at distance r
// from the center of mass.
//
// Physics: valid wherever the field is well approximated as that of a point
// mass, which is everywhere outside the horizon for our purposes. The r = 0
// case is rejected up front rather than letting the division blow up.
pub fn gravitational_acceleration(mass_kg: f64, radius_m: f64) -> Result<f64> {
    let m = require_positive("mass_kg", mass_kg)?;
    let r = require_positive("radius_m", radius_m)?;
    Ok(G * m / (r * r))
}

// ============================================================================
// TIDAL ACCELERATION
// ============================================================================

// Compute the tidal acceleration dg = |g(r) - g(r + h)| across a body of
// height h whose near end sits at distance r.
//
// Physics: your feet are closer to the mass than your head, so they are
// pulled harder. The difference is the stretching ("spaghettification")
// force. It falls off as 1/r^3, which is why tides are brutal near a
// stellar-mass hole yet gentle at the horizon of a supermassive one.
//
// Evaluated as two point accelerations rather than the 2GMh/r^3 derivative
// approximation, so it stays exact even when h is not small against r.
pub fn tidal_acceleration(mass_kg: f64, radius_m: f64, height_m: f64) -> Result<f64> {
    let m = require_positive("mass_kg", mass_kg)?;
    let r = require_positive("radius_m", radius_m)?;
    let h = require_positive("height_m", height_m)?;

    let g_near = gravitational_acceleration(m, r)?;
    let g_far = gravitational_acceleration(m, r + h)?;
    Ok((g_near - g_far).abs())
}

// ============================================================================
// ORBITAL PERIOD
// ============================================================================

// Compute the Keplerian orbital period P = 2 pi sqrt(r^3 / GM) of a circular
// orbit of radius r.
//
// Physics: Kepler's third law for a test particle. It is a purely Newtonian
// statement, so inside the horizon the number is a classical extrapolation
// with no physical orbit behind it; the presentation layer decides whether
// to show it there.
pub fn orbital_period(mass_kg: f64, radius_m: f64) -> Result<f64> {
    let m = require_positive("mass_kg", mass_kg)?;
    let r = require_positive("radius_m", radius_m)?;
    Ok(2.0 * PI * (r.powi(3) / (G * m)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SOLAR_MASS_KG;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64, what: &str) {
        let err = (actual - expected).abs() / expected.abs();
        assert!(
            err < rel_tol,
            "{}: expected {:.9e}, got {:.9e} (rel err {:.2e})",
            what,
            expected,
            actual,
            err
        );
    }

    #[test]
    fn test_schwarzschild_radius_matches_formula() {
        let m = 4.2e31;
        let rs = schwarzschild_radius(m).unwrap();
        assert_close(rs, 2.0 * G * m / (C * C), 1e-9, "r_s formula");
    }

    #[test]
    fn test_schwarzschild_radius_solar_mass_rule_of_thumb() {
        // One solar mass collapses to roughly a 3 km horizon
        let rs = schwarzschild_radius(SOLAR_MASS_KG).unwrap();
        assert!((rs - 2953.4).abs() < 1.0, "got {} m", rs);
        assert!((rs - 3000.0).abs() / 3000.0 < 0.02, "3 km rule broken: {} m", rs);
    }

    #[test]
    fn test_schwarzschild_radius_scales_linearly_with_mass() {
        let rs1 = schwarzschild_radius(SOLAR_MASS_KG).unwrap();
        let rs10 = schwarzschild_radius(10.0 * SOLAR_MASS_KG).unwrap();
        assert_close(rs10, 10.0 * rs1, 1e-12, "linearity in M");
    }

    #[test]
    fn test_schwarzschild_radius_rejects_bad_mass() {
        for bad in [0.0, -1.0e30, f64::NAN, f64::INFINITY] {
            assert!(schwarzschild_radius(bad).is_err(), "accepted mass {}", bad);
        }
    }

    #[test]
    fn test_gravitational_acceleration_reference_value() {
        // g at 10 km from one solar mass, cross-checked by hand:
        // G * M_sun / (1e4)^2 = 1.327e12 m/s^2
        let g = gravitational_acceleration(SOLAR_MASS_KG, 1.0e4).unwrap();
        assert_close(g, 1.327164e12, 1e-3, "g(M_sun, 10 km)");
    }

    #[test]
    fn test_gravitational_acceleration_inverse_square() {
        let g1 = gravitational_acceleration(SOLAR_MASS_KG, 1.0e4).unwrap();
        let g2 = gravitational_acceleration(SOLAR_MASS_KG, 2.0e4).unwrap();
        assert_close(g1 / g2, 4.0, 1e-12, "doubling r should quarter g");
    }

    #[test]
    fn test_gravitational_acceleration_monotonic_in_radius() {
        let radii = [1.0e3, 5.0e3, 1.0e4, 1.0e6, 1.0e9];
        let mut last = f64::INFINITY;
        for r in radii {
            let g = gravitational_acceleration(SOLAR_MASS_KG, r).unwrap();
            assert!(g < last, "g should strictly decrease with r (r = {})", r);
            last = g;
        }
    }

    #[test]
    fn test_gravitational_acceleration_rejects_zero_radius() {
        // Division by zero must be refused, not evaluated
        let err = gravitational_acceleration(SOLAR_MASS_KG, 0.0);
        assert!(err.is_err());
        assert!(gravitational_acceleration(-5.0, 100.0).is_err());
    }

    #[test]
    fn test_tidal_matches_two_point_difference() {
        let (m, r, h) = (10.0 * SOLAR_MASS_KG, 5.0e4, 2.0);
        let dg = tidal_acceleration(m, r, h).unwrap();
        let expected = gravitational_acceleration(m, r).unwrap()
            - gravitational_acceleration(m, r + h).unwrap();
        assert_close(dg, expected.abs(), 1e-12, "dg = |g(r) - g(r+h)|");
        assert!(dg > 0.0);
    }

    #[test]
    fn test_tidal_decreases_with_distance() {
        let m = 10.0 * SOLAR_MASS_KG;
        let near = tidal_acceleration(m, 1.0e5, 2.0).unwrap();
        let far = tidal_acceleration(m, 1.0e6, 2.0).unwrap();
        assert!(near > far, "tides must weaken with distance");
        // 1/r^3 falloff: 10x the distance is ~1000x weaker
        assert_close(near / far, 1000.0, 1e-2, "cubic falloff");
    }

    #[test]
    fn test_tidal_rejects_bad_height() {
        for bad in [0.0, -2.0, f64::NAN] {
            assert!(
                tidal_acceleration(SOLAR_MASS_KG, 1.0e4, bad).is_err(),
                "accepted height {}",
                bad
            );
        }
    }

    #[test]
    fn test_orbital_period_matches_formula() {
        let (m, r) = (SOLAR_MASS_KG, 7.0e8);
        let p = orbital_period(m, r).unwrap();
        assert_close(p, 2.0 * PI * (r.powi(3) / (G * m)).sqrt(), 1e-9, "Kepler P");
    }

    #[test]
    fn test_orbital_period_kepler_round_trip() {
        // Invert P = 2 pi sqrt(r^3/GM) back to r and require agreement
        let (m, r) = (SOLAR_MASS_KG, 1.0e6);
        let p = orbital_period(m, r).unwrap();
        let r_back = (G * m * p * p / (4.0 * PI * PI)).cbrt();
        assert_close(r_back, r, 1e-9, "r recovered from P");
    }

    #[test]
    fn test_orbital_period_grows_with_radius() {
        let m = 62.0 * SOLAR_MASS_KG;
        let p1 = orbital_period(m, 1.0e6).unwrap();
        let p2 = orbital_period(m, 4.0e6).unwrap();
        // P scales as r^(3/2), so 4x the radius is 8x the period
        assert_close(p2 / p1, 8.0, 1e-9, "P ~ r^1.5");
    }

    #[test]
    fn test_orbital_period_rejects_bad_inputs() {
        assert!(orbital_period(0.0, 1.0e6).is_err());
        assert!(orbital_period(SOLAR_MASS_KG, f64::NEG_INFINITY).is_err());
    }
}

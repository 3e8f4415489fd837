// Physical constants for black hole calculations

// ============================================================================
// FUNDAMENTAL CONSTANTS
// ============================================================================

// Everything downstream works in SI units (kilograms, meters, seconds).
// Values follow CODATA 2018 / IAU nominal conventions so results line up
// with the numbers quoted in astronomy references.

// Newtonian gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

// Speed of light in vacuum, m/s (exact by definition)
pub const C: f64 = 2.99792458e8;

// ============================================================================
// ASTRONOMICAL REFERENCE VALUES
// ============================================================================

// Nominal solar mass, kg (IAU 2015 resolution B3)
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

// Standard acceleration of gravity at Earth's surface, m/s^2.
// Used as the yardstick when reporting accelerations in "how many times
// what you feel standing on Earth".
pub const EARTH_SURFACE_GRAVITY: f64 = 9.80665;

// ============================================================================
// UNIT SCALE FACTORS
// ============================================================================

pub const METERS_PER_KILOMETER: f64 = 1000.0;

// Time conversions for reporting orbital periods at human scales.
// The year is the Julian year (365.25 days), the astronomy convention.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_magnitudes() {
        // Guard against transposed digits in the hand-entered values
        assert!(G > 6.6e-11 && G < 6.7e-11);
        assert!(C > 2.9e8 && C < 3.0e8);
        assert!(SOLAR_MASS_KG > 1.9e30 && SOLAR_MASS_KG < 2.0e30);
    }

    #[test]
    fn test_time_conversions_consistent() {
        assert_eq!(SECONDS_PER_DAY, 24.0 * SECONDS_PER_HOUR);
        assert_eq!(SECONDS_PER_YEAR, 365.25 * SECONDS_PER_DAY);
    }
}

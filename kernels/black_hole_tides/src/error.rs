// Input validation errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// The calculator has exactly one failure mode: a caller handed us a number
// that violates its precondition. Every public entry point checks its inputs
// up front and reports the offending field by name, so a frontend can point
// at the right form control instead of showing a generic failure.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {field} {constraint} (got {value})")]
    InvalidInput {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

// Masses, radii and heights must all be strictly positive and finite.
// Rejecting zero here is what keeps the 1/r^2 formulas division-safe.
#[inline]
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput {
            field,
            constraint: "must be a positive, finite number",
            value,
        })
    }
}

// Acceleration differences may legitimately be zero (far field underflow)
// or +inf (right next to the singularity), so only NaN and negative values
// are out of domain.
#[inline]
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput {
            field,
            constraint: "must be non-negative (NaN is rejected)",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_accepts_normal_values() {
        assert_eq!(require_positive("mass_kg", 1.5), Ok(1.5));
        assert_eq!(require_positive("radius_m", f64::MIN_POSITIVE), Ok(f64::MIN_POSITIVE));
    }

    #[test]
    fn test_require_positive_rejects_edge_values() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(require_positive("radius_m", bad).is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_require_non_negative_allows_zero_and_infinity() {
        assert_eq!(require_non_negative("delta_g", 0.0), Ok(0.0));
        assert_eq!(require_non_negative("delta_g", f64::INFINITY), Ok(f64::INFINITY));
        assert!(require_non_negative("delta_g", f64::NAN).is_err());
        assert!(require_non_negative("delta_g", -0.5).is_err());
    }

    #[test]
    fn test_display_names_the_field_and_value() {
        let err = require_positive("mass_kg", -3.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mass_kg"), "message was: {}", msg);
        assert!(msg.contains("-3"), "message was: {}", msg);
    }
}

// Qualitative classification of calculator outputs

use serde::Serialize;

use crate::constants::EARTH_SURFACE_GRAVITY;
use crate::error::{require_non_negative, require_positive, Result};

// ============================================================================
// CLASSIFIER CUTOFFS
// ============================================================================

// Numbers like 4.7e9 m/s^2 mean nothing to most readers, so the explorer
// buckets them into a handful of named regimes. The cutoffs below are
// presentation heuristics chosen for the narrative, not physics constants;
// they live here in one place so the frontend and the tests agree on them.

// Relative width of the "at the horizon" band. Stated as a fraction of r_s
// so the band scales with the hole: a stellar-mass horizon gets millimeters
// of slack, Sagittarius A* gets kilometers. An absolute epsilon would make
// the comparison meaningless at one end of the mass range or the other.
pub const HORIZON_REL_TOLERANCE: f64 = 1e-6;

// Severity bin edges for the head-to-feet acceleration difference, stated
// as multiples of Earth surface gravity. Upper bounds are exclusive; at or
// above the last edge is Extreme.
pub const NEGLIGIBLE_BELOW: f64 = 0.1;
pub const MILD_BELOW: f64 = 1.0;
pub const SIGNIFICANT_BELOW: f64 = 10.0;

// ============================================================================
// EVENT HORIZON STATUS
// ============================================================================

// Where an observation point sits relative to the event horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HorizonStatus {
    Outside,
    AtHorizon,
    Inside,
}

impl HorizonStatus {
    // Display name for reports
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            HorizonStatus::Outside => "Outside the event horizon",
            HorizonStatus::AtHorizon => "At the event horizon",
            HorizonStatus::Inside => "Inside the event horizon",
        }
    }

    // True only when light (and orbits) can still escape from here
    #[inline]
    pub fn is_outside(&self) -> bool {
        matches!(self, HorizonStatus::Outside)
    }
}

// Classify a distance against the Schwarzschild radius.
//
// Math: r and r_s are both results of floating-point arithmetic, so exact
// equality would almost never fire. Anything within HORIZON_REL_TOLERANCE
// of r_s counts as AtHorizon; strictly beyond the band is Outside or Inside.
pub fn horizon_status(radius_m: f64, schwarzschild_radius_m: f64) -> Result<HorizonStatus> {
    let r = require_positive("radius_m", radius_m)?;
    let rs = require_positive("schwarzschild_radius_m", schwarzschild_radius_m)?;

    let band = HORIZON_REL_TOLERANCE * rs;
    if r < rs - band {
        Ok(HorizonStatus::Inside)
    } else if r > rs + band {
        Ok(HorizonStatus::Outside)
    } else {
        Ok(HorizonStatus::AtHorizon)
    }
}

// ============================================================================
// TIDAL SEVERITY
// ============================================================================

// How violent the head-to-feet stretch is, ordered from calm to lethal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TidalSeverity {
    Negligible,
    Mild,
    Significant,
    Extreme,
}

impl TidalSeverity {
    // Display name for reports
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            TidalSeverity::Negligible => "Negligible",
            TidalSeverity::Mild => "Mild",
            TidalSeverity::Significant => "Significant",
            TidalSeverity::Extreme => "Extreme",
        }
    }

    // One-sentence explanation used in the educational report
    pub fn description(&self) -> &'static str {
        match self {
            TidalSeverity::Negligible => {
                "The pull on your head and feet is essentially identical; \
                 you would not notice any stretching here."
            }
            TidalSeverity::Mild => {
                "A distinct head-to-feet pull difference, comparable to what \
                 you feel standing on Earth. Uncomfortable, survivable."
            }
            TidalSeverity::Significant => {
                "Your feet are pulled far harder than your head. The stress \
                 is well beyond anything a human frame tolerates for long."
            }
            TidalSeverity::Extreme => {
                "Full spaghettification regime: the differential pull would \
                 tear any known material apart."
            }
        }
    }
}

// Bucket a tidal acceleration difference into a severity bin.
//
// Zero is a legitimate input (the far-field difference underflows) and maps
// to Negligible; +inf (numerically possible just outside tiny horizons)
// maps to Extreme. Only NaN and negative differences are rejected.
pub fn tidal_severity(delta_g: f64) -> Result<TidalSeverity> {
    let dg = require_non_negative("delta_g", delta_g)?;

    let ratio = dg / EARTH_SURFACE_GRAVITY;
    Ok(if ratio < NEGLIGIBLE_BELOW {
        TidalSeverity::Negligible
    } else if ratio < MILD_BELOW {
        TidalSeverity::Mild
    } else if ratio < SIGNIFICANT_BELOW {
        TidalSeverity::Significant
    } else {
        TidalSeverity::Extreme
    })
}

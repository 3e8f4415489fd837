// Input value types for the calculator

use crate::error::{require_positive, Result};
use crate::units;

// Baseline head-to-feet span for tidal estimates, meters. Roughly a tall
// human; callers override it to model probes or tethers instead.
pub const DEFAULT_BODY_HEIGHT_M: f64 = 2.0;

// ============================================================================
// BLACK HOLE SPEC
// ============================================================================

// Construction is the validation boundary: once a BlackHoleSpec or an
// ObservationPoint exists, its numbers are known to be positive and finite,
// and everything downstream can lean on that without re-checking. Fields
// are private so nothing can be mutated back into an invalid state.

// A non-rotating (Schwarzschild) black hole, characterized by mass alone.
// Everything else (horizon radius, surface gravity profile) is derived on
// demand rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHoleSpec {
    mass_kg: f64,
}

impl BlackHoleSpec {
    // Build from a mass in kilograms
    pub fn new(mass_kg: f64) -> Result<Self> {
        Ok(Self {
            mass_kg: require_positive("mass_kg", mass_kg)?,
        })
    }

    // Build from a mass in solar masses, the unit the catalog and the CLI
    // speak. Validation happens after conversion, in SI.
    pub fn from_solar_masses(mass_solar: f64) -> Result<Self> {
        Self::new(units::solar_masses_to_kg(mass_solar))
    }

    #[inline]
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    #[inline]
    pub fn mass_solar(&self) -> f64 {
        units::kg_to_solar_masses(self.mass_kg)
    }
}

// ============================================================================
// OBSERVATION POINT
// ============================================================================

// Where the observer hovers: a distance from the center of mass, plus the
// head-to-feet height used for the tidal difference. Distances are measured
// from the singularity, not from the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationPoint {
    distance_m: f64,
    height_m: f64,
}

impl ObservationPoint {
    // Observer with the default human height
    pub fn new(distance_m: f64) -> Result<Self> {
        Self::with_height(distance_m, DEFAULT_BODY_HEIGHT_M)
    }

    pub fn with_height(distance_m: f64, height_m: f64) -> Result<Self> {
        Ok(Self {
            distance_m: require_positive("distance_m", distance_m)?,
            height_m: require_positive("height_m", height_m)?,
        })
    }

    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    #[inline]
    pub fn height_m(&self) -> f64 {
        self.height_m
    }
}

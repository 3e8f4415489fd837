// Unit conversions for the presentation layer

use serde::Serialize;

use crate::constants::{
    EARTH_SURFACE_GRAVITY, METERS_PER_KILOMETER, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_YEAR, SOLAR_MASS_KG,
};

// ============================================================================
// MASS
// ============================================================================

// The physics core works exclusively in SI. These helpers translate between
// SI and the units people actually quote (solar masses, kilometers, multiples
// of Earth surface gravity). All conversions are pure linear scalings meant
// for display, so they accept whatever f64 they are given.

#[inline]
pub fn solar_masses_to_kg(mass_solar: f64) -> f64 {
    mass_solar * SOLAR_MASS_KG
}

#[inline]
pub fn kg_to_solar_masses(mass_kg: f64) -> f64 {
    mass_kg / SOLAR_MASS_KG
}

// ============================================================================
// LENGTH
// ============================================================================

#[inline]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

#[inline]
pub fn km_to_meters(km: f64) -> f64 {
    km * METERS_PER_KILOMETER
}

// ============================================================================
// ACCELERATION
// ============================================================================

// How many times Earth's surface gravity an acceleration is.
// This is the number that makes tidal stretch tangible in a report.
#[inline]
pub fn earth_gravity_multiples(accel_ms2: f64) -> f64 {
    accel_ms2 / EARTH_SURFACE_GRAVITY
}

// ============================================================================
// TIME
// ============================================================================

// An orbital period rendered at every human-friendly scale at once.
// Seconds are exact; the rest are derived views of the same number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodBreakdown {
    pub seconds: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

impl PeriodBreakdown {
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds,
            hours: seconds / SECONDS_PER_HOUR,
            days: seconds / SECONDS_PER_DAY,
            years: seconds / SECONDS_PER_YEAR,
        }
    }
}

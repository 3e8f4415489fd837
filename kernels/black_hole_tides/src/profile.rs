// Radial profile generation for the frontend charts

use log::debug;
use serde::Serialize;

use crate::classify::{HorizonStatus, TidalSeverity};
use crate::error::{require_positive, Error, Result};
use crate::gravity;
use crate::report;
use crate::types::{BlackHoleSpec, ObservationPoint};

// ============================================================================
// PROFILE TYPES
// ============================================================================

// A profile is the radius swept over a linear range with the full calculation
// evaluated at each sample: the table behind the gravity-versus-distance and
// tide-versus-distance charts. Rows carry classifications too, so a chart can
// band the severity regimes without re-deriving the cutoffs client-side.

// One sampled radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileRow {
    pub radius_m: f64,
    pub radius_rs_multiples: f64,
    pub gravity_ms2: f64,
    pub tidal_delta_ms2: f64,
    pub tidal_severity: TidalSeverity,
    pub horizon_status: HorizonStatus,
    pub orbital_period_s: f64,
}

// The whole sweep plus the parameters that produced it, serialized as one
// JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct RadialProfile {
    pub generator_version: &'static str,
    pub mass_kg: f64,
    pub mass_solar: f64,
    pub schwarzschild_radius_m: f64,
    pub height_m: f64,
    pub r_min_m: f64,
    pub r_max_m: f64,
    pub samples: usize,
    pub rows: Vec<ProfileRow>,
}

// ============================================================================
// SWEEP
// ============================================================================

// Generate a radial profile with `samples` evenly spaced radii from r_min_m
// to r_max_m inclusive.
//
// The progress callback receives the number of completed rows; CLI callers
// hook a progress bar into it, library callers pass a no-op closure.
pub fn radial_profile(
    spec: &BlackHoleSpec,
    height_m: f64,
    r_min_m: f64,
    r_max_m: f64,
    samples: usize,
    mut progress: impl FnMut(u64),
) -> Result<RadialProfile> {
    let h = require_positive("height_m", height_m)?;
    let r_min = require_positive("r_min_m", r_min_m)?;
    require_positive("r_max_m", r_max_m)?;
    // The span check doubles as the ordering check
    let span = require_positive("r_max_m - r_min_m", r_max_m - r_min_m)?;
    if samples < 2 {
        return Err(Error::InvalidInput {
            field: "samples",
            constraint: "must be at least 2 to span the range",
            value: samples as f64,
        });
    }

    debug!(
        "radial_profile: {} samples over [{:.4e}, {:.4e}] m",
        samples, r_min_m, r_max_m
    );

    let rs = gravity::schwarzschild_radius(spec.mass_kg())?;
    let mut rows = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f64 / (samples - 1) as f64;
        let r = r_min + t * span;
        let point = ObservationPoint::with_height(r, h)?;
        let result = report::evaluate(spec, &point)?;
        rows.push(ProfileRow {
            radius_m: r,
            radius_rs_multiples: result.distance_rs_multiples,
            gravity_ms2: result.gravity_ms2,
            tidal_delta_ms2: result.tidal_delta_ms2,
            tidal_severity: result.tidal_severity,
            horizon_status: result.horizon_status,
            orbital_period_s: result.orbital_period_s,
        });
        progress((i + 1) as u64);
    }

    Ok(RadialProfile {
        generator_version: env!("CARGO_PKG_VERSION"),
        mass_kg: spec.mass_kg(),
        mass_solar: spec.mass_solar(),
        schwarzschild_radius_m: rs,
        height_m: h,
        r_min_m,
        r_max_m,
        samples,
        rows,
    })
}

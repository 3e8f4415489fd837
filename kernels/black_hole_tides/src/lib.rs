// kernels/black_hole_tides/src/lib.rs

// Black Hole Tides Physics Core
//
// This library implements the closed-form physics behind the black hole
// explorer: Schwarzschild horizon radius, local gravitational acceleration,
// head-to-feet tidal stretch, and Keplerian orbital periods, plus the
// qualitative classifications the educational frontend displays. All
// computations use f64 and validate their inputs at the public boundary.

pub mod catalog;
pub mod classify;
pub mod constants;
pub mod error;
pub mod gravity;
pub mod profile;
pub mod report;
pub mod types;
pub mod units;

pub use catalog::{KnownBlackHole, KNOWN_BLACK_HOLES};
pub use classify::{horizon_status, tidal_severity, HorizonStatus, TidalSeverity};
// The Result alias stays at error::Result so a glob import of this crate
// does not shadow the prelude Result in binaries.
pub use error::Error;
pub use gravity::{
    gravitational_acceleration, orbital_period, schwarzschild_radius, tidal_acceleration,
};
pub use profile::{radial_profile, ProfileRow, RadialProfile};
pub use report::{evaluate, CalculationResult};
pub use types::{BlackHoleSpec, ObservationPoint, DEFAULT_BODY_HEIGHT_M};
pub use units::PeriodBreakdown;

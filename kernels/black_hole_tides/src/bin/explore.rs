// Black Hole Explorer CLI
//
// Evaluates gravity, tidal stretch and orbital motion for one observer
// hovering near a black hole, then prints an annotated report (or, with
// --json, the raw result for piping into other tools).
//
// Examples:
//   cargo run --bin explore -- --black-hole sgr-a --rs-multiple 3.0
//   cargo run --bin explore -- --mass-solar 10 --distance-km 100
//   cargo run --bin explore -- --list

use clap::Parser;

use black_hole_tides::*;

/// CLI arguments for the explorer
#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Evaluate gravity, tides and orbits near a black hole", long_about = None)]
struct Args {
    /// Named black hole from the catalog (see --list)
    #[arg(short, long, conflicts_with = "mass_solar")]
    black_hole: Option<String>,

    /// Custom black hole mass in solar masses
    #[arg(short, long)]
    mass_solar: Option<f64>,

    /// Distance from the center, in kilometers
    #[arg(short, long, conflicts_with = "rs_multiple")]
    distance_km: Option<f64>,

    /// Distance as a multiple of the Schwarzschild radius (default 2.0)
    #[arg(short, long)]
    rs_multiple: Option<f64>,

    /// Head-to-feet height for the tidal estimate, in meters
    #[arg(long, default_value_t = DEFAULT_BODY_HEIGHT_M)]
    height: f64,

    /// Print the result as pretty JSON instead of a report
    #[arg(long)]
    json: bool,

    /// List the catalog of known black holes and exit
    #[arg(long)]
    list: bool,
}

/// Resolve the mass (and a display label) from --black-hole or --mass-solar
fn resolve_source(args: &Args) -> Result<(String, f64), String> {
    if let Some(slug) = &args.black_hole {
        let key = slug.to_lowercase();
        match catalog::find(&key) {
            Some(bh) => Ok((bh.name.to_string(), bh.mass_solar)),
            None => {
                let known: Vec<&str> = KNOWN_BLACK_HOLES.iter().map(|bh| bh.slug).collect();
                Err(format!(
                    "Unknown black hole: '{}'. Must be one of: {}",
                    slug,
                    known.join(", ")
                ))
            }
        }
    } else if let Some(mass_solar) = args.mass_solar {
        Ok((format!("Custom ({} solar masses)", mass_solar), mass_solar))
    } else {
        Err("Provide a black hole: --black-hole <slug> or --mass-solar <mass>".to_string())
    }
}

/// Format a solar-mass count compactly (plain below 10^4, scientific above)
fn format_solar_masses(mass_solar: f64) -> String {
    if mass_solar < 1.0e4 {
        format!("{}", mass_solar)
    } else {
        format!("{:.1e}", mass_solar)
    }
}

fn print_catalog() {
    println!("Known black holes:");
    for bh in &KNOWN_BLACK_HOLES {
        println!(
            "  {:<10} {:<18} {:>8} solar masses",
            bh.slug,
            bh.name,
            format_solar_masses(bh.mass_solar)
        );
    }
}

/// Print the annotated educational report
fn print_report(label: &str, result: &CalculationResult) {
    let bar = "=".repeat(72);

    println!("{}", bar);
    println!("  BLACK HOLE EXPLORER");
    println!("{}", bar);
    println!();
    println!("Object:              {}", label);
    println!(
        "Mass:                {:.4e} kg ({} solar masses)",
        result.mass_kg,
        format_solar_masses(result.mass_solar)
    );
    println!(
        "Schwarzschild r_s:   {:.3} km",
        units::meters_to_km(result.schwarzschild_radius_m)
    );
    println!(
        "Observer distance:   {:.3} km ({:.3} x r_s)",
        units::meters_to_km(result.distance_m),
        result.distance_rs_multiples
    );
    println!();

    println!("Horizon status:      {}", result.horizon_status.name());
    if !result.horizon_status.is_outside() {
        println!("  WARNING: at or below r_s nothing escapes, light included.");
    }
    println!();

    println!("Gravitational acceleration at r:");
    println!(
        "  g = {:.4e} m/s^2  ({:.4e} x Earth surface gravity)",
        result.gravity_ms2, result.gravity_earth_multiples
    );
    println!();

    println!("Tidal stretch across {:.2} m:", result.height_m);
    println!(
        "  dg = {:.4e} m/s^2  ({:.4e} x Earth surface gravity)",
        result.tidal_delta_ms2, result.tidal_earth_multiples
    );
    println!("  Assessment: {}", result.tidal_severity.name());
    println!("  {}", result.tidal_severity.description());
    println!();

    if result.horizon_status.is_outside() {
        let period = PeriodBreakdown::from_seconds(result.orbital_period_s);
        println!("Circular orbit at r (Keplerian):");
        println!("  P = {:.4e} s", period.seconds);
        println!("    = {:.4e} hours", period.hours);
        println!("    = {:.4e} days", period.days);
        println!("    = {:.4e} years", period.years);
    } else {
        println!("Circular orbit at r: none. At or inside the horizon the");
        println!("  Keplerian period is a formula without an orbit behind it.");
    }
    println!("{}", bar);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        print_catalog();
        return Ok(());
    }

    let (label, mass_solar) = resolve_source(&args)?;
    let spec = BlackHoleSpec::from_solar_masses(mass_solar)?;
    let rs = schwarzschild_radius(spec.mass_kg())?;

    // Explicit kilometers win; otherwise distance is a multiple of r_s,
    // defaulting to a comfortable 2x
    let distance_m = match args.distance_km {
        Some(km) => units::km_to_meters(km),
        None => args.rs_multiple.unwrap_or(2.0) * rs,
    };
    let point = ObservationPoint::with_height(distance_m, args.height)?;
    let result = evaluate(&spec, &point)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&label, &result);
    Ok(())
}

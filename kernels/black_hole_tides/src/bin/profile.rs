// Radial Profile Generator CLI
//
// Sweeps the radius across a chosen band around a black hole and writes the
// gravity/tide table as a JSON artifact for the frontend charts.
//
// Run with: cargo run --release --bin profile -- --black-hole cygnus-x1

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use black_hole_tides::*;

/// CLI arguments for the profile generator
#[derive(Parser, Debug)]
#[command(name = "profile")]
#[command(about = "Generate a radial gravity/tide profile as JSON", long_about = None)]
struct Args {
    /// Named black hole from the catalog
    #[arg(short, long, conflicts_with = "mass_solar")]
    black_hole: Option<String>,

    /// Custom black hole mass in solar masses
    #[arg(short, long)]
    mass_solar: Option<f64>,

    /// Sweep start, in multiples of r_s
    #[arg(long, default_value_t = 1.0)]
    from_rs: f64,

    /// Sweep end, in multiples of r_s
    #[arg(long, default_value_t = 50.0)]
    to_rs: f64,

    /// Number of radial samples
    #[arg(short, long, default_value_t = 256,
          value_parser = clap::value_parser!(u64).range(2..=1_000_000))]
    samples: u64,

    /// Head-to-feet height for the tidal column, in meters
    #[arg(long, default_value_t = DEFAULT_BODY_HEIGHT_M)]
    height: f64,

    /// Output path for the JSON document
    #[arg(short, long, default_value = "radial_profile.json")]
    output: PathBuf,
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let (label, mass_solar) = resolve_source(&args)?;
    let spec = BlackHoleSpec::from_solar_masses(mass_solar)?;

    // The sweep band is given in r_s multiples; the core wants meters
    let rs = schwarzschild_radius(spec.mass_kg())?;
    let r_min = args.from_rs * rs;
    let r_max = args.to_rs * rs;

    // Print configuration
    println!("\nRadial Profile Generator");
    println!("=======================================");
    println!("  Object: {}", label);
    println!("  Mass: {:.4e} kg", spec.mass_kg());
    println!("  r_s: {:.4e} m", rs);
    println!("  Range: {:.2} - {:.2} x r_s", args.from_rs, args.to_rs);
    println!("  Samples: {}", args.samples);
    println!("  Height: {:.2} m", args.height);
    println!("=======================================\n");

    // Create progress bar
    let pb = ProgressBar::new(args.samples);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%)")?
            .progress_chars("█▓▒░ "),
    );

    let profile = radial_profile(
        &spec,
        args.height,
        r_min,
        r_max,
        args.samples as usize,
        |rows| {
            pb.set_position(rows);
        },
    )?;
    pb.finish_with_message("✓ Sweep complete");

    // Save the document
    let json = serde_json::to_string_pretty(&profile)?;
    fs::write(&args.output, &json)?;

    println!(
        "\n✓ Wrote {} rows to {} ({:.1} KB)\n",
        profile.rows.len(),
        args.output.display(),
        json.len() as f64 / 1024.0
    );
    Ok(())
}

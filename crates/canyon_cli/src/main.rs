use std::path::PathBuf;

use canyon_core::{FacilityMap, GeodeticFix, MapScene, PlanePoint, SiteConfig, StaticProvider};
use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing::{info, warn};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "canyon",
    about = "Facility map of the canyon: markers, GPS conversion and snow-gun placement",
    long_about = "Loads a site configuration, optionally takes a GPS fix, and prints the\n\
                  map scene (backdrop, markers, current location) as JSON."
)]
struct Cli {
    /// Site configuration file (JSON). Built-in canyon site when absent.
    #[arg(long, global = true, env = "CANYON_MAP_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the map scene
    Scene {
        #[command(flatten)]
        fix: FixArgs,
        /// Place a snow gun at the GPS fix before printing
        #[arg(long, requires = "lat")]
        place_snow_gun: bool,
    },
    /// Convert a GPS fix to plane coordinates
    Convert {
        #[command(flatten)]
        fix: FixArgs,
    },
    /// Validate the site configuration
    CheckConfig,
    /// Print the effective site configuration
    PrintConfig,
}

#[derive(clap::Args)]
struct FixArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

impl FixArgs {
    fn fix(&self) -> Option<GeodeticFix> {
        Some(GeodeticFix::new(self.lat?, self.lng?))
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn load_config(path: Option<&PathBuf>) -> miette::Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_path(path).into_diagnostic(),
        None => Ok(SiteConfig::default()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

async fn locate(map: &mut FacilityMap, fix: Option<GeodeticFix>) {
    let provider = match fix {
        Some(fix) => StaticProvider::at(fix),
        None => StaticProvider::unavailable(),
    };
    map.locate(&provider).await;
}

// ── commands ───────────────────────────────────────────────────────

async fn scene_command(
    config: &SiteConfig,
    fix: Option<GeodeticFix>,
    place_snow_gun: bool,
) -> miette::Result<MapScene> {
    let mut map = config.build().into_diagnostic()?;
    if let Some(fix) = fix {
        locate(&mut map, Some(fix)).await;
    }
    if place_snow_gun && map.place_snow_gun_at_fix().is_none() {
        warn!("no usable location; snow gun not placed");
    }
    Ok(map.scene())
}

async fn convert_command(
    config: &SiteConfig,
    fix: Option<GeodeticFix>,
) -> miette::Result<PlanePoint> {
    let mut map = config.build().into_diagnostic()?;
    locate(&mut map, fix).await;
    match map.location().point() {
        Some(point) => Ok(point),
        None => miette::bail!("a finite --lat and --lng are required"),
    }
}

/// Returns the number of seed markers of a valid site.
fn check_config_command(config: &SiteConfig) -> miette::Result<usize> {
    let map = config.build().into_diagnostic()?;
    info!(
        site = %config.name,
        seed_markers = map.markers().len(),
        "site config is valid"
    );
    Ok(map.markers().len())
}

// ── main ───────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = tracing_subscriber::fmt::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "info"
                        .parse::<tracing_subscriber::filter::Directive>()
                        .into_diagnostic()?,
                )
                .from_env_lossy(),
        )
        .try_init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Scene {
            fix,
            place_snow_gun,
        } => print_json(&scene_command(&config, fix.fix(), place_snow_gun).await?)?,
        Commands::Convert { fix } => print_json(&convert_command(&config, fix.fix()).await?)?,
        Commands::CheckConfig => {
            check_config_command(&config)?;
        }
        Commands::PrintConfig => {
            print_json(&config)?;
        }
    }

    Ok(())
}

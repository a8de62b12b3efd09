//! Ad-hoc ephemeris, geometry and time queries against the local kernel set.
//!
//! Kernels are expected under `data/spice/`; run `fetch_kernels` once to
//! populate it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use spicebind::{
    AberrationCorrection, EphemerisQuery, EpochKind, KernelCategory, TimeSystem, Toolkit,
    UtcFormat, kernels,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Query the local SPICE kernel set")]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Position and velocity of a target relative to an observer
    State {
        /// Target body (name or NAIF id string, e.g. MARS BARYCENTER)
        target: String,
        /// Observing body
        observer: String,
        /// Epoch string, UTC unless suffixed otherwise (e.g. "2030-01-02 12:00 TDB")
        epoch: String,
        /// Reference frame of the returned vectors
        #[arg(long, default_value = "J2000")]
        frame: String,
        /// Aberration correction (NONE, LT, LT+S, CN, CN+S, XLT, ...)
        #[arg(long, default_value = "LT+S")]
        correction: AberrationCorrection,
    },
    /// Position of a target relative to an observer
    Position {
        target: String,
        observer: String,
        epoch: String,
        #[arg(long, default_value = "J2000")]
        frame: String,
        #[arg(long, default_value = "LT+S")]
        correction: AberrationCorrection,
    },
    /// Parse an epoch string and report it across time scales
    Time {
        epoch: String,
    },
    /// List the loaded kernel table
    Kernels,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let toolkit = Toolkit::shared();
    kernels::load_defaults(toolkit).context("loading the default kernel set")?;

    match &cli.command {
        Command::State {
            target,
            observer,
            epoch,
            frame,
            correction,
        } => {
            let et = toolkit.parse_time(epoch)?;
            let state = toolkit.state(
                &EphemerisQuery {
                    target,
                    observer,
                    frame,
                    correction: *correction,
                },
                et,
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("epoch           : {epoch} (et = {et:.6})");
                println!(
                    "position (km)   : [{:.6}, {:.6}, {:.6}]",
                    state.position_km[0], state.position_km[1], state.position_km[2]
                );
                println!(
                    "velocity (km/s) : [{:.9}, {:.9}, {:.9}]",
                    state.velocity_km_s[0], state.velocity_km_s[1], state.velocity_km_s[2]
                );
                println!("light time (s)  : {:.6}", state.light_time_seconds);
            }
        }
        Command::Position {
            target,
            observer,
            epoch,
            frame,
            correction,
        } => {
            let et = toolkit.parse_time(epoch)?;
            let position = toolkit.position(
                &EphemerisQuery {
                    target,
                    observer,
                    frame,
                    correction: *correction,
                },
                et,
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&position)?);
            } else {
                println!("epoch           : {epoch} (et = {et:.6})");
                println!(
                    "position (km)   : [{:.6}, {:.6}, {:.6}]",
                    position.position_km[0], position.position_km[1], position.position_km[2]
                );
                println!("light time (s)  : {:.6}", position.light_time_seconds);
            }
        }
        Command::Time { epoch } => {
            let et = toolkit.parse_time(epoch)?;
            let utc = toolkit.utc_string(et, UtcFormat::IsoCalendar, 3)?;
            let tai = toolkit.convert_time(et, TimeSystem::Et, TimeSystem::Tai)?;
            let jed = toolkit.convert_time(et, TimeSystem::Et, TimeSystem::Jed)?;
            let delta = toolkit.delta_et(et, EpochKind::Et)?;
            if cli.json {
                let record = json!({
                    "et": et,
                    "utc": utc,
                    "tai": tai,
                    "julian_ephemeris_date": jed,
                    "delta_et": delta,
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("et (TDB s)      : {et:.6}");
                println!("utc             : {utc}");
                println!("tai (s)         : {tai:.6}");
                println!("JED (days)      : {jed:.8}");
                println!("et - utc (s)    : {delta:.6}");
            }
        }
        Command::Kernels => {
            let count = toolkit.kernel_count(KernelCategory::All)?;
            let mut entries = Vec::with_capacity(count);
            for index in 0..count {
                if let Some(data) = toolkit.kernel_data(index, KernelCategory::All)? {
                    entries.push(data);
                }
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{count} kernel(s) loaded:");
                for entry in entries {
                    println!("  - {:<6} {}", entry.kind, entry.file);
                }
            }
        }
    }

    Ok(())
}

//! radiogcc-cli — Command-line interface for radiogcc-core
//!
//! This binary resolves the broadcast country identity (Global Country Code)
//! of an RDS/FM or DAB radio service from the listener's believed location
//! and the received signal, and can inspect the underlying country table.
//!
//! Usage examples
//! --------------
//!
//! - Show table statistics
//!   $ radiogcc stats
//!
//! - List all countries
//!   $ radiogcc countries
//!
//! - Show one country's record (case-insensitive)
//!   $ radiogcc country ch
//!
//! - Resolve a GCC from an ISO location and an RDS PI code
//!   $ radiogcc resolve --country CH --pi 4479
//!
//! - Resolve from an ECC and a DAB SId, as JSON
//!   $ radiogcc resolve --ecc E0 --sid D479 --json
//!
//! By default the table bundled with `radiogcc-core` is used; point
//! `--input <path>` at a countries CSV file to resolve against custom data.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use radiogcc_core::{CountryDirectory, Resolver};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();

    let directory = match &args.input {
        Some(path) => CountryDirectory::from_path(path)
            .with_context(|| format!("failed to load country table from {path}"))?,
        None => CountryDirectory::bundled().clone(),
    };

    match args.command {
        Commands::Stats => {
            let stats = directory.stats();
            println!("Country table statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Broadcast ids: {}", stats.broadcast_ids);
        }

        Commands::Countries => {
            for record in directory.records() {
                let ids: Vec<String> = record
                    .country_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                println!(
                    "{}  ecc {}  ids {}",
                    record.iso_code.to_uppercase(),
                    record.ecc,
                    ids.join(";")
                );
            }
        }

        Commands::Country { code } => match directory.by_iso_code(&code) {
            Some(record) => {
                println!("Country: {}", record.iso_code.to_uppercase());
                println!("ECC: {}", record.ecc);
                let ids: Vec<String> = record
                    .country_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                println!("Country ids: {}", ids.join(";"));
                println!("Nearby:");
                for adjacency in &record.nearby {
                    println!(
                        "- {} when id {}",
                        adjacency.iso_code.to_uppercase(),
                        adjacency.country_id
                    );
                }
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Resolve {
            country,
            ecc,
            pi,
            sid,
            json,
        } => {
            let mut resolver = Resolver::new(&directory);
            if let Some(country) = &country {
                resolver.set_location_iso_code(country)?;
            }
            if let Some(ecc) = &ecc {
                resolver.set_location_ecc(ecc)?;
            }
            if let Some(pi) = &pi {
                resolver.set_signal_rds_pi(pi)?;
            }
            if let Some(sid) = &sid {
                resolver.set_signal_dab_sid(sid)?;
            }

            let matches = resolver.resolve_gcc()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!(
                        "{}  {}  (id {}, ecc {})",
                        m.gcc, m.iso_country_code, m.broadcast_country_id, m.ecc
                    );
                }
            }
        }
    }

    Ok(())
}

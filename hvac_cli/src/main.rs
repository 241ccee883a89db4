//! # Habitat HVAC CLI
//!
//! Thin entry points over `hvac_core`: a demo compute command, room
//! discovery, and equipment-catalog validation. All resolution logic lives
//! in the library; this binary only presents results and errors and picks
//! the exit code.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use hvac_core::catalog::{validate_catalog, CATALOG_DOC};
use hvac_core::rooms::SpecOverrides;
use hvac_core::store::DocumentStore;
use hvac_core::tables::RatesCache;
use hvac_core::{HvacResult, Registry};

#[derive(Parser)]
#[command(name = "hvac_cli", version, about = "Habitat room HVAC sizing from design documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a room report for a registered room type
    Compute {
        /// Registered room type id (see `rooms`)
        type_id: String,
        /// Override the room name
        #[arg(long)]
        name: Option<String>,
        /// Override the occupant count
        #[arg(long)]
        occupants: Option<u32>,
        /// Override the life-stage/phase tag
        #[arg(long)]
        phase: Option<String>,
        /// Override the floor area [m2]
        #[arg(long = "area")]
        floor_area_m2: Option<f64>,
        /// Override the ceiling height [m]
        #[arg(long = "height")]
        height_m: Option<f64>,
        /// Attach free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List registered room types and their declared activity keys
    Rooms,
    /// Validate the equipment catalog document
    Validate {
        /// Catalog document name or path
        #[arg(default_value = CATALOG_DOC)]
        name: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> HvacResult<()> {
    let store = Arc::new(DocumentStore::new());
    let rates = Arc::new(RatesCache::new(Arc::clone(&store)));
    let registry = Registry::with_defaults(Arc::clone(&rates));

    match cli.command {
        Command::Compute {
            type_id,
            name,
            occupants,
            phase,
            floor_area_m2,
            height_m,
            notes,
        } => {
            let overrides = SpecOverrides {
                name,
                occupants,
                phase,
                floor_area_m2,
                height_m,
                notes,
            };
            let report = registry.compute(&type_id, &overrides)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serializes")
            );
        }
        Command::Rooms => {
            let declared = rates.list_available_rooms(false)?;
            println!("Registered room types:");
            for type_id in registry.known_types() {
                println!("  {type_id}");
            }
            println!();
            println!("Design document rate tables (room -> activities):");
            for (room, activities) in declared {
                if activities.is_empty() {
                    println!("  {room}: (global defaults only)");
                } else {
                    println!("  {room}: {}", activities.join(", "));
                }
            }
        }
        Command::Validate { name } => {
            let catalog = store.get(&name, true)?;
            let errors = validate_catalog(&catalog);
            if errors.is_empty() {
                println!("[OK] Equipment catalog structure looks valid.");
            } else {
                println!("[FAIL] Equipment catalog validation issues detected:");
                for err in &errors {
                    println!("  - {err}");
                }
                return Err(hvac_core::HvacError::schema(
                    name,
                    format!("{} validation issue(s)", errors.len()),
                ));
            }
        }
    }
    Ok(())
}

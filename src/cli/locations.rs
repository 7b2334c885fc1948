//! Storage-location subcommands.

use std::path::Path;

use clap::{Args, Subcommand, ValueEnum};
use tabled::{Table, Tabled};
use uuid::Uuid;

use toolcrib::store::{FileBackend, LocationKind, LocationStore, StorageLocation};

#[derive(Debug, Args)]
pub(crate) struct LocationCommand {
    #[command(subcommand)]
    command: LocationSubcommand,
}

#[derive(Debug, Subcommand)]
enum LocationSubcommand {
    /// List all storage locations
    List,

    /// Add a storage location
    Add(AddArgs),

    /// Delete a storage location by id
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Location display name
    name: String,

    /// Kind of place
    #[arg(long, value_enum, default_value_t = KindArg::Other)]
    kind: KindArg,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Record id to delete
    id: Uuid,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Warehouse,
    Vehicle,
    Jobsite,
    Other,
}

impl From<KindArg> for LocationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Warehouse => LocationKind::Warehouse,
            KindArg::Vehicle => LocationKind::Vehicle,
            KindArg::Jobsite => LocationKind::Jobsite,
            KindArg::Other => LocationKind::Other,
        }
    }
}

#[derive(Debug, Tabled)]
struct LocationRow {
    #[tabled(rename = "Id")]
    id: Uuid,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Kind")]
    kind: String,
}

pub(crate) fn run(command: LocationCommand, data_dir: &Path) -> Result<(), String> {
    let mut store = LocationStore::new(FileBackend::new(data_dir));

    match command.command {
        LocationSubcommand::List => {
            let rows: Vec<LocationRow> = store
                .get_all()
                .map_err(|error| error.to_string())?
                .into_iter()
                .map(|location| LocationRow {
                    id: location.id,
                    name: location.name,
                    kind: format!("{:?}", location.kind).to_lowercase(),
                })
                .collect();

            println!("{}", Table::new(rows));
            Ok(())
        }
        LocationSubcommand::Add(args) => {
            let location = StorageLocation::new(args.name, args.kind.into());
            let name = location.name.clone();

            store.save(location).map_err(|error| error.to_string())?;

            println!("saved {name}");
            Ok(())
        }
        LocationSubcommand::Delete(args) => {
            store.delete(args.id).map_err(|error| error.to_string())?;

            println!("deleted {}", args.id);
            Ok(())
        }
    }
}

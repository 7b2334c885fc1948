//! Command-line interface
//!
//! Thin shell over the library: each subcommand opens file-backed stores
//! under `--data-dir`, performs one operation, and prints the outcome.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod exchange;
mod label;
mod locations;
mod products;
mod team;

#[derive(Debug, Parser)]
#[command(
    name = "toolcrib",
    about = "Inventory tracking for small field-service teams",
    long_about = None
)]
pub(crate) struct Cli {
    /// Directory holding the inventory data files
    #[arg(
        long,
        env = "TOOLCRIB_DATA_DIR",
        default_value = "toolcrib-data",
        global = true
    )]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage products
    Product(products::ProductCommand),

    /// Manage storage locations
    Location(locations::LocationCommand),

    /// Manage the team roster
    Team(team::TeamCommand),

    /// Import products from CSV or restore from a JSON manifest
    Import(exchange::ImportCommand),

    /// Export the JSON manifest or the CSV template
    Export(exchange::ExportCommand),

    /// Render a product identification label as SVG
    Label(label::LabelArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => products::run(command, &self.data_dir),
            Commands::Location(command) => locations::run(command, &self.data_dir),
            Commands::Team(command) => team::run(command, &self.data_dir),
            Commands::Import(command) => exchange::run_import(command, &self.data_dir),
            Commands::Export(command) => exchange::run_export(command, &self.data_dir),
            Commands::Label(args) => label::run(args, &self.data_dir),
        }
    }
}

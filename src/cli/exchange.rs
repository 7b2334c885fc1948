//! Import and export subcommands.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Args, Subcommand};

use toolcrib::{
    import::{
        CSV_TEMPLATE, ParseMode, export_file_name, export_manifest, import_manifest,
        import_products_csv,
    },
    store::{FileBackend, LocationStore, ProductStore},
};

#[derive(Debug, Args)]
pub(crate) struct ImportCommand {
    #[command(subcommand)]
    command: ImportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ImportSubcommand {
    /// Merge a CSV file into the product store, keyed by SKU
    Csv(CsvArgs),

    /// Replace stored collections with the arrays in a JSON manifest
    Manifest(ManifestArgs),
}

#[derive(Debug, Args)]
struct CsvArgs {
    /// CSV file to import
    path: PathBuf,

    /// Reject malformed rows instead of defaulting their values
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct ManifestArgs {
    /// Manifest file to import
    path: PathBuf,
}

#[derive(Debug, Args)]
pub(crate) struct ExportCommand {
    #[command(subcommand)]
    command: ExportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ExportSubcommand {
    /// Write the full JSON manifest
    Manifest(ExportManifestArgs),

    /// Write the CSV template with one sample row
    Template(ExportTemplateArgs),
}

#[derive(Debug, Args)]
struct ExportManifestArgs {
    /// Output path; defaults to a date-stamped name in the current
    /// directory
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ExportTemplateArgs {
    /// Output path
    #[arg(long, default_value = "inventory-template.csv")]
    out: PathBuf,
}

pub(crate) fn run_import(command: ImportCommand, data_dir: &Path) -> Result<(), String> {
    let mut products = ProductStore::new(FileBackend::new(data_dir));

    match command.command {
        ImportSubcommand::Csv(args) => {
            let text = fs::read_to_string(&args.path)
                .map_err(|error| format!("cannot read {}: {error}", args.path.display()))?;

            let mode = if args.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            };

            let summary = import_products_csv(&text, mode, &mut products)
                .map_err(|error| error.to_string())?;

            // Refresh after the merge, as the host view would.
            let total = products.get_all().map_err(|error| error.to_string())?.len();

            println!(
                "merged {} rows ({} created, {} updated); inventory now holds {} products",
                summary.total(),
                summary.created,
                summary.updated,
                total
            );
            Ok(())
        }
        ImportSubcommand::Manifest(args) => {
            let text = fs::read_to_string(&args.path)
                .map_err(|error| format!("cannot read {}: {error}", args.path.display()))?;

            let mut locations = LocationStore::new(FileBackend::new(data_dir));

            let summary = import_manifest(&text, &mut products, &mut locations)
                .map_err(|error| error.to_string())?;

            match summary.products_replaced {
                Some(count) => println!("replaced product collection: {count} records"),
                None => println!("manifest carried no products"),
            }
            match summary.locations_replaced {
                Some(count) => println!("replaced location list: {count} records"),
                None => println!("manifest carried no locations"),
            }
            Ok(())
        }
    }
}

pub(crate) fn run_export(command: ExportCommand, data_dir: &Path) -> Result<(), String> {
    match command.command {
        ExportSubcommand::Manifest(args) => {
            let products = ProductStore::new(FileBackend::new(data_dir));
            let locations = LocationStore::new(FileBackend::new(data_dir));

            let text =
                export_manifest(&products, &locations).map_err(|error| error.to_string())?;

            let out = args
                .out
                .unwrap_or_else(|| PathBuf::from(export_file_name(jiff::Zoned::now().date())));

            fs::write(&out, text)
                .map_err(|error| format!("cannot write {}: {error}", out.display()))?;

            println!("wrote {}", out.display());
            Ok(())
        }
        ExportSubcommand::Template(args) => {
            fs::write(&args.out, CSV_TEMPLATE)
                .map_err(|error| format!("cannot write {}: {error}", args.out.display()))?;

            println!("wrote {}", args.out.display());
            Ok(())
        }
    }
}

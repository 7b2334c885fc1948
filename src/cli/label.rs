//! Label rendering subcommand.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Args, ValueEnum};

use toolcrib::{
    labels::{LabelOptions, LabelSize, render_label},
    store::{FileBackend, ProductStore},
};

#[derive(Debug, Args)]
pub(crate) struct LabelArgs {
    /// SKU of the product to label
    sku: String,

    /// Hide the product name line
    #[arg(long)]
    no_name: bool,

    /// Hide the SKU line
    #[arg(long)]
    no_sku: bool,

    /// Show the price line
    #[arg(long)]
    show_price: bool,

    /// Label size
    #[arg(long, value_enum, default_value_t = SizeArg::Medium)]
    size: SizeArg,

    /// Write the SVG here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for LabelSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Small => LabelSize::Small,
            SizeArg::Medium => LabelSize::Medium,
            SizeArg::Large => LabelSize::Large,
        }
    }
}

pub(crate) fn run(args: LabelArgs, data_dir: &Path) -> Result<(), String> {
    let store = ProductStore::new(FileBackend::new(data_dir));

    let product = store
        .get_by_sku(&args.sku)
        .map_err(|error| error.to_string())?
        .ok_or_else(|| format!("no product with sku {:?}", args.sku))?;

    let options = LabelOptions {
        show_name: !args.no_name,
        show_sku: !args.no_sku,
        show_price: args.show_price,
        size: args.size.into(),
    };

    let svg = render_label(&product, &options);

    match args.out {
        Some(path) => {
            fs::write(&path, svg)
                .map_err(|error| format!("cannot write {}: {error}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{svg}"),
    }

    Ok(())
}

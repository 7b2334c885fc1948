//! Product subcommands.

use std::path::Path;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use tabled::{Table, Tabled};
use uuid::Uuid;

use toolcrib::store::{FileBackend, Product, ProductStore};

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// List all products
    List,

    /// Add a product, or update the one with the same SKU
    Add(AddArgs),

    /// Show one product by SKU
    Get(GetArgs),

    /// Delete a product by id
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Stock-keeping unit, the natural key
    #[arg(long)]
    sku: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Category label
    #[arg(long)]
    category: Option<String>,

    /// Free-form description
    #[arg(long)]
    description: Option<String>,

    /// Units on hand
    #[arg(long, default_value_t = 0)]
    quantity: u32,

    /// Unit price
    #[arg(long, default_value_t = Decimal::ZERO)]
    price: Decimal,

    /// Storage location name; repeat for multiple
    #[arg(long = "location")]
    locations: Vec<String>,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Stock-keeping unit to look up
    sku: String,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Record id to delete
    id: Uuid,
}

#[derive(Debug, Tabled)]
struct ProductRow {
    #[tabled(rename = "SKU")]
    sku: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Qty")]
    quantity: u32,

    #[tabled(rename = "Price")]
    price: Decimal,

    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            price: product.price,
            updated: product.last_updated.to_string(),
        }
    }
}

pub(crate) fn run(command: ProductCommand, data_dir: &Path) -> Result<(), String> {
    let mut store = ProductStore::new(FileBackend::new(data_dir));

    match command.command {
        ProductSubcommand::List => {
            let rows: Vec<ProductRow> = store
                .get_all()
                .map_err(|error| error.to_string())?
                .into_iter()
                .map(ProductRow::from)
                .collect();

            println!("{}", Table::new(rows));
            Ok(())
        }
        ProductSubcommand::Add(args) => {
            // Keep the existing id when the SKU is already on file; ids are
            // immutable once created.
            let mut product = store
                .get_by_sku(&args.sku)
                .map_err(|error| error.to_string())?
                .unwrap_or_else(|| Product::new(args.sku.clone(), args.name.clone()));

            product.name = args.name;
            product.quantity = args.quantity;
            product.price = args.price;
            if let Some(category) = args.category {
                product.category = category;
            }
            if let Some(description) = args.description {
                product.description = description;
            }
            if !args.locations.is_empty() {
                product.locations = args.locations;
            }

            let sku = product.sku.clone();
            store.save(product).map_err(|error| error.to_string())?;

            println!("saved {sku}");
            Ok(())
        }
        ProductSubcommand::Get(args) => {
            let product = store
                .get_by_sku(&args.sku)
                .map_err(|error| error.to_string())?
                .ok_or_else(|| format!("no product with sku {:?}", args.sku))?;

            println!("id:          {}", product.id);
            println!("sku:         {}", product.sku);
            println!("name:        {}", product.name);
            println!("category:    {}", product.category);
            println!("quantity:    {}", product.quantity);
            println!("price:       {}", product.price);
            println!("description: {}", product.description);
            println!("locations:   {}", product.locations.join(", "));
            println!("updated:     {}", product.last_updated);
            Ok(())
        }
        ProductSubcommand::Delete(args) => {
            store.delete(args.id).map_err(|error| error.to_string())?;

            println!("deleted {}", args.id);
            Ok(())
        }
    }
}

//! Bulk CSV Import Merger
//!
//! Ingests a delimited-text payload (header row + comma-separated data
//! rows) and merges it into the product store keyed by SKU. Values are
//! split on bare commas; there is no quoting or escaping support, so
//! embedded commas shift the remaining columns. This matches the wire
//! format the template describes, and is a documented limitation of it.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{
    import::errors::ImportError,
    store::{StorageBackend, models::Product, products::ProductStore},
};

/// Fixed header row plus one illustrative sample row, offered for download
/// so users start from a well-formed file.
pub const CSV_TEMPLATE: &str = "\
sku,name,category,quantity,price,description,location
TC-1001,Cordless Drill,Power Tools,4,129.99,18V brushless driver kit,Van 2
";

/// How malformed cells and rows are treated.
///
/// Lenient is the historical behavior: anything unparseable degrades to a
/// default and the row is merged anyway. Strict validates every row before
/// any store mutation, making a failed import a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Degrade malformed numeric cells to zero, accept ragged rows, merge
    /// whatever results.
    #[default]
    Lenient,

    /// Reject the whole import on the first malformed cell, ragged row, or
    /// missing SKU.
    Strict,
}

/// Counts reported back to the caller after a merge, so the host can
/// refresh its view of the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows appended as new records.
    pub created: usize,

    /// Rows merged into an existing record by SKU.
    pub updated: usize,
}

impl ImportSummary {
    /// Total rows merged.
    #[must_use]
    pub fn total(self) -> usize {
        self.created + self.updated
    }
}

/// One parsed data row. A `None` field means the header set of this import
/// did not include that column, and merging must leave the existing value
/// untouched.
#[derive(Debug, Clone, Default)]
struct Candidate {
    sku: Option<String>,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    quantity: Option<u32>,
    price: Option<Decimal>,
    location: Option<String>,
}

impl Candidate {
    /// Shallow overwrite: fields present on the candidate replace the
    /// existing record's fields; absent fields do not erase anything.
    fn apply_to(self, existing: &mut Product) {
        if let Some(name) = self.name {
            existing.name = name;
        }
        if let Some(category) = self.category {
            existing.category = category;
        }
        if let Some(description) = self.description {
            existing.description = description;
        }
        if let Some(quantity) = self.quantity {
            existing.quantity = quantity;
        }
        if let Some(price) = self.price {
            existing.price = price;
        }
        if let Some(location) = self.location {
            existing.locations = vec![location];
        }
        existing.touch();
    }

    /// Build a fresh record: new id, current timestamp, defaults for
    /// anything the import did not carry.
    fn into_product(self) -> Product {
        let mut product = Product::new(
            self.sku.unwrap_or_default(),
            self.name.unwrap_or_default(),
        );

        if let Some(category) = self.category
            && !category.is_empty()
        {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(location) = self.location {
            product.locations = vec![location];
        }

        product
    }
}

/// Parse a CSV payload and merge its rows into the product store.
///
/// Merging is keyed by `sku`: a row whose SKU matches an existing record
/// updates that record in place (only the columns present in this import),
/// any other row appends a new record. The merged collection is written
/// back in a single operation.
///
/// # Errors
///
/// In strict mode, returns a row-level [`ImportError`] without touching the
/// store. In lenient mode only store failures ([`ImportError::Store`]) are
/// possible.
pub fn import_products_csv<B: StorageBackend>(
    text: &str,
    mode: ParseMode,
    store: &mut ProductStore<B>,
) -> Result<ImportSummary, ImportError> {
    let candidates = parse_rows(text, mode)?;

    let mut products = store.get_all()?;
    let mut summary = ImportSummary::default();

    for candidate in candidates {
        let sku = candidate.sku.clone().unwrap_or_default();

        if let Some(existing) = products.iter_mut().find(|p| p.sku == sku) {
            candidate.apply_to(existing);
            summary.updated += 1;
        } else {
            products.push(candidate.into_product());
            summary.created += 1;
        }
    }

    debug!(
        created = summary.created,
        updated = summary.updated,
        "merging imported rows"
    );
    store.replace_all(products)?;

    Ok(summary)
}

/// Recognized header names. Anything else is ignored.
const KNOWN_HEADERS: [&str; 7] = [
    "sku",
    "name",
    "category",
    "quantity",
    "price",
    "description",
    "location",
];

fn parse_rows(text: &str, mode: ParseMode) -> Result<Vec<Candidate>, ImportError> {
    let mut lines = text.lines();

    let Some(header_line) = lines.next() else {
        return match mode {
            ParseMode::Lenient => Ok(Vec::new()),
            ParseMode::Strict => Err(ImportError::EmptyPayload),
        };
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    if !headers.iter().any(|h| KNOWN_HEADERS.contains(&h.as_str())) {
        trace!("header row names no recognized columns");
    }

    let mut candidates = Vec::new();

    for (index, line) in lines.enumerate() {
        // 1-based, counting the header as line 1.
        let line_number = index + 2;

        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(',').collect();

        if mode == ParseMode::Strict && values.len() != headers.len() {
            return Err(ImportError::RowArity {
                line: line_number,
                expected: headers.len(),
                found: values.len(),
            });
        }

        let mut candidate = Candidate::default();

        for (header, raw) in headers.iter().zip(values.iter()) {
            let value = raw.trim();

            match header.as_str() {
                "sku" => candidate.sku = Some(value.to_owned()),
                "name" => candidate.name = Some(value.to_owned()),
                "category" => candidate.category = Some(value.to_owned()),
                "description" => candidate.description = Some(value.to_owned()),
                "quantity" => {
                    candidate.quantity = Some(coerce_quantity(value, mode, line_number)?);
                }
                "price" => {
                    candidate.price = Some(coerce_price(value, mode, line_number)?);
                }
                "location" => {
                    // An empty cell names no location; leave the list alone.
                    if !value.is_empty() {
                        candidate.location = Some(value.to_owned());
                    }
                }
                _ => {}
            }
        }

        if mode == ParseMode::Strict && candidate.sku.as_deref().is_none_or(str::is_empty) {
            return Err(ImportError::MissingSku { line: line_number });
        }

        candidates.push(candidate);
    }

    Ok(candidates)
}

fn coerce_quantity(value: &str, mode: ParseMode, line: usize) -> Result<u32, ImportError> {
    match value.parse::<u32>() {
        Ok(quantity) => Ok(quantity),
        Err(_) => match mode {
            ParseMode::Lenient => {
                trace!(line, value, "unparseable quantity defaults to 0");
                Ok(0)
            }
            ParseMode::Strict => Err(ImportError::Coercion {
                line,
                column: "quantity",
                value: value.to_owned(),
            }),
        },
    }
}

fn coerce_price(value: &str, mode: ParseMode, line: usize) -> Result<Decimal, ImportError> {
    match value.parse::<Decimal>() {
        Ok(price) => Ok(price),
        Err(_) => match mode {
            ParseMode::Lenient => {
                trace!(line, value, "unparseable price defaults to 0");
                Ok(Decimal::ZERO)
            }
            ParseMode::Strict => Err(ImportError::Coercion {
                line,
                column: "price",
                value: value.to_owned(),
            }),
        },
    }
}

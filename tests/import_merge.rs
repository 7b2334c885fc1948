//! Integration tests for the CSV bulk import-merger over the file backend.
//!
//! These exercise the merge-by-SKU semantics end to end: rows land in the
//! on-disk product blob, re-imports are idempotent, and columns absent from
//! an import never erase fields already on file.

use anyhow::Context;
use rust_decimal::Decimal;
use testresult::TestResult;

use toolcrib::{
    import::{ParseMode, import_products_csv},
    store::{FileBackend, Product, ProductStore},
};

fn file_store(dir: &tempfile::TempDir) -> ProductStore<FileBackend> {
    ProductStore::new(FileBackend::new(dir.path()))
}

#[test]
fn csv_import_persists_to_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let mut store = file_store(&dir);
        let csv = "sku,name,category,quantity,price\nTC-1,Hammer,Hand Tools,3,24.50\n";
        import_products_csv(csv, ParseMode::Lenient, &mut store)?;
    }

    // A fresh store over the same directory sees the merged data.
    let store = file_store(&dir);
    let hammer = store.get_by_sku("TC-1")?.context("missing TC-1")?;

    assert_eq!(hammer.name, "Hammer");
    assert_eq!(hammer.category, "Hand Tools");
    assert_eq!(hammer.quantity, 3);
    assert_eq!(hammer.price, Decimal::new(2450, 2));
    Ok(())
}

#[test]
fn importing_the_same_file_twice_equals_importing_it_once() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    let csv = "sku,name,quantity\nTC-1,Hammer,3\nTC-2,Drill,1\nTC-3,Saw,6\n";

    import_products_csv(csv, ParseMode::Lenient, &mut store)?;
    let after_first: Vec<(String, u32)> = store
        .get_all()?
        .into_iter()
        .map(|p| (p.sku, p.quantity))
        .collect();

    import_products_csv(csv, ParseMode::Lenient, &mut store)?;
    let after_second: Vec<(String, u32)> = store
        .get_all()?
        .into_iter()
        .map(|p| (p.sku, p.quantity))
        .collect();

    assert_eq!(after_first, after_second);
    Ok(())
}

#[test]
fn columns_missing_from_the_import_keep_their_stored_values() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    let mut widget = Product::new("A", "Widget");
    widget.price = Decimal::new(10, 0);
    store.save(widget)?;

    import_products_csv("sku,quantity\nA,5\n", ParseMode::Lenient, &mut store)?;

    let merged = store.get_by_sku("A")?.context("missing A")?;
    assert_eq!(merged.name, "Widget");
    assert_eq!(merged.price, Decimal::new(10, 0));
    assert_eq!(merged.quantity, 5);
    Ok(())
}

#[test]
fn malformed_numeric_cells_default_to_zero() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    let csv = "sku,name,quantity,price\nTC-1,Hammer,abc,12.5x\n";
    import_products_csv(csv, ParseMode::Lenient, &mut store)?;

    let hammer = store.get_by_sku("TC-1")?.context("missing TC-1")?;
    assert_eq!(hammer.quantity, 0);
    assert!(hammer.price.is_zero());
    Ok(())
}

#[test]
fn strict_import_failure_leaves_the_disk_blob_unchanged() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    store.save(Product::new("TC-1", "Hammer"))?;
    let before = store.get_all()?;

    let csv = "sku,name,quantity\nTC-2,Drill,not-a-number\n";
    let result = import_products_csv(csv, ParseMode::Strict, &mut store);

    assert!(result.is_err());
    assert_eq!(store.get_all()?, before);
    Ok(())
}

#[test]
fn location_column_becomes_a_single_element_list() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    let csv = "sku,name,location\nTC-1,Hammer,Van 2\n";
    import_products_csv(csv, ParseMode::Lenient, &mut store)?;

    let hammer = store.get_by_sku("TC-1")?.context("missing TC-1")?;
    assert_eq!(hammer.locations, ["Van 2"]);
    Ok(())
}

#[test]
fn full_store_purge_clears_the_collection() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = file_store(&dir);

    store.save(Product::new("TC-1", "Hammer"))?;
    store.save(Product::new("TC-2", "Drill"))?;

    store.replace_all(Vec::new())?;

    assert!(store.get_all()?.is_empty());
    Ok(())
}

//! The `gradecast history` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(store_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_settings(store_path, config_path)?;
    let store = config.open_store();
    let records = store.read_records()?;

    println!(
        "Training data: {} ({} records)",
        store.path().display(),
        records.len()
    );
    if records.is_empty() {
        return Ok(());
    }

    let mut by_dimension: BTreeMap<usize, usize> = BTreeMap::new();
    for r in &records {
        *by_dimension.entry(r.dimension()).or_default() += 1;
    }

    let mut table = Table::new();
    table.set_header(vec!["Assessments", "Records"]);
    for (dimension, count) in &by_dimension {
        table.add_row(vec![Cell::new(dimension), Cell::new(count)]);
    }
    println!("{table}");

    Ok(())
}

// 🔁 Pipeline - CSV → Taxonomy → SQL file
// One synchronous pass; nothing is kept between runs.

use crate::config::Config;
use crate::reader::read_rows;
use crate::sql::generate_sql;
use crate::taxonomy::{build_taxonomy, TaxonomySummary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Read `config.input_path`, write the load script to `config.output_path`
pub fn run(config: &Config) -> Result<TaxonomySummary> {
    let table = read_rows(&config.input_path)?;
    info!("Parsed {} rows from {}", table.rows.len(), config.input_path.display());

    let taxonomy = build_taxonomy(&table.rows);
    let summary = taxonomy.summary();
    info!(
        "Found {} product groups, {} categories, {} types",
        summary.groups, summary.categories, summary.types
    );

    let sql = generate_sql(&taxonomy);
    write_script(&config.output_path, &sql)?;

    Ok(summary)
}

/// Write the script as UTF-8; the file handle is closed on every path
pub fn write_script(path: &Path, sql: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(sql.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

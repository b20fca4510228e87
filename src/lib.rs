// Product Taxonomy Loader - Core Library
// CSV (Group → Category → Type) to an idempotent T-SQL load script

pub mod config;
pub mod reader;
pub mod taxonomy;
pub mod sql;
pub mod pipeline;

// Re-export commonly used types
pub use config::{Config, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use reader::{read_rows, read_rows_from, CsvRow, CsvTable};
pub use taxonomy::{
    build_taxonomy, ProductCategory, ProductGroup, ProductType,
    Taxonomy, TaxonomyBuilder, TaxonomySummary,
};
pub use sql::{escape_sql, generate_sql};
pub use pipeline::{run, write_script};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

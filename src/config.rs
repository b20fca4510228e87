// ⚙️ Configuration - Fixed input/output locations
// The tool takes no flags; paths are relative to the working directory.

use std::path::PathBuf;

/// Default CSV input, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "productsdata.csv";

/// Default SQL output, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "load_product_data.sql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file with ProductGroup, ProductCategory, ProductType columns
    pub input_path: PathBuf,

    /// Where the generated SQL script is written
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}

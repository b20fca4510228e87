// 🌳 Taxonomy Builder - Group → Category → Type
// Deduplicates rows into three insertion-ordered collections.
//
// Identity is the trimmed name path (case-sensitive, no other normalization).
// First occurrence wins: a later row never alters an existing entity.

use crate::reader::{CsvRow, CATEGORY_COLUMN, GROUP_COLUMN, TYPE_COLUMN};
use indexmap::IndexMap;
use tracing::{debug, warn};

// ============================================================================
// KEYS
// ============================================================================

const KEY_SEPARATOR: char = '|';

pub fn category_key(group: &str, category: &str) -> String {
    format!("{}{}{}", group, KEY_SEPARATOR, category)
}

pub fn type_key(group: &str, category: &str, type_name: &str) -> String {
    format!("{}{}{}{}{}", group, KEY_SEPARATOR, category, KEY_SEPARATOR, type_name)
}

// ============================================================================
// ENTITIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    pub name: String,
    pub description: String,
}

impl ProductGroup {
    pub fn new(name: &str) -> Self {
        ProductGroup {
            name: name.to_string(),
            description: format!("{} products and related items", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCategory {
    pub name: String,
    pub description: String,
    /// Parent group name
    pub group: String,
}

impl ProductCategory {
    pub fn new(group: &str, name: &str) -> Self {
        ProductCategory {
            name: name.to_string(),
            description: format!("{} in {} category", name, group),
            group: group.to_string(),
        }
    }

    pub fn key(&self) -> String {
        category_key(&self.group, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductType {
    pub name: String,
    pub description: String,
    /// Parent category name (may be empty, see `TaxonomyBuilder::add_row`)
    pub category: String,
    pub group: String,
}

impl ProductType {
    pub fn new(group: &str, category: &str, name: &str) -> Self {
        ProductType {
            name: name.to_string(),
            description: format!("{} {}", name, category),
            category: category.to_string(),
            group: group.to_string(),
        }
    }

    /// Key of the parent category
    pub fn category_key(&self) -> String {
        category_key(&self.group, &self.category)
    }

    pub fn key(&self) -> String {
        type_key(&self.group, &self.category, &self.name)
    }
}

// ============================================================================
// TAXONOMY
// ============================================================================

/// The three deduplicated collections, each in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    /// group name → group
    pub groups: IndexMap<String, ProductGroup>,

    /// `group|category` → category
    pub categories: IndexMap<String, ProductCategory>,

    /// `group|category|type` → type
    pub types: IndexMap<String, ProductType>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxonomySummary {
    pub groups: usize,
    pub categories: usize,
    pub types: usize,
}

impl Taxonomy {
    pub fn summary(&self) -> TaxonomySummary {
        TaxonomySummary {
            groups: self.groups.len(),
            categories: self.categories.len(),
            types: self.types.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    taxonomy: Taxonomy,
    skipped_rows: usize,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        TaxonomyBuilder::default()
    }

    /// Register whatever entities this row introduces.
    ///
    /// Rows with an empty (trimmed) group are skipped. A missing column
    /// reads as an empty string.
    pub fn add_row(&mut self, row: &CsvRow) {
        let group = field(row, GROUP_COLUMN);
        let category = field(row, CATEGORY_COLUMN);
        let type_name = field(row, TYPE_COLUMN);

        if group.is_empty() {
            debug!("Row {} has no product group; skipping", row.line);
            self.skipped_rows += 1;
            return;
        }

        let taxonomy = &mut self.taxonomy;

        taxonomy
            .groups
            .entry(group.to_string())
            .or_insert_with(|| ProductGroup::new(group));

        if !category.is_empty() {
            taxonomy
                .categories
                .entry(category_key(group, category))
                .or_insert_with(|| ProductCategory::new(group, category));
        }

        if !type_name.is_empty() {
            let key = type_key(group, category, type_name);
            if !taxonomy.types.contains_key(&key) {
                if category.is_empty() {
                    warn!(
                        "Row {}: product type '{}' in group '{}' has no category; it will not be emitted",
                        row.line, type_name, group
                    );
                }
                taxonomy
                    .types
                    .insert(key, ProductType::new(group, category, type_name));
            }
        }
    }

    /// Rows dropped so far for lacking a group
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn build(self) -> Taxonomy {
        self.taxonomy
    }
}

/// Build the taxonomy from rows in file order
pub fn build_taxonomy(rows: &[CsvRow]) -> Taxonomy {
    let mut builder = TaxonomyBuilder::new();
    for row in rows {
        builder.add_row(row);
    }

    if builder.skipped_rows() > 0 {
        debug!("Skipped {} rows without a product group", builder.skipped_rows());
    }

    builder.build()
}

fn field<'a>(row: &'a CsvRow, column: &str) -> &'a str {
    row.get(column).map(str::trim).unwrap_or("")
}

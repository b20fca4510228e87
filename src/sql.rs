// 🧾 SQL Emitter - Guarded INSERT script (T-SQL dialect)
// Every INSERT sits behind an IF NOT EXISTS on the same name path,
// so the script can be re-run against a populated schema.

use crate::taxonomy::{ProductCategory, ProductType, Taxonomy};
use indexmap::IndexMap;

const BANNER: &str = "-- =====================================================";
const BATCH_SEPARATOR: &str = "GO\n";

/// Double every single quote; nothing else is escaped
pub fn escape_sql(text: &str) -> String {
    text.replace('\'', "''")
}

/// Render the full load script
pub fn generate_sql(taxonomy: &Taxonomy) -> String {
    let mut out: Vec<String> = Vec::new();

    push_header(&mut out);
    push_groups(&mut out, taxonomy);
    push_categories(&mut out, taxonomy);
    push_types(&mut out, taxonomy);
    push_summary(&mut out, taxonomy);

    out.join("\n")
}

// ============================================================================
// SECTIONS
// ============================================================================

fn push_header(out: &mut Vec<String>) {
    out.push("-- Product Data Import Script".to_string());
    out.push("-- Generated from productsdata.csv".to_string());
    out.push("-- This script loads Product Groups, Product Categories, and Product Types\n".to_string());

    out.push("-- Clean up existing data (optional - comment out if you want to keep existing data)".to_string());
    out.push("-- DELETE FROM producttype WHERE is_active = 1;".to_string());
    out.push("-- DELETE FROM productcategory WHERE is_active = 1;".to_string());
    out.push("-- DELETE FROM productgroup WHERE is_active = 1;".to_string());
    out.push("-- GO\n".to_string());
}

fn push_banner(out: &mut Vec<String>, title: &str) {
    out.push(BANNER.to_string());
    out.push(format!("-- {}", title));
    out.push(format!("{}\n", BANNER));
}

fn push_groups(out: &mut Vec<String>, taxonomy: &Taxonomy) {
    push_banner(out, "PRODUCT GROUPS");

    for (sort_order, group) in (1..).zip(taxonomy.groups.values()) {
        let name = escape_sql(&group.name);

        out.push(format!("-- Product Group {}: {}", sort_order, group.name));
        out.push(format!(
            "IF NOT EXISTS (SELECT 1 FROM productgroup WHERE product_group_name = '{}')",
            name
        ));
        out.push(format!(
            "INSERT INTO productgroup (product_group_name, description, sort_order, is_active) \
             VALUES ('{}', '{}', {}, 1);\n",
            name,
            escape_sql(&group.description),
            sort_order
        ));
    }

    out.push(BATCH_SEPARATOR.to_string());
}

fn push_categories(out: &mut Vec<String>, taxonomy: &Taxonomy) {
    push_banner(out, "PRODUCT CATEGORIES");

    let mut by_group: IndexMap<&str, Vec<&ProductCategory>> = IndexMap::new();
    for category in taxonomy.categories.values() {
        by_group.entry(category.group.as_str()).or_default().push(category);
    }

    // One counter for the whole section, not per group
    let mut sort_order = 1;

    for group_name in taxonomy.groups.keys() {
        let Some(categories) = by_group.get(group_name.as_str()) else {
            continue;
        };

        let group = escape_sql(group_name);
        out.push(format!("-- Categories for {}", group_name));

        for category in categories {
            let name = escape_sql(&category.name);

            out.push(format!(
                "IF NOT EXISTS (SELECT 1 FROM productcategory pc \
                 JOIN productgroup pg ON pc.product_group_id = pg.product_group_id \
                 WHERE pc.product_category_name = '{}' \
                 AND pg.product_group_name = '{}')",
                name, group
            ));
            out.push(format!(
                "INSERT INTO productcategory (product_category_name, description, sort_order, is_active, product_group_id) \
                 VALUES ('{}', '{}', {}, 1, \
                 (SELECT TOP 1 product_group_id FROM productgroup WHERE product_group_name = '{}'));\n",
                name,
                escape_sql(&category.description),
                sort_order,
                group
            ));
            sort_order += 1;
        }
        out.push(String::new());
    }

    out.push(BATCH_SEPARATOR.to_string());
}

fn push_types(out: &mut Vec<String>, taxonomy: &Taxonomy) {
    push_banner(out, "PRODUCT TYPES");

    let mut by_category: IndexMap<String, Vec<&ProductType>> = IndexMap::new();
    for product_type in taxonomy.types.values() {
        by_category
            .entry(product_type.category_key())
            .or_default()
            .push(product_type);
    }

    // Outer loop follows category order; types with no registered category never render
    let mut sort_order = 1;

    for (key, category) in &taxonomy.categories {
        let Some(types) = by_category.get(key) else {
            continue;
        };

        out.push(format!("-- Types for {} ({})", category.name, category.group));

        for product_type in types {
            let name = escape_sql(&product_type.name);
            let category_name = escape_sql(&product_type.category);
            let group = escape_sql(&product_type.group);

            out.push(format!(
                "IF NOT EXISTS (SELECT 1 FROM producttype pt \
                 JOIN productcategory pc ON pt.product_category_id = pc.product_category_id \
                 JOIN productgroup pg ON pc.product_group_id = pg.product_group_id \
                 WHERE pt.product_type_name = '{}' \
                 AND pc.product_category_name = '{}' \
                 AND pg.product_group_name = '{}')",
                name, category_name, group
            ));
            out.push(format!(
                "INSERT INTO producttype (product_type_name, product_type_description, sort_order, is_active, product_category_id) \
                 VALUES ('{}', '{}', {}, 1, \
                 (SELECT TOP 1 pc.product_category_id FROM productcategory pc \
                 JOIN productgroup pg ON pc.product_group_id = pg.product_group_id \
                 WHERE pc.product_category_name = '{}' \
                 AND pg.product_group_name = '{}'));\n",
                name,
                escape_sql(&product_type.description),
                sort_order,
                category_name,
                group
            ));
            sort_order += 1;
        }
        out.push(String::new());
    }

    out.push(BATCH_SEPARATOR.to_string());
}

fn push_summary(out: &mut Vec<String>, taxonomy: &Taxonomy) {
    let summary = taxonomy.summary();

    out.push(BANNER.to_string());
    out.push("-- SUMMARY".to_string());
    out.push(BANNER.to_string());
    out.push(format!("-- Total Product Groups: {}", summary.groups));
    out.push(format!("-- Total Product Categories: {}", summary.categories));
    out.push(format!("-- Total Product Types: {}", summary.types));
    out.push(format!("{}\n", BANNER));

    out.push("-- Verify the data".to_string());
    out.push(
        "SELECT 'Product Groups' AS TableName, COUNT(*) AS RecordCount FROM productgroup WHERE is_active = 1"
            .to_string(),
    );
    out.push("UNION ALL".to_string());
    out.push("SELECT 'Product Categories', COUNT(*) FROM productcategory WHERE is_active = 1".to_string());
    out.push("UNION ALL".to_string());
    out.push("SELECT 'Product Types', COUNT(*) FROM producttype WHERE is_active = 1;".to_string());
    out.push("\nGO".to_string());
}

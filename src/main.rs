use anyhow::Result;
use tracing_subscriber::EnvFilter;

use product_taxonomy_loader::{run, Config};

fn main() {
    init_logging();

    if let Err(e) = run_import() {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_import() -> Result<()> {
    let config = Config::default();

    println!("📂 Parsing CSV file: {}", config.input_path.display());
    println!("💾 Writing SQL to: {}", config.output_path.display());
    let summary = run(&config)?;

    println!("✅ Successfully generated {}", config.output_path.display());
    println!(
        "   {} groups, {} categories, {} types",
        summary.groups, summary.categories, summary.types
    );
    println!(
        "   Run this file using: sqlcmd -S localhost -d epr -i {}",
        config.output_path.display()
    );

    Ok(())
}

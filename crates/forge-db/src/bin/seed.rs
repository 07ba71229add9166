//! # Seed Data Generator
//!
//! Populates the database with demo customers and raw materials.
//!
//! ## Usage
//! ```bash
//! # 25 customers + the full material catalogue (default)
//! cargo run -p forge-db --bin seed
//!
//! # Custom customer count
//! cargo run -p forge-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p forge-db --bin seed -- --db ./data/forge.db
//! ```

use std::env;

use forge_db::seed::{seed_demo_data, DEFAULT_CUSTOMER_COUNT};
use forge_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = DEFAULT_CUSTOMER_COUNT;
    let mut db_path = String::from("./forge_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_CUSTOMER_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Forge Admin Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./forge_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Forge Admin Seed Data Generator");
    println!("===============================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let report = seed_demo_data(&db, count).await?;
    if report.skipped() {
        println!("⚠ Database already has {} records", report.existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("✓ Inserted {} customers", report.customers);
    println!("✓ Inserted {} materials", report.materials);

    let low = db
        .materials()
        .list()
        .await?
        .iter()
        .filter(|m| m.is_low_stock())
        .count();
    println!("  {} materials at or below minimum stock", low);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

//! # Seed Data Generator
//!
//! Populates the database with sample beers for development.
//!
//! ## Usage
//! ```bash
//! # Seed the full sample catalog
//! cargo run -p beerstock-db --bin seed
//!
//! # Limit the number of beers
//! cargo run -p beerstock-db --bin seed -- --count 10
//!
//! # Specify database path
//! cargo run -p beerstock-db --bin seed -- --db ./data/beerstock.db
//! ```
//!
//! Each beer gets a unique name, a brand, a stock limit and a starting
//! quantity within that limit.

use std::env;

use beerstock_core::NewBeer;
use beerstock_db::{Database, DbConfig};

/// Sample catalog: (brand, beer names)
const CATALOG: &[(&str, &[&str])] = &[
    (
        "Ambev",
        &["Skol Beats", "Brahma", "Antarctica", "Bohemia", "Original"],
    ),
    (
        "Heineken",
        &["Heineken Lager", "Amstel", "Sol Premium", "Tiger", "Birra Moretti"],
    ),
    (
        "AB InBev",
        &["Budweiser", "Stella Artois", "Corona Extra", "Beck's", "Leffe Blonde"],
    ),
    (
        "Carlsberg",
        &["Carlsberg Pilsner", "Tuborg", "Kronenbourg 1664", "Grimbergen", "Somersby"],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = usize::MAX;
    let mut db_path = String::from("./beerstock_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(usize::MAX);
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
                println!("Beerstock Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Maximum number of beers to generate");
                println!("  -d, --db <PATH>    Database file path (default: ./beerstock_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Beerstock Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (runs migrations)
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected to database, migrations applied");

    // Check existing records
    let existing = db.beers().count().await?;
    if existing > 0 {
        println!("Database already has {} beers", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating beers...");

    let mut generated = 0;

    'outer: for (brand_idx, (brand, beers)) in CATALOG.iter().enumerate() {
        for (beer_idx, name) in beers.iter().enumerate() {
            if generated >= count {
                break 'outer;
            }

            let beer = generate_beer(brand, name, brand_idx * 10 + beer_idx);

            if let Err(e) = db.beers().insert(&beer).await {
                eprintln!("Failed to insert {}: {}", beer.name, e);
                continue;
            }

            generated += 1;
        }
    }

    println!();
    println!("Generated {} beers", generated);
    println!("Seed complete!");

    Ok(())
}

/// Generates a single beer with a deterministic stock level.
fn generate_beer(brand: &str, name: &str, seed: usize) -> NewBeer {
    // Stock limit between 10 and 55, quantity somewhere inside it
    let max = 10 + ((seed * 7) % 46) as i64;
    let quantity = (seed as i64 * 3) % (max + 1);

    NewBeer {
        id: None,
        name: name.to_string(),
        brand: brand.to_string(),
        max,
        quantity,
    }
}

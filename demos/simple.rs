//! Basic properties rendering of a derived struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_props::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Database {
    host: String,
    port: u16,
    pool_size: u32,
}

#[derive(Debug, Serialize)]
struct Config {
    app_name: String,
    debug: bool,
    database: Database,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        app_name: "inventory".to_string(),
        debug: false,
        database: Database {
            host: "db.internal".to_string(),
            port: 5432,
            pool_size: 16,
        },
    };

    // Top-level fields render as assignments, nested structs as sections
    let properties = to_string(&config)?;
    println!("Properties output:\n{}", properties);

    Ok(())
}

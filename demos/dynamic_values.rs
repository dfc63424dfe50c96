//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde_props::{props, to_string, RenderOptions, Renderer, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with the props! macro
    let config = props!({
        "host": "localhost",
        "port": 8080,
        "tls": {
            "enabled": true,
            "cert_path": "/etc/certs/server.pem"
        },
        "motd": null
    });

    println!("Properties output:\n{}", to_string(&config)?);

    // Access values dynamically
    if let Value::Record(record) = &config {
        if let Some(host) = record.get("host").and_then(Value::as_str) {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = record.get("port").and_then(Value::as_i64) {
            println!("Accessing field 'port': {}", port);
        }
    }

    // Stream straight to a sink instead of building a String
    let mut sink = Vec::new();
    let mut renderer = Renderer::new(&mut sink, RenderOptions::default());
    renderer.render_document(&config)?;
    println!("\nStreamed {} bytes", sink.len());

    Ok(())
}

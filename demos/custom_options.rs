//! Customizing properties output with RenderOptions.
//!
//! Run with: cargo run --example custom_options

use serde_props::{props, to_string_with_options, RenderOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = props!({
        "greeting": "grüß gott",
        "farewell": null,
        "owner": {
            "name": "Jürgen Müller",
            "city": "München"
        }
    });

    // Defaults: nulls render as empty assignments, non-ASCII passes through
    println!("Default:");
    let default = to_string_with_options(&config, RenderOptions::default())?;
    println!("{}", default);

    // Drop null-valued entries entirely
    println!("Omit null values:");
    let omit = RenderOptions::new().with_omit_null_values(true);
    println!("{}", to_string_with_options(&config, omit)?);

    // Escape everything outside printable ASCII for constrained encodings
    println!("Restricted charset:");
    let restricted = RenderOptions::new().with_restrict_charset(true);
    println!("{}", to_string_with_options(&config, restricted)?);

    Ok(())
}

//! # serde_props
//!
//! Render hierarchical configuration values as INI / Java properties text.
//!
//! ## What does it produce?
//!
//! A configuration tree flattens into the conventional layout of `.properties`
//! and `.ini` files: nested structures become bracketed sections named by
//! their dotted key path, and leaf values become `key = value` lines under
//! them. Text is escaped with the usual backslash sequences so the output can
//! be read back by any properties-compatible consumer.
//!
//! ## Key Features
//!
//! - **Dotted sections**: nesting renders as `[server.tls]` headers, leaves
//!   keep their local key name
//! - **Order preserving**: output follows the insertion order of the source
//!   containers exactly, with no sorting
//! - **Serde Compatible**: render any `#[derive(Serialize)]` type, or build
//!   trees dynamically with [`Value`] and the [`props!`] macro
//! - **Strict kind checking**: value kinds with no properties representation
//!   (durations, lists, pairs, ...) are rejected with an error naming the
//!   kind, never silently stringified
//! - **Charset control**: optionally escape everything outside printable
//!   ASCII as `\uXXXX` for constrained output encodings
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_props = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Rendering a struct
//!
//! ```rust
//! use serde::Serialize;
//! use serde_props::to_string;
//!
//! #[derive(Serialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize)]
//! struct Config {
//!     name: String,
//!     server: Server,
//! }
//!
//! let config = Config {
//!     name: "demo".to_string(),
//!     server: Server {
//!         host: "localhost".to_string(),
//!         port: 8080,
//!     },
//! };
//!
//! let text = to_string(&config).unwrap();
//! assert_eq!(
//!     text,
//!     "name = demo\n\n[server]\nhost = localhost\nport = 8080\n"
//! );
//! ```
//!
//! ### Dynamic trees with the props! macro
//!
//! ```rust
//! use serde_props::{props, to_string};
//!
//! let tree = props!({
//!     "app": "worker",
//!     "limits": {
//!         "cpu": 2,
//!         "memory": "512m"
//!     }
//! });
//!
//! let text = to_string(&tree).unwrap();
//! assert_eq!(text, "app = worker\n\n[limits]\ncpu = 2\nmemory = 512m\n");
//! ```
//!
//! ### Streaming to a sink
//!
//! The [`Renderer`] writes escaped fragments to any [`io::Write`] sink as it
//! walks the tree, never buffering the whole document. On failure, output
//! already written stays written; render into a buffer first if you need
//! atomicity.
//!
//! ```rust
//! use serde_props::{props, RenderOptions, Renderer};
//!
//! let tree = props!({ "a": { "b": 1 } });
//! let mut out = Vec::new();
//! Renderer::new(&mut out, RenderOptions::default())
//!     .render_document(&tree)
//!     .unwrap();
//! assert_eq!(out, b"\n[a]\nb = 1\n");
//! ```
//!
//! ## What cannot be rendered
//!
//! The properties format has no representation for sequences or rich
//! quantities, so rendering fails, with an error naming the kind, for
//! lists, sets, pairs, durations, data sizes, regexes and the evaluator
//! artifacts ([`Instance`], modules, classes, type aliases). A document root
//! must be a record or a map; anything else fails before any output is
//! written. See [`Error`] for the full taxonomy.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Render a derived struct to properties text
//! - **`dynamic_values.rs`** - Building trees with the props! macro
//! - **`custom_options.rs`** - Null omission and charset restriction
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::{Map, Record};
pub use options::RenderOptions;
pub use render::Renderer;
pub use ser::ValueSerializer;
pub use value::{DataSize, DataSizeUnit, Duration, DurationUnit, Instance, Value, ValueKind};

use serde::Serialize;
use std::io;

/// Render any `T: Serialize` to a properties document string with default
/// options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_props::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value does not serialize to a record or map root,
/// or contains a kind with no properties representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, RenderOptions::default())
}

/// Render any `T: Serialize` to a properties document string with the given
/// options.
///
/// # Examples
///
/// ```rust
/// use serde_props::{props, to_string_with_options, RenderOptions};
///
/// let tree = props!({ "a": 1, "b": null });
/// let options = RenderOptions::new().with_omit_null_values(true);
/// let text = to_string_with_options(&tree, options).unwrap();
/// assert_eq!(text, "a = 1\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value does not serialize to a record or map root,
/// or contains a kind with no properties representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: RenderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    let mut buf = Vec::with_capacity(256);
    Renderer::new(&mut buf, options).render_document(&tree)?;
    Ok(String::from_utf8(buf).expect("rendered properties text is valid UTF-8"))
}

/// Render any `T: Serialize` to a writer as a properties document.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_props::to_writer;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or the writer rejects a write.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, RenderOptions::default())
}

/// Render any `T: Serialize` to a writer as a properties document with the
/// given options.
///
/// Output streams to the writer as it is produced; a mid-document failure
/// leaves the bytes already written in place.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer rejects a write.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: RenderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    Renderer::new(writer, options).render_document(&tree)
}

/// Convert any `T: Serialize` to a [`Value`] tree.
///
/// Useful for inspecting or amending configuration before rendering it.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_props::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_record());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

//! Properties/INI rendering of configuration value trees.
//!
//! This module provides the [`Renderer`], which walks a [`Value`] tree
//! depth-first and writes properties text to an [`std::io::Write`] sink:
//!
//! - nested containers become bracketed sections whose name is the full
//!   dotted key path (`[server.tls]`), preceded by a blank line
//! - leaf entries become `key = value` assignments using only their local
//!   key name, since the enclosing section already supplies the path prefix
//! - entry order in the output is exactly the containers' insertion order
//!
//! Escaped fragments are written to the sink as they are produced; nothing is
//! buffered beyond the fragment in flight. A failure can therefore leave
//! partial output behind; a caller that needs atomicity renders into an
//! in-memory buffer first and copies it over on success. One render call owns
//! the sink for its whole duration; concurrent renders against the same sink
//! must be serialized by the caller.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{props, RenderOptions, Renderer};
//!
//! let tree = props!({
//!     "a": { "b": 1 }
//! });
//!
//! let mut out = Vec::new();
//! let mut renderer = Renderer::new(&mut out, RenderOptions::default());
//! renderer.render_document(&tree).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "\n[a]\nb = 1\n");
//! ```

use crate::escape::escape;
use crate::{Error, Map, Record, RenderOptions, Result, Value};
use std::io::Write;

/// Renders configuration value trees as INI / Java properties text.
///
/// The renderer holds the destination sink and the [`RenderOptions`]; it
/// keeps no other state across calls, so one instance can render any number
/// of independent documents.
pub struct Renderer<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `writer` with the given options.
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Renderer { writer, options }
    }

    /// Consumes the renderer and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders `value` as a full properties document.
    ///
    /// The root must be a record or a map; any other kind fails with
    /// [`Error::UnsupportedRoot`] before a single byte is written.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedRoot`] for a non-container root,
    /// [`Error::UnsupportedValue`] when a non-renderable kind is found
    /// anywhere in the tree, [`Error::Io`] when the sink rejects a write.
    /// The first error aborts the render.
    pub fn render_document(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Record(record) => self.render_record(None, record),
            Value::Map(map) => self.render_map(None, map),
            _ => Err(Error::unsupported_root(value.kind())),
        }
    }

    /// Renders `value` as a single escaped scalar fragment, without a
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedValue`] unless `value` is null, a boolean, an
    /// integer, a float or a string; [`Error::Io`] when the sink rejects the
    /// write.
    pub fn render_value(&mut self, value: &Value) -> Result<()> {
        let text = scalar_text(value)?;
        let escaped = escape(&text, false, self.options.restrict_charset);
        self.writer.write_all(escaped.as_bytes())?;
        Ok(())
    }

    fn render_record(&mut self, prefix: Option<&str>, record: &Record) -> Result<()> {
        for (key, value) in record {
            if self.options.omit_null_values && value.is_null() {
                continue;
            }
            self.render_entry(prefix, key, value)?;
        }
        Ok(())
    }

    fn render_map(&mut self, prefix: Option<&str>, map: &Map) -> Result<()> {
        for (key, value) in map {
            if self.options.omit_null_values && value.is_null() {
                continue;
            }
            // Map keys go through the same dispatcher as leaf values, so a
            // container used as a key is rejected here.
            let base_key = scalar_text(key)?;
            self.render_entry(prefix, &base_key, value)?;
        }
        Ok(())
    }

    fn render_entry(&mut self, prefix: Option<&str>, base_key: &str, value: &Value) -> Result<()> {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}.{base_key}"),
            None => base_key.to_owned(),
        };
        match value {
            Value::Record(record) => {
                self.write_section_header(&full_key)?;
                self.render_record(Some(&full_key), record)
            }
            Value::Map(map) => {
                self.write_section_header(&full_key)?;
                self.render_map(Some(&full_key), map)
            }
            _ => self.write_assignment(base_key, &scalar_text(value)?),
        }
    }

    // `\n[a.b.c]\n`; the blank line separates the section from whatever came
    // before it, including at the very start of the document.
    fn write_section_header(&mut self, full_key: &str) -> Result<()> {
        let escaped = escape(full_key, true, self.options.restrict_charset);
        self.writer.write_all(b"\n[")?;
        self.writer.write_all(escaped.as_bytes())?;
        self.writer.write_all(b"]\n")?;
        Ok(())
    }

    fn write_assignment(&mut self, key: &str, value: &str) -> Result<()> {
        let key = escape(key, true, self.options.restrict_charset);
        let value = escape(value, false, self.options.restrict_charset);
        self.writer.write_all(key.as_bytes())?;
        self.writer.write_all(b" = ")?;
        self.writer.write_all(value.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Converts a renderable scalar to its unescaped textual form.
///
/// Total over the leaf kinds, failing for everything else. Floats use Rust's
/// `Display` form: the shortest representation that parses back to the same
/// `f64`; non-finite values spell as `inf`, `-inf` and `NaN`.
pub(crate) fn scalar_text(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Duration(_)
        | Value::DataSize(_)
        | Value::Pair(_)
        | Value::List(_)
        | Value::Set(_)
        | Value::Map(_)
        | Value::Record(_)
        | Value::Instance(_)
        | Value::Module(_)
        | Value::Class(_)
        | Value::TypeAlias(_)
        | Value::Regex(_) => Err(Error::unsupported_value(value)),
    }
}

//! Error types for properties rendering.
//!
//! A render either fully succeeds or fails with exactly one of the variants
//! below; the first failure aborts the traversal and surfaces to the caller.
//! There is no partial-success mode and no local recovery, so messages are
//! written to be shown to the user verbatim: they name the offending kind and
//! include a textual description of the value.
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{Error, RenderOptions, Renderer, Value};
//!
//! let mut out = Vec::new();
//! let mut renderer = Renderer::new(&mut out, RenderOptions::default());
//! let err = renderer.render_document(&Value::Int(42)).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedRoot { .. }));
//! assert!(err.to_string().contains("Int"));
//! ```

use crate::ValueKind;
use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering properties
/// output.
#[derive(Debug, Error)]
pub enum Error {
    /// Document rendering was requested on a root value that is not a
    /// container.
    #[error("the top-level value of a properties document must have type `Record` or `Map`, but got type `{kind}`")]
    UnsupportedRoot {
        /// Kind of the rejected root value.
        kind: ValueKind,
    },

    /// A value of a non-renderable kind reached the scalar dispatcher.
    #[error("values of type `{kind}` cannot be rendered as properties. Value: {value}")]
    UnsupportedValue {
        /// Kind of the rejected value.
        kind: ValueKind,
        /// Display text of the rejected value, for diagnostics.
        value: String,
    },

    /// The output sink rejected a write. Always fatal, never retried.
    #[error("failed to write properties output: {0}")]
    Io(#[from] io::Error),

    /// Error raised through the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates the rejection error for a non-container document root.
    pub(crate) fn unsupported_root(kind: ValueKind) -> Self {
        Error::UnsupportedRoot { kind }
    }

    /// Creates the rejection error for a value the dispatcher cannot convert,
    /// capturing its display text for the message.
    pub(crate) fn unsupported_value(value: &crate::Value) -> Self {
        Error::UnsupportedValue {
            kind: value.kind(),
            value: value.to_string(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

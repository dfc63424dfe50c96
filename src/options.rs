//! Configuration options for properties rendering.
//!
//! [`RenderOptions`] carries the two switches the renderer recognizes:
//!
//! - `omit_null_values`: drop null-valued entries instead of rendering them as
//!   empty assignments
//! - `restrict_charset`: escape everything outside printable ASCII for sinks
//!   with a constrained output encoding
//!
//! ## Examples
//!
//! ```rust
//! use serde_props::{props, to_string_with_options, RenderOptions};
//!
//! let tree = props!({ "greeting": "héllo", "missing": null });
//!
//! let options = RenderOptions::new()
//!     .with_omit_null_values(true)
//!     .with_restrict_charset(true);
//! let text = to_string_with_options(&tree, options).unwrap();
//! assert_eq!(text, "greeting = h\\u00E9llo\n");
//! ```

/// Options controlling how a value tree renders to properties text.
///
/// # Examples
///
/// ```rust
/// use serde_props::RenderOptions;
///
/// // Defaults: render nulls as empty assignments, pass non-ASCII through
/// let options = RenderOptions::new();
/// assert!(!options.omit_null_values);
/// assert!(!options.restrict_charset);
///
/// let options = RenderOptions::new().with_omit_null_values(true);
/// assert!(options.omit_null_values);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// When `true`, entries whose value is null are skipped entirely; when
    /// `false`, they render as `key = ` with an empty value.
    pub omit_null_values: bool,
    /// When `true`, every character outside `U+0020..=U+007E` is written as a
    /// `\uXXXX` escape; when `false`, such characters pass through raw,
    /// assuming a wider output charset.
    pub restrict_charset: bool,
}

impl RenderOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether null-valued entries are dropped from the output.
    #[must_use]
    pub fn with_omit_null_values(mut self, omit: bool) -> Self {
        self.omit_null_values = omit;
        self
    }

    /// Sets whether output is restricted to printable ASCII.
    #[must_use]
    pub fn with_restrict_charset(mut self, restrict: bool) -> Self {
        self.restrict_charset = restrict;
        self
    }
}

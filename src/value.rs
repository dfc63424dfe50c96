//! Dynamic value representation for configuration trees.
//!
//! This module provides the [`Value`] enum which represents any value a
//! configuration evaluator can hand to the renderer. It's useful for working
//! with configuration data when the structure isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`Value`]: An enum covering every value kind (null, bool, int, float,
//!   string, duration, data size, pair, list, set, map, record, instance,
//!   module, class, type alias, regex)
//! - [`ValueKind`]: A lightweight tag used in diagnostics and error messages
//! - [`Duration`] / [`DataSize`]: Quantity values carrying their unit
//!
//! Only a subset of kinds can be rendered as properties text: `null`, `bool`,
//! `int`, `float` and `string` render as leaf values, while `map` and `record`
//! render as sections. Every other kind is rejected by the renderer with an
//! error naming the kind; the variants still exist here so that an evaluator
//! can hand over its full value model and get a precise diagnostic back.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_props::{props, Value};
//!
//! // From primitives
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let port = Value::from(8080);
//! let host = Value::from("localhost");
//!
//! // Using the props! macro
//! let tree = props!({
//!     "host": "localhost",
//!     "port": 8080
//! });
//! assert!(tree.is_record());
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use serde_props::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::{Map, Record};
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed configuration value.
///
/// This enum can represent every value kind the renderer may encounter. The
/// renderable kinds are the scalar leaves (`Null`, `Bool`, `Int`, `Float`,
/// `String`) and the two containers (`Map`, `Record`); the remaining kinds
/// exist so that rejection errors can name the offending value precisely.
///
/// # Examples
///
/// ```rust
/// use serde_props::{Value, ValueKind};
///
/// let value = Value::from("hello");
/// assert_eq!(value.kind(), ValueKind::String);
/// assert!(value.is_scalar());
/// assert!(!value.is_container());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Duration(Duration),
    DataSize(DataSize),
    Pair(Box<(Value, Value)>),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Map),
    Record(Record),
    Instance(Instance),
    Module(String),
    Class(String),
    TypeAlias(String),
    Regex(Regex),
}

/// The kind tag of a [`Value`], used in diagnostics.
///
/// Error messages name the kind via its [`Display`](fmt::Display) form, e.g.
/// ``values of type `Duration` cannot be rendered``.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Duration,
    DataSize,
    Pair,
    List,
    Set,
    Map,
    Record,
    Instance,
    Module,
    Class,
    TypeAlias,
    Regex,
}

impl ValueKind {
    /// Returns the kind name as used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Boolean",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Duration => "Duration",
            ValueKind::DataSize => "DataSize",
            ValueKind::Pair => "Pair",
            ValueKind::List => "List",
            ValueKind::Set => "Set",
            ValueKind::Map => "Map",
            ValueKind::Record => "Record",
            ValueKind::Instance => "Instance",
            ValueKind::Module => "Module",
            ValueKind::Class => "Class",
            ValueKind::TypeAlias => "TypeAlias",
            ValueKind::Regex => "Regex",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A duration quantity with its unit, e.g. `5.min`.
///
/// Durations appear in evaluated configuration but have no properties-text
/// representation; the renderer rejects them with an error that displays the
/// value in `<value>.<unit>` notation.
#[derive(Clone, Copy, Debug)]
pub struct Duration {
    pub value: f64,
    pub unit: DurationUnit,
}

impl Duration {
    #[must_use]
    pub const fn new(value: f64, unit: DurationUnit) -> Self {
        Duration { value, unit }
    }
}

/// Unit of a [`Duration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    /// Returns the unit symbol used in display notation.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            DurationUnit::Nanoseconds => "ns",
            DurationUnit::Microseconds => "us",
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "min",
            DurationUnit::Hours => "h",
            DurationUnit::Days => "d",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.value, self.unit.symbol())
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && f64_eq(self.value, other.value)
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        f64_hash(self.value, state);
    }
}

/// A data-size quantity with its unit, e.g. `4.kb`.
///
/// Like [`Duration`], data sizes are carried for diagnostics only; the
/// renderer rejects them.
#[derive(Clone, Copy, Debug)]
pub struct DataSize {
    pub value: f64,
    pub unit: DataSizeUnit,
}

impl DataSize {
    #[must_use]
    pub const fn new(value: f64, unit: DataSizeUnit) -> Self {
        DataSize { value, unit }
    }
}

/// Unit of a [`DataSize`]. Decimal and binary units are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataSizeUnit {
    Bytes,
    Kilobytes,
    Kibibytes,
    Megabytes,
    Mebibytes,
    Gigabytes,
    Gibibytes,
    Terabytes,
    Tebibytes,
    Petabytes,
    Pebibytes,
}

impl DataSizeUnit {
    /// Returns the unit symbol used in display notation.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            DataSizeUnit::Bytes => "b",
            DataSizeUnit::Kilobytes => "kb",
            DataSizeUnit::Kibibytes => "kib",
            DataSizeUnit::Megabytes => "mb",
            DataSizeUnit::Mebibytes => "mib",
            DataSizeUnit::Gigabytes => "gb",
            DataSizeUnit::Gibibytes => "gib",
            DataSizeUnit::Terabytes => "tb",
            DataSizeUnit::Tebibytes => "tib",
            DataSizeUnit::Petabytes => "pb",
            DataSizeUnit::Pebibytes => "pib",
        }
    }
}

impl fmt::Display for DataSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.value, self.unit.symbol())
    }
}

impl PartialEq for DataSize {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && f64_eq(self.value, other.value)
    }
}

impl Eq for DataSize {}

impl Hash for DataSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        f64_hash(self.value, state);
    }
}

/// An object instance: a value of a named, evaluator-defined type.
///
/// Instances carry their type name and an ordered field map. They are not
/// renderable; the name and fields feed the rejection diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub type_name: String,
    pub fields: Record,
}

impl Instance {
    #[must_use]
    pub fn new(type_name: impl Into<String>, fields: Record) -> Self {
        Instance {
            type_name: type_name.into(),
            fields,
        }
    }
}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        self.fields.hash(state);
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.type_name)?;
        fmt_fields(f, self.fields.iter())
    }
}

// `{ a = 1; b = 2 }` notation shared by Record and Instance display.
fn fmt_fields<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
) -> fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for (key, value) in entries {
        if first {
            write!(f, " {key} = {value}")?;
            first = false;
        } else {
            write!(f, "; {key} = {value}")?;
        }
    }
    if first {
        f.write_str("}")
    } else {
        f.write_str(" }")
    }
}

fn fmt_elements(f: &mut fmt::Formatter<'_>, name: &str, elements: &[Value]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str(")")
}

impl Value {
    /// Returns the kind tag of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// assert_eq!(Value::from(1.5).kind(), ValueKind::Float);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Duration(_) => ValueKind::Duration,
            Value::DataSize(_) => ValueKind::DataSize,
            Value::Pair(_) => ValueKind::Pair,
            Value::List(_) => ValueKind::List,
            Value::Set(_) => ValueKind::Set,
            Value::Map(_) => ValueKind::Map,
            Value::Record(_) => ValueKind::Record,
            Value::Instance(_) => ValueKind::Instance,
            Value::Module(_) => ValueKind::Module,
            Value::Class(_) => ValueKind::Class,
            Value::TypeAlias(_) => ValueKind::TypeAlias,
            Value::Regex(_) => ValueKind::Regex,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if the value renders as a leaf: null, boolean, integer,
    /// float or string.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        )
    }

    /// Returns `true` if the value renders as a section: a map or a record.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Record(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float or an integer, returns it as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_props::Value;
    ///
    /// assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
    /// assert_eq!(Value::from(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list or a set, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) | Value::Set(v) => Some(v),
            _ => None,
        }
    }

    /// If the value is a map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// If the value is a record, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

// NaN compares equal to itself so that Eq holds and a NaN float can key a Map.
fn f64_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// Consistent with f64_eq: +0.0 and -0.0 hash alike, all NaNs hash alike.
fn f64_hash<H: Hasher>(value: f64, state: &mut H) {
    let bits = if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    };
    bits.hash(state);
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => f64_eq(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::DataSize(a), Value::DataSize(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            (Value::Module(a), Value::Module(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => a == b,
            (Value::TypeAlias(a), Value::TypeAlias(b)) => a == b,
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f64_hash(*f, state),
            Value::String(s) => s.hash(state),
            Value::Duration(d) => d.hash(state),
            Value::DataSize(d) => d.hash(state),
            Value::Pair(p) => p.hash(state),
            Value::List(v) | Value::Set(v) => v.hash(state),
            Value::Map(m) => m.hash(state),
            Value::Record(r) => r.hash(state),
            Value::Instance(i) => i.hash(state),
            Value::Module(name) | Value::Class(name) | Value::TypeAlias(name) => name.hash(state),
            Value::Regex(r) => r.as_str().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(fl) => write!(f, "{fl}"),
            Value::String(s) => f.write_str(s),
            Value::Duration(d) => write!(f, "{d}"),
            Value::DataSize(d) => write!(f, "{d}"),
            Value::Pair(p) => write!(f, "Pair({}, {})", p.0, p.1),
            Value::List(v) => fmt_elements(f, "List", v),
            Value::Set(v) => fmt_elements(f, "Set", v),
            Value::Map(m) => {
                f.write_str("Map(")?;
                for (i, (key, value)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                f.write_str(")")
            }
            Value::Record(r) => fmt_fields(f, r.iter()),
            Value::Instance(i) => write!(f, "{i}"),
            Value::Module(name) => write!(f, "module {name}"),
            Value::Class(name) => write!(f, "class {name}"),
            Value::TypeAlias(name) => write!(f, "typealias {name}"),
            Value::Regex(r) => f.write_str(r.as_str()),
        }
    }
}

impl serde::Serialize for Value {
    /// Serializes the renderable kinds structurally; `List` also passes
    /// through (the renderer rejects it later, by its own name). Kinds
    /// outside the Serde data model fail here so they are never silently
    /// converted into something else.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error as _, SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (key, value) in record {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            other => Err(S::Error::custom(format!(
                "values of type `{}` cannot be represented in the Serde data model. Value: {other}",
                other.kind()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl From<DataSize> for Value {
    fn from(value: DataSize) -> Self {
        Value::DataSize(value)
    }
}

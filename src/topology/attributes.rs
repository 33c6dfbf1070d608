//! Open attribute bags attached to nodes, edges and cells.
//!
//! Attributes carry arbitrary user metadata (colors, weights, labels). No
//! schema is enforced; a later insertion of the same key overwrites.

use std::collections::BTreeMap;
use std::fmt;

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Attribute bag: name → value, iterated in name order.
pub type Attributes = BTreeMap<String, AttrValue>;

impl AttrValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(f64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl PartialEq<&str> for AttrValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for AttrValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<f64> for AttrValue {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

/// Merge `source` into `target`; keys present in both take the `source` value.
pub(crate) fn merge(target: &mut Attributes, source: Attributes) {
    target.extend(source);
}

/// Build an [`Attributes`] map from `key => value` pairs.
///
/// ```rust
/// use cell_complex::attrs;
/// let a = attrs! { "color" => "red", "weight" => 3 };
/// assert_eq!(a["color"], "red");
/// assert_eq!(a["weight"], 3i64);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::topology::attributes::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::topology::attributes::Attributes::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::topology::attributes::AttrValue::from($value),
            );
        )+
        map
    }};
}

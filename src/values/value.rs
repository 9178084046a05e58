//! Value abstractions used as substitution candidates

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A raw payload carried by a value entry
///
/// `Display` is the safe string form used during substitution: null renders
/// as an empty string, everything else as its usual textual representation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Absent payload
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// A name to raw value mapping
pub type ValueMap = BTreeMap<String, Scalar>;

/// A collaborator exposing a read-only values mapping
///
/// The mapping itself is defined and populated elsewhere; this crate only
/// reads it.
pub trait ValueSource {
    /// The values mapping, if this source carries one
    fn values(&self) -> Option<&ValueMap>;
}

/// A named, possibly lazy substitution candidate
pub enum Value {
    /// A fixed payload captured at construction
    Static {
        name: Option<String>,
        value: Scalar,
    },
    /// A payload computed by a provider on every read
    Function {
        name: Option<String>,
        provider: Box<dyn Fn() -> Scalar>,
    },
}

impl Value {
    /// Create an unnamed static value
    pub fn fixed(value: impl Into<Scalar>) -> Self {
        Value::Static {
            name: None,
            value: value.into(),
        }
    }

    /// Create an unnamed function value
    ///
    /// The provider runs on every read, so the value can reflect volatile
    /// state per substitution pass.
    pub fn computed(provider: impl Fn() -> Scalar + 'static) -> Self {
        Value::Function {
            name: None,
            provider: Box::new(provider),
        }
    }

    /// Attach a name
    pub fn with_name(mut self, new_name: impl Into<String>) -> Self {
        match &mut self {
            Value::Static { name, .. } | Value::Function { name, .. } => {
                *name = Some(new_name.into());
            }
        }
        self
    }

    /// The value's name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Static { name, .. } | Value::Function { name, .. } => name.as_deref(),
        }
    }

    /// Read the payload
    ///
    /// Function values invoke their provider on every call; nothing is
    /// cached between reads.
    pub fn get(&self) -> Scalar {
        match self {
            Value::Static { value, .. } => value.clone(),
            Value::Function { provider, .. } => provider(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Static { name, value } => f
                .debug_struct("Static")
                .field("name", name)
                .field("value", value)
                .finish(),
            Value::Function { name, .. } => f
                .debug_struct("Function")
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

/// Create static value objects from a source's value entries
///
/// Produces one value per mapping entry, preserving the mapping's iteration
/// order, with the entry's key as name and its raw value as payload. An
/// absent source, or a source without a mapping, yields an empty list.
pub fn to_values(source: Option<&dyn ValueSource>) -> Vec<Value> {
    let mut values = Vec::new();

    if let Some(source) = source {
        if let Some(entries) = source.values() {
            for (name, entry) in entries {
                values.push(Value::fixed(entry.clone()).with_name(name.clone()));
            }
        }
    }

    values
}

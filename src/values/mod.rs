//! Placeholder value substitution
//!
//! This module provides the value abstractions and the `${NAME}` template
//! resolver. A value is a named, possibly lazy payload; input strings are
//! scanned for `${NAME}` placeholders, which are replaced from a candidate
//! list built from caller-supplied built-in values followed by the values
//! of a source object.
//!
//! # Example
//!
//! ```rust
//! use powertools::values::{replace_values, ReplaceOptions, Value};
//!
//! let options = ReplaceOptions::new()
//!     .with_built_in(Value::fixed("world").with_name("name"));
//!
//! let out = replace_values(None, "Hello, ${ Name }!", options);
//! assert_eq!(out, "Hello, world!");
//! ```

mod resolver;
mod value;

pub use resolver::{normalize, replace_values, ReplaceOptions};
pub use value::{to_values, Scalar, Value, ValueMap, ValueSource};

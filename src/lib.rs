//! Power Tools - workspace apps, commands and jobs behind a command palette,
//! plus `${NAME}` placeholder substitution
//!
//! The crate has two halves. The `values` and `settings` modules implement
//! placeholder substitution: input strings are scanned for `${NAME}` tokens,
//! which are replaced from configurable, possibly lazy values. The
//! `workspace` and `commands` modules wire workspace-defined apps, commands
//! and jobs to a host-provided picker and command registry through narrow,
//! injected interfaces.
//!
//! # Example
//!
//! ```rust
//! use powertools::{replace_values, ReplaceOptions, ValueSettings};
//!
//! let settings = ValueSettings::from_str(r#"
//!     [values]
//!     NAME = "world"
//! "#).unwrap();
//!
//! let out = replace_values(Some(&settings), "Hello, ${NAME}!", ReplaceOptions::new());
//! assert_eq!(out, "Hello, world!");
//! ```

pub mod commands;
pub mod settings;
pub mod values;
pub mod workspace;

pub use commands::{
    register_commands, CommandRegistry, ErrorSink, PaletteEntry, QuickPick,
};
pub use settings::{SettingsError, ValueSettings};
pub use values::{
    normalize, replace_values, to_values, ReplaceOptions, Scalar, Value, ValueMap, ValueSource,
};

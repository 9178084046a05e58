//! `${NAME}` placeholder resolution

use once_cell::sync::Lazy;
use regex::Regex;

use super::value::{to_values, Value, ValueSource};

/// Matches `${NAME}` where NAME contains no closing brace
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]*)\}").expect("Valid regex pattern"));

/// Normalize a name for comparison
///
/// Surrounding whitespace is trimmed and the name is lowercased, so lookups
/// are case and whitespace insensitive.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Options for [`replace_values`]
#[derive(Debug, Default)]
pub struct ReplaceOptions {
    built_in_values: Vec<Value>,
}

impl ReplaceOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a built-in value
    ///
    /// Built-ins are placed before source-derived values in the candidate
    /// list, so a source entry with the same normalized name overrides them.
    pub fn with_built_in(mut self, value: Value) -> Self {
        self.built_in_values.push(value);
        self
    }

    /// Add several built-in values
    pub fn with_built_ins(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.built_in_values.extend(values);
        self
    }
}

/// Replace `${NAME}` placeholders in `input`
///
/// The candidate list is the built-in values from `options` followed by the
/// values extracted from `source`. Each placeholder name is normalized and
/// compared against the normalized candidate names; when several candidates
/// match, the last one in the list wins. The matched payload is substituted
/// in its safe string form, invoking function-backed providers at that
/// moment. Placeholders that match no candidate are left in place verbatim.
///
/// The scan is a single left-to-right pass: substituted text is never
/// re-scanned, and no payload is cached between placeholders. Callers with
/// non-string inputs coerce them through [`Scalar`]'s `Display` first (an
/// absent payload renders as the empty string).
///
/// [`Scalar`]: super::Scalar
pub fn replace_values(
    source: Option<&dyn ValueSource>,
    input: &str,
    options: ReplaceOptions,
) -> String {
    let mut candidates = options.built_in_values;
    candidates.extend(to_values(source));

    PLACEHOLDER_REGEX
        .replace_all(input, |caps: &regex::Captures| {
            let wanted = normalize(&caps[1]);

            let matched = candidates
                .iter()
                .rev()
                .find(|v| normalize(v.name().unwrap_or("")) == wanted);

            match matched {
                Some(value) => value.get().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

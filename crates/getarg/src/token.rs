//! Classification of raw argv tokens.

use std::borrow::Cow;

/// Prefix that turns `-name` into its negated spelling `-noname`.
pub const NEGATION_PREFIX: &str = "no";

/// The value half of a single flag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// `-name` with no `=` at all.
    Bare,
    /// `-name=value`; the value may be empty (`-name=`).
    Given(String),
}

impl RawValue {
    /// The value as a string slice. A bare flag reads as `""`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bare => "",
            Self::Given(v) => v.as_str(),
        }
    }
}

/// One token from an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A flag with its canonical (single-dash) name.
    Flag { name: Cow<'a, str>, value: RawValue },
    /// Anything not starting with `-`.
    Positional(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw token.
    ///
    /// The name/value split happens on the first `=`, so `-a=b=c` is the flag
    /// `-a` with value `b=c`.
    pub fn classify(raw: &'a str) -> Self {
        if !raw.starts_with('-') {
            return Self::Positional(raw);
        }

        let (name, value) = match raw.split_once('=') {
            Some((name, value)) => (name, RawValue::Given(value.to_string())),
            None => (raw, RawValue::Bare),
        };

        Self::Flag {
            name: canonical_name(name),
            value,
        }
    }
}

/// Canonicalize a flag name to a single leading dash.
///
/// A leading `--` collapses to `-`. Names given without any dash (as query
/// keys sometimes are) get one prepended.
pub fn canonical_name(raw: &str) -> Cow<'_, str> {
    if let Some(rest) = raw.strip_prefix("--") {
        Cow::Owned(format!("-{rest}"))
    } else if raw.starts_with('-') {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("-{raw}"))
    }
}

/// The negated spelling of a canonical flag name: `-name` -> `-noname`.
pub fn negated_name(name: &str) -> String {
    let bare = name.strip_prefix('-').unwrap_or(name);
    format!("-{NEGATION_PREFIX}{bare}")
}

/// Interpret a flag value in boolean context.
///
/// Exactly `"0"` is false; everything else (including `""`) is true.
pub fn truthy(value: &str) -> bool {
    value != "0"
}

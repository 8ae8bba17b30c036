use std::fmt::Display;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ArgError;
use crate::token::{RawValue, Token, canonical_name, negated_name, truthy};

/// What a lookup found for one flag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState<'a> {
    /// Not given.
    Absent,
    /// Given without `=value`.
    Bare,
    /// Given with `=value` (possibly empty).
    Given(&'a str),
}

impl<'a> FlagState<'a> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The flag's value, with a bare flag reading as `""`.
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Self::Absent => None,
            Self::Bare => Some(""),
            Self::Given(v) => Some(v),
        }
    }
}

impl<'a> From<&'a RawValue> for FlagState<'a> {
    fn from(raw: &'a RawValue) -> Self {
        match raw {
            RawValue::Bare => Self::Bare,
            RawValue::Given(v) => Self::Given(v.as_str()),
        }
    }
}

/// Default values accepted by [`ArgumentStore::get_arg`].
///
/// The default's type picks the lookup semantics:
/// - `&str` / `String`: the flag's value, `""` for a bare flag
/// - `i64`: the value parsed as base-10, `0` when it is bare or not a number
///
/// The default is only returned when the flag is absent.
pub trait Fallback<'a> {
    type Output;
    fn resolve(self, state: FlagState<'a>) -> Self::Output;
}

impl<'a> Fallback<'a> for &'a str {
    type Output = &'a str;

    fn resolve(self, state: FlagState<'a>) -> Self::Output {
        state.value().unwrap_or(self)
    }
}

impl<'a> Fallback<'a> for String {
    type Output = String;

    fn resolve(self, state: FlagState<'a>) -> Self::Output {
        match state.value() {
            Some(v) => v.to_string(),
            None => self,
        }
    }
}

impl<'a> Fallback<'a> for i64 {
    type Output = i64;

    fn resolve(self, state: FlagState<'a>) -> Self::Output {
        match state {
            FlagState::Absent => self,
            FlagState::Bare => 0,
            FlagState::Given(v) => v.parse().unwrap_or(0),
        }
    }
}

/// Flags parsed from one argument vector.
///
/// Built once by [`ArgumentStore::parse`] and read-only for the plain
/// accessors afterwards. Every occurrence of a flag is kept; lookups see the
/// last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    flags: IndexMap<String, Vec<RawValue>>,
    positionals: Vec<String>,
}

impl ArgumentStore {
    /// Parse a full argument vector. The first element is the program name
    /// and is discarded.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_args(argv.into_iter().skip(1))
    }

    /// Parse arguments that do not start with a program name.
    pub fn parse_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for arg in args {
            store.push(arg.as_ref());
        }
        tracing::debug!(
            flags = store.flags.len(),
            positionals = store.positionals.len(),
            "parsed argument vector"
        );
        store
    }

    /// Parse the current process's arguments.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::parse(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    fn push(&mut self, raw: &str) {
        match Token::classify(raw) {
            Token::Flag { name, value } => {
                tracing::trace!(%name, ?value, "flag");
                self.flags.entry(name.into_owned()).or_default().push(value);
            }
            Token::Positional(arg) => {
                tracing::trace!(arg, "skipping positional");
                self.positionals.push(arg.to_string());
            }
        }
    }

    fn state_of(&self, canonical: &str) -> FlagState<'_> {
        self.flags
            .get(canonical)
            .and_then(|values| values.last())
            .map(FlagState::from)
            .unwrap_or(FlagState::Absent)
    }

    /// Look up a flag by name (`-name`, `--name` or `name`).
    pub fn lookup(&self, name: &str) -> FlagState<'_> {
        self.state_of(&canonical_name(name))
    }

    /// Whether the flag was given at all. `-noname` does not count as `-name`.
    pub fn is_set(&self, name: &str) -> bool {
        self.lookup(name).is_present()
    }

    /// Boolean lookup with `-noname` negation.
    ///
    /// 1. `-name` present: its value decides (`"0"` is false, anything else,
    ///    including no value, is true). `-noname` is ignored entirely.
    /// 2. Otherwise `-noname` present: the flag is off, unless its value is
    ///    `"0"`, in which case the double negative turns it on.
    /// 3. Otherwise `default`.
    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        let name = canonical_name(name);
        match self.state_of(&name) {
            FlagState::Bare => true,
            FlagState::Given(v) => truthy(v),
            FlagState::Absent => match self.state_of(&negated_name(&name)) {
                FlagState::Absent => default,
                FlagState::Bare => false,
                FlagState::Given(v) => !truthy(v),
            },
        }
    }

    /// String or integer lookup, depending on the type of `default`.
    ///
    /// See [`Fallback`] for the exact semantics of each default type.
    pub fn get_arg<'a, D>(&'a self, name: &str, default: D) -> D::Output
    where
        D: Fallback<'a>,
    {
        default.resolve(self.lookup(name))
    }

    /// Strict lookup for callers that must tell "missing" from "malformed".
    ///
    /// Returns `Ok(None)` when the flag is absent.
    pub fn try_get<T>(&self, name: &str) -> Result<Option<T>, ArgError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let name = canonical_name(name);
        match self.state_of(&name) {
            FlagState::Absent => Ok(None),
            FlagState::Bare => Err(ArgError::MissingValue {
                name: name.into_owned(),
            }),
            FlagState::Given(v) => v.parse().map(Some).map_err(|e: T::Err| {
                ArgError::InvalidValue {
                    name: name.to_string(),
                    value: v.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Every value the flag was given, in order. Bare occurrences read as `""`.
    pub fn get_args(&self, name: &str) -> Vec<&str> {
        self.flags
            .get(canonical_name(name).as_ref())
            .map(|values| values.iter().map(RawValue::as_str).collect())
            .unwrap_or_default()
    }

    /// Set a flag only if it was not given. Returns whether it was set.
    pub fn soft_set_arg(&mut self, name: &str, value: impl Into<String>) -> bool {
        let name = canonical_name(name);
        if self.flags.contains_key(name.as_ref()) {
            return false;
        }
        let value = value.into();
        tracing::debug!(%name, %value, "soft-set argument");
        self.flags
            .insert(name.into_owned(), vec![RawValue::Given(value)]);
        true
    }

    /// Boolean form of [`soft_set_arg`](Self::soft_set_arg), stored as `"1"`/`"0"`.
    pub fn soft_set_bool_arg(&mut self, name: &str, value: bool) -> bool {
        self.soft_set_arg(name, if value { "1" } else { "0" })
    }

    /// Tokens that did not start with `-`, in order.
    pub fn positionals(&self) -> &[String] {
        self.positionals.as_slice()
    }

    /// Effective state of every flag, in the order flags were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FlagState<'_>)> {
        self.flags.iter().filter_map(|(name, values)| {
            values
                .last()
                .map(|last| (name.as_str(), FlagState::from(last)))
        })
    }

    /// Number of distinct flag names.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

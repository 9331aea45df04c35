//! Option specification types.
//!
//! An [`OptionSpec`] describes one recognized option: its long and/or short
//! name, whether it takes an argument, and whether the option must appear at
//! all. Specs are collected into an [`OptionTable`](crate::OptionTable),
//! which validates them before any parse runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an option accepts an argument.
///
/// # Examples
///
/// ```
/// use getopt_long_core::ArgRequirement;
///
/// assert_eq!(ArgRequirement::default(), ArgRequirement::Forbidden);
/// assert_eq!(ArgRequirement::Required.optstring_suffix(), ":");
/// assert_eq!(ArgRequirement::Optional.optstring_suffix(), "::");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArgRequirement {
    /// The option never takes an argument (the default).
    #[default]
    Forbidden,
    /// An argument may be attached (`--opt=value`, `-ovalue`) but is never
    /// taken from the following token.
    Optional,
    /// An argument must be supplied, attached or as the next token.
    Required,
}

impl ArgRequirement {
    /// Suffix used for this requirement in a GNU-style short option string.
    pub fn optstring_suffix(self) -> &'static str {
        match self {
            ArgRequirement::Forbidden => "",
            ArgRequirement::Optional => "::",
            ArgRequirement::Required => ":",
        }
    }

    /// Returns `true` unless the argument is [`Forbidden`](Self::Forbidden).
    pub fn accepts_value(self) -> bool {
        !matches!(self, ArgRequirement::Forbidden)
    }
}

/// Specification of a single recognized option.
///
/// At least one of `long`/`short` must be set; [`OptionTable::build`]
/// rejects specs that have neither.
///
/// # Examples
///
/// ```
/// use getopt_long_core::{ArgRequirement, OptionSpec};
///
/// let output = OptionSpec::long("output")
///     .with_short('o')
///     .required_argument()
///     .mandatory();
/// assert_eq!(output.canonical_name(), "--output");
/// assert_eq!(output.argument, ArgRequirement::Required);
/// assert!(output.mandatory);
///
/// let verbose = OptionSpec::short('v');
/// assert_eq!(verbose.canonical_name(), "-v");
/// ```
///
/// [`OptionTable::build`]: crate::OptionTable::build
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name without the leading dashes (e.g. `"help"`).
    #[serde(default)]
    pub long: Option<String>,
    /// Single-character short name (e.g. `'h'`).
    #[serde(default)]
    pub short: Option<char>,
    /// Whether a value must, may or must not follow.
    #[serde(default)]
    pub argument: ArgRequirement,
    /// Omitting a mandatory option fails the parse.
    #[serde(default)]
    pub mandatory: bool,
}

impl OptionSpec {
    /// Creates a spec from an optional long and short name.
    pub fn new(long: Option<&str>, short: Option<char>) -> Self {
        Self {
            long: long.map(String::from),
            short,
            argument: ArgRequirement::Forbidden,
            mandatory: false,
        }
    }

    /// Creates a long-only option.
    pub fn long(name: &str) -> Self {
        Self::new(Some(name), None)
    }

    /// Creates a short-only option.
    pub fn short(name: char) -> Self {
        Self::new(None, Some(name))
    }

    /// Adds a short alias.
    pub fn with_short(mut self, name: char) -> Self {
        self.short = Some(name);
        self
    }

    /// Sets the argument requirement.
    pub fn with_argument(mut self, argument: ArgRequirement) -> Self {
        self.argument = argument;
        self
    }

    /// Shorthand for `with_argument(ArgRequirement::Required)`.
    pub fn required_argument(self) -> Self {
        self.with_argument(ArgRequirement::Required)
    }

    /// Shorthand for `with_argument(ArgRequirement::Optional)`.
    pub fn optional_argument(self) -> Self {
        self.with_argument(ArgRequirement::Optional)
    }

    /// Marks the option as mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Returns the name used in diagnostics: `--long` if declared, otherwise
    /// `-s`.
    pub fn canonical_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

/// A declared option name used to look up results.
///
/// Converts from `&str` (long name, without dashes), `char` (short name) or
/// an [`OptionSpec`] (its long name if present, else its short name).
///
/// # Examples
///
/// ```
/// use getopt_long_core::OptionName;
///
/// assert_eq!(OptionName::from("help"), OptionName::Long("help"));
/// assert_eq!(OptionName::from('h'), OptionName::Short('h'));
/// assert_eq!(OptionName::from('h').to_string(), "-h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName<'a> {
    /// Long name without the leading `--`.
    Long(&'a str),
    /// Short name without the leading `-`.
    Short(char),
}

impl OptionName<'_> {
    /// Checks whether this name is one of the declared `long`/`short` pair.
    pub(crate) fn refers_to(&self, long: Option<&str>, short: Option<char>) -> bool {
        match self {
            OptionName::Long(name) => long == Some(*name),
            OptionName::Short(name) => short == Some(*name),
        }
    }
}

impl<'a> From<&'a str> for OptionName<'a> {
    fn from(name: &'a str) -> Self {
        OptionName::Long(name)
    }
}

impl From<char> for OptionName<'_> {
    fn from(name: char) -> Self {
        OptionName::Short(name)
    }
}

impl<'a> From<&'a OptionSpec> for OptionName<'a> {
    fn from(spec: &'a OptionSpec) -> Self {
        match (&spec.long, spec.short) {
            (Some(long), _) => OptionName::Long(long),
            (None, Some(short)) => OptionName::Short(short),
            // Only reachable for specs that never passed table validation.
            (None, None) => OptionName::Long(""),
        }
    }
}

impl fmt::Display for OptionName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionName::Long(long) => write!(f, "--{long}"),
            OptionName::Short(short) => write!(f, "-{short}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let spec = OptionSpec::long("list")
            .with_short('l')
            .optional_argument();

        assert_eq!(spec.long.as_deref(), Some("list"));
        assert_eq!(spec.short, Some('l'));
        assert_eq!(spec.argument, ArgRequirement::Optional);
        assert!(!spec.mandatory);
    }

    #[test]
    fn test_name_refers_to_either_declared_name() {
        assert!(OptionName::Long("help").refers_to(Some("help"), Some('h')));
        assert!(OptionName::Short('h').refers_to(Some("help"), Some('h')));
        assert!(!OptionName::Long("he").refers_to(Some("help"), Some('h')));
        assert!(!OptionName::Short('x').refers_to(Some("help"), Some('h')));
        assert!(!OptionName::Long("help").refers_to(None, Some('h')));
    }

    #[test]
    fn test_accepts_value() {
        assert!(!ArgRequirement::Forbidden.accepts_value());
        assert!(ArgRequirement::Optional.accepts_value());
        assert!(ArgRequirement::Required.accepts_value());
    }

    #[test]
    fn test_optstring_suffixes() {
        assert_eq!(ArgRequirement::Forbidden.optstring_suffix(), "");
        assert_eq!(ArgRequirement::Optional.optstring_suffix(), "::");
        assert_eq!(ArgRequirement::Required.optstring_suffix(), ":");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let spec: OptionSpec = serde_json::from_str(r#"{"long": "verbose"}"#).unwrap();
        assert_eq!(spec, OptionSpec::long("verbose"));

        let spec: OptionSpec =
            serde_json::from_str(r#"{"short": "o", "argument": "required", "mandatory": true}"#)
                .unwrap();
        assert_eq!(spec, OptionSpec::short('o').required_argument().mandatory());
    }

    #[test]
    fn test_deserialize_rejects_unknown_requirement() {
        let result: Result<OptionSpec, _> =
            serde_json::from_str(r#"{"long": "x", "argument": "sometimes"}"#);
        assert!(result.is_err());
    }
}

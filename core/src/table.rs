//! Validated, immutable collection of option specs.
//!
//! [`OptionTable::build`] checks the declared specs once up front (names
//! present and well formed, no collisions) so that the parser never has to
//! deal with a malformed declaration. After construction the table is
//! read-only and can be shared between threads running independent parses.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{ParseError, TableError};
use crate::spec::OptionSpec;

/// Failure to resolve an option name against a table.
///
/// Carries no position information; the parser attaches the token index when
/// converting it into a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No declared option matches.
    #[error("no such option")]
    Unknown,
    /// Several long options start with the given prefix.
    #[error("ambiguous prefix")]
    Ambiguous(Vec<String>),
}

impl LookupError {
    pub(crate) fn at(self, option: String, index: usize) -> ParseError {
        match self {
            LookupError::Unknown => ParseError::UnknownOption { option, index },
            LookupError::Ambiguous(candidates) => ParseError::AmbiguousOption {
                option,
                candidates,
                index,
            },
        }
    }
}

/// A validated option table.
///
/// # Examples
///
/// ```
/// use getopt_long_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::build(vec![
///     OptionSpec::long("help").with_short('h'),
///     OptionSpec::long("list").with_short('l').optional_argument(),
///     OptionSpec::long("link").required_argument(),
/// ])
/// .unwrap();
///
/// assert_eq!(table.lookup_long("help").unwrap().short, Some('h'));
/// assert_eq!(table.lookup_long("he").unwrap().long.as_deref(), Some("help"));
/// assert!(table.lookup_long("li").is_err()); // --list or --link
/// assert_eq!(table.optstring(), "hl::");
/// ```
#[derive(Debug, Clone)]
pub struct OptionTable {
    specs: Vec<OptionSpec>,
    by_long: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
    config: ParserConfig,
}

impl OptionTable {
    /// Builds a table with the default [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidSpec`] for a spec with no name or a
    /// malformed name, and [`TableError::DuplicateOption`] when two specs
    /// share a long or short name. The first offending spec in declaration
    /// order is reported.
    pub fn build(specs: Vec<OptionSpec>) -> Result<Self, TableError> {
        Self::with_config(specs, ParserConfig::default())
    }

    /// Builds a table with an explicit [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn with_config(specs: Vec<OptionSpec>, config: ParserConfig) -> Result<Self, TableError> {
        let mut by_long = HashMap::new();
        let mut by_short = HashMap::new();

        for (index, spec) in specs.iter().enumerate() {
            validate_spec(index, spec)?;

            if let Some(long) = &spec.long {
                if by_long.insert(long.clone(), index).is_some() {
                    return Err(TableError::DuplicateOption(format!("--{long}")));
                }
            }
            if let Some(short) = spec.short {
                if by_short.insert(short, index).is_some() {
                    return Err(TableError::DuplicateOption(format!("-{short}")));
                }
            }
        }

        debug!(
            options = specs.len(),
            abbreviations = config.abbreviations,
            ordering = ?config.ordering,
            "built option table"
        );

        Ok(Self {
            specs,
            by_long,
            by_short,
            config,
        })
    }

    /// Declared specs, in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Parser settings for this table.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if no options are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolves a long option name (without the leading `--`).
    ///
    /// An exact match always wins. Otherwise, when abbreviations are
    /// enabled, a case-sensitive prefix matching exactly one long name
    /// resolves to that option.
    ///
    /// # Errors
    ///
    /// [`LookupError::Ambiguous`] lists every matching option in declaration
    /// order; [`LookupError::Unknown`] is returned when nothing matches.
    pub fn lookup_long(&self, name: &str) -> Result<&OptionSpec, LookupError> {
        self.position_long(name).map(|index| &self.specs[index])
    }

    /// Resolves a short option character.
    ///
    /// # Errors
    ///
    /// [`LookupError::Unknown`] when no option has this short name.
    pub fn lookup_short(&self, name: char) -> Result<&OptionSpec, LookupError> {
        self.position_short(name).map(|index| &self.specs[index])
    }

    pub(crate) fn position_long(&self, name: &str) -> Result<usize, LookupError> {
        if let Some(&index) = self.by_long.get(name) {
            return Ok(index);
        }
        if !self.config.abbreviations || name.is_empty() {
            return Err(LookupError::Unknown);
        }

        let matches: Vec<usize> = self
            .specs
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.long.as_deref().is_some_and(|long| long.starts_with(name)))
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [] => Err(LookupError::Unknown),
            [index] => Ok(*index),
            _ => Err(LookupError::Ambiguous(
                matches
                    .iter()
                    .map(|&index| self.specs[index].canonical_name())
                    .collect(),
            )),
        }
    }

    pub(crate) fn position_short(&self, name: char) -> Result<usize, LookupError> {
        self.by_short
            .get(&name)
            .copied()
            .ok_or(LookupError::Unknown)
    }

    /// Synthesizes the GNU `getopt` short option string for this table.
    ///
    /// Each short name is followed by `:` if it requires an argument or `::`
    /// if the argument is optional. Long-only options are skipped.
    pub fn optstring(&self) -> String {
        self.specs
            .iter()
            .filter_map(|spec| {
                spec.short
                    .map(|short| format!("{short}{}", spec.argument.optstring_suffix()))
            })
            .collect()
    }
}

fn validate_spec(index: usize, spec: &OptionSpec) -> Result<(), TableError> {
    let invalid = |reason: String| TableError::InvalidSpec { index, reason };

    if spec.long.is_none() && spec.short.is_none() {
        return Err(invalid("option must define a long or short name".to_string()));
    }

    if let Some(long) = &spec.long {
        if long.is_empty() {
            return Err(invalid("long name cannot be empty".to_string()));
        }
        if long.starts_with('-') {
            return Err(invalid(format!(
                "long name '{long}' must not include leading dashes"
            )));
        }
        if long.contains('=') || long.chars().any(char::is_whitespace) {
            return Err(invalid(format!(
                "long name '{long}' contains '=' or whitespace"
            )));
        }
    }

    if let Some(short) = spec.short {
        if matches!(short, '-' | ':' | '=') || short.is_whitespace() || short.is_control() {
            return Err(invalid(format!("'{}' cannot be a short name", short.escape_default())));
        }
    }

    Ok(())
}

//! Error types for table construction and parsing.
//!
//! [`TableError`] covers problems in the declared option specs and is
//! returned by [`OptionTable::build`](crate::OptionTable::build).
//! [`ParseError`] covers problems in the user-supplied argument vector. The
//! `Display` impls use getopt's diagnostic wording so a host program can
//! print them directly.

use thiserror::Error;

/// Errors detected while building an [`OptionTable`](crate::OptionTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A spec is structurally invalid (no name, malformed name).
    #[error("invalid option spec at index {index}: {reason}")]
    InvalidSpec {
        /// Position of the spec in the declaration order.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
    /// Two specs share a long or short name.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
}

/// Errors detected while parsing an argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token names no declared option.
    #[error("{}", unknown_message(.option))]
    UnknownOption {
        /// The option as written, including dashes (e.g. `--x`, `-q`).
        option: String,
        /// Index of the offending token in the argument vector.
        index: usize,
    },
    /// An abbreviated long option matches more than one declared option.
    #[error("option '{option}' is ambiguous; possibilities: {}", quote_all(.candidates))]
    AmbiguousOption {
        /// The abbreviation as written (e.g. `--li`).
        option: String,
        /// Matching options in declaration order (e.g. `--list`, `--link`).
        candidates: Vec<String>,
        /// Index of the offending token in the argument vector.
        index: usize,
    },
    /// An option that requires an argument was the last token.
    #[error("{}", missing_argument_message(.option))]
    MissingArgument {
        /// Canonical name of the option.
        option: String,
        /// Index of the token carrying the option.
        index: usize,
    },
    /// A `--name=value` token was given for an option that forbids values.
    #[error("option '{option}' doesn't allow an argument")]
    UnexpectedArgument {
        /// Canonical name of the option.
        option: String,
        /// Index of the offending token in the argument vector.
        index: usize,
    },
    /// One or more mandatory options never appeared.
    #[error("missing mandatory option(s): {}", quote_all(.0))]
    MissingMandatoryOption(Vec<String>),
}

impl ParseError {
    /// Index of the token that caused the failure, if it is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::UnknownOption { index, .. }
            | ParseError::AmbiguousOption { index, .. }
            | ParseError::MissingArgument { index, .. }
            | ParseError::UnexpectedArgument { index, .. } => Some(*index),
            ParseError::MissingMandatoryOption(_) => None,
        }
    }
}

/// Short options are reported in getopt's `-- 'c'` form.
fn short_form(option: &str) -> Option<&str> {
    option.strip_prefix('-').filter(|name| !name.starts_with('-'))
}

fn unknown_message(option: &str) -> String {
    match short_form(option) {
        Some(name) => format!("invalid option -- '{name}'"),
        None => format!("unrecognized option '{option}'"),
    }
}

fn missing_argument_message(option: &str) -> String {
    match short_form(option) {
        Some(name) => format!("option requires an argument -- '{name}'"),
        None => format!("option '{option}' requires an argument"),
    }
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Table construction failed.
    #[error(transparent)]
    Table(#[from] TableError),
    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! Option table definition files.
//!
//! A definition declares the options a host program recognizes, plus the
//! parser settings, in YAML or JSON. The format is picked from the file
//! extension (`.json` is JSON, anything else is YAML).
//!
//! # Example YAML
//!
//! ```yaml
//! config:
//!   abbreviations: true
//!   ordering: permute
//! options:
//!   - long: help
//!     short: h
//!   - long: output
//!     short: o
//!     argument: required
//!   - long: version
//!     mandatory: true
//! ```

use std::io::BufReader;
use std::path::Path;

use getopt_long_core::{OptionSpec, OptionTable, Ordering, ParserConfig, TableError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The declared options do not form a valid table.
    #[error("invalid option table: {0}")]
    InvalidTable(#[from] TableError),
}

/// Command-line overrides applied on top of a definition's config.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub permute: bool,
    pub no_abbreviations: bool,
}

/// Serializable option table declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Parser settings; every field has a default.
    #[serde(default)]
    pub config: ParserConfig,
    /// Declared options, in order.
    pub options: Vec<OptionSpec>,
}

impl TableDefinition {
    /// Loads a definition from a YAML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let definition = if is_json {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        Ok(definition)
    }

    /// Applies overrides and validates the options into a table.
    pub fn into_table(self, overrides: Overrides) -> Result<OptionTable, DefinitionError> {
        let mut config = self.config;
        if overrides.permute {
            config = config.with_ordering(Ordering::Permute);
        }
        if overrides.no_abbreviations {
            config = config.with_abbreviations(false);
        }
        Ok(OptionTable::with_config(self.options, config)?)
    }
}

//! Parser behavior switches.
//!
//! # Example YAML
//!
//! ```yaml
//! abbreviations: true
//! ordering: permute
//! ```

use serde::{Deserialize, Serialize};

/// How operands interleaved with options are handled.
///
/// A `--` token ends option scanning under either ordering.
///
/// # Examples
///
/// ```
/// use getopt_long_core::Ordering;
///
/// assert_eq!(Ordering::default(), Ordering::RequireOrder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// POSIX behavior: the first operand ends option scanning, and every
    /// later token is an operand even if it looks like an option.
    #[default]
    RequireOrder,
    /// GNU behavior: options are recognized anywhere in the vector, and
    /// operands are collected in input order as if permuted to the end.
    Permute,
}

/// Settings that apply to every parse against a table.
///
/// # Examples
///
/// ```
/// use getopt_long_core::{Ordering, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert!(config.abbreviations);
/// assert_eq!(config.ordering, Ordering::RequireOrder);
///
/// let gnu = ParserConfig::default().with_ordering(Ordering::Permute);
/// assert_eq!(gnu.ordering, Ordering::Permute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Accept unambiguous prefixes of long option names.
    #[serde(default = "default_abbreviations")]
    pub abbreviations: bool,
    /// Operand ordering mode.
    #[serde(default)]
    pub ordering: Ordering,
}

fn default_abbreviations() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            abbreviations: default_abbreviations(),
            ordering: Ordering::default(),
        }
    }
}

impl ParserConfig {
    /// Enables or disables long option abbreviation.
    pub fn with_abbreviations(mut self, enabled: bool) -> Self {
        self.abbreviations = enabled;
        self
    }

    /// Sets the operand ordering mode.
    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }
}

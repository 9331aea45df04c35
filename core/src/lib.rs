//! A self-contained `getopt_long`-style option parsing engine.
//!
//! This crate classifies a program's argument vector against a declared
//! table of options:
//!
//! - [`OptionSpec`] — one recognized option: long name, short alias,
//!   argument requirement, and whether it is mandatory.
//! - [`OptionTable`] — validated, immutable set of specs plus a
//!   [`ParserConfig`] (long option abbreviation, operand [`Ordering`]).
//! - [`parse`] — a single synchronous pass producing a [`ParseResult`] with
//!   per-option occurrence counts and arguments, the operands in input order,
//!   and the index where option processing stopped.
//!
//! Table construction fails with a [`TableError`]; parsing fails with a
//! [`ParseError`]. A failed parse yields no result at all.
//!
//! The engine never prints and never exits. Rendering diagnostics is up to
//! the host program.
//!
//! # Example
//!
//! ```
//! use getopt_long_core::*;
//!
//! let table = OptionTable::build(vec![
//!     OptionSpec::long("help").with_short('h'),
//!     OptionSpec::long("list").with_short('l').optional_argument(),
//!     OptionSpec::long("version").mandatory(),
//! ])
//! .unwrap();
//!
//! let result = table.parse(["prog", "--vers", "--list=csv", "-h", "file"]).unwrap();
//! assert_eq!(result.occurrence_count("version"), 1);
//! assert_eq!(result.argument_values('l'), ["csv"]);
//! assert!(result.is_present("help"));
//! assert_eq!(result.operands(), ["file"]);
//!
//! let err = table.parse(["prog", "-h"]).unwrap_err();
//! assert_eq!(err, ParseError::MissingMandatoryOption(vec!["--version".into()]));
//! ```

mod config;
mod error;
mod parser;
mod result;
mod spec;
mod table;

pub use config::{Ordering, ParserConfig};
pub use error::{Error, ParseError, Result, TableError};
pub use parser::parse;
pub use result::{OccurrenceRecord, OptionOccurrences, ParseResult};
pub use spec::{ArgRequirement, OptionName, OptionSpec};
pub use table::{LookupError, OptionTable};

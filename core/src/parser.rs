//! Single-pass classification of an argument vector.
//!
//! The parser walks the vector with an explicit [`Cursor`] and a small state
//! machine:
//!
//! - `Scanning` reads the next whole token and decides whether it is the
//!   `--` terminator, a long option, the start of a short option cluster, or
//!   an operand.
//! - `ShortCluster` consumes one character of a `-abc` cluster per step.
//!   An option that accepts an argument swallows the rest of the cluster as
//!   its value.
//! - `Done` means every remaining token has been classified.
//!
//! All state lives in the [`Parser`] value created for one call, so a single
//! [`OptionTable`] can serve any number of concurrent parses.

use tracing::{debug, trace};

use crate::config::Ordering;
use crate::error::ParseError;
use crate::result::ParseResult;
use crate::spec::ArgRequirement;
use crate::table::OptionTable;

/// Parses `args` against `table`.
///
/// Index 0 of `args` is the program name and is skipped.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. Once all tokens are
/// classified, every mandatory option that never appeared is reported
/// together in a single [`ParseError::MissingMandatoryOption`].
///
/// # Examples
///
/// ```
/// use getopt_long_core::{OptionSpec, OptionTable, ParseError, parse};
///
/// let table = OptionTable::build(vec![
///     OptionSpec::long("help").with_short('h'),
///     OptionSpec::long("list").with_short('l').optional_argument(),
/// ])
/// .unwrap();
///
/// let result = parse(&table, ["prog", "-l", "csv", "extra"]).unwrap();
/// assert_eq!(result.occurrence_count("list"), 1);
/// assert!(result.argument_values("list").is_empty());
/// assert_eq!(result.operands(), ["csv", "extra"]);
///
/// let err = parse(&table, ["prog", "--x"]).unwrap_err();
/// assert!(matches!(err, ParseError::UnknownOption { .. }));
/// ```
pub fn parse<I, S>(table: &OptionTable, args: I) -> Result<ParseResult, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_owned())
        .collect();

    debug!(
        arguments = args.len(),
        options = table.len(),
        ordering = ?table.config().ordering,
        "parsing argument vector"
    );

    let result = Parser::new(table, &args).run();
    match &result {
        Ok(parsed) => debug!(
            occurrences = parsed.total_occurrences(),
            operands = parsed.operands().len(),
            stop_index = parsed.stop_index(),
            "parse complete"
        ),
        Err(err) => debug!(%err, "parse failed"),
    }
    result
}

impl OptionTable {
    /// Parses `args` against this table. See [`parse`].
    ///
    /// # Errors
    ///
    /// Same as [`parse`].
    pub fn parse<I, S>(&self, args: I) -> Result<ParseResult, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse(self, args)
    }
}

/// Position of the next unconsumed token.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    next: usize,
}

impl Cursor {
    fn new(start: usize) -> Self {
        Self { next: start }
    }

    /// Consumes the next token, returning its index.
    fn take(&mut self, len: usize) -> Option<usize> {
        if self.next >= len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }

    fn skip_to_end(&mut self, len: usize) {
        self.next = self.next.max(len);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    /// `offset` is the byte offset of the next cluster character in
    /// `args[index]`.
    ShortCluster { index: usize, offset: usize },
    Done,
}

struct Parser<'a> {
    table: &'a OptionTable,
    args: &'a [String],
    cursor: Cursor,
    result: ParseResult,
}

impl<'a> Parser<'a> {
    fn new(table: &'a OptionTable, args: &'a [String]) -> Self {
        Self {
            table,
            args,
            cursor: Cursor::new(1),
            result: ParseResult::new(table.specs()),
        }
    }

    fn run(mut self) -> Result<ParseResult, ParseError> {
        let mut state = State::Scanning;
        loop {
            state = match state {
                State::Scanning => self.scan()?,
                State::ShortCluster { index, offset } => self.short_cluster(index, offset)?,
                State::Done => break,
            };
        }
        self.check_mandatory()?;
        Ok(self.result)
    }

    fn scan(&mut self) -> Result<State, ParseError> {
        let args = self.args;
        let Some(index) = self.cursor.take(args.len()) else {
            self.result.set_stop_index(args.len());
            return Ok(State::Done);
        };
        let token = args[index].as_str();

        if token == "--" {
            trace!(index, "option terminator");
            self.take_operands(index + 1);
            return Ok(State::Done);
        }

        if let Some(body) = token.strip_prefix("--") {
            self.long_option(index, body)?;
            return Ok(State::Scanning);
        }

        if token.len() > 1 && token.starts_with('-') {
            return Ok(State::ShortCluster { index, offset: 1 });
        }

        match self.table.config().ordering {
            Ordering::RequireOrder => {
                trace!(index, "first operand ends option scanning");
                self.take_operands(index);
                Ok(State::Done)
            }
            Ordering::Permute => {
                trace!(index, token, "operand");
                self.result.push_operand(token.to_owned());
                Ok(State::Scanning)
            }
        }
    }

    fn long_option(&mut self, index: usize, body: &str) -> Result<(), ParseError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let table = self.table;
        let position = table
            .position_long(name)
            .map_err(|err| {
                let written = if name.is_empty() { body } else { name };
                err.at(format!("--{written}"), index)
            })?;
        let spec = &table.specs()[position];
        trace!(index, option = %spec.canonical_name(), "long option");

        let value = match (spec.argument, inline) {
            (ArgRequirement::Forbidden, Some(_)) => {
                return Err(ParseError::UnexpectedArgument {
                    option: spec.canonical_name(),
                    index,
                });
            }
            (_, Some(value)) => Some(value.to_owned()),
            (ArgRequirement::Required, None) => Some(self.take_argument().ok_or_else(|| {
                ParseError::MissingArgument {
                    option: spec.canonical_name(),
                    index,
                }
            })?),
            (_, None) => None,
        };

        self.result.record_mut(position).record(value);
        Ok(())
    }

    fn short_cluster(&mut self, index: usize, offset: usize) -> Result<State, ParseError> {
        let args = self.args;
        let token = args[index].as_str();
        let Some(name) = token[offset..].chars().next() else {
            return Ok(State::Scanning);
        };
        let next = offset + name.len_utf8();

        let position = self
            .table
            .position_short(name)
            .map_err(|err| err.at(format!("-{name}"), index))?;
        let argument = self.table.specs()[position].argument;
        trace!(index, option = %name, "short option");

        if !argument.accepts_value() {
            self.result.record_mut(position).record(None);
            return Ok(if next < token.len() {
                State::ShortCluster {
                    index,
                    offset: next,
                }
            } else {
                State::Scanning
            });
        }

        let attached = &token[next..];
        let value = if !attached.is_empty() {
            Some(attached.to_owned())
        } else if argument == ArgRequirement::Required {
            Some(
                self.take_argument()
                    .ok_or_else(|| ParseError::MissingArgument {
                        option: format!("-{name}"),
                        index,
                    })?,
            )
        } else {
            None
        };

        self.result.record_mut(position).record(value);
        Ok(State::Scanning)
    }

    /// Consumes the next whole token as an option argument, whatever it
    /// looks like.
    fn take_argument(&mut self) -> Option<String> {
        self.cursor
            .take(self.args.len())
            .map(|index| self.args[index].clone())
    }

    fn take_operands(&mut self, from: usize) {
        let args = self.args;
        self.result.set_stop_index(from);
        for operand in &args[from..] {
            self.result.push_operand(operand.clone());
        }
        self.cursor.skip_to_end(args.len());
    }

    fn check_mandatory(&self) -> Result<(), ParseError> {
        let missing: Vec<String> = self
            .table
            .specs()
            .iter()
            .zip(self.result.iter())
            .filter(|(spec, seen)| spec.mandatory && seen.record.count == 0)
            .map(|(spec, _)| spec.canonical_name())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ParseError::MissingMandatoryOption(missing))
        }
    }
}

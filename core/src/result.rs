//! Per-option accumulation of a single parse.

use serde::Serialize;

use crate::spec::{OptionName, OptionSpec};

/// Occurrences of one option within a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccurrenceRecord {
    /// Number of times the option appeared.
    pub count: usize,
    /// One entry per occurrence that carried an argument, in input order.
    pub values: Vec<String>,
}

impl OccurrenceRecord {
    pub(crate) fn record(&mut self, value: Option<String>) {
        self.count += 1;
        if let Some(value) = value {
            self.values.push(value);
        }
    }
}

/// An option's declared names together with its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionOccurrences {
    /// Declared long name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Declared short name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// What was seen for this option.
    #[serde(flatten)]
    pub record: OccurrenceRecord,
}

impl OptionOccurrences {
    fn matches(&self, name: &OptionName<'_>) -> bool {
        name.refers_to(self.long.as_deref(), self.short)
    }
}

/// Outcome of a successful parse.
///
/// Holds one [`OccurrenceRecord`] per declared option (in declaration order,
/// including options that never appeared), the operands in input order, and
/// the index where option processing stopped.
///
/// Lookups take any [`OptionName`]: a long name as `&str`, a short name as
/// `char`, or an `&OptionSpec`. Looking up a name that was never declared is
/// a bug in the caller and panics; use [`get`](Self::get) to probe.
///
/// # Examples
///
/// ```
/// use getopt_long_core::{OptionSpec, OptionTable};
///
/// let table = OptionTable::build(vec![
///     OptionSpec::long("output").with_short('o').required_argument(),
///     OptionSpec::long("verbose").with_short('v'),
/// ])
/// .unwrap();
///
/// let result = table.parse(["prog", "-vv", "--output=a.txt", "input"]).unwrap();
/// assert_eq!(result.occurrence_count('v'), 2);
/// assert_eq!(result.argument_values("output"), ["a.txt"]);
/// assert_eq!(result.operands(), ["input"]);
/// assert_eq!(result.stop_index(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    options: Vec<OptionOccurrences>,
    operands: Vec<String>,
    stop_index: usize,
}

impl ParseResult {
    pub(crate) fn new(specs: &[OptionSpec]) -> Self {
        Self {
            options: specs
                .iter()
                .map(|spec| OptionOccurrences {
                    long: spec.long.clone(),
                    short: spec.short,
                    record: OccurrenceRecord::default(),
                })
                .collect(),
            operands: Vec::new(),
            stop_index: 0,
        }
    }

    pub(crate) fn record_mut(&mut self, position: usize) -> &mut OccurrenceRecord {
        &mut self.options[position].record
    }

    pub(crate) fn push_operand(&mut self, operand: String) {
        self.operands.push(operand);
    }

    pub(crate) fn set_stop_index(&mut self, index: usize) {
        self.stop_index = index;
    }

    /// Record for `name`, or `None` if no option was declared under it.
    pub fn get<'a>(&self, name: impl Into<OptionName<'a>>) -> Option<&OccurrenceRecord> {
        let name = name.into();
        self.options
            .iter()
            .find(|option| option.matches(&name))
            .map(|option| &option.record)
    }

    /// Number of times the option appeared.
    ///
    /// # Panics
    ///
    /// Panics if no option was declared under `name`.
    pub fn occurrence_count<'a>(&self, name: impl Into<OptionName<'a>>) -> usize {
        self.expect_record(name.into()).count
    }

    /// Arguments recorded for the option, in input order.
    ///
    /// # Panics
    ///
    /// Panics if no option was declared under `name`.
    pub fn argument_values<'a>(&self, name: impl Into<OptionName<'a>>) -> &[String] {
        &self.expect_record(name.into()).values
    }

    /// Returns `true` if the option appeared at least once.
    ///
    /// # Panics
    ///
    /// Panics if no option was declared under `name`.
    pub fn is_present<'a>(&self, name: impl Into<OptionName<'a>>) -> bool {
        self.occurrence_count(name) > 0
    }

    /// Positional operands, in input order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Index into the argument vector of the first token that was not
    /// subject to option processing.
    ///
    /// This is the first operand under
    /// [`RequireOrder`](crate::Ordering::RequireOrder), the token after a
    /// `--` terminator, or the length of the vector if scanning reached the
    /// end.
    pub fn stop_index(&self) -> usize {
        self.stop_index
    }

    /// Every declared option with its record, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionOccurrences> {
        self.options.iter()
    }

    /// Total occurrences across all options.
    pub fn total_occurrences(&self) -> usize {
        self.options.iter().map(|option| option.record.count).sum()
    }

    fn expect_record(&self, name: OptionName<'_>) -> &OccurrenceRecord {
        match self.get(name) {
            Some(record) => record,
            None => panic!("option {name} was not declared in the option table"),
        }
    }
}

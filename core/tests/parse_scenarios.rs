use std::sync::Arc;
use std::thread;

use getopt_long_core::{
    OptionSpec, OptionTable, Ordering, ParseError, ParserConfig, TableError, parse,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn help_list_table() -> OptionTable {
    OptionTable::build(vec![
        OptionSpec::long("help").with_short('h'),
        OptionSpec::long("list").with_short('l').optional_argument(),
    ])
    .unwrap()
}

fn full_table(ordering: Ordering) -> OptionTable {
    OptionTable::with_config(
        vec![
            OptionSpec::long("help").with_short('h'),
            OptionSpec::long("list").with_short('l').optional_argument(),
            OptionSpec::long("output").with_short('o').required_argument(),
            OptionSpec::long("verbose").with_short('v'),
        ],
        ParserConfig::default().with_ordering(ordering),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn long_flag_is_counted() {
    let result = parse(&help_list_table(), ["prog", "--help"]).unwrap();
    assert_eq!(result.occurrence_count("help"), 1);
    assert_eq!(result.occurrence_count("list"), 0);
    assert!(result.operands().is_empty());
}

#[test]
fn optional_short_argument_is_not_taken_from_next_token() {
    let result = parse(&help_list_table(), ["prog", "-l", "csv", "extra"]).unwrap();
    assert_eq!(result.occurrence_count("list"), 1);
    assert!(result.argument_values("list").is_empty());
    assert_eq!(result.operands(), ["csv", "extra"]);
}

#[test]
fn unique_prefix_resolves_long_option() {
    let result = parse(&help_list_table(), ["prog", "--lis"]).unwrap();
    assert_eq!(result.occurrence_count("list"), 1);
}

#[test]
fn unknown_long_option_fails() {
    let err = parse(&help_list_table(), ["prog", "--x"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownOption {
            option: "--x".to_string(),
            index: 1,
        }
    );
}

#[test]
fn short_option_diagnostics_use_getopt_wording() {
    let table = full_table(Ordering::RequireOrder);

    let err = parse(&table, ["prog", "-o"]).unwrap_err();
    assert_eq!(err.to_string(), "option requires an argument -- 'o'");
    assert_eq!(err.index(), Some(1));

    let err = parse(&table, ["prog", "-vq"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid option -- 'q'");
}

#[test]
fn ambiguous_prefix_fails_with_candidates() {
    let table = OptionTable::build(vec![
        OptionSpec::long("list"),
        OptionSpec::long("link"),
    ])
    .unwrap();
    let err = parse(&table, ["prog", "--li"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::AmbiguousOption {
            option: "--li".to_string(),
            candidates: vec!["--list".to_string(), "--link".to_string()],
            index: 1,
        }
    );
}

#[test]
fn abbreviation_disabled_rejects_prefix() {
    let table = OptionTable::with_config(
        vec![OptionSpec::long("list")],
        ParserConfig::default().with_abbreviations(false),
    )
    .unwrap();
    let err = parse(&table, ["prog", "--lis"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownOption { .. }));
}

#[test]
fn missing_mandatory_options_are_reported_together() {
    let table = OptionTable::build(vec![
        OptionSpec::long("version").mandatory(),
        OptionSpec::long("help").with_short('h'),
        OptionSpec::short('o').required_argument().mandatory(),
    ])
    .unwrap();

    let err = parse(&table, ["prog", "-h"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingMandatoryOption(vec!["--version".to_string(), "-o".to_string()])
    );

    let result = parse(&table, ["prog", "--version", "-ox"]).unwrap();
    assert_eq!(result.argument_values('o'), ["x"]);
}

#[test]
fn duplicate_names_fail_table_build() {
    let err = OptionTable::build(vec![
        OptionSpec::long("help").with_short('h'),
        OptionSpec::long("host").with_short('h'),
    ])
    .unwrap_err();
    assert_eq!(err, TableError::DuplicateOption("-h".to_string()));
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn lone_terminator_yields_nothing() {
    let result = parse(&help_list_table(), ["prog", "--"]).unwrap();
    assert_eq!(result.total_occurrences(), 0);
    assert!(result.operands().is_empty());
    assert_eq!(result.stop_index(), 2);
}

#[test]
fn terminator_turns_options_into_operands() {
    let result = parse(&help_list_table(), ["prog", "--", "-h"]).unwrap();
    assert_eq!(result.total_occurrences(), 0);
    assert_eq!(result.operands(), ["-h"]);
}

#[test]
fn only_program_name() {
    let result = parse(&help_list_table(), ["prog"]).unwrap();
    assert_eq!(result.total_occurrences(), 0);
    assert_eq!(result.stop_index(), 1);
}

#[test]
fn program_name_is_never_matched() {
    let result = parse(&help_list_table(), ["--help"]).unwrap();
    assert_eq!(result.occurrence_count("help"), 0);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn counts_plus_operands_cover_consumed_tokens() {
    // No option here consumes a separate argument token, so every token after
    // the program name is either an occurrence, an operand, or `--`.
    let table = full_table(Ordering::Permute);
    let args = ["prog", "-h", "a", "--verbose", "--list", "b", "--", "-v"];
    let result = parse(&table, args).unwrap();

    let consumed = args.len() - 1 - 1; // program name, terminator
    assert_eq!(result.total_occurrences() + result.operands().len(), consumed);
}

#[test]
fn parsing_is_idempotent() {
    let table = full_table(Ordering::Permute);
    let args = ["prog", "-vv", "--output", "x", "file", "--list=y"];
    let first = parse(&table, args).unwrap();
    let second = parse(&table, args).unwrap();
    assert_eq!(first, second);
}

#[test]
fn required_arguments_round_trip_literally() {
    let table = full_table(Ordering::RequireOrder);
    let result = parse(
        &table,
        ["prog", "-o", " spaced ", "--output=a=b", "-o-", "--output", ""],
    )
    .unwrap();
    assert_eq!(result.occurrence_count("output"), 4);
    assert_eq!(result.argument_values("output"), [" spaced ", "a=b", "-", ""]);
}

#[test]
fn repeated_occurrences_accumulate_in_order() {
    let table = full_table(Ordering::RequireOrder);
    let result = parse(&table, ["prog", "-lone", "--list", "--list=two", "-l"]).unwrap();
    assert_eq!(result.occurrence_count("list"), 4);
    assert_eq!(result.argument_values("list"), ["one", "two"]);
}

#[test]
fn operand_order_is_preserved_in_both_modes() {
    let args = ["prog", "b", "-v", "a", "--", "c"];

    let posix = parse(&full_table(Ordering::RequireOrder), args).unwrap();
    assert_eq!(posix.operands(), ["b", "-v", "a", "--", "c"]);
    assert_eq!(posix.occurrence_count('v'), 0);

    let gnu = parse(&full_table(Ordering::Permute), args).unwrap();
    assert_eq!(gnu.operands(), ["b", "a", "c"]);
    assert_eq!(gnu.occurrence_count('v'), 1);
}

#[test]
fn shared_table_across_threads() {
    let table = Arc::new(full_table(Ordering::Permute));

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let value = n.to_string();
                let result = parse(&table, ["prog", "-o", value.as_str(), "operand"]).unwrap();
                assert_eq!(result.argument_values('o'), [value.as_str()]);
                result.operands().to_vec()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ["operand"]);
    }
}

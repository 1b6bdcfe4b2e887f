use clap::Parser;

use super::*;

#[test]
fn parses_resolve_command() {
    let cli = Cli::try_parse_from(["parsilex", "resolve", "کتاب"]).expect("expected valid args");

    assert!(matches!(
        cli.command,
        Commands::Resolve { ref word, json: false } if word == "کتاب"
    ));
}

#[test]
fn parses_resolve_with_json_flag() {
    let cli =
        Cli::try_parse_from(["parsilex", "resolve", "کتاب", "--json"]).expect("expected valid args");

    assert!(matches!(cli.command, Commands::Resolve { json: true, .. }));
}

#[test]
fn parses_search_with_limit() {
    let cli = Cli::try_parse_from(["parsilex", "search", "دل", "--limit", "10"])
        .expect("expected valid args");

    assert!(matches!(
        cli.command,
        Commands::Search { ref query, limit: Some(10), json: false } if query == "دل"
    ));
}

#[test]
fn parses_batch_with_csv_output() {
    let cli = Cli::try_parse_from(["parsilex", "batch", "words.txt", "--csv"])
        .expect("expected valid args");

    assert!(matches!(
        cli.command,
        Commands::Batch { csv: true, json: false, .. }
    ));
}

#[test]
fn batch_csv_and_json_flags_conflict() {
    Cli::try_parse_from(["parsilex", "batch", "words.txt", "--csv", "--json"])
        .expect_err("expected conflicting flags to be rejected");
}

#[test]
fn global_source_flags_apply_to_subcommands() {
    let cli = Cli::try_parse_from([
        "parsilex",
        "resolve",
        "کتاب",
        "--frequency",
        "./freq.tsv",
        "--affect",
        "https://example.com/affect.csv",
    ])
    .expect("expected valid args");

    assert_eq!(cli.frequency.as_deref(), Some("./freq.tsv"));
    assert_eq!(cli.affect.as_deref(), Some("https://example.com/affect.csv"));
}

#[test]
fn help_is_handled_by_arg_parsing_alone() {
    // Help must not depend on settings; main parses arguments before
    // it reads the environment.
    let err = Cli::try_parse_from(["parsilex", "--help"]).expect_err("expected help request");

    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn missing_subcommand_is_an_error() {
    Cli::try_parse_from(["parsilex"]).expect_err("expected missing subcommand to be rejected");
}

#[test]
fn invalid_limit_is_an_error() {
    Cli::try_parse_from(["parsilex", "search", "دل", "--limit", "many"])
        .expect_err("expected invalid limit to be rejected");
}

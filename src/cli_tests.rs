use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn input_defaults_to_results_csv() {
    let cli = Cli::parse_from(["flow-report"]);
    assert_eq!(cli.input, PathBuf::from("results.csv"));
}

#[test]
fn input_positional_argument() {
    let cli = Cli::parse_from(["flow-report", "data/run1.csv"]);
    assert_eq!(cli.input, PathBuf::from("data/run1.csv"));
}

#[test]
fn report_rejects_unknown_flags() {
    let result = Cli::try_parse_from(["flow-report", "--format", "json"]);
    assert!(result.is_err());
}

#[test]
fn report_rejects_second_positional() {
    let result = Cli::try_parse_from(["flow-report", "a.csv", "b.csv"]);
    assert!(result.is_err());
}

#[test]
fn bench_defaults() {
    let cli = BenchCli::parse_from(["flow-bench"]);
    assert_eq!(cli.output, PathBuf::from("results.csv"));
    assert_eq!(cli.steps, 20);
    assert_eq!(cli.instances, 20);
    assert_eq!(cli.runs, 5);
    assert!(cli.seed.is_none());
}

#[test]
fn bench_overrides() {
    let cli = BenchCli::parse_from([
        "flow-bench",
        "-o",
        "small.csv",
        "--steps",
        "2",
        "--instances",
        "3",
        "--runs",
        "1",
        "--seed",
        "42",
    ]);
    assert_eq!(cli.output, PathBuf::from("small.csv"));
    assert_eq!(cli.steps, 2);
    assert_eq!(cli.instances, 3);
    assert_eq!(cli.runs, 1);
    assert_eq!(cli.seed, Some(42));
}

#[test]
fn bench_rejects_non_numeric_steps() {
    let result = BenchCli::try_parse_from(["flow-bench", "--steps", "many"]);
    assert!(result.is_err());
}

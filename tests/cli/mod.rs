use std::io;
use std::process::Command;

use flag_partition::Color;
use flag_sort_research_rs::cli::{self, Cli};

use clap::Parser;

#[test]
fn scenarios_match_expected_output() {
    let lines = cli::run_scenarios();

    assert_eq!(
        lines,
        ["0 0 1 1 2 2 ", "0 1 2 ", "0 0 0 ", "1 1 1 ", "2 2 2 ", ""]
    );
}

#[test]
fn parse_colors_accepts_codes_and_names() {
    let colors = cli::parse_colors(["2", "white", "RED", "0", "Blue"]).unwrap();

    assert_eq!(
        colors,
        [Color::Blue, Color::White, Color::Red, Color::Red, Color::Blue]
    );
}

#[test]
fn parse_colors_names_bad_token() {
    let err = cli::parse_colors(["0", "1", "3"]).unwrap_err();
    let msg = format!("{err:#}");

    assert!(msg.contains("\"3\""), "{msg}");
    assert!(msg.contains("position 3"), "{msg}");
    assert!(msg.contains("out of range"), "{msg}");

    let err = cli::parse_colors(["green"]).unwrap_err();
    assert!(format!("{err:#}").contains("unknown color"));
}

#[test]
fn run_values_sorts_and_formats() {
    let values = vec!["2 0 2".to_string(), "1".to_string(), "1 0".to_string()];

    assert_eq!(cli::run_values(&values, false, io::empty()).unwrap(), "0 0 1 1 2 2 ");
    assert_eq!(
        cli::run_values(&values, true, io::empty()).unwrap(),
        "red red white white blue blue "
    );
}

#[test]
fn run_values_rejects_out_of_domain() {
    let values = vec!["0".to_string(), "-1".to_string()];

    assert!(cli::run_values(&values, false, io::empty()).is_err());
}

#[test]
fn cli_flags() {
    let cli = Cli::try_parse_from(["sort_colors", "-vv", "--colors", "2", "0"]).unwrap();

    assert!(cli.colors);
    assert_eq!(cli.values, ["2", "0"]);
    assert_eq!(cli.log_level(), tracing::Level::DEBUG);

    let cli = Cli::try_parse_from(["sort_colors"]).unwrap();
    assert!(cli.values.is_empty());
    assert_eq!(cli.log_level(), tracing::Level::WARN);
}

fn stdin_marker() -> Vec<String> {
    vec!["-".to_string()]
}

#[test]
fn run_values_reads_stdin() {
    let input = "2 0\n2\t1\n\n 1 0\n".as_bytes();

    assert_eq!(
        cli::run_values(&stdin_marker(), false, input).unwrap(),
        "0 0 1 1 2 2 "
    );
}

#[test]
fn run_values_empty_stdin() {
    assert_eq!(cli::run_values(&stdin_marker(), false, io::empty()).unwrap(), "");
    assert_eq!(cli::run_values(&stdin_marker(), true, " \n\n".as_bytes()).unwrap(), "");
}

#[test]
fn run_values_bad_token_in_stdin() {
    let input = "0 1\nblue 4\n".as_bytes();
    let err = cli::run_values(&stdin_marker(), false, input).unwrap_err();
    let msg = format!("{err:#}");

    assert!(msg.contains("\"4\""), "{msg}");
    assert!(msg.contains("position 4"), "{msg}");
}

#[test]
fn binary_exit_codes() {
    let output = Command::new(env!("CARGO_BIN_EXE_sort_colors"))
        .args(["2", "0", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 1 2 \n");

    let output = Command::new(env!("CARGO_BIN_EXE_sort_colors"))
        .args(["0", "green"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value \"green\" at position 2"), "{stderr}");
}

#[test]
fn binary_runs_scenarios_without_values() {
    let output = Command::new(env!("CARGO_BIN_EXE_sort_colors"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0 0 1 1 2 2 \n0 1 2 \n0 0 0 \n1 1 1 \n2 2 2 \n\n"
    );
}

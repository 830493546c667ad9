use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use flag_partition::{Color, ThreeValued};
use tracing::{debug, info};

/// Inputs of the classic sort colors demo, run when no values are given.
pub const SCENARIOS: [&[i32]; 6] = [
    &[2, 0, 2, 1, 1, 0],
    &[2, 0, 1],
    &[0, 0, 0],
    &[1, 1, 1],
    &[2, 2, 2],
    &[],
];

/// Sort a sequence of flag colors in place with a single three-way partition pass.
#[derive(Parser, Debug)]
#[command(name = "sort_colors", version)]
pub struct Cli {
    /// Colors to sort, as 0/1/2 or red/white/blue. A single `-` reads them from stdin.
    /// Without values the built-in scenarios are run.
    pub values: Vec<String>,

    /// Print color names instead of numeric codes.
    #[arg(long)]
    pub colors: bool,

    /// Increase log verbosity, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Parses whitespace separated tokens into colors, naming the first bad token on failure.
pub fn parse_colors<'a, I>(tokens: I) -> Result<Vec<Color>>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(pos, token)| {
            token
                .parse::<Color>()
                .with_context(|| format!("invalid value {token:?} at position {}", pos + 1))
        })
        .collect()
}

/// Space separated rendering, trailing space included, one sequence per line.
pub fn format_colors(colors: &[Color], names: bool) -> String {
    colors
        .iter()
        .map(|color| {
            if names {
                format!("{color:#} ")
            } else {
                format!("{color} ")
            }
        })
        .collect()
}

pub fn format_codes(codes: &[i32]) -> String {
    codes.iter().map(|code| format!("{code} ")).collect()
}

/// Runs the built-in scenarios and returns the lines to print.
pub fn run_scenarios() -> Vec<String> {
    SCENARIOS
        .iter()
        .map(|input| {
            let mut nums = input.to_vec();
            flag_partition::sort_colors(&mut nums);
            debug!(?input, output = ?nums, "sorted scenario");
            format_codes(&nums)
        })
        .collect()
}

/// Sorts user supplied values and returns the line to print.
///
/// A single `-` value reads whitespace separated colors from `input` instead.
pub fn run_values<R: Read>(values: &[String], names: bool, mut input: R) -> Result<String> {
    let mut input_buf = String::new();

    let tokens: Vec<&str> = if values.len() == 1 && values[0] == "-" {
        input
            .read_to_string(&mut input_buf)
            .context("failed to read colors from stdin")?;
        input_buf.split_whitespace().collect()
    } else {
        values.iter().flat_map(|v| v.split_whitespace()).collect()
    };

    let mut colors = parse_colors(tokens)?;
    info!(len = colors.len(), "parsed colors");

    let (num_lt, num_le) = flag_partition::partition_by(&mut colors, |color| color.class());
    debug!(red = num_lt, white = num_le - num_lt, blue = colors.len() - num_le, "partitioned");

    Ok(format_colors(&colors, names))
}

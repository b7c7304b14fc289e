use std::{num::NonZeroUsize, str::FromStr};

use clap::Parser;

use crate::core::{
    data::{Sample, parse_sample},
    emphasis::EmphasisRule,
    error::ParseSampleError,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "sparkline",
    version,
    about = "Sparklines on the command-line, e.g. ▃▁▄▁▄█▂▅ for 3 1 4 1 5 9 2 6",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Log debugging output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a few usage examples for the given values; other options are ignored
    #[arg(short, long)]
    pub demo: bool,

    /// Use this value as the minimum for scaling
    #[arg(short = 'm', long = "min", value_name = "MIN")]
    pub minimum: Option<f64>,

    /// Use this value as the maximum for scaling
    #[arg(short = 'M', long = "max", value_name = "MAX")]
    pub maximum: Option<f64>,

    /// Emphasize values by threshold, e.g. "green:gt:5.0" (repeatable, last match wins)
    #[arg(short, long = "emphasize", value_name = "RULE")]
    pub emphasize: Vec<EmphasisRule>,

    /// Lines per sparkline; more lines give finer resolution
    #[arg(short, long, value_name = "NUMBER", default_value = "1")]
    pub num_lines: NonZeroUsize,

    /// Start a new sparkline after PERIOD values (e.g. 7 for daily data by week)
    #[arg(short, long, value_name = "PERIOD")]
    pub wrap: Option<NonZeroUsize>,

    /// Numbers such as 0, 3.14, 2e2; `null` or `none` leave a gap.
    /// Read from stdin when omitted.
    #[arg(value_name = "VALUE")]
    pub values: Vec<Value>,
}

/// One positional token, already validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value(pub Sample);

impl FromStr for Value {
    type Err = ParseSampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sample(s).map(Self)
    }
}

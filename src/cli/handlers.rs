use std::io::{self, Write};

use crate::{
    core::{
        config::Config,
        data::{Sample, read_samples},
        error::SparkError,
    },
    render::{Renderer, demo},
};

use super::parse::Cli;

pub fn sparkline(cli: Cli) -> Result<(), SparkError> {
    let samples: Vec<Sample> = if cli.values.is_empty() {
        read_samples(io::stdin().lock())?
    } else {
        cli.values.iter().map(|v| v.0).collect()
    };

    let cfg = Config::builder()
        .num_lines(cli.num_lines.get())
        .rules(cli.emphasize)
        .minimum_opt(cli.minimum)
        .maximum_opt(cli.maximum)
        .wrap_opt(cli.wrap)
        .build()?;

    let lines = Renderer::ansi().render(&samples, &cfg)?;
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Usage examples for the given values; never reads stdin.
pub fn examples(cli: &Cli) -> Result<(), SparkError> {
    let samples: Vec<Sample> = cli.values.iter().map(|v| v.0).collect();
    let mut out = io::stdout().lock();
    out.write_all(demo(&samples)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

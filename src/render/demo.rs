//! Usage text showing the same series rendered a few different ways.

use std::fmt::Write;

use crate::{
    core::{
        config::Config,
        constants::{DEMO_SAMPLES, PROGRAM_NAME},
        data::Sample,
        error::SparkError,
    },
    render::sparkline::Renderer,
};

/// As typed on the command line; gaps spelled `None`.
fn cli_value(s: Sample) -> String {
    s.map_or_else(|| "None".to_owned(), |v| v.to_string())
}

/// As written in a Rust slice literal.
fn lib_value(s: Sample) -> String {
    s.map_or_else(|| "None".to_owned(), |v| format!("Some({v:?})"))
}

fn section(
    out: &mut String,
    title: &str,
    samples: &[Sample],
    flag: &str,
    builder: &str,
    cfg: &Config,
) -> Result<(), SparkError> {
    let cli: Vec<String> = samples.iter().copied().map(cli_value).collect();
    let lib: Vec<String> = samples.iter().copied().map(lib_value).collect();

    // writing to a String cannot fail
    let _ = writeln!(out, "- {title}");
    let _ = writeln!(out, "{PROGRAM_NAME}{flag} {}", cli.join(" "));
    let _ = writeln!(out, "sparklines(&[{}], &{builder})", lib.join(", "));
    for line in Renderer::plain().render(samples, cfg)? {
        let _ = writeln!(out, "{line}");
    }
    Ok(())
}

/// Build the usage text for `samples`, or for 3 1 4 1 5 9 2 6 when empty.
///
/// # Errors
/// Only if rendering the series itself fails.
pub fn demo(samples: &[Sample]) -> Result<String, SparkError> {
    let nums: Vec<Sample> = if samples.is_empty() {
        DEMO_SAMPLES.iter().copied().map(Some).collect()
    } else {
        samples.to_vec()
    };

    let mut out = String::from("Usage examples (command-line and library use):\n\n");

    section(
        &mut out,
        "Standard one-line sparkline",
        &nums,
        "",
        "Config::default()",
        &Config::default(),
    )?;
    out.push('\n');

    for n in [2, 3] {
        section(
            &mut out,
            &format!("Multi-line sparkline (n={n})"),
            &nums,
            &format!(" -n {n}"),
            &format!("Config::builder().num_lines({n}).build()?"),
            &Config::builder().num_lines(n).build()?,
        )?;
        out.push('\n');
    }

    let gapped: Vec<Sample> = nums
        .iter()
        .copied()
        .chain(std::iter::once(None))
        .chain(nums.iter().rev().copied())
        .collect();
    section(
        &mut out,
        "Standard one-line sparkline with gap",
        &gapped,
        "",
        "Config::default()",
        &Config::default(),
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn values_spelled_per_surface() {
        assert_eq!(cli_value(Some(3.0)), "3");
        assert_eq!(cli_value(Some(-0.5)), "-0.5");
        assert_eq!(cli_value(None), "None");
        assert_eq!(lib_value(Some(3.0)), "Some(3.0)");
        assert_eq!(lib_value(None), "None");
    }

    #[test]
    fn custom_series_is_used() {
        let text = demo(&[Some(1.0), Some(8.0)]).unwrap();
        assert!(text.contains("sparkline 1 8\n"));
        assert!(text.contains("\n▁█\n"));
        assert!(text.contains("sparkline 1 8 None 8 1\n"));
        assert!(text.contains("\n▁█ █▁\n"));
        assert!(text.contains("\nsparklines(&[Some(1.0), Some(8.0)], &Config::default())\n"));
        assert!(text.contains("sparklines(&[Some(1.0), Some(8.0)], &Config::builder().num_lines(2).build()?)\n"));
        assert!(text.ends_with('\n'));
    }
}

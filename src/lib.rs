//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use sparkline::{Config, sparklines};
//!
//! let lines = sparklines(&[Some(3.0), Some(1.0), Some(4.0), None, Some(9.0)], &Config::default())?;
//! assert_eq!(lines, vec!["▃▁▄ █"]);
//! # Ok::<(), sparkline::SparkError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::Bounds,
    color::{Ansi, AnsiCode, ColorError, Decorator, Plain, colorize},
    config::{Config, ConfigBuilder},
    constants::GLYPHS,
    data::{Sample, check_finite, parse_sample, read_samples},
    emphasis::{Comparison, EmphasisRule, match_emphasis},
    error::{ConfigError, ParseRuleError, ParseSampleError, SparkError},
};

pub use render::{Height, Renderer, batch, demo, join, scale, split_rows};

/// Render `samples` with ANSI emphasis, one string per output line.
///
/// # Errors
/// See [`Renderer::render`].
pub fn sparklines(samples: &[Sample], cfg: &Config) -> Result<Vec<String>, SparkError> {
    Renderer::ansi().render(samples, cfg)
}

//! Sparkline renderer: bounds + emphasis over the whole series, then
//! per-chunk scaling, row splitting and glyph assembly.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::Bounds,
        color::{Ansi, Decorator, Plain},
        config::Config,
        constants::{BLANK, DEFAULT_LABEL, GLYPHS},
        data::{Sample, check_finite},
        emphasis::match_emphasis,
        error::SparkError,
    },
    render::{
        batch::{batch, join},
        rows::split_rows,
        scale::{Height, scale_with},
    },
};

/// Renders series into lines of block glyphs, decorating emphasised
/// samples through `D`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer<D = Ansi> {
    decorator: D,
}

impl Renderer<Ansi> {
    /// Emphasis shown as ANSI colours.
    #[inline]
    #[must_use]
    pub fn ansi() -> Self {
        Self::new(Ansi)
    }
}

impl Renderer<Plain> {
    /// Emphasis rules are evaluated but never change the output.
    #[inline]
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Plain)
    }
}

impl<D: Decorator> Renderer<D> {
    #[inline]
    pub fn new(decorator: D) -> Self {
        Self { decorator }
    }

    /// Render `samples` into one string per output line.
    ///
    /// Chunks produced by `cfg.wrap` are separated by a single empty line.
    /// An empty series yields one empty line.
    ///
    /// # Errors
    /// Invalid `cfg` (see [`Config::validate`]), an infinite or NaN sample,
    /// or a minimum resolved above the maximum.
    pub fn render(&self, samples: &[Sample], cfg: &Config) -> Result<Vec<String>, SparkError> {
        cfg.validate()?;
        if samples.is_empty() {
            return Ok(vec![String::new()]);
        }
        check_finite(samples)?;

        warn_negatives(samples);

        // Both computed over the full series so wrapped chunks agree with
        // the unwrapped rendering position by position.
        let bounds = Bounds::resolve(samples, cfg.minimum, cfg.maximum)?;
        let emphasized = match_emphasis(samples, &cfg.rules);

        let chunks = batch(cfg.wrap, samples);
        debug!(
            ?bounds,
            emphasized = emphasized.len(),
            chunks = chunks.len(),
            "rendering sparkline"
        );

        let mut offset = 0;
        let mut groups = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let heights = match bounds {
                Some(b) => scale_with(chunk, cfg.num_lines, b),
                None => vec![None; chunk.len()],
            };
            let lines: Vec<String> = split_rows(&heights, cfg.num_lines)
                .iter()
                .map(|row| self.assemble(row, offset, &emphasized))
                .collect();
            groups.push(lines);
            offset += chunk.len();
        }

        Ok(join(&String::new(), groups))
    }

    /// Glyphs for one row; `offset` maps row positions back to series indices.
    fn assemble(&self, row: &[Height], offset: usize, emphasized: &HashMap<usize, &str>) -> String {
        let mut line = String::with_capacity(row.len() * 3);

        for (i, level) in row.iter().enumerate() {
            let Some(level) = *level else {
                line.push(BLANK);
                continue;
            };
            let glyph = GLYPHS[level];

            if emphasized.is_empty() {
                line.push(glyph);
            } else {
                let label = emphasized.get(&(offset + i)).copied().unwrap_or(DEFAULT_LABEL);
                line.push_str(&self.decorator.decorate(glyph, label));
            }
        }
        line
    }
}

/// Negative values are rendered but rarely mean what the caller expects.
fn warn_negatives(samples: &[Sample]) {
    let negatives: Vec<String> = samples
        .iter()
        .flatten()
        .filter(|v| **v < 0.0)
        .map(ToString::to_string)
        .collect();

    if !negatives.is_empty() {
        warn!(
            "found negative value(s): {}. While not forbidden, the output will look unexpected.",
            negatives.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        emphasis::{Comparison, EmphasisRule},
        error::ConfigError,
    };

    /// Brackets each glyph with its label so tests can read decoration.
    struct Tagged;

    impl Decorator for Tagged {
        fn decorate(&self, glyph: char, label: &str) -> String {
            format!("<{label}>{glyph}")
        }
    }

    fn present(xs: &[f64]) -> Vec<Sample> {
        xs.iter().copied().map(Some).collect()
    }

    #[test]
    fn empty_series_is_one_empty_line() {
        let cfg = Config::builder().num_lines(4).build().unwrap();
        assert_eq!(Renderer::ansi().render(&[], &cfg).unwrap(), vec![String::new()]);
    }

    #[test]
    fn zero_lines_rejected_even_when_built_by_hand() {
        let cfg = Config {
            num_lines: 0,
            ..Config::default()
        };
        let err = Renderer::ansi().render(&present(&[1.0]), &cfg).unwrap_err();
        assert!(matches!(err, SparkError::Config(ConfigError::InvalidLineCount(0))));
    }

    #[test]
    fn non_finite_samples_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = Renderer::ansi()
                .render(&[Some(1.0), Some(2.0), Some(bad)], &Config::default())
                .unwrap_err();
            assert!(matches!(err, SparkError::NonFinite { index: 2, .. }), "{bad}");
        }
    }

    #[test]
    fn single_value_sits_mid_height() {
        for i in 0..10 {
            let lines = Renderer::ansi()
                .render(&[Some(f64::from(i))], &Config::default())
                .unwrap();
            assert_eq!(lines, vec!["▄"]);
        }
    }

    #[test]
    fn all_missing_renders_blanks() {
        let cfg = Config::builder().num_lines(2).build().unwrap();
        let lines = Renderer::ansi().render(&[None, None, None], &cfg).unwrap();
        assert_eq!(lines, vec!["   ", "   "]);
    }

    #[test]
    fn unmatched_samples_get_default_label() {
        let cfg = Config::builder()
            .rule(EmphasisRule::new("green", Comparison::Ge, 2.0))
            .build()
            .unwrap();
        let lines = Renderer::new(Tagged)
            .render(&[Some(1.0), None, Some(10.0)], &cfg)
            .unwrap();
        assert_eq!(lines, vec!["<white>▁ <green>█"]);
    }

    #[test]
    fn rules_matching_nothing_decorate_nothing() {
        let cfg = Config::builder()
            .rule(EmphasisRule::new("red", Comparison::Gt, 100.0))
            .build()
            .unwrap();
        let lines = Renderer::new(Tagged)
            .render(&present(&[1.0, 8.0]), &cfg)
            .unwrap();
        assert_eq!(lines, vec!["▁█"]);
    }

    #[test]
    fn emphasis_uses_global_index_across_chunks() {
        let cfg = Config::builder()
            .rule(EmphasisRule::new("red", Comparison::Eq, 3.0))
            .wrap(NonZeroUsize::new(2).unwrap())
            .build()
            .unwrap();
        let lines = Renderer::new(Tagged)
            .render(&present(&[1.0, 2.0, 3.0]), &cfg)
            .unwrap();
        assert_eq!(lines, vec!["<white>▁<white>▄", "", "<red>█"]);
    }

    #[test]
    fn emphasis_compares_unclamped_values() {
        let cfg = Config::builder()
            .maximum(3.0)
            .rule(EmphasisRule::new("red", Comparison::Eq, 10.0))
            .build()
            .unwrap();
        let lines = Renderer::new(Tagged)
            .render(&present(&[1.0, 3.0, 10.0]), &cfg)
            .unwrap();
        assert_eq!(lines, vec!["<white>▁<white>█<red>█"]);
    }

    #[test]
    fn upper_rows_decorate_empty_cells_too() {
        let cfg = Config::builder()
            .num_lines(2)
            .rule(EmphasisRule::new("red", Comparison::Gt, 5.0))
            .build()
            .unwrap();
        let lines = Renderer::new(Tagged)
            .render(&[Some(1.0), None, Some(9.0)], &cfg)
            .unwrap();
        assert_eq!(lines, vec!["<white>  <red>█", "<white>▁ <red>█"]);
    }

    #[test]
    fn plain_renderer_ignores_labels() {
        let cfg = Config::builder()
            .rule(EmphasisRule::new("green", Comparison::Gt, 0.0))
            .build()
            .unwrap();
        let lines = Renderer::plain().render(&present(&[1.0, 8.0]), &cfg).unwrap();
        assert_eq!(lines, vec!["▁█"]);
    }

    #[test]
    fn negatives_do_not_change_output() {
        let shifted = Renderer::ansi()
            .render(&present(&[-3.0, -1.0, 0.0]), &Config::default())
            .unwrap();
        let positive = Renderer::ansi()
            .render(&present(&[1.0, 3.0, 4.0]), &Config::default())
            .unwrap();
        assert_eq!(shifted, positive);
    }

    #[test]
    fn minimum_above_data_rejected() {
        let cfg = Config::builder().minimum(10.0).build().unwrap();
        let err = Renderer::ansi().render(&present(&[1.0, 2.0]), &cfg).unwrap_err();
        assert!(matches!(err, SparkError::Config(ConfigError::InvalidRange { .. })));
    }
}

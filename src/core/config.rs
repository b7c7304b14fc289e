//! Render options + fluent builder.

use std::num::NonZeroUsize;

use crate::core::{emphasis::EmphasisRule, error::ConfigError};

/// Parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rows stacked per sparkline, each adding 8 height levels.
    pub num_lines: usize,
    pub rules: Vec<EmphasisRule>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Samples per wrapped chunk; `None` keeps the series on one chunk.
    pub wrap: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_lines: 1,
            rules: Vec::new(),
            minimum: None,
            maximum: None,
            wrap: None,
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Checks shared by the builder and the renderer.
    ///
    /// # Errors
    /// A zero line count, an infinite or NaN bound, or an explicit minimum
    /// above the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_lines == 0 {
            return Err(ConfigError::InvalidLineCount(self.num_lines));
        }
        let bounds = [self.minimum, self.maximum];
        if let Some(&bad) = bounds.iter().flatten().find(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteBound(bad));
        }
        if let (Some(low), Some(high)) = (self.minimum, self.maximum) {
            if high < low {
                return Err(ConfigError::InvalidRange { low, high });
            }
        }
        Ok(())
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    num_lines: Option<usize>,
    rules: Vec<EmphasisRule>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    wrap: Option<NonZeroUsize>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn num_lines(mut self, n: usize) -> Self {
        self.num_lines = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn rule(mut self, r: EmphasisRule) -> Self {
        self.rules.push(r);
        self
    }
    #[inline]
    #[must_use]
    pub fn rules(mut self, rs: impl IntoIterator<Item = EmphasisRule>) -> Self {
        self.rules.extend(rs);
        self
    }
    #[inline]
    #[must_use]
    pub fn minimum(mut self, v: f64) -> Self {
        self.minimum = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn maximum(mut self, v: f64) -> Self {
        self.maximum = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn minimum_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.minimum = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn maximum_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.maximum = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.minimum = Some(*r.start());
        self.maximum = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn wrap(mut self, period: NonZeroUsize) -> Self {
        self.wrap = Some(period);
        self
    }
    #[inline]
    #[must_use]
    pub fn wrap_opt(mut self, period: Option<NonZeroUsize>) -> Self {
        if period.is_some() {
            self.wrap = period;
        }
        self
    }

    /// # Errors
    /// See [`Config::validate`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let cfg = Config {
            num_lines: self.num_lines.unwrap_or(1),
            rules: self.rules,
            minimum: self.minimum,
            maximum: self.maximum,
            wrap: self.wrap,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::emphasis::Comparison;

    #[test]
    fn defaults_to_single_line() {
        assert_eq!(Config::builder().build().unwrap(), Config::default());
    }

    #[test]
    fn chain_sets_every_field() {
        let period = NonZeroUsize::new(7).unwrap();
        let cfg = Config::builder()
            .num_lines(3)
            .rule(EmphasisRule::new("green", Comparison::Gt, 5.0))
            .range(0.0..=10.0)
            .wrap(period)
            .build()
            .unwrap();
        assert_eq!(cfg.num_lines, 3);
        assert_eq!(cfg.rules.len(), 1);
        assert_eq!((cfg.minimum, cfg.maximum), (Some(0.0), Some(10.0)));
        assert_eq!(cfg.wrap, Some(period));
    }

    #[test]
    fn optional_setters_keep_earlier_values() {
        let cfg = Config::builder()
            .minimum(2.0)
            .minimum_opt(None)
            .maximum_opt(Some(4.0))
            .wrap_opt(None)
            .build()
            .unwrap();
        assert_eq!((cfg.minimum, cfg.maximum, cfg.wrap), (Some(2.0), Some(4.0), None));
    }

    #[test]
    fn zero_lines_rejected() {
        let err = Config::builder().num_lines(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidLineCount(0));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = Config::builder().minimum(5.0).maximum(1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidRange { low: 5.0, high: 1.0 });
    }

    #[test]
    fn infinite_bound_rejected() {
        let err = Config::builder().maximum(f64::INFINITY).build().unwrap_err();
        assert_eq!(err, ConfigError::NonFiniteBound(f64::INFINITY));
        assert!(Config::builder().minimum(f64::NAN).build().is_err());
    }

    #[test]
    fn equal_bounds_allowed() {
        assert!(Config::builder().range(3.0..=3.0).build().is_ok());
    }
}

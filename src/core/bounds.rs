//! Scaling range: caller overrides merged with the series extrema.

use crate::core::{data::Sample, error::ConfigError};

/// Inclusive value range mapped onto the glyph heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Extrema of the present samples without any padding.
    ///
    /// Missing slots are skipped; `None` when nothing is left. Samples are
    /// expected to be finite (see [`check_finite`](crate::core::data::check_finite)):
    /// a NaN would drop out of the extrema yet saturate to the top in
    /// [`Bounds::clamp`].
    #[must_use]
    pub fn of(samples: &[Sample]) -> Option<Self> {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

        for &v in samples.iter().flatten() {
            low = low.min(v);
            high = high.max(v);
        }

        if low > high {
            return None;
        }
        Some(Self {
            min: low,
            max: high,
        })
    }

    /// Merge optional overrides with the extrema of `samples`.
    ///
    /// Returns `Ok(None)` when a side has to be derived but no sample is
    /// present.
    ///
    /// # Errors
    /// [`ConfigError::InvalidRange`] when the resolved maximum lies below
    /// the resolved minimum.
    pub fn resolve(
        samples: &[Sample],
        minimum: Option<f64>,
        maximum: Option<f64>,
    ) -> Result<Option<Self>, ConfigError> {
        let bounds = match (minimum, maximum) {
            (Some(min), Some(max)) => Self { min, max },
            _ => match Self::of(samples) {
                Some(found) => Self {
                    min: minimum.unwrap_or(found.min),
                    max: maximum.unwrap_or(found.max),
                },
                None => return Ok(None),
            },
        };

        if bounds.max < bounds.min {
            return Err(ConfigError::InvalidRange {
                low: bounds.min,
                high: bounds.max,
            });
        }
        Ok(Some(bounds))
    }

    /// Distance between the bounds; zero for a flat series.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Every present value maps onto the same height.
    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.max <= self.min
    }

    /// Saturate `v` into the range.
    #[inline]
    #[must_use]
    pub fn clamp(&self, v: f64) -> f64 {
        v.min(self.max).max(self.min)
    }
}

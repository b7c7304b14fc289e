//! Raw samples to integer heights across the stacked lines.

use crate::core::{
    bounds::Bounds,
    constants::{LEVELS_PER_LINE, MIDPOINT_LEVEL},
    data::{Sample, check_finite},
    error::{ConfigError, SparkError},
};

/// Quantised height per sample, `None` where the sample is missing.
pub type Height = Option<usize>;

/// Scale `samples` into `1..=num_lines * 8`, deriving any missing bound
/// from the present samples.
///
/// # Errors
/// * [`ConfigError::InvalidLineCount`] for `num_lines == 0`
/// * [`ConfigError::InvalidRange`] when the resolved maximum is below the minimum
/// * [`SparkError::NoBounds`] when a bound must be derived but every sample is missing
/// * [`SparkError::NonFinite`] for an infinite or NaN sample
pub fn scale(
    samples: &[Sample],
    num_lines: usize,
    minimum: Option<f64>,
    maximum: Option<f64>,
) -> Result<Vec<Height>, SparkError> {
    if num_lines == 0 {
        return Err(ConfigError::InvalidLineCount(num_lines).into());
    }
    check_finite(samples)?;
    let bounds = Bounds::resolve(samples, minimum, maximum)?.ok_or(SparkError::NoBounds)?;
    Ok(scale_with(samples, num_lines, bounds))
}

/// Scale against fixed bounds; values outside them saturate.
///
/// Heights round half to even and never drop below 1, so the smallest
/// present sample still shows as the lowest block.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn scale_with(samples: &[Sample], num_lines: usize, bounds: Bounds) -> Vec<Height> {
    if bounds.is_flat() {
        let mid = MIDPOINT_LEVEL * num_lines;
        return samples.iter().map(|s| s.map(|_| mid)).collect();
    }

    let top = (num_lines * LEVELS_PER_LINE) as f64;
    let dv = bounds.span();

    samples
        .iter()
        .map(|s| {
            s.map(|v| {
                let h = ((top - 1.0) * (bounds.clamp(v) - bounds.min)) / dv + 1.0;
                (h.round_ties_even() as usize).max(1)
            })
        })
        .collect()
}

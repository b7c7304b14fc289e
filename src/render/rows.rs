//! Stack a tall height over several glyph rows.

use crate::{core::constants::LEVELS_PER_LINE, render::scale::Height};

/// One row of per-sample levels in `0..=8`.
pub type Row = Vec<Height>;

/// Decompose every height into `num_lines` rows, top row first.
///
/// The bottom row takes up to 8 levels of each height, the row above the
/// next 8, and so on. Missing heights stay missing in every row.
#[must_use]
pub fn split_rows(heights: &[Height], num_lines: usize) -> Vec<Row> {
    let mut remaining = heights.to_vec();
    let mut rows = Vec::with_capacity(num_lines);

    for _ in 0..num_lines {
        rows.push(
            remaining
                .iter()
                .map(|h| h.map(|h| h.min(LEVELS_PER_LINE)))
                .collect(),
        );
        for h in remaining.iter_mut().flatten() {
            *h = h.saturating_sub(LEVELS_PER_LINE);
        }
    }

    rows.reverse();
    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_line_is_identity() {
        let heights = vec![Some(1), None, Some(8)];
        assert_eq!(split_rows(&heights, 1), vec![heights]);
    }

    #[test]
    fn tall_values_climb_rows() {
        let rows = split_rows(&[Some(1), Some(14), Some(24)], 3);
        assert_eq!(
            rows,
            vec![
                vec![Some(0), Some(0), Some(8)],
                vec![Some(0), Some(6), Some(8)],
                vec![Some(1), Some(8), Some(8)],
            ]
        );
    }

    #[test]
    fn gaps_survive_every_row() {
        let rows = split_rows(&[None, Some(16)], 2);
        assert_eq!(rows, vec![vec![None, Some(8)], vec![None, Some(8)]]);
    }

    #[test]
    fn empty_input_yields_empty_rows() {
        assert_eq!(split_rows(&[], 2), vec![Vec::new(), Vec::new()]);
    }
}

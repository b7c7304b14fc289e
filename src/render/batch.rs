//! Periodic wrapping: split a series into chunks, then rejoin rendered rows.

use std::num::NonZeroUsize;

/// Contiguous chunks of `period` items, the last one possibly shorter.
///
/// Without a period the whole slice is a single chunk.
#[must_use]
pub fn batch<T>(period: Option<NonZeroUsize>, items: &[T]) -> Vec<&[T]> {
    match period {
        None => vec![items],
        Some(p) => items.chunks(p.get()).collect(),
    }
}

/// Flatten `groups`, placing one `separator` between consecutive groups.
#[must_use]
pub fn join<T: Clone>(separator: &T, groups: Vec<Vec<T>>) -> Vec<T> {
    let mut out = Vec::with_capacity(groups.iter().map(Vec::len).sum::<usize>() + groups.len());
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            out.push(separator.clone());
        }
        out.extend(group);
    }
    out
}

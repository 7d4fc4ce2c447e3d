//! Levenshtein distance over byte strings.
//!
//! Insertions, deletions and substitutions each cost one; transpositions are
//! two edits. Every candidate pulled from the index is re-checked here, since
//! sharing a segment variant does not imply being within `max_dist`.

use std::cmp::min;

/// Levenshtein distance between `a` and `b`
#[must_use]
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Levenshtein distance if it is at most `max`, otherwise `None`.
///
/// Only the diagonal band of width `2 * max + 1` is filled, and the scan stops as
/// soon as an entire row exceeds `max`.
#[must_use]
pub fn bounded_levenshtein(a: &[u8], b: &[u8], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(a.len().max(b.len()));
    }

    // Cells outside the band are never within `max`
    let over = max + 1;
    let mut prev_row: Vec<usize> = (0..=b.len()).map(|j| j.min(over)).collect();
    let mut curr_row = vec![over; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let row = i + 1;
        let lo = row.saturating_sub(max).max(1);
        let hi = (row + max).min(b.len());

        curr_row[0] = row.min(over);
        if lo > 1 {
            curr_row[lo - 1] = over;
        }

        let mut row_min = curr_row[0];
        for j in lo..=hi {
            let cost = usize::from(ca != b[j - 1]);
            let value = min(
                min(prev_row[j] + 1, curr_row[j - 1] + 1),
                prev_row[j - 1] + cost,
            )
            .min(over);
            curr_row[j] = value;
            row_min = row_min.min(value);
        }
        if hi < b.len() {
            curr_row[hi + 1] = over;
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[b.len()];
    (distance <= max).then_some(distance)
}

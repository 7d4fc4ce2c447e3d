use std::collections::BTreeSet;

/// Enumerate the distinct windows of `text` that could hold a barcode.
///
/// A barcode of length `L` read with up to `max_dist` edits occupies between
/// `L - max_dist` and `L + max_dist` symbols, starting anywhere. Every window in
/// that size range, for every reference length, is returned once, in
/// lexicographic order.
#[must_use]
pub fn candidate_windows<'t>(text: &'t str, lengths: &[usize], max_dist: usize) -> Vec<&'t str> {
    let mut window_lengths = BTreeSet::new();
    for &length in lengths {
        let lo = length.saturating_sub(max_dist).max(1);
        let hi = length + max_dist;
        window_lengths.extend(lo..=hi);
    }

    let mut windows = BTreeSet::new();
    for len in window_lengths {
        if len > text.len() {
            break;
        }
        for start in 0..=text.len() - len {
            // Barcode text is ASCII; skip slices that would split a multi-byte char
            if let Some(window) = text.get(start..start + len) {
                windows.insert(window);
            }
        }
    }

    windows.into_iter().collect()
}

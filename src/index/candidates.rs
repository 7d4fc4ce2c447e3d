use std::collections::HashSet;

use crate::core::types::BarcodeId;
use crate::index::store::{DeletionIndex, LengthGroup};
use crate::index::variants::VariantKey;

/// Finds reference barcodes that share a segment variant with a query
pub struct CandidateFinder<'a> {
    index: &'a DeletionIndex,
}

impl<'a> CandidateFinder<'a> {
    pub fn new(index: &'a DeletionIndex) -> Self {
        Self { index }
    }

    /// Ids of every reference that could be within `max_dist` of the encoded
    /// query, sorted and deduplicated.
    ///
    /// This is a superset of the true matches; candidates still need their
    /// distance verified.
    pub fn find_candidates(&self, query: &[u8]) -> Vec<BarcodeId> {
        let mut candidates = Vec::new();

        for group in self.index.groups_near(query.len()) {
            self.probe_group(group, query, &mut candidates);
        }

        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }

    /// Probe every segment of one length group.
    ///
    /// If the query is within `max_dist` of a reference, some segment `i` of that
    /// reference is aligned to a stretch of the query with at most `t` edits
    /// (`t` = per-segment deletion budget). That stretch starts within `max_dist`
    /// of the segment's own start and is within `t` of its length, so probing
    /// every such window is enough.
    fn probe_group(&self, group: &LengthGroup, query: &[u8], candidates: &mut Vec<BarcodeId>) {
        let max_dist = self.index.max_dist();
        let t = self.index.segment_deletions();
        let bits = self.index.bits_per_symbol();
        let generator = self.index.generator();

        for (segment, range) in group.segmentation.ranges().iter().enumerate() {
            let postings = &group.postings[segment];
            let seg_len = range.len();
            let min_key_len = seg_len.saturating_sub(t);
            let mut probed: HashSet<VariantKey> = HashSet::new();

            let first_start = range.start.saturating_sub(max_dist);
            let last_start = (range.start + max_dist).min(query.len());
            for start in first_start..=last_start {
                let max_len = (seg_len + t).min(query.len() - start);
                for len in min_key_len..=max_len {
                    let window = &query[start..start + len];
                    for (variant, _) in generator.generate(window, t) {
                        if variant.len() < min_key_len || variant.len() > seg_len {
                            continue;
                        }
                        let key = VariantKey::new(&variant, bits);
                        if !probed.insert(key.clone()) {
                            continue;
                        }
                        if let Some(ids) = postings.get(&key) {
                            candidates.extend_from_slice(ids);
                        }
                    }
                }
            }
        }
    }
}

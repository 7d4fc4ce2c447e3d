use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::core::types::BarcodeId;
use crate::index::segment::Segmentation;
use crate::index::variants::{DeletionGenerator, VariantKey};

/// Posting lists for one segment: variant key -> ids of the references that
/// produced it, sorted and deduplicated once the index is frozen
pub type SegmentPostings = HashMap<VariantKey, Vec<BarcodeId>>;

/// All references of a single length, indexed under a shared segmentation
#[derive(Debug)]
pub struct LengthGroup {
    pub segmentation: Segmentation,
    /// One map per segment
    pub postings: Vec<SegmentPostings>,
    /// Number of references in the group
    pub barcodes: usize,
}

impl LengthGroup {
    #[must_use]
    pub fn length(&self) -> usize {
        self.segmentation.length()
    }
}

/// Summary of index size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub barcodes: usize,
    pub lengths: Vec<usize>,
    pub max_dist: usize,
    pub segments: usize,
    pub segment_deletions: usize,
    /// Distinct (segment, variant) keys across all length groups
    pub keys: usize,
    /// Total ids stored across all posting lists
    pub postings: usize,
}

/// Pigeonhole deletion index over a set of encoded reference barcodes.
///
/// Each reference of length `L` is split into `segments` pieces using the
/// segmentation shared by every reference of that length. Every deletion variant
/// of every piece, up to `segment_deletions` deletions, becomes a key pointing
/// back at the reference.
#[derive(Debug)]
pub struct DeletionIndex {
    max_dist: usize,
    segments: usize,
    segment_deletions: usize,
    bits_per_symbol: u32,
    generator: DeletionGenerator,
    groups: BTreeMap<usize, LengthGroup>,
}

impl DeletionIndex {
    /// Build the index. `references` must already be encoded, validated to be at
    /// least `segments` long, and indexed by their `BarcodeId`.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is zero or larger than a reference's length, or if
    /// `segment_deletions` exceeds `max_dist`. Callers validate these first.
    #[must_use]
    pub fn build(
        references: &[Vec<u8>],
        max_dist: usize,
        segments: usize,
        bits_per_symbol: u32,
    ) -> Self {
        let segment_deletions = max_dist / segments;
        let generator = DeletionGenerator::new(max_dist);

        let mut ids_by_length: BTreeMap<usize, Vec<BarcodeId>> = BTreeMap::new();
        for (index, reference) in references.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)] // count checked by the caller
            let id = BarcodeId(index as u32);
            ids_by_length.entry(reference.len()).or_default().push(id);
        }

        let mut groups = BTreeMap::new();
        for (length, ids) in ids_by_length {
            let segmentation = Segmentation::new(length, segments).unwrap_or_else(|| {
                panic!("cannot split length {length} into {segments} segments")
            });

            // Variant generation is independent per reference; only the merge
            // into the shared maps is sequential.
            let variants: Vec<_> = ids
                .par_iter()
                .map(|&id| {
                    let variants = generator.segment_variants(
                        &references[id.index()],
                        &segmentation,
                        segment_deletions,
                    );
                    (id, variants)
                })
                .collect();

            let mut postings: Vec<SegmentPostings> = vec![HashMap::new(); segments];
            for (id, variants) in variants {
                for v in variants {
                    postings[v.segment]
                        .entry(VariantKey::new(&v.variant, bits_per_symbol))
                        .or_default()
                        .push(id);
                }
            }

            for map in &mut postings {
                map.par_iter_mut().for_each(|(_, ids)| {
                    ids.sort_unstable();
                    ids.dedup();
                    ids.shrink_to_fit();
                });
                map.shrink_to_fit();
            }

            debug!(
                "Indexed {} barcodes of length {} ({} keys)",
                ids.len(),
                length,
                postings.iter().map(HashMap::len).sum::<usize>()
            );

            groups.insert(
                length,
                LengthGroup {
                    segmentation,
                    postings,
                    barcodes: ids.len(),
                },
            );
        }

        Self {
            max_dist,
            segments,
            segment_deletions,
            bits_per_symbol,
            generator,
            groups,
        }
    }

    #[must_use]
    pub fn max_dist(&self) -> usize {
        self.max_dist
    }

    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    #[must_use]
    pub fn segment_deletions(&self) -> usize {
        self.segment_deletions
    }

    #[must_use]
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }

    #[must_use]
    pub fn generator(&self) -> &DeletionGenerator {
        &self.generator
    }

    /// Distinct reference lengths, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.groups.keys().copied().collect()
    }

    /// Length groups that could hold a match for a query of `query_len`
    pub fn groups_near(&self, query_len: usize) -> impl Iterator<Item = &LengthGroup> {
        let lo = query_len.saturating_sub(self.max_dist);
        let hi = query_len.saturating_add(self.max_dist);
        self.groups.range(lo..=hi).map(|(_, group)| group)
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let mut keys = 0;
        let mut postings = 0;
        let mut barcodes = 0;
        for group in self.groups.values() {
            barcodes += group.barcodes;
            for map in &group.postings {
                keys += map.len();
                postings += map.values().map(Vec::len).sum::<usize>();
            }
        }

        IndexStats {
            barcodes,
            lengths: self.lengths(),
            max_dist: self.max_dist,
            segments: self.segments,
            segment_deletions: self.segment_deletions,
            keys,
            postings,
        }
    }
}

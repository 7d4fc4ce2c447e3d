//! Deletion-variant generation.
//!
//! A deletion variant of a sequence is any string obtained by removing some of its
//! symbols. Two sequences within `t` Levenshtein edits of each other always share a
//! variant reachable from each with at most `t` deletions, which is what lets the
//! index find approximate matches with exact hash lookups.

use std::collections::HashSet;

use crate::index::segment::Segmentation;

/// A deletion variant of one segment of a barcode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeletionVariant {
    /// Segment the variant was derived from
    pub segment: usize,
    /// Minimum number of deletions that produce `variant` from the segment
    pub deletions: usize,
    /// The remaining symbols
    pub variant: Vec<u8>,
}

/// Generates deletion neighbourhoods up to a fixed budget.
#[derive(Debug, Clone, Copy)]
pub struct DeletionGenerator {
    max_dist: usize,
}

impl DeletionGenerator {
    #[must_use]
    pub fn new(max_dist: usize) -> Self {
        Self { max_dist }
    }

    #[must_use]
    pub fn max_dist(&self) -> usize {
        self.max_dist
    }

    /// All distinct strings reachable from `seq` by deleting `0..=deletions_allowed`
    /// symbols, each paired with the fewest deletions that reach it.
    ///
    /// Variants are produced level by level, so the input itself comes first and
    /// every variant with `d` deletions precedes those with `d + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `deletions_allowed` exceeds the generator's `max_dist`.
    #[must_use]
    pub fn generate(&self, seq: &[u8], deletions_allowed: usize) -> Vec<(Vec<u8>, usize)> {
        assert!(
            deletions_allowed <= self.max_dist,
            "deletion budget {deletions_allowed} exceeds max_dist {}",
            self.max_dist
        );

        let mut seen: HashSet<Vec<u8>> = HashSet::new();
        seen.insert(seq.to_vec());
        let mut variants = vec![(seq.to_vec(), 0)];
        let mut frontier = vec![seq.to_vec()];

        for deletions in 1..=deletions_allowed.min(seq.len()) {
            let mut next = Vec::new();
            for parent in &frontier {
                for i in 0..parent.len() {
                    // Deleting any symbol of a run gives the same string
                    if i > 0 && parent[i] == parent[i - 1] {
                        continue;
                    }
                    let mut child = Vec::with_capacity(parent.len() - 1);
                    child.extend_from_slice(&parent[..i]);
                    child.extend_from_slice(&parent[i + 1..]);
                    if seen.insert(child.clone()) {
                        variants.push((child.clone(), deletions));
                        next.push(child);
                    }
                }
            }
            frontier = next;
        }

        variants
    }

    /// Deletion variants of every segment of `barcode`, each tagged with the
    /// segment it came from.
    ///
    /// # Panics
    ///
    /// Panics if `deletions_allowed` exceeds `max_dist` or `barcode` is shorter
    /// than the segmented length.
    #[must_use]
    pub fn segment_variants(
        &self,
        barcode: &[u8],
        segmentation: &Segmentation,
        deletions_allowed: usize,
    ) -> Vec<DeletionVariant> {
        (0..segmentation.count())
            .flat_map(|segment| {
                self.generate(segmentation.segment(barcode, segment), deletions_allowed)
                    .into_iter()
                    .map(move |(variant, deletions)| DeletionVariant {
                        segment,
                        deletions,
                        variant,
                    })
            })
            .collect()
    }
}

/// Hashable form of an encoded variant.
///
/// Short variants are packed into a single integer, storing each code as
/// `code + 1` so that no symbol packs to zero and variants of different lengths
/// never collide. Variants too long to pack keep their encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantKey {
    Packed(u128),
    Bytes(Box<[u8]>),
}

impl VariantKey {
    #[must_use]
    pub fn new(codes: &[u8], bits_per_symbol: u32) -> Self {
        if codes.len() * bits_per_symbol as usize <= u128::BITS as usize {
            let packed = codes.iter().fold(0u128, |acc, &code| {
                (acc << bits_per_symbol) | (u128::from(code) + 1)
            });
            Self::Packed(packed)
        } else {
            Self::Bytes(codes.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants_of(generator: &DeletionGenerator, seq: &str, d: usize) -> Vec<(String, usize)> {
        generator
            .generate(seq.as_bytes(), d)
            .into_iter()
            .map(|(v, n)| (String::from_utf8(v).unwrap(), n))
            .collect()
    }

    #[test]
    fn test_zero_deletions_is_identity() {
        let generator = DeletionGenerator::new(0);
        assert_eq!(variants_of(&generator, "ACGT", 0), vec![("ACGT".to_string(), 0)]);
    }

    #[test]
    fn test_single_deletions() {
        let generator = DeletionGenerator::new(1);
        let variants = variants_of(&generator, "ACG", 1);
        assert_eq!(
            variants,
            vec![
                ("ACG".to_string(), 0),
                ("CG".to_string(), 1),
                ("AG".to_string(), 1),
                ("AC".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_runs_are_collapsed() {
        let generator = DeletionGenerator::new(2);
        let variants = variants_of(&generator, "AAA", 2);
        assert_eq!(
            variants,
            vec![
                ("AAA".to_string(), 0),
                ("AA".to_string(), 1),
                ("A".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_minimum_deletions_recorded() {
        let generator = DeletionGenerator::new(2);
        let variants = variants_of(&generator, "ACGT", 2);
        // 1 + C(4,1) + C(4,2), all distinct for a sequence without repeats
        assert_eq!(variants.len(), 11);
        assert!(variants.contains(&("AT".to_string(), 2)));
        assert!(variants.contains(&("CGT".to_string(), 1)));
    }

    #[test]
    fn test_budget_larger_than_sequence() {
        let generator = DeletionGenerator::new(3);
        let variants = variants_of(&generator, "AC", 3);
        assert_eq!(variants.len(), 4);
        assert!(variants.contains(&(String::new(), 2)));
    }

    #[test]
    #[should_panic(expected = "exceeds max_dist")]
    fn test_budget_over_max_dist_panics() {
        let generator = DeletionGenerator::new(1);
        let _ = generator.generate(b"ACGT", 2);
    }

    #[test]
    fn test_segment_variants_tagged() {
        let generator = DeletionGenerator::new(1);
        let segmentation = Segmentation::new(6, 2).unwrap();
        let variants = generator.segment_variants(b"AACGTT", &segmentation, 1);

        let first: Vec<_> = variants.iter().filter(|v| v.segment == 0).collect();
        let second: Vec<_> = variants.iter().filter(|v| v.segment == 1).collect();
        // AAC -> AAC, AC, AA
        assert_eq!(first.len(), 3);
        // GTT -> GTT, TT, GT
        assert_eq!(second.len(), 3);
        assert_eq!(first[0].variant, b"AAC");
        assert_eq!(first[0].deletions, 0);
    }

    #[test]
    fn test_variant_keys_distinguish_lengths() {
        // code 0 would vanish if packed as-is; "A" and "AA" must differ
        assert_ne!(VariantKey::new(&[0], 3), VariantKey::new(&[0, 0], 3));
        assert_eq!(VariantKey::new(&[1, 2], 3), VariantKey::Packed((2 << 3) | 3));
        assert_eq!(VariantKey::new(&[], 3), VariantKey::Packed(0));
    }

    #[test]
    fn test_long_variants_fall_back_to_bytes() {
        let codes = vec![1u8; 50];
        assert!(matches!(VariantKey::new(&codes, 3), VariantKey::Bytes(_)));
        assert!(matches!(VariantKey::new(&codes[..42], 3), VariantKey::Packed(_)));
    }
}

use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::core::alphabet::Alphabet;
use crate::core::error::{ConfigurationError, InputError};
use crate::core::types::{BarcodeId, BarcodeMatch};
use crate::index::candidates::CandidateFinder;
use crate::index::store::{DeletionIndex, IndexStats};
use crate::matching::distance::bounded_levenshtein;
use crate::matching::substrings::candidate_windows;
use crate::parsing::whitelist::{read_barcodes, WhitelistError};
use crate::utils::validation::{check_barcode_limit, MAX_SEGMENT_DELETIONS};

/// Default maximum edit distance corrected
pub const DEFAULT_MAX_DIST: usize = 1;

/// Settings fixed when a [`BarcodeSet`] is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeSetConfig {
    /// Maximum Levenshtein distance a lookup will correct
    pub max_dist: usize,
    /// Pigeonhole segment count; `None` means `max_dist + 1`
    pub segments: Option<usize>,
    /// Symbols allowed in references and queries
    pub alphabet: Alphabet,
}

impl Default for BarcodeSetConfig {
    fn default() -> Self {
        Self {
            max_dist: DEFAULT_MAX_DIST,
            segments: None,
            alphabet: Alphabet::dna(),
        }
    }
}

impl BarcodeSetConfig {
    #[must_use]
    pub fn new(max_dist: usize) -> Self {
        Self {
            max_dist,
            ..Self::default()
        }
    }

    /// Use fewer, longer segments. Each segment then tolerates
    /// `max_dist / segments` deletions, which trades more keys per barcode for
    /// fewer candidates per probe.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = Some(segments);
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Segment count actually used
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.unwrap_or(self.max_dist + 1)
    }

    /// Check the settings independently of any reference barcodes
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSegmentCount` if the segment count is
    /// zero or above `max_dist + 1`, or `TooManySegmentDeletions` if each segment
    /// would need more than [`MAX_SEGMENT_DELETIONS`] deletions.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let segments = self.segment_count();
        let max = self.max_dist + 1;
        if segments == 0 || segments > max {
            return Err(ConfigurationError::InvalidSegmentCount { segments, max });
        }

        let deletions = self.max_dist / segments;
        if deletions > MAX_SEGMENT_DELETIONS {
            return Err(ConfigurationError::TooManySegmentDeletions {
                deletions,
                max: MAX_SEGMENT_DELETIONS,
            });
        }

        Ok(())
    }
}

/// A frozen set of reference barcodes that can be searched with edits.
///
/// Built once; every lookup takes `&self`, so a set can be shared across
/// threads without locking.
#[derive(Debug)]
pub struct BarcodeSet {
    config: BarcodeSetConfig,
    barcodes: Vec<String>,
    members: HashSet<String>,
    index: DeletionIndex,
}

impl BarcodeSet {
    /// Build a set that corrects up to `max_dist` edits, with the default
    /// segmentation and the `ACGTN` alphabet.
    ///
    /// # Errors
    ///
    /// See [`BarcodeSet::with_config`].
    pub fn create<I, S>(references: I, max_dist: usize) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(references, BarcodeSetConfig::new(max_dist))
    }

    /// Build a set with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::EmptyReferenceSet` if there are no references,
    /// `InvalidBarcode` if a reference has a symbol outside the alphabet,
    /// `BarcodeTooShort` if one is not longer than `max_dist`, `DuplicateBarcode`
    /// if a reference repeats, `TooManyBarcodes` if ids would overflow, or any
    /// error from [`BarcodeSetConfig::validate`].
    pub fn with_config<I, S>(references: I, config: BarcodeSetConfig) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;

        let barcodes: Vec<String> = references.into_iter().map(Into::into).collect();
        if barcodes.is_empty() {
            return Err(ConfigurationError::EmptyReferenceSet);
        }
        if check_barcode_limit(barcodes.len()).is_some() {
            return Err(ConfigurationError::TooManyBarcodes(barcodes.len()));
        }

        let required = config.max_dist + 1;
        let mut members: HashSet<String> = HashSet::with_capacity(barcodes.len());
        let mut encoded = Vec::with_capacity(barcodes.len());
        for (index, barcode) in barcodes.iter().enumerate() {
            let codes = config
                .alphabet
                .encode(barcode.as_bytes())
                .map_err(|source| ConfigurationError::InvalidBarcode { index, source })?;
            if codes.len() < required {
                return Err(ConfigurationError::BarcodeTooShort {
                    barcode: barcode.clone(),
                    length: codes.len(),
                    required,
                    max_dist: config.max_dist,
                });
            }
            if !members.insert(barcode.clone()) {
                return Err(ConfigurationError::DuplicateBarcode(barcode.clone()));
            }
            encoded.push(codes);
        }

        info!(
            "Building index for {} barcodes (max_dist {}, {} segments)",
            barcodes.len(),
            config.max_dist,
            config.segment_count()
        );
        let index = DeletionIndex::build(
            &encoded,
            config.max_dist,
            config.segment_count(),
            config.alphabet.bits_per_symbol(),
        );

        let stats = index.stats();
        debug!(
            "Built index with {} barcodes, {} keys, {} postings",
            stats.barcodes, stats.keys, stats.postings
        );

        Ok(Self {
            config,
            barcodes,
            members,
            index,
        })
    }

    /// Read a newline-delimited whitelist (plain or gzip) and build a set from it
    ///
    /// # Errors
    ///
    /// Returns `WhitelistError::Io` if the file cannot be read,
    /// `WhitelistError::InvalidFormat` if it holds no barcodes, or
    /// `WhitelistError::Configuration` if the set cannot be built.
    pub fn load_from(path: &Path, config: BarcodeSetConfig) -> Result<Self, WhitelistError> {
        info!("Reading barcodes from {}", path.display());
        let barcodes = read_barcodes(path)?;
        Ok(Self::with_config(barcodes, config)?)
    }

    #[must_use]
    pub fn config(&self) -> &BarcodeSetConfig {
        &self.config
    }

    #[must_use]
    pub fn max_dist(&self) -> usize {
        self.config.max_dist
    }

    #[must_use]
    pub fn segments(&self) -> usize {
        self.index.segments()
    }

    #[must_use]
    pub fn segment_deletions(&self) -> usize {
        self.index.segment_deletions()
    }

    /// Number of reference barcodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    /// Distinct reference lengths, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.index.lengths()
    }

    /// Reference barcodes in input order
    #[must_use]
    pub fn barcodes(&self) -> &[String] {
        &self.barcodes
    }

    #[must_use]
    pub fn barcode(&self, id: BarcodeId) -> Option<&str> {
        self.barcodes.get(id.index()).map(String::as_str)
    }

    /// Whether `barcode` is one of the references, exactly
    #[must_use]
    pub fn contains(&self, barcode: &str) -> bool {
        self.members.contains(barcode)
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// All references at the smallest edit distance from `query`, if that
    /// distance is at most `max_dist`. Ties are all returned, sorted by reference.
    /// No match is an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidSymbol` if `query` has a symbol outside the
    /// alphabet.
    pub fn lookup(&self, query: &str) -> Result<Vec<BarcodeMatch>, InputError> {
        trace!("Searching for {}", query);
        let encoded = self.config.alphabet.encode(query.as_bytes())?;
        Ok(self.lookup_encoded(query, &encoded))
    }

    /// Look up a group of related strings together and return the matches at
    /// the smallest distance found for any of them.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidSymbol` if any query has a symbol outside the
    /// alphabet; no lookups are done in that case.
    pub fn lookup_batch<'q, I>(&self, queries: I) -> Result<Vec<BarcodeMatch>, InputError>
    where
        I: IntoIterator<Item = &'q str>,
    {
        let mut seen = HashSet::new();
        let mut encoded = Vec::new();
        for query in queries {
            if seen.insert(query) {
                encoded.push((query, self.config.alphabet.encode(query.as_bytes())?));
            }
        }
        trace!("Searching for {} queries", encoded.len());

        let matches: Vec<BarcodeMatch> = encoded
            .par_iter()
            .flat_map_iter(|(query, codes)| self.lookup_encoded(query, codes))
            .collect();

        Ok(closest(matches))
    }

    /// Look up every substring of `text` that could hold a barcode with up to
    /// `max_dist` edits, and return the matches at the smallest distance found.
    /// Each result carries the substring that matched; overlapping windows that
    /// tie are all kept.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidSymbol` if `text` has a symbol outside the
    /// alphabet.
    pub fn lookup_substrings(&self, text: &str) -> Result<Vec<BarcodeMatch>, InputError> {
        // Validate up front so the error reports a position in `text`
        self.config.alphabet.encode(text.as_bytes())?;

        let windows = candidate_windows(text, &self.index.lengths(), self.config.max_dist);
        trace!("Searching {} windows of {}", windows.len(), text);
        self.lookup_batch(windows)
    }

    fn lookup_encoded(&self, query: &str, encoded: &[u8]) -> Vec<BarcodeMatch> {
        let max_dist = self.config.max_dist;
        let candidates = CandidateFinder::new(&self.index).find_candidates(encoded);

        let matches = candidates
            .into_iter()
            .filter_map(|id| {
                let reference = &self.barcodes[id.index()];
                bounded_levenshtein(query.as_bytes(), reference.as_bytes(), max_dist).map(
                    |distance| {
                        debug_assert!(distance <= max_dist);
                        BarcodeMatch::new(reference.as_str(), query, distance)
                    },
                )
            })
            .collect();

        closest(matches)
    }
}

/// Keep only the matches at the minimum distance, deduplicated and sorted
fn closest(mut matches: Vec<BarcodeMatch>) -> Vec<BarcodeMatch> {
    let Some(min_dist) = matches.iter().map(|m| m.distance).min() else {
        return matches;
    };
    matches.retain(|m| m.distance == min_dist);
    matches.sort();
    matches.dedup();
    matches
}

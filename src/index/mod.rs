//! Pigeonhole deletion index for approximate barcode lookup.
//!
//! The index answers "which references might be within `max_dist` edits of this
//! query" with a handful of hash lookups, independent of how many references
//! there are.
//!
//! ## How it works
//!
//! Every reference of length `L` is split into `p` contiguous segments
//! ([`Segmentation`](segment::Segmentation)); `p` defaults to `max_dist + 1`. If a
//! query is within `d <= max_dist` edits of a reference, the edits are spread over
//! the `p` segments, so at least one segment carries at most `t = max_dist / p`
//! of them. With the default `p`, `t` is zero and some segment survives intact.
//!
//! - **Build**: each segment's deletion variants with up to `t` deletions
//!   ([`DeletionGenerator`](variants::DeletionGenerator)) are stored as keys
//!   pointing back to the reference.
//! - **Probe**: for each segment, the windows of the query that could be aligned to
//!   it (shifted by at most `max_dist`, resized by at most `t`) are expanded the
//!   same way and looked up ([`CandidateFinder`](candidates::CandidateFinder)).
//!
//! References of different lengths get different segmentations and live in
//! separate length groups; a query only probes groups whose length is within
//! `max_dist` of its own.
//!
//! Candidates are a superset of the true matches and are verified with an exact
//! edit distance by the matcher.
//!
//! ## Example
//!
//! ```rust
//! use barcode_solver::core::alphabet::Alphabet;
//! use barcode_solver::index::candidates::CandidateFinder;
//! use barcode_solver::index::store::DeletionIndex;
//!
//! let alphabet = Alphabet::dna();
//! let refs = vec![alphabet.encode(b"AAAACCCC").unwrap()];
//! let index = DeletionIndex::build(&refs, 1, 2, alphabet.bits_per_symbol());
//!
//! let query = alphabet.encode(b"AAAACCGC").unwrap();
//! let candidates = CandidateFinder::new(&index).find_candidates(&query);
//! assert_eq!(candidates.len(), 1);
//! ```

pub mod candidates;
pub mod segment;
pub mod store;
pub mod variants;

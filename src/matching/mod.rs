//! Barcode lookup: candidate verification and ranking.
//!
//! - [`BarcodeSet`](engine::BarcodeSet): main entry point, built once from a
//!   whitelist and queried with `lookup`, `lookup_batch` and `lookup_substrings`
//! - [`levenshtein`](distance::levenshtein) and
//!   [`bounded_levenshtein`](distance::bounded_levenshtein): exact distance checks
//! - [`candidate_windows`](substrings::candidate_windows): substrings of a read
//!   that could hold a barcode
//!
//! ## Lookup Algorithm
//!
//! 1. **Candidates**: the pigeonhole index returns every reference sharing a
//!    segment variant with the query
//! 2. **Verification**: each candidate's Levenshtein distance is computed, and
//!    anything above `max_dist` is discarded
//! 3. **Ranking**: all candidates at the minimum distance are returned; ties are
//!    never broken
//!
//! For substring lookups the same steps run over every window of the read whose
//! length is within `max_dist` of a reference length, and only the matches at the
//! minimum distance over all windows are kept.
//!
//! ## Example
//!
//! ```rust
//! use barcode_solver::BarcodeSet;
//!
//! let set = BarcodeSet::create(["AGTGTGGCTTGCGGAC"], 1).unwrap();
//!
//! let matches = set.lookup("AGTGTGGCTTGCGGAG").unwrap();
//! assert_eq!(matches[0].distance, 1);
//!
//! let matches = set.lookup_substrings("GTGAGAGTGTGGCTTGCGGAGCATAGA").unwrap();
//! for m in &matches {
//!     println!("{} {} {}", m.reference, m.query, m.distance);
//! }
//! ```

pub mod distance;
pub mod engine;
pub mod substrings;

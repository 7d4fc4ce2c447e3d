//! # barcode-solver
//!
//! Error-tolerant lookup of sequencing barcodes against a whitelist.
//!
//! Single-cell and spatial protocols tag every read with a barcode drawn from a
//! known whitelist, often millions of entries long. Sequencing errors mean the
//! barcode in a read is frequently a few edits away from any whitelist entry, and
//! its exact position in the read may be uncertain.
//!
//! `barcode-solver` builds an index over the whitelist once and then answers, in
//! time independent of the whitelist size, "which whitelist barcodes are closest
//! to this sequence" for up to `max_dist` insertions, deletions, or substitutions.
//!
//! ## Features
//!
//! - **Pigeonhole deletion index**: far fewer keys per barcode than a full
//!   symmetric-delete dictionary, without missing any match within `max_dist`
//! - **Exact verification**: every candidate is confirmed with its Levenshtein
//!   distance
//! - **Tie preservation**: all references at the best distance are reported
//! - **Substring search**: finds barcodes whose boundaries in a read are unknown
//! - **Mixed lengths**: whitelists with several barcode lengths are supported
//!
//! ## Example
//!
//! ```rust
//! use barcode_solver::BarcodeSet;
//!
//! let set = BarcodeSet::create(["AAAACCCCGGGG", "TTTTGGGGCCCC"], 1).unwrap();
//!
//! let matches = set.lookup("AAAACCCGGGG").unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].reference, "AAAACCCCGGGG");
//! assert_eq!(matches[0].distance, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alphabet, result types and errors
//! - [`index`]: Segmentation, deletion variants and the pigeonhole index
//! - [`matching`]: Distance verification and the lookup engine
//! - [`parsing`]: Whitelist loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::Alphabet;
pub use crate::core::error::{ConfigurationError, InputError};
pub use crate::core::types::{BarcodeId, BarcodeMatch};
pub use crate::index::store::IndexStats;
pub use crate::matching::engine::{BarcodeSet, BarcodeSetConfig};
pub use crate::parsing::whitelist::WhitelistError;

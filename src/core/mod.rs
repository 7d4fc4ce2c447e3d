//! Core data types for barcode lookup.
//!
//! - [`Alphabet`](alphabet::Alphabet): the symbol set barcodes are drawn from, and
//!   the dense symbol codes used inside the index
//! - [`BarcodeId`](types::BarcodeId), [`BarcodeMatch`](types::BarcodeMatch): reference
//!   identifiers and lookup results
//! - [`ConfigurationError`](error::ConfigurationError),
//!   [`InputError`](error::InputError): failures when building a set or reading a query
//!
//! ## Symbols
//!
//! The default alphabet is `ACGTN`. Matching is case-sensitive and symbols outside
//! the alphabet are rejected rather than scored as mismatches:
//!
//! | Input | Result |
//! |-------|--------|
//! | `ACGT` | encoded as `[0, 1, 2, 3]` |
//! | `ACNT` | encoded as `[0, 1, 4, 3]` |
//! | `acgt` | `InputError::InvalidSymbol` at position 0 |

pub mod alphabet;
pub mod error;
pub mod types;

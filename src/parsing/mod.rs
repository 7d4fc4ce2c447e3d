//! Loaders that turn external files into barcode and query lists.
//!
//! - **Whitelists**: newline-delimited barcodes, plain or gzip/bgzip compressed
//! - **Queries**: newline-delimited queries or reads, kept verbatim and in order
//!
//! ## Example
//!
//! ```rust,no_run
//! use barcode_solver::parsing::whitelist::read_barcodes;
//! use std::path::Path;
//!
//! let barcodes = read_barcodes(Path::new("3M-february-2018.txt.gz")).unwrap();
//! println!("{} barcodes", barcodes.len());
//! ```

pub mod queries;
pub mod whitelist;

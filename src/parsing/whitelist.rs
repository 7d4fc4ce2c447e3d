//! Reader for barcode whitelists.
//!
//! A whitelist is a newline-delimited list of barcodes, optionally gzip
//! compressed (`.gz` or `.bgz`). Blank lines and `#` comments are skipped, and
//! repeated barcodes are dropped with a warning so the result is ready to
//! index.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::warn;

use crate::core::error::ConfigurationError;
use crate::utils::validation::normalize_barcode_line;

#[derive(Error, Debug)]
pub enum WhitelistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid whitelist: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read all barcodes from a whitelist file, in file order.
///
/// # Errors
///
/// Returns `WhitelistError::Io` if the file cannot be read or decompressed, or
/// `WhitelistError::InvalidFormat` if it contains no barcodes.
pub fn read_barcodes(path: &Path) -> Result<Vec<String>, WhitelistError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        // bgzip files are concatenated gzip members
        read_barcodes_from(MultiGzDecoder::new(file))
    } else {
        read_barcodes_from(file)
    }
}

/// Read barcodes from any byte stream.
///
/// # Errors
///
/// Returns `WhitelistError::Io` on read failures or invalid UTF-8, or
/// `WhitelistError::InvalidFormat` if the stream contains no barcodes.
pub fn read_barcodes_from<R: Read>(reader: R) -> Result<Vec<String>, WhitelistError> {
    let reader = BufReader::new(reader);
    let mut seen = HashSet::new();
    let mut barcodes = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(barcode) = normalize_barcode_line(&line) else {
            continue;
        };

        if seen.insert(barcode.to_string()) {
            barcodes.push(barcode.to_string());
        } else {
            warn!("Skipping duplicate barcode '{}' on line {}", barcode, i + 1);
        }
    }

    if barcodes.is_empty() {
        return Err(WhitelistError::InvalidFormat(
            "No barcodes found".to_string(),
        ));
    }

    Ok(barcodes)
}

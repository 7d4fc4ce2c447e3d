//! Reader for query and read files.
//!
//! Unlike a whitelist, a query file is data to be corrected: every non-blank
//! line is one query, repeats included, in file order. Lines are only trimmed
//! of surrounding whitespace; anything else (such as a leading `#`) is left for
//! the lookup to validate.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::whitelist::is_gzipped;

/// Read every query from a plain or gzipped file.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened, decompressed or decoded
/// as UTF-8.
pub fn read_queries(path: &Path) -> std::io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        read_queries_from(MultiGzDecoder::new(file))
    } else {
        read_queries_from(file)
    }
}

/// Read every non-blank line of a stream as a query.
///
/// # Errors
///
/// Returns an IO error on read failures or invalid UTF-8.
pub fn read_queries_from<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let query = line.trim();
        if !query.is_empty() {
            queries.push(query.to_string());
        }
    }
    Ok(queries)
}

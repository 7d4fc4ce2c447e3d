//! Centralized limits and validation helpers.

/// Maximum number of reference barcodes; ids are stored as `u32`
pub const MAX_BARCODES: usize = u32::MAX as usize;

/// Largest per-segment deletion budget accepted. Deletion neighbourhoods grow
/// as `C(segment_length, t)`, so larger budgets need more segments instead.
pub const MAX_SEGMENT_DELETIONS: usize = 3;

/// Check if a set of `count` barcodes can be indexed.
/// Returns an error message if it is too large, None if it fits.
///
/// # Example
/// ```
/// use barcode_solver::utils::validation::check_barcode_limit;
///
/// assert!(check_barcode_limit(1_000_000).is_none());
/// ```
#[must_use]
pub fn check_barcode_limit(count: usize) -> Option<String> {
    if count > MAX_BARCODES {
        Some(format!(
            "Too many barcodes: {count} exceeds maximum of {MAX_BARCODES}"
        ))
    } else {
        None
    }
}

/// Normalize one whitelist line: trims whitespace and drops blank lines and
/// `#` comments.
///
/// # Examples
///
/// ```
/// use barcode_solver::utils::validation::normalize_barcode_line;
///
/// assert_eq!(normalize_barcode_line("  ACGT \r"), Some("ACGT"));
/// assert_eq!(normalize_barcode_line("# header"), None);
/// assert_eq!(normalize_barcode_line(""), None);
/// ```
#[must_use]
pub fn normalize_barcode_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}

use thiserror::Error;

/// A query or reference contains something the index cannot interpret
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// A barcode set cannot be built from the given references and settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Reference barcode set is empty")]
    EmptyReferenceSet,

    #[error("Invalid segment count {segments}: must be between 1 and max_dist + 1 ({max})")]
    InvalidSegmentCount { segments: usize, max: usize },

    #[error(
        "Per-segment deletion budget {deletions} exceeds the supported maximum of {max}; \
         use more segments"
    )]
    TooManySegmentDeletions { deletions: usize, max: usize },

    #[error(
        "Barcode '{barcode}' has length {length}, shorter than the {required} symbols \
         needed for max_dist {max_dist}"
    )]
    BarcodeTooShort {
        barcode: String,
        length: usize,
        required: usize,
        max_dist: usize,
    },

    #[error("Duplicate reference barcode '{0}'")]
    DuplicateBarcode(String),

    #[error("Invalid reference barcode #{index}: {source}")]
    InvalidBarcode {
        index: usize,
        #[source]
        source: InputError,
    },

    #[error("Too many reference barcodes: {0} exceeds maximum allowed ({max})", max = u32::MAX)]
    TooManyBarcodes(usize),
}

use serde::{Deserialize, Serialize};

/// Stable identifier of a reference barcode: its position in the input list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BarcodeId(pub u32);

impl BarcodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BarcodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One lookup hit: a reference barcode, the (sub)string that was looked up,
/// and the verified edit distance between them.
///
/// Ordering is by distance, then reference, then query, which is the order
/// lookups return their results in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarcodeMatch {
    pub distance: usize,
    pub reference: String,
    pub query: String,
}

impl BarcodeMatch {
    #[must_use]
    pub fn new(reference: impl Into<String>, query: impl Into<String>, distance: usize) -> Self {
        Self {
            distance,
            reference: reference.into(),
            query: query.into(),
        }
    }

    /// `(reference, query, distance)`, the shape callers of the lookup API expect
    #[must_use]
    pub fn into_tuple(self) -> (String, String, usize) {
        (self.reference, self.query, self.distance)
    }
}

impl PartialOrd for BarcodeMatch {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BarcodeMatch {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.reference.cmp(&other.reference))
            .then_with(|| self.query.cmp(&other.query))
    }
}

impl std::fmt::Display for BarcodeMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.reference, self.query, self.distance)
    }
}

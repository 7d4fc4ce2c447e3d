use std::ops::Range;

/// Partition of a barcode length into contiguous, near-equal segments.
///
/// The first `length % count` segments are one symbol longer than the rest, so
/// segment lengths never differ by more than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    length: usize,
    ranges: Vec<Range<usize>>,
}

impl Segmentation {
    /// Split `length` into `count` segments. Returns `None` when `count` is zero
    /// or larger than `length`, since every segment must hold at least one symbol.
    #[must_use]
    pub fn new(length: usize, count: usize) -> Option<Self> {
        if count == 0 || count > length {
            return None;
        }

        let base = length / count;
        let extra = length % count;
        let mut ranges = Vec::with_capacity(count);
        let mut start = 0;
        for i in 0..count {
            let len = base + usize::from(i < extra);
            ranges.push(start..start + len);
            start += len;
        }

        Some(Self { length, ranges })
    }

    /// Total barcode length covered
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// The slice of `seq` covered by segment `index`.
    ///
    /// # Panics
    ///
    /// Panics if `seq` is shorter than the segmented length.
    #[must_use]
    pub fn segment<'s>(&self, seq: &'s [u8], index: usize) -> &'s [u8] {
        &seq[self.ranges[index].clone()]
    }
}

//! Sample data for exercising the filter.
//!
//! [`MaskForTag`] repeats one parent/child batch across any number of batches, runs the
//! filter over it and knows what the answer should be. The benchmarks and integration
//! tests drive it.
//!
//! # Example
//!
//! ```
//! use tagrange::sample::MaskForTag;
//!
//! let mut me = MaskForTag::new(3).unwrap();
//! me.run().unwrap();
//! assert_eq!(me.mask(), &me.expected_mask()[..]);
//! assert_eq!(me.render(), "MHMHMHMHMHMH");
//!
//! me.clear_mask();
//! assert!(me.mask().iter().all(|&m| m == 0));
//! ```

use crate::{
    errors::ShapeError,
    filter::{mask_for_tag_in_range, BATCH, HIT, MISS},
    tag_range::TagRange,
};
use log::trace;

/// A tag together with an interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagDatum {
    pub tag: u64,
    pub start: u64,
    pub end: u64,
}

impl TagDatum {
    pub const fn to_range(self) -> TagRange { TagRange::new(self.tag, self.start, self.end) }
}

/// Renders a sentinel as `H` (hit), `M` (miss) or `?` (neither).
pub fn hit_or_miss(x: u64) -> char {
    match x {
        HIT => 'H',
        MISS => 'M',
        _ => '?',
    }
}

/// A filled record array and its mask, ready to be filtered repeatedly.
#[derive(Clone, Debug)]
pub struct MaskForTag {
    data: Vec<u64>,
    mask: Vec<u64>,
}

impl MaskForTag {
    /// The query interval, also stored as the first record of every batch.
    pub const PARENT: TagDatum = TagDatum {
        tag: 1,
        start: 10,
        end: 30,
    };
    /// The tag the filter looks for.
    pub const CHILD_TAG: u64 = 2;
    /// The answer for one batch.
    pub const EXPECTED: [u64; BATCH] = [MISS, HIT, MISS, HIT];

    /// One batch: wrong tag, contained, overhanging, exactly the parent range.
    pub const fn pattern() -> [TagRange; BATCH] {
        let p = Self::PARENT;
        [
            p.to_range(),
            TagRange::new(Self::CHILD_TAG, 12, 20),
            TagRange::new(Self::CHILD_TAG, 25, 35),
            TagRange::new(Self::CHILD_TAG, p.start, p.end),
        ]
    }

    /// Builds `lanes` copies of [`pattern`](MaskForTag::pattern). Returns `None` when
    /// `lanes` is zero or the buffers could not be sized in bytes.
    pub fn new(lanes: usize) -> Option<Self> {
        if lanes == 0 || lanes > usize::max_value() / (BATCH * 16) {
            return None;
        }
        let count = lanes * BATCH;
        trace!("filling {} sample records", count);

        let pattern = Self::pattern();
        let data = pattern
            .iter()
            .map(|r| r.raw())
            .cycle()
            .take(count)
            .collect();

        Some(MaskForTag {
            data,
            mask: vec![MISS; count],
        })
    }

    /// Filters the sample for [`CHILD_TAG`](MaskForTag::CHILD_TAG) inside
    /// [`PARENT`](MaskForTag::PARENT).
    pub fn run(&mut self) -> Result<(), ShapeError> {
        let p = Self::PARENT;
        mask_for_tag_in_range(&self.data, &mut self.mask, Self::CHILD_TAG, p.start, p.end)
    }

    /// Zeroes the mask.
    pub fn clear_mask(&mut self) {
        for m in self.mask.iter_mut() {
            *m = MISS;
        }
    }

    pub fn data(&self) -> &[u64] { &self.data }

    pub fn mask(&self) -> &[u64] { &self.mask }

    pub fn expected_mask(&self) -> Vec<u64> {
        Self::EXPECTED
            .iter()
            .copied()
            .cycle()
            .take(self.data.len())
            .collect()
    }

    /// The current mask as a string of [`hit_or_miss`] characters.
    pub fn render(&self) -> String { self.mask.iter().map(|&m| hit_or_miss(m)).collect() }
}

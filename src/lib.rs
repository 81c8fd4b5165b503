//! # tagrange
//!
//! Tagged intervals packed into single `u64` words, and a batched filter that selects the
//! ones with a given tag lying inside a query interval.
//!
//! # Usage
//!
//! Records are built with [`TagRange::make`] (or the checked
//! [`TagRange::make_safely`]), collected into a slice of raw words, and handed to
//! [`mask_for_tag_in_range`] along with a mask slice to fill.
//!
//! ```
//! use tagrange::prelude::*;
//!
//! let records: Vec<u64> = vec![
//!     TagRange::make(1, 10, 30, 0).raw(),
//!     TagRange::make(2, 12, 20, 0).raw(),
//!     TagRange::make(2, 25, 35, 0).raw(),
//!     TagRange::make(2, 10, 30, 0).raw(),
//! ];
//! let mut masks = vec![MISS; records.len()];
//!
//! mask_for_tag_in_range(&records, &mut masks, 2, 10, 30).unwrap();
//!
//! assert_eq!(masks, [MISS, HIT, MISS, HIT]);
//! ```
//!
//! # The encoding
//!
//! Fields, from the least significant bit up:
//!
//! | field     | bits | range                |
//! |-----------|------|----------------------|
//! | `tag`     |   16 | `0..=0xffff`         |
//! | `start`   |   21 | `0..=0x1f_ffff`      |
//! | `end`     |   21 | `0..=0x1f_ffff`      |
//! | `scratch` |    6 | `0..=0x3f`           |
//!
//! The record's interval is `[start, end)`. `scratch` belongs to the caller.
//!
//! The layout is only an in-memory representation; it is not meant to be persisted or
//! sent anywhere.
//!
//! ## Truncation
//!
//! [`TagRange::make`], [`BitField::encode`] and [`BitField::write`] silently drop bits
//! above a field's width. This keeps them branch-free for hot loops where inputs are
//! known to fit. Validating them is the caller's job; the `checked_*` and `*_safely`
//! variants do it for you and report a [`FieldRangeError`] naming the field.
//!
//! ```
//! use tagrange::prelude::*;
//!
//! let truncated = TagRange::make(0, 0, (1 << 21) + 5, 0);
//! assert_eq!(truncated.end(), 5);
//!
//! match TagRange::make_safely(0, 0, (1 << 21) + 5, 0) {
//!     Err(e) => assert_eq!(e.field, "end"),
//!     Ok(_) => panic!("should not fit"),
//! }
//! ```
//!
//! # The filter
//!
//! [`mask_for_tag_in_range`] works in batches of four records, decoding all four lanes
//! at once through [`U64x4`] and combining per-lane comparisons with bitwise `&`. There
//! is no tail handling: the record count has to be a non-zero multiple of [`BATCH`].
//!
//! Containment is checked as `start >= q_start && end <= q_end`. That is, the query is
//! treated as a closed interval, so a child whose exclusive end equals the parent's end
//! still matches.
//!
//! Shape problems (bad lengths, a target tag that cannot exist, inverted bounds) come
//! back as a [`ShapeError`] before anything is written.
//!
//! Batches are independent of one another: filtering two batch-aligned halves of a
//! slice separately gives the same masks as filtering it whole.
//!
//! # Bitsets
//!
//! [`compress_mask_to_bitset`] squeezes a mask slice down to one bit per record.
//!
//! ```
//! use tagrange::prelude::*;
//!
//! let bits = compress_mask_to_bitset(&[MISS, HIT, MISS, HIT]);
//! assert!(bitset_contains(&bits, 1));
//! assert!(!bitset_contains(&bits, 2));
//! ```

#![warn(
//    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

pub mod bitfield;
pub mod errors;
pub mod filter;
pub mod lanes;
pub mod prelude;
pub mod sample;
pub mod tag_range;
pub mod util;

pub use bitfield::BitField;
pub use errors::{FieldRangeError, ShapeError};
pub use filter::{
    bitset_contains, compress_mask_to_bitset, mask_for_tag_in_range, mask_ranges, BATCH, HIT,
    MISS,
};
pub use lanes::{LaneField, U64x4, LANES};
pub use tag_range::{Field, TagRange, TagRangeLayout};

//! # Range-containment filter
//!
//! [`mask_for_tag_in_range`] scans packed [`TagRange`] words four at a time and marks
//! every record whose tag equals the target and whose interval lies inside the query
//! bounds. The query is closed on both ends: a record matches when
//! `start >= q_start && end <= q_end`, even though records themselves are half-open.
//!
//! # Example
//!
//! ```
//! use tagrange::prelude::*;
//!
//! let records: Vec<u64> = vec![
//!     TagRange::new(1, 10, 30).raw(), // wrong tag
//!     TagRange::new(2, 12, 20).raw(), // inside
//!     TagRange::new(2, 25, 35).raw(), // overhangs the end
//!     TagRange::new(2, 10, 30).raw(), // exactly the query
//! ];
//! let mut masks = vec![0; records.len()];
//!
//! mask_for_tag_in_range(&records, &mut masks, 2, 10, 30).unwrap();
//! assert_eq!(masks, [MISS, HIT, MISS, HIT]);
//!
//! let bits = compress_mask_to_bitset(&masks);
//! assert_eq!(bits, [0b1010]);
//! ```

use crate::{
    errors::ShapeError,
    lanes::{U64x4, LANES},
    tag_range::TagRange,
};
use log::debug;

/// Records per batch.
pub const BATCH: usize = LANES;

/// Sentinel written for a matching record.
pub const HIT: u64 = u64::max_value();
/// Sentinel written for a non-matching record.
pub const MISS: u64 = 0;

/// Checks the inputs of [`mask_for_tag_in_range`] without touching them.
pub fn check_shape(
    records: usize,
    masks: usize,
    target_tag: u64,
    q_start: u64,
    q_end: u64,
) -> Result<(), ShapeError> {
    let tag_max = TagRange::LAYOUT.tag.field_mask();
    if records < BATCH {
        Err(ShapeError::TooFewRecords {
            len: records,
            batch: BATCH,
        })
    } else if masks < records {
        Err(ShapeError::MaskTooShort { records, masks })
    } else if records % BATCH != 0 {
        Err(ShapeError::NotBatchAligned {
            len: records,
            batch: BATCH,
        })
    } else if target_tag > tag_max {
        Err(ShapeError::TagOutOfRange {
            tag: target_tag,
            max: tag_max,
        })
    } else if q_start > q_end {
        Err(ShapeError::InvertedQuery {
            start: q_start,
            end: q_end,
        })
    } else {
        Ok(())
    }
}

/// Writes [`HIT`] into `masks[i]` when `records[i]` has tag `target_tag` and lies within
/// `[q_start, q_end]`, and [`MISS`] otherwise.
///
/// # Arguments
///
/// * `records: &[u64]` - Packed [`TagRange`] words. The length must be a non-zero multiple
///   of [`BATCH`].
/// * `masks: &mut [u64]` - Output, at least as long as `records`. Only the first
///   `records.len()` positions are written, and none are read.
/// * `target_tag: u64` - Must fit the tag field.
/// * `q_start: u64`, `q_end: u64` - Inclusive query bounds, `q_start <= q_end`.
///
/// If any precondition fails an error is returned and `masks` is left untouched.
pub fn mask_for_tag_in_range(
    records: &[u64],
    masks: &mut [u64],
    target_tag: u64,
    q_start: u64,
    q_end: u64,
) -> Result<(), ShapeError> {
    scan(records, masks, target_tag, q_start, q_end)
}

/// Same as [`mask_for_tag_in_range`] over [`TagRange`] values instead of raw words.
pub fn mask_ranges(
    records: &[TagRange],
    masks: &mut [u64],
    target_tag: u64,
    q_start: u64,
    q_end: u64,
) -> Result<(), ShapeError> {
    scan(records, masks, target_tag, q_start, q_end)
}

fn scan<R: Copy + Into<u64>>(
    records: &[R],
    masks: &mut [u64],
    target_tag: u64,
    q_start: u64,
    q_end: u64,
) -> Result<(), ShapeError> {
    if let Err(e) = check_shape(records.len(), masks.len(), target_tag, q_start, q_end) {
        debug!("rejected tag range filter call: {}", e);
        return Err(e);
    }

    let tag_v = U64x4::splat(target_tag);
    let start_v = U64x4::splat(q_start);
    let end_v = U64x4::splat(q_end);

    for (batch, out) in records
        .chunks_exact(BATCH)
        .zip(masks[..records.len()].chunks_exact_mut(BATCH))
    {
        let v = U64x4::new([
            batch[0].into(),
            batch[1].into(),
            batch[2].into(),
            batch[3].into(),
        ]);

        let m_tag = TagRange::tags_x4(v).lanes_eq(tag_v);
        let m_start = TagRange::starts_x4(v).lanes_ge(start_v);
        let m_end = TagRange::ends_x4(v).lanes_le(end_v);

        (m_tag & m_start & m_end).store(out);
    }

    Ok(())
}

/// Packs a slice of sentinels into a bitset, one bit per entry, least significant bit
/// first. Any non-zero entry counts as a hit. The last word is padded with zeroes.
///
/// # Example
///
/// ```
/// use tagrange::filter::*;
///
/// let masks = [HIT, MISS, HIT];
/// assert_eq!(compress_mask_to_bitset(&masks), [0b101]);
/// assert!(compress_mask_to_bitset(&[]).is_empty());
/// ```
pub fn compress_mask_to_bitset(masks: &[u64]) -> Vec<u64> {
    masks
        .chunks(64)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u64, |acc, (i, &m)| acc | (((m != 0) as u64) << i))
        })
        .collect()
}

/// Whether bit `i` of a bitset made by [`compress_mask_to_bitset`] is set. Out-of-range
/// indices read as unset.
pub fn bitset_contains(bits: &[u64], i: usize) -> bool {
    bits.get(i / 64)
        .map_or(false, |word| (word >> (i % 64)) & 1 == 1)
}

//! # Tagged ranges
//!
//! A [`TagRange`] packs a tag and a half-open interval `[start, end)` into one `u64`.
//! From the least significant bit upward:
//!
//! | field     | bits | shift |
//! |-----------|------|-------|
//! | `tag`     |   16 |     0 |
//! | `start`   |   21 |    16 |
//! | `end`     |   21 |    37 |
//! | `scratch` |    6 |    58 |
//!
//! `scratch` is reserved for the caller; nothing in this crate interprets it. Nothing
//! checks that `start <= end` either.
//!
//! # Example
//!
//! ```
//! use tagrange::prelude::*;
//!
//! let r = TagRange::make(0xbeef, 12_345, 12_355, 17);
//! assert_eq!(r.tag(), 0xbeef);
//! assert_eq!(r.start(), 12_345);
//! assert_eq!(r.end(), 12_355);
//! assert_eq!(r.scratch(), 17);
//!
//! // `make` truncates, `make_safely` refuses
//! assert_eq!(TagRange::make(0x1_0001, 0, 0, 0).tag(), 1);
//! let err = TagRange::make_safely(0x1_0001, 0, 0, 0).unwrap_err();
//! assert_eq!(err.field, "tag");
//! ```

use crate::{
    bitfield::BitField,
    errors::FieldRangeError,
    lanes::{LaneField, U64x4},
};
use std::fmt;

pub const TAG_BITS: u32 = 16;
pub const START_BITS: u32 = 21;
pub const END_BITS: u32 = 21;
pub const SCRATCH_BITS: u32 = 6;

const TAG: BitField = BitField::new("tag", TAG_BITS, 0);
const START: BitField = BitField::new("start", START_BITS, TAG.end());
const END: BitField = BitField::new("end", END_BITS, START.end());
const SCRATCH: BitField = BitField::new("scratch", SCRATCH_BITS, END.end());

// the four fields fill the word exactly
const _: () = assert!(SCRATCH.end() == 64);

const TAG_X4: LaneField = LaneField::new(TAG);
const START_X4: LaneField = LaneField::new(START);
const END_X4: LaneField = LaneField::new(END);
const SCRATCH_X4: LaneField = LaneField::new(SCRATCH);

/// The fields of a [`TagRange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Tag,
    Start,
    End,
    Scratch,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Tag, Field::Start, Field::End, Field::Scratch];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Geometry of a [`TagRange`] word. There is exactly one, [`TagRange::LAYOUT`].
pub struct TagRangeLayout {
    pub tag: BitField,
    pub start: BitField,
    pub end: BitField,
    pub scratch: BitField,
}

impl TagRangeLayout {
    /// Looks up the descriptor for `field`.
    pub const fn field(&self, field: Field) -> BitField {
        match field {
            Field::Tag => self.tag,
            Field::Start => self.start,
            Field::End => self.end,
            Field::Scratch => self.scratch,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
/// A tag plus a half-open interval, packed into a `u64`.
pub struct TagRange(u64);

impl TagRange {
    /// The field layout shared by every `TagRange`.
    pub const LAYOUT: TagRangeLayout = TagRangeLayout {
        tag: TAG,
        start: START,
        end: END,
        scratch: SCRATCH,
    };

    /// Wraps an already packed word.
    pub const fn from_raw(raw: u64) -> Self { TagRange(raw) }

    /// The packed word.
    pub const fn raw(self) -> u64 { self.0 }

    /// Packs the four fields, discarding any bits above each field's width.
    ///
    /// This is the hot-path constructor: it never branches and never fails, so callers
    /// must already know their inputs fit. Use [`make_safely`](TagRange::make_safely)
    /// otherwise.
    ///
    /// # Arguments
    ///
    /// * `tag: u64` - Up to 16 bits.
    /// * `start: u64` - Inclusive lower bound, up to 21 bits.
    /// * `end: u64` - Exclusive upper bound, up to 21 bits.
    /// * `scratch: u64` - Caller-defined, up to 6 bits.
    #[inline]
    pub const fn make(tag: u64, start: u64, end: u64, scratch: u64) -> Self {
        TagRange(
            TAG.encode(tag) | START.encode(start) | END.encode(end) | SCRATCH.encode(scratch),
        )
    }

    /// Packs the four fields, failing on the first one (in layout order) that does not fit.
    ///
    /// On success the result is bit-for-bit the same as [`make`](TagRange::make).
    ///
    /// # Example
    ///
    /// ```
    /// use tagrange::prelude::*;
    ///
    /// assert_eq!(
    ///     TagRange::make_safely(2, 10, 30, 0).unwrap(),
    ///     TagRange::make(2, 10, 30, 0)
    /// );
    ///
    /// let err = TagRange::make_safely(2, 10, 1 << 21, 0).unwrap_err();
    /// assert_eq!(err.field, "end");
    /// ```
    pub fn make_safely(
        tag: u64,
        start: u64,
        end: u64,
        scratch: u64,
    ) -> Result<Self, FieldRangeError> {
        Ok(TagRange(
            TAG.checked_encode(tag)?
                | START.checked_encode(start)?
                | END.checked_encode(end)?
                | SCRATCH.checked_encode(scratch)?,
        ))
    }

    /// [`make`](TagRange::make) with an empty scratch field.
    pub const fn new(tag: u64, start: u64, end: u64) -> Self { Self::make(tag, start, end, 0) }

    /// [`make_safely`](TagRange::make_safely) with an empty scratch field.
    pub fn new_safely(tag: u64, start: u64, end: u64) -> Result<Self, FieldRangeError> {
        Self::make_safely(tag, start, end, 0)
    }

    #[inline(always)]
    pub const fn tag(self) -> u64 { TAG.read(self.0) }

    #[inline(always)]
    pub const fn start(self) -> u64 { START.read(self.0) }

    #[inline(always)]
    pub const fn end(self) -> u64 { END.read(self.0) }

    #[inline(always)]
    pub const fn scratch(self) -> u64 { SCRATCH.read(self.0) }

    /// Reads any field by name.
    pub const fn get(self, field: Field) -> u64 { Self::LAYOUT.field(field).read(self.0) }

    /// Returns a copy with `field` replaced, truncating `value` to the field width.
    pub const fn with(self, field: Field, value: u64) -> Self {
        TagRange(Self::LAYOUT.field(field).write(self.0, value))
    }

    /// Returns a copy with `field` replaced, or fails if `value` does not fit.
    pub fn try_with(self, field: Field, value: u64) -> Result<Self, FieldRangeError> {
        Ok(TagRange(Self::LAYOUT.field(field).checked_write(self.0, value)?))
    }

    /// Returns a copy with the scratch bits replaced.
    pub const fn with_scratch(self, scratch: u64) -> Self { self.with(Field::Scratch, scratch) }

    /// The tags of four packed records.
    #[inline(always)]
    pub fn tags_x4(v: U64x4) -> U64x4 { TAG_X4.read(v) }

    #[inline(always)]
    pub fn starts_x4(v: U64x4) -> U64x4 { START_X4.read(v) }

    #[inline(always)]
    pub fn ends_x4(v: U64x4) -> U64x4 { END_X4.read(v) }

    #[inline(always)]
    pub fn scratches_x4(v: U64x4) -> U64x4 { SCRATCH_X4.read(v) }

    /// Replaces the tags of four packed records. Other fields are preserved.
    #[inline(always)]
    pub fn set_tags_x4(v: U64x4, tags: U64x4) -> U64x4 { TAG_X4.write(v, tags) }

    /// Applies `f` to the starts of four packed records. Results are truncated to the
    /// field width.
    #[inline(always)]
    pub fn update_starts_x4<F: FnOnce(U64x4) -> U64x4>(v: U64x4, f: F) -> U64x4 {
        START_X4.update(v, f)
    }

    /// The lane-wise codec for `field`, for batch mutations not covered above.
    pub const fn lanes(field: Field) -> LaneField { LaneField::new(Self::LAYOUT.field(field)) }
}

impl From<u64> for TagRange {
    fn from(raw: u64) -> Self { TagRange(raw) }
}

impl From<TagRange> for u64 {
    fn from(r: TagRange) -> u64 { r.0 }
}

impl fmt::Debug for TagRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TagRange")
            .field("tag", &self.tag())
            .field("start", &self.start())
            .field("end", &self.end())
            .field("scratch", &self.scratch())
            .finish()
    }
}

impl fmt::Display for TagRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}[{}, {})", self.tag(), self.start(), self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG_V: u64 = 0xbeef;
    const START_V: u64 = 12_345;
    const END_V: u64 = 12_355;
    const SCRATCH_V: u64 = 17;

    fn sample() -> TagRange { TagRange::make_safely(TAG_V, START_V, END_V, SCRATCH_V).unwrap() }

    #[test]
    fn geometry() {
        let l = TagRange::LAYOUT;
        assert_eq!((l.tag.width(), l.tag.shift()), (16, 0));
        assert_eq!((l.start.width(), l.start.shift()), (21, 16));
        assert_eq!((l.end.width(), l.end.shift()), (21, 37));
        assert_eq!((l.scratch.width(), l.scratch.shift()), (6, 58));
        let all = l.tag.placed_mask()
            | l.start.placed_mask()
            | l.end.placed_mask()
            | l.scratch.placed_mask();
        assert_eq!(all, u64::max_value());
    }

    #[test]
    fn make_safely_matches_manual_pack() {
        let manual = (TAG_V & 0xffff)
            | ((START_V & 0x1f_ffff) << 16)
            | ((END_V & 0x1f_ffff) << 37)
            | ((SCRATCH_V & 0x3f) << 58);
        assert_eq!(sample().raw(), manual);
        assert_eq!(TagRange::make(TAG_V, START_V, END_V, SCRATCH_V), sample());
    }

    #[test]
    fn scalar_accessors() {
        let r = sample();
        assert_eq!(r.tag(), TAG_V);
        assert_eq!(r.start(), START_V);
        assert_eq!(r.end(), END_V);
        assert_eq!(r.scratch(), SCRATCH_V);
        assert!(r.start() <= r.end());
        for f in Field::ALL.iter() {
            assert_eq!(r.get(*f), TagRange::LAYOUT.field(*f).read(r.raw()));
        }
    }

    #[test]
    fn make_safely_names_field() {
        let cases = [
            ((1 << 16, 0, 0, 0), "tag", 1 << 16),
            ((0, 1 << 21, 0, 0), "start", 1 << 21),
            ((0, 0, 1 << 21, 0), "end", 1 << 21),
            ((0, 0, 0, 64), "scratch", 64),
        ];
        for ((t, s, e, x), name, value) in cases.iter() {
            let err = TagRange::make_safely(*t, *s, *e, *x).unwrap_err();
            assert_eq!(err.field, *name);
            assert_eq!(err.value, *value);
        }
    }

    #[test]
    fn make_truncates() {
        let r = TagRange::make(0x1_beef, 0x20_0005, 0x20_0007, 0x41);
        assert_eq!(r, TagRange::make(0xbeef, 5, 7, 1));
    }

    #[test]
    fn default_scratch_is_zero() {
        assert_eq!(TagRange::new(2, 10, 30).scratch(), 0);
        assert_eq!(TagRange::new(2, 10, 30), TagRange::make(2, 10, 30, 0));
        assert!(TagRange::new_safely(2, 10, 1 << 21).is_err());
    }

    #[test]
    fn with_scratch_keeps_other_fields() {
        let r = sample().with_scratch(63);
        assert_eq!(r.scratch(), 63);
        assert_eq!((r.tag(), r.start(), r.end()), (TAG_V, START_V, END_V));
        assert!(sample().try_with(Field::Scratch, 64).is_err());
    }

    #[test]
    fn lane_extractors() {
        let v = U64x4::splat(sample().raw());
        assert_eq!(TagRange::tags_x4(v), U64x4::splat(TAG_V));
        assert_eq!(TagRange::starts_x4(v), U64x4::splat(START_V));
        assert_eq!(TagRange::ends_x4(v), U64x4::splat(END_V));
        assert_eq!(TagRange::scratches_x4(v), U64x4::splat(SCRATCH_V));
    }

    #[test]
    fn set_tags_preserves_ranges() {
        let v = U64x4::splat(sample().raw());
        let new_tags = U64x4::new([1, 2, 3, 4]);
        let v2 = TagRange::set_tags_x4(v, new_tags);
        assert_eq!(TagRange::tags_x4(v2), new_tags);
        assert_eq!(TagRange::starts_x4(v2), U64x4::splat(START_V));
        assert_eq!(TagRange::ends_x4(v2), U64x4::splat(END_V));
        assert_eq!(TagRange::scratches_x4(v2), U64x4::splat(SCRATCH_V));

        let v3 = TagRange::update_starts_x4(v2, |s| s.wrapping_add(U64x4::splat(5)));
        assert_eq!(TagRange::starts_x4(v3), U64x4::splat(START_V + 5));
        assert_eq!(TagRange::tags_x4(v3), new_tags);
    }

    #[test]
    fn generic_lane_mutation() {
        let v = U64x4::splat(sample().raw());
        let v2 = TagRange::lanes(Field::End).write_scalar(v, 99);
        assert_eq!(TagRange::ends_x4(v2), U64x4::splat(99));
        assert_eq!(TagRange::starts_x4(v2), U64x4::splat(START_V));
    }

    #[test]
    fn display() {
        assert_eq!(TagRange::new(2, 10, 30).to_string(), "#2[10, 30)");
    }
}

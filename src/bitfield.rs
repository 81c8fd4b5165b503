//! # Scalar bit-field codec
//!
//! A [`BitField`] describes a contiguous run of bits inside a `u64`. It knows nothing about
//! what the bits mean; layouts such as [`TagRange`](crate::tag_range::TagRange) compose
//! several of them into one word.
//!
//! # Example
//!
//! ```
//! use tagrange::bitfield::BitField;
//!
//! const BYTE2: BitField = BitField::new("byte2", 8, 16);
//!
//! let w = BYTE2.write(0, 0xab);
//! assert_eq!(w, 0x00ab_0000);
//! assert_eq!(BYTE2.read(w), 0xab);
//!
//! // plain encoders drop high bits
//! assert_eq!(BYTE2.encode(0x1ab), BYTE2.encode(0xab));
//!
//! // checked encoders refuse them
//! assert!(BYTE2.checked_encode(0x1ab).is_err());
//! ```
//!
//! The descriptor does not check that `shift + width <= 64`; whoever lays out fields in a
//! word is responsible for that.

use crate::{errors::FieldRangeError, util::low_mask};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A named, fixed-width, fixed-position field inside a 64-bit word.
pub struct BitField {
    name: &'static str,
    width: u32,
    shift: u32,
    field_mask: u64,
    placed_mask: u64,
}

impl BitField {
    /// Creates a field descriptor.
    ///
    /// # Arguments
    ///
    /// * `name: &'static str` - Used in error reports.
    /// * `width: u32` - Number of bits in the field.
    /// * `shift: u32` - Offset of the field's lowest bit from bit 0. Must be below 64.
    pub const fn new(name: &'static str, width: u32, shift: u32) -> Self {
        let field_mask = low_mask(width);
        BitField {
            name,
            width,
            shift,
            field_mask,
            placed_mask: field_mask << shift,
        }
    }

    pub const fn name(&self) -> &'static str { self.name }

    pub const fn width(&self) -> u32 { self.width }

    pub const fn shift(&self) -> u32 { self.shift }

    /// The unshifted mask, `2^width - 1`. Also the largest value the field can hold.
    pub const fn field_mask(&self) -> u64 { self.field_mask }

    /// The field mask moved into position.
    pub const fn placed_mask(&self) -> u64 { self.placed_mask }

    /// The shift of the next field up, for stacking fields.
    pub const fn end(&self) -> u32 { self.shift + self.width }

    /// Whether `value` fits without truncation.
    #[inline(always)]
    pub const fn fits(&self, value: u64) -> bool { value <= self.field_mask }

    /// Reads the unshifted value of the field out of `word`.
    #[inline(always)]
    pub const fn read(&self, word: u64) -> u64 { (word >> self.shift) & self.field_mask }

    /// Places `value` into position. Bits above the field width are discarded; callers on
    /// hot paths are responsible for passing values that fit.
    #[inline(always)]
    pub const fn encode(&self, value: u64) -> u64 { (value & self.field_mask) << self.shift }

    /// Places `value` into position, or fails if it does not fit.
    pub fn checked_encode(&self, value: u64) -> Result<u64, FieldRangeError> {
        if self.fits(value) {
            Ok(self.encode(value))
        } else {
            Err(FieldRangeError::new(self.name, value, self.field_mask))
        }
    }

    /// Zeroes the field's bits in `word`.
    #[inline(always)]
    pub const fn clear(&self, word: u64) -> u64 { word & !self.placed_mask }

    /// Replaces the field in `word` with `value`, leaving every other bit alone. Truncates
    /// like [`encode`](BitField::encode).
    #[inline(always)]
    pub const fn write(&self, word: u64, value: u64) -> u64 {
        self.clear(word) | self.encode(value)
    }

    /// Replaces the field in `word` with `value`, or fails without touching anything if it
    /// does not fit.
    pub fn checked_write(&self, word: u64, value: u64) -> Result<u64, FieldRangeError> {
        Ok(self.clear(word) | self.checked_encode(value)?)
    }

    /// Read-modify-write: applies `f` to the unshifted value and writes the result back.
    #[inline(always)]
    pub fn update<F: FnOnce(u64) -> u64>(&self, word: u64, f: F) -> u64 {
        self.write(word, f(self.read(word)))
    }
}

//! # Lane-wise codec
//!
//! [`U64x4`] is a fixed four-lane vector of words, and [`LaneField`] runs the
//! [`BitField`] codec over all four lanes at once. Each operation is written as uniform,
//! branch-free per-lane arithmetic over an aligned `[u64; 4]`, which the compiler lowers
//! to vector instructions where the target has them.
//!
//! Applying a lane-wise operation is observably the same as applying the scalar one to
//! each lane in turn.
//!
//! # Example
//!
//! ```
//! use tagrange::{bitfield::BitField, lanes::*};
//!
//! const F: BitField = BitField::new("f", 8, 16);
//! let lf = LaneField::new(F);
//!
//! let v = U64x4::new([F.encode(1), F.encode(2), F.encode(3), F.encode(4)]);
//! assert_eq!(lf.read(v), U64x4::new([1, 2, 3, 4]));
//!
//! let bumped = lf.update(v, |x| x.wrapping_add(U64x4::splat(10)));
//! assert_eq!(lf.read(bumped).to_array(), [11, 12, 13, 14]);
//! ```

use crate::{bitfield::BitField, util::sentinel};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Number of lanes processed together.
pub const LANES: usize = 4;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(32))]
/// Four `u64` lanes.
pub struct U64x4([u64; LANES]);

macro_rules! lanewise {
    ($a:expr, $b:expr, $op:expr) => {{
        let (a, b) = ($a.0, $b.0);
        let op = $op;
        U64x4([op(a[0], b[0]), op(a[1], b[1]), op(a[2], b[2]), op(a[3], b[3])])
    }};
}

macro_rules! lanewise_unary {
    ($a:expr, $op:expr) => {{
        let a = $a.0;
        let op = $op;
        U64x4([op(a[0]), op(a[1]), op(a[2]), op(a[3])])
    }};
}

impl U64x4 {
    #[inline(always)]
    pub const fn new(lanes: [u64; LANES]) -> Self { U64x4(lanes) }

    /// Broadcasts `x` into every lane.
    #[inline(always)]
    pub const fn splat(x: u64) -> Self { U64x4([x; LANES]) }

    /// Loads the first four words of `words`.
    ///
    /// # Panics
    ///
    /// Panics if `words` holds fewer than four words.
    #[inline(always)]
    pub fn from_slice(words: &[u64]) -> Self {
        U64x4([words[0], words[1], words[2], words[3]])
    }

    /// Stores the lanes into the first four positions of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than four words.
    #[inline(always)]
    pub fn store(self, out: &mut [u64]) { out[..LANES].copy_from_slice(&self.0) }

    #[inline(always)]
    pub const fn to_array(self) -> [u64; LANES] { self.0 }

    #[inline(always)]
    pub fn wrapping_add(self, rhs: Self) -> Self { lanewise!(self, rhs, u64::wrapping_add) }

    #[inline(always)]
    pub fn map<F: Fn(u64) -> u64>(self, f: F) -> Self { lanewise_unary!(self, f) }

    /// All-ones in each lane where `self == rhs`, all-zero elsewhere.
    #[inline(always)]
    pub fn lanes_eq(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: u64, b: u64| sentinel(a == b))
    }

    /// All-ones in each lane where `self >= rhs`, all-zero elsewhere.
    #[inline(always)]
    pub fn lanes_ge(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: u64, b: u64| sentinel(a >= b))
    }

    /// All-ones in each lane where `self <= rhs`, all-zero elsewhere.
    #[inline(always)]
    pub fn lanes_le(self, rhs: Self) -> Self {
        lanewise!(self, rhs, |a: u64, b: u64| sentinel(a <= b))
    }
}

impl From<[u64; LANES]> for U64x4 {
    fn from(lanes: [u64; LANES]) -> Self { U64x4(lanes) }
}

impl From<U64x4> for [u64; LANES] {
    fn from(v: U64x4) -> Self { v.0 }
}

impl BitAnd for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn bitand(self, rhs: U64x4) -> U64x4 { lanewise!(self, rhs, |a: u64, b: u64| a & b) }
}

impl BitOr for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn bitor(self, rhs: U64x4) -> U64x4 { lanewise!(self, rhs, |a: u64, b: u64| a | b) }
}

impl BitXor for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn bitxor(self, rhs: U64x4) -> U64x4 { lanewise!(self, rhs, |a: u64, b: u64| a ^ b) }
}

impl Not for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn not(self) -> U64x4 { lanewise_unary!(self, |a: u64| !a) }
}

impl Shl<u32> for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn shl(self, rhs: u32) -> U64x4 { lanewise_unary!(self, |a: u64| a << rhs) }
}

impl Shr<u32> for U64x4 {
    type Output = U64x4;
    #[inline(always)]
    fn shr(self, rhs: u32) -> U64x4 { lanewise_unary!(self, |a: u64| a >> rhs) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A [`BitField`] applied to four words at once.
pub struct LaneField {
    scalar: BitField,
}

impl LaneField {
    pub const fn new(scalar: BitField) -> Self { LaneField { scalar } }

    /// The scalar descriptor this wraps.
    pub const fn scalar(&self) -> BitField { self.scalar }

    #[inline(always)]
    pub fn read(&self, v: U64x4) -> U64x4 {
        (v >> self.scalar.shift()) & U64x4::splat(self.scalar.field_mask())
    }

    /// Truncates each lane to the field width and moves it into position.
    #[inline(always)]
    pub fn encode(&self, x: U64x4) -> U64x4 {
        (x & U64x4::splat(self.scalar.field_mask())) << self.scalar.shift()
    }

    #[inline(always)]
    pub fn clear(&self, v: U64x4) -> U64x4 { v & !U64x4::splat(self.scalar.placed_mask()) }

    #[inline(always)]
    pub fn write(&self, v: U64x4, x: U64x4) -> U64x4 { self.clear(v) | self.encode(x) }

    /// Writes the same value into the field of every lane.
    #[inline(always)]
    pub fn write_scalar(&self, v: U64x4, x: u64) -> U64x4 { self.write(v, U64x4::splat(x)) }

    /// Lane-wise read-modify-write; `f` sees and returns unshifted values.
    #[inline(always)]
    pub fn update<F: FnOnce(U64x4) -> U64x4>(&self, v: U64x4, f: F) -> U64x4 {
        self.write(v, f(self.read(v)))
    }
}

impl From<BitField> for LaneField {
    fn from(scalar: BitField) -> Self { LaneField::new(scalar) }
}

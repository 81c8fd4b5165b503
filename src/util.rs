/// Produces the unshifted mask covering the low `width` bits of a word.
///
/// # Arguments
///
/// * `width: u32` - The number of bits in the field. Widths of 64 or more yield a full
///   mask.
///
/// # Example
///
/// ```
/// use tagrange::util::low_mask;
///
/// assert_eq!(low_mask(0), 0);
/// assert_eq!(low_mask(16), 0xffff);
/// assert_eq!(low_mask(64), u64::max_value());
/// ```
pub const fn low_mask(width: u32) -> u64 {
    if width == 0 {
        0
    } else if width >= 64 {
        u64::max_value()
    } else {
        u64::max_value() >> (64 - width)
    }
}

/// Converts a boolean into an all-ones (`true`) or all-zero (`false`) sentinel without
/// branching.
///
/// # Example
///
/// ```
/// use tagrange::util::sentinel;
///
/// assert_eq!(sentinel(true), u64::max_value());
/// assert_eq!(sentinel(false), 0);
/// ```
#[inline(always)]
pub const fn sentinel(b: bool) -> u64 { 0u64.wrapping_sub(b as u64) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_mask_widths() {
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(6), 0b11_1111);
        assert_eq!(low_mask(21), (1 << 21) - 1);
        assert_eq!(low_mask(63), u64::max_value() >> 1);
        assert_eq!(low_mask(100), u64::max_value());
    }

    #[test]
    fn sentinels_are_all_or_nothing() {
        assert_eq!(sentinel(true).count_ones(), 64);
        assert_eq!(sentinel(false).count_ones(), 0);
    }
}

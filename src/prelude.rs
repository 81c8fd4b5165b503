pub use crate::{
    bitfield::BitField,
    errors::{FieldRangeError, ShapeError},
    filter::{
        bitset_contains, compress_mask_to_bitset, mask_for_tag_in_range, mask_ranges, BATCH,
        HIT, MISS,
    },
    lanes::{LaneField, U64x4, LANES},
    tag_range::{Field, TagRange},
};

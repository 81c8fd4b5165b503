use proptest::prelude::*;
use tagrange::{filter::BATCH, BitField, Field, TagRange};

/// arbitrary field descriptor that fits in a word, for use with proptest
pub fn arb_bitfield() -> impl Strategy<Value = BitField> {
    (1u32..=64).prop_flat_map(|width| {
        (0..=64 - width).prop_map(move |shift| BitField::new("arb", width, shift))
    })
}

/// arbitrary value that fits `field`
pub fn arb_fitting(field: BitField) -> impl Strategy<Value = u64> {
    0..=field.field_mask()
}

/// arbitrary value that does not fit `field`; the field must be narrower than a word
pub fn arb_overflowing(field: BitField) -> impl Strategy<Value = u64> {
    (field.field_mask() + 1)..=u64::max_value()
}

/// arbitrary in-range value for one field of a `TagRange`
pub fn arb_field_value(field: Field) -> impl Strategy<Value = u64> {
    arb_fitting(TagRange::LAYOUT.field(field))
}

/// arbitrary in-range `(tag, start, end, scratch)`
pub fn arb_parts() -> impl Strategy<Value = (u64, u64, u64, u64)> {
    (
        arb_field_value(Field::Tag),
        arb_field_value(Field::Start),
        arb_field_value(Field::End),
        arb_field_value(Field::Scratch),
    )
}

/// arbitrary `TagRange` with `start <= end`, tags drawn from `0..tags` so that
/// filters actually hit
pub fn arb_tag_range(tags: u64) -> impl Strategy<Value = TagRange> {
    let max = TagRange::LAYOUT.start.field_mask();
    (0..tags, 0..=max, 0..=max, arb_field_value(Field::Scratch)).prop_map(
        |(tag, a, b, scratch)| TagRange::make(tag, a.min(b), a.max(b), scratch),
    )
}

/// arbitrary record array holding between 1 and `max_batches` whole batches
pub fn arb_records(tags: u64, max_batches: usize) -> impl Strategy<Value = Vec<u64>> {
    (1..=max_batches).prop_flat_map(move |batches| {
        prop::collection::vec(arb_tag_range(tags).prop_map(TagRange::raw), batches * BATCH)
    })
}

/// arbitrary `(target_tag, q_start, q_end)` with `q_start <= q_end`
pub fn arb_query(tags: u64) -> impl Strategy<Value = (u64, u64, u64)> {
    let max = TagRange::LAYOUT.start.field_mask();
    (0..tags, 0..=max, 0..=max).prop_map(|(tag, a, b)| (tag, a.min(b), a.max(b)))
}

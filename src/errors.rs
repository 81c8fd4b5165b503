use failure::Fail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
#[fail(
    display = "field `{}` out of range: {} exceeds the maximum of {}",
    field, value, max
)]
/// An error encountered when a value does not fit the bit width of its field.
///
/// Only the checked encoders report this; the plain encoders truncate instead.
pub struct FieldRangeError {
    /// Name of the offending field.
    pub field: &'static str,
    /// The rejected, unshifted value.
    pub value: u64,
    /// The largest value the field can hold.
    pub max: u64,
}

impl FieldRangeError {
    /// Creates a new `FieldRangeError`
    ///
    /// # Arguments
    ///
    /// * `field: &'static str` - The name of the field that rejected the value.
    /// * `value: u64` - The rejected value.
    /// * `max: u64` - The field's capacity.
    pub fn new(field: &'static str, value: u64, max: u64) -> Self {
        FieldRangeError { field, value, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
/// An error encountered when the inputs to the range filter have the wrong shape.
///
/// Every variant is reported before any output is written.
pub enum ShapeError {
    /// Fewer records than a single batch.
    #[fail(
        display = "record array holds {} records, at least one batch of {} is required",
        len, batch
    )]
    TooFewRecords { len: usize, batch: usize },
    /// Record count is not a whole number of batches.
    #[fail(
        display = "record array length {} is not a multiple of the batch width {}",
        len, batch
    )]
    NotBatchAligned { len: usize, batch: usize },
    /// The output mask cannot hold one sentinel per record.
    #[fail(
        display = "mask array holds {} entries but {} records were supplied",
        masks, records
    )]
    MaskTooShort { records: usize, masks: usize },
    /// The target tag cannot be represented in the tag field.
    #[fail(display = "target tag {} exceeds the tag field maximum of {}", tag, max)]
    TagOutOfRange { tag: u64, max: u64 },
    /// The query bounds are inverted.
    #[fail(display = "invalid query range: start {} is after end {}", start, end)]
    InvertedQuery { start: u64, end: u64 },
}

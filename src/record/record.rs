use crate::buffer::PackBuffer;
use crate::error::LayoutError;
use crate::field::Field;
use crate::layout::FieldList;
use crate::types::FieldKind;
use std::cmp::Ordering;
use std::fmt;

// ─── Record ─────────────────────────────────────────────────────────────────

/// A fixed, ordered set of typed fields plus the buffer they pack into.
///
/// `F` is a tuple of field types; its layout is a compile-time property of
/// the tuple. Each record owns its buffer exclusively.
///
/// ```
/// use fieldpack::Record;
///
/// let mut flags = Record::<(bool, [bool; 4])>::new();
/// flags.set::<1>([true, false, true, false]);
/// let bytes = flags.pack().to_vec();
///
/// let mut copy = Record::<(bool, [bool; 4])>::new();
/// assert!(copy.unpack(&bytes));
/// assert_eq!(*copy.get::<1>(), [true, false, true, false]);
/// ```
#[derive(Clone)]
pub struct Record<F: FieldList> {
    pub(crate) fields: F,
    pub(crate) buffer: PackBuffer,
}

impl<F: FieldList> Record<F> {
    /// Build a record from explicit initial values and pack it.
    pub fn with_fields(fields: F) -> Self {
        const { assert!(F::TOTAL_SIZE <= u32::MAX as usize, "record layout exceeds u32 offsets") };

        let mut buffer = PackBuffer::allocate(F::TOTAL_SIZE);
        buffer.pack_all(&fields);
        Self { fields, buffer }
    }

    /// Build a record with every field at its `Field::default_value` and
    /// pack it. Works for any field list, including arrays longer than 32
    /// and nested records.
    pub fn new() -> Self {
        Self::with_fields(F::defaults())
    }

    /// Build a record from exactly `size()` packed bytes.
    ///
    /// The returned record's buffer is repacked from the decoded fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LayoutError> {
        if bytes.len() != F::TOTAL_SIZE {
            return Err(LayoutError::LengthMismatch {
                expected: F::TOTAL_SIZE,
                actual: bytes.len(),
            });
        }
        let mut record = Self::new();
        record.try_unpack(bytes)?;
        record.buffer.pack_all(&record.fields);
        Ok(record)
    }

    /// Total packed size. Same for every record of this field combination.
    #[inline]
    pub const fn size() -> usize {
        F::TOTAL_SIZE
    }

    /// Number of declared fields.
    #[inline]
    pub const fn arity() -> usize {
        F::ARITY
    }

    /// Per-field packed sizes, in declared order.
    #[inline]
    pub const fn sizes() -> &'static [usize] {
        F::SIZES
    }

    /// Offset of field `index` in the packed buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= arity()`.
    #[inline]
    pub fn offset(index: usize) -> usize {
        F::OFFSETS[index]
    }

    /// Consume the record and hand back its field values.
    #[inline]
    pub fn into_fields(self) -> F {
        self.fields
    }
}

impl<F: FieldList> Default for Record<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldList> fmt::Debug for Record<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("fields", &self.fields)
            .field("size", &F::TOTAL_SIZE)
            .finish()
    }
}

// ─── Nested Field ───────────────────────────────────────────────────────────

/// A record nested inside another record packs to the same bytes its own
/// `pack()` would produce.
///
/// The outer record writes the nested fields straight into its own region.
/// The nested record's buffer is not touched, so after the outer pack
/// `outer.get::<I>().view()` still shows whatever the nested record last
/// packed itself. Likewise unpacking the outer record only updates the
/// nested fields. Call `pack()` on the nested record to refresh its view.
impl<F: FieldList> Field for Record<F> {
    const KIND: FieldKind = FieldKind::NestedRecord;
    const SIZE: usize = F::TOTAL_SIZE;

    #[inline]
    fn default_value() -> Self {
        Self::new()
    }

    #[inline]
    fn pack_into(&self, out: &mut [u8]) {
        self.fields.pack_all_into(out);
    }

    #[inline]
    fn unpack_from(&mut self, bytes: &[u8]) -> bool {
        self.unpack(bytes)
    }
}

// ─── Comparison ─────────────────────────────────────────────────────────────
//
// Compares in-memory field tuples in declared order, never the packed bytes.

impl<F: FieldList + PartialEq> PartialEq for Record<F> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<F: FieldList + Eq> Eq for Record<F> {}

impl<F: FieldList + PartialOrd> PartialOrd for Record<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fields.partial_cmp(&other.fields)
    }
}

impl<F: FieldList + Ord> Ord for Record<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fields.cmp(&other.fields)
    }
}

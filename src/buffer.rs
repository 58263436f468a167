//! Owned packed buffer of a record.

use crate::layout::FieldList;
use tracing::trace;

/// Contiguous byte storage sized to a record's total layout size.
///
/// The buffer only reflects field values after a pack call covering them.
/// Mutating a field without packing leaves its region stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackBuffer {
    bytes: Box<[u8]>,
}

impl PackBuffer {
    /// Zeroed buffer of exactly `total_size` bytes.
    pub fn allocate(total_size: usize) -> Self {
        Self {
            bytes: vec![0u8; total_size].into_boxed_slice(),
        }
    }

    /// Repack every field in declared order.
    pub fn pack_all<F: FieldList>(&mut self, fields: &F) {
        debug_assert_eq!(self.bytes.len(), F::TOTAL_SIZE);
        for index in 0..F::ARITY {
            self.pack_region(fields, index);
        }
    }

    /// Repack only field `index`. Other regions are left as they are.
    pub fn pack_one<F: FieldList>(&mut self, fields: &F, index: usize) {
        self.pack_region(fields, index);
    }

    #[inline]
    fn pack_region<F: FieldList>(&mut self, fields: &F, index: usize) {
        let region = F::region(index);
        trace!(index, offset = region.start, size = region.len(), "pack field");
        fields.pack_field(index, &mut self.bytes[region]);
    }

    /// Current contents, without copying.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

use super::Record;
use crate::error::LayoutError;
use crate::layout::{FieldAt, FieldList};
use tracing::debug;

impl<F: FieldList> Record<F> {
    // ════════════════════════════════════════════════════════════════════════
    // Setters
    // ════════════════════════════════════════════════════════════════════════

    /// Overwrite field `I`. The buffer is NOT repacked; call `pack` or use
    /// `set_and_pack` to bring it in sync.
    #[inline]
    pub fn set<const I: usize>(&mut self, value: <F as FieldAt<I>>::Output)
    where
        F: FieldAt<I>,
    {
        *self.fields.field_mut() = value;
    }

    /// Overwrite field `I` and repack only its region.
    #[inline]
    pub fn set_and_pack<const I: usize>(&mut self, value: <F as FieldAt<I>>::Output)
    where
        F: FieldAt<I>,
    {
        self.set::<I>(value);
        self.buffer.pack_one(&self.fields, I);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Pack / unpack
    // ════════════════════════════════════════════════════════════════════════

    /// Repack every field and return the buffer.
    #[inline]
    pub fn pack(&mut self) -> &[u8] {
        self.buffer.pack_all(&self.fields);
        self.buffer.view()
    }

    /// Read every field from `bytes` in declared order.
    ///
    /// Returns `false` on the first rejected field. Fields before it have
    /// already been overwritten and are not restored: treat the record as
    /// indeterminate after a `false`.
    #[inline]
    pub fn unpack(&mut self, bytes: &[u8]) -> bool {
        self.try_unpack(bytes).is_ok()
    }

    /// Like [`Record::unpack`], but reports why it failed.
    ///
    /// Only field storage is updated. The owned buffer changes on the next
    /// pack. Bytes past `size()` are ignored.
    pub fn try_unpack(&mut self, bytes: &[u8]) -> Result<(), LayoutError> {
        self.fields.unpack_all_from(bytes).inspect_err(|err| match err {
            LayoutError::LengthMismatch { expected, actual } => {
                debug!(expected, actual, "unpack input too short");
            }
            LayoutError::FieldRejected { index } => {
                debug!(index, "field rejected its bytes, earlier fields already overwritten");
            }
        })
    }
}

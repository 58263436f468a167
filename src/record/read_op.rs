use super::Record;
use crate::layout::{FieldAt, FieldList, FieldVisitor};
use crate::types::FieldDescriptor;

impl<F: FieldList> Record<F> {
    // ════════════════════════════════════════════════════════════════════════
    // Field access (in-memory values, never re-derived from the buffer)
    // ════════════════════════════════════════════════════════════════════════

    /// Current value of field `I`.
    #[inline]
    pub fn get<const I: usize>(&self) -> &<F as FieldAt<I>>::Output
    where
        F: FieldAt<I>,
    {
        self.fields.field()
    }

    /// All field values as the declared tuple.
    #[inline]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Visit every field's current value in declared order.
    pub fn for_each<V: FieldVisitor>(&self, visitor: &mut V) {
        self.fields.visit(visitor);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Packed bytes
    // ════════════════════════════════════════════════════════════════════════

    /// The owned buffer as it stands, without repacking.
    ///
    /// Fields changed through `set` since the last pack are not reflected.
    #[inline]
    pub fn view(&self) -> &[u8] {
        self.buffer.view()
    }

    /// Layout of every field, in declared order.
    pub fn descriptors() -> impl Iterator<Item = FieldDescriptor> {
        (0..F::ARITY).map(F::descriptor)
    }

    /// Layout of field `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= arity()`.
    #[inline]
    pub fn descriptor(index: usize) -> FieldDescriptor {
        F::descriptor(index)
    }
}

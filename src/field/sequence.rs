use super::Field;
use crate::types::FieldKind;

// ─── Fixed Sequences ────────────────────────────────────────────────────────
//
// Element k lives at k * T::SIZE. No length prefix: the arity is part of the
// type. Unpack writes elements in place and never resizes.

impl<T: Field, const N: usize> Field for [T; N] {
    const KIND: FieldKind = FieldKind::FixedSequence;
    const SIZE: usize = N * T::SIZE;

    fn default_value() -> Self {
        std::array::from_fn(|_| T::default_value())
    }

    fn pack_into(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Self::SIZE, "sequence region has wrong length");
        for (k, element) in self.iter().enumerate() {
            let at = k * T::SIZE;
            element.pack_into(&mut out[at..at + T::SIZE]);
        }
    }

    fn unpack_from(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() < Self::SIZE {
            return false;
        }
        self.iter_mut().enumerate().all(|(k, element)| {
            let at = k * T::SIZE;
            element.unpack_from(&bytes[at..at + T::SIZE])
        })
    }
}

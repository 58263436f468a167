use super::Field;
use crate::types::FieldKind;
use arrayvec::ArrayString;

// ─── Bounded Text ───────────────────────────────────────────────────────────
//
//  ┌────────────────────────┬──────────────────────────────┐
//  │ len: u32 (host order)  │ CAP bytes: UTF-8 + zero pad  │
//  └────────────────────────┴──────────────────────────────┘
//
// The slot is always 4 + CAP bytes, so fields after a string keep a
// static offset.

const LEN_PREFIX: usize = 4;

impl<const CAP: usize> Field for ArrayString<CAP> {
    const KIND: FieldKind = FieldKind::Scalar;
    const SIZE: usize = LEN_PREFIX + CAP;

    #[inline]
    fn default_value() -> Self {
        ArrayString::new()
    }

    fn pack_into(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Self::SIZE, "text region has wrong length");
        let (prefix, body) = out.split_at_mut(LEN_PREFIX);
        (self.len() as u32).pack_into(prefix);
        let bytes = self.as_bytes();
        body[..bytes.len()].copy_from_slice(bytes);
        body[bytes.len()..].fill(0);
    }

    fn unpack_from(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() < Self::SIZE {
            return false;
        }
        let mut len = 0u32;
        if !len.unpack_from(&bytes[..LEN_PREFIX]) {
            return false;
        }
        let len = len as usize;
        if len > CAP {
            return false;
        }
        let Ok(text) = std::str::from_utf8(&bytes[LEN_PREFIX..LEN_PREFIX + len]) else {
            return false;
        };
        self.clear();
        self.try_push_str(text).is_ok()
    }
}

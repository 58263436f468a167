use super::Field;
use crate::types::FieldKind;

// ─── Numeric Scalars ────────────────────────────────────────────────────────
//
// Host byte order, no transformation. Any bit pattern is a valid value.

macro_rules! impl_numeric_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::Scalar;
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn default_value() -> Self {
                    <$ty>::default()
                }

                #[inline]
                fn pack_into(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn unpack_from(&mut self, bytes: &[u8]) -> bool {
                    let Some(raw) = bytes.get(..Self::SIZE) else {
                        return false;
                    };
                    match raw.try_into() {
                        Ok(array) => {
                            *self = <$ty>::from_ne_bytes(array);
                            true
                        }
                        Err(_) => false,
                    }
                }
            }
        )+
    };
}

impl_numeric_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

// ─── Checked Scalars ────────────────────────────────────────────────────────

impl Field for bool {
    const KIND: FieldKind = FieldKind::Scalar;
    const SIZE: usize = 1;

    #[inline]
    fn default_value() -> Self {
        false
    }

    #[inline]
    fn pack_into(&self, out: &mut [u8]) {
        out.copy_from_slice(&[*self as u8]);
    }

    #[inline]
    fn unpack_from(&mut self, bytes: &[u8]) -> bool {
        match bytes.first() {
            Some(0) => *self = false,
            Some(1) => *self = true,
            _ => return false,
        }
        true
    }
}

impl Field for char {
    const KIND: FieldKind = FieldKind::Scalar;
    const SIZE: usize = 4;

    #[inline]
    fn default_value() -> Self {
        '\0'
    }

    #[inline]
    fn pack_into(&self, out: &mut [u8]) {
        out.copy_from_slice(&u32::from(*self).to_ne_bytes());
    }

    #[inline]
    fn unpack_from(&mut self, bytes: &[u8]) -> bool {
        let mut code = 0u32;
        if !code.unpack_from(bytes) {
            return false;
        }
        match char::from_u32(code) {
            Some(c) => {
                *self = c;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sizes_are_intrinsic_widths() {
        assert_eq!(<u8 as Field>::SIZE, 1);
        assert_eq!(<i16 as Field>::SIZE, 2);
        assert_eq!(<u32 as Field>::SIZE, 4);
        assert_eq!(<i64 as Field>::SIZE, 8);
        assert_eq!(<u128 as Field>::SIZE, 16);
        assert_eq!(<f64 as Field>::SIZE, 8);
        assert_eq!(<bool as Field>::SIZE, 1);
        assert_eq!(<char as Field>::SIZE, 4);
        assert_eq!(<u64 as Field>::KIND, FieldKind::Scalar);
    }

    #[test]
    fn test_numeric_uses_host_byte_order() {
        let mut out = [0u8; 4];
        0x0102_0304u32.pack_into(&mut out);
        assert_eq!(out, 0x0102_0304u32.to_ne_bytes());

        let mut back = 0u32;
        assert!(back.unpack_from(&out));
        assert_eq!(back, 0x0102_0304);
    }

    #[test]
    fn test_numeric_rejects_short_input() {
        let mut value = 7i64;
        assert!(!value.unpack_from(&[1, 2, 3]));
        assert_eq!(value, 7);
    }

    #[test]
    fn test_float_keeps_bits() {
        let mut out = [0u8; 8];
        (-0.0f64).pack_into(&mut out);
        let mut back = 1.0f64;
        assert!(back.unpack_from(&out));
        assert!(back.is_sign_negative());
        assert_eq!(back, 0.0);
    }

    #[test]
    fn test_bool_rejects_non_canonical_byte() {
        let mut flag = true;
        assert!(flag.unpack_from(&[0]));
        assert!(!flag);
        assert!(!flag.unpack_from(&[2]));
        assert!(!flag.unpack_from(&[]));
    }

    #[test]
    fn test_char_rejects_surrogate() {
        let mut c = 'a';
        assert!(!c.unpack_from(&0xD800u32.to_ne_bytes()));
        assert_eq!(c, 'a');
        assert!(c.unpack_from(&u32::from('ж').to_ne_bytes()));
        assert_eq!(c, 'ж');
    }

    #[test]
    #[should_panic]
    fn test_pack_into_wrong_region_panics() {
        let mut out = [0u8; 3];
        1u32.pack_into(&mut out);
    }
}

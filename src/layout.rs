//! Layout calculation for an ordered list of field types.
//!
//! Sizes, offsets and the total size are associated consts of the tuple
//! type, so they are computed once per field-type combination and shared by
//! every record built from it.

use crate::error::LayoutError;
use crate::field::Field;
use crate::types::{FieldDescriptor, FieldKind};
use std::fmt;
use std::ops::Range;

// ─── Calculator ─────────────────────────────────────────────────────────────

/// Packed byte width of a single field type.
#[inline]
pub const fn size_of<T: Field>() -> usize {
    T::SIZE
}

/// Packed size of a whole field list.
#[inline]
pub const fn total_size<F: FieldList>() -> usize {
    F::TOTAL_SIZE
}

/// Offset of field `index` inside the packed buffer.
///
/// Panics if `index` is out of range for `F`.
#[inline]
pub fn offset<F: FieldList>(index: usize) -> usize {
    F::OFFSETS[index]
}

/// Prefix sums: `offsets[i] = sizes[0] + .. + sizes[i - 1]`.
pub const fn prefix_offsets<const N: usize>(sizes: [usize; N]) -> [usize; N] {
    let mut offsets = [0usize; N];
    let mut i = 1;
    while i < N {
        offsets[i] = offsets[i - 1] + sizes[i - 1];
        i += 1;
    }
    offsets
}

// ─── FieldList ──────────────────────────────────────────────────────────────

/// An ordered, fixed list of field types. Implemented for tuples of 1 to 12
/// `Field` types.
pub trait FieldList: fmt::Debug {
    const ARITY: usize;
    const SIZES: &'static [usize];
    const OFFSETS: &'static [usize];
    const KINDS: &'static [FieldKind];
    const TOTAL_SIZE: usize;

    /// Every field at its `Field::default_value`.
    fn defaults() -> Self;

    /// Pack field `index` into `out`, which is exactly that field's region.
    fn pack_field(&self, index: usize, out: &mut [u8]);

    /// Unpack field `index` from the start of `bytes`.
    fn unpack_field(&mut self, index: usize, bytes: &[u8]) -> bool;

    /// Call `visitor` once per field, in declared order.
    fn visit<V: FieldVisitor>(&self, visitor: &mut V);

    #[inline]
    fn region(index: usize) -> Range<usize> {
        let start = Self::OFFSETS[index];
        start..start + Self::SIZES[index]
    }

    #[inline]
    fn descriptor(index: usize) -> FieldDescriptor {
        FieldDescriptor {
            index,
            kind: Self::KINDS[index],
            byte_size: Self::SIZES[index] as u32,
            offset: Self::OFFSETS[index] as u32,
        }
    }

    /// Pack every field into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly `TOTAL_SIZE` bytes long.
    fn pack_all_into(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Self::TOTAL_SIZE, "packed region has wrong length");
        for index in 0..Self::ARITY {
            self.pack_field(index, &mut out[Self::region(index)]);
        }
    }

    /// Unpack every field in declared order.
    ///
    /// Input shorter than `TOTAL_SIZE` is rejected before any field is
    /// touched. Otherwise stops at the first rejected field and reports its
    /// index; earlier fields stay overwritten. Trailing bytes are ignored.
    fn unpack_all_from(&mut self, bytes: &[u8]) -> Result<(), LayoutError> {
        if bytes.len() < Self::TOTAL_SIZE {
            return Err(LayoutError::LengthMismatch {
                expected: Self::TOTAL_SIZE,
                actual: bytes.len(),
            });
        }
        for index in 0..Self::ARITY {
            if !self.unpack_field(index, &bytes[Self::region(index)]) {
                return Err(LayoutError::FieldRejected { index });
            }
        }
        Ok(())
    }
}

/// Typed access to field `I` of a field list.
pub trait FieldAt<const I: usize>: FieldList {
    type Output: Field;

    fn field(&self) -> &Self::Output;
    fn field_mut(&mut self) -> &mut Self::Output;
}

/// Read-only visitor over the fields of a record.
pub trait FieldVisitor {
    fn visit<T: Field>(&mut self, descriptor: FieldDescriptor, value: &T);
}

// ─── Tuple impls ────────────────────────────────────────────────────────────

macro_rules! impl_field_at {
    ([$($All:ident),+], $idx:tt, $Out:ident) => {
        impl<$($All: Field),+> FieldAt<$idx> for ($($All,)+) {
            type Output = $Out;

            #[inline]
            fn field(&self) -> &$Out {
                &self.$idx
            }

            #[inline]
            fn field_mut(&mut self) -> &mut $Out {
                &mut self.$idx
            }
        }
    };
}

macro_rules! impl_field_list {
    ($arity:literal; $all:tt; $($idx:tt $T:ident),+) => {
        impl<$($T: Field),+> FieldList for ($($T,)+) {
            const ARITY: usize = $arity;
            const SIZES: &'static [usize] = &[$($T::SIZE),+];
            const OFFSETS: &'static [usize] = &prefix_offsets([$($T::SIZE),+]);
            const KINDS: &'static [FieldKind] = &[$($T::KIND),+];
            const TOTAL_SIZE: usize = 0 $(+ $T::SIZE)+;

            #[inline]
            fn defaults() -> Self {
                ($($T::default_value(),)+)
            }

            fn pack_field(&self, index: usize, out: &mut [u8]) {
                match index {
                    $($idx => self.$idx.pack_into(out),)+
                    _ => panic!("field index {index} out of range for arity {}", $arity),
                }
            }

            fn unpack_field(&mut self, index: usize, bytes: &[u8]) -> bool {
                match index {
                    $($idx => self.$idx.unpack_from(bytes),)+
                    _ => panic!("field index {index} out of range for arity {}", $arity),
                }
            }

            fn visit<V: FieldVisitor>(&self, visitor: &mut V) {
                $(visitor.visit(Self::descriptor($idx), &self.$idx);)+
            }
        }

        $(impl_field_at!($all, $idx, $T);)+
    };
}

impl_field_list!(1; [A]; 0 A);
impl_field_list!(2; [A, B]; 0 A, 1 B);
impl_field_list!(3; [A, B, C]; 0 A, 1 B, 2 C);
impl_field_list!(4; [A, B, C, D]; 0 A, 1 B, 2 C, 3 D);
impl_field_list!(5; [A, B, C, D, E]; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_field_list!(6; [A, B, C, D, E, G]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G);
impl_field_list!(7; [A, B, C, D, E, G, H]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H);
impl_field_list!(8; [A, B, C, D, E, G, H, J]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 J);
impl_field_list!(9; [A, B, C, D, E, G, H, J, K]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 J, 8 K);
impl_field_list!(10; [A, B, C, D, E, G, H, J, K, L]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 J, 8 K, 9 L);
impl_field_list!(11; [A, B, C, D, E, G, H, J, K, L, M]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 J, 8 K, 9 L, 10 M);
impl_field_list!(12; [A, B, C, D, E, G, H, J, K, L, M, P]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 G, 6 H, 7 J, 8 K, 9 L, 10 M, 11 P);

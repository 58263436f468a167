//! The `Field` capability every packable type provides.

mod scalar;
mod sequence;
mod text;

use crate::types::FieldKind;
use std::fmt;

// ─── Field Trait ────────────────────────────────────────────────────────────

/// A type that can occupy a fixed-size region of a packed record.
///
/// `KIND` and `SIZE` belong to the type, so the whole layout of a record is
/// known before any value exists. Types without an impl cannot be declared
/// as fields at all.
///
/// Implementors write exactly `SIZE` bytes in `pack_into`. Writing a region
/// of any other length is a contract violation and panics.
pub trait Field: fmt::Debug {
    /// Packing strategy of this type.
    const KIND: FieldKind;

    /// Packed byte width.
    const SIZE: usize;

    /// Value a freshly constructed record starts with. Packs to all zero
    /// bytes for every type in this crate.
    fn default_value() -> Self
    where
        Self: Sized;

    /// Write the packed bytes into `out`, which is exactly `SIZE` long.
    fn pack_into(&self, out: &mut [u8]);

    /// Read the value back from the first `SIZE` bytes of `bytes`.
    ///
    /// Returns `false` if the bytes are short or not a valid encoding.
    /// A `false` return may leave `self` partially overwritten.
    fn unpack_from(&mut self, bytes: &[u8]) -> bool;
}

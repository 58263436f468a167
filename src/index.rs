//! Ready-made index entry records.

use crate::record::Record;

pub type IndexInt32 = Record<(i32,)>;
pub type IndexInt64 = Record<(i64,)>;
pub type IndexBool = Record<(bool,)>;
pub type IndexBools<const N: usize> = Record<([bool; N],)>;

/// An index entry built from other index entries, nested by value.
pub type CompositeIndex = Record<(IndexInt64, IndexInt32, IndexBools<256>)>;

use serde::Serialize;

// ─── Field Kinds ────────────────────────────────────────────────────────────

/// Packing strategy of a field type. Fixed per type, never per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Raw host-order bytes of the value.
    Scalar,
    /// Another record, packed through its own `Field` impl.
    NestedRecord,
    /// `N` elements of one type, back to back, no length prefix.
    FixedSequence,
}

// ─── Binary Layout ──────────────────────────────────────────────────────────
//
//  ┌──────────────────────────────────────────────┐
//  │ field 0   [offset 0, sizes[0])               │
//  ├──────────────────────────────────────────────┤
//  │ field 1   [offsets[1], offsets[1]+sizes[1])  │
//  ├──────────────────────────────────────────────┤
//  │ ...                                          │
//  ├──────────────────────────────────────────────┤
//  │ field N-1                                    │
//  └──────────────────────────────────────────────┘
//
//  No header, no type tags, no outer length. Both sides must declare the
//  same ordered field types to read the bytes.

// ─── FieldDescriptor ────────────────────────────────────────────────────────

/// Position of one field inside the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub index: usize,
    pub kind: FieldKind,
    pub byte_size: u32,
    pub offset: u32,
}

impl FieldDescriptor {
    /// Byte range covered by this field.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.byte_size as usize
    }
}

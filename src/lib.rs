//! # fieldpack
//!
//! Fixed binary layouts for records declared as a tuple of field types.
//!
//! The tuple is the schema: sizes and offsets of every field are computed
//! from the types alone, values are packed into one contiguous buffer in
//! declared order (host byte order, no tags, no length prefix), and the
//! same tuple reads them back. Records are fields themselves, so they nest.

pub mod buffer;
pub mod error;
pub mod field;
pub mod index;
pub mod layout;
pub mod record;
pub mod store;
pub mod types;

pub use buffer::PackBuffer;
pub use error::LayoutError;
pub use field::Field;
pub use layout::{FieldAt, FieldList, FieldVisitor};
pub use record::Record;
pub use store::{RecordStore, StoreConfig, StoreError};
pub use types::{FieldDescriptor, FieldKind};

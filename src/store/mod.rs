pub mod store;
pub mod types;

pub use store::RecordStore;
pub use types::{StoreConfig, StoreError};

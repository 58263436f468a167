use super::types::{StoreConfig, StoreError};
use crate::layout::FieldList;
use crate::record::Record;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use tracing::debug;

// Key: record key
// Value: packed record bytes, exactly Record::size() long
type PackedTable<'a> = TableDefinition<'a, &'static str, &'static [u8]>;

/// Persists packed records under string keys.
///
/// The store only moves bytes. Callers read a key back into a record of the
/// same field types that wrote it.
pub struct RecordStore {
    db: Database,
    config: StoreConfig,
}

impl RecordStore {
    /// Open or create the database at the specified path.
    /// Also ensures that the configured table exists.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self, StoreError> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PackedTable::new(&config.table_name))?;
        }
        write_txn.commit()?;

        Ok(Self { db, config })
    }

    #[inline]
    fn table(&self) -> PackedTable<'_> {
        TableDefinition::new(&self.config.table_name)
    }

    /// Pack `record` and write it under `key`, replacing any previous value.
    pub fn put<F: FieldList>(&self, key: &str, record: &mut Record<F>) -> Result<(), StoreError> {
        let bytes = record.pack();
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(self.table())?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        debug!(key, size = bytes.len(), "stored record");
        Ok(())
    }

    /// Unpack the bytes stored under `key` into `record`.
    ///
    /// Returns `Ok(false)` if the key is absent. A layout error leaves
    /// `record` in the partially unpacked state described on
    /// [`Record::unpack`].
    pub fn load_into<F: FieldList>(
        &self,
        key: &str,
        record: &mut Record<F>,
    ) -> Result<bool, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(self.table())?;

        let Some(access) = table.get(key)? else {
            return Ok(false);
        };
        record.try_unpack(access.value())?;
        Ok(true)
    }

    /// Remove a record by its key.
    /// Returns true if the record existed and was removed, false otherwise.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(self.table())?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }
}

//! Key-value slots the collection is mirrored to.

mod file;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use file::FileSlot;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSlot;

#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failures reported by host storage, e.g. a browser quota error.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A single persisted value holding the serialized collection.
pub trait StorageSlot {
    /// `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError>;

    /// Replaces the whole value.
    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for Box<S> {
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError> {
        (**self).write(bytes)
    }
}

/// In-process slot. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    bytes: Option<Vec<u8>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        Ok(self.bytes.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError> {
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }
}

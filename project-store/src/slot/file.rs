use super::{SlotError, StorageSlot};
use std::path::{Path, PathBuf};

/// Slot backed by one JSON file.
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SlotError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes through a `.tmp` sibling and renames it over the target.
    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError> {
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "file slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let slot = FileSlot::open(tmp.path().join("nested/projects.json")).expect("open");
        assert_eq!(slot.read().expect("read"), None);
        assert!(tmp.path().join("nested").is_dir());
    }

    #[test]
    fn write_replaces_contents_without_leftover_tmp() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("projects.json");
        let mut slot = FileSlot::open(&path).expect("open");

        slot.write(b"[\"a\"]").expect("write a");
        slot.write(b"[\"b\"]").expect("write b");

        assert_eq!(slot.read().expect("read"), Some(b"[\"b\"]".to_vec()));
        assert!(!path.with_extension("tmp").exists());
    }
}

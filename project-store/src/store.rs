use crate::project::{decode_collection, encode_collection, NewProject, Project};
use crate::seed::sample_projects;
use crate::slot::{SlotError, StorageSlot};
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode projects: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist projects: {0}")]
    Write(#[source] SlotError),
}

/// Why a persisted collection could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("nothing persisted")]
    Absent,

    #[error("failed to read slot: {0}")]
    Read(#[from] SlotError),

    #[error("failed to decode persisted projects: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How the session's collection came to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bootstrap {
    Restored,
    /// Sample data was used; carries the load failure as text.
    Seeded { reason: String },
}

/// Reads and decodes the slot. Empty bytes count as nothing persisted.
pub fn load_collection(slot: &impl StorageSlot) -> Result<Vec<Project>, LoadError> {
    match slot.read()? {
        Some(bytes) if !bytes.is_empty() => Ok(decode_collection(&bytes)?),
        _ => Err(LoadError::Absent),
    }
}

/// The session's authoritative project list, mirrored to a [`StorageSlot`].
///
/// Not synchronized; wrap it when sharing across threads.
pub struct ProjectStore<S> {
    slot: S,
    projects: Vec<Project>,
    bootstrap: Bootstrap,
}

impl<S: StorageSlot> ProjectStore<S> {
    /// Restores the persisted collection or falls back to the sample set.
    ///
    /// A seeded collection is written back immediately. Failing that write
    /// only logs: the session still has its in-memory samples.
    pub fn open(slot: S) -> Self {
        match load_collection(&slot) {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "restored persisted projects");
                Self {
                    slot,
                    projects,
                    bootstrap: Bootstrap::Restored,
                }
            }
            Err(err) => {
                if matches!(err, LoadError::Absent) {
                    tracing::debug!("no persisted projects, seeding samples");
                } else {
                    tracing::warn!(error = %err, "discarding persisted projects, seeding samples");
                }

                let mut store = Self {
                    slot,
                    projects: sample_projects(Utc::now(), new_id),
                    bootstrap: Bootstrap::Seeded {
                        reason: err.to_string(),
                    },
                };
                if let Err(e) = store.persist() {
                    tracing::warn!(error = %e, "failed to persist seeded projects");
                }
                store
            }
        }
    }

    pub fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    /// Newest first.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Stamps, prepends and persists `new`, returning its id.
    ///
    /// If the slot rejects the write the record is dropped again, so memory
    /// never runs ahead of what was persisted.
    pub fn add(&mut self, new: NewProject) -> Result<String, StoreError> {
        let mut id = new_id();
        while self.get(&id).is_some() {
            id = new_id();
        }

        self.projects
            .insert(0, Project::from_new(id.clone(), Utc::now(), new));

        if let Err(e) = self.persist() {
            self.projects.remove(0);
            tracing::warn!(error = %e, "project not added");
            return Err(e);
        }

        tracing::debug!(%id, total = self.projects.len(), "project added");
        Ok(id)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let bytes = encode_collection(&self.projects)?;
        self.slot.write(&bytes).map_err(StoreError::Write)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SAMPLE_COUNT;
    use crate::slot::MemorySlot;

    struct FullSlot;

    impl StorageSlot for FullSlot {
        fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
            Ok(Some(b"[]".to_vec()))
        }

        fn write(&mut self, _bytes: &[u8]) -> Result<(), SlotError> {
            Err(SlotError::Backend("QuotaExceededError".into()))
        }
    }

    struct BrokenSlot;

    impl StorageSlot for BrokenSlot {
        fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
            Err(SlotError::Backend("SecurityError".into()))
        }

        fn write(&mut self, _bytes: &[u8]) -> Result<(), SlotError> {
            Err(SlotError::Backend("SecurityError".into()))
        }
    }

    fn payload(name: &str) -> NewProject {
        NewProject {
            name: name.into(),
            category: "X".into(),
            purpose: "Y".into(),
            ..NewProject::default()
        }
    }

    #[test]
    fn empty_slot_seeds_and_persists_samples() {
        let store = ProjectStore::open(MemorySlot::new());
        assert_eq!(store.list().len(), SAMPLE_COUNT);
        assert!(matches!(store.bootstrap(), Bootstrap::Seeded { .. }));

        let persisted = load_collection(store.slot()).expect("persisted");
        assert_eq!(persisted, store.list());
    }

    #[test]
    fn empty_bytes_count_as_absent() {
        let store = ProjectStore::open(MemorySlot::with_bytes(Vec::new()));
        assert_eq!(
            store.bootstrap(),
            &Bootstrap::Seeded {
                reason: "nothing persisted".into()
            }
        );
    }

    #[test]
    fn corrupt_slot_falls_back_to_samples() {
        let store = ProjectStore::open(MemorySlot::with_bytes("{not json"));
        assert_eq!(store.list().len(), SAMPLE_COUNT);
        let Bootstrap::Seeded { reason } = store.bootstrap() else {
            panic!("expected seeded bootstrap");
        };
        assert!(reason.starts_with("failed to decode"));
    }

    #[test]
    fn partial_record_is_restored_not_reseeded() {
        let raw = r#"[
            {"id": "keep-me", "name": "Kept", "category": "X", "createdAt": "2024-05-01T12:00:00Z"},
            {"id": "no-team", "name": "Partial", "purpose": "p", "contact": "c"}
        ]"#;
        let store = ProjectStore::open(MemorySlot::with_bytes(raw));

        assert_eq!(store.bootstrap(), &Bootstrap::Restored);
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.get("keep-me").map(|p| p.name.as_str()), Some("Kept"));
        assert_eq!(store.get("no-team").map(|p| p.team.as_str()), Some(""));
        assert_eq!(store.slot().bytes(), Some(raw.as_bytes()));
    }

    #[test]
    fn unreadable_slot_falls_back_without_failing() {
        let store = ProjectStore::open(BrokenSlot);
        assert_eq!(store.list().len(), SAMPLE_COUNT);
    }

    #[test]
    fn persisted_empty_list_is_not_reseeded() {
        let store = ProjectStore::open(MemorySlot::with_bytes("[]"));
        assert!(store.list().is_empty());
        assert_eq!(store.bootstrap(), &Bootstrap::Restored);
    }

    #[test]
    fn add_prepends_and_get_finds_it() {
        let mut store = ProjectStore::open(MemorySlot::new());
        let id = store.add(payload("Test")).expect("add");

        assert!(!id.is_empty());
        assert_eq!(store.list()[0].id, id);
        assert_eq!(store.list()[0].name, "Test");
        assert_eq!(store.list().len(), SAMPLE_COUNT + 1);
        assert_eq!(store.get(&id).map(|p| p.category.as_str()), Some("X"));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = ProjectStore::open(MemorySlot::new());
        assert!(store.get("does-not-exist").is_none());
    }

    #[test]
    fn write_failure_is_surfaced_and_rolled_back() {
        let mut store = ProjectStore::open(FullSlot);
        let err = store.add(payload("Test")).unwrap_err();

        assert!(matches!(err, StoreError::Write(SlotError::Backend(_))));
        assert!(store.list().is_empty());
    }
}

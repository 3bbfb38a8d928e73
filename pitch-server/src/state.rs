use crate::config::{Backend, ServerConfig};
use pitch_registry::DraftRules;
use project_store::slot::{FileSlot, SqliteSlot};
use project_store::{Bootstrap, MemorySlot, ProjectStore, StorageSlot, STORAGE_KEY};
use std::sync::{Arc, Mutex};

pub type SharedSlot = Box<dyn StorageSlot + Send>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ProjectStore<SharedSlot>>>,
    pub rules: Arc<DraftRules>,
}

impl AppState {
    pub fn new(slot: SharedSlot, rules: DraftRules) -> Self {
        let store = ProjectStore::open(slot);
        if let Bootstrap::Seeded { reason } = store.bootstrap() {
            tracing::info!(%reason, count = store.list().len(), "seeded sample projects");
        }
        Self {
            store: Arc::new(Mutex::new(store)),
            rules: Arc::new(rules),
        }
    }
}

pub fn build_state(config: &ServerConfig) -> Result<AppState, String> {
    let slot: SharedSlot = match config.backend {
        Backend::Sqlite => Box::new(
            SqliteSlot::open(&config.store_path, STORAGE_KEY).map_err(|e| e.to_string())?,
        ),
        Backend::File => Box::new(FileSlot::open(&config.store_path).map_err(|e| e.to_string())?),
        Backend::Memory => Box::new(MemorySlot::new()),
    };
    tracing::info!(backend = ?config.backend, path = %config.store_path.display(), "store opened");
    Ok(AppState::new(slot, config.rules.clone()))
}

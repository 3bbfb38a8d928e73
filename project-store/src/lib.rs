//! Pitch-deck project store.
//!
//! A [`ProjectStore`] owns the session's project collection and mirrors it to
//! a single key-value [`slot::StorageSlot`]. Records are created once and never
//! changed; new records are prepended so the collection reads newest first.

pub mod contribute;
pub mod placeholder;
pub mod project;
pub mod query;
pub mod seed;
pub mod slot;
pub mod store;
pub mod wallet;

pub use project::{NewProject, Project};
pub use query::{ProjectPage, ProjectQuery};
pub use slot::{MemorySlot, SlotError, StorageSlot};
pub use store::{Bootstrap, LoadError, ProjectStore, StoreError};

/// Storage key the collection has always lived under.
pub const STORAGE_KEY: &str = "algocrowd_projects_v1";

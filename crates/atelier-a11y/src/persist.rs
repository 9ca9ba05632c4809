//! Record persistence
//!
//! Load/save of the preference record through the key-value seam. Load
//! never fails from the caller's point of view: corrupted, missing, or
//! wrong-version records fall back to defaults silently.

use tracing::warn;

use atelier_store::{KeyValueStore, StoreError};

use crate::record::{PreferenceRecord, SCHEMA_VERSION};

/// Single well-known key for the whole record
pub const STORAGE_KEY: &str = "atelier.a11y.prefs";

/// Persistence failure, recoverable by the engine
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load the persisted record, if a usable one exists
///
/// Returns `None` when there is no record, when it fails to parse, or
/// when its version is not the supported one. Each of those cases means
/// the caller should run with defaults.
pub fn load_record<S: KeyValueStore>(store: &S) -> Option<PreferenceRecord> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "preference store unreadable, using defaults");
            return None;
        }
    };

    match serde_json::from_str::<PreferenceRecord>(&raw) {
        Ok(record) if record.version == SCHEMA_VERSION => Some(record),
        Ok(record) => {
            warn!(version = record.version, "unsupported record version, using defaults");
            None
        }
        Err(e) => {
            warn!(error = %e, "corrupted preference record, using defaults");
            None
        }
    }
}

/// Write the full record under [`STORAGE_KEY`]
pub fn save_record<S: KeyValueStore>(
    store: &mut S,
    record: &PreferenceRecord,
) -> Result<(), PersistError> {
    let raw = serde_json::to_string(record)?;
    store.set(STORAGE_KEY, &raw)?;
    Ok(())
}

//! Atelier Accessibility
//!
//! Accessibility preference engine for the Atelier site.
//!
//! Features:
//! - Durable preference record (text scale, contrast, motion, cursor,
//!   dark mode, screen reader mode, language)
//! - Deterministic side-effect application onto the document root
//! - Live-region announcements, localized to the active language
//! - Panel open/close with outside-pointer and Escape handling
//! - Global Alt+A shortcut to toggle the panel
//! - Silent fallback to defaults on corrupted persisted records
//!
//! Persistence goes through the `atelier-store` key-value seam; document
//! state goes through the `atelier-dom` root model. Both are the only
//! code paths allowed to touch their respective resources.

pub mod announcer;
pub mod engine;
pub mod persist;
pub mod record;
pub mod shortcut;

pub use announcer::ChangedSetting;
pub use engine::{apply_side_effects, PreferenceEngine, LIVE_REGION_ID};
pub use persist::{PersistError, STORAGE_KEY};
pub use record::{InvalidLevel, Language, PreferenceRecord, ScaleLevel, SCHEMA_VERSION};
pub use shortcut::KeyCombo;

//! Behavior tests for the preference engine
//!
//! Exercises the engine end to end against the in-memory store: durability
//! after every mutation, document side effects, live-region announcements,
//! and degraded operation on storage failure.

use std::cell::Cell;
use std::rc::Rc;

use atelier_a11y::{
    apply_side_effects, KeyCombo, Language, PreferenceEngine, PreferenceRecord, ScaleLevel,
    LIVE_REGION_ID, STORAGE_KEY,
};
use atelier_dom::{DocumentRoot, TextDirection};
use atelier_store::{KeyValueStore, MemoryStore, StoreError};

fn engine() -> PreferenceEngine<MemoryStore> {
    PreferenceEngine::new(MemoryStore::new())
}

fn persisted<S: KeyValueStore>(engine: &PreferenceEngine<S>) -> Option<PreferenceRecord> {
    let raw = engine.store().get(STORAGE_KEY).unwrap()?;
    Some(serde_json::from_str(&raw).unwrap())
}

#[test]
fn test_persisted_record_tracks_memory_after_every_mutation() {
    let mut engine = engine();

    engine.set_text_scale(ScaleLevel::Large);
    assert_eq!(persisted(&engine).unwrap(), *engine.record());

    engine.toggle_high_contrast();
    assert_eq!(persisted(&engine).unwrap(), *engine.record());

    engine.set_cursor_scale(ScaleLevel::Larger);
    assert_eq!(persisted(&engine).unwrap(), *engine.record());

    engine.set_language(Language::Hebrew);
    assert_eq!(persisted(&engine).unwrap(), *engine.record());

    engine.toggle_screen_reader_mode();
    assert_eq!(persisted(&engine).unwrap(), *engine.record());
}

#[test]
fn test_font_size_percentages() {
    let mut engine = engine();

    engine.set_text_scale(ScaleLevel::Normal);
    assert_eq!(engine.document().font_size_pct(), 100.0);

    engine.set_text_scale(ScaleLevel::Large);
    assert_eq!(engine.document().font_size_pct(), 112.5);

    engine.set_text_scale(ScaleLevel::Larger);
    assert_eq!(engine.document().font_size_pct(), 125.0);
}

#[test]
fn test_cursor_classes_are_exclusive() {
    let mut engine = engine();

    engine.set_cursor_scale(ScaleLevel::Larger);
    assert!(engine.document().has_class("cursor-larger"));
    assert!(!engine.document().has_class("cursor-large"));

    engine.set_cursor_scale(ScaleLevel::Large);
    assert!(engine.document().has_class("cursor-large"));
    assert!(!engine.document().has_class("cursor-larger"));

    engine.set_cursor_scale(ScaleLevel::Normal);
    assert!(!engine.document().has_class("cursor-large"));
    assert!(!engine.document().has_class("cursor-larger"));
}

#[test]
fn test_live_region_lifecycle() {
    let mut engine = engine();
    assert!(engine.document().live_region().is_none());

    engine.toggle_screen_reader_mode();
    let region = engine.document().live_region().expect("node created");
    assert_eq!(region.id(), LIVE_REGION_ID);

    // further mutations keep exactly one node
    engine.set_text_scale(ScaleLevel::Large);
    assert!(engine.document().live_region().is_some());

    engine.toggle_screen_reader_mode();
    assert!(engine.document().live_region().is_none());
}

#[test]
fn test_language_drives_dir_and_lang() {
    let mut engine = engine();

    engine.set_language(Language::Hebrew);
    assert_eq!(engine.document().dir(), TextDirection::Rtl);
    assert_eq!(engine.document().lang(), "he");

    engine.set_language(Language::English);
    assert_eq!(engine.document().dir(), TextDirection::Ltr);
    assert_eq!(engine.document().lang(), "en");
}

#[test]
fn test_reset_restores_and_persists_defaults() {
    let mut engine = engine();
    engine.set_text_scale(ScaleLevel::Larger);
    engine.toggle_dark_mode();
    engine.toggle_reduced_motion();
    engine.set_language(Language::Hebrew);

    engine.reset();
    assert_eq!(engine.record(), &PreferenceRecord::default());
    assert_eq!(persisted(&engine).unwrap(), PreferenceRecord::default());

    assert!(engine.document().classes().is_empty());
    assert_eq!(engine.document().font_size_pct(), 100.0);
    assert_eq!(engine.document().lang(), "en");
}

#[test]
fn test_fresh_session_reports_defaults() {
    let engine = engine();
    assert_eq!(engine.record(), &PreferenceRecord::default());
    assert!(engine.document().classes().is_empty());
    assert_eq!(engine.document().lang(), "en");
    assert_eq!(engine.document().dir(), TextDirection::Ltr);
    assert_eq!(persisted(&engine), None); // nothing written yet
}

#[test]
fn test_persisted_record_is_adopted_and_applied_at_mount() {
    let mut store = MemoryStore::new();
    let record = PreferenceRecord {
        text_scale: ScaleLevel::Larger,
        high_contrast: true,
        screen_reader_mode: true,
        ..Default::default()
    };
    store
        .set(STORAGE_KEY, &serde_json::to_string(&record).unwrap())
        .unwrap();

    let engine = PreferenceEngine::mount(store, DocumentRoot::new());
    assert_eq!(engine.record(), &record);
    assert_eq!(engine.document().font_size_pct(), 125.0);
    assert!(engine.document().has_class("high-contrast"));
    assert!(engine.document().live_region().is_some());
}

#[test]
fn test_corrupted_record_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "definitely not json").unwrap();

    let engine = PreferenceEngine::mount(store, DocumentRoot::new());
    assert_eq!(engine.record(), &PreferenceRecord::default());
    assert!(engine.document().classes().is_empty());
}

#[test]
fn test_announcement_written_on_setting_change() {
    let mut engine = engine();
    engine.toggle_screen_reader_mode();

    engine.set_text_scale(ScaleLevel::Large);
    let text = engine.document().live_region().unwrap().text().to_string();
    assert!(text.contains("Text size"));
    assert!(text.contains("large"));

    // next change replaces the prior content
    engine.toggle_dark_mode();
    let replaced = engine.document().live_region().unwrap().text();
    assert_ne!(replaced, text);
    assert!(replaced.contains("Dark mode"));
}

#[test]
fn test_announcements_follow_the_active_language() {
    let mut engine = engine();
    engine.toggle_screen_reader_mode();
    engine.set_language(Language::Hebrew);

    engine.toggle_high_contrast();
    let text = engine.document().live_region().unwrap().text();
    assert!(text.contains("ניגודיות"));
}

#[test]
fn test_no_announcement_without_screen_reader_mode() {
    let mut engine = engine();
    engine.set_text_scale(ScaleLevel::Large);
    assert!(engine.document().live_region().is_none());
}

#[test]
fn test_reset_is_silent() {
    let mut engine = engine();
    engine.toggle_screen_reader_mode();
    engine.set_text_scale(ScaleLevel::Large);
    let before = engine.document().live_region().unwrap().text().to_string();

    // reset drops screen reader mode, so the node is removed; the phrase
    // that was there beforehand is never replaced by a reset message
    engine.reset();
    assert!(engine.document().live_region().is_none());
    assert!(before.contains("Text size"));
}

/// Store whose writes can be failed from the outside
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Rc<Cell<bool>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable);
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

#[test]
fn test_write_failure_keeps_memory_authoritative_and_retries() {
    let fail_writes = Rc::new(Cell::new(true));
    let store = FlakyStore {
        inner: MemoryStore::new(),
        fail_writes: Rc::clone(&fail_writes),
    };
    let mut engine = PreferenceEngine::new(store);

    engine.set_text_scale(ScaleLevel::Larger);
    engine.toggle_high_contrast();

    // nothing durable, but memory and document advanced
    assert_eq!(engine.store().get(STORAGE_KEY).unwrap(), None);
    assert_eq!(engine.record().text_scale, ScaleLevel::Larger);
    assert!(engine.document().has_class("high-contrast"));

    // store recovers; the next mutation writes the full current record
    fail_writes.set(false);
    engine.toggle_dark_mode();

    let saved = persisted(&engine).unwrap();
    assert_eq!(saved, *engine.record());
    assert_eq!(saved.text_scale, ScaleLevel::Larger);
    assert!(saved.high_contrast);
    assert!(saved.dark_mode);
}

#[test]
fn test_quota_exhaustion_is_non_fatal() {
    let mut engine = PreferenceEngine::new(MemoryStore::with_quota(4));
    engine.set_text_scale(ScaleLevel::Large);
    assert_eq!(engine.record().text_scale, ScaleLevel::Large);
    assert_eq!(engine.document().font_size_pct(), 112.5);
}

#[test]
fn test_apply_is_a_pure_function_of_the_record() {
    let mut doc = DocumentRoot::new();
    let record = PreferenceRecord {
        text_scale: ScaleLevel::Large,
        reduced_motion: true,
        dark_mode: true,
        language: Language::Hebrew,
        ..Default::default()
    };

    apply_side_effects(&record, &mut doc);
    apply_side_effects(&record, &mut doc); // re-applying changes nothing

    assert_eq!(doc.font_size_pct(), 112.5);
    assert!(doc.has_class("reduced-motion"));
    assert!(doc.has_class("forced-dark"));
    assert!(!doc.has_class("high-contrast"));
    assert_eq!(doc.dir(), TextDirection::Rtl);
    assert_eq!(doc.lang(), "he");
    assert!(doc.live_region().is_none());
}

#[test]
fn test_keyboard_combo_display_matches_documentation() {
    assert_eq!(KeyCombo::panel_toggle().display(), "Alt+A");
}

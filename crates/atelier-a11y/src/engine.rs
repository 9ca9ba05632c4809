//! Preference engine
//!
//! Owns the in-memory preference record, keeps it durable through the
//! key-value seam, and translates it into document state. Every mutation
//! runs to completion before the next event is handled, so callers never
//! observe a half-applied document.

use tracing::{debug, warn};

use atelier_dom::DocumentRoot;
use atelier_store::KeyValueStore;

use crate::announcer::{self, ChangedSetting};
use crate::persist;
use crate::record::{Language, PreferenceRecord, ScaleLevel};
use crate::shortcut::KeyCombo;

/// Fixed id of the live-announcement node
pub const LIVE_REGION_ID: &str = "a11y-announcer";

/// Translate the full record into document state
///
/// The only code path allowed to touch the document root. Always applies
/// every contract point: font size, the three boolean-gated classes, at
/// most one cursor class, `dir`/`lang`, and live-region existence.
pub fn apply_side_effects(record: &PreferenceRecord, doc: &mut DocumentRoot) {
    doc.set_font_size_pct(record.text_scale.font_size_pct());

    doc.set_class("high-contrast", record.high_contrast);
    doc.set_class("reduced-motion", record.reduced_motion);
    doc.set_class("forced-dark", record.dark_mode);

    doc.set_class("cursor-large", record.cursor_scale == ScaleLevel::Large);
    doc.set_class("cursor-larger", record.cursor_scale == ScaleLevel::Larger);

    doc.set_dir_lang(record.language.direction(), record.language.tag());

    if record.screen_reader_mode {
        doc.ensure_live_region(LIVE_REGION_ID);
    } else {
        doc.remove_live_region();
    }

    debug!(classes = %doc.classes(), font_pct = doc.font_size_pct(), "side effects applied");
}

/// The accessibility preference engine
///
/// Single writer of its storage key; exclusive owner of the in-memory
/// record and the document root it decorates.
#[derive(Debug)]
pub struct PreferenceEngine<S: KeyValueStore> {
    record: PreferenceRecord,
    doc: DocumentRoot,
    store: S,
    panel_open: bool,
    outside_listener: bool,
}

impl<S: KeyValueStore> PreferenceEngine<S> {
    /// Mount against a fresh document root
    pub fn new(store: S) -> Self {
        Self::mount(store, DocumentRoot::new())
    }

    /// Mount against an existing document root
    ///
    /// Adopts the persisted record when a usable one exists and applies
    /// it immediately, without re-persisting. With no usable record the
    /// defaults stand and the document is left untouched.
    pub fn mount(store: S, mut doc: DocumentRoot) -> Self {
        let record = match persist::load_record(&store) {
            Some(record) => {
                apply_side_effects(&record, &mut doc);
                record
            }
            None => PreferenceRecord::default(),
        };
        Self {
            record,
            doc,
            store,
            panel_open: false,
            outside_listener: false,
        }
    }

    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    pub fn document(&self) -> &DocumentRoot {
        &self.doc
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // === Panel visibility ===

    pub fn is_open(&self) -> bool {
        self.panel_open
    }

    /// Whether the outside pointer-down listener is attached
    ///
    /// Attached exactly while the panel is open.
    pub fn outside_listener_attached(&self) -> bool {
        self.outside_listener
    }

    /// Open the panel; idempotent
    pub fn open(&mut self) {
        if !self.panel_open {
            self.panel_open = true;
            self.outside_listener = true;
        }
    }

    /// Close the panel and detach the outside listener
    pub fn close(&mut self) {
        if self.panel_open {
            self.panel_open = false;
            self.outside_listener = false;
        }
    }

    pub fn toggle_open(&mut self) {
        if self.panel_open {
            self.close();
        } else {
            self.open();
        }
    }

    // === Mutations ===

    pub fn set_text_scale(&mut self, level: ScaleLevel) {
        self.mutate(Some(ChangedSetting::TextScale), |r| r.text_scale = level);
    }

    pub fn set_cursor_scale(&mut self, level: ScaleLevel) {
        self.mutate(Some(ChangedSetting::CursorScale), |r| r.cursor_scale = level);
    }

    pub fn toggle_high_contrast(&mut self) {
        self.mutate(Some(ChangedSetting::HighContrast), |r| {
            r.high_contrast = !r.high_contrast;
        });
    }

    pub fn toggle_reduced_motion(&mut self) {
        self.mutate(Some(ChangedSetting::ReducedMotion), |r| {
            r.reduced_motion = !r.reduced_motion;
        });
    }

    pub fn toggle_dark_mode(&mut self) {
        self.mutate(Some(ChangedSetting::DarkMode), |r| {
            r.dark_mode = !r.dark_mode;
        });
    }

    pub fn toggle_screen_reader_mode(&mut self) {
        self.mutate(Some(ChangedSetting::ScreenReaderMode), |r| {
            r.screen_reader_mode = !r.screen_reader_mode;
        });
    }

    pub fn set_language(&mut self, language: Language) {
        self.mutate(Some(ChangedSetting::Language), |r| r.language = language);
    }

    /// Restore all fields to defaults, silently
    pub fn reset(&mut self) {
        self.mutate(None, |r| *r = PreferenceRecord::default());
    }

    // === Event protocols ===

    /// Global key-down handling; returns true when the event was consumed
    ///
    /// Escape closes the panel if open. Alt+A toggles it regardless of
    /// state. Only the key/modifier combination is inspected.
    pub fn handle_key(&mut self, combo: &KeyCombo) -> bool {
        if combo.matches(&KeyCombo::panel_toggle()) {
            self.toggle_open();
            return true;
        }
        if combo.is_escape() && self.panel_open {
            self.close();
            return true;
        }
        false
    }

    /// Pointer-down routing while the outside listener is attached
    ///
    /// A press outside the panel bounds closes it. With the panel closed
    /// the listener is detached and the event is ignored.
    pub fn handle_pointer_down(&mut self, inside_panel: bool) {
        if self.outside_listener && !inside_panel {
            self.close();
        }
    }

    fn mutate(&mut self, changed: Option<ChangedSetting>, f: impl FnOnce(&mut PreferenceRecord)) {
        f(&mut self.record);

        // Full write on every mutation; a failed write is retried by the
        // next mutation's write, in-memory state stays authoritative.
        if let Err(e) = persist::save_record(&mut self.store, &self.record) {
            warn!(error = %e, "preference persistence failed, continuing in memory");
        }

        apply_side_effects(&self.record, &mut self.doc);

        if self.record.screen_reader_mode {
            if let Some(setting) = changed {
                let text = announcer::describe(setting, &self.record);
                if let Some(region) = self.doc.live_region_mut() {
                    region.set_text(&text);
                }
            }
        }
    }
}

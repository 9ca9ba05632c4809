//! Setting-change announcements
//!
//! Short human-readable phrases describing the new value of a setting,
//! written into the live region when screen reader mode is on. Wording
//! follows the active interface language.

use crate::record::{Language, PreferenceRecord, ScaleLevel};

/// Which setting a mutation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedSetting {
    TextScale,
    HighContrast,
    ReducedMotion,
    CursorScale,
    DarkMode,
    ScreenReaderMode,
    Language,
}

/// Describe the current value of `setting` in the record's language
pub fn describe(setting: ChangedSetting, record: &PreferenceRecord) -> String {
    match record.language {
        Language::English => describe_en(setting, record),
        Language::Hebrew => describe_he(setting, record),
    }
}

fn level_en(level: ScaleLevel) -> &'static str {
    match level {
        ScaleLevel::Normal => "normal",
        ScaleLevel::Large => "large",
        ScaleLevel::Larger => "larger",
    }
}

fn level_he(level: ScaleLevel) -> &'static str {
    match level {
        ScaleLevel::Normal => "רגיל",
        ScaleLevel::Large => "גדול",
        ScaleLevel::Larger => "גדול מאוד",
    }
}

fn on_off_en(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn on_off_he(on: bool) -> &'static str {
    if on { "פועל" } else { "כבוי" }
}

fn describe_en(setting: ChangedSetting, record: &PreferenceRecord) -> String {
    match setting {
        ChangedSetting::TextScale => format!("Text size {}", level_en(record.text_scale)),
        ChangedSetting::HighContrast => format!("High contrast {}", on_off_en(record.high_contrast)),
        ChangedSetting::ReducedMotion => {
            format!("Reduced motion {}", on_off_en(record.reduced_motion))
        }
        ChangedSetting::CursorScale => format!("Cursor size {}", level_en(record.cursor_scale)),
        ChangedSetting::DarkMode => format!("Dark mode {}", on_off_en(record.dark_mode)),
        ChangedSetting::ScreenReaderMode => {
            format!("Screen reader mode {}", on_off_en(record.screen_reader_mode))
        }
        ChangedSetting::Language => "Language English".to_string(),
    }
}

fn describe_he(setting: ChangedSetting, record: &PreferenceRecord) -> String {
    match setting {
        ChangedSetting::TextScale => format!("גודל טקסט {}", level_he(record.text_scale)),
        ChangedSetting::HighContrast => {
            format!("ניגודיות גבוהה {}", on_off_he(record.high_contrast))
        }
        ChangedSetting::ReducedMotion => {
            format!("הפחתת תנועה {}", on_off_he(record.reduced_motion))
        }
        ChangedSetting::CursorScale => format!("גודל סמן {}", level_he(record.cursor_scale)),
        ChangedSetting::DarkMode => format!("מצב כהה {}", on_off_he(record.dark_mode)),
        ChangedSetting::ScreenReaderMode => {
            format!("מצב קורא מסך {}", on_off_he(record.screen_reader_mode))
        }
        ChangedSetting::Language => "שפה עברית".to_string(),
    }
}

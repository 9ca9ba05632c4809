//! Preference record
//!
//! The durable `PreferenceRecord` and its field types. Ordinal scale
//! fields are closed three-variant enums so out-of-range values are
//! unrepresentable; on the wire they are the small integers 0/1/2.

use serde::{Deserialize, Serialize};

use atelier_dom::TextDirection;

/// Persisted schema version; records with any other version are discarded
pub const SCHEMA_VERSION: u32 = 1;

/// Rejected wire value for a scale level
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("invalid scale level {0}, expected 0..=2")]
pub struct InvalidLevel(pub u8);

/// Ordinal size level for text and cursor scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ScaleLevel {
    #[default]
    Normal,
    Large,
    Larger,
}

impl ScaleLevel {
    /// Root font-size percentage for this level
    pub fn font_size_pct(&self) -> f64 {
        match self {
            Self::Normal => 100.0,
            Self::Large => 112.5,
            Self::Larger => 125.0,
        }
    }

    /// Cursor class token for this level, `None` at the default size
    pub fn cursor_class(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Large => Some("cursor-large"),
            Self::Larger => Some("cursor-larger"),
        }
    }
}

impl From<ScaleLevel> for u8 {
    fn from(level: ScaleLevel) -> u8 {
        match level {
            ScaleLevel::Normal => 0,
            ScaleLevel::Large => 1,
            ScaleLevel::Larger => 2,
        }
    }
}

impl TryFrom<u8> for ScaleLevel {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Large),
            2 => Ok(Self::Larger),
            other => Err(InvalidLevel(other)),
        }
    }
}

/// Interface language, driving text direction and announcement wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "he")]
    Hebrew,
}

impl Language {
    /// BCP 47 tag for the root `lang` attribute
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hebrew => "he",
        }
    }

    /// Root text direction
    pub fn direction(&self) -> TextDirection {
        match self {
            Self::English => TextDirection::Ltr,
            Self::Hebrew => TextDirection::Rtl,
        }
    }
}

/// The full accessibility preference record
///
/// One flat record, persisted whole after every mutation. Missing fields
/// deserialize to their defaults so a record written by an older build
/// with the same version still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub text_scale: ScaleLevel,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub cursor_scale: ScaleLevel,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub screen_reader_mode: bool,
    #[serde(default)]
    pub language: Language,
}

fn current_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            text_scale: ScaleLevel::Normal,
            high_contrast: false,
            reduced_motion: false,
            cursor_scale: ScaleLevel::Normal,
            dark_mode: false,
            screen_reader_mode: false,
            language: Language::English,
        }
    }
}

//! Document root
//!
//! The mutable document-level surface the preference engine applies side
//! effects to: root classes, root font-size style, `dir`/`lang`
//! attributes, and the live-announcement node.

use tracing::trace;

use crate::token_list::TokenList;

/// Text direction for the root `dir` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Live region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Visually hidden live-announcement node
///
/// Text changes on this node are announced by assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegion {
    id: String,
    politeness: Politeness,
    atomic: bool,
    visually_hidden: bool,
    text: String,
}

impl LiveRegion {
    /// Create a polite, atomic, visually hidden region
    pub fn polite(id: &str) -> Self {
        Self {
            id: id.to_string(),
            politeness: Politeness::Polite,
            atomic: true,
            visually_hidden: true,
            text: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    pub fn is_visually_hidden(&self) -> bool {
        self.visually_hidden
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the node text, triggering an announcement
    pub fn set_text(&mut self, text: &str) {
        trace!(id = %self.id, %text, "live region announce");
        self.text = text.to_string();
    }
}

/// Document root state
///
/// Defaults match an untouched document: no classes, 100% font size,
/// `dir=ltr`, `lang=en`, no live region.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    classes: TokenList,
    font_size_pct: f64,
    dir: TextDirection,
    lang: String,
    live_region: Option<LiveRegion>,
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self {
            classes: TokenList::new(),
            font_size_pct: 100.0,
            dir: TextDirection::Ltr,
            lang: "en".to_string(),
            live_region: None,
        }
    }
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &TokenList {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    /// Add or remove a root class
    pub fn set_class(&mut self, token: &str, on: bool) {
        self.classes.set(token, on);
    }

    pub fn font_size_pct(&self) -> f64 {
        self.font_size_pct
    }

    /// Set the root font-size style, in percent
    pub fn set_font_size_pct(&mut self, pct: f64) {
        trace!(pct, "root font-size");
        self.font_size_pct = pct;
    }

    pub fn dir(&self) -> TextDirection {
        self.dir
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Set root `dir` and `lang` attributes together
    pub fn set_dir_lang(&mut self, dir: TextDirection, lang: &str) {
        self.dir = dir;
        self.lang = lang.to_string();
    }

    pub fn live_region(&self) -> Option<&LiveRegion> {
        self.live_region.as_ref()
    }

    pub fn live_region_mut(&mut self) -> Option<&mut LiveRegion> {
        self.live_region.as_mut()
    }

    /// Create the live region if absent; keeps the existing node otherwise
    ///
    /// The document carries at most one live region, so a redundant call
    /// never produces a second node.
    pub fn ensure_live_region(&mut self, id: &str) -> &mut LiveRegion {
        if self.live_region.is_none() {
            trace!(id, "live region created");
        }
        self.live_region.get_or_insert_with(|| LiveRegion::polite(id))
    }

    /// Remove the live region if present
    pub fn remove_live_region(&mut self) {
        if self.live_region.take().is_some() {
            trace!("live region removed");
        }
    }
}

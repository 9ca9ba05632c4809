//! Keyboard shortcuts
//!
//! Key/modifier combinations for the global panel shortcuts. Only the
//! combination itself is inspected, never focus context.

/// A key plus modifier state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyCombo {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// The fixed panel toggle combination, Alt+A
    pub fn panel_toggle() -> Self {
        Self::new("a").alt()
    }

    /// True for the cancel key, with or without modifiers
    pub fn is_escape(&self) -> bool {
        self.key.eq_ignore_ascii_case("Escape")
    }

    /// Compare against another combo; letter keys match case-insensitively
    pub fn matches(&self, other: &KeyCombo) -> bool {
        self.key.eq_ignore_ascii_case(&other.key)
            && self.ctrl == other.ctrl
            && self.alt == other.alt
            && self.shift == other.shift
            && self.meta == other.meta
    }

    /// Human-readable form, e.g. "Alt+A"
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".into());
        }
        if self.alt {
            parts.push("Alt".into());
        }
        if self.shift {
            parts.push("Shift".into());
        }
        if self.meta {
            parts.push("Cmd".into());
        }
        if self.key.len() == 1 {
            parts.push(self.key.to_uppercase());
        } else {
            parts.push(self.key.clone());
        }
        parts.join("+")
    }
}

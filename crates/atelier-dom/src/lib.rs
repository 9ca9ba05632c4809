//! Atelier DOM
//!
//! Minimal document-root model for the Atelier accessibility engine.
//! Models the pieces of a document the preference engine touches: root
//! class tokens, root `dir`/`lang` attributes, a root font-size style,
//! and a visually hidden live-announcement node.

pub mod document;
pub mod token_list;

pub use document::{DocumentRoot, LiveRegion, Politeness, TextDirection};
pub use token_list::TokenList;

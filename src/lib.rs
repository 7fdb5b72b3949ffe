//! Materials-list extraction from construction-project PDFs, plus the
//! phase-organized catalog of prompt templates behind the panel.
//!
//! Pipeline: file → transcript → candidate extraction → dedup → export.
//! The catalog is independent static data with a substring filter.

pub mod catalog;
pub mod error;
pub mod export;
pub mod materials;
pub mod pdf_text;
pub mod settings;
pub mod watcher;

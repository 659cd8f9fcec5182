//! # i18n-harvester Library
//!
//! Extracts translatable text from an HTML document, rewrites the document to
//! reference synthetic translation keys, and emits per-language lookup tables
//! for a runtime translation script.
//!
//! ## Module organization
//!
//! - `core` - run options, errors, and the main pipeline
//! - `parsers` - HTML document handling and lookup-file scanning
//! - `network` - translation-service synchronization
//! - `payload` - sync payload assembly and wire types
//! - `builders` - lookup table file emission

pub mod builders;
pub mod core;
pub mod network;
pub mod parsers;
pub mod payload;

// Re-export commonly used items for convenience
pub use crate::core::{harvest_document, HarvestError, HarvestOptions, HarvestSummary};
pub use crate::network::sync::SyncOutcome;
pub use crate::payload::{LanguageTable, TranslationPayload};

//! Network communication with the translation-management service.
//!
//! - `sync` - single-attempt payload submission with local fallback

pub mod sync;

pub use sync::{submit_payload, SyncOutcome};

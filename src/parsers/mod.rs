//! Document parsers.
//!
//! - `html` - DOM parsing, extraction, rewriting, and serialization
//! - `lookup` - best-effort scanning of previously emitted lookup files

pub mod html;
pub mod lookup;

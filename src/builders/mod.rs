//! Output builders.
//!
//! - `lookup_builder` - per-language runtime lookup table files

pub mod lookup_builder;

pub use lookup_builder::write_lookup_files;

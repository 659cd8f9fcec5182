//! HTML document handling.
//!
//! - `dom`: parsing and basic node operations
//! - `extractor`: translation-key extraction and in-place rewriting
//! - `serializer`: DOM serialization back to bytes

pub mod dom;
pub mod extractor;
pub mod serializer;

// Re-export the public API of the submodules
pub use dom::{
    find_nodes, get_node_attr, get_node_name, html_to_dom, set_node_attr, text_content,
};
pub use extractor::{
    ensure_runtime_script, extract_placeholders, extract_visible_text, TRANSLATABLE_TAGS,
};
pub use serializer::serialize_document;

//! Translation-key extraction and in-place document rewriting.
//!
//! Two passes over the parsed document, sharing one monotonic key counter:
//! first visible text inside a fixed set of element names, then `placeholder`
//! attributes on form fields. Each pass rewrites the matched nodes as it goes,
//! so running the passes again over the rewritten document finds nothing.

use std::collections::BTreeMap;

use html5ever::interface::{Attribute, QualName};
use html5ever::tendril::format_tendril;
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::dom::{find_nodes, get_node_attr, get_node_name, set_node_attr, text_content};

/// Element names whose enclosed text is considered visible, translatable copy.
pub const TRANSLATABLE_TAGS: [&str; 10] = [
    "label", "button", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Extracts visible text from translatable elements and rewrites them in place.
///
/// An element qualifies when its name is in [`TRANSLATABLE_TAGS`] and its
/// children are text-only with non-whitespace content; nested markup
/// disqualifies it. Every qualifying occurrence gets its own `label_<n>` key,
/// so repeated identical text yields as many keys as occurrences. Each matched
/// element gains a `data-i18n` attribute referencing its key and has its body
/// emptied; the text is re-injected at runtime by the translation script.
///
/// Returns the extracted key/text entries; `counter` advances by one per entry.
pub fn extract_visible_text(
    root: &Handle,
    counter: &mut usize,
) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for node in collect_translatable_nodes(root) {
        let text = match text_content(&node) {
            Some(text) => text.trim().to_string(),
            None => continue,
        };
        if text.is_empty() {
            continue;
        }

        let key = format!("label_{}", counter);
        *counter += 1;

        set_node_attr(&node, "data-i18n", Some(key.clone()));
        node.children.borrow_mut().clear();
        entries.insert(key, text);
    }

    entries
}

/// Extracts `placeholder` attributes from form fields and rewrites them.
///
/// Matching is by literal attribute value: form fields sharing the exact same
/// placeholder text within one call collapse to a single key, applied to every
/// occurrence. The `placeholder` attribute is removed and replaced by a
/// `data-i18n-placeholder` attribute referencing the key.
///
/// Returns one entry per distinct placeholder value; `counter` advances by one
/// per entry.
pub fn extract_placeholders(
    root: &Handle,
    counter: &mut usize,
) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut keys_by_value: BTreeMap<String, String> = BTreeMap::new();

    for node in collect_placeholder_nodes(root) {
        let value = match get_node_attr(&node, "placeholder") {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        let key = keys_by_value
            .entry(value.clone())
            .or_insert_with(|| {
                let key = format!("placeholder_{}", counter);
                *counter += 1;
                entries.insert(key.clone(), value);
                key
            })
            .clone();

        set_node_attr(&node, "placeholder", None);
        set_node_attr(&node, "data-i18n-placeholder", Some(key));
    }

    entries
}

/// Appends the runtime translation script to `<body>` unless some `<script>`
/// already references it.
///
/// The parser materializes `<body>` for every document, so there is always a
/// place to append to.
pub fn ensure_runtime_script(dom: &RcDom, script_src: &str) {
    let script_name = script_src.rsplit('/').next().unwrap_or(script_src);

    for script_node in find_nodes(&dom.document, vec!["script"]).iter() {
        if let Some(src) = get_node_attr(script_node, "src") {
            if src.contains(script_name) {
                return;
            }
        }
    }

    let script_node = create_element(
        dom,
        QualName::new(None, ns!(), LocalName::from("script")),
        vec![Attribute {
            name: QualName::new(None, ns!(), LocalName::from("src")),
            value: format_tendril!("{}", script_src),
        }],
    );

    if let Some(body_node) = find_nodes(&dom.document, vec!["html", "body"]).first() {
        body_node.children.borrow_mut().push(script_node.clone());
    }
}

/// Collects qualifying visible-text elements in document order.
///
/// Collection happens before any rewrite so that clearing element bodies never
/// races the traversal's child borrows.
fn collect_translatable_nodes(node: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();

    if let Some(name) = get_node_name(node) {
        if TRANSLATABLE_TAGS.contains(&name) && text_content(node).is_some() {
            found.push(node.clone());
            // Qualifying elements have text-only children, nothing to recurse into
            return found;
        }
    }

    for child in node.children.borrow().iter() {
        found.append(&mut collect_translatable_nodes(child));
    }

    found
}

/// Collects `input` and `textarea` elements in document order.
fn collect_placeholder_nodes(node: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();

    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == "input" || &*name.local == "textarea" {
            found.push(node.clone());
        }
    }

    for child in node.children.borrow().iter() {
        found.append(&mut collect_placeholder_nodes(child));
    }

    found
}

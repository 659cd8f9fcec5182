//! Sync payload assembly and wire types.
//!
//! The payload shape matches the translation-management service API: a
//! customer identifier, a default language code, and a sequence of language
//! tables. Keys travel namespaced with the source document's filename stem;
//! lookup files are emitted with the namespace stripped again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::HarvestOptions;

/// One language's key→text table, as sent to and received from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTable {
    pub language_code: String,
    pub translations: BTreeMap<String, String>,
}

/// The sync request and response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPayload {
    pub customer_id: String,
    pub default_language_code: String,
    pub languages: Vec<LanguageTable>,
}

/// Separator between the document namespace and the unqualified key.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Assembles the outbound payload from prior and freshly extracted entries.
///
/// Fresh entries win on key collision (not expected, since the key counter is
/// seeded past the existing count, but defined). Every key is namespaced as
/// `<stem>.<key>`. The result carries exactly one language table, for the
/// default language. Pure assembly, no I/O.
pub fn build_payload(
    options: &HarvestOptions,
    document_stem: &str,
    existing: BTreeMap<String, String>,
    fresh: BTreeMap<String, String>,
) -> TranslationPayload {
    let mut merged = existing;
    merged.extend(fresh);

    let translations = merged
        .into_iter()
        .map(|(key, text)| {
            (
                format!("{}{}{}", document_stem, NAMESPACE_SEPARATOR, key),
                text,
            )
        })
        .collect();

    TranslationPayload {
        customer_id: options.customer_id.clone(),
        default_language_code: options.default_language.clone(),
        languages: vec![LanguageTable {
            language_code: options.default_language.clone(),
            translations,
        }],
    }
}

/// Strips the document namespace from a key, if present.
///
/// The unqualified key is the substring after the last separator; keys without
/// a separator are already unqualified.
pub fn unqualified_key(full_key: &str) -> &str {
    full_key
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or(full_key)
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::builders::lookup_builder::write_lookup_files;
use crate::network::sync::submit_payload;
use crate::parsers::html::{
    ensure_runtime_script, extract_placeholders, extract_visible_text, html_to_dom,
    serialize_document,
};
use crate::parsers::lookup::load_existing_translations;
use crate::payload::build_payload;

/// Errors that can abort a harvest run.
///
/// Only document and lookup-file I/O is fatal; a missing prior lookup file and
/// an unreachable sync endpoint are both handled inside the pipeline and never
/// surface here.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("unable to read document {}: {source}", path.display())]
    DocumentRead { path: PathBuf, source: io::Error },

    #[error("unable to write document {}: {source}", path.display())]
    DocumentWrite { path: PathBuf, source: io::Error },

    #[error("unable to write lookup file {}: {source}", path.display())]
    LookupWrite { path: PathBuf, source: io::Error },
}

/// Run configuration.
///
/// There is no CLI surface; every run uses these values, and the defaults
/// mirror the deployment layout (the binary is invoked from the directory that
/// holds the lookup files, next to the document being processed).
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Document to scan and rewrite in place.
    pub document_path: PathBuf,
    /// Directory that receives the emitted `_<lang>.js` lookup files and holds
    /// the previously emitted default-language file, if any.
    pub lookup_dir: PathBuf,
    /// Customer identifier sent with the sync payload.
    pub customer_id: String,
    /// Language code of the document's source text.
    pub default_language: String,
    /// Translation-management service endpoint.
    pub endpoint: String,
    /// Bearer credential for the sync request.
    pub api_token: String,
    /// Runtime script path injected into the document when absent.
    pub runtime_script_src: String,
    /// Charset label used when decoding the document; empty means UTF-8.
    pub encoding: String,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("input.html"),
            lookup_dir: PathBuf::from("translations"),
            customer_id: "123456".to_string(),
            default_language: "en".to_string(),
            endpoint: "http://localhost:8080/api/translations".to_string(),
            api_token: "dummy-token".to_string(),
            runtime_script_src: "translations/translation.js".to_string(),
            encoding: String::new(),
        }
    }
}

impl HarvestOptions {
    /// Path of the default-language lookup file, e.g. `translations/_en.js`.
    pub fn default_lookup_path(&self) -> PathBuf {
        self.lookup_dir
            .join(format!("_{}.js", self.default_language))
    }
}

/// What a completed run did, for logging and tests.
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    /// Entries carried over from the previously emitted lookup file.
    pub existing_entries: usize,
    /// Freshly extracted entries (labels and placeholders).
    pub new_entries: usize,
    /// Whether the effective result came from the remote service.
    pub synced_remotely: bool,
    /// Lookup files written, one per language in the effective result.
    pub lookup_files: Vec<PathBuf>,
}

/// Runs the whole pipeline against the configured document.
///
/// Reads the document, extracts visible text and placeholders into keyed
/// entries, rewrites the document in place, submits the merged entries to the
/// translation service (falling back to the local payload on any failure), and
/// emits one lookup file per language in the effective result.
pub fn harvest_document(options: &HarvestOptions) -> Result<HarvestSummary, HarvestError> {
    // Prior state; a missing file is simply an empty map.
    let existing = load_existing_translations(&options.default_lookup_path());
    debug!(count = existing.len(), "loaded existing translations");

    let data = fs::read(&options.document_path).map_err(|source| HarvestError::DocumentRead {
        path: options.document_path.clone(),
        source,
    })?;
    let dom = html_to_dom(&data, options.encoding.clone());

    // The counter is seeded past everything already known so that re-runs never
    // re-number keys that are still referenced by emitted lookup files.
    let mut counter = existing.len() + 1;
    let mut fresh = extract_visible_text(&dom.document, &mut counter);
    fresh.append(&mut extract_placeholders(&dom.document, &mut counter));
    info!(
        new = fresh.len(),
        existing = existing.len(),
        "extraction finished"
    );

    ensure_runtime_script(&dom, &options.runtime_script_src);

    let html = serialize_document(dom, options.encoding.clone());
    fs::write(&options.document_path, html).map_err(|source| HarvestError::DocumentWrite {
        path: options.document_path.clone(),
        source,
    })?;

    let stem = document_stem(&options.document_path);
    let new_entries = fresh.len();
    let existing_entries = existing.len();
    let payload = build_payload(options, &stem, existing, fresh);

    let outcome = submit_payload(options, payload);
    let synced_remotely = outcome.is_remote();

    let lookup_files = write_lookup_files(&options.lookup_dir, outcome.payload())?;

    Ok(HarvestSummary {
        existing_entries,
        new_entries,
        synced_remotely,
        lookup_files,
    })
}

/// Filename stem used to namespace outbound translation keys.
fn document_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string())
}

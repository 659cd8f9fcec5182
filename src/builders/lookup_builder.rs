//! Per-language lookup table emission.
//!
//! Each language table in the effective sync result becomes one `_<lang>.js`
//! file holding a plain object literal the runtime translation script reads:
//!
//! ```text
//! var translations_en = {
//!     "label_1": "Welcome",
//! };
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::HarvestError;
use crate::payload::{unqualified_key, TranslationPayload};

/// Writes one lookup file per language table in the payload.
///
/// Keys are de-namespaced back to their unqualified form. Existing files of
/// the same name are overwritten unconditionally. Returns the written paths.
pub fn write_lookup_files(
    lookup_dir: &Path,
    payload: &TranslationPayload,
) -> Result<Vec<PathBuf>, HarvestError> {
    fs::create_dir_all(lookup_dir).map_err(|source| HarvestError::LookupWrite {
        path: lookup_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();

    for language in &payload.languages {
        let path = lookup_dir.join(format!("_{}.js", language.language_code));
        let contents = render_lookup_table(&language.language_code, &language.translations);

        fs::write(&path, contents).map_err(|source| HarvestError::LookupWrite {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "generated lookup file");
        written.push(path);
    }

    Ok(written)
}

/// Renders one language table as a JavaScript variable assignment.
fn render_lookup_table(
    language_code: &str,
    translations: &std::collections::BTreeMap<String, String>,
) -> String {
    let mut out = format!("var translations_{} = {{\n", language_code);

    for (full_key, text) in translations {
        out.push_str(&format!(
            "    \"{}\": \"{}\",\n",
            unqualified_key(full_key),
            text
        ));
    }

    out.push_str("};\n");
    out
}

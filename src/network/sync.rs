//! Translation-service synchronization.
//!
//! One blocking POST per run, fail-open: any transport or parse failure makes
//! the locally assembled payload the effective result. Sync is best-effort and
//! never blocks the rest of the pipeline beyond the single attempt.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{info, warn};

use crate::core::HarvestOptions;
use crate::payload::TranslationPayload;

/// The effective sync result, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The service accepted the submission and returned this payload.
    Remote(TranslationPayload),
    /// The submission failed; the locally assembled payload stands in.
    Local(TranslationPayload),
}

impl SyncOutcome {
    /// The payload to emit lookup files from, whatever its provenance.
    pub fn payload(&self) -> &TranslationPayload {
        match self {
            SyncOutcome::Remote(payload) => payload,
            SyncOutcome::Local(payload) => payload,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SyncOutcome::Remote(_))
    }
}

/// Submits the payload to the configured endpoint, once.
///
/// No retry, no backoff, no timeout beyond the transport default. On any
/// failure the submitted payload itself becomes the effective result.
pub fn submit_payload(options: &HarvestOptions, payload: TranslationPayload) -> SyncOutcome {
    match try_submit(options, &payload) {
        Ok(received) => {
            info!(endpoint = %options.endpoint, "received response from translation service");
            SyncOutcome::Remote(received)
        }
        Err(err) => {
            warn!(
                endpoint = %options.endpoint,
                error = %err,
                "failed to reach translation service, using local data"
            );
            SyncOutcome::Local(payload)
        }
    }
}

fn try_submit(
    options: &HarvestOptions,
    payload: &TranslationPayload,
) -> Result<TranslationPayload, Box<dyn std::error::Error>> {
    let body = serde_json::to_string(payload)?;

    let response = Client::new()
        .post(&options.endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", options.api_token))
        .body(body)
        .send()?;

    let received = serde_json::from_str(&response.text()?)?;
    Ok(received)
}

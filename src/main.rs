use tracing::{error, info};

use i18n_harvester::{harvest_document, HarvestOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = HarvestOptions::default();

    match harvest_document(&options) {
        Ok(summary) => {
            info!(
                existing = summary.existing_entries,
                new = summary.new_entries,
                remote = summary.synced_remotely,
                files = summary.lookup_files.len(),
                "harvest finished"
            );
        }
        Err(err) => {
            error!(error = %err, "harvest failed");
            std::process::exit(1);
        }
    }
}

pub mod day_override;
pub mod holiday;
pub mod schedule;
pub mod translations;

use anyhow::Result;
use checktime_core::i18n::CATALOG;
use checktime_core::{ApiClient, Outcome};

/// Load the translation groups a command needs before it runs.
///
/// A failed load is logged and ignored; notices then fall back to raw keys,
/// which is better than refusing to run the command.
pub(crate) async fn preload_translations(client: &ApiClient, groups: &[&str]) {
    for group in groups {
        if let Err(e) = CATALOG
            .load_group(client.http(), client.base_url(), group)
            .await
        {
            tracing::warn!(error = %e, group, "failed to load translations");
        }
    }
}

/// Map an API outcome onto the process exit status. The notifier has
/// already shown the server message, so the error carries only a short
/// generic line instead of repeating it.
pub(crate) fn finish(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Success(_) => Ok(()),
        Outcome::Failure(_) => anyhow::bail!("operation failed"),
    }
}

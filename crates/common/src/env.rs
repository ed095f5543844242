//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the static asset directory is missing; the API still serves without it.
pub async fn ensure_public_dir(public_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(public_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{public_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%public_dir, "public assets directory not found; static assets will 404");
            Ok(())
        }
    }
}

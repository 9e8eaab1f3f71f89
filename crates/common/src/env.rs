//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected paths exist at startup.

use std::path::Path;

/// Ensure the directory holding the data file exists.
pub async fn ensure_data_dir(data_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(data_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

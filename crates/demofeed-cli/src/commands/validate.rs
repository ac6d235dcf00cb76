use std::path::Path;

use anyhow::{Context, Result};
use demofeed_core::FeedbackStore;
use demofeed_infrastructure::FeedbackArchive;

/// Imports the archive into a scratch store and reports what it holds.
pub async fn run(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Archive not found: {}", path.display());
    }

    let archive = FeedbackArchive::new(path.to_path_buf());
    let mut scratch = FeedbackStore::new();
    let sessions = archive
        .load_into(&mut scratch)
        .with_context(|| format!("{} is not a valid feedback archive", path.display()))?;

    println!(
        "✓ {}: {} session(s), {} feedback item(s)",
        path.display(),
        sessions,
        scratch.all_feedback_items().len()
    );
    Ok(())
}

//! On-disk archive of exported feedback sessions.
//!
//! The archive holds exactly the text produced by
//! `FeedbackStore::export_feedback`, so it can be handed to anyone who
//! imports exports by hand.

use std::path::{Path, PathBuf};

use demofeed_core::error::Result;
use demofeed_core::{FeedbackStore, SharedFeedbackStore};

use crate::paths::DemofeedPaths;
use crate::storage::AtomicTextFile;

pub struct FeedbackArchive {
    file: AtomicTextFile,
}

impl FeedbackArchive {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTextFile::new(path),
        }
    }

    /// Archive at `path`, or at the platform default location.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => DemofeedPaths::archive_file()?,
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Replaces the store's closed history with the archive content.
    ///
    /// A missing or blank archive leaves the store untouched and returns 0.
    pub fn load_into(&self, store: &mut FeedbackStore) -> Result<usize> {
        match self.file.load()? {
            Some(text) => {
                let count = store.import_feedback(&text)?;
                tracing::debug!("Loaded {} session(s) from {:?}", count, self.path());
                Ok(count)
            }
            None => Ok(0),
        }
    }

    /// Writes the store's closed history to the archive.
    pub fn save_from(&self, store: &FeedbackStore) -> Result<()> {
        let text = store.export_feedback()?;
        self.file.save(&text)?;
        tracing::info!(
            "Saved {} session(s) to {:?}",
            store.all_sessions().len(),
            self.path()
        );
        Ok(())
    }

    /// Loads the archive into `store`, applies `f` and writes the result
    /// back, holding the archive lock throughout.
    ///
    /// Concurrent updaters each see the other's sessions. Returns the number
    /// of sessions written.
    pub fn update<F>(&self, store: &mut FeedbackStore, f: F) -> Result<usize>
    where
        F: FnOnce(&mut FeedbackStore) -> Result<()>,
    {
        self.file.update(|current| {
            if let Some(text) = current {
                store.import_feedback(&text)?;
            }
            f(store)?;
            store.export_feedback()
        })?;

        let count = store.all_sessions().len();
        tracing::info!("Updated {:?} ({} session(s))", self.path(), count);
        Ok(count)
    }

    pub async fn update_shared<F>(&self, store: &SharedFeedbackStore, f: F) -> Result<usize>
    where
        F: FnOnce(&mut FeedbackStore) -> Result<()>,
    {
        store.with_store_mut(|s| self.update(s, f)).await
    }

    pub async fn load_into_shared(&self, store: &SharedFeedbackStore) -> Result<usize> {
        match self.file.load()? {
            Some(text) => store.import_feedback(&text).await,
            None => Ok(0),
        }
    }

    pub async fn save_from_shared(&self, store: &SharedFeedbackStore) -> Result<()> {
        let text = store.export_feedback().await?;
        self.file.save(&text)
    }
}

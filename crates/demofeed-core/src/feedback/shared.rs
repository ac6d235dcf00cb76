use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::{
    Attendee, FeedbackItem, FeedbackSession, FeedbackType, NewFeedbackItem, Priority, Sentiment,
    SessionOutcome,
};
use super::stats::{FeedbackStats, PipelineSummary};
use super::store::FeedbackStore;
use crate::error::Result;

/// A cloneable handle to one [`FeedbackStore`] shared across tasks.
///
/// Mutations take the write lock and queries take the read lock, so
/// concurrent callers never observe a half-applied operation. Query
/// results are owned copies.
#[derive(Clone)]
pub struct SharedFeedbackStore {
    inner: Arc<RwLock<FeedbackStore>>,
}

impl SharedFeedbackStore {
    pub fn new(store: FeedbackStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn start_session(
        &self,
        customer: &str,
        attendees: Vec<Attendee>,
    ) -> Result<FeedbackSession> {
        let mut store = self.inner.write().await;
        store.start_session(customer, attendees).cloned()
    }

    pub async fn end_session(
        &self,
        outcome: SessionOutcome,
        deal_value: Option<f64>,
        notes: Option<String>,
    ) -> Result<Option<FeedbackSession>> {
        self.inner
            .write()
            .await
            .end_session(outcome, deal_value, notes)
    }

    pub async fn add_feedback_item(&self, new_item: NewFeedbackItem) -> Option<FeedbackItem> {
        self.inner.write().await.add_feedback_item(new_item)
    }

    pub async fn current_session(&self) -> Option<FeedbackSession> {
        self.inner.read().await.current_session().cloned()
    }

    pub async fn all_sessions(&self) -> Vec<FeedbackSession> {
        self.inner.read().await.all_sessions().to_vec()
    }

    pub async fn sessions_by_customer(&self, customer: &str) -> Vec<FeedbackSession> {
        let store = self.inner.read().await;
        store
            .sessions_by_customer(customer)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn sessions_by_outcome(&self, outcome: SessionOutcome) -> Vec<FeedbackSession> {
        let store = self.inner.read().await;
        store
            .sessions_by_outcome(outcome)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn all_feedback_items(&self) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store.all_feedback_items().into_iter().cloned().collect()
    }

    pub async fn feedback_by_type(&self, feedback_type: FeedbackType) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store
            .feedback_by_type(feedback_type)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn feedback_by_priority(&self, priority: Priority) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store
            .feedback_by_priority(priority)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn feedback_by_domain(&self, domain: &str) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store
            .feedback_by_domain(domain)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn feedback_by_sentiment(&self, sentiment: Sentiment) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store
            .feedback_by_sentiment(sentiment)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn feedback_by_tag(&self, tag: &str) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store.feedback_by_tag(tag).into_iter().cloned().collect()
    }

    pub async fn actionable_feedback(&self) -> Vec<FeedbackItem> {
        let store = self.inner.read().await;
        store.actionable_feedback().into_iter().cloned().collect()
    }

    pub async fn feedback_stats(&self) -> FeedbackStats {
        self.inner.read().await.feedback_stats()
    }

    pub async fn pipeline_summary(&self) -> PipelineSummary {
        self.inner.read().await.pipeline_summary()
    }

    pub async fn export_feedback(&self) -> Result<String> {
        self.inner.read().await.export_feedback()
    }

    pub async fn import_feedback(&self, text: &str) -> Result<usize> {
        self.inner.write().await.import_feedback(text)
    }

    pub async fn clear_all_feedback(&self) {
        self.inner.write().await.clear_all_feedback();
    }

    /// Runs `f` with read access to the underlying store.
    pub async fn with_store<R>(&self, f: impl FnOnce(&FeedbackStore) -> R) -> R {
        let store = self.inner.read().await;
        f(&store)
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub async fn with_store_mut<R>(&self, f: impl FnOnce(&mut FeedbackStore) -> R) -> R {
        let mut store = self.inner.write().await;
        f(&mut store)
    }
}

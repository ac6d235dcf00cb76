use std::sync::Arc;

use uuid::Uuid;

use super::export;
use super::model::{
    Attendee, FeedbackItem, FeedbackSession, FeedbackType, NewFeedbackItem, Priority, Sentiment,
    SessionOutcome,
};
use super::stats::{FeedbackStats, PipelineSummary};
use crate::clock::{Clock, SystemClock};
use crate::config::{DuplicateStartPolicy, StoreConfig};
use crate::error::{FeedbackError, Result};

/// Holds the feedback captured during product demos.
///
/// `FeedbackStore` is responsible for:
/// - Opening and closing the (single) active demo session
/// - Appending feedback items to the active session
/// - Keeping closed sessions in the order they ended
/// - Answering analytics queries over the closed history
/// - Exporting and importing that history as JSON text
///
/// Analytics queries only see closed sessions unless
/// [`StoreConfig::include_active_in_analytics`] is set.
pub struct FeedbackStore {
    current: Option<FeedbackSession>,
    sessions: Vec<FeedbackSession>,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackStore {
    /// Creates an empty store with default configuration and the system clock.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            current: None,
            sessions: Vec::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ============================================================================
    // Session lifecycle
    // ============================================================================

    /// Opens a new session and makes it the active one.
    ///
    /// # Errors
    ///
    /// - `Validation` if `customer` is blank
    /// - `SessionAlreadyActive` if a session is open and the duplicate-start
    ///   policy is `Reject`
    pub fn start_session(
        &mut self,
        customer: &str,
        attendees: Vec<Attendee>,
    ) -> Result<&FeedbackSession> {
        if customer.trim().is_empty() {
            return Err(FeedbackError::validation("customer name must not be empty"));
        }

        if let Some(active) = &self.current {
            match self.config.duplicate_start {
                DuplicateStartPolicy::Reject => {
                    return Err(FeedbackError::session_already_active(
                        &active.id,
                        &active.customer,
                    ));
                }
                DuplicateStartPolicy::Replace => {
                    tracing::warn!(
                        "Discarding open session {} ({}) with {} item(s)",
                        active.id,
                        active.customer,
                        active.feedback_items.len()
                    );
                }
            }
        }

        let session = FeedbackSession::open(
            Uuid::new_v4().to_string(),
            self.clock.now(),
            customer.to_string(),
            attendees,
        );
        tracing::info!("Started feedback session {} for {}", session.id, session.customer);

        Ok(self.current.insert(session))
    }

    /// Ends the active session and moves it into the closed history.
    ///
    /// Returns `Ok(None)` without doing anything when no session is open.
    /// On error the active session is left untouched.
    pub fn end_session(
        &mut self,
        outcome: SessionOutcome,
        deal_value: Option<f64>,
        notes: Option<String>,
    ) -> Result<Option<FeedbackSession>> {
        if self.current.is_none() {
            tracing::debug!("end_session called with no active session");
            return Ok(None);
        }

        if !outcome.is_terminal() {
            return Err(FeedbackError::invalid_transition(
                SessionOutcome::InProgress,
                outcome,
            ));
        }
        if let Some(value) = deal_value {
            if !value.is_finite() || value < 0.0 {
                return Err(FeedbackError::validation(format!(
                    "deal value must be a non-negative number, got {}",
                    value
                )));
            }
        }

        let Some(mut session) = self.current.take() else {
            return Ok(None);
        };

        let elapsed_ms = self
            .clock
            .now()
            .signed_duration_since(session.date)
            .num_milliseconds()
            .max(0);
        session.duration = (elapsed_ms as f64 / 60_000.0).round() as u32;
        session.outcome = outcome;
        session.deal_value = deal_value;
        session.notes = notes.unwrap_or_default();

        tracing::info!(
            "Ended feedback session {} ({}) as {} after {} min with {} item(s)",
            session.id,
            session.customer,
            session.outcome,
            session.duration,
            session.feedback_items.len()
        );

        self.sessions.push(session.clone());
        Ok(Some(session))
    }

    /// Captures an item into the active session.
    ///
    /// Returns `None` and changes nothing when no session is open.
    pub fn add_feedback_item(&mut self, new_item: NewFeedbackItem) -> Option<FeedbackItem> {
        let Some(session) = self.current.as_mut() else {
            tracing::debug!("Dropped feedback item: no active session");
            return None;
        };

        let item = new_item.into_item(Uuid::new_v4().to_string(), self.clock.now());
        tracing::debug!(
            "Captured {} item {} in session {}",
            item.feedback_type,
            item.id,
            session.id
        );
        session.feedback_items.push(item.clone());
        Some(item)
    }

    pub fn current_session(&self) -> Option<&FeedbackSession> {
        self.current.as_ref()
    }

    // ============================================================================
    // Session queries
    // ============================================================================

    /// Closed sessions in the order they ended.
    pub fn all_sessions(&self) -> &[FeedbackSession] {
        &self.sessions
    }

    pub fn sessions_by_customer(&self, customer: &str) -> Vec<&FeedbackSession> {
        self.sessions
            .iter()
            .filter(|s| s.customer == customer)
            .collect()
    }

    pub fn sessions_by_outcome(&self, outcome: SessionOutcome) -> Vec<&FeedbackSession> {
        self.sessions
            .iter()
            .filter(|s| s.outcome == outcome)
            .collect()
    }

    pub fn pipeline_summary(&self) -> PipelineSummary {
        PipelineSummary::from_sessions(&self.sessions)
    }

    // ============================================================================
    // Feedback queries
    // ============================================================================

    fn analytics_items(&self) -> impl Iterator<Item = &FeedbackItem> {
        let active = self
            .current
            .as_ref()
            .filter(|_| self.config.include_active_in_analytics);

        self.sessions
            .iter()
            .chain(active)
            .flat_map(|s| s.feedback_items.iter())
    }

    /// Items of every closed session, session order then capture order.
    ///
    /// With [`StoreConfig::include_active_in_analytics`] set, the active
    /// session's items follow the closed ones.
    pub fn all_feedback_items(&self) -> Vec<&FeedbackItem> {
        self.analytics_items().collect()
    }

    pub fn feedback_by_type(&self, feedback_type: FeedbackType) -> Vec<&FeedbackItem> {
        self.analytics_items()
            .filter(|i| i.feedback_type == feedback_type)
            .collect()
    }

    pub fn feedback_by_priority(&self, priority: Priority) -> Vec<&FeedbackItem> {
        self.analytics_items()
            .filter(|i| i.priority == priority)
            .collect()
    }

    pub fn feedback_by_sentiment(&self, sentiment: Sentiment) -> Vec<&FeedbackItem> {
        self.analytics_items()
            .filter(|i| i.sentiment == sentiment)
            .collect()
    }

    pub fn feedback_by_domain(&self, domain: &str) -> Vec<&FeedbackItem> {
        self.analytics_items()
            .filter(|i| i.context.domain.as_deref() == Some(domain))
            .collect()
    }

    pub fn feedback_by_tag(&self, tag: &str) -> Vec<&FeedbackItem> {
        self.analytics_items().filter(|i| i.has_tag(tag)).collect()
    }

    pub fn actionable_feedback(&self) -> Vec<&FeedbackItem> {
        self.analytics_items().filter(|i| i.actionable).collect()
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        FeedbackStats::from_items(self.analytics_items())
    }

    // ============================================================================
    // Export / import
    // ============================================================================

    /// Serializes the closed-session history. The active session is not included.
    pub fn export_feedback(&self) -> Result<String> {
        export::encode(&self.sessions, self.clock.now())
    }

    /// Replaces the closed-session history with the sessions in `text`.
    ///
    /// The active session is kept. On error the history is unchanged.
    ///
    /// # Returns
    ///
    /// The number of sessions imported.
    pub fn import_feedback(&mut self, text: &str) -> Result<usize> {
        let sessions = export::decode(text).inspect_err(|e| {
            tracing::warn!("Rejected feedback import: {}", e);
        })?;

        let count = sessions.len();
        self.sessions = sessions;
        tracing::info!("Imported {} feedback session(s)", count);
        Ok(count)
    }

    /// Drops the closed history and the active session.
    pub fn clear_all_feedback(&mut self) {
        if let Some(active) = &self.current {
            tracing::info!("Clearing open session {} ({})", active.id, active.customer);
        }
        self.current = None;
        self.sessions.clear();
    }
}

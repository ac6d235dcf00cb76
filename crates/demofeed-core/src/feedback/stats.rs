//! Aggregate views over captured feedback and closed sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::model::{
    FeedbackItem, FeedbackSession, FeedbackType, Priority, Sentiment, SessionOutcome,
};

/// Counts over a set of feedback items.
///
/// Each breakdown has an entry for every variant, so its values always sum
/// to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total: usize,
    pub by_type: BTreeMap<FeedbackType, usize>,
    pub by_sentiment: BTreeMap<Sentiment, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub actionable: usize,
}

impl FeedbackStats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a FeedbackItem>) -> Self {
        let mut stats = Self {
            total: 0,
            by_type: zeroed(),
            by_sentiment: zeroed(),
            by_priority: zeroed(),
            actionable: 0,
        };

        for item in items {
            stats.total += 1;
            *stats.by_type.entry(item.feedback_type).or_default() += 1;
            *stats.by_sentiment.entry(item.sentiment).or_default() += 1;
            *stats.by_priority.entry(item.priority).or_default() += 1;
            if item.actionable {
                stats.actionable += 1;
            }
        }

        stats
    }

    pub fn count_type(&self, feedback_type: FeedbackType) -> usize {
        self.by_type.get(&feedback_type).copied().unwrap_or(0)
    }

    pub fn count_sentiment(&self, sentiment: Sentiment) -> usize {
        self.by_sentiment.get(&sentiment).copied().unwrap_or(0)
    }

    pub fn count_priority(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}

/// Deal outcomes across closed sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub sessions: usize,
    /// Terminal outcomes only
    pub by_outcome: BTreeMap<SessionOutcome, usize>,
    pub total_deal_value: f64,
    pub won_deal_value: f64,
}

impl PipelineSummary {
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a FeedbackSession>) -> Self {
        let mut summary = Self {
            sessions: 0,
            by_outcome: SessionOutcome::iter()
                .filter(|o| o.is_terminal())
                .map(|o| (o, 0))
                .collect(),
            total_deal_value: 0.0,
            won_deal_value: 0.0,
        };

        for session in sessions {
            summary.sessions += 1;
            *summary.by_outcome.entry(session.outcome).or_default() += 1;
            let value = session.deal_value.unwrap_or(0.0);
            summary.total_deal_value += value;
            if session.outcome == SessionOutcome::Won {
                summary.won_deal_value += value;
            }
        }

        summary
    }

    /// Share of closed sessions that were won, 0.0 with no sessions.
    pub fn win_rate(&self) -> f64 {
        if self.sessions == 0 {
            return 0.0;
        }
        let won = self.by_outcome.get(&SessionOutcome::Won).copied().unwrap_or(0);
        won as f64 / self.sessions as f64
    }
}

fn zeroed<K: IntoEnumIterator + Ord>() -> BTreeMap<K, usize> {
    K::iter().map(|k| (k, 0)).collect()
}

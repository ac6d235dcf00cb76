//! Feedback domain model.
//!
//! Sessions and feedback items as they are captured during a product demo.
//! Field names serialize camelCase and enum values as their kebab-case
//! literals, which is the format exported archives use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of observation captured during a demo.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeedbackType {
    /// A verbatim remark worth repeating.
    Quote,
    /// An operational problem the customer described.
    PainPoint,
    /// A reason the customer gave not to buy.
    Objection,
    /// Something the product does not do yet.
    FeatureRequest,
    /// A moment that landed well.
    Win,
    /// A general observation about the account.
    Insight,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Result of a demo session.
///
/// A session is `InProgress` while it is open and moves to exactly one of
/// the terminal outcomes when it ends.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionOutcome {
    Won,
    Lost,
    InProgress,
    Pilot,
}

impl SessionOutcome {
    /// Returns true for outcomes a session can end with.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionOutcome::InProgress)
    }
}

/// Optional associations of a feedback item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi: Option<String>,
}

/// A single observation captured during a demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    /// Unique item identifier (UUID format)
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub content: String,
    #[serde(default)]
    pub context: FeedbackContext,
    #[serde(default)]
    pub tags: Vec<String>,
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    pub created_by: String,
}

impl FeedbackItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Fields supplied by the caller when capturing an item.
///
/// The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedbackItem {
    pub feedback_type: FeedbackType,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub content: String,
    pub context: FeedbackContext,
    pub tags: Vec<String>,
    pub actionable: bool,
    pub follow_up: Option<String>,
    pub created_by: String,
}

impl NewFeedbackItem {
    /// Creates an item with empty context, no tags, not actionable.
    pub fn new(
        feedback_type: FeedbackType,
        sentiment: Sentiment,
        priority: Priority,
        content: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            feedback_type,
            sentiment,
            priority,
            content: content.into(),
            context: FeedbackContext::default(),
            tags: Vec::new(),
            actionable: false,
            follow_up: None,
            created_by: created_by.into(),
        }
    }

    // Builder methods
    pub fn with_context(mut self, context: FeedbackContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn actionable(mut self, actionable: bool) -> Self {
        self.actionable = actionable;
        self
    }

    pub fn with_follow_up(mut self, note: impl Into<String>) -> Self {
        self.follow_up = Some(note.into());
        self
    }

    pub(crate) fn into_item(self, id: String, timestamp: DateTime<Utc>) -> FeedbackItem {
        FeedbackItem {
            id,
            timestamp,
            feedback_type: self.feedback_type,
            sentiment: self.sentiment,
            priority: self.priority,
            content: self.content,
            context: self.context,
            tags: self.tags,
            actionable: self.actionable,
            follow_up: self.follow_up,
            created_by: self.created_by,
        }
    }
}

/// A demo attendee on the customer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub role: String,
    pub persona: String,
}

impl Attendee {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            persona: persona.into(),
        }
    }
}

/// One continuous demo interaction.
///
/// A session is mutable only while it is the store's active session. Once
/// ended it lives in the closed history and is never changed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Session start time
    pub date: DateTime<Utc>,
    pub customer: String,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    /// Length in whole minutes, 0 while the session is open
    pub duration: u32,
    #[serde(default)]
    pub feedback_items: Vec<FeedbackItem>,
    pub outcome: SessionOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_value: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

impl FeedbackSession {
    pub(crate) fn open(
        id: String,
        date: DateTime<Utc>,
        customer: String,
        attendees: Vec<Attendee>,
    ) -> Self {
        Self {
            id,
            date,
            customer,
            attendees,
            duration: 0,
            feedback_items: Vec::new(),
            outcome: SessionOutcome::InProgress,
            deal_value: None,
            notes: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.outcome == SessionOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_enum_literals() {
        assert_eq!(FeedbackType::PainPoint.to_string(), "pain-point");
        let literal: &str = FeedbackType::FeatureRequest.as_ref();
        assert_eq!(literal, "feature-request");
        assert_eq!(SessionOutcome::InProgress.to_string(), "in-progress");
        assert_eq!(Priority::from_str("critical").unwrap(), Priority::Critical);
        assert!(Sentiment::from_str("angry").is_err());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = NewFeedbackItem::new(
            FeedbackType::FeatureRequest,
            Sentiment::Neutral,
            Priority::Medium,
            "Export to Epic",
            "SE1",
        )
        .with_follow_up("Check integration roadmap")
        .into_item("item-1".to_string(), Utc::now());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "feature-request");
        assert_eq!(json["followUp"], "Check integration roadmap");
        assert_eq!(json["createdBy"], "SE1");
        // Empty context fields are omitted
        assert_eq!(json["context"], serde_json::json!({}));
    }

    #[test]
    fn test_open_session_defaults() {
        let session = FeedbackSession::open(
            "s-1".to_string(),
            Utc::now(),
            "Baptist Health".to_string(),
            vec![Attendee::new("Jane", "CMO", "executive")],
        );
        assert!(session.is_open());
        assert_eq!(session.duration, 0);
        assert!(session.feedback_items.is_empty());
        assert!(session.notes.is_empty());
        assert!(!SessionOutcome::InProgress.is_terminal());
        assert!(SessionOutcome::Pilot.is_terminal());
    }
}
